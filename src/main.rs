mod plan_file;
mod report;

use std::path::PathBuf;
use std::process::ExitCode;

use canvas::camera::Point;
use canvas::catalog::Category;
use canvas::consts::GRID_SIZE;
use canvas::doc::ObjectProperty;
use canvas::document::PlanError;
use canvas::engine::EngineCore;
use clap::{Parser, Subcommand};

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error(transparent)]
    Plan(#[from] PlanError),
    #[error("failed to format timestamp: {0}")]
    Timestamp(#[from] time::error::Format),
}

#[derive(Parser, Debug)]
#[command(name = "siteplan", about = "Create, inspect and edit site plan documents")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Write an empty plan.
    New {
        #[arg(env = "SITEPLAN_FILE")]
        path: PathBuf,
        #[arg(long, default_value_t = GRID_SIZE)]
        grid_size: f64,
        #[arg(long, default_value_t = 1.0)]
        scale: f64,
        #[arg(long, default_value_t = false)]
        no_snap: bool,
    },
    /// Print the object count and area totals.
    Stats {
        #[arg(env = "SITEPLAN_FILE")]
        path: PathBuf,
    },
    /// Rewrite a plan in the current format.
    Upgrade {
        input: PathBuf,
        #[arg(long, help = "Output path; defaults to rewriting the input")]
        output: Option<PathBuf>,
    },
    /// Place an object from the catalog.
    Add {
        #[arg(env = "SITEPLAN_FILE")]
        path: PathBuf,
        #[arg(long)]
        category: Category,
        #[arg(long)]
        subtype: String,
        #[arg(long, allow_negative_numbers = true)]
        x: f64,
        #[arg(long, allow_negative_numbers = true)]
        y: f64,
        #[arg(long)]
        name: Option<String>,
    },
    /// List layers with visibility and object counts.
    Layers {
        #[arg(env = "SITEPLAN_FILE")]
        path: PathBuf,
    },
    /// Append a layer.
    AddLayer {
        #[arg(env = "SITEPLAN_FILE")]
        path: PathBuf,
    },
}

fn main() -> ExitCode {
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let cli = Cli::parse();
    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "command failed");
            ExitCode::FAILURE
        }
    }
}

fn run(command: Command) -> Result<(), CliError> {
    match command {
        Command::New { path, grid_size, scale, no_snap } => {
            if !scale.is_finite() || scale <= 0.0 {
                return Err(PlanError::InvalidScale(scale).into());
            }
            let mut core = EngineCore::new();
            core.config.grid_size = grid_size;
            core.config.scale = scale;
            core.set_snap_to_grid(!no_snap);
            plan_file::save(&path, &core)?;
            println!("created {}", path.display());
            Ok(())
        }
        Command::Stats { path } => {
            let core = plan_file::load(&path)?;
            print!("{}", report::stats(&core.stats()));
            Ok(())
        }
        Command::Upgrade { input, output } => {
            let core = plan_file::load(&input)?;
            let output = output.unwrap_or(input);
            plan_file::save(&output, &core)?;
            println!("wrote {} objects to {}", core.scene.len(), output.display());
            Ok(())
        }
        Command::Add { path, category, subtype, x, y, name } => {
            let mut core = plan_file::load(&path)?;
            core.add_object_at(Point::new(x, y), category, &subtype);
            if let Some(name) = name {
                core.set_property(ObjectProperty::Name(name));
            }
            plan_file::save(&path, &core)?;
            if let Some(obj) = core.scene.selected_object() {
                let anchor = obj.anchor();
                println!("added #{} {} at ({}, {})", obj.id, obj.name, anchor.x, anchor.y);
            }
            Ok(())
        }
        Command::Layers { path } => {
            let core = plan_file::load(&path)?;
            print!("{}", report::layers(&core.scene));
            Ok(())
        }
        Command::AddLayer { path } => {
            let mut core = plan_file::load(&path)?;
            core.add_layer();
            plan_file::save(&path, &core)?;
            print!("{}", report::layers(&core.scene));
            Ok(())
        }
    }
}
