//! Plan documents on disk.

#[cfg(test)]
#[path = "plan_file_test.rs"]
mod plan_file_test;

use std::fs;
use std::path::Path;

use canvas::engine::EngineCore;
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

use crate::CliError;

/// Read a plan into a fresh engine.
pub fn load(path: &Path) -> Result<EngineCore, CliError> {
    let text = fs::read_to_string(path).map_err(|source| CliError::Read { path: path.to_owned(), source })?;
    let mut core = EngineCore::new();
    core.load_json(&text)?;
    Ok(core)
}

/// Write the engine's plan, stamped with the current UTC time.
pub fn save(path: &Path, core: &EngineCore) -> Result<(), CliError> {
    let timestamp = OffsetDateTime::now_utc().format(&Rfc3339)?;
    let json = core.document(timestamp).to_json_pretty()?;
    fs::write(path, json).map_err(|source| CliError::Write { path: path.to_owned(), source })?;
    tracing::info!(path = %path.display(), objects = core.scene.len(), "plan saved");
    Ok(())
}
