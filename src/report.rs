//! Plain-text summaries printed by the CLI.

#[cfg(test)]
#[path = "report_test.rs"]
mod report_test;

use canvas::scene::{AreaSummary, Scene};

pub fn stats(summary: &AreaSummary) -> String {
    format!(
        "objects:  {}\nbuilding: {:.1} m²\nparking:  {:.1} m²\ngreen:    {:.1} m²\n",
        summary.total_objects, summary.building, summary.parking, summary.green
    )
}

/// One line per layer in list order; the current layer is starred.
pub fn layers(scene: &Scene) -> String {
    let mut out = String::new();
    for layer in scene.layers() {
        let marker = if layer.id == scene.current_layer() { '*' } else { ' ' };
        let state = if layer.visible { "visible" } else { "hidden" };
        let count = scene.layer_object_count(layer.id);
        out.push_str(&format!("{marker} {}\t{}\t{state}\t{count} objects\n", layer.id, layer.name));
    }
    out
}
