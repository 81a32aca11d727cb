//! Plan-wide settings that travel with the document.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Serialize};

use crate::camera::Point;
use crate::consts::{DEFAULT_OBJECT_SIZE, GRID_SIZE, MAX_ZOOM, MIN_ZOOM};

/// A width/height pair in scene units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

/// Editor configuration stored in the `config` block of a plan document.
///
/// Every field is optional on the wire; missing ones take their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PlanConfig {
    /// Grid spacing in scene units.
    pub grid_size: f64,
    /// Round dropped and dragged anchors to the grid.
    pub snap_to_grid: bool,
    /// Size given to subtypes without a catalog entry.
    pub default_object_size: Size,
    /// Real-world units per scene unit.
    pub scale: f64,
    /// Zoom factor at save time.
    pub zoom: f64,
    pub min_zoom: f64,
    pub max_zoom: f64,
}

impl Default for PlanConfig {
    fn default() -> Self {
        Self {
            grid_size: GRID_SIZE,
            snap_to_grid: true,
            default_object_size: Size { width: DEFAULT_OBJECT_SIZE, height: DEFAULT_OBJECT_SIZE },
            scale: 1.0,
            zoom: 1.0,
            min_zoom: MIN_ZOOM,
            max_zoom: MAX_ZOOM,
        }
    }
}

impl PlanConfig {
    /// Round `p` to the nearest grid intersection when snapping is enabled,
    /// each axis independently. Halves round towards positive infinity.
    #[must_use]
    pub fn snap(&self, p: Point) -> Point {
        if !self.snap_to_grid || self.grid_size <= 0.0 {
            return p;
        }
        let g = self.grid_size;
        Point::new((p.x / g + 0.5).floor() * g, (p.y / g + 0.5).floor() * g)
    }
}
