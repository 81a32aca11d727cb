#[cfg(test)]
#[path = "camera_test.rs"]
mod camera_test;

use serde::{Deserialize, Serialize};

use crate::consts::{BUTTON_ZOOM_STEP, MAX_ZOOM, MIN_ZOOM, WHEEL_ZOOM_STEP};

/// A point in either viewport or scene space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Component-wise difference `self - other`.
    #[must_use]
    pub fn minus(self, other: Point) -> Point {
        Point::new(self.x - other.x, self.y - other.y)
    }
}

/// View transform: zoom factor plus pan offset.
///
/// `pan_x` / `pan_y` are in viewport pixels.
/// `zoom` is a scale factor (1.0 = no zoom), kept within `[min_zoom, max_zoom]`.
#[derive(Debug, Clone, Copy)]
pub struct Camera {
    pub pan_x: f64,
    pub pan_y: f64,
    pub zoom: f64,
    pub min_zoom: f64,
    pub max_zoom: f64,
}

impl Default for Camera {
    fn default() -> Self {
        Self { pan_x: 0.0, pan_y: 0.0, zoom: 1.0, min_zoom: MIN_ZOOM, max_zoom: MAX_ZOOM }
    }
}

impl Camera {
    /// Convert a pointer position (viewport pixels relative to the canvas
    /// origin) to the scene coordinates used for hit-testing and placement.
    ///
    /// Only the zoom is divided out; the pan offset is not subtracted.
    #[must_use]
    pub fn pointer_to_scene(&self, pointer: Point) -> Point {
        Point { x: pointer.x / self.zoom, y: pointer.y / self.zoom }
    }

    /// Full inverse of [`Camera::world_to_screen`].
    #[must_use]
    pub fn screen_to_world(&self, screen: Point) -> Point {
        Point {
            x: (screen.x - self.pan_x) / self.zoom,
            y: (screen.y - self.pan_y) / self.zoom,
        }
    }

    /// Project a scene point to viewport pixels.
    #[must_use]
    pub fn world_to_screen(&self, world: Point) -> Point {
        Point {
            x: world.x * self.zoom + self.pan_x,
            y: world.y * self.zoom + self.pan_y,
        }
    }

    /// Convert a viewport distance (pixels) to a scene distance.
    #[must_use]
    pub fn screen_dist_to_world(&self, screen_dist: f64) -> f64 {
        screen_dist / self.zoom
    }

    /// Set the zoom, clamped to the camera's bounds. Returns the applied value.
    pub fn set_zoom(&mut self, zoom: f64) -> f64 {
        self.zoom = zoom.clamp(self.min_zoom, self.max_zoom);
        self.zoom
    }

    /// Apply one wheel notch: scrolling down (`dy > 0`) zooms out, anything
    /// else zooms in.
    pub fn wheel(&mut self, dy: f64) -> f64 {
        let step = if dy > 0.0 { -WHEEL_ZOOM_STEP } else { WHEEL_ZOOM_STEP };
        self.set_zoom(self.zoom + step)
    }

    pub fn zoom_in(&mut self) -> f64 {
        self.set_zoom(self.zoom + BUTTON_ZOOM_STEP)
    }

    pub fn zoom_out(&mut self) -> f64 {
        self.set_zoom(self.zoom - BUTTON_ZOOM_STEP)
    }

    /// Back to zoom 1 with no pan.
    pub fn reset(&mut self) {
        self.zoom = 1.0;
        self.pan_x = 0.0;
        self.pan_y = 0.0;
    }

    /// Shift the pan offset by a viewport-pixel delta.
    pub fn pan_by(&mut self, dx: f64, dy: f64) {
        self.pan_x += dx;
        self.pan_y += dy;
    }

    /// Spacing between grid lines in viewport pixels.
    #[must_use]
    pub fn grid_step(&self, grid_size: f64) -> f64 {
        grid_size * self.zoom
    }

    /// Viewport position of the first grid line on each axis.
    ///
    /// Uses the truncated remainder of `-pan / step`, so the result carries
    /// the sign of `-pan`.
    #[must_use]
    pub fn grid_origin(&self, grid_size: f64) -> Point {
        let step = self.grid_step(grid_size);
        Point { x: -self.pan_x % step, y: -self.pan_y % step }
    }
}
