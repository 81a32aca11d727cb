//! Geometry engine: the asymmetric trapezoid every plan object is drawn as.
//!
//! A shape is described by an anchor (its local origin, the top-left
//! reference corner) and four independent extents measured from it. The
//! functions here are pure: they read extents and points and return new
//! values without touching any scene state.
//!
//! Containment and handle tests work in unrotated local space. A stored
//! rotation only affects drawing.

#[cfg(test)]
#[path = "geometry_test.rs"]
mod geometry_test;

use serde::{Deserialize, Serialize};

use crate::camera::Point;
use crate::consts::{MIN_EXTENT, TEXT_BRIGHTNESS_THRESHOLD};
use crate::hit::ResizeHandle;

/// One of the four trapezoid side lengths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Extent {
    /// Top edge, rightward from the anchor.
    WidthLeft,
    /// Bottom edge, rightward from `(0, height_top)`.
    WidthRight,
    /// Left edge, downward from the anchor.
    HeightTop,
    /// Right edge, downward from `(width_left, 0)`.
    HeightBottom,
}

/// The four extents of a trapezoid, in scene units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Extents {
    pub width_left: f64,
    pub width_right: f64,
    pub height_top: f64,
    pub height_bottom: f64,
}

impl Extents {
    #[must_use]
    pub fn new(width_left: f64, width_right: f64, height_top: f64, height_bottom: f64) -> Self {
        Self { width_left, width_right, height_top, height_bottom }
    }

    /// Split an aggregate width and height evenly over the four extents.
    #[must_use]
    pub fn even(width: f64, height: f64) -> Self {
        Self::new(width / 2.0, width / 2.0, height / 2.0, height / 2.0)
    }

    /// Aggregate width, `width_left + width_right`.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.width_left + self.width_right
    }

    /// Aggregate height, `height_top + height_bottom`.
    #[must_use]
    pub fn height(&self) -> f64 {
        self.height_top + self.height_bottom
    }

    #[must_use]
    pub fn get(&self, extent: Extent) -> f64 {
        match extent {
            Extent::WidthLeft => self.width_left,
            Extent::WidthRight => self.width_right,
            Extent::HeightTop => self.height_top,
            Extent::HeightBottom => self.height_bottom,
        }
    }

    pub fn set(&mut self, extent: Extent, value: f64) {
        match extent {
            Extent::WidthLeft => self.width_left = value,
            Extent::WidthRight => self.width_right = value,
            Extent::HeightTop => self.height_top = value,
            Extent::HeightBottom => self.height_bottom = value,
        }
    }

    /// Every extent multiplied by `factor`.
    #[must_use]
    pub fn scaled(&self, factor: f64) -> Self {
        Self::new(
            self.width_left * factor,
            self.width_right * factor,
            self.height_top * factor,
            self.height_bottom * factor,
        )
    }

    /// Local-space vertices in winding order: top-left, top-right,
    /// bottom-right, bottom-left.
    #[must_use]
    pub fn vertices(&self) -> [Point; 4] {
        [
            Point::new(0.0, 0.0),
            Point::new(self.width_left, 0.0),
            Point::new(self.width_right, self.height_bottom),
            Point::new(0.0, self.height_top),
        ]
    }

    /// Arithmetic mean of the four local vertices. Used for label placement.
    #[must_use]
    pub fn centroid(&self) -> Point {
        let v = self.vertices();
        let sum = v.iter().fold(Point::default(), |acc, p| Point::new(acc.x + p.x, acc.y + p.y));
        Point::new(sum.x / 4.0, sum.y / 4.0)
    }

    /// Area of the bounding rectangle of the total extents, not the true
    /// quadrilateral area.
    #[must_use]
    pub fn bounding_area(&self) -> f64 {
        self.width() * self.height()
    }
}

/// Even-odd ray-casting point-in-polygon test.
///
/// Edges with no vertical span are skipped.
#[must_use]
pub fn polygon_contains(vertices: &[Point], p: Point) -> bool {
    let Some(mut j) = vertices.len().checked_sub(1) else {
        return false;
    };
    let mut inside = false;
    for (i, vi) in vertices.iter().enumerate() {
        let vj = vertices[j];
        j = i;
        let span = vj.y - vi.y;
        if span.abs() <= f64::EPSILON {
            continue;
        }
        if (vi.y > p.y) != (vj.y > p.y) && p.x < (vj.x - vi.x) * (p.y - vi.y) / span + vi.x {
            inside = !inside;
        }
    }
    inside
}

/// Whether scene point `p` falls inside the trapezoid anchored at `anchor`.
///
/// Only the translation is undone; rotation is not taken into account.
#[must_use]
pub fn contains(anchor: Point, extents: &Extents, p: Point) -> bool {
    polygon_contains(&extents.vertices(), p.minus(anchor))
}

/// Anchor and extents captured when a resize gesture starts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResizeSnapshot {
    pub anchor: Point,
    pub extents: Extents,
}

/// Apply a handle drag of `delta` scene units to `orig`.
///
/// Every extent is clamped to [`MIN_EXTENT`]. Handles on the top or left edge
/// shift the anchor by the full, unclamped delta on that axis.
#[must_use]
pub fn resize(handle: ResizeHandle, orig: &ResizeSnapshot, delta: Point) -> ResizeSnapshot {
    let o = orig.extents;
    let mut out = *orig;
    let clamp = |v: f64| v.max(MIN_EXTENT);

    match handle {
        ResizeHandle::TopLeft => {
            out.extents.width_left = clamp(o.width_left - delta.x);
            out.extents.height_top = clamp(o.height_top - delta.y);
            out.anchor.x = orig.anchor.x + delta.x;
            out.anchor.y = orig.anchor.y + delta.y;
        }
        ResizeHandle::TopRight => {
            out.extents.width_left = clamp(o.width_left + delta.x);
            out.extents.height_bottom = clamp(o.height_bottom - delta.y);
            out.anchor.y = orig.anchor.y + delta.y;
        }
        ResizeHandle::BottomRight => {
            out.extents.width_right = clamp(o.width_right + delta.x);
            out.extents.height_bottom = clamp(o.height_bottom + delta.y);
        }
        ResizeHandle::BottomLeft => {
            out.extents.width_right = clamp(o.width_right - delta.x);
            out.extents.height_top = clamp(o.height_top + delta.y);
            out.anchor.x = orig.anchor.x + delta.x;
        }
        ResizeHandle::Top => {
            out.extents.height_top = clamp(o.height_top - delta.y);
            out.anchor.y = orig.anchor.y + delta.y;
        }
        ResizeHandle::Right => {
            out.extents.width_right = clamp(o.width_right + delta.x);
        }
        ResizeHandle::Bottom => {
            out.extents.height_bottom = clamp(o.height_bottom + delta.y);
        }
        ResizeHandle::Left => {
            out.extents.width_left = clamp(o.width_left - delta.x);
            out.anchor.x = orig.anchor.x + delta.x;
        }
    }
    out
}

/// Label color for text drawn over `fill`: black on light fills, white on
/// dark ones. Anything other than `#RRGGBB` counts as dark.
#[must_use]
pub fn text_color(fill: &str) -> &'static str {
    match brightness(fill) {
        Some(b) if b > TEXT_BRIGHTNESS_THRESHOLD => "#000",
        _ => "#fff",
    }
}

/// Perceived brightness `(R*299 + G*587 + B*114) / 1000` of a `#RRGGBB` color.
#[must_use]
pub fn brightness(color: &str) -> Option<f64> {
    let hex = color.strip_prefix('#').unwrap_or(color);
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map(f64::from);
    match (channel(0), channel(2), channel(4)) {
        (Ok(r), Ok(g), Ok(b)) => Some((r * 299.0 + g * 587.0 + b * 114.0) / 1000.0),
        _ => None,
    }
}
