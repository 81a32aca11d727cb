#[cfg(test)]
#[path = "hit_test.rs"]
mod hit_test;

use serde::{Deserialize, Serialize};

use crate::camera::Point;
use crate::geometry::Extents;

/// Identifier of a draggable resize control: four corners, four edge midpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ResizeHandle {
    TopLeft,
    TopRight,
    BottomRight,
    BottomLeft,
    Top,
    Right,
    Bottom,
    Left,
}

impl ResizeHandle {
    /// Test order: corners before edge midpoints, first match wins.
    pub const ALL: [ResizeHandle; 8] = [
        Self::TopLeft,
        Self::TopRight,
        Self::BottomRight,
        Self::BottomLeft,
        Self::Top,
        Self::Right,
        Self::Bottom,
        Self::Left,
    ];

    /// Whether this is one of the four corner handles.
    #[must_use]
    pub fn is_corner(self) -> bool {
        matches!(self, Self::TopLeft | Self::TopRight | Self::BottomRight | Self::BottomLeft)
    }

    /// Local-space position of the handle on a trapezoid with `extents`.
    #[must_use]
    pub fn position(self, extents: &Extents) -> Point {
        let [tl, tr, br, bl] = extents.vertices();
        let mid = |a: Point, b: Point| Point::new((a.x + b.x) / 2.0, (a.y + b.y) / 2.0);
        match self {
            Self::TopLeft => tl,
            Self::TopRight => tr,
            Self::BottomRight => br,
            Self::BottomLeft => bl,
            Self::Top => mid(tl, tr),
            Self::Right => mid(tr, br),
            Self::Bottom => mid(br, bl),
            Self::Left => mid(bl, tl),
        }
    }

    /// CSS cursor suggested while hovering this handle.
    #[must_use]
    pub fn cursor(self) -> &'static str {
        match self {
            Self::TopLeft | Self::BottomRight => "nwse-resize",
            Self::TopRight | Self::BottomLeft => "nesw-resize",
            Self::Top | Self::Bottom => "ns-resize",
            Self::Left | Self::Right => "ew-resize",
        }
    }
}

/// Which resize handle (if any) of the trapezoid at `anchor` lies within
/// `tolerance` scene units of `p` on both axes.
///
/// Rotation is ignored, as in [`crate::geometry::contains`].
#[must_use]
pub fn handle_at(anchor: Point, extents: &Extents, p: Point, tolerance: f64) -> Option<ResizeHandle> {
    let local = p.minus(anchor);
    ResizeHandle::ALL.into_iter().find(|handle| {
        let h = handle.position(extents);
        (local.x - h.x).abs() <= tolerance && (local.y - h.y).abs() <= tolerance
    })
}
