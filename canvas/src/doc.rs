//! Plan objects and layers.
//!
//! A [`PlanObject`] combines identity, trapezoid geometry, style and scene
//! placement. Geometry is private so the aggregate sizes and the real-world
//! mirrors can only change together with the extents they derive from.
//!
//! Real-world mirrors are a snapshot taken at the scale passed to the last
//! geometry write. Changing the scale does not refresh them; see
//! [`crate::scene::Scene::refresh_real_sizes`].

#[cfg(test)]
#[path = "doc_test.rs"]
mod doc_test;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::camera::Point;
use crate::catalog::{self, Category};
use crate::config::PlanConfig;
use crate::consts::{COPY_SUFFIX, DUPLICATE_OFFSET};
use crate::geometry::{self, Extent, Extents};

/// Unique identifier for a plan object, allocated by the scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ObjectId(pub u64);

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier of a layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LayerId(pub u64);

impl fmt::Display for LayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A named group of objects that can be hidden as a whole.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Layer {
    pub id: LayerId,
    pub name: String,
    pub visible: bool,
    #[serde(default)]
    pub locked: bool,
}

impl Layer {
    #[must_use]
    pub fn new(id: LayerId, name: impl Into<String>) -> Self {
        Self { id, name: name.into(), visible: true, locked: false }
    }
}

/// An editable object field, as written by a property panel.
///
/// Sizes are given in real-world units and converted back through the scale.
/// Values are applied as given; only resize handles clamp extents.
#[derive(Debug, Clone, PartialEq)]
pub enum ObjectProperty {
    Name(String),
    Color(String),
    /// Rotation in degrees.
    Rotation(f64),
    X(f64),
    Y(f64),
    /// Aggregate width; split evenly over `width_left` / `width_right`.
    RealWidth(f64),
    /// Aggregate height; split evenly over `height_top` / `height_bottom`.
    RealHeight(f64),
    RealExtent(Extent, f64),
}

/// A shape on the plan.
#[derive(Debug, Clone, PartialEq)]
pub struct PlanObject {
    /// Never reused, never changed after creation.
    pub id: ObjectId,
    x: f64,
    y: f64,
    extents: Extents,
    real: Extents,
    /// Degrees, applied about the anchor when drawing.
    pub rotation: f64,
    pub category: Category,
    pub subtype: String,
    pub color: String,
    pub name: String,
    pub layer: LayerId,
    /// Paint order; higher values paint later.
    pub z_index: i64,
    pub visible: bool,
    pub locked: bool,
}

impl PlanObject {
    /// Create an object at `anchor` sized, colored and named from the catalog.
    #[must_use]
    pub fn new(
        id: ObjectId,
        anchor: Point,
        category: Category,
        subtype: &str,
        layer: LayerId,
        z_index: i64,
        config: &PlanConfig,
    ) -> Self {
        let (w, h) = catalog::default_size(subtype)
            .unwrap_or((config.default_object_size.width, config.default_object_size.height));
        let extents = Extents::even(w, h);
        Self {
            id,
            x: anchor.x,
            y: anchor.y,
            extents,
            real: extents.scaled(config.scale),
            rotation: 0.0,
            category,
            subtype: subtype.to_owned(),
            color: catalog::default_color(category, subtype).to_owned(),
            name: catalog::default_name(subtype).to_owned(),
            layer,
            z_index,
            visible: true,
            locked: false,
        }
    }

    /// Rebuild an object from stored fields, computing real mirrors at `scale`.
    #[allow(clippy::too_many_arguments)]
    #[must_use]
    pub(crate) fn from_parts(
        id: ObjectId,
        anchor: Point,
        extents: Extents,
        scale: f64,
        category: Category,
        subtype: String,
        color: String,
        name: String,
        layer: LayerId,
        z_index: i64,
    ) -> Self {
        Self {
            id,
            x: anchor.x,
            y: anchor.y,
            extents,
            real: extents.scaled(scale),
            rotation: 0.0,
            category,
            subtype,
            color,
            name,
            layer,
            z_index,
            visible: true,
            locked: false,
        }
    }

    // --- Geometry reads ---

    #[must_use]
    pub fn anchor(&self) -> Point {
        Point::new(self.x, self.y)
    }

    #[must_use]
    pub fn extents(&self) -> Extents {
        self.extents
    }

    /// Legacy aggregate width, derived from the extents.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.extents.width()
    }

    /// Legacy aggregate height, derived from the extents.
    #[must_use]
    pub fn height(&self) -> f64 {
        self.extents.height()
    }

    /// Extents in real-world units, as of the last refresh.
    #[must_use]
    pub fn real_extents(&self) -> Extents {
        self.real
    }

    #[must_use]
    pub fn real_width(&self) -> f64 {
        self.real.width()
    }

    #[must_use]
    pub fn real_height(&self) -> f64 {
        self.real.height()
    }

    /// Local-space vertices; independent of anchor and rotation.
    #[must_use]
    pub fn vertices(&self) -> [Point; 4] {
        self.extents.vertices()
    }

    /// Label position in local space.
    #[must_use]
    pub fn centroid(&self) -> Point {
        self.extents.centroid()
    }

    /// Point-in-shape test in scene space. Rotation is not applied.
    #[must_use]
    pub fn contains(&self, p: Point) -> bool {
        geometry::contains(self.anchor(), &self.extents, p)
    }

    /// Surface in real-world units, measured as the bounding rectangle of the
    /// total extents.
    #[must_use]
    pub fn area(&self) -> f64 {
        self.real.bounding_area()
    }

    /// Label color contrasting with the fill.
    #[must_use]
    pub fn text_color(&self) -> &'static str {
        geometry::text_color(&self.color)
    }

    // --- Mutators ---

    pub fn move_to(&mut self, anchor: Point) {
        self.x = anchor.x;
        self.y = anchor.y;
    }

    /// Replace all four extents and refresh the real mirrors at `scale`.
    pub fn set_extents(&mut self, extents: Extents, scale: f64) {
        self.extents = extents;
        self.refresh_real(scale);
    }

    pub fn set_extent(&mut self, extent: Extent, value: f64, scale: f64) {
        self.extents.set(extent, value);
        self.refresh_real(scale);
    }

    /// Write the aggregate width: both width extents become `width / 2`.
    pub fn set_width(&mut self, width: f64, scale: f64) {
        self.extents.width_left = width / 2.0;
        self.extents.width_right = width / 2.0;
        self.refresh_real(scale);
    }

    /// Write the aggregate height: both height extents become `height / 2`.
    pub fn set_height(&mut self, height: f64, scale: f64) {
        self.extents.height_top = height / 2.0;
        self.extents.height_bottom = height / 2.0;
        self.refresh_real(scale);
    }

    /// Recompute the real-world mirrors from the extents.
    pub fn refresh_real(&mut self, scale: f64) {
        self.real = self.extents.scaled(scale);
    }

    pub fn set_rotation(&mut self, degrees: f64) {
        self.rotation = degrees;
    }

    pub fn set_color(&mut self, color: impl Into<String>) {
        self.color = color.into();
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn set_z_index(&mut self, z_index: i64) {
        self.z_index = z_index;
    }

    /// Apply a property-panel edit. Real-world sizes are divided by `scale`.
    pub fn apply(&mut self, property: ObjectProperty, scale: f64) {
        match property {
            ObjectProperty::Name(name) => self.set_name(name),
            ObjectProperty::Color(color) => self.set_color(color),
            ObjectProperty::Rotation(deg) => self.set_rotation(deg),
            ObjectProperty::X(x) => self.x = x,
            ObjectProperty::Y(y) => self.y = y,
            ObjectProperty::RealWidth(w) => self.set_width(w / scale, scale),
            ObjectProperty::RealHeight(h) => self.set_height(h / scale, scale),
            ObjectProperty::RealExtent(extent, v) => self.set_extent(extent, v / scale, scale),
        }
    }

    /// A copy under a new id, shifted by the duplicate offset and renamed with
    /// the copy suffix. Geometry, style, rotation and layer carry over.
    #[must_use]
    pub fn duplicate(&self, id: ObjectId, z_index: i64) -> Self {
        let mut copy = self.clone();
        copy.id = id;
        copy.x += DUPLICATE_OFFSET;
        copy.y += DUPLICATE_OFFSET;
        copy.name = format!("{}{COPY_SUFFIX}", self.name);
        copy.z_index = z_index;
        copy.visible = true;
        copy.locked = false;
        copy
    }
}
