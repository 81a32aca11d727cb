//! Plan document: the JSON shape a plan is saved as and loaded from.
//!
//! ```json
//! { "version": "2.0", "timestamp": "...", "config": { "gridSize": 20, ... },
//!   "objects": [ { "id": 1, "x": 40, "y": 60, "type": "building", ... } ],
//!   "layers": [ { "id": 1, "name": "Layer 1", "visible": true, "locked": false } ],
//!   "currentLayer": 1 }
//! ```
//!
//! Loading is all-or-nothing: [`PlanDocument::into_scene`] either converts
//! every record or returns an error without producing a scene. Records from
//! older files that only carry `width` / `height` are upgraded by splitting
//! each aggregate evenly over its two extents.

#[cfg(test)]
#[path = "document_test.rs"]
mod document_test;

use std::collections::HashSet;

use serde::{Deserialize, Deserializer, Serialize};

use crate::camera::Point;
use crate::catalog::{self, Category};
use crate::config::PlanConfig;
use crate::consts::MAX_STORED_ID;
use crate::doc::{Layer, LayerId, ObjectId, PlanObject};
use crate::geometry::Extents;
use crate::scene::Scene;

/// Version string written on save.
pub const DOCUMENT_VERSION: &str = "2.0";

/// Errors raised while reading or writing a plan document.
#[derive(Debug, thiserror::Error)]
pub enum PlanError {
    #[error("invalid plan document: {0}")]
    Json(#[from] serde_json::Error),
    #[error("object #{index} has neither trapezoid extents nor width/height")]
    MissingGeometry { index: usize },
    #[error("invalid scale {0}: must be finite and positive")]
    InvalidScale(f64),
    #[error("layer id {0} is out of range")]
    LayerIdOutOfRange(u64),
}

/// One object as stored on disk.
///
/// Geometry fields are optional so that both the four-extent format and the
/// older width/height format parse. Real-world mirrors and the `selected`
/// flag are written for readers of the file but ignored on load.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ObjectRecord {
    #[serde(default, deserialize_with = "integral_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub x: f64,
    pub y: f64,
    #[serde(rename = "type")]
    pub category: Category,
    pub subtype: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width_left: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width_right: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height_top: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height_bottom: Option<f64>,
    #[serde(default)]
    pub rotation: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layer: Option<LayerId>,
    #[serde(default)]
    pub z_index: i64,
    #[serde(default = "default_true")]
    pub visible: bool,
    #[serde(default)]
    pub locked: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub real_width: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub real_height: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub real_width_left: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub real_width_right: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub real_height_top: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub real_height_bottom: Option<f64>,
    #[serde(default)]
    pub selected: bool,
}

fn default_true() -> bool {
    true
}

fn default_version() -> String {
    DOCUMENT_VERSION.to_owned()
}

/// Older files used fractional timestamps as ids. Those, and anything else
/// that is not an integer in `0..=MAX_STORED_ID`, are dropped so a fresh id
/// is assigned.
fn integral_id<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<ObjectId>, D::Error> {
    let raw = Option::<f64>::deserialize(deserializer)?;
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
    let id = raw
        .filter(|v| v.is_finite() && *v >= 0.0 && v.fract() == 0.0 && *v <= MAX_STORED_ID as f64)
        .map(|v| ObjectId(v as u64));
    Ok(id)
}

impl ObjectRecord {
    /// Snapshot a live object.
    #[must_use]
    pub fn from_object(obj: &PlanObject, selected: bool) -> Self {
        let e = obj.extents();
        let r = obj.real_extents();
        Self {
            id: Some(obj.id),
            x: obj.anchor().x,
            y: obj.anchor().y,
            category: obj.category,
            subtype: obj.subtype.clone(),
            width: Some(obj.width()),
            height: Some(obj.height()),
            width_left: Some(e.width_left),
            width_right: Some(e.width_right),
            height_top: Some(e.height_top),
            height_bottom: Some(e.height_bottom),
            rotation: obj.rotation,
            color: Some(obj.color.clone()),
            name: Some(obj.name.clone()),
            layer: Some(obj.layer),
            z_index: obj.z_index,
            visible: obj.visible,
            locked: obj.locked,
            real_width: Some(obj.real_width()),
            real_height: Some(obj.real_height()),
            real_width_left: Some(r.width_left),
            real_width_right: Some(r.width_right),
            real_height_top: Some(r.height_top),
            real_height_bottom: Some(r.height_bottom),
            selected,
        }
    }

    /// The record's extents, upgrading width/height-only records by an even
    /// split. `None` when neither form is complete.
    #[must_use]
    pub fn extents(&self) -> Option<Extents> {
        match (self.width_left, self.width_right, self.height_top, self.height_bottom) {
            (Some(wl), Some(wr), Some(ht), Some(hb)) => Some(Extents::new(wl, wr, ht, hb)),
            _ => match (self.width, self.height) {
                (Some(w), Some(h)) => Some(Extents::even(w, h)),
                _ => None,
            },
        }
    }

    /// Build a live object. Missing style fields fall back to the catalog,
    /// a missing layer to `fallback_layer`.
    fn into_object(self, index: usize, id: ObjectId, scale: f64, fallback_layer: LayerId) -> Result<PlanObject, PlanError> {
        let extents = self.extents().ok_or(PlanError::MissingGeometry { index })?;
        let color = self
            .color
            .unwrap_or_else(|| catalog::default_color(self.category, &self.subtype).to_owned());
        let name = self
            .name
            .unwrap_or_else(|| catalog::default_name(&self.subtype).to_owned());
        let mut obj = PlanObject::from_parts(
            id,
            Point::new(self.x, self.y),
            extents,
            scale,
            self.category,
            self.subtype,
            color,
            name,
            self.layer.unwrap_or(fallback_layer),
            self.z_index,
        );
        obj.rotation = self.rotation;
        obj.visible = self.visible;
        obj.locked = self.locked;
        Ok(obj)
    }
}

/// A whole plan as stored on disk.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanDocument {
    #[serde(default = "default_version")]
    pub version: String,
    #[serde(default)]
    pub timestamp: String,
    #[serde(default)]
    pub config: PlanConfig,
    pub objects: Vec<ObjectRecord>,
    #[serde(default)]
    pub layers: Vec<Layer>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_layer: Option<LayerId>,
}

impl PlanDocument {
    /// Snapshot a scene and its configuration. Objects are written bottom
    /// first.
    #[must_use]
    pub fn capture(scene: &Scene, config: &PlanConfig, timestamp: impl Into<String>) -> Self {
        Self {
            version: DOCUMENT_VERSION.to_owned(),
            timestamp: timestamp.into(),
            config: config.clone(),
            objects: scene
                .sorted_objects()
                .into_iter()
                .map(|o| ObjectRecord::from_object(o, scene.is_selected(o.id)))
                .collect(),
            layers: scene.layers().to_vec(),
            current_layer: Some(scene.current_layer()),
        }
    }

    /// Parse a document.
    ///
    /// # Errors
    ///
    /// Returns [`PlanError::Json`] when `text` is not a valid plan document.
    pub fn from_json(text: &str) -> Result<Self, PlanError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Serialize with two-space indentation.
    ///
    /// # Errors
    ///
    /// Returns [`PlanError::Json`] if serialization fails.
    pub fn to_json_pretty(&self) -> Result<String, PlanError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Convert into a live scene plus its configuration.
    ///
    /// Real-world mirrors are recomputed from the document's scale. Records
    /// with a missing, invalid or duplicate id get a fresh one. The selection
    /// starts empty.
    ///
    /// # Errors
    ///
    /// Returns [`PlanError::InvalidScale`] for a non-positive scale,
    /// [`PlanError::LayerIdOutOfRange`] for a layer id above
    /// [`MAX_STORED_ID`], and [`PlanError::MissingGeometry`] for a record
    /// without usable geometry.
    pub fn into_scene(self) -> Result<(Scene, PlanConfig), PlanError> {
        let scale = self.config.scale;
        if !scale.is_finite() || scale <= 0.0 {
            return Err(PlanError::InvalidScale(scale));
        }
        if let Some(layer) = self.layers.iter().find(|l| l.id.0 > MAX_STORED_ID) {
            return Err(PlanError::LayerIdOutOfRange(layer.id.0));
        }
        let fallback_layer = Scene::resolve_current_layer(&self.layers, self.current_layer);

        let mut seen = HashSet::new();
        let mut placed = Vec::with_capacity(self.objects.len());
        let mut pending = Vec::new();
        for (index, record) in self.objects.into_iter().enumerate() {
            let id = record.id.filter(|id| seen.insert(*id));
            let obj = record.into_object(index, id.unwrap_or(ObjectId(0)), scale, fallback_layer)?;
            if id.is_some() {
                placed.push(obj);
            } else {
                pending.push(obj);
            }
        }

        let mut scene = Scene::from_parts(placed, self.layers, fallback_layer);
        for mut obj in pending {
            obj.id = scene.allocate_id();
            scene.insert(obj);
        }
        Ok((scene, self.config))
    }
}
