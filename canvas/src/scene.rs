//! Scene model: the live set of plan objects, the layer list, the selection,
//! and the queries the interaction controller runs against them.
//!
//! Object ids, layer ids and z-index values all come from counters owned by
//! the scene, so allocation is deterministic and never collides.

#[cfg(test)]
#[path = "scene_test.rs"]
mod scene_test;

use std::collections::HashMap;

use crate::camera::Point;
use crate::catalog::{self, AreaBucket, Category};
use crate::config::PlanConfig;
use crate::consts::HANDLE_SIZE_PX;
use crate::doc::{Layer, LayerId, ObjectId, PlanObject};
use crate::hit::{self, ResizeHandle};

/// Layer of a new scene.
const DEFAULT_LAYER: LayerId = LayerId(1);

/// Object count and area totals per summary bucket, in real-world units.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AreaSummary {
    pub total_objects: usize,
    pub building: f64,
    pub parking: f64,
    pub green: f64,
}

/// All objects and layers of one plan.
#[derive(Debug, Clone)]
pub struct Scene {
    objects: HashMap<ObjectId, PlanObject>,
    layers: Vec<Layer>,
    current_layer: LayerId,
    selected: Option<ObjectId>,
    next_id: u64,
    next_layer_id: u64,
    next_z: i64,
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

impl Scene {
    /// An empty scene with a single visible layer.
    #[must_use]
    pub fn new() -> Self {
        let first = DEFAULT_LAYER;
        Self {
            objects: HashMap::new(),
            layers: vec![Layer::new(first, "Layer 1")],
            current_layer: first,
            selected: None,
            next_id: 1,
            next_layer_id: 2,
            next_z: 1,
        }
    }

    /// Assemble a scene from loaded parts. Counters start past every id and
    /// z-index present; an empty layer list gets a default layer. The current
    /// layer is repaired with [`Scene::resolve_current_layer`].
    #[must_use]
    pub fn from_parts(objects: Vec<PlanObject>, layers: Vec<Layer>, current_layer: LayerId) -> Self {
        let mut scene = Self::new();
        scene.current_layer = Self::resolve_current_layer(&layers, Some(current_layer));
        if !layers.is_empty() {
            scene.next_layer_id = layers.iter().map(|l| l.id.0.saturating_add(1)).max().unwrap_or(1);
            scene.layers = layers;
        }
        for obj in objects {
            scene.insert(obj);
        }
        scene
    }

    /// The layer a loaded plan starts on: `requested` when it names one of
    /// `layers`, else the first layer, else the default layer of a new scene.
    #[must_use]
    pub fn resolve_current_layer(layers: &[Layer], requested: Option<LayerId>) -> LayerId {
        requested
            .filter(|id| layers.iter().any(|l| l.id == *id))
            .or_else(|| layers.first().map(|l| l.id))
            .unwrap_or(DEFAULT_LAYER)
    }

    // --- Allocation ---

    /// Reserve a fresh object id.
    pub fn allocate_id(&mut self) -> ObjectId {
        let id = ObjectId(self.next_id);
        self.next_id = self.next_id.saturating_add(1);
        id
    }

    /// A z-index above every object currently in the scene. Saturates at
    /// `i64::MAX`, where ties fall back to id order.
    fn fresh_z(&mut self) -> i64 {
        let top = self.objects.values().map(|o| o.z_index).max();
        let z = top.map_or(self.next_z, |t| self.next_z.max(t.saturating_add(1)));
        self.next_z = z.saturating_add(1);
        z
    }

    // --- Object collection ---

    /// Create an object from the catalog defaults on the current layer, on top
    /// of everything else.
    pub fn create_object(&mut self, anchor: Point, category: Category, subtype: &str, config: &PlanConfig) -> ObjectId {
        let id = self.allocate_id();
        let z = self.fresh_z();
        let obj = PlanObject::new(id, anchor, category, subtype, self.current_layer, z, config);
        tracing::debug!(%id, %category, subtype, x = anchor.x, y = anchor.y, "object created");
        self.objects.insert(id, obj);
        id
    }

    /// Insert or replace an object, keeping the counters ahead of its id and
    /// z-index.
    pub fn insert(&mut self, obj: PlanObject) {
        self.next_id = self.next_id.max(obj.id.0.saturating_add(1));
        self.next_z = self.next_z.max(obj.z_index.saturating_add(1));
        self.objects.insert(obj.id, obj);
    }

    /// Remove an object, clearing the selection if it was selected.
    pub fn remove(&mut self, id: ObjectId) -> Option<PlanObject> {
        if self.selected == Some(id) {
            self.selected = None;
        }
        self.objects.remove(&id)
    }

    #[must_use]
    pub fn get(&self, id: ObjectId) -> Option<&PlanObject> {
        self.objects.get(&id)
    }

    pub fn get_mut(&mut self, id: ObjectId) -> Option<&mut PlanObject> {
        self.objects.get_mut(&id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// All objects sorted by `(z_index, id)`, bottom first.
    #[must_use]
    pub fn sorted_objects(&self) -> Vec<&PlanObject> {
        let mut objs: Vec<&PlanObject> = self.objects.values().collect();
        objs.sort_by(|a, b| a.z_index.cmp(&b.z_index).then_with(|| a.id.cmp(&b.id)));
        objs
    }

    /// Objects to paint, bottom first: visible layers in list order, each
    /// layer's visible objects by z-index. Objects on hidden or unknown
    /// layers are skipped.
    #[must_use]
    pub fn paint_order(&self) -> Vec<&PlanObject> {
        let sorted = self.sorted_objects();
        self.layers
            .iter()
            .filter(|layer| layer.visible)
            .flat_map(|layer| sorted.iter().copied().filter(move |o| o.layer == layer.id && o.visible))
            .collect()
    }

    /// Recompute every object's real-world mirrors at `scale`.
    pub fn refresh_real_sizes(&mut self, scale: f64) {
        for obj in self.objects.values_mut() {
            obj.refresh_real(scale);
        }
    }

    // --- Layers ---

    #[must_use]
    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    #[must_use]
    pub fn layer(&self, id: LayerId) -> Option<&Layer> {
        self.layers.iter().find(|l| l.id == id)
    }

    #[must_use]
    pub fn current_layer(&self) -> LayerId {
        self.current_layer
    }

    /// Make `id` the layer new objects go to. Returns false for unknown layers.
    pub fn set_current_layer(&mut self, id: LayerId) -> bool {
        if self.layer(id).is_none() {
            return false;
        }
        self.current_layer = id;
        true
    }

    /// Append a visible layer named after its position in the list.
    pub fn add_layer(&mut self) -> LayerId {
        let id = LayerId(self.next_layer_id);
        self.next_layer_id = self.next_layer_id.saturating_add(1);
        let name = format!("Layer {}", self.layers.len() + 1);
        self.layers.push(Layer::new(id, name));
        id
    }

    /// Flip a layer's visibility. Returns the new value, or `None` if the
    /// layer does not exist.
    pub fn toggle_layer_visibility(&mut self, id: LayerId) -> Option<bool> {
        let layer = self.layers.iter_mut().find(|l| l.id == id)?;
        layer.visible = !layer.visible;
        Some(layer.visible)
    }

    /// Number of objects assigned to `id`.
    #[must_use]
    pub fn layer_object_count(&self, id: LayerId) -> usize {
        self.objects.values().filter(|o| o.layer == id).count()
    }

    // --- Selection ---

    #[must_use]
    pub fn selected(&self) -> Option<ObjectId> {
        self.selected
    }

    #[must_use]
    pub fn selected_object(&self) -> Option<&PlanObject> {
        self.selected.and_then(|id| self.objects.get(&id))
    }

    #[must_use]
    pub fn is_selected(&self, id: ObjectId) -> bool {
        self.selected == Some(id)
    }

    /// Select or deselect one object. Selecting replaces any previous
    /// selection. Returns false if the object does not exist.
    pub fn set_selected(&mut self, id: ObjectId, selected: bool) -> bool {
        if !self.objects.contains_key(&id) {
            return false;
        }
        if selected {
            self.selected = Some(id);
        } else if self.selected == Some(id) {
            self.selected = None;
        }
        true
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    // --- Queries ---

    /// Objects sorted top first: descending z-index, later ids above earlier
    /// ones on ties.
    fn sorted_desc(&self) -> Vec<&PlanObject> {
        let mut objs = self.sorted_objects();
        objs.reverse();
        objs
    }

    fn pickable(obj: &PlanObject, p: Point) -> bool {
        obj.visible && !obj.locked && obj.contains(p)
    }

    /// The highest visible, unlocked object containing `p`.
    #[must_use]
    pub fn topmost_at(&self, p: Point) -> Option<ObjectId> {
        self.sorted_desc().into_iter().find(|o| Self::pickable(o, p)).map(|o| o.id)
    }

    /// Select the object under `p`, cycling downwards through overlaps.
    ///
    /// If the top hit is already selected, the next pickable object below it
    /// that also contains `p` is selected instead; with none below, the top
    /// hit stays selected. When nothing is under `p` the selection is cleared.
    pub fn select_at(&mut self, p: Point) -> Option<ObjectId> {
        let sorted = self.sorted_desc();
        let result = sorted.iter().position(|o| Self::pickable(o, p)).map(|pos| {
            let top = sorted[pos];
            if self.selected == Some(top.id) && sorted.len() > 1 {
                sorted[pos + 1..]
                    .iter()
                    .find(|o| Self::pickable(o, p))
                    .map_or(top.id, |below| below.id)
            } else {
                top.id
            }
        });
        self.selected = result;
        result
    }

    /// Resize handle of object `id` under `p`. Always `None` unless `id` is
    /// the current selection. The tolerance stays constant on screen.
    #[must_use]
    pub fn resize_handle_at(&self, id: ObjectId, p: Point, zoom: f64) -> Option<ResizeHandle> {
        if !self.is_selected(id) {
            return None;
        }
        let obj = self.objects.get(&id)?;
        hit::handle_at(obj.anchor(), &obj.extents(), p, HANDLE_SIZE_PX / zoom)
    }

    // --- Z-order ---

    /// Move an object above every other object.
    pub fn bring_to_front(&mut self, id: ObjectId) -> bool {
        if !self.objects.contains_key(&id) {
            return false;
        }
        let z = self.fresh_z();
        if let Some(obj) = self.objects.get_mut(&id) {
            obj.set_z_index(z);
        }
        true
    }

    /// Move an object below every other object.
    pub fn send_to_back(&mut self, id: ObjectId) -> bool {
        let Some(min) = self.objects.values().map(|o| o.z_index).min() else {
            return false;
        };
        let Some(obj) = self.objects.get_mut(&id) else {
            return false;
        };
        obj.set_z_index(min.saturating_sub(1));
        true
    }

    // --- Editing ---

    /// Duplicate an object on top of the stack and select the copy.
    pub fn duplicate(&mut self, id: ObjectId) -> Option<ObjectId> {
        let source = self.objects.get(&id)?.clone();
        let copy_id = self.allocate_id();
        let z = self.fresh_z();
        self.objects.insert(copy_id, source.duplicate(copy_id, z));
        self.selected = Some(copy_id);
        Some(copy_id)
    }

    // --- Statistics ---

    /// Object count and summed areas per bucket.
    #[must_use]
    pub fn area_summary(&self) -> AreaSummary {
        let mut summary = AreaSummary { total_objects: self.objects.len(), ..AreaSummary::default() };
        for obj in self.objects.values() {
            match catalog::area_bucket(obj.category, &obj.subtype) {
                Some(AreaBucket::Building) => summary.building += obj.area(),
                Some(AreaBucket::Parking) => summary.parking += obj.area(),
                Some(AreaBucket::Green) => summary.green += obj.area(),
                None => {}
            }
        }
        summary
    }
}
