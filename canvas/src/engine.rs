use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::camera::{Camera, Point};
use crate::catalog::Category;
use crate::config::PlanConfig;
use crate::doc::{LayerId, ObjectId, ObjectProperty, PlanObject};
use crate::document::{PlanDocument, PlanError};
use crate::geometry::{self, ResizeSnapshot};
use crate::input::{Button, InputState, Key, Mode, Modifiers, UiState, WheelDelta};
use crate::render;
use crate::scene::{AreaSummary, Scene};

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// Actions returned from handlers for the host to process.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    ObjectCreated(ObjectId),
    ObjectUpdated(ObjectId),
    ObjectDeleted(ObjectId),
    /// The selection changed; the property panel should refresh.
    SelectionChanged(Option<ObjectId>),
    /// Area totals or the object count changed.
    StatsChanged,
    LayersChanged,
    ZoomChanged(f64),
    GridToggled(bool),
    /// The user asked to save (Ctrl+S); the host owns file access.
    SaveRequested,
    /// The user asked to open a file (Ctrl+O); the host owns file access.
    LoadRequested,
    SetCursor(&'static str),
    RenderNeeded,
}

/// Engine state that does not depend on the canvas element.
///
/// This is the single application context: scene, configuration, view
/// transform and gesture state. Every handler runs to completion on
/// `&mut self` and reports what the host should do next.
#[derive(Debug)]
pub struct EngineCore {
    pub scene: Scene,
    pub config: PlanConfig,
    pub camera: Camera,
    pub ui: UiState,
    pub input: InputState,
    pub viewport_width: f64,
    pub viewport_height: f64,
    pub dpr: f64,
}

impl Default for EngineCore {
    fn default() -> Self {
        let config = PlanConfig::default();
        let camera = Camera { zoom: config.zoom, min_zoom: config.min_zoom, max_zoom: config.max_zoom, ..Camera::default() };
        Self {
            scene: Scene::new(),
            config,
            camera,
            ui: UiState::default(),
            input: InputState::default(),
            viewport_width: 0.0,
            viewport_height: 0.0,
            dpr: 1.0,
        }
    }
}

impl EngineCore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // --- Documents ---

    /// Replace the whole plan with a parsed document. The current plan is
    /// left untouched unless the document converts completely.
    ///
    /// # Errors
    ///
    /// Returns the [`PlanError`] raised while converting the document.
    pub fn load_document(&mut self, document: PlanDocument) -> Result<Vec<Action>, PlanError> {
        let (scene, config) = document.into_scene()?;
        tracing::info!(objects = scene.len(), layers = scene.layers().len(), "plan loaded");
        self.scene = scene;
        self.camera.min_zoom = config.min_zoom;
        self.camera.max_zoom = config.max_zoom;
        let zoom = self.camera.set_zoom(config.zoom);
        self.config = config;
        self.input = InputState::Idle;
        Ok(vec![
            Action::SelectionChanged(None),
            Action::ZoomChanged(zoom),
            Action::LayersChanged,
            Action::StatsChanged,
            Action::RenderNeeded,
        ])
    }

    /// Parse `text` and load it. See [`EngineCore::load_document`].
    ///
    /// # Errors
    ///
    /// Returns [`PlanError::Json`] for unparseable text, or any conversion error.
    pub fn load_json(&mut self, text: &str) -> Result<Vec<Action>, PlanError> {
        match PlanDocument::from_json(text) {
            Ok(document) => self.load_document(document),
            Err(e) => {
                tracing::warn!(error = %e, "plan document rejected");
                Err(e)
            }
        }
    }

    /// Snapshot the plan, recording the current zoom in its configuration.
    #[must_use]
    pub fn document(&self, timestamp: impl Into<String>) -> PlanDocument {
        let config = PlanConfig { zoom: self.camera.zoom, ..self.config.clone() };
        PlanDocument::capture(&self.scene, &config, timestamp)
    }

    // --- Configuration ---

    /// Switch between select and pan. Any gesture in progress is dropped.
    pub fn set_mode(&mut self, mode: Mode) -> Vec<Action> {
        self.ui.mode = mode;
        self.input = InputState::Idle;
        tracing::debug!(?mode, "mode changed");
        vec![Action::SetCursor(mode.idle_cursor())]
    }

    pub fn set_snap_to_grid(&mut self, snap: bool) {
        self.config.snap_to_grid = snap;
    }

    pub fn toggle_grid(&mut self) -> Vec<Action> {
        self.ui.show_grid = !self.ui.show_grid;
        vec![Action::GridToggled(self.ui.show_grid), Action::RenderNeeded]
    }

    /// Change the real-world scale. Existing real-world mirrors are not
    /// refreshed; call [`EngineCore::refresh_real_sizes`] for that.
    pub fn set_scale(&mut self, scale: f64) {
        self.config.scale = scale;
    }

    pub fn refresh_real_sizes(&mut self) -> Vec<Action> {
        self.scene.refresh_real_sizes(self.config.scale);
        vec![Action::StatsChanged, Action::RenderNeeded]
    }

    pub fn set_viewport(&mut self, width_css: f64, height_css: f64, dpr: f64) {
        self.viewport_width = width_css;
        self.viewport_height = height_css;
        self.dpr = dpr;
    }

    // --- Commands ---

    /// Drop a new object at a pointer position: unprojected, snapped to the
    /// grid when enabled, then selected.
    pub fn add_object(&mut self, screen_pt: Point, category: Category, subtype: &str) -> Vec<Action> {
        let p = self.camera.pointer_to_scene(screen_pt);
        self.add_object_at(p, category, subtype)
    }

    /// Create a new object at a scene position (snapped when enabled) and
    /// select it.
    pub fn add_object_at(&mut self, p: Point, category: Category, subtype: &str) -> Vec<Action> {
        let anchor = self.config.snap(p);
        let id = self.scene.create_object(anchor, category, subtype, &self.config);
        self.scene.set_selected(id, true);
        vec![
            Action::ObjectCreated(id),
            Action::SelectionChanged(Some(id)),
            Action::StatsChanged,
            Action::RenderNeeded,
        ]
    }

    /// Remove the selected object.
    pub fn delete_selected(&mut self) -> Vec<Action> {
        let Some(id) = self.scene.selected() else {
            return Vec::new();
        };
        self.scene.remove(id);
        self.input = InputState::Idle;
        tracing::debug!(%id, "object deleted");
        vec![
            Action::ObjectDeleted(id),
            Action::SelectionChanged(None),
            Action::StatsChanged,
            Action::RenderNeeded,
        ]
    }

    /// Copy the selected object and select the copy.
    pub fn duplicate_selected(&mut self) -> Vec<Action> {
        let Some(copy) = self.scene.selected().and_then(|id| self.scene.duplicate(id)) else {
            return Vec::new();
        };
        tracing::debug!(%copy, "object duplicated");
        vec![
            Action::ObjectCreated(copy),
            Action::SelectionChanged(Some(copy)),
            Action::StatsChanged,
            Action::RenderNeeded,
        ]
    }

    pub fn bring_to_front(&mut self) -> Vec<Action> {
        match self.scene.selected() {
            Some(id) if self.scene.bring_to_front(id) => vec![Action::ObjectUpdated(id), Action::RenderNeeded],
            _ => Vec::new(),
        }
    }

    pub fn send_to_back(&mut self) -> Vec<Action> {
        match self.scene.selected() {
            Some(id) if self.scene.send_to_back(id) => vec![Action::ObjectUpdated(id), Action::RenderNeeded],
            _ => Vec::new(),
        }
    }

    /// Apply a property-panel edit to the selected object.
    pub fn set_property(&mut self, property: ObjectProperty) -> Vec<Action> {
        let scale = self.config.scale;
        let Some(id) = self.scene.selected() else {
            return Vec::new();
        };
        let Some(obj) = self.scene.get_mut(id) else {
            return Vec::new();
        };
        obj.apply(property, scale);
        vec![Action::ObjectUpdated(id), Action::StatsChanged, Action::RenderNeeded]
    }

    pub fn zoom_in(&mut self) -> Vec<Action> {
        let zoom = self.camera.zoom_in();
        vec![Action::ZoomChanged(zoom), Action::RenderNeeded]
    }

    pub fn zoom_out(&mut self) -> Vec<Action> {
        let zoom = self.camera.zoom_out();
        vec![Action::ZoomChanged(zoom), Action::RenderNeeded]
    }

    /// Zoom back to 1 and drop the pan offset.
    pub fn reset_zoom(&mut self) -> Vec<Action> {
        self.camera.reset();
        vec![Action::ZoomChanged(self.camera.zoom), Action::RenderNeeded]
    }

    pub fn add_layer(&mut self) -> Vec<Action> {
        let id = self.scene.add_layer();
        tracing::debug!(%id, "layer added");
        vec![Action::LayersChanged]
    }

    pub fn toggle_layer_visibility(&mut self, id: LayerId) -> Vec<Action> {
        match self.scene.toggle_layer_visibility(id) {
            Some(_) => vec![Action::LayersChanged, Action::RenderNeeded],
            None => Vec::new(),
        }
    }

    pub fn set_current_layer(&mut self, id: LayerId) -> Vec<Action> {
        if self.scene.set_current_layer(id) { vec![Action::LayersChanged] } else { Vec::new() }
    }

    // --- Input events ---

    pub fn on_pointer_down(&mut self, screen_pt: Point, button: Button, modifiers: Modifiers) -> Vec<Action> {
        match (button, self.ui.mode) {
            (Button::Middle, _) | (Button::Primary, Mode::Pan) => {
                self.input = InputState::Panning { last_screen: screen_pt };
                vec![Action::SetCursor("grabbing")]
            }
            (Button::Primary, Mode::Select) => self.select_pointer_down(screen_pt, modifiers),
            (Button::Secondary, _) => Vec::new(),
        }
    }

    /// Pointer-down in select mode: handles of the current selection first,
    /// then a press inside the selection, then the selection-cycle query.
    /// Holding Alt skips the inside-selection shortcut so overlapping objects
    /// can be cycled.
    fn select_pointer_down(&mut self, screen_pt: Point, modifiers: Modifiers) -> Vec<Action> {
        let p = self.camera.pointer_to_scene(screen_pt);

        if let Some(id) = self.scene.selected() {
            if let Some(handle) = self.scene.resize_handle_at(id, p, self.camera.zoom) {
                if let Some(obj) = self.scene.get(id) {
                    let orig = ResizeSnapshot { anchor: obj.anchor(), extents: obj.extents() };
                    self.input = InputState::ResizingObject { id, handle, start: p, orig };
                    tracing::debug!(%id, ?handle, "resize started");
                    return vec![Action::SetCursor(handle.cursor())];
                }
            }
            if !modifiers.alt {
                if let Some(obj) = self.scene.get(id).filter(|o| o.contains(p)) {
                    self.input = InputState::DraggingObject { id, grab_offset: p.minus(obj.anchor()) };
                    return vec![Action::SetCursor("move")];
                }
            }
        }

        let before = self.scene.selected();
        let after = self.scene.select_at(p);
        let mut actions = Vec::new();
        if before != after {
            actions.push(Action::SelectionChanged(after));
        }
        if let Some(obj) = after.and_then(|id| self.scene.get(id)) {
            self.input = InputState::DraggingObject { id: obj.id, grab_offset: p.minus(obj.anchor()) };
            actions.push(Action::SetCursor("move"));
        }
        actions.push(Action::RenderNeeded);
        actions
    }

    pub fn on_pointer_move(&mut self, screen_pt: Point, _modifiers: Modifiers) -> Vec<Action> {
        match self.input.clone() {
            InputState::Idle => vec![Action::SetCursor(self.cursor_at(screen_pt))],
            InputState::Panning { last_screen } => {
                self.camera.pan_by(screen_pt.x - last_screen.x, screen_pt.y - last_screen.y);
                self.input = InputState::Panning { last_screen: screen_pt };
                vec![Action::RenderNeeded]
            }
            InputState::DraggingObject { id, grab_offset } => {
                let p = self.camera.pointer_to_scene(screen_pt);
                let anchor = self.config.snap(p.minus(grab_offset));
                let Some(obj) = self.scene.get_mut(id) else {
                    return Vec::new();
                };
                obj.move_to(anchor);
                vec![Action::ObjectUpdated(id), Action::RenderNeeded]
            }
            InputState::ResizingObject { id, handle, start, orig } => {
                let p = self.camera.pointer_to_scene(screen_pt);
                let resized = geometry::resize(handle, &orig, p.minus(start));
                let scale = self.config.scale;
                let Some(obj) = self.scene.get_mut(id) else {
                    return Vec::new();
                };
                obj.move_to(resized.anchor);
                obj.set_extents(resized.extents, scale);
                vec![Action::ObjectUpdated(id), Action::StatsChanged, Action::RenderNeeded]
            }
        }
    }

    pub fn on_pointer_up(&mut self, _screen_pt: Point, _button: Button, _modifiers: Modifiers) -> Vec<Action> {
        let was = std::mem::take(&mut self.input);
        match was {
            InputState::Idle => Vec::new(),
            InputState::Panning { .. } => vec![Action::SetCursor(self.ui.mode.idle_cursor())],
            InputState::DraggingObject { id, .. } | InputState::ResizingObject { id, .. } => {
                tracing::debug!(%id, "gesture finished");
                vec![Action::ObjectUpdated(id), Action::RenderNeeded]
            }
        }
    }

    /// One wheel event zooms by a fixed step, whatever its magnitude.
    pub fn on_wheel(&mut self, _screen_pt: Point, delta: WheelDelta, _modifiers: Modifiers) -> Vec<Action> {
        let zoom = self.camera.wheel(delta.dy);
        vec![Action::ZoomChanged(zoom), Action::RenderNeeded]
    }

    pub fn on_key_down(&mut self, key: Key, modifiers: Modifiers) -> Vec<Action> {
        match key.0.as_str() {
            "Delete" => self.delete_selected(),
            "d" if modifiers.ctrl => self.duplicate_selected(),
            "s" if modifiers.ctrl => vec![Action::SaveRequested],
            "o" if modifiers.ctrl => vec![Action::LoadRequested],
            "g" => self.toggle_grid(),
            _ => Vec::new(),
        }
    }

    // --- Queries ---

    /// Cursor suggested for the pointer at `screen_pt` while no gesture runs.
    #[must_use]
    pub fn cursor_at(&self, screen_pt: Point) -> &'static str {
        if self.ui.mode == Mode::Pan {
            return Mode::Pan.idle_cursor();
        }
        let Some(obj) = self.scene.selected_object() else {
            return Mode::Select.idle_cursor();
        };
        let p = self.camera.pointer_to_scene(screen_pt);
        if let Some(handle) = self.scene.resize_handle_at(obj.id, p, self.camera.zoom) {
            handle.cursor()
        } else if obj.contains(p) {
            "move"
        } else {
            Mode::Select.idle_cursor()
        }
    }

    #[must_use]
    pub fn selection(&self) -> Option<ObjectId> {
        self.scene.selected()
    }

    #[must_use]
    pub fn camera(&self) -> Camera {
        self.camera
    }

    /// Look up an object by id.
    #[must_use]
    pub fn object(&self, id: ObjectId) -> Option<&PlanObject> {
        self.scene.get(id)
    }

    /// Object count and area totals.
    #[must_use]
    pub fn stats(&self) -> AreaSummary {
        self.scene.area_summary()
    }
}

/// Browser-facing engine: [`EngineCore`] plus the canvas it draws into.
pub struct Engine {
    canvas: HtmlCanvasElement,
    pub core: EngineCore,
}

impl Engine {
    #[must_use]
    pub fn new(canvas: HtmlCanvasElement) -> Self {
        Self { canvas, core: EngineCore::new() }
    }

    // --- Viewport ---

    /// Update viewport dimensions and device pixel ratio, resizing the
    /// canvas backing store to match.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn set_viewport(&mut self, width_css: f64, height_css: f64, dpr: f64) {
        self.core.set_viewport(width_css, height_css, dpr);
        self.canvas.set_width((width_css * dpr).round().max(0.0) as u32);
        self.canvas.set_height((height_css * dpr).round().max(0.0) as u32);
    }

    // --- Delegated input events ---

    pub fn on_pointer_down(&mut self, screen_pt: Point, button: Button, modifiers: Modifiers) -> Vec<Action> {
        self.core.on_pointer_down(screen_pt, button, modifiers)
    }

    pub fn on_pointer_move(&mut self, screen_pt: Point, modifiers: Modifiers) -> Vec<Action> {
        self.core.on_pointer_move(screen_pt, modifiers)
    }

    pub fn on_pointer_up(&mut self, screen_pt: Point, button: Button, modifiers: Modifiers) -> Vec<Action> {
        self.core.on_pointer_up(screen_pt, button, modifiers)
    }

    pub fn on_wheel(&mut self, screen_pt: Point, delta: WheelDelta, modifiers: Modifiers) -> Vec<Action> {
        self.core.on_wheel(screen_pt, delta, modifiers)
    }

    pub fn on_key_down(&mut self, key: Key, modifiers: Modifiers) -> Vec<Action> {
        self.core.on_key_down(key, modifiers)
    }

    // --- Render ---

    /// Repaint the plan.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the canvas has no 2D context or a `Canvas2D` call fails.
    pub fn render(&self) -> Result<(), JsValue> {
        let ctx = self
            .canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("canvas has no 2d context"))?
            .dyn_into::<CanvasRenderingContext2d>()?;
        render::draw(&ctx, &self.core)
    }

    // --- Delegated queries ---

    #[must_use]
    pub fn selection(&self) -> Option<ObjectId> {
        self.core.selection()
    }

    #[must_use]
    pub fn camera(&self) -> Camera {
        self.core.camera()
    }

    #[must_use]
    pub fn object(&self, id: ObjectId) -> Option<&PlanObject> {
        self.core.object(id)
    }
}
