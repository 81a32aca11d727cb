//! Input model: interaction modes, modifier keys, mouse buttons, and the
//! gesture state machine.
//!
//! `Mode` is chosen by the host (toolbar buttons), never by the controller.
//! `InputState` is the gesture tracked between pointer-down and pointer-up,
//! carrying everything needed to turn later pointer positions into shape
//! mutations. Together they give the controller's five states:
//!
//! | Mode | `InputState` | State |
//! |------|--------------|-------|
//! | `Select` | `Idle` | select-idle |
//! | `Select` | `DraggingObject` | select-dragging-move |
//! | `Select` | `ResizingObject` | select-resizing |
//! | `Pan` | `Idle` | pan-idle |
//! | `Pan` | `Panning` | pan-dragging |

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use crate::camera::Point;
use crate::doc::ObjectId;
use crate::geometry::ResizeSnapshot;
use crate::hit::ResizeHandle;

/// Pointer interaction mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Select, move and resize objects (default).
    #[default]
    Select,
    /// Drag the view.
    Pan,
}

impl Mode {
    /// Cursor shown while the mode is idle with nothing under the pointer.
    #[must_use]
    pub fn idle_cursor(self) -> &'static str {
        match self {
            Self::Select => "default",
            Self::Pan => "grab",
        }
    }
}

/// Modifier keys held when an event fired. Only `alt` and `ctrl` change
/// behavior today.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Copy, Default)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
    pub meta: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    Primary,
    /// Pans in either mode.
    Middle,
    /// Ignored.
    Secondary,
}

/// Key name as the browser reports it, e.g. `"Delete"` or `"d"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Key(pub String);

/// Scroll delta in pixels; positive `dy` scrolls down.
#[derive(Debug, Clone, Copy)]
pub struct WheelDelta {
    pub dx: f64,
    pub dy: f64,
}

/// Toolbar state the renderer reads.
#[derive(Debug, Clone)]
pub struct UiState {
    pub mode: Mode,
    pub show_grid: bool,
}

impl Default for UiState {
    fn default() -> Self {
        Self { mode: Mode::Select, show_grid: true }
    }
}

/// Gesture in progress between pointer-down and pointer-up.
#[derive(Debug, Clone, Default)]
pub enum InputState {
    #[default]
    Idle,
    /// View drag; pans by the delta from the previous viewport position.
    Panning { last_screen: Point },
    /// Moving an object. `grab_offset` is pointer minus anchor at grab time,
    /// in scene units.
    DraggingObject { id: ObjectId, grab_offset: Point },
    /// Dragging a handle. Every move is applied to `orig` using the delta
    /// from `start`, so intermediate moves do not accumulate.
    ResizingObject {
        id: ObjectId,
        handle: ResizeHandle,
        start: Point,
        orig: ResizeSnapshot,
    },
}

impl InputState {
    /// Whether a drag, resize or pan is in progress.
    #[must_use]
    pub fn is_active(&self) -> bool {
        !matches!(self, Self::Idle)
    }
}
