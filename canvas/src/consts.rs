//! Shared numeric constants for the canvas crate.

// ── Hit-testing ─────────────────────────────────────────────────

/// On-screen size of a resize handle in pixels. Divided by zoom before use so
/// handles keep a constant visual size.
pub const HANDLE_SIZE_PX: f64 = 8.0;

// ── Resizing ────────────────────────────────────────────────────

/// Smallest value a trapezoid extent may reach through a resize handle.
pub const MIN_EXTENT: f64 = 10.0;

// ── Camera ──────────────────────────────────────────────────────

/// Default lower zoom bound.
pub const MIN_ZOOM: f64 = 0.25;

/// Default upper zoom bound.
pub const MAX_ZOOM: f64 = 4.0;

/// Zoom change per wheel notch.
pub const WHEEL_ZOOM_STEP: f64 = 0.1;

/// Zoom change per zoom-in / zoom-out command.
pub const BUTTON_ZOOM_STEP: f64 = 0.25;

// ── Scene ───────────────────────────────────────────────────────

/// Grid spacing in scene units.
pub const GRID_SIZE: f64 = 20.0;

/// Fallback width and height for subtypes without a catalog entry.
pub const DEFAULT_OBJECT_SIZE: f64 = 100.0;

/// Offset applied to a duplicate, on both axes, in scene units.
pub const DUPLICATE_OFFSET: f64 = 20.0;

/// Largest object or layer id accepted from a document: the top of the range
/// a JSON number holds exactly.
pub const MAX_STORED_ID: u64 = 1 << 53;

/// Suffix appended to a duplicate's name.
pub const COPY_SUFFIX: &str = " (copy)";

/// Perceived brightness above which labels are drawn in black.
pub const TEXT_BRIGHTNESS_THRESHOLD: f64 = 125.0;
