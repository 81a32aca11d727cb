//! Canvas2D drawing of a plan: grid, objects bottom-first, and the overlay
//! of the selected object (thick outline, size and surface labels, handles).
//!
//! Read-only over [`EngineCore`]. Context errors bubble up to
//! [`crate::engine::Engine::render`].

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use crate::camera::Camera;
use crate::catalog;
use crate::consts::HANDLE_SIZE_PX;
use crate::doc::PlanObject;
use crate::engine::EngineCore;
use crate::hit::ResizeHandle;

const GRID_COLOR: &str = "#e0e0e0";
const GRID_LINE_WIDTH: f64 = 0.5;
const OUTLINE_COLOR: &str = "#000";
const SELECTED_COLOR: &str = "#3498db";
const ANNOTATION_COLOR: &str = "#2c3e50";
const HANDLE_FILL: &str = "#fff";

/// Vertical distance from the shape's lowest vertex to the size annotation.
const ANNOTATION_GAP: f64 = 15.0;

/// Draw the full scene: grid, objects in paint order, and selection UI.
///
/// # Errors
///
/// Returns the `JsValue` of the first failing context call.
pub fn draw(ctx: &CanvasRenderingContext2d, core: &EngineCore) -> Result<(), JsValue> {
    let camera = &core.camera;

    // Layer 1: clear in device pixels.
    ctx.set_transform(core.dpr, 0.0, 0.0, core.dpr, 0.0, 0.0)?;
    ctx.clear_rect(0.0, 0.0, core.viewport_width, core.viewport_height);

    // Layer 2: the pan offset applies to everything below.
    ctx.save();
    ctx.translate(camera.pan_x, camera.pan_y)?;

    if core.ui.show_grid {
        draw_grid(ctx, camera, core.config.grid_size, core.viewport_width, core.viewport_height);
    }

    // Layer 3: objects, scaled by zoom.
    ctx.scale(camera.zoom, camera.zoom)?;
    for obj in core.scene.paint_order() {
        draw_object(ctx, obj, core.scene.is_selected(obj.id), camera.zoom)?;
    }

    ctx.restore();
    Ok(())
}

fn draw_grid(ctx: &CanvasRenderingContext2d, camera: &Camera, grid_size: f64, width: f64, height: f64) {
    let step = camera.grid_step(grid_size);
    if step <= 0.0 {
        return;
    }
    let origin = camera.grid_origin(grid_size);
    ctx.set_stroke_style_str(GRID_COLOR);
    ctx.set_line_width(GRID_LINE_WIDTH);

    let mut x = origin.x;
    while x < width {
        ctx.begin_path();
        ctx.move_to(x, 0.0);
        ctx.line_to(x, height);
        ctx.stroke();
        x += step;
    }

    let mut y = origin.y;
    while y < height {
        ctx.begin_path();
        ctx.move_to(0.0, y);
        ctx.line_to(width, y);
        ctx.stroke();
        y += step;
    }
}

fn draw_object(ctx: &CanvasRenderingContext2d, obj: &PlanObject, selected: bool, zoom: f64) -> Result<(), JsValue> {
    ctx.save();
    let anchor = obj.anchor();
    ctx.translate(anchor.x, anchor.y)?;
    ctx.rotate(obj.rotation.to_radians())?;

    let [first, rest @ ..] = obj.vertices();
    ctx.begin_path();
    ctx.move_to(first.x, first.y);
    for v in rest {
        ctx.line_to(v.x, v.y);
    }
    ctx.close_path();

    ctx.set_fill_style_str(&obj.color);
    ctx.fill();
    if selected {
        ctx.set_stroke_style_str(SELECTED_COLOR);
        ctx.set_line_width(3.0);
    } else {
        ctx.set_stroke_style_str(OUTLINE_COLOR);
        ctx.set_line_width(1.0);
    }
    ctx.stroke();

    let label = obj.centroid();
    ctx.set_fill_style_str(obj.text_color());
    ctx.set_font("bold 12px Arial");
    ctx.set_text_align("center");
    ctx.set_text_baseline("middle");
    ctx.fill_text(&obj.name, label.x, label.y)?;

    if selected {
        draw_annotations(ctx, obj, label.x)?;
        draw_handles(ctx, obj, zoom);
    }

    ctx.restore();
    Ok(())
}

/// Real-world size below the shape, plus the surface for area-bearing
/// categories.
fn draw_annotations(ctx: &CanvasRenderingContext2d, obj: &PlanObject, center_x: f64) -> Result<(), JsValue> {
    let extents = obj.extents();
    let bottom = extents.height_top.max(extents.height_bottom);
    ctx.set_fill_style_str(ANNOTATION_COLOR);
    ctx.set_font("10px Arial");

    let size = format!("{:.1}m × {:.1}m", obj.real_width(), obj.real_height());
    ctx.fill_text(&size, center_x, bottom + ANNOTATION_GAP)?;

    if catalog::shows_surface(obj.category, &obj.subtype) {
        let surface = format!("Surface: {:.1} m²", obj.area());
        ctx.fill_text(&surface, center_x, bottom + 2.0 * ANNOTATION_GAP)?;
    }
    Ok(())
}

fn draw_handles(ctx: &CanvasRenderingContext2d, obj: &PlanObject, zoom: f64) {
    let size = HANDLE_SIZE_PX / zoom;
    let extents = obj.extents();
    ctx.set_fill_style_str(HANDLE_FILL);
    ctx.set_stroke_style_str(SELECTED_COLOR);
    ctx.set_line_width(1.0 / zoom);
    for handle in ResizeHandle::ALL {
        let p = handle.position(&extents);
        ctx.fill_rect(p.x - size / 2.0, p.y - size / 2.0, size, size);
        ctx.stroke_rect(p.x - size / 2.0, p.y - size / 2.0, size, size);
    }
}
