#![allow(clippy::float_cmp)]

use super::*;

fn pt(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

fn snapshot(x: f64, y: f64, wl: f64, wr: f64, ht: f64, hb: f64) -> ResizeSnapshot {
    ResizeSnapshot { anchor: pt(x, y), extents: Extents::new(wl, wr, ht, hb) }
}

// =============================================================
// Extents
// =============================================================

#[test]
fn even_splits_aggregates() {
    let e = Extents::even(100.0, 60.0);
    assert_eq!(e, Extents::new(50.0, 50.0, 30.0, 30.0));
}

#[test]
fn aggregates_are_sums() {
    let e = Extents::new(10.0, 30.0, 5.0, 7.0);
    assert_eq!(e.width(), 40.0);
    assert_eq!(e.height(), 12.0);
}

#[test]
fn get_and_set_address_each_extent() {
    let mut e = Extents::new(1.0, 2.0, 3.0, 4.0);
    assert_eq!(e.get(Extent::WidthLeft), 1.0);
    assert_eq!(e.get(Extent::WidthRight), 2.0);
    assert_eq!(e.get(Extent::HeightTop), 3.0);
    assert_eq!(e.get(Extent::HeightBottom), 4.0);
    e.set(Extent::HeightBottom, 9.0);
    assert_eq!(e, Extents::new(1.0, 2.0, 3.0, 9.0));
}

#[test]
fn scaled_multiplies_everything() {
    let e = Extents::new(1.0, 2.0, 3.0, 4.0).scaled(0.5);
    assert_eq!(e, Extents::new(0.5, 1.0, 1.5, 2.0));
}

// =============================================================
// Vertices and centroid
// =============================================================

#[test]
fn vertices_follow_winding_order() {
    let e = Extents::new(40.0, 60.0, 30.0, 50.0);
    assert_eq!(e.vertices(), [pt(0.0, 0.0), pt(40.0, 0.0), pt(60.0, 50.0), pt(0.0, 30.0)]);
}

#[test]
fn centroid_is_vertex_mean() {
    let e = Extents::new(40.0, 60.0, 30.0, 50.0);
    assert_eq!(e.centroid(), pt(25.0, 20.0));
}

#[test]
fn centroid_of_square_is_center() {
    assert_eq!(Extents::even(100.0, 100.0).centroid(), pt(25.0, 25.0));
}

// =============================================================
// Area
// =============================================================

#[test]
fn bounding_area_uses_total_extents() {
    let e = Extents::new(10.0, 30.0, 20.0, 5.0);
    assert_eq!(e.bounding_area(), (10.0 + 30.0) * (20.0 + 5.0));
}

#[test]
fn bounding_area_exceeds_true_trapezoid_area() {
    // Right triangle-ish trapezoid: the bounding-rectangle convention is kept.
    let e = Extents::new(100.0, 10.0, 50.0, 50.0);
    assert_eq!(e.bounding_area(), 110.0 * 100.0);
}

// =============================================================
// Containment
// =============================================================

#[test]
fn contains_interior_point() {
    let e = Extents::new(50.0, 50.0, 50.0, 50.0);
    assert!(contains(pt(0.0, 0.0), &e, pt(20.0, 20.0)));
}

#[test]
fn rejects_point_outside() {
    let e = Extents::new(50.0, 50.0, 50.0, 50.0);
    assert!(!contains(pt(0.0, 0.0), &e, pt(80.0, 20.0)));
    assert!(!contains(pt(0.0, 0.0), &e, pt(-1.0, 20.0)));
    assert!(!contains(pt(0.0, 0.0), &e, pt(20.0, 70.0)));
}

#[test]
fn contains_follows_slanted_edges() {
    // Top edge 100 long, bottom edge 20 long at y = 100: the right side slants inwards.
    let e = Extents::new(100.0, 20.0, 100.0, 100.0);
    assert!(contains(pt(0.0, 0.0), &e, pt(80.0, 10.0)));
    assert!(!contains(pt(0.0, 0.0), &e, pt(80.0, 90.0)));
}

#[test]
fn containment_is_translation_invariant() {
    let e = Extents::new(30.0, 70.0, 40.0, 60.0);
    let samples = [pt(10.0, 10.0), pt(65.0, 55.0), pt(90.0, 5.0), pt(-5.0, 20.0), pt(25.0, 38.0)];
    for v in [pt(0.0, 0.0), pt(123.5, -40.0), pt(-999.0, 777.0)] {
        for p in samples {
            let moved = pt(p.x + v.x, p.y + v.y);
            assert_eq!(contains(pt(0.0, 0.0), &e, p), contains(v, &e, moved));
        }
    }
}

#[test]
fn containment_ignores_rotation_by_construction() {
    // Only the anchor and extents take part; a rotated object tests the same
    // region as an unrotated one.
    let e = Extents::even(100.0, 20.0);
    assert!(contains(pt(0.0, 0.0), &e, pt(40.0, 5.0)));
    assert!(!contains(pt(0.0, 0.0), &e, pt(5.0, 40.0)));
}

#[test]
fn polygon_with_horizontal_edges_does_not_divide_by_zero() {
    let square = [pt(0.0, 0.0), pt(10.0, 0.0), pt(10.0, 10.0), pt(0.0, 10.0)];
    assert!(polygon_contains(&square, pt(5.0, 5.0)));
    assert!(!polygon_contains(&square, pt(15.0, 5.0)));
}

#[test]
fn empty_polygon_contains_nothing() {
    assert!(!polygon_contains(&[], pt(0.0, 0.0)));
}

// =============================================================
// Resize rules
// =============================================================

#[test]
fn bottom_right_grows_right_and_bottom_extents() {
    let orig = snapshot(0.0, 0.0, 50.0, 50.0, 50.0, 50.0);
    let out = resize(ResizeHandle::BottomRight, &orig, pt(15.0, 20.0));
    assert_eq!(out.extents, Extents::new(50.0, 65.0, 50.0, 70.0));
    assert_eq!(out.anchor, pt(0.0, 0.0));
}

#[test]
fn top_left_moves_anchor_with_delta() {
    let orig = snapshot(100.0, 100.0, 50.0, 50.0, 50.0, 50.0);
    let out = resize(ResizeHandle::TopLeft, &orig, pt(10.0, -5.0));
    assert_eq!(out.extents.width_left, 40.0);
    assert_eq!(out.extents.height_top, 55.0);
    assert_eq!(out.extents.width_right, 50.0);
    assert_eq!(out.extents.height_bottom, 50.0);
    assert_eq!(out.anchor, pt(110.0, 95.0));
}

#[test]
fn top_right_moves_only_anchor_y() {
    let orig = snapshot(0.0, 0.0, 50.0, 50.0, 50.0, 50.0);
    let out = resize(ResizeHandle::TopRight, &orig, pt(10.0, 5.0));
    assert_eq!(out.extents.width_left, 60.0);
    assert_eq!(out.extents.height_bottom, 45.0);
    assert_eq!(out.anchor, pt(0.0, 5.0));
}

#[test]
fn bottom_left_moves_only_anchor_x() {
    let orig = snapshot(0.0, 0.0, 50.0, 50.0, 50.0, 50.0);
    let out = resize(ResizeHandle::BottomLeft, &orig, pt(-10.0, 5.0));
    assert_eq!(out.extents.width_right, 60.0);
    assert_eq!(out.extents.height_top, 55.0);
    assert_eq!(out.anchor, pt(-10.0, 0.0));
}

#[test]
fn edge_handles_change_one_extent() {
    let orig = snapshot(0.0, 0.0, 50.0, 50.0, 50.0, 50.0);
    let d = pt(7.0, 9.0);

    let top = resize(ResizeHandle::Top, &orig, d);
    assert_eq!(top.extents, Extents::new(50.0, 50.0, 41.0, 50.0));
    assert_eq!(top.anchor, pt(0.0, 9.0));

    let right = resize(ResizeHandle::Right, &orig, d);
    assert_eq!(right.extents, Extents::new(50.0, 57.0, 50.0, 50.0));
    assert_eq!(right.anchor, pt(0.0, 0.0));

    let bottom = resize(ResizeHandle::Bottom, &orig, d);
    assert_eq!(bottom.extents, Extents::new(50.0, 50.0, 50.0, 59.0));
    assert_eq!(bottom.anchor, pt(0.0, 0.0));

    let left = resize(ResizeHandle::Left, &orig, d);
    assert_eq!(left.extents, Extents::new(43.0, 50.0, 50.0, 50.0));
    assert_eq!(left.anchor, pt(7.0, 0.0));
}

#[test]
fn every_handle_clamps_to_min_extent() {
    let orig = snapshot(0.0, 0.0, 50.0, 50.0, 50.0, 50.0);
    for handle in ResizeHandle::ALL {
        for d in [pt(500.0, 500.0), pt(-500.0, -500.0), pt(500.0, -500.0), pt(-500.0, 500.0)] {
            let out = resize(handle, &orig, d);
            let e = out.extents;
            for v in [e.width_left, e.width_right, e.height_top, e.height_bottom] {
                assert!(v >= MIN_EXTENT, "{handle:?} {d:?} produced {v}");
            }
        }
    }
}

#[test]
fn clamped_top_left_still_moves_anchor_by_full_delta() {
    let orig = snapshot(0.0, 0.0, 50.0, 50.0, 50.0, 50.0);
    let out = resize(ResizeHandle::TopLeft, &orig, pt(100.0, 100.0));
    assert_eq!(out.extents.width_left, MIN_EXTENT);
    assert_eq!(out.extents.height_top, MIN_EXTENT);
    assert_eq!(out.anchor, pt(100.0, 100.0));
}

#[test]
fn clamped_anchor_moving_handles_follow_raw_delta() {
    let orig = snapshot(10.0, 20.0, 50.0, 50.0, 50.0, 50.0);
    let d = pt(-300.0, 300.0);
    assert_eq!(resize(ResizeHandle::TopRight, &orig, d).anchor, pt(10.0, 320.0));
    assert_eq!(resize(ResizeHandle::Top, &orig, d).anchor, pt(10.0, 320.0));
    let d = pt(300.0, -300.0);
    assert_eq!(resize(ResizeHandle::BottomLeft, &orig, d).anchor, pt(310.0, 20.0));
    assert_eq!(resize(ResizeHandle::Left, &orig, d).anchor, pt(310.0, 20.0));
}

// =============================================================
// Text contrast
// =============================================================

#[test]
fn brightness_of_known_colors() {
    assert_eq!(brightness("#000000"), Some(0.0));
    assert_eq!(brightness("#FFFFFF"), Some(255.0));
    assert_eq!(brightness("#808080"), Some(128.0));
}

#[test]
fn light_fill_gets_black_text() {
    assert_eq!(text_color("#FFD700"), "#000");
    assert_eq!(text_color("#D3D3D3"), "#000");
}

#[test]
fn dark_fill_gets_white_text() {
    assert_eq!(text_color("#8B4513"), "#fff");
    assert_eq!(text_color("#404040"), "#fff");
}

#[test]
fn threshold_is_exclusive() {
    // 125 exactly: (125*299 + 125*587 + 125*114) / 1000 = 125.
    assert_eq!(brightness("#7d7d7d"), Some(125.0));
    assert_eq!(text_color("#7d7d7d"), "#fff");
}

#[test]
fn malformed_color_gets_white_text() {
    assert_eq!(brightness("red"), None);
    assert_eq!(brightness("#fff"), None);
    assert_eq!(brightness("#zzzzzz"), None);
    assert_eq!(text_color("not a color"), "#fff");
}
