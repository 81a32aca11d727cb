use super::*;

fn pt(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

fn square() -> Extents {
    Extents::new(50.0, 50.0, 50.0, 50.0)
}

// =============================================================
// ResizeHandle
// =============================================================

#[test]
fn all_lists_corners_before_edges() {
    let corners: Vec<bool> = ResizeHandle::ALL.iter().map(|h| h.is_corner()).collect();
    assert_eq!(corners, vec![true, true, true, true, false, false, false, false]);
}

#[test]
fn corner_positions_are_vertices() {
    let e = Extents::new(40.0, 60.0, 30.0, 50.0);
    assert_eq!(ResizeHandle::TopLeft.position(&e), pt(0.0, 0.0));
    assert_eq!(ResizeHandle::TopRight.position(&e), pt(40.0, 0.0));
    assert_eq!(ResizeHandle::BottomRight.position(&e), pt(60.0, 50.0));
    assert_eq!(ResizeHandle::BottomLeft.position(&e), pt(0.0, 30.0));
}

#[test]
fn edge_positions_are_midpoints() {
    let e = Extents::new(40.0, 60.0, 30.0, 50.0);
    assert_eq!(ResizeHandle::Top.position(&e), pt(20.0, 0.0));
    assert_eq!(ResizeHandle::Right.position(&e), pt(50.0, 25.0));
    assert_eq!(ResizeHandle::Bottom.position(&e), pt(30.0, 40.0));
    assert_eq!(ResizeHandle::Left.position(&e), pt(0.0, 15.0));
}

#[test]
fn cursors_by_handle() {
    assert_eq!(ResizeHandle::TopLeft.cursor(), "nwse-resize");
    assert_eq!(ResizeHandle::BottomRight.cursor(), "nwse-resize");
    assert_eq!(ResizeHandle::TopRight.cursor(), "nesw-resize");
    assert_eq!(ResizeHandle::BottomLeft.cursor(), "nesw-resize");
    assert_eq!(ResizeHandle::Top.cursor(), "ns-resize");
    assert_eq!(ResizeHandle::Bottom.cursor(), "ns-resize");
    assert_eq!(ResizeHandle::Left.cursor(), "ew-resize");
    assert_eq!(ResizeHandle::Right.cursor(), "ew-resize");
}

#[test]
fn handle_serializes_kebab_case() {
    let json = serde_json::to_string(&ResizeHandle::BottomRight).unwrap();
    assert_eq!(json, "\"bottom-right\"");
}

// =============================================================
// handle_at
// =============================================================

#[test]
fn finds_corner_within_tolerance() {
    let hit = handle_at(pt(0.0, 0.0), &square(), pt(97.0, 103.0), 8.0);
    // BottomRight sits at (50, 50) for an even 100x100 square; (97, 103) is far.
    assert_eq!(hit, None);
    let hit = handle_at(pt(0.0, 0.0), &square(), pt(53.0, 47.0), 8.0);
    assert_eq!(hit, Some(ResizeHandle::BottomRight));
}

#[test]
fn finds_edge_midpoint() {
    let hit = handle_at(pt(0.0, 0.0), &square(), pt(25.0, 2.0), 8.0);
    assert_eq!(hit, Some(ResizeHandle::Top));
    let hit = handle_at(pt(0.0, 0.0), &square(), pt(1.0, 26.0), 8.0);
    assert_eq!(hit, Some(ResizeHandle::Left));
}

#[test]
fn corner_wins_over_nearby_edge() {
    // A tiny trapezoid puts Top (5, 0) within tolerance of TopLeft (0, 0).
    let e = Extents::new(10.0, 10.0, 10.0, 10.0);
    let hit = handle_at(pt(0.0, 0.0), &e, pt(3.0, 0.0), 8.0);
    assert_eq!(hit, Some(ResizeHandle::TopLeft));
}

#[test]
fn handle_test_is_relative_to_anchor() {
    let hit = handle_at(pt(200.0, 100.0), &square(), pt(200.0, 100.0), 8.0);
    assert_eq!(hit, Some(ResizeHandle::TopLeft));
    let hit = handle_at(pt(200.0, 100.0), &square(), pt(0.0, 0.0), 8.0);
    assert_eq!(hit, None);
}

#[test]
fn tolerance_bounds_are_inclusive() {
    assert_eq!(handle_at(pt(0.0, 0.0), &square(), pt(-8.0, -8.0), 8.0), Some(ResizeHandle::TopLeft));
    assert_eq!(handle_at(pt(0.0, 0.0), &square(), pt(-8.5, 0.0), 8.0), None);
}

#[test]
fn interior_point_hits_no_handle() {
    assert_eq!(handle_at(pt(0.0, 0.0), &square(), pt(20.0, 20.0), 8.0), None);
}
