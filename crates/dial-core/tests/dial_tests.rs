// Tests for the polar handle placement math and its pointer inverse.

use dial_core::dial::{angle_from_pointer, handle_placement, normalize_deg};
use glam::Vec2;

const RADIUS: f32 = 100.0;
const TOL: f32 = 1e-3;

fn angular_diff(a: f32, b: f32) -> f32 {
    let d = (a - b).abs() % 360.0;
    d.min(360.0 - d)
}

#[test]
fn normalize_wraps_into_range() {
    assert_eq!(normalize_deg(0.0), 0.0);
    assert_eq!(normalize_deg(360.0), 0.0);
    assert_eq!(normalize_deg(720.0), 0.0);
    assert!((normalize_deg(-90.0) - 270.0).abs() < TOL);
    assert!((normalize_deg(405.0) - 45.0).abs() < TOL);
}

#[test]
fn placement_cardinal_points() {
    // 0 degrees is the top of the track (screen y grows downward)
    let top = handle_placement(0.0, RADIUS);
    assert!(top.offset.x.abs() < TOL);
    assert!((top.offset.y + RADIUS).abs() < TOL);

    let right = handle_placement(90.0, RADIUS);
    assert!((right.offset.x - RADIUS).abs() < TOL);
    assert!(right.offset.y.abs() < TOL);

    let bottom = handle_placement(180.0, RADIUS);
    assert!(bottom.offset.x.abs() < TOL);
    assert!((bottom.offset.y - RADIUS).abs() < TOL);

    let left = handle_placement(270.0, RADIUS);
    assert!((left.offset.x + RADIUS).abs() < TOL);
    assert!(left.offset.y.abs() < TOL);
}

#[test]
fn placement_rotation_matches_angle() {
    for a in [0.0, 33.0, 180.0, 301.5] {
        assert_eq!(handle_placement(a, RADIUS).rotation_deg, a);
    }
}

#[test]
fn pointer_cardinal_points() {
    // Straight up maps to 0 degrees, then clockwise
    assert!(angular_diff(angle_from_pointer(Vec2::new(0.0, -1.0)), 0.0) < TOL);
    assert!(angular_diff(angle_from_pointer(Vec2::new(1.0, 0.0)), 90.0) < TOL);
    assert!(angular_diff(angle_from_pointer(Vec2::new(0.0, 1.0)), 180.0) < TOL);
    assert!(angular_diff(angle_from_pointer(Vec2::new(-1.0, 0.0)), 270.0) < TOL);
}

#[test]
fn pointer_inverts_placement() {
    for a in [0.0_f32, 45.0, 90.0, 180.0, 270.0, 359.0] {
        let placed = handle_placement(a, RADIUS);
        let back = angle_from_pointer(placed.offset);
        assert!(
            angular_diff(back, a) < TOL,
            "round trip failed: {} -> {}",
            a,
            back
        );
    }
}

#[test]
fn pointer_angle_is_radius_independent() {
    // Only the direction of the offset matters
    for a in [17.0_f32, 133.0, 289.0] {
        let near = angle_from_pointer(handle_placement(a, 1.0).offset);
        let far = angle_from_pointer(handle_placement(a, 5000.0).offset);
        assert!(angular_diff(near, far) < TOL);
    }
}
