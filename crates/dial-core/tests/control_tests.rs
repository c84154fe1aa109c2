// Tests for the dial controller: auto-rotation, the drag state machine,
// intensity mapping and the light-state invariants.

use std::time::Duration;

use dial_core::control::DialController;
use dial_core::light::intensity_from_slider;
use dial_core::palette::{color_for_angle, COLOR_BANDS};
use glam::Vec2;

const TOL: f32 = 1e-3;

#[test]
fn defaults() {
    let ctrl = DialController::new();
    assert_eq!(ctrl.angle_deg(), 0.0);
    assert_eq!(ctrl.light().color, COLOR_BANDS[0].color.light);
    assert_eq!(ctrl.light().intensity, 1.0);
    assert!(!ctrl.is_dragging());
}

#[test]
fn full_turn_returns_to_start() {
    let mut ctrl = DialController::new();
    for _ in 0..360 {
        ctrl.tick(Duration::from_millis(10));
    }
    assert!(ctrl.angle_deg().abs() < TOL);
}

#[test]
fn partial_period_does_not_advance() {
    let mut ctrl = DialController::new();
    ctrl.tick(Duration::from_millis(5));
    assert_eq!(ctrl.angle_deg(), 0.0);
    // The remainder carries over into the next tick
    ctrl.tick(Duration::from_millis(5));
    assert!((ctrl.angle_deg() - 1.0).abs() < TOL);
}

#[test]
fn large_dt_advances_multiple_steps() {
    let mut ctrl = DialController::new();
    ctrl.tick(Duration::from_millis(450));
    assert!((ctrl.angle_deg() - 45.0).abs() < TOL);
}

#[test]
fn rotation_drives_color_through_bands() {
    let mut ctrl = DialController::new();
    // 50 periods lands in the second band
    ctrl.tick(Duration::from_millis(500));
    assert_eq!(ctrl.light().color, COLOR_BANDS[1].color.light);
    assert_eq!(ctrl.band(), COLOR_BANDS[1].color);
}

#[test]
fn intensity_slider_mapping() {
    assert_eq!(intensity_from_slider(1), 1.0);
    assert!((intensity_from_slider(5) - 1.5).abs() < TOL);
    assert!((intensity_from_slider(10) - 2.0).abs() < TOL);
    // Raw 0 follows the general formula, not the special case at 1
    assert_eq!(intensity_from_slider(0), 1.0);
    // Negative raws floor at zero
    assert_eq!(intensity_from_slider(-20), 0.0);

    let mut ctrl = DialController::new();
    ctrl.set_intensity_raw(5);
    assert!((ctrl.light().intensity - 1.5).abs() < TOL);
    ctrl.set_intensity_raw(1);
    assert_eq!(ctrl.light().intensity, 1.0);
}

#[test]
fn drag_updates_angle_and_color() {
    let mut ctrl = DialController::new();
    ctrl.begin_drag();
    assert!(ctrl.is_dragging());

    // Pointer straight right of the track center -> 90 degrees
    assert!(ctrl.drag_to(Vec2::new(100.0, 0.0)));
    assert!((ctrl.angle_deg() - 90.0).abs() < TOL);
    assert_eq!(ctrl.light().color, color_for_angle(90.0).light);
}

#[test]
fn moves_while_idle_are_ignored() {
    let mut ctrl = DialController::new();
    ctrl.begin_drag();
    assert!(ctrl.drag_to(Vec2::new(100.0, 0.0)));
    ctrl.end_drag();

    let before = ctrl.angle_deg();
    assert!(!ctrl.drag_to(Vec2::new(0.0, 100.0)));
    assert_eq!(ctrl.angle_deg(), before);
    assert_eq!(ctrl.light().color, color_for_angle(before).light);
}

#[test]
fn leaving_mid_drag_goes_idle_until_next_press() {
    // The widget's pointerleave handler calls end_drag the same way a
    // release does; moves afterwards must not touch the angle, and a fresh
    // press starts a new drag from wherever the dial was left.
    let mut ctrl = DialController::new();
    ctrl.begin_drag();
    assert!(ctrl.drag_to(Vec2::new(100.0, 0.0)));
    ctrl.end_drag();
    assert!(!ctrl.is_dragging());

    assert!(!ctrl.drag_to(Vec2::new(-100.0, 0.0)));
    assert!((ctrl.angle_deg() - 90.0).abs() < TOL);

    ctrl.begin_drag();
    assert!(ctrl.drag_to(Vec2::new(-100.0, 0.0)));
    assert!((ctrl.angle_deg() - 270.0).abs() < TOL);
}

#[test]
fn light_color_is_always_a_band_value() {
    let mut ctrl = DialController::new();
    for deg in [0.0, 39.9, 123.4, 240.0, 279.99, 359.5, 360.0, -45.0, 1000.0] {
        ctrl.set_angle(deg);
        let color = ctrl.light().color;
        assert!(
            COLOR_BANDS.iter().any(|b| b.color.light == color),
            "light color {:06x} for angle {} is not in the band table",
            color,
            deg
        );
    }
}

#[test]
fn intensity_never_negative() {
    let mut ctrl = DialController::new();
    for raw in [-100, -1, 0, 1, 7, 100] {
        ctrl.set_intensity_raw(raw);
        assert!(ctrl.light().intensity >= 0.0, "raw {} went negative", raw);
    }
}
