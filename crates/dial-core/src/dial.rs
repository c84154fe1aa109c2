//! Polar math for the circular slider: handle placement on the track and the
//! inverse pointer-offset-to-angle conversion.
//!
//! Angles are degrees in \[0, 360), measured clockwise from 12 o'clock, in
//! screen coordinates (y grows downward).

use glam::Vec2;

/// Wrap an angle into \[0, 360), handling negatives.
#[inline]
pub fn normalize_deg(deg: f32) -> f32 {
    let d = deg % 360.0;
    if d < 0.0 {
        d + 360.0
    } else {
        d
    }
}

/// Where the draggable handle sits on the track.
///
/// `offset` is relative to the track center; `rotation_deg` equals the dial
/// angle and is applied as a CSS rotate so the handle stays visually aligned.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HandlePlacement {
    pub offset: Vec2,
    pub rotation_deg: f32,
}

/// Place the handle on a circle of the given radius at `angle_deg`.
///
/// 0 degrees is the top of the track; the x component is `r * sin` and the y
/// component `-r * cos`, so the angle increases clockwise on screen.
#[inline]
pub fn handle_placement(angle_deg: f32, radius: f32) -> HandlePlacement {
    let theta = angle_deg.to_radians();
    HandlePlacement {
        offset: Vec2::new(radius * theta.sin(), -radius * theta.cos()),
        rotation_deg: angle_deg,
    }
}

/// Inverse of [`handle_placement`]: angle for a pointer offset from the track
/// center. A pointer straight above the center maps to 0 degrees.
///
/// The atan2 runs a half-turn out of phase and is shifted back by 180 so the
/// result lands in \[0, 360) without a second wrap for most inputs.
#[inline]
pub fn angle_from_pointer(offset: Vec2) -> f32 {
    let deg = (-offset.x).atan2(offset.y).to_degrees() + 180.0;
    normalize_deg(deg)
}
