//! Ambient light state and the slider-to-intensity mapping.

use crate::constants::{DEFAULT_INTENSITY, INTENSITY_STEP};
use crate::palette::COLOR_BANDS;

/// Non-directional light applied uniformly to the whole scene.
///
/// `color` is always one of the palette's packed light values, never an
/// interpolated mix; `intensity` never goes below zero. The renderer reads
/// this every frame and rewrites its ambient uniform in place.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AmbientLight {
    pub color: u32,
    pub intensity: f32,
}

impl AmbientLight {
    /// Unpack the 0xRRGGBB color into normalized RGB for the uniform buffer.
    pub fn color_rgb(&self) -> [f32; 3] {
        [
            ((self.color >> 16) & 0xFF) as f32 / 255.0,
            ((self.color >> 8) & 0xFF) as f32 / 255.0,
            (self.color & 0xFF) as f32 / 255.0,
        ]
    }
}

impl Default for AmbientLight {
    fn default() -> Self {
        Self {
            color: COLOR_BANDS[0].color.light,
            intensity: DEFAULT_INTENSITY,
        }
    }
}

/// Map a raw slider value to a light intensity.
///
/// Raw value 1 maps to exactly 1.0; every other value follows
/// `1.0 + raw * 0.1`. The two rules disagree where they meet and that is
/// shipped behavior, kept as-is. Negative raws floor at zero to uphold the
/// intensity invariant.
#[inline]
pub fn intensity_from_slider(raw: i32) -> f32 {
    let intensity = if raw == 1 {
        1.0
    } else {
        1.0 + raw as f32 * INTENSITY_STEP
    };
    intensity.max(0.0)
}
