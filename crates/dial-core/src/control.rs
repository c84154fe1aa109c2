//! The dial controller: one owner for every piece of mutable control state.
//!
//! The web frontend holds a single `Rc<RefCell<DialController>>` and drives
//! it from three places — the frame loop (auto-rotation), the pointer
//! handlers (dragging) and the intensity slider. All three funnel through the
//! same angle -> band color -> light pipeline.

use std::time::Duration;

use glam::Vec2;

use crate::constants::{AUTO_ROTATE_PERIOD, AUTO_ROTATE_STEP_DEG, ORBIT_RADIUS_PX};
use crate::dial::{angle_from_pointer, handle_placement, normalize_deg, HandlePlacement};
use crate::light::{intensity_from_slider, AmbientLight};
use crate::palette::{color_for_angle, BandColor};

/// Pointer interaction phase for the dial widget.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DragPhase {
    #[default]
    Idle,
    Dragging,
}

pub struct DialController {
    angle_deg: f32,
    light: AmbientLight,
    drag: DragPhase,
    rotate_accum: Duration,
}

impl Default for DialController {
    fn default() -> Self {
        Self::new()
    }
}

impl DialController {
    pub fn new() -> Self {
        let angle_deg = 0.0;
        Self {
            angle_deg,
            light: AmbientLight {
                color: color_for_angle(angle_deg).light,
                ..AmbientLight::default()
            },
            drag: DragPhase::Idle,
            rotate_accum: Duration::ZERO,
        }
    }

    pub fn angle_deg(&self) -> f32 {
        self.angle_deg
    }

    pub fn light(&self) -> AmbientLight {
        self.light
    }

    /// Band color for the current angle, used to paint the handle.
    pub fn band(&self) -> BandColor {
        color_for_angle(self.angle_deg)
    }

    /// Handle offset/rotation on the widget track for the current angle.
    pub fn handle_placement(&self) -> HandlePlacement {
        handle_placement(self.angle_deg, ORBIT_RADIUS_PX)
    }

    /// Set the dial angle and pull the light color through the band table.
    pub fn set_angle(&mut self, deg: f32) {
        self.angle_deg = normalize_deg(deg);
        self.light.color = color_for_angle(self.angle_deg).light;
    }

    /// Advance the auto-rotation by elapsed wall time: one degree per period,
    /// wrapping modulo 360. Runs for the life of the page; there is no pause.
    pub fn tick(&mut self, dt: Duration) {
        self.rotate_accum += dt;
        while self.rotate_accum >= AUTO_ROTATE_PERIOD {
            self.rotate_accum -= AUTO_ROTATE_PERIOD;
            self.set_angle(self.angle_deg + AUTO_ROTATE_STEP_DEG);
        }
    }

    pub fn is_dragging(&self) -> bool {
        self.drag == DragPhase::Dragging
    }

    pub fn begin_drag(&mut self) {
        self.drag = DragPhase::Dragging;
    }

    /// Release or pointer-left-the-widget: back to idle.
    pub fn end_drag(&mut self) {
        self.drag = DragPhase::Idle;
    }

    /// Process a pointer move, given the pointer's offset from the track
    /// center. Ignored while idle; returns whether the angle was updated.
    pub fn drag_to(&mut self, pointer_offset: Vec2) -> bool {
        if self.drag != DragPhase::Dragging {
            return false;
        }
        self.set_angle(angle_from_pointer(pointer_offset));
        true
    }

    /// Apply a raw intensity-slider value. Non-numeric input never gets this
    /// far; the DOM layer drops it before parsing to an integer.
    pub fn set_intensity_raw(&mut self, raw: i32) {
        self.light.intensity = intensity_from_slider(raw);
    }
}
