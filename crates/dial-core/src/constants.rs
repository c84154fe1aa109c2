// Shared dial/light tuning constants used by the web frontend.

use std::time::Duration;

// Dial widget geometry
pub const ORBIT_RADIUS_PX: f32 = 100.0; // radius of the circular slider track

// Auto-rotation
pub const AUTO_ROTATE_PERIOD: Duration = Duration::from_millis(10);
pub const AUTO_ROTATE_STEP_DEG: f32 = 1.0;

// Light defaults
pub const DEFAULT_INTENSITY: f32 = 1.0;
pub const INTENSITY_STEP: f32 = 0.1;
