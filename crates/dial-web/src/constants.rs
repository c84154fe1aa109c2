// DOM ids and scene tuning for the web frontend.

// Stable element handles expected in the host page
pub const CANVAS_ID: &str = "scene-canvas";
pub const DIAL_ID: &str = "hue-dial";
pub const HANDLE_ID: &str = "hue-dial-handle";
pub const INTENSITY_SLIDER_ID: &str = "intensity-slider";
pub const INTENSITY_READOUT_ID: &str = "intensity-readout";

// Scene layout (world units)
pub const GROUND_HALF_EXTENT: f32 = 10.0;
pub const SPHERE_RADIUS: f32 = 1.0;
pub const SPHERE_ALBEDO: [f32; 3] = [0.85, 0.85, 0.9];

// Sphere tessellation
pub const SPHERE_STACKS: u32 = 24;
pub const SPHERE_SLICES: u32 = 48;
