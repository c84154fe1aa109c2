pub mod constants;
pub mod control;
pub mod dial;
pub mod light;
pub mod palette;
pub mod state;
pub static SCENE_WGSL: &str = include_str!("../shaders/scene.wgsl");

pub use constants::*;
pub use control::*;
pub use dial::*;
pub use light::*;
pub use palette::*;
pub use state::*;
