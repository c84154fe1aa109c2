//! Camera description shared with the web frontend.
//!
//! Platform-free on purpose: the renderer only needs the combined
//! view-projection matrix for its uniform buffer.

use glam::{Mat4, Vec3};

/// Simple right-handed camera with perspective projection.
#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera {
    /// Default pose for the dial scene: pulled back and raised so both the
    /// checkered ground and the sphere sit in frame.
    pub fn scene_default(aspect: f32) -> Self {
        Self {
            eye: Vec3::new(0.0, 3.0, 7.0),
            target: Vec3::new(0.0, 1.0, 0.0),
            up: Vec3::Y,
            aspect,
            fovy_radians: std::f32::consts::FRAC_PI_4,
            znear: 0.1,
            zfar: 100.0,
        }
    }

    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    pub fn view_proj(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }
}
