//! Fixed look-at camera used by all demos.

use crate::math::{Mat4, Vec3, look_at_rh, perspective_rh};

/// A camera that never moves: eye, target and lens are set once at startup.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedCamera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    /// Vertical field of view in degrees.
    pub fov_y_degrees: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for FixedCamera {
    fn default() -> Self {
        Self {
            eye: Vec3::new(3.0, 3.0, 3.0),
            target: Vec3::zeros(),
            up: Vec3::y(),
            fov_y_degrees: 45.0,
            aspect: 1024.0 / 768.0,
            near: 0.1,
            far: 100.0,
        }
    }
}

impl FixedCamera {
    /// Default lens looking from `eye` at the origin.
    pub fn looking_from(eye: Vec3) -> Self {
        Self {
            eye,
            ..Default::default()
        }
    }

    /// Set the aspect ratio from a viewport size.
    pub fn with_viewport(mut self, width: u32, height: u32) -> Self {
        if height > 0 {
            self.aspect = width as f32 / height as f32;
        }
        self
    }

    pub fn view(&self) -> Mat4 {
        look_at_rh(&self.eye, &self.target, &self.up)
    }

    pub fn projection(&self) -> Mat4 {
        perspective_rh(self.fov_y_degrees.to_radians(), self.aspect, self.near, self.far)
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection() * self.view()
    }

    /// Model-view-projection for the given model matrix.
    pub fn mvp(&self, model: &Mat4) -> Mat4 {
        self.view_projection() * model
    }
}
