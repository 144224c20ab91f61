//! Camera with a world position/orientation frame and projection settings.

use glam::{Mat4, Vec3};
use serde::{Deserialize, Serialize};

/// Projection type for the camera.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Projection {
    Perspective,
    Orthographic,
}

/// Camera for 3D rendering.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Camera {
    pub position: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub projection: Projection,
    pub fov_y: f32,
    pub near: f32,
    pub far: f32,
}

impl Camera {
    /// Create a new perspective camera.
    pub fn new(position: Vec3, target: Vec3) -> Self {
        Self {
            position,
            target,
            up: Vec3::Y,
            projection: Projection::Perspective,
            fov_y: 45.0_f32.to_radians(),
            near: 0.1,
            far: 100.0,
        }
    }

    /// Switch to orthographic projection.
    pub fn orthographic(mut self) -> Self {
        self.projection = Projection::Orthographic;
        self
    }

    /// The direction the camera looks along.
    pub fn forward(&self) -> Vec3 {
        (self.target - self.position).normalize_or_zero()
    }

    /// Get the view matrix (world → camera space)
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.target, self.up)
    }

    /// Get the projection matrix (camera → clip space) for a viewport
    /// with the given aspect ratio. NDC depth runs 0 (near) to 1 (far).
    pub fn projection_matrix(&self, aspect: f32) -> Mat4 {
        match self.projection {
            Projection::Perspective => Mat4::perspective_rh(self.fov_y, aspect, self.near, self.far),
            Projection::Orthographic => {
                // Frame height chosen so the target plane matches what the
                // perspective projection would show.
                let distance = (self.target - self.position).length();
                let half_height = (self.fov_y * 0.5).tan() * distance;
                let half_width = half_height * aspect;
                Mat4::orthographic_rh(
                    -half_width,
                    half_width,
                    -half_height,
                    half_height,
                    self.near,
                    self.far,
                )
            }
        }
    }

    /// Get the combined view-projection matrix
    pub fn view_projection_matrix(&self, aspect: f32) -> Mat4 {
        self.projection_matrix(aspect) * self.view_matrix()
    }
}
