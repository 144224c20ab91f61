//! Viewing transform: world → camera → clip → screen.
//!
//! Both renderers go through this pipeline — the rasterizer forward
//! (vertices to pixels), the ray tracer backward (pixels to camera rays
//! via the inverse view-projection).

use glam::{Mat4, Vec3};
use opal_math::Ray;

use crate::camera::Camera;

/// A point mapped to screen space: x/y in pixel coordinates, z the NDC
/// depth in [0, 1] (0 at the near plane), retained for depth testing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenPoint {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

/// Cached viewing transform for one camera/viewport pairing.
#[derive(Debug, Clone)]
pub struct ViewTransform {
    view_proj: Mat4,
    inv_view_proj: Mat4,
    width: f32,
    height: f32,
}

impl ViewTransform {
    pub fn new(camera: &Camera, width: usize, height: usize) -> Self {
        let aspect = width as f32 / height.max(1) as f32;
        let view_proj = camera.view_projection_matrix(aspect);
        Self {
            view_proj,
            inv_view_proj: view_proj.inverse(),
            width: width as f32,
            height: height as f32,
        }
    }

    /// Map a world-space point to screen space.
    ///
    /// Returns `None` when the point is at or behind the camera plane
    /// (non-positive clip w), where the perspective divide is undefined.
    pub fn to_screen(&self, world: Vec3) -> Option<ScreenPoint> {
        let clip = self.view_proj * world.extend(1.0);
        if clip.w <= f32::EPSILON {
            return None;
        }

        let ndc = clip.truncate() / clip.w;
        Some(ScreenPoint {
            x: (ndc.x + 1.0) * 0.5 * self.width,
            y: (1.0 - ndc.y) * 0.5 * self.height,
            z: ndc.z,
        })
    }

    /// The camera ray through the center of pixel (x, y).
    ///
    /// Unprojects the pixel at the near and far planes; works for both
    /// perspective and orthographic projections.
    pub fn pixel_ray(&self, x: usize, y: usize) -> Ray {
        let ndc_x = (x as f32 + 0.5) / self.width * 2.0 - 1.0;
        let ndc_y = 1.0 - (y as f32 + 0.5) / self.height * 2.0;

        let near = self
            .inv_view_proj
            .project_point3(Vec3::new(ndc_x, ndc_y, 0.0));
        let far = self
            .inv_view_proj
            .project_point3(Vec3::new(ndc_x, ndc_y, 1.0));

        Ray::new(near, far - near)
    }
}
