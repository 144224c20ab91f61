//! Root scene aggregate.

use crate::color::Color;
use crate::light::Light;
use crate::object::Object3D;

/// A complete scene: background color, lights and placed objects.
///
/// Built by external loaders and owned by the caller; the rendering core
/// borrows it read-only (the ray tracer derives its own transformed
/// working copy).
#[derive(Debug, Clone)]
pub struct Scene {
    pub background: Color,
    pub lights: Vec<Light>,
    pub objects: Vec<Object3D>,
}

impl Scene {
    pub fn new(background: Color) -> Self {
        Self {
            background,
            lights: Vec::new(),
            objects: Vec::new(),
        }
    }

    pub fn add_light(&mut self, light: Light) {
        self.lights.push(light);
    }

    pub fn add_object(&mut self, object: Object3D) {
        self.objects.push(object);
    }

    /// Total triangle count across all objects.
    pub fn triangle_count(&self) -> usize {
        self.objects.iter().map(|o| o.model.triangle_count()).sum()
    }

    /// Total sphere count across all objects.
    pub fn sphere_count(&self) -> usize {
        self.objects.iter().map(|o| o.spheres.len()).sum()
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new(Color::BLACK)
    }
}
