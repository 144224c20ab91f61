//! Flattened world-space copy of a scene for tracing.

use opal_core::{Color, Light, Scene, Sphere, Triangle};

/// The tracer's working copy of a scene: every visible triangle baked
/// into world space, spheres and lights gathered into flat lists.
///
/// Built once per render so the per-ray loops never touch object
/// transforms or mesh visibility again.
#[derive(Debug, Clone)]
pub struct WorldScene {
    pub background: Color,
    pub lights: Vec<Light>,
    pub triangles: Vec<Triangle>,
    pub spheres: Vec<Sphere>,
}

impl WorldScene {
    pub fn from_scene(scene: &Scene) -> Self {
        let mut triangles = Vec::with_capacity(scene.triangle_count());
        let mut spheres = Vec::with_capacity(scene.sphere_count());

        for object in &scene.objects {
            let matrix = object.world_matrix();
            for mesh in object.model.meshes() {
                if !mesh.visible {
                    continue;
                }
                for triangle in &mesh.triangles {
                    triangles.push(triangle.transformed(&matrix));
                }
            }
            // Spheres are world-space by contract, no transform applied
            spheres.extend(object.spheres.iter().cloned());
        }

        Self {
            background: scene.background,
            lights: scene.lights.clone(),
            triangles,
            spheres,
        }
    }

    pub fn surface_count(&self) -> usize {
        self.triangles.len() + self.spheres.len()
    }
}
