//! Placed objects: a model plus a world transform.

use glam::{Mat4, Vec3};

use crate::mesh::Model;
use crate::sphere::Sphere;
use crate::triangle::Triangle;

/// A model instance with world position, per-axis rotation and scale,
/// plus a flat list of world-space spheres.
///
/// The derived world matrix applies scale first, then the X, Y and Z
/// rotations in that order, then the translation. The order is a contract:
/// changing it changes visual output. Spheres are not transformed by the
/// matrix — they are expected to be defined directly in world space.
#[derive(Debug, Clone)]
pub struct Object3D {
    pub model: Model,
    pub spheres: Vec<Sphere>,
    pub position: Vec3,
    /// Per-axis rotation in radians.
    pub rotation: Vec3,
    pub scale: Vec3,
}

impl Object3D {
    pub fn new(model: Model) -> Self {
        Self {
            model,
            spheres: Vec::new(),
            position: Vec3::ZERO,
            rotation: Vec3::ZERO,
            scale: Vec3::ONE,
        }
    }

    /// Build an object from a flat triangle list.
    pub fn from_triangles(triangles: Vec<Triangle>) -> Self {
        Self::new(Model::from_triangles(triangles))
    }

    /// Build an object holding only spheres.
    pub fn from_spheres(spheres: Vec<Sphere>) -> Self {
        let mut object = Self::new(Model::new());
        object.spheres = spheres;
        object
    }

    pub fn with_position(mut self, position: Vec3) -> Self {
        self.position = position;
        self
    }

    pub fn with_rotation(mut self, rotation: Vec3) -> Self {
        self.rotation = rotation;
        self
    }

    pub fn with_scale(mut self, scale: Vec3) -> Self {
        self.scale = scale;
        self
    }

    /// The object-local → world matrix: scale, then rotate X, rotate Y,
    /// rotate Z, then translate.
    pub fn world_matrix(&self) -> Mat4 {
        Mat4::from_translation(self.position)
            * Mat4::from_rotation_z(self.rotation.z)
            * Mat4::from_rotation_y(self.rotation.y)
            * Mat4::from_rotation_x(self.rotation.x)
            * Mat4::from_scale(self.scale)
    }
}
