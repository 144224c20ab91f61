//! Uniform view over the two traceable primitive kinds.

use std::sync::Arc;

use glam::{Vec2, Vec3};
use opal_core::{Material, Sphere, Triangle};
use opal_math::Ray;

/// A borrowed reference to a hit surface.
///
/// Identity is by address into the world scene's primitive lists, which
/// is what lets secondary rays skip the surface they start on without
/// comparing geometry.
#[derive(Debug, Clone, Copy)]
pub enum Surface<'a> {
    Triangle(&'a Triangle),
    Sphere(&'a Sphere),
}

impl<'a> Surface<'a> {
    pub fn material(&self) -> Option<&'a Arc<Material>> {
        match self {
            Surface::Triangle(t) => t.material.as_ref(),
            Surface::Sphere(s) => s.material.as_ref(),
        }
    }

    /// Unit surface normal at a point on the surface.
    pub fn normal_at(&self, point: Vec3) -> Vec3 {
        match self {
            Surface::Triangle(t) => t.unit_normal(),
            Surface::Sphere(s) => s.normal_at(point),
        }
    }

    /// Texture coordinate at a point, for surfaces that carry UVs.
    pub fn uv_at(&self, point: Vec3) -> Option<Vec2> {
        match self {
            Surface::Triangle(t) => t.interpolate_uv(point),
            Surface::Sphere(_) => None,
        }
    }

    pub fn intersect(&self, ray: &Ray) -> Option<f32> {
        match self {
            Surface::Triangle(t) => t.intersect(ray),
            Surface::Sphere(s) => s.intersect(ray),
        }
    }

    /// True when both refer to the same primitive instance.
    pub fn same(&self, other: &Surface<'_>) -> bool {
        match (self, other) {
            (Surface::Triangle(a), Surface::Triangle(b)) => std::ptr::eq(*a, *b),
            (Surface::Sphere(a), Surface::Sphere(b)) => std::ptr::eq(*a, *b),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use opal_core::Vertex;

    #[test]
    fn test_identity_is_by_address() {
        let a = Sphere::new(Vec3::ZERO, 1.0, None);
        let b = a.clone();

        assert!(Surface::Sphere(&a).same(&Surface::Sphere(&a)));
        // A clone is equal geometry but a different surface
        assert!(!Surface::Sphere(&a).same(&Surface::Sphere(&b)));
    }

    #[test]
    fn test_kinds_never_compare_equal() {
        let sphere = Sphere::new(Vec3::ZERO, 1.0, None);
        let triangle = Triangle::new(
            [
                Vertex::at(Vec3::ZERO),
                Vertex::at(Vec3::X),
                Vertex::at(Vec3::Y),
            ],
            None,
        );
        assert!(!Surface::Sphere(&sphere).same(&Surface::Triangle(&triangle)));
    }

    #[test]
    fn test_sphere_has_no_uv() {
        let sphere = Sphere::new(Vec3::ZERO, 1.0, None);
        assert!(Surface::Sphere(&sphere).uv_at(Vec3::X).is_none());
    }
}
