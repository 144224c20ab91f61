//! Sphere primitive.

use std::sync::Arc;

use glam::Vec3;
use opal_math::Ray;

use crate::material::Material;

/// A sphere with a world-space center.
///
/// Spheres are defined directly in world space: object transforms apply to
/// triangle meshes only and leave sphere centers and radii untouched.
#[derive(Debug, Clone)]
pub struct Sphere {
    pub center: Vec3,
    pub radius: f32,
    pub material: Option<Arc<Material>>,
}

impl Sphere {
    pub fn new(center: Vec3, radius: f32, material: Option<Arc<Material>>) -> Self {
        Self {
            center,
            radius: radius.max(0.0),
            material,
        }
    }

    /// Outward unit normal at a point on the surface.
    ///
    /// A degenerate zero-radius sphere yields a zero normal rather than
    /// NaN, which shades to black downstream.
    pub fn normal_at(&self, point: Vec3) -> Vec3 {
        (point - self.center).normalize_or_zero()
    }

    /// Intersect a ray with this sphere.
    ///
    /// Standard quadratic-discriminant solve; returns the nearest
    /// non-negative root as a distance parameter along the ray.
    pub fn intersect(&self, ray: &Ray) -> Option<f32> {
        let oc = ray.origin - self.center;
        let a = ray.direction.length_squared();
        if a < f32::EPSILON {
            return None;
        }
        let half_b = oc.dot(ray.direction);
        let c = oc.length_squared() - self.radius * self.radius;

        let discriminant = half_b * half_b - a * c;
        if discriminant < 0.0 {
            return None;
        }

        let sqrtd = discriminant.sqrt();

        // Nearest non-negative root
        let mut root = (-half_b - sqrtd) / a;
        if root < 0.0 {
            root = (-half_b + sqrtd) / a;
            if root < 0.0 {
                return None;
            }
        }

        Some(root)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diagonal_hit_distance_and_normal() {
        let sphere = Sphere::new(Vec3::ZERO, 1.0, None);
        let ray = Ray::new(Vec3::new(2.0, 2.0, 2.0), Vec3::new(-2.0, -2.0, -2.0));

        let t = sphere.intersect(&ray).expect("ray should hit");
        assert!((t - 0.71132).abs() < 1e-4);

        let point = ray.at(t);
        let normal = sphere.normal_at(point);
        let expected = Vec3::splat(0.57735);
        assert!((normal - expected).length() < 1e-4);
        assert!((normal.length() - 1.0).abs() < 1e-4);
    }

    #[test]
    fn test_miss() {
        let sphere = Sphere::new(Vec3::new(0.0, 0.0, -5.0), 1.0, None);
        let ray = Ray::new(Vec3::ZERO, Vec3::Y);
        assert!(sphere.intersect(&ray).is_none());
    }

    #[test]
    fn test_inside_hit_returns_exit_root() {
        let sphere = Sphere::new(Vec3::ZERO, 2.0, None);
        let ray = Ray::new(Vec3::ZERO, Vec3::X);

        let t = sphere.intersect(&ray).expect("ray should exit the sphere");
        assert!((t - 2.0).abs() < 1e-4);
    }

    #[test]
    fn test_zero_radius_normal_is_finite() {
        let sphere = Sphere::new(Vec3::ONE, 0.0, None);
        let normal = sphere.normal_at(Vec3::ONE);
        assert!(normal.is_finite());
        assert_eq!(normal, Vec3::ZERO);
    }

    #[test]
    fn test_sphere_behind_origin_rejected() {
        let sphere = Sphere::new(Vec3::new(0.0, 0.0, 5.0), 1.0, None);
        let ray = Ray::new(Vec3::ZERO, Vec3::NEG_Z);
        assert!(sphere.intersect(&ray).is_none());
    }
}
