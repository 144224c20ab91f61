//! Triangle primitive.

use std::sync::Arc;

use glam::{Vec2, Vec3};
use opal_math::{barycentric_3d, Ray};

use crate::material::Material;
use crate::vertex::Vertex;

/// Tolerance for the edge-containment test, scaled by the squared normal
/// length so it tracks triangle size.
const EDGE_EPSILON: f32 = 1e-6;

/// A triangle with three vertices in counter-clockwise winding and a
/// shared material reference.
///
/// The winding defines the outward face normal via the cross product.
/// Immutable once constructed except through [`Triangle::transformed`].
#[derive(Debug, Clone)]
pub struct Triangle {
    pub vertices: [Vertex; 3],
    pub material: Option<Arc<Material>>,
}

impl Triangle {
    pub fn new(vertices: [Vertex; 3], material: Option<Arc<Material>>) -> Self {
        Self { vertices, material }
    }

    /// The unnormalized face normal, (v1−v0) × (v2−v0).
    pub fn face_normal(&self) -> Vec3 {
        let edge1 = self.vertices[1].position - self.vertices[0].position;
        let edge2 = self.vertices[2].position - self.vertices[0].position;
        edge1.cross(edge2)
    }

    /// The unit face normal, or zero for degenerate triangles.
    pub fn unit_normal(&self) -> Vec3 {
        self.face_normal().normalize_or_zero()
    }

    /// A copy of this triangle with positions transformed as points and
    /// normals transformed as directions. Colors, UVs and the material
    /// reference are carried over.
    pub fn transformed(&self, matrix: &glam::Mat4) -> Triangle {
        let mut vertices = self.vertices;
        for vertex in &mut vertices {
            vertex.position = matrix.transform_point3(vertex.position);
            vertex.normal = matrix.transform_vector3(vertex.normal).normalize_or_zero();
        }
        Triangle {
            vertices,
            material: self.material.clone(),
        }
    }

    /// Intersect a ray with this triangle.
    ///
    /// Intersects the ray with the triangle's plane via the face normal,
    /// rejects hits behind the origin, then tests the hit point against
    /// all three edges by cross-product sign consistency (edges
    /// inclusive). Returns the distance parameter along the ray.
    pub fn intersect(&self, ray: &Ray) -> Option<f32> {
        let normal = self.face_normal();
        let denom = normal.dot(ray.direction);
        if denom.abs() < f32::EPSILON {
            // Ray parallel to the plane (or degenerate triangle)
            return None;
        }

        let t = normal.dot(self.vertices[0].position - ray.origin) / denom;
        if t < 0.0 {
            return None;
        }

        let point = ray.at(t);
        let tolerance = -EDGE_EPSILON * normal.length_squared().max(1.0);
        for i in 0..3 {
            let a = self.vertices[i].position;
            let b = self.vertices[(i + 1) % 3].position;
            if normal.dot((b - a).cross(point - a)) < tolerance {
                return None;
            }
        }

        Some(t)
    }

    /// Interpolate the vertex UVs at a world-space point on the triangle,
    /// using the 3D barycentric form. Returns `None` for degenerate
    /// triangles.
    pub fn interpolate_uv(&self, point: Vec3) -> Option<Vec2> {
        let [v0, v1, v2] = &self.vertices;
        let w = barycentric_3d(point, v0.position, v1.position, v2.position)?;
        Some(v0.uv * w.x + v1.uv * w.y + v2.uv * w.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_triangle() -> Triangle {
        // CCW in the XY plane, normal toward +Z
        Triangle::new(
            [
                Vertex::at(Vec3::new(0.0, 0.0, 0.0)).with_uv(Vec2::new(0.0, 0.0)),
                Vertex::at(Vec3::new(1.0, 0.0, 0.0)).with_uv(Vec2::new(1.0, 0.0)),
                Vertex::at(Vec3::new(0.0, 1.0, 0.0)).with_uv(Vec2::new(0.0, 1.0)),
            ],
            None,
        )
    }

    #[test]
    fn test_face_normal_from_winding() {
        let normal = unit_triangle().unit_normal();
        assert!((normal - Vec3::Z).length() < 1e-5);
    }

    #[test]
    fn test_intersect_center_hit() {
        let triangle = unit_triangle();
        let ray = Ray::new(Vec3::new(0.25, 0.25, 5.0), Vec3::new(0.0, 0.0, -1.0));

        let t = triangle.intersect(&ray).expect("ray should hit");
        assert!((t - 5.0).abs() < 1e-4);
    }

    #[test]
    fn test_intersect_edges_inclusive() {
        let triangle = unit_triangle();

        // Straight at a vertex and at an edge midpoint
        for target in [Vec3::ZERO, Vec3::new(0.5, 0.0, 0.0)] {
            let ray = Ray::new(target + Vec3::Z, Vec3::NEG_Z);
            assert!(
                triangle.intersect(&ray).is_some(),
                "edge point {target:?} should hit"
            );
        }
    }

    #[test]
    fn test_intersect_outside_misses() {
        let triangle = unit_triangle();
        let ray = Ray::new(Vec3::new(0.9, 0.9, 5.0), Vec3::new(0.0, 0.0, -1.0));
        assert!(triangle.intersect(&ray).is_none());
    }

    #[test]
    fn test_intersect_behind_origin_rejected() {
        let triangle = unit_triangle();
        let ray = Ray::new(Vec3::new(0.25, 0.25, 5.0), Vec3::new(0.0, 0.0, 1.0));
        assert!(triangle.intersect(&ray).is_none());
    }

    #[test]
    fn test_intersect_parallel_ray_misses() {
        let triangle = unit_triangle();
        let ray = Ray::new(Vec3::new(0.0, 0.0, 1.0), Vec3::X);
        assert!(triangle.intersect(&ray).is_none());
    }

    #[test]
    fn test_interpolate_uv_at_vertices() {
        let triangle = unit_triangle();
        for vertex in &triangle.vertices {
            let uv = triangle.interpolate_uv(vertex.position).unwrap();
            assert!((uv - vertex.uv).length() < 1e-5);
        }
    }

    #[test]
    fn test_transformed_moves_positions_not_material() {
        let material = Arc::new(Material::default());
        let mut triangle = unit_triangle();
        triangle.material = Some(material.clone());

        let matrix = glam::Mat4::from_translation(Vec3::new(10.0, 0.0, 0.0));
        let moved = triangle.transformed(&matrix);

        assert_eq!(moved.vertices[0].position, Vec3::new(10.0, 0.0, 0.0));
        assert!(Arc::ptr_eq(moved.material.as_ref().unwrap(), &material));
        // Original untouched
        assert_eq!(triangle.vertices[0].position, Vec3::ZERO);
    }

    #[test]
    fn test_transformed_normals_are_directions() {
        let mut triangle = unit_triangle();
        for vertex in &mut triangle.vertices {
            vertex.normal = Vec3::Z;
        }

        // Translation moves points but must leave normals alone (w = 0)
        let matrix = glam::Mat4::from_translation(Vec3::new(3.0, 4.0, 5.0));
        let moved = triangle.transformed(&matrix);
        assert!((moved.vertices[0].normal - Vec3::Z).length() < 1e-5);

        // Rotation turns them, and they stay unit length under scale
        let matrix = glam::Mat4::from_rotation_x(std::f32::consts::FRAC_PI_2)
            * glam::Mat4::from_scale(Vec3::splat(3.0));
        let turned = triangle.transformed(&matrix);
        assert!((turned.vertices[0].normal - Vec3::NEG_Y).length() < 1e-5);
    }
}
