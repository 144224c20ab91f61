//! Barycentric coordinate computation.
//!
//! Two mathematically related forms are provided:
//!
//! - [`barycentric_2d`] — the screen-space edge-function form used by the
//!   rasterizer and by texture lookups on projected triangles.
//! - [`barycentric_3d`] — the world-space form normalized by the squared
//!   face-normal length, used for points on a triangle's plane in 3D.
//!
//! Both return weights `(w0, w1, w2)` where weight i belongs to vertex i,
//! the weights always sum to 1 (also for points outside the triangle), and
//! both agree at vertices and along edges.

use crate::{Vec2, Vec3};

/// Triangles whose signed area (2D) or squared normal length (3D) falls
/// below this are treated as degenerate and yield no coordinates.
pub const DEGENERATE_EPSILON: f32 = 1e-12;

#[inline]
fn cross_2d(a: Vec2, b: Vec2) -> f32 {
    a.x * b.y - a.y * b.x
}

/// Barycentric coordinates of `p` relative to the 2D triangle `(a, b, c)`.
///
/// Uses the signed-edge-distance (edge function) formulation: each weight
/// is the signed area of the sub-triangle spanned by the opposite edge and
/// `p`, over the full signed area. Returns `None` for degenerate
/// (near-zero-area) triangles.
pub fn barycentric_2d(p: Vec2, a: Vec2, b: Vec2, c: Vec2) -> Option<Vec3> {
    let area = cross_2d(b - a, c - a);
    if area.abs() < DEGENERATE_EPSILON {
        return None;
    }

    let inv_area = 1.0 / area;
    let w0 = cross_2d(c - b, p - b) * inv_area;
    let w1 = cross_2d(a - c, p - c) * inv_area;
    let w2 = 1.0 - w0 - w1;

    Some(Vec3::new(w0, w1, w2))
}

/// Barycentric coordinates of `p` relative to the 3D triangle `(a, b, c)`.
///
/// Projects the sub-triangle cross products onto the face normal and
/// normalizes by the squared normal length. `p` is expected to lie on (or
/// near) the triangle's plane; off-plane points get the coordinates of
/// their projection. Returns `None` for degenerate triangles.
pub fn barycentric_3d(p: Vec3, a: Vec3, b: Vec3, c: Vec3) -> Option<Vec3> {
    let normal = (b - a).cross(c - a);
    let len_sq = normal.length_squared();
    if len_sq < DEGENERATE_EPSILON {
        return None;
    }

    let inv = 1.0 / len_sq;
    let w0 = normal.dot((c - b).cross(p - b)) * inv;
    let w1 = normal.dot((a - c).cross(p - c)) * inv;
    let w2 = 1.0 - w0 - w1;

    Some(Vec3::new(w0, w1, w2))
}
