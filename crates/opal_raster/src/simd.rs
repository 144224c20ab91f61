//! Eight-wide barycentric weight evaluation for the triangle fill loop.
//!
//! The edge functions of a screen triangle are affine in x and y, so a
//! whole row chunk can be evaluated at once with `wide::f32x8`. Both the
//! scalar and the eight-wide paths compute `(a*x + b*y + c) * inv_area`
//! in the same operation order, so corresponding lanes are bit-identical
//! to the scalar results.

use opal_core::{Color, ScreenPoint};
use wide::f32x8;

/// Screen-space area below which a triangle is treated as degenerate.
const DEGENERATE_AREA: f32 = 1e-8;

/// Per-triangle constants for barycentric rasterization.
///
/// Weight `i` is the edge function opposite vertex `i`, normalized by the
/// signed triangle area: it is 1 at vertex `i` and 0 along the opposite
/// edge. Inside the triangle all three weights lie in [0, 1].
#[derive(Debug, Clone)]
pub struct BatchTriangle {
    // w_i(x, y) = (a[i]*x + b[i]*y + c[i]) * inv_area
    a: [f32; 3],
    b: [f32; 3],
    c: [f32; 3],
    inv_area: f32,
    depths: [f32; 3],
    colors: [Color; 3],
}

impl BatchTriangle {
    /// Build the edge-function constants for a screen triangle, or `None`
    /// when its area is too small to rasterize.
    pub fn new(points: &[ScreenPoint; 3], colors: [Color; 3]) -> Option<Self> {
        let [p0, p1, p2] = points;

        let area = (p1.x - p0.x) * (p2.y - p0.y) - (p1.y - p0.y) * (p2.x - p0.x);
        if area.abs() < DEGENERATE_AREA {
            return None;
        }

        // Edge function for weight i runs along the edge opposite vertex i
        Some(Self {
            a: [p1.y - p2.y, p2.y - p0.y, p0.y - p1.y],
            b: [p2.x - p1.x, p0.x - p2.x, p1.x - p0.x],
            c: [
                p1.x * p2.y - p1.y * p2.x,
                p2.x * p0.y - p2.y * p0.x,
                p0.x * p1.y - p0.y * p1.x,
            ],
            inv_area: 1.0 / area,
            depths: [p0.z, p1.z, p2.z],
            colors,
        })
    }

    /// Barycentric weights at one pixel position.
    #[inline]
    pub fn weights(&self, x: f32, y: f32) -> [f32; 3] {
        [
            (self.a[0] * x + self.b[0] * y + self.c[0]) * self.inv_area,
            (self.a[1] * x + self.b[1] * y + self.c[1]) * self.inv_area,
            (self.a[2] * x + self.b[2] * y + self.c[2]) * self.inv_area,
        ]
    }

    /// Barycentric weights at eight pixel positions at once.
    ///
    /// Lane `i` equals `self.weights(x[i], y[i])` bit for bit: the lanes
    /// run the same IEEE multiply/add sequence as the scalar path.
    #[inline]
    pub fn weights_x8(&self, x: f32x8, y: f32x8) -> [f32x8; 3] {
        let inv_area = f32x8::splat(self.inv_area);
        [
            (f32x8::splat(self.a[0]) * x + f32x8::splat(self.b[0]) * y + f32x8::splat(self.c[0]))
                * inv_area,
            (f32x8::splat(self.a[1]) * x + f32x8::splat(self.b[1]) * y + f32x8::splat(self.c[1]))
                * inv_area,
            (f32x8::splat(self.a[2]) * x + f32x8::splat(self.b[2]) * y + f32x8::splat(self.c[2]))
                * inv_area,
        ]
    }

    /// True when all three weights lie in [0, 1] (boundary inclusive).
    #[inline]
    pub fn covers(weights: &[f32; 3]) -> bool {
        weights
            .iter()
            .all(|&w| (0.0..=1.0).contains(&w))
    }

    /// Interpolated NDC depth at the given weights.
    #[inline]
    pub fn depth(&self, weights: &[f32; 3]) -> f32 {
        self.depths[0] * weights[0] + self.depths[1] * weights[1] + self.depths[2] * weights[2]
    }

    /// Interpolated vertex color at the given weights.
    #[inline]
    pub fn color(&self, weights: &[f32; 3]) -> Color {
        let [w0, w1, w2] = *weights;
        let [c0, c1, c2] = self.colors;
        Color::new(
            c0.r * w0 + c1.r * w1 + c2.r * w2,
            c0.g * w0 + c1.g * w1 + c2.g * w2,
            c0.b * w0 + c1.b * w1 + c2.b * w2,
            c0.a * w0 + c1.a * w1 + c2.a * w2,
        )
    }

    /// Color of vertex `i`, for flat shading.
    #[inline]
    pub fn vertex_color(&self, i: usize) -> Color {
        self.colors[i]
    }
}
