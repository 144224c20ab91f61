//! Vertex with shading attributes.

use glam::{Vec2, Vec3};

use crate::color::Color;

/// A vertex with position, base color, texture coordinate and normal.
///
/// Plain value type, copied freely.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vertex {
    pub position: Vec3,
    pub color: Color,
    pub uv: Vec2,
    pub normal: Vec3,
}

impl Vertex {
    /// Create a vertex with the given position, white color and no
    /// normal/uv.
    pub fn at(position: Vec3) -> Self {
        Self {
            position,
            color: Color::WHITE,
            uv: Vec2::ZERO,
            normal: Vec3::ZERO,
        }
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn with_uv(mut self, uv: Vec2) -> Self {
        self.uv = uv;
        self
    }

    pub fn with_normal(mut self, normal: Vec3) -> Self {
        self.normal = normal;
        self
    }
}
