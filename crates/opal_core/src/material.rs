//! Material definition for both renderers.
//!
//! A material is shared by many triangles through an `Arc` — triangles
//! never own a private copy, and nothing in the core mutates a material
//! after construction.

use std::sync::Arc;

use glam::Vec2;

use crate::color::Color;
use crate::texture::Texture;

/// How a triangle's pixels get their color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShadingMode {
    /// Draw only the three edges.
    Wireframe,
    /// Every pixel takes vertex 0's color, no interpolation.
    Flat,
    /// Interpolate the three vertex colors by barycentric weights.
    FaceVertexColor,
    /// Per-vertex lighting, interpolated across the face.
    Gouraud,
    /// Like Gouraud, plus a diffuse texture modulated in per pixel.
    Textured,
    /// Full ambient/diffuse/specular material evaluation.
    Material,
}

/// A colored, optionally textured material property group.
///
/// Used for the ambient, diffuse and specular terms: each carries a base
/// color and may carry its own texture.
#[derive(Clone, Debug, Default)]
pub struct SurfaceLayer {
    pub color: Color,
    pub texture: Option<Arc<Texture>>,
}

impl SurfaceLayer {
    pub fn from_color(color: Color) -> Self {
        Self {
            color,
            texture: None,
        }
    }

    pub fn with_texture(color: Color, texture: Arc<Texture>) -> Self {
        Self {
            color,
            texture: Some(texture),
        }
    }

    /// The layer color, modulated by its texture sample when both a
    /// texture and UV coordinates are present.
    pub fn sample(&self, uv: Option<Vec2>) -> Color {
        match (&self.texture, uv) {
            (Some(texture), Some(uv)) => self.color.modulate(texture.sample_nearest(uv.x, uv.y)),
            _ => self.color,
        }
    }
}

/// Surface material shared by triangles and spheres.
#[derive(Clone, Debug)]
pub struct Material {
    pub mode: ShadingMode,
    pub ambient: SurfaceLayer,
    pub diffuse: SurfaceLayer,
    pub specular: SurfaceLayer,
    /// Exponent of the specular highlight; larger is tighter.
    pub specular_power: f32,
    /// Proportion of reflected color mixed in, in [0, 1]. Zero disables
    /// reflection rays entirely.
    pub reflectivity: f32,
    pub emissive: Color,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            mode: ShadingMode::Material,
            ambient: SurfaceLayer::from_color(Color::rgb(0.1, 0.1, 0.1)),
            diffuse: SurfaceLayer::from_color(Color::rgb(0.5, 0.5, 0.5)),
            specular: SurfaceLayer::from_color(Color::rgb(0.5, 0.5, 0.5)),
            specular_power: 32.0,
            reflectivity: 0.0,
            emissive: Color::BLACK,
        }
    }
}

impl Material {
    /// Create a material with the given shading mode and diffuse color.
    pub fn new(mode: ShadingMode, diffuse_color: Color) -> Self {
        Self {
            mode,
            diffuse: SurfaceLayer::from_color(diffuse_color),
            ..Default::default()
        }
    }

    /// Set the reflectivity proportion (clamped to [0, 1]).
    pub fn with_reflectivity(mut self, reflectivity: f32) -> Self {
        self.reflectivity = reflectivity.clamp(0.0, 1.0);
        self
    }

    /// Set the diffuse texture.
    pub fn with_diffuse_texture(mut self, texture: Arc<Texture>) -> Self {
        self.diffuse.texture = Some(texture);
        self
    }

    /// Check if any layer carries a texture.
    pub fn has_textures(&self) -> bool {
        self.ambient.texture.is_some()
            || self.diffuse.texture.is_some()
            || self.specular.texture.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_material_is_not_reflective() {
        let material = Material::default();
        assert_eq!(material.reflectivity, 0.0);
        assert_eq!(material.mode, ShadingMode::Material);
        assert!(!material.has_textures());
    }

    #[test]
    fn test_reflectivity_clamped() {
        let material = Material::default().with_reflectivity(2.5);
        assert_eq!(material.reflectivity, 1.0);
    }

    #[test]
    fn test_layer_sample_without_texture() {
        let layer = SurfaceLayer::from_color(Color::rgb(0.25, 0.5, 0.75));
        assert_eq!(layer.sample(None), Color::rgb(0.25, 0.5, 0.75));
        assert_eq!(
            layer.sample(Some(Vec2::new(0.5, 0.5))),
            Color::rgb(0.25, 0.5, 0.75)
        );
    }

    #[test]
    fn test_layer_sample_modulates_texture() {
        let texture = Arc::new(Texture::solid_color(Color::rgb(0.5, 0.5, 0.5)));
        let layer = SurfaceLayer::with_texture(Color::WHITE, texture);

        assert_eq!(
            layer.sample(Some(Vec2::new(0.5, 0.5))),
            Color::rgb(0.5, 0.5, 0.5)
        );

        // No UV means no sampling, even with a texture attached
        assert_eq!(layer.sample(None), Color::WHITE);
    }

    #[test]
    fn test_materials_share_through_arc() {
        let material = Arc::new(Material::new(ShadingMode::Flat, Color::rgb(1.0, 0.0, 0.0)));
        let other = material.clone();
        assert!(Arc::ptr_eq(&material, &other));
    }
}
