//! Shading engine: ambient/diffuse/specular/texture composition.
//!
//! Shared by the rasterizer (per vertex) and the ray tracer (per hit
//! point). Contributions accumulate per light, unclamped until the end;
//! the specular term uses the mirror-reflection direction (classic Phong),
//! not the half-vector.

use std::sync::Arc;

use glam::{Vec2, Vec3};

use crate::color::Color;
use crate::light::Light;
use crate::material::Material;
use crate::settings::LightingSettings;

/// Compute the shaded color at a surface point.
///
/// `shadow_factors[i]` attenuates the diffuse and specular terms of
/// `lights[i]`; a missing entry means fully lit (1.0). `uv` carries the
/// surface texture coordinate when the surface supports texturing
/// (triangles); spheres pass `None` and shade untextured.
///
/// A missing material yields black with no contribution — not an error.
pub fn shade(
    point: Vec3,
    normal: Vec3,
    material: Option<&Arc<Material>>,
    viewer: Vec3,
    lights: &[Light],
    lighting: &LightingSettings,
    shadow_factors: &[f32],
    uv: Option<Vec2>,
) -> Color {
    let Some(material) = material else {
        return Color::BLACK;
    };

    let mut total = material.emissive;

    for (index, light) in lights.iter().enumerate() {
        let dir_to_light = match light {
            Light::Ambient { color } => {
                if lighting.ambient {
                    total += material.ambient.sample(uv).modulate(*color);
                }
                // Ambient lights contribute nothing else
                continue;
            }
            Light::Directional { direction, .. } => (-*direction).normalize_or_zero(),
            Light::Point { position, .. } => (*position - point).normalize_or_zero(),
        };

        let shadow = shadow_factors.get(index).copied().unwrap_or(1.0);
        let n_dot_l = normal.dot(dir_to_light).max(0.0);

        if lighting.diffuse {
            total += material
                .diffuse
                .sample(uv)
                .modulate(light.color().scale_rgb(n_dot_l * shadow));
        }

        // A light behind the surface produces no highlight; without the
        // n_dot_l gate the reflect vector degenerates to -dir_to_light
        // and a viewer opposite the light would see a spurious peak.
        if lighting.specular && n_dot_l > 0.0 {
            let reflect = (2.0 * n_dot_l * normal - dir_to_light).normalize_or_zero();
            let view_dir = (viewer - point).normalize_or_zero();
            let highlight = view_dir.dot(reflect).max(0.0).powf(material.specular_power);
            total += material
                .specular
                .sample(uv)
                .modulate(light.color().scale_rgb(highlight * shadow));
        }
    }

    total.clamped()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::material::{ShadingMode, SurfaceLayer};

    fn lit_settings() -> LightingSettings {
        LightingSettings::default()
    }

    fn material_with(ambient: Color, diffuse: Color, specular: Color) -> Arc<Material> {
        Arc::new(Material {
            mode: ShadingMode::Material,
            ambient: SurfaceLayer::from_color(ambient),
            diffuse: SurfaceLayer::from_color(diffuse),
            specular: SurfaceLayer::from_color(specular),
            specular_power: 16.0,
            reflectivity: 0.0,
            emissive: Color::BLACK,
        })
    }

    #[test]
    fn test_missing_material_is_black() {
        let lights = [Light::Ambient {
            color: Color::WHITE,
        }];
        let color = shade(
            Vec3::ZERO,
            Vec3::Y,
            None,
            Vec3::ONE,
            &lights,
            &lit_settings(),
            &[],
            None,
        );
        assert_eq!(color, Color::BLACK);
    }

    #[test]
    fn test_ambient_only_light() {
        let material = material_with(
            Color::rgb(0.5, 0.4, 0.3),
            Color::rgb(1.0, 1.0, 1.0),
            Color::rgb(1.0, 1.0, 1.0),
        );
        let lights = [Light::Ambient {
            color: Color::rgb(0.5, 1.0, 0.5),
        }];

        let color = shade(
            Vec3::ZERO,
            Vec3::Y,
            Some(&material),
            Vec3::new(0.0, 5.0, 0.0),
            &lights,
            &lit_settings(),
            &[],
            None,
        );

        // Exactly ambient ⊙ light color; no diffuse/specular bleed-through
        assert_eq!(color.clamped(), Color::rgb(0.25, 0.4, 0.15).clamped());
    }

    #[test]
    fn test_ambient_disabled_gives_black() {
        let material = material_with(Color::WHITE, Color::BLACK, Color::BLACK);
        let lights = [Light::Ambient {
            color: Color::WHITE,
        }];
        let mut lighting = lit_settings();
        lighting.ambient = false;

        let color = shade(
            Vec3::ZERO,
            Vec3::Y,
            Some(&material),
            Vec3::ONE,
            &lights,
            &lighting,
            &[],
            None,
        );
        assert_eq!(color, Color::rgb(0.0, 0.0, 0.0));
    }

    #[test]
    fn test_diffuse_follows_cosine() {
        let material = material_with(Color::BLACK, Color::WHITE, Color::BLACK);

        // Light straight overhead of an upward-facing surface
        let overhead = [Light::Directional {
            color: Color::WHITE,
            direction: Vec3::NEG_Y,
        }];
        let full = shade(
            Vec3::ZERO,
            Vec3::Y,
            Some(&material),
            Vec3::ONE,
            &overhead,
            &lit_settings(),
            &[],
            None,
        );
        assert_eq!(full, Color::rgb(1.0, 1.0, 1.0));

        // Light at 60° incidence: cos = 0.5
        let oblique = [Light::Directional {
            color: Color::WHITE,
            direction: Vec3::new(-(3.0_f32.sqrt()) / 2.0, -0.5, 0.0),
        }];
        let half = shade(
            Vec3::ZERO,
            Vec3::Y,
            Some(&material),
            Vec3::ONE,
            &oblique,
            &lit_settings(),
            &[],
            None,
        );
        assert!((half.r - 0.5).abs() < 0.01, "got {}", half.r);
    }

    #[test]
    fn test_light_behind_surface_contributes_nothing() {
        let material = material_with(Color::BLACK, Color::WHITE, Color::WHITE);
        let below = [Light::Directional {
            color: Color::WHITE,
            direction: Vec3::Y, // shining up at a surface facing up
        }];

        let color = shade(
            Vec3::ZERO,
            Vec3::Y,
            Some(&material),
            Vec3::new(0.0, 5.0, 0.0),
            &below,
            &lit_settings(),
            &[],
            None,
        );
        // NdotL clamps at zero, and the specular reflect direction points
        // into the surface
        assert_eq!(color, Color::BLACK);
    }

    #[test]
    fn test_shadow_factor_kills_diffuse_and_specular() {
        let material = material_with(Color::BLACK, Color::WHITE, Color::WHITE);
        let lights = [Light::Point {
            color: Color::WHITE,
            position: Vec3::new(0.0, 10.0, 0.0),
        }];

        let shadowed = shade(
            Vec3::ZERO,
            Vec3::Y,
            Some(&material),
            Vec3::new(0.0, 5.0, 0.0),
            &lights,
            &lit_settings(),
            &[0.0],
            None,
        );
        assert_eq!(shadowed, Color::BLACK);

        // Default factor (no entry) is fully lit
        let lit = shade(
            Vec3::ZERO,
            Vec3::Y,
            Some(&material),
            Vec3::new(0.0, 5.0, 0.0),
            &lights,
            &lit_settings(),
            &[],
            None,
        );
        assert!(lit.r > 0.9);
    }

    #[test]
    fn test_specular_peaks_along_mirror_direction() {
        let material = material_with(Color::BLACK, Color::BLACK, Color::WHITE);
        let lights = [Light::Directional {
            color: Color::WHITE,
            direction: Vec3::new(1.0, -1.0, 0.0),
        }];

        // Light arrives along (1,−1,0); its mirror about +Y leaves along
        // (1,1,0), so a viewer on that side sees the highlight
        let aligned = shade(
            Vec3::ZERO,
            Vec3::Y,
            Some(&material),
            Vec3::new(5.0, 5.0, 0.0),
            &lights,
            &lit_settings(),
            &[],
            None,
        );
        // Viewer far off the mirror direction
        let off = shade(
            Vec3::ZERO,
            Vec3::Y,
            Some(&material),
            Vec3::new(-5.0, 0.5, 0.0),
            &lights,
            &lit_settings(),
            &[],
            None,
        );

        assert!(aligned.r > 0.95, "aligned highlight {}", aligned.r);
        assert!(off.r < aligned.r);
    }

    #[test]
    fn test_textured_layer_modulates_diffuse() {
        use crate::texture::Texture;

        let texture = Arc::new(Texture::solid_color(Color::rgb(0.5, 0.5, 0.5)));
        let material = Arc::new(Material {
            diffuse: SurfaceLayer::with_texture(Color::WHITE, texture),
            ambient: SurfaceLayer::from_color(Color::BLACK),
            specular: SurfaceLayer::from_color(Color::BLACK),
            ..Material::default()
        });
        let lights = [Light::Directional {
            color: Color::WHITE,
            direction: Vec3::NEG_Y,
        }];

        let textured = shade(
            Vec3::ZERO,
            Vec3::Y,
            Some(&material),
            Vec3::ONE,
            &lights,
            &lit_settings(),
            &[],
            Some(Vec2::new(0.5, 0.5)),
        );
        assert_eq!(textured, Color::rgb(0.5, 0.5, 0.5));

        // Sphere-style call sites pass no UV and shade untextured
        let untextured = shade(
            Vec3::ZERO,
            Vec3::Y,
            Some(&material),
            Vec3::ONE,
            &lights,
            &lit_settings(),
            &[],
            None,
        );
        assert_eq!(untextured, Color::rgb(1.0, 1.0, 1.0));
    }

    #[test]
    fn test_contributions_accumulate_across_lights() {
        let material = material_with(Color::rgb(0.2, 0.2, 0.2), Color::WHITE, Color::BLACK);
        let lights = [
            Light::Ambient {
                color: Color::WHITE,
            },
            Light::Directional {
                color: Color::rgb(0.5, 0.5, 0.5),
                direction: Vec3::NEG_Y,
            },
        ];

        let color = shade(
            Vec3::ZERO,
            Vec3::Y,
            Some(&material),
            Vec3::ONE,
            &lights,
            &lit_settings(),
            &[],
            None,
        );
        // 0.2 ambient + 0.5 diffuse
        assert_eq!(color, Color::rgb(0.7, 0.7, 0.7));
    }
}
