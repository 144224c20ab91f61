//! Scene lights.

use glam::Vec3;

use crate::color::Color;

/// A light source.
///
/// Modeled as a sum type so an ambient light can never carry direction or
/// position semantics by accident.
#[derive(Clone, Debug, PartialEq)]
pub enum Light {
    /// Uniform illumination from everywhere.
    Ambient { color: Color },
    /// Parallel rays along `direction` (pointing from the light toward
    /// the scene).
    Directional { color: Color, direction: Vec3 },
    /// Omnidirectional light at a world-space position.
    Point { color: Color, position: Vec3 },
}

impl Light {
    pub fn color(&self) -> Color {
        match self {
            Light::Ambient { color }
            | Light::Directional { color, .. }
            | Light::Point { color, .. } => *color,
        }
    }

    pub fn is_ambient(&self) -> bool {
        matches!(self, Light::Ambient { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_light_color_accessor() {
        let color = Color::rgb(0.5, 0.6, 0.7);
        let lights = [
            Light::Ambient { color },
            Light::Directional {
                color,
                direction: Vec3::NEG_Y,
            },
            Light::Point {
                color,
                position: Vec3::ONE,
            },
        ];

        for light in &lights {
            assert_eq!(light.color(), color);
        }
        assert!(lights[0].is_ambient());
        assert!(!lights[1].is_ambient());
    }
}
