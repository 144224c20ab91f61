//! Render configuration.

use serde::{Deserialize, Serialize};

use crate::camera::Camera;

/// Per-term lighting switches.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct LightingSettings {
    /// Master switch; when false no shading is evaluated at all.
    pub enabled: bool,
    pub ambient: bool,
    pub diffuse: bool,
    pub specular: bool,
    /// Cast shadow rays in the ray tracer.
    pub shadows: bool,
    /// Splat point-light positions as screen-space markers.
    pub render_point_lights: bool,
}

impl Default for LightingSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            ambient: true,
            diffuse: true,
            specular: true,
            shadows: true,
            render_point_lights: false,
        }
    }
}

/// Settings for a ray-traced render.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderSettings {
    pub camera: Camera,
    pub cull_backfaces: bool,
    pub depth_buffering: bool,
    pub lighting: LightingSettings,
    pub texture_mapping: bool,
    pub reflections: bool,
    /// Maximum recursion depth for reflection bounces.
    pub max_reflection_count: u32,
}

impl RenderSettings {
    pub fn new(camera: Camera) -> Self {
        Self {
            camera,
            cull_backfaces: false,
            depth_buffering: true,
            lighting: LightingSettings::default(),
            texture_mapping: true,
            reflections: true,
            max_reflection_count: 3,
        }
    }
}
