//! OPAL Core - scene representation and shading for the CPU renderers.
//!
//! This crate provides:
//!
//! - **Buffers**: `Color`, `Bitmap`, `DepthBuffer` with packed 32-bit pixels
//! - **Scene data model**: `Scene`, `Object3D`, `Model`, `Mesh`, `Triangle`,
//!   `Sphere`, `Material`, `Light`, `Camera` — built by external loaders,
//!   borrowed read-only by the renderers
//! - **Viewing transform**: the shared world→clip→screen pipeline
//! - **Shading engine**: ambient/diffuse/specular/texture composition used
//!   by both the rasterizer and the ray tracer

pub mod bitmap;
pub mod camera;
pub mod color;
pub mod light;
pub mod material;
pub mod mesh;
pub mod object;
pub mod scene;
pub mod settings;
pub mod shading;
pub mod sphere;
pub mod texture;
pub mod triangle;
pub mod vertex;
pub mod viewing;

// Re-export commonly used types
pub use bitmap::{Bitmap, DepthBuffer, PixelFormat, MAX_DEPTH};
pub use camera::{Camera, Projection};
pub use color::Color;
pub use light::Light;
pub use material::{Material, ShadingMode, SurfaceLayer};
pub use mesh::{Mesh, Model};
pub use object::Object3D;
pub use scene::Scene;
pub use settings::{LightingSettings, RenderSettings};
pub use shading::shade;
pub use sphere::Sphere;
pub use texture::{Texture, TextureCache, TextureError};
pub use triangle::Triangle;
pub use vertex::Vertex;
pub use viewing::{ScreenPoint, ViewTransform};
