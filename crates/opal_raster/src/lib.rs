//! OPAL Raster - CPU scanline rasterizer.
//!
//! Renders the `opal_core` scene model into a `Bitmap` through the shared
//! viewing transform: barycentric triangle fill with an eight-wide SIMD
//! inner loop, depth-buffered hidden-surface removal, wireframe lines and
//! bitmap-font text overlays.

pub mod glyph;
pub mod line;
pub mod raster;
pub mod simd;

pub use glyph::{draw_text, GlyphFont};
pub use line::draw_line;
pub use raster::render;
pub use simd::BatchTriangle;
