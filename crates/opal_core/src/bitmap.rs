//! Packed pixel and depth storage.
//!
//! `Bitmap` is the render target both renderers fill; `DepthBuffer` mirrors
//! its shape with per-pixel float depth. Reads and writes outside the
//! buffer are silently ignored, never errors — fill loops clamp their own
//! bounds and anything that slips through is dropped on the floor.

use crate::color::Color;
use serde::{Deserialize, Serialize};

/// Channel order of a packed 32-bit pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PixelFormat {
    /// Red in the highest byte, alpha in the lowest.
    Rgba,
    /// Alpha in the highest byte, blue in the lowest.
    Argb,
}

/// A 2D pixel buffer with packed 32-bit pixels in row-major order.
#[derive(Debug, Clone)]
pub struct Bitmap {
    width: usize,
    height: usize,
    format: PixelFormat,
    pixels: Vec<u32>,
}

impl Bitmap {
    /// Create a new bitmap cleared to transparent black.
    pub fn new(width: usize, height: usize, format: PixelFormat) -> Self {
        Self {
            width,
            height,
            format,
            pixels: vec![0; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn format(&self) -> PixelFormat {
        self.format
    }

    /// Fill the whole buffer with one color.
    pub fn fill(&mut self, color: Color) {
        let packed = color.to_packed(self.format);
        self.pixels.fill(packed);
    }

    /// Write a packed pixel. Out-of-bounds coordinates are a no-op.
    #[inline]
    pub fn set_pixel(&mut self, x: i32, y: i32, pixel: u32) {
        if x < 0 || y < 0 || x as usize >= self.width || y as usize >= self.height {
            return;
        }
        self.pixels[y as usize * self.width + x as usize] = pixel;
    }

    /// Write a color. Out-of-bounds coordinates are a no-op.
    #[inline]
    pub fn set_color(&mut self, x: i32, y: i32, color: Color) {
        self.set_pixel(x, y, color.to_packed(self.format));
    }

    /// Read a packed pixel, or `None` outside the buffer.
    #[inline]
    pub fn get_pixel(&self, x: i32, y: i32) -> Option<u32> {
        if x < 0 || y < 0 || x as usize >= self.width || y as usize >= self.height {
            return None;
        }
        Some(self.pixels[y as usize * self.width + x as usize])
    }

    /// Read a pixel as a color, or `None` outside the buffer.
    pub fn get_color(&self, x: i32, y: i32) -> Option<Color> {
        self.get_pixel(x, y)
            .map(|p| Color::from_packed(p, self.format))
    }

    /// The full pixel array, row-major.
    pub fn pixels(&self) -> &[u32] {
        &self.pixels
    }

    /// Mutable access to the full pixel array, row-major.
    ///
    /// The ray tracer splits this into disjoint row bands for its workers.
    pub fn pixels_mut(&mut self) -> &mut [u32] {
        &mut self.pixels
    }

    /// The pixel array viewed as raw bytes, for hand-off to a display layer.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }
}

/// Depth value further away than any renderable surface.
pub const MAX_DEPTH: f32 = f32::MAX;

/// Per-pixel depth storage matching a `Bitmap`'s dimensions.
///
/// Depths grow with distance from the camera: a candidate pixel survives
/// the depth test when its depth is less than or equal to the stored value.
#[derive(Debug, Clone)]
pub struct DepthBuffer {
    width: usize,
    height: usize,
    depths: Vec<f32>,
}

impl DepthBuffer {
    /// Create a new depth buffer initialized to [`MAX_DEPTH`].
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            depths: vec![MAX_DEPTH; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Reset every depth to [`MAX_DEPTH`].
    pub fn clear(&mut self) {
        self.depths.fill(MAX_DEPTH);
    }

    /// Read a depth, or `None` outside the buffer.
    #[inline]
    pub fn get(&self, x: i32, y: i32) -> Option<f32> {
        if x < 0 || y < 0 || x as usize >= self.width || y as usize >= self.height {
            return None;
        }
        Some(self.depths[y as usize * self.width + x as usize])
    }

    /// Write a depth. Out-of-bounds coordinates are a no-op.
    #[inline]
    pub fn set(&mut self, x: i32, y: i32, depth: f32) {
        if x < 0 || y < 0 || x as usize >= self.width || y as usize >= self.height {
            return;
        }
        self.depths[y as usize * self.width + x as usize] = depth;
    }

    /// Depth-test `depth` at (x, y): if it is at least as near as the
    /// stored value the buffer is updated and `true` is returned.
    /// Out-of-bounds coordinates pass without writing.
    #[inline]
    pub fn test_and_set(&mut self, x: i32, y: i32, depth: f32) -> bool {
        match self.get(x, y) {
            Some(stored) => {
                if depth <= stored {
                    self.set(x, y, depth);
                    true
                } else {
                    false
                }
            }
            None => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bitmap_out_of_bounds_is_noop() {
        let mut bitmap = Bitmap::new(4, 4, PixelFormat::Rgba);
        bitmap.set_pixel(-1, 0, 0xFFFFFFFF);
        bitmap.set_pixel(0, -1, 0xFFFFFFFF);
        bitmap.set_pixel(4, 0, 0xFFFFFFFF);
        bitmap.set_pixel(0, 4, 0xFFFFFFFF);

        assert!(bitmap.pixels().iter().all(|&p| p == 0));
        assert_eq!(bitmap.get_pixel(4, 0), None);
        assert_eq!(bitmap.get_pixel(-1, 0), None);
    }

    #[test]
    fn test_bitmap_set_get_roundtrip() {
        let mut bitmap = Bitmap::new(8, 8, PixelFormat::Argb);
        let color = Color::from_bytes(10, 20, 30, 255);
        bitmap.set_color(3, 5, color);

        assert_eq!(bitmap.get_color(3, 5), Some(color));
        assert_eq!(bitmap.get_pixel(0, 0), Some(0));
    }

    #[test]
    fn test_bitmap_fill() {
        let mut bitmap = Bitmap::new(2, 2, PixelFormat::Rgba);
        bitmap.fill(Color::WHITE);
        assert!(bitmap.pixels().iter().all(|&p| p == 0xFFFFFFFF));
    }

    #[test]
    fn test_bitmap_as_bytes_length() {
        let bitmap = Bitmap::new(3, 2, PixelFormat::Rgba);
        assert_eq!(bitmap.as_bytes().len(), 3 * 2 * 4);
    }

    #[test]
    fn test_depth_buffer_sentinel() {
        let depth = DepthBuffer::new(2, 2);
        assert_eq!(depth.get(0, 0), Some(MAX_DEPTH));
        assert_eq!(depth.get(5, 0), None);
    }

    #[test]
    fn test_depth_test_nearer_wins() {
        let mut depth = DepthBuffer::new(2, 2);

        assert!(depth.test_and_set(0, 0, 0.5));
        assert_eq!(depth.get(0, 0), Some(0.5));

        // Farther pixel is rejected, stored depth unchanged
        assert!(!depth.test_and_set(0, 0, 0.7));
        assert_eq!(depth.get(0, 0), Some(0.5));

        // Equal depth passes (edges between adjacent triangles)
        assert!(depth.test_and_set(0, 0, 0.5));

        // Nearer pixel replaces
        assert!(depth.test_and_set(0, 0, 0.2));
        assert_eq!(depth.get(0, 0), Some(0.2));
    }

    #[test]
    fn test_depth_out_of_bounds_passes_without_write() {
        let mut depth = DepthBuffer::new(2, 2);
        assert!(depth.test_and_set(10, 10, 0.1));
        assert_eq!(depth.get(10, 10), None);
    }
}
