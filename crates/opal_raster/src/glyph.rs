//! Bitmap glyph fonts and text overlay drawing.
//!
//! Glyphs are pre-rasterized little bitmaps keyed by character. Text is
//! stamped onto a target with a fixed per-glyph advance, copying only
//! pixels with non-zero alpha; there is no blending and no depth
//! interaction, so overlays always land on top of a rendered frame.

use std::collections::HashMap;

use opal_core::{Bitmap, Color};

/// A fixed-cell bitmap font.
#[derive(Debug, Clone)]
pub struct GlyphFont {
    glyph_width: usize,
    glyph_height: usize,
    glyphs: HashMap<char, Bitmap>,
}

impl GlyphFont {
    pub fn new(glyph_width: usize, glyph_height: usize) -> Self {
        Self {
            glyph_width,
            glyph_height,
            glyphs: HashMap::new(),
        }
    }

    pub fn glyph_width(&self) -> usize {
        self.glyph_width
    }

    pub fn glyph_height(&self) -> usize {
        self.glyph_height
    }

    /// Register a glyph bitmap. Bitmaps that do not match the font's cell
    /// size are rejected with a warning.
    pub fn insert(&mut self, ch: char, bitmap: Bitmap) {
        if bitmap.width() != self.glyph_width || bitmap.height() != self.glyph_height {
            log::warn!(
                "glyph {:?} is {}x{}, font cell is {}x{}; skipping",
                ch,
                bitmap.width(),
                bitmap.height(),
                self.glyph_width,
                self.glyph_height
            );
            return;
        }
        self.glyphs.insert(ch, bitmap);
    }

    pub fn glyph(&self, ch: char) -> Option<&Bitmap> {
        self.glyphs.get(&ch)
    }

    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }
}

/// Stamp `text` onto `target` with its top-left corner at (x, y).
///
/// Characters without a glyph still advance the pen, leaving a gap.
/// Pixels falling outside the target are dropped.
pub fn draw_text(target: &mut Bitmap, font: &GlyphFont, x: i32, y: i32, text: &str) {
    let mut pen_x = x;

    for ch in text.chars() {
        if let Some(glyph) = font.glyph(ch) {
            for gy in 0..glyph.height() as i32 {
                for gx in 0..glyph.width() as i32 {
                    let Some(pixel) = glyph.get_pixel(gx, gy) else {
                        continue;
                    };
                    let color = Color::from_packed(pixel, glyph.format());
                    if color.a > 0.0 {
                        target.set_color(pen_x + gx, y + gy, color);
                    }
                }
            }
        }
        pen_x += font.glyph_width as i32;
    }
}
