//! Clamped RGBA color with packed-integer conversions.

use crate::bitmap::PixelFormat;

/// A 4-component color with channels logically in [0, 1].
///
/// Arithmetic does not clamp automatically so that shading code can
/// accumulate per-light contributions; call [`Color::clamped`] before a
/// color leaves the shading pipeline. Equality compares through an 8-bit
/// quantization so that float noise below pixel precision never makes two
/// visually identical colors unequal.
#[derive(Debug, Clone, Copy, Default)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const BLACK: Color = Color::new(0.0, 0.0, 0.0, 1.0);
    pub const WHITE: Color = Color::new(1.0, 1.0, 1.0, 1.0);
    pub const TRANSPARENT: Color = Color::new(0.0, 0.0, 0.0, 0.0);

    /// Create a new color from float channels.
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Create an opaque color from float channels.
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Create a color from 8-bit channels.
    pub fn from_bytes(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
            a: a as f32 / 255.0,
        }
    }

    /// Return this color with every channel clamped to [0, 1].
    pub fn clamped(self) -> Self {
        Self {
            r: self.r.clamp(0.0, 1.0),
            g: self.g.clamp(0.0, 1.0),
            b: self.b.clamp(0.0, 1.0),
            a: self.a.clamp(0.0, 1.0),
        }
    }

    /// Component-wise multiply (⊙) with another color.
    pub fn modulate(self, other: Color) -> Self {
        Self {
            r: self.r * other.r,
            g: self.g * other.g,
            b: self.b * other.b,
            a: self.a * other.a,
        }
    }

    /// Scale the red, green and blue channels by `factor`, leaving alpha
    /// untouched, then clamp every channel to [0, 1].
    pub fn scale_rgb(self, factor: f32) -> Self {
        Self {
            r: self.r * factor,
            g: self.g * factor,
            b: self.b * factor,
            a: self.a,
        }
        .clamped()
    }

    /// Quantize a channel to its 8-bit representation.
    #[inline]
    fn quantize(channel: f32) -> u32 {
        (channel.clamp(0.0, 1.0) * 255.0).round() as u32
    }

    /// Pack into a 32-bit pixel in the given channel order.
    pub fn to_packed(self, format: PixelFormat) -> u32 {
        let r = Self::quantize(self.r);
        let g = Self::quantize(self.g);
        let b = Self::quantize(self.b);
        let a = Self::quantize(self.a);
        match format {
            PixelFormat::Rgba => (r << 24) | (g << 16) | (b << 8) | a,
            PixelFormat::Argb => (a << 24) | (r << 16) | (g << 8) | b,
        }
    }

    /// Unpack a 32-bit pixel in the given channel order.
    pub fn from_packed(pixel: u32, format: PixelFormat) -> Self {
        let (r, g, b, a) = match format {
            PixelFormat::Rgba => (pixel >> 24, pixel >> 16, pixel >> 8, pixel),
            PixelFormat::Argb => (pixel >> 16, pixel >> 8, pixel, pixel >> 24),
        };
        Self::from_bytes(r as u8, g as u8, b as u8, a as u8)
    }
}

impl PartialEq for Color {
    fn eq(&self, other: &Self) -> bool {
        Self::quantize(self.r) == Self::quantize(other.r)
            && Self::quantize(self.g) == Self::quantize(other.g)
            && Self::quantize(self.b) == Self::quantize(other.b)
            && Self::quantize(self.a) == Self::quantize(other.a)
    }
}

impl std::ops::Add for Color {
    type Output = Color;

    fn add(self, rhs: Color) -> Color {
        Color {
            r: self.r + rhs.r,
            g: self.g + rhs.g,
            b: self.b + rhs.b,
            a: self.a + rhs.a,
        }
    }
}

impl std::ops::AddAssign for Color {
    fn add_assign(&mut self, rhs: Color) {
        *self = *self + rhs;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scale_rgb_clamps() {
        let color = Color::new(0.6, 0.7, 0.8, 5.0);
        let scaled = color.scale_rgb(2.0);

        assert_eq!(scaled.r, 1.0);
        assert_eq!(scaled.g, 1.0);
        assert_eq!(scaled.b, 1.0);
        assert_eq!(scaled.a, 1.0);
    }

    #[test]
    fn test_scale_rgb_leaves_alpha() {
        let color = Color::new(0.2, 0.4, 0.6, 0.5);
        let scaled = color.scale_rgb(0.5);

        assert_eq!(scaled, Color::new(0.1, 0.2, 0.3, 0.5));
    }

    #[test]
    fn test_pack_rgba() {
        let color = Color::from_bytes(0x12, 0x34, 0x56, 0x78);
        assert_eq!(color.to_packed(PixelFormat::Rgba), 0x12345678);
    }

    #[test]
    fn test_unpack_argb() {
        let color = Color::from_packed(0x90ABCDEF, PixelFormat::Argb);
        assert_eq!(color, Color::from_bytes(0xAB, 0xCD, 0xEF, 0x90));
    }

    #[test]
    fn test_pack_roundtrip() {
        let color = Color::from_bytes(10, 20, 30, 40);
        for format in [PixelFormat::Rgba, PixelFormat::Argb] {
            let back = Color::from_packed(color.to_packed(format), format);
            assert_eq!(back, color);
        }
    }

    #[test]
    fn test_quantized_equality_ignores_float_noise() {
        // 0.4 quantizes away from a rounding boundary (0.5 would sit
        // exactly on 127.5, where ±1e-4 flips the rounded byte)
        let a = Color::new(0.4, 0.4, 0.4, 1.0);
        let b = Color::new(0.4 + 1e-4, 0.4 - 1e-4, 0.4, 1.0);
        assert_eq!(a, b);

        // A full 8-bit step apart is a real difference
        let c = Color::new(0.4 + 1.0 / 255.0, 0.4, 0.4, 1.0);
        assert_ne!(a, c);
    }

    #[test]
    fn test_modulate() {
        let a = Color::new(0.5, 1.0, 0.25, 1.0);
        let b = Color::new(1.0, 0.5, 0.5, 1.0);
        assert_eq!(a.modulate(b), Color::new(0.5, 0.5, 0.125, 1.0));
    }

    #[test]
    fn test_add_accumulates_unclamped() {
        let sum = Color::rgb(0.8, 0.8, 0.8) + Color::rgb(0.8, 0.8, 0.8);
        assert!(sum.r > 1.0);
        assert_eq!(sum.clamped(), Color::rgb(1.0, 1.0, 1.0));
    }
}
