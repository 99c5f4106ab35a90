//! Packed 3-byte pixel interop.
//!
//! Image libraries hand over pixel data as tightly packed byte triples.
//! [`Rgb888`] mirrors that layout exactly, so whole buffers can be viewed
//! as pixels with [`bytemuck::cast_slice`] instead of being copied, and a
//! single pixel converts to and from [`Color`] for per-pixel editing.

use bytemuck::{Pod, Zeroable};

use crate::color::Color;

/// A packed 8-bit-per-channel RGB pixel, three bytes with no padding.
///
/// Matches the memory layout of interleaved 24-bit image rows, so a
/// `&[u8]` row casts straight to `&[Rgb888]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Pod, Zeroable)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Rgb888 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb888 {
    /// Creates a pixel from three bytes.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl Color {
    /// Creates an opaque `Color` from a packed pixel.
    #[inline]
    pub fn from_rgb888(pixel: Rgb888) -> Self {
        Self::from_rgb_u8(pixel.r, pixel.g, pixel.b)
    }

    /// Exports the color as a packed pixel.
    ///
    /// Channels are rounded to bytes; values outside `[0.0, 1.0]` saturate
    /// at the cast rather than wrapping. Alpha is dropped.
    ///
    /// # Examples
    ///
    /// ```
    /// use tinct::{Color, Rgb888};
    ///
    /// let pixel = Color::from_rgb(1.0, 0.5, 0.0).to_rgb888();
    /// assert_eq!(pixel, Rgb888::new(255, 128, 0));
    /// ```
    #[inline]
    pub fn to_rgb888(self) -> Rgb888 {
        Rgb888 {
            r: self.red_u8(),
            g: self.green_u8(),
            b: self.blue_u8(),
        }
    }
}

impl From<Rgb888> for Color {
    #[inline]
    fn from(pixel: Rgb888) -> Self {
        Color::from_rgb888(pixel)
    }
}

impl From<Color> for Rgb888 {
    #[inline]
    fn from(color: Color) -> Self {
        color.to_rgb888()
    }
}

impl From<[u8; 3]> for Rgb888 {
    #[inline]
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self { r, g, b }
    }
}

impl From<Rgb888> for [u8; 3] {
    #[inline]
    fn from(pixel: Rgb888) -> Self {
        [pixel.r, pixel.g, pixel.b]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pixel_to_color_defaults_opaque() {
        let color: Color = Rgb888::new(255, 0, 0).into();
        assert_eq!(color.to_array(), [1.0, 0.0, 0.0, 1.0]);
    }

    #[test]
    fn test_byte_round_trip_is_lossless() {
        // One decode/encode step must not drift for any byte value.
        for value in 0..=255u8 {
            let color = Color::from_rgb888(Rgb888::new(value, value, value));
            let pixel = color.to_rgb888();
            assert_eq!(pixel, Rgb888::new(value, value, value));
        }
    }

    #[test]
    fn test_export_saturates_out_of_range() {
        let pixel = Color::from_rgb(1.5, -0.25, 0.999).to_rgb888();
        assert_eq!(pixel, Rgb888::new(255, 0, 255));
    }

    #[test]
    fn test_buffer_casts_without_copy() {
        let row: [u8; 6] = [255, 0, 0, 0, 128, 255];
        let pixels: &[Rgb888] = bytemuck::cast_slice(&row);
        assert_eq!(pixels.len(), 2);
        assert_eq!(pixels[0], Rgb888::new(255, 0, 0));
        assert_eq!(pixels[1], Rgb888::new(0, 128, 255));
    }
}
