//! Floating-point RGBA color values with in-place RGB/HSL conversion.
//!
//! This module provides [`Color`], a plain four-channel value type used by
//! image pipelines that need to edit colors in a perceptual space (hue
//! rotation, saturation adjustment) without copying whole images.
//!
//! # Color Spaces
//!
//! A `Color` starts out holding RGB intensities. Calling
//! [`Color::convert_to_hsl`] rewrites the same three channels with the
//! packed HSL layout (`r` holds hue, `g` holds lightness, `b` holds
//! saturation); [`Color::convert_to_rgb`] reverses it. The value does not
//! track which space is currently active — callers that flip a color into
//! HSL are responsible for flipping it back before treating the channels as
//! RGB again. This is what lets a pipeline reinterpret a multi-gigabyte
//! pixel buffer in place instead of allocating a second copy.
//!
//! The read-only projections [`Color::hue`], [`Color::saturation`] and
//! [`Color::lightness`] derive HSL components from RGB channels without
//! mutating anything.
//!
//! # Example
//!
//! ```
//! use tinct::Color;
//!
//! let mut color = Color::from_rgb_u8(255, 0, 0);
//! assert!(color.hue() < 1e-6);
//!
//! // Rotate the hue a third of the way around the wheel, in place.
//! color.set_hue(1.0 / 3.0);
//! assert!((color.g - 1.0).abs() < 1e-5);
//! ```

use std::fmt;

use bytemuck::{Pod, Zeroable};

/// A color held as four `f32` channels, nominally in `[0.0, 1.0]`.
///
/// The three primary channels hold either RGB intensities or, after
/// [`convert_to_hsl`](Color::convert_to_hsl), the packed
/// (hue, lightness, saturation) layout. `a` is opacity and is never touched
/// by space conversion.
///
/// Channel ranges are not validated; out-of-range values flow through the
/// arithmetic unchanged. Hue is stored normalized, `[0.0, 1.0)` covering
/// 0–360 degrees.
///
/// Equality compares `r`, `g` and `b` only — alpha is deliberately excluded,
/// so two colors that differ only in opacity compare equal.
#[derive(Debug, Clone, Copy, Pod, Zeroable)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)] // Stable layout so pixel buffers can be cast with bytemuck
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    // --- Common Colors ---
    pub const TRANSPARENT: Color = Color::new(0.0, 0.0, 0.0, 0.0);
    pub const BLACK: Color = Color::new(0.0, 0.0, 0.0, 1.0);
    pub const WHITE: Color = Color::new(1.0, 1.0, 1.0, 1.0);
    pub const RED: Color = Color::new(1.0, 0.0, 0.0, 1.0);
    pub const GREEN: Color = Color::new(0.0, 1.0, 0.0, 1.0);
    pub const BLUE: Color = Color::new(0.0, 0.0, 1.0, 1.0);

    /// Creates a new `Color` from four `f32` values (red, green, blue, alpha).
    #[inline]
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Creates a new opaque `Color` from three `f32` values (red, green, blue).
    #[inline]
    pub const fn from_rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Creates a new `Color` from four `u8` values (red, green, blue, alpha).
    #[inline]
    pub fn from_rgba_u8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
            a: a as f32 / 255.0,
        }
    }

    /// Creates a new opaque `Color` from three `u8` values (red, green, blue).
    #[inline]
    pub fn from_rgb_u8(r: u8, g: u8, b: u8) -> Self {
        Self::from_rgba_u8(r, g, b, 255)
    }

    /// Converts the color to an array of `[f32; 4]`.
    #[inline]
    pub fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Returns the greatest of the three primary channels.
    ///
    /// Ties resolve in channel order: red wins over green, green wins over
    /// blue. With a NaN channel the comparison chain takes an unspecified
    /// branch, per IEEE semantics.
    ///
    /// # Examples
    ///
    /// ```
    /// use tinct::Color;
    ///
    /// let color = Color::from_rgb(0.2, 0.8, 0.5);
    /// assert_eq!(color.max_channel(), 0.8);
    /// ```
    pub fn max_channel(self) -> f32 {
        if self.r >= self.b && self.r >= self.g {
            self.r
        } else if self.g >= self.r && self.g >= self.b {
            self.g
        } else {
            self.b
        }
    }

    /// Returns the smallest of the three primary channels.
    ///
    /// Same tie-break order as [`max_channel`](Color::max_channel).
    ///
    /// # Examples
    ///
    /// ```
    /// use tinct::Color;
    ///
    /// let color = Color::from_rgb(0.2, 0.8, 0.5);
    /// assert_eq!(color.min_channel(), 0.2);
    /// ```
    pub fn min_channel(self) -> f32 {
        if self.r <= self.b && self.r <= self.g {
            self.r
        } else if self.g <= self.r && self.g <= self.b {
            self.g
        } else {
            self.b
        }
    }

    /// Derives the hue of the current RGB channels, in `[0.0, 1.0)`.
    ///
    /// The hue is found by locating the dominant channel and measuring the
    /// other two as complements — their normalized distance below the
    /// maximum — which places the color within one of the six 60-degree
    /// sectors of the hue wheel. Flat gray (`max == min`) has no hue sector;
    /// the complements collapse to zero and the result is `0.0`.
    ///
    /// Read-only: the channels are left untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use tinct::Color;
    ///
    /// // Pure green sits a third of the way around the hue wheel.
    /// let hue = Color::GREEN.hue();
    /// assert!((hue - 1.0 / 3.0).abs() < 1e-5);
    /// ```
    pub fn hue(self) -> f32 {
        let max = self.max_channel();
        let min = self.min_channel();
        let delta = max - min;

        let (rc, gc, bc) = if delta == 0.0 {
            (0.0, 0.0, 0.0)
        } else {
            (
                (max - self.r) / delta,
                (max - self.g) / delta,
                (max - self.b) / delta,
            )
        };

        let mut h = if self.r == max {
            60.0 * (bc - gc)
        } else if self.g == max {
            60.0 * (2.0 + rc - bc)
        } else {
            60.0 * (4.0 + gc - rc)
        };

        // The red-max sector can come out negative (magenta side of red).
        if h < 0.0 {
            h += 360.0;
        }

        h / 360.0
    }

    /// Derives the saturation of the current RGB channels.
    ///
    /// This is the channel delta, `max - min` — a `[0.0, 1.0]` chroma
    /// magnitude, not the textbook HSL saturation that rescales by
    /// lightness. The inverse conversion is built around this exact
    /// definition, so it is kept as-is.
    pub fn saturation(self) -> f32 {
        self.max_channel() - self.min_channel()
    }

    /// Derives the lightness of the current RGB channels,
    /// `(max + min) / 2`.
    pub fn lightness(self) -> f32 {
        (self.max_channel() + self.min_channel()) / 2.0
    }

    /// Converts the color from RGB to HSL in place.
    ///
    /// The three primary channels are overwritten with the packed HSL
    /// layout: `r` receives hue, `g` receives lightness and `b` receives
    /// saturation. Alpha is untouched. The value itself does not record
    /// the switch; the caller owns that bookkeeping.
    ///
    /// # Examples
    ///
    /// ```
    /// use tinct::Color;
    ///
    /// let mut red = Color::new(1.0, 0.0, 0.0, 1.0);
    /// red.convert_to_hsl();
    /// assert_eq!(red.to_array(), [0.0, 0.5, 1.0, 1.0]);
    /// ```
    pub fn convert_to_hsl(&mut self) {
        let h = self.hue();
        let l = self.lightness();
        let s = self.saturation();

        self.r = h;
        self.g = l;
        self.b = s;
    }

    /// Converts the color from packed HSL back to RGB in place.
    ///
    /// Reads the channels with the same packed layout
    /// [`convert_to_hsl`](Color::convert_to_hsl) writes: hue from `r`,
    /// lightness from `g`, saturation from `b`. Zero saturation short
    /// circuits to the achromatic gray `r = g = b = lightness`. Otherwise
    /// the hue selects one of six 60-degree sectors, each assigning the
    /// reconstructed `max`, `min` and an interpolated middle value to the
    /// channels in hue-wheel order (red, yellow, green, cyan, blue,
    /// magenta). The interpolation runs upward through odd-numbered
    /// boundaries and back down through even ones, which is what makes the
    /// pair exact inverses up to float rounding.
    ///
    /// Hue values outside `[0.0, 1.0)` fall into the final
    /// (magenta-to-red) sector rather than wrapping. Alpha is untouched.
    pub fn convert_to_rgb(&mut self) {
        let h = self.r;
        let l = self.g;
        let s = self.b;

        let min = (2.0 * l - s) / 2.0;
        let max = s + min;

        if s == 0.0 {
            // No saturation, no color.
            self.r = l;
            self.g = l;
            self.b = l;
            return;
        }

        let h = h * 360.0;

        let (r, g, b) = if (0.0..60.0).contains(&h) {
            // Red to yellow.
            let t = h / 60.0;
            (max, t * s + min, min)
        } else if (60.0..120.0).contains(&h) {
            // Yellow to green.
            let t = 1.0 - (h - 60.0) / 60.0;
            (t * s + min, max, min)
        } else if (120.0..180.0).contains(&h) {
            // Green to cyan.
            let t = (h - 120.0) / 60.0;
            (min, max, t * s + min)
        } else if (180.0..240.0).contains(&h) {
            // Cyan to blue.
            let t = 1.0 - (h - 180.0) / 60.0;
            (min, t * s + min, max)
        } else if (240.0..300.0).contains(&h) {
            // Blue to magenta.
            let t = (h - 240.0) / 60.0;
            (t * s + min, min, max)
        } else {
            // Magenta to red.
            let t = 1.0 - (h - 300.0) / 60.0;
            (max, min, t * s + min)
        };

        self.r = r;
        self.g = g;
        self.b = b;
    }

    /// Sets the hue while keeping lightness and saturation, in place.
    ///
    /// Round-trips through the packed HSL layout: convert, overwrite the
    /// hue channel, convert back. The color must currently hold RGB.
    pub fn set_hue(&mut self, hue: f32) {
        self.convert_to_hsl();
        self.r = hue;
        self.convert_to_rgb();
    }

    /// Sets the saturation while keeping hue and lightness, in place.
    ///
    /// See [`set_hue`](Color::set_hue); the saturation lives in the `b`
    /// slot of the packed layout.
    pub fn set_saturation(&mut self, saturation: f32) {
        self.convert_to_hsl();
        self.b = saturation;
        self.convert_to_rgb();
    }

    /// Sets the lightness while keeping hue and saturation, in place.
    ///
    /// See [`set_hue`](Color::set_hue); the lightness lives in the `g`
    /// slot of the packed layout.
    pub fn set_lightness(&mut self, lightness: f32) {
        self.convert_to_hsl();
        self.g = lightness;
        self.convert_to_rgb();
    }

    /// Scales the primary channels so the brightest becomes `1.0`.
    ///
    /// Pure black has nothing to scale and is left unchanged instead of
    /// dividing by zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use tinct::Color;
    ///
    /// let mut color = Color::from_rgb(0.25, 0.5, 0.125);
    /// color.normalize_rgb();
    /// assert_eq!(color.to_array(), [0.5, 1.0, 0.25, 1.0]);
    /// ```
    pub fn normalize_rgb(&mut self) {
        let max = self.max_channel();
        if max == 0.0 {
            return;
        }

        let inv = 1.0 / max;
        self.r *= inv;
        self.g *= inv;
        self.b *= inv;
    }

    /// Returns the red channel as a rounded byte.
    ///
    /// Out-of-range channel values saturate at the cast rather than
    /// wrapping. The byte round trip is lossy by one rounding step.
    #[inline]
    pub fn red_u8(self) -> u8 {
        (self.r * 255.0).round() as u8
    }

    /// Returns the green channel as a rounded byte.
    #[inline]
    pub fn green_u8(self) -> u8 {
        (self.g * 255.0).round() as u8
    }

    /// Returns the blue channel as a rounded byte.
    #[inline]
    pub fn blue_u8(self) -> u8 {
        (self.b * 255.0).round() as u8
    }

    /// Returns the alpha channel as a rounded byte.
    #[inline]
    pub fn alpha_u8(self) -> u8 {
        (self.a * 255.0).round() as u8
    }

    /// Sets the red channel from a byte.
    #[inline]
    pub fn set_red_u8(&mut self, value: u8) {
        self.r = value as f32 / 255.0;
    }

    /// Sets the green channel from a byte.
    #[inline]
    pub fn set_green_u8(&mut self, value: u8) {
        self.g = value as f32 / 255.0;
    }

    /// Sets the blue channel from a byte.
    #[inline]
    pub fn set_blue_u8(&mut self, value: u8) {
        self.b = value as f32 / 255.0;
    }

    /// Sets the alpha channel from a byte.
    #[inline]
    pub fn set_alpha_u8(&mut self, value: u8) {
        self.a = value as f32 / 255.0;
    }
}

/// The default color is opaque black.
impl Default for Color {
    #[inline]
    fn default() -> Self {
        Self::BLACK
    }
}

/// Equality over the primary channels only; alpha is excluded.
impl PartialEq for Color {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.r == other.r && self.g == other.g && self.b == other.b
    }
}

/// Diagnostic representation: RGB channels plus derived HSL. Not a stable
/// serialization format.
impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "red: {}  green: {}  blue: {} | hue: {}  saturation: {}  lightness: {}",
            self.r,
            self.g,
            self.b,
            self.hue(),
            self.saturation(),
            self.lightness()
        )
    }
}

// --- From Conversions ---

impl From<[f32; 4]> for Color {
    #[inline]
    fn from([r, g, b, a]: [f32; 4]) -> Self {
        Self { r, g, b, a }
    }
}

impl From<Color> for [f32; 4] {
    #[inline]
    fn from(color: Color) -> Self {
        [color.r, color.g, color.b, color.a]
    }
}

impl From<[f32; 3]> for Color {
    #[inline]
    fn from([r, g, b]: [f32; 3]) -> Self {
        Self { r, g, b, a: 1.0 }
    }
}

impl From<[u8; 4]> for Color {
    #[inline]
    fn from([r, g, b, a]: [u8; 4]) -> Self {
        Self::from_rgba_u8(r, g, b, a)
    }
}

impl From<[u8; 3]> for Color {
    #[inline]
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self::from_rgb_u8(r, g, b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f32 = 1e-5;

    fn assert_close(actual: f32, expected: f32) {
        assert!(
            (actual - expected).abs() < TOLERANCE,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_extrema() {
        let color = Color::from_rgb(0.3, 0.9, 0.1);
        assert_eq!(color.max_channel(), 0.9);
        assert_eq!(color.min_channel(), 0.1);

        // Ties resolve to the first-listed channel, so equal values still
        // report the shared extreme.
        let tied = Color::from_rgb(0.5, 0.5, 0.2);
        assert_eq!(tied.max_channel(), 0.5);
        assert_eq!(tied.min_channel(), 0.2);
    }

    #[test]
    fn test_extrema_bound_all_channels() {
        let samples = [
            Color::from_rgb(0.1, 0.2, 0.3),
            Color::from_rgb(0.9, 0.9, 0.0),
            Color::from_rgb(0.7, 0.7, 0.7),
            Color::from_rgb(0.0, 1.0, 0.5),
        ];
        for color in samples {
            let max = color.max_channel();
            let min = color.min_channel();
            for channel in [color.r, color.g, color.b] {
                assert!(max >= channel);
                assert!(min <= channel);
            }
            assert_eq!(max - min, color.saturation());
        }
    }

    #[test]
    fn test_primary_hues() {
        assert_close(Color::from_rgb_u8(255, 0, 0).hue(), 0.0);
        assert_close(Color::from_rgb_u8(0, 255, 0).hue(), 1.0 / 3.0);
        assert_close(Color::from_rgb_u8(0, 0, 255).hue(), 2.0 / 3.0);
    }

    #[test]
    fn test_pure_red_hsl() {
        let red = Color::from_rgb_u8(255, 0, 0);
        assert_close(red.hue(), 0.0);
        assert_close(red.saturation(), 1.0);
        assert_close(red.lightness(), 0.5);
    }

    #[test]
    fn test_gray_is_achromatic() {
        let gray = Color::from_rgb_u8(128, 128, 128);
        assert_eq!(gray.saturation(), 0.0);
        // The delta-zero guard forces the hue to 0 rather than dividing.
        assert_eq!(gray.hue(), 0.0);
        assert!((gray.lightness() - 0.502).abs() < 1e-3);
    }

    #[test]
    fn test_hue_stays_in_range() {
        for r in 0..6 {
            for g in 0..6 {
                for b in 0..6 {
                    let color = Color::from_rgb(
                        r as f32 / 5.0,
                        g as f32 / 5.0,
                        b as f32 / 5.0,
                    );
                    let hue = color.hue();
                    assert!((0.0..1.0).contains(&hue), "hue {hue} out of range");
                }
            }
        }
    }

    #[test]
    fn test_forward_packs_hue_lightness_saturation() {
        let mut red = Color::new(1.0, 0.0, 0.0, 1.0);
        red.convert_to_hsl();
        assert_close(red.r, 0.0);
        assert_close(red.g, 0.5);
        assert_close(red.b, 1.0);
        assert_eq!(red.a, 1.0);
    }

    #[test]
    fn test_round_trip() {
        for r in 0..6 {
            for g in 0..6 {
                for b in 0..6 {
                    if r == g && g == b {
                        continue;
                    }
                    let original = Color::from_rgb(
                        r as f32 / 5.0,
                        g as f32 / 5.0,
                        b as f32 / 5.0,
                    );
                    let mut color = original;
                    color.convert_to_hsl();
                    color.convert_to_rgb();
                    assert_close(color.r, original.r);
                    assert_close(color.g, original.g);
                    assert_close(color.b, original.b);
                }
            }
        }
    }

    #[test]
    fn test_achromatic_round_trip_is_exact() {
        for x in [0.0, 0.25, 0.5, 0.75, 1.0] {
            let mut color = Color::from_rgb(x, x, x);
            color.convert_to_hsl();
            color.convert_to_rgb();
            assert_eq!(color.r, x);
            assert_eq!(color.g, x);
            assert_eq!(color.b, x);
        }
    }

    #[test]
    fn test_conversion_preserves_alpha() {
        let mut color = Color::new(0.8, 0.2, 0.4, 0.37);
        color.convert_to_hsl();
        assert_eq!(color.a, 0.37);
        color.convert_to_rgb();
        assert_eq!(color.a, 0.37);
    }

    #[test]
    fn test_set_hue_rotates_red_to_green() {
        let mut color = Color::from_rgb(1.0, 0.0, 0.0);
        color.set_hue(1.0 / 3.0);
        assert_close(color.r, 0.0);
        assert_close(color.g, 1.0);
        assert_close(color.b, 0.0);
    }

    #[test]
    fn test_set_saturation_desaturates() {
        let mut color = Color::from_rgb(1.0, 0.0, 0.0);
        color.set_saturation(0.0);
        // Fully desaturated collapses to the lightness gray.
        assert_close(color.r, 0.5);
        assert_close(color.g, 0.5);
        assert_close(color.b, 0.5);
    }

    #[test]
    fn test_set_lightness_keeps_hue() {
        let mut color = Color::from_rgb(0.0, 0.0, 1.0);
        let hue = color.hue();
        color.set_lightness(0.6);
        assert_close(color.hue(), hue);
        assert_close(color.lightness(), 0.6);
    }

    #[test]
    fn test_normalize_rgb() {
        let mut color = Color::from_rgb(0.2, 0.4, 0.1);
        color.normalize_rgb();
        assert_close(color.r, 0.5);
        assert_close(color.g, 1.0);
        assert_close(color.b, 0.25);
    }

    #[test]
    fn test_normalize_black_is_noop() {
        let mut black = Color::BLACK;
        black.normalize_rgb();
        assert_eq!(black.to_array(), [0.0, 0.0, 0.0, 1.0]);
    }

    #[test]
    fn test_equality_ignores_alpha() {
        assert_eq!(Color::new(1.0, 0.0, 0.0, 1.0), Color::new(1.0, 0.0, 0.0, 0.0));
        assert_ne!(Color::new(1.0, 0.0, 0.0, 1.0), Color::new(0.0, 1.0, 0.0, 1.0));
    }

    #[test]
    fn test_byte_accessors() {
        let mut color = Color::default();
        color.set_red_u8(128);
        assert_close(color.r, 128.0 / 255.0);
        assert_eq!(color.red_u8(), 128);

        // Out-of-range floats saturate at the cast instead of wrapping.
        let hot = Color::from_rgb(1.5, -0.5, 0.0);
        assert_eq!(hot.red_u8(), 255);
        assert_eq!(hot.green_u8(), 0);
    }

    #[test]
    fn test_array_conversions() {
        let color: Color = [0.1, 0.2, 0.3, 0.4].into();
        assert_eq!(color.to_array(), [0.1, 0.2, 0.3, 0.4]);

        let opaque: Color = [10u8, 20, 30].into();
        assert_eq!(opaque.a, 1.0);

        let arr: [f32; 4] = color.into();
        assert_eq!(arr, [0.1, 0.2, 0.3, 0.4]);
    }

    #[test]
    fn test_display_includes_derived_hsl() {
        let text = Color::RED.to_string();
        assert!(text.contains("red: 1"));
        assert!(text.contains("saturation: 1"));
        assert!(text.contains("lightness: 0.5"));
    }
}
