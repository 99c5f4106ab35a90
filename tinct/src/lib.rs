//! tinct is a small floating-point color value library for image pipelines.
//!
//! The central type is [`Color`]: four `f32` channels (red, green, blue,
//! alpha) with RGB↔HSL conversion that rewrites the same three channels in
//! place. Pipelines working on very large images can flip pixels into HSL,
//! edit hue or saturation, and flip them back without allocating a second
//! buffer.
//!
//! # Getting a Color In and Out
//!
//! ```
//! use tinct::{Color, Rgb888};
//!
//! // From bytes, floats, or a packed pixel.
//! let from_bytes = Color::from_rgb_u8(255, 128, 0);
//! let from_floats = Color::from_rgb(1.0, 0.5, 0.0);
//! let from_pixel = Color::from(Rgb888::new(255, 128, 0));
//!
//! assert_eq!(from_bytes, from_pixel);
//! assert_eq!(from_floats.to_rgb888(), Rgb888::new(255, 128, 0));
//! ```
//!
//! # Editing in HSL
//!
//! Read-only projections derive HSL components without touching the value:
//!
//! ```
//! use tinct::Color;
//!
//! let orange = Color::from_rgb_u8(255, 128, 0);
//! assert!(orange.hue() < 0.1); // near red on the wheel
//! assert!(orange.saturation() > 0.9);
//! ```
//!
//! For mutation, [`Color::convert_to_hsl`] packs (hue, lightness,
//! saturation) into the `r`, `g`, `b` slots and [`Color::convert_to_rgb`]
//! unpacks them again. The value does not remember which space it is in;
//! callers that convert must convert back before reading channels as RGB.
//! The [`Color::set_hue`] family wraps that round trip for single edits.
//!
//! # Caveats
//!
//! - Channel ranges are not validated anywhere; out-of-range values flow
//!   through arithmetic unchanged and only saturate when exported as bytes.
//! - Equality compares the primary channels only — alpha is excluded.
//! - Every operation works on one color at a time. Parallelizing across
//!   pixels is the caller's concern; `Color` is `Copy` with no shared
//!   state, so that is safe to do.

pub mod color;
pub mod pixel;

pub use color::Color;
pub use pixel::Rgb888;
