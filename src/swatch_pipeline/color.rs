//! Color space decoding module
//!
//! This module turns the fixed 8-byte channel payload of a swatch record into an
//! opaque 8-bit RGB color, one decoder per supported color space.

pub mod decoders;
pub mod lab;
pub mod types;

pub use decoders::{from_cmyk, from_grayscale, from_hsb, from_rgb, from_wide_cmyk};
pub use lab::from_lab;
pub use types::{Color, ColorSpace, PAYLOAD_LEN};
