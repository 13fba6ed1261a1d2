//! Color and color space types

use crate::swatch_pipeline::color::{decoders, lab};

/// Size of the channel payload carried by every record, whatever its color space.
pub const PAYLOAD_LEN: usize = 8;

/// Opaque 8-bit RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::new(0, 0, 0);
    pub const WHITE: Color = Color::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn to_array(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

/// Color spaces a swatch record can be encoded in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorSpace {
    /// Three 16-bit channels
    Rgb,
    /// Hue, saturation and brightness
    Hsb,
    /// Inverted 16-bit ink coverage
    Cmyk,
    /// L*a*b* relative to D50
    Lab,
    /// Single channel in [0, 10000]
    Grayscale,
    /// Ink coverage in percent x 100
    WideCmyk,
}

impl ColorSpace {
    /// Maps a wire identifier to its color space, or `None` when unsupported.
    pub fn from_id(id: u16) -> Option<Self> {
        match id {
            0 => Some(ColorSpace::Rgb),
            1 => Some(ColorSpace::Hsb),
            2 => Some(ColorSpace::Cmyk),
            7 => Some(ColorSpace::Lab),
            8 => Some(ColorSpace::Grayscale),
            9 => Some(ColorSpace::WideCmyk),
            _ => None,
        }
    }

    /// Decodes a record payload encoded in this color space.
    pub fn decode(self, payload: &[u8; PAYLOAD_LEN]) -> Color {
        match self {
            ColorSpace::Rgb => decoders::from_rgb(payload),
            ColorSpace::Hsb => decoders::from_hsb(payload),
            ColorSpace::Cmyk => decoders::from_cmyk(payload),
            ColorSpace::Lab => lab::from_lab(payload),
            ColorSpace::Grayscale => decoders::from_grayscale(payload),
            ColorSpace::WideCmyk => decoders::from_wide_cmyk(payload),
        }
    }
}
