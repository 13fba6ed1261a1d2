//! Swatch record and palette types

use crate::swatch_pipeline::color::{Color, ColorSpace, PAYLOAD_LEN};
use crate::swatch_pipeline::common::error::{ConversionError, Result};

/// One record as it appears on the wire, before decoding
#[derive(Debug, Clone, Copy)]
pub struct RawRecord {
    /// Wire identifier of the color space
    pub color_space_id: u16,
    /// Channel payload, interpreted according to the color space
    pub payload: [u8; PAYLOAD_LEN],
}

impl RawRecord {
    /// Decodes the record, failing when its color space is not supported.
    pub fn decode(&self) -> Result<Color> {
        let space = ColorSpace::from_id(self.color_space_id)
            .ok_or(ConversionError::UnsupportedColorSpace(self.color_space_id))?;
        Ok(space.decode(&self.payload))
    }
}

/// Decoded colors in file order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Palette {
    pub colors: Vec<Color>,
}

impl Palette {
    pub fn new(colors: Vec<Color>) -> Self {
        Self { colors }
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<Color> {
        self.colors.get(index).copied()
    }
}
