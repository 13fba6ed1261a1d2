use crate::swatch_pipeline::aco::types::Palette;
use crate::swatch_pipeline::common::error::Result;

pub trait PaletteReader {
    fn read_palette(&self, data: &[u8]) -> Result<Palette>;
}
