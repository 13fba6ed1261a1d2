//! Swatch file reading module
//!
//! This module parses the color record stream of a swatch file into a palette.

mod aco_reader;
mod reader;
pub mod types;

pub use aco_reader::AcoReader;
pub use reader::PaletteReader;
pub use types::{Palette, RawRecord};
