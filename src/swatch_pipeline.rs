//! Swatch rendering pipeline module
//!
//! This module decodes color swatch files into palettes and renders them as grids of
//! solid cells, with separate modules for color decoding, record parsing, grid
//! rendering and conversion orchestration.

pub mod aco;
pub mod color;
pub mod common;
pub mod conversions;
pub mod grid;

pub use common::{
    ConversionError,
    Result,
};

pub use color::{
    Color,
    ColorSpace,
};

pub use aco::{
    AcoReader,
    Palette,
    PaletteReader,
    RawRecord,
};

pub use grid::{
    GridImage,
    GridLayout,
    GridSize,
    GridWriter,
    RenderConfig,
    RenderConfigBuilder,
    TiffCompression,
    TiffGridWriter,
};

pub use conversions::{
    AcoToTiffPipeline,
};
