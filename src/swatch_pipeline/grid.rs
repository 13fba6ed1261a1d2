//! Grid rendering module
//!
//! This module lays a palette out as a grid of solid cells and writes the result as a TIFF image.

mod raster;
mod tiff_grid_writer;
mod writer;
pub mod types;

pub use raster::{GridImage, render_grid};
pub use tiff_grid_writer::TiffGridWriter;
pub use types::{GridLayout, GridSize, RenderConfig, RenderConfigBuilder, TiffCompression};
pub use writer::GridWriter;
