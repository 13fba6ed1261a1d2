use std::io::Write;
use crate::swatch_pipeline::common::error::Result;
use crate::swatch_pipeline::grid::raster::GridImage;
use crate::swatch_pipeline::grid::types::RenderConfig;

pub trait GridWriter {
    fn write_grid(&self, image: &GridImage, output: &mut dyn Write, config: &RenderConfig) -> Result<()>;
}
