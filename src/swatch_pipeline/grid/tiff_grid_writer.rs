use std::io::Write;
use tracing::debug;
use crate::swatch_pipeline::common::error::{Result, ConversionError};
use crate::swatch_pipeline::grid::raster::GridImage;
use crate::swatch_pipeline::grid::types::{RenderConfig, TiffCompression};
use crate::swatch_pipeline::grid::writer::GridWriter;

pub struct TiffGridWriter;

impl GridWriter for TiffGridWriter {
    fn write_grid(&self, image: &GridImage, output: &mut dyn Write, config: &RenderConfig) -> Result<()> {
        debug!("Encoding TIFF image: {}x{}", image.width, image.height);

        let mut buffer = Vec::new();

        let compression = match config.compression {
            TiffCompression::None => tiff::encoder::Compression::Uncompressed,
            TiffCompression::Lzw => tiff::encoder::Compression::Lzw,
            TiffCompression::DeflateFast => tiff::encoder::Compression::Deflate(tiff::encoder::compression::DeflateLevel::Fast),
            TiffCompression::DeflateBalanced => tiff::encoder::Compression::Deflate(tiff::encoder::compression::DeflateLevel::Balanced),
            TiffCompression::DeflateBest => tiff::encoder::Compression::Deflate(tiff::encoder::compression::DeflateLevel::Best),
        };

        let mut encoder = tiff::encoder::TiffEncoder::new(std::io::Cursor::new(&mut buffer))
            .map_err(|e| ConversionError::EncodeError(e.to_string()))?
            .with_compression(compression);

        let too_large = |_| ConversionError::EncodeError(
            format!("image {}x{} exceeds TIFF dimensions", image.width, image.height)
        );
        let width = u32::try_from(image.width).map_err(too_large)?;
        let height = u32::try_from(image.height).map_err(too_large)?;

        encoder.write_image::<tiff::encoder::colortype::RGB8>(
            width,
            height,
            &image.data,
        ).map_err(|e| ConversionError::EncodeError(e.to_string()))?;

        output.write_all(&buffer)?;

        debug!("TIFF encoding complete, {} bytes", buffer.len());
        Ok(())
    }
}
