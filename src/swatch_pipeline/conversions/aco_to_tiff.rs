use tracing::{info, instrument};
use std::io::Write;
use std::path::Path;

use crate::swatch_pipeline::{
    common::error::{ConversionError, Result},
    aco::{AcoReader, Palette, PaletteReader},
    grid::{GridWriter, TiffGridWriter, RenderConfig, render_grid},
};

pub struct AcoToTiffPipeline<R: PaletteReader, W: GridWriter> {
    reader: R,
    writer: W,
    config: RenderConfig,
}

impl AcoToTiffPipeline<AcoReader, TiffGridWriter> {
    pub fn new(config: RenderConfig) -> Self {
        Self {
            reader: AcoReader,
            writer: TiffGridWriter,
            config,
        }
    }
}

impl<R: PaletteReader, W: GridWriter> AcoToTiffPipeline<R, W> {
    pub fn with_custom(reader: R, writer: W, config: RenderConfig) -> Self {
        Self {
            reader,
            writer,
            config,
        }
    }

    fn validate_grid(&self) -> Result<()> {
        if !self.config.validate_grid {
            return Ok(());
        }

        let layout = &self.config.layout;
        if layout.columns == 0 || layout.rows == 0 {
            return Err(ConversionError::InvalidGrid {
                columns: layout.columns,
                rows: layout.rows,
            });
        }
        if layout.cell_width == 0 || layout.cell_height == 0 {
            return Err(ConversionError::InvalidCellSize {
                width: layout.cell_width,
                height: layout.cell_height,
            });
        }
        if layout.image_size().is_none() {
            return Err(ConversionError::InvalidGrid {
                columns: layout.columns,
                rows: layout.rows,
            });
        }

        Ok(())
    }

    /// Decodes the palette only, without rendering anything.
    pub fn read_palette(&self, input_data: &[u8]) -> Result<Palette> {
        let _span = tracing::info_span!("decode_palette").entered();
        self.reader.read_palette(input_data)
    }

    #[instrument(skip(self, input_data, output), fields(input_size = input_data.len()))]
    pub fn convert(&self, input_data: &[u8], output: &mut dyn Write) -> Result<Palette> {
        info!("Starting swatch to TIFF conversion");

        let palette = self.read_palette(input_data)?;
        info!("Read {} colors", palette.len());

        {
            let _span = tracing::info_span!("validate_grid",
                columns = self.config.layout.columns,
                rows = self.config.layout.rows
            ).entered();
            self.validate_grid()?;
        }

        let image = {
            let _span = tracing::info_span!("render_grid").entered();
            render_grid(&palette, &self.config.layout, self.config.background)?
        };

        {
            let _span = tracing::info_span!("encode_tiff").entered();
            self.writer.write_grid(&image, output, &self.config)?;
        }

        info!(
            width = image.width,
            height = image.height,
            "Conversion complete"
        );
        Ok(palette)
    }

    #[instrument(skip(self, input_path, output_path))]
    pub fn convert_file<P: AsRef<Path>, Q: AsRef<Path>>(
        &self,
        input_path: P,
        output_path: Q,
    ) -> Result<Palette> {
        let input_path = input_path.as_ref();
        let output_path = output_path.as_ref();

        info!(
            input = %input_path.display(),
            output = %output_path.display(),
            "Converting file"
        );

        let input_data = {
            let _span = tracing::info_span!("read_input_file").entered();
            std::fs::read(input_path).map_err(|e| {
                ConversionError::InputReadError(format!("{}: {}", input_path.display(), e))
            })?
        };

        // render into memory first so a failed decode leaves no output file behind
        let mut encoded = Vec::new();
        let palette = self.convert(&input_data, &mut encoded)?;

        {
            let _span = tracing::info_span!("write_output_file").entered();
            std::fs::write(output_path, &encoded).map_err(|e| {
                ConversionError::OutputWriteError(format!("{}: {}", output_path.display(), e))
            })?;
        }

        Ok(palette)
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: RenderConfig) {
        self.config = config;
    }
}
