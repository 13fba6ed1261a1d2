use tracing::{debug, warn};
use crate::swatch_pipeline::aco::types::Palette;
use crate::swatch_pipeline::color::Color;
use crate::swatch_pipeline::common::error::{ConversionError, Result};
use crate::swatch_pipeline::grid::types::GridLayout;

/// Rendered grid as interleaved 8-bit RGB
#[derive(Debug, Clone)]
pub struct GridImage {
    /// Width of the image in pixels
    pub width: usize,
    /// Height of the image in pixels
    pub height: usize,
    /// Pixel data interleaved [R, G, B, R, G, B, ...]
    pub data: Vec<u8>,
}

impl GridImage {
    pub fn pixel(&self, x: usize, y: usize) -> Color {
        let i = (y * self.width + x) * 3;
        Color::new(self.data[i], self.data[i + 1], self.data[i + 2])
    }
}

/// Fills cell `(col, row)` with `palette[col + row * columns]`.
///
/// Cells past the end of the palette get `background`; colors past the end of the
/// grid are not drawn. Fails with `InvalidGrid` when the image size overflows.
pub fn render_grid(palette: &Palette, layout: &GridLayout, background: Color) -> Result<GridImage> {
    let (width, height) = layout.image_size().ok_or(ConversionError::InvalidGrid {
        columns: layout.columns,
        rows: layout.rows,
    })?;
    debug!("Rendering {} colors into {}x{} pixels", palette.len(), width, height);

    if palette.len() < layout.cell_count() {
        warn!(
            "Palette has {} colors for {} cells, filling the rest with background",
            palette.len(),
            layout.cell_count()
        );
    } else if palette.len() > layout.cell_count() {
        warn!(
            "Palette has {} colors but the grid only shows {}",
            palette.len(),
            layout.cell_count()
        );
    }

    let mut data = vec![0u8; width * height * 3];
    if width == 0 {
        return Ok(GridImage { width, height, data });
    }

    for (y, line) in data.chunks_exact_mut(width * 3).enumerate() {
        let row = y / layout.cell_height;
        for (x, pixel) in line.chunks_exact_mut(3).enumerate() {
            let col = x / layout.cell_width;
            let color = palette.get(layout.index_of(col, row)).unwrap_or(background);
            pixel.copy_from_slice(&color.to_array());
        }
    }

    Ok(GridImage { width, height, data })
}
