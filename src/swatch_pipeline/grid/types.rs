//! Grid layout and rendering configuration types

use std::fmt;
use std::str::FromStr;

use crate::swatch_pipeline::color::Color;

/// A `<width>x<height>` pair, used for both the canvas (columns x rows) and the cell size
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridSize {
    pub width: usize,
    pub height: usize,
}

impl GridSize {
    pub const fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }
}

impl FromStr for GridSize {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (width, height) = s
            .split_once(['x', 'X'])
            .ok_or_else(|| format!("expected <width>x<height>, got '{}'", s))?;
        let width = width
            .trim()
            .parse()
            .map_err(|e| format!("width '{}' cannot be parsed: {}", width, e))?;
        let height = height
            .trim()
            .parse()
            .map_err(|e| format!("height '{}' cannot be parsed: {}", height, e))?;
        Ok(Self { width, height })
    }
}

impl fmt::Display for GridSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Geometry of the rendered grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridLayout {
    /// Number of cells per row
    pub columns: usize,
    /// Number of rows
    pub rows: usize,
    /// Cell width in pixels
    pub cell_width: usize,
    /// Cell height in pixels
    pub cell_height: usize,
}

impl Default for GridLayout {
    fn default() -> Self {
        Self::new(GridSize::new(25, 12), GridSize::new(10, 10))
    }
}

impl GridLayout {
    pub fn new(canvas: GridSize, cell: GridSize) -> Self {
        Self {
            columns: canvas.width,
            rows: canvas.height,
            cell_width: cell.width,
            cell_height: cell.height,
        }
    }

    pub fn cell_count(&self) -> usize {
        self.columns.saturating_mul(self.rows)
    }

    /// Pixel size of the rendered image, or `None` when a side exceeds `u32::MAX`
    /// or the RGB byte count overflows `usize`.
    pub fn image_size(&self) -> Option<(usize, usize)> {
        let width = self.columns.checked_mul(self.cell_width)?;
        let height = self.rows.checked_mul(self.cell_height)?;
        if u32::try_from(width).is_err() || u32::try_from(height).is_err() {
            return None;
        }
        width.checked_mul(height)?.checked_mul(3)?;
        Some((width, height))
    }

    /// Palette index drawn in cell `(col, row)`.
    pub fn index_of(&self, col: usize, row: usize) -> usize {
        col + row * self.columns
    }
}

/// TIFF compression methods
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TiffCompression {
    /// No compression (fastest, largest file)
    None,
    /// LZW compression
    Lzw,
    /// Deflate compression - fast level
    DeflateFast,
    /// Deflate compression - balanced
    DeflateBalanced,
    /// Deflate compression - best compression (slower)
    DeflateBest,
}

/// Configuration for swatch to TIFF rendering
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Grid geometry
    pub layout: GridLayout,
    /// Compression method to use
    pub compression: TiffCompression,
    /// Whether to reject grids with a zero dimension before rendering
    pub validate_grid: bool,
    /// Fill for cells past the end of the palette
    pub background: Color,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            layout: GridLayout::default(),
            compression: TiffCompression::None,
            validate_grid: true,
            background: Color::BLACK,
        }
    }
}

impl RenderConfig {
    pub fn builder() -> RenderConfigBuilder {
        RenderConfigBuilder::default()
    }
}

/// Builder for RenderConfig
#[derive(Default)]
pub struct RenderConfigBuilder {
    canvas: Option<GridSize>,
    cell: Option<GridSize>,
    compression: Option<TiffCompression>,
    validate_grid: Option<bool>,
    background: Option<Color>,
}

impl RenderConfigBuilder {
    /// Grid size in cells, columns x rows.
    pub fn canvas(mut self, canvas: GridSize) -> Self {
        self.canvas = Some(canvas);
        self
    }

    /// Cell size in pixels, width x height.
    pub fn cell(mut self, cell: GridSize) -> Self {
        self.cell = Some(cell);
        self
    }

    pub fn compression(mut self, compression: TiffCompression) -> Self {
        self.compression = Some(compression);
        self
    }

    pub fn validate_grid(mut self, validate: bool) -> Self {
        self.validate_grid = Some(validate);
        self
    }

    pub fn background(mut self, background: Color) -> Self {
        self.background = Some(background);
        self
    }

    pub fn build(self) -> RenderConfig {
        let default = RenderConfig::default();
        let layout = GridLayout::new(
            self.canvas.unwrap_or(GridSize::new(default.layout.columns, default.layout.rows)),
            self.cell.unwrap_or(GridSize::new(default.layout.cell_width, default.layout.cell_height)),
        );
        RenderConfig {
            layout,
            compression: self.compression.unwrap_or(default.compression),
            validate_grid: self.validate_grid.unwrap_or(default.validate_grid),
            background: self.background.unwrap_or(default.background),
        }
    }
}
