//! Command-line argument definitions

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use acodraw_rs::swatch_pipeline::{GridSize, RenderConfig, TiffCompression};

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Compression {
    /// No compression (fastest, largest file)
    None,
    /// LZW compression
    Lzw,
    /// Deflate, fast level
    DeflateFast,
    /// Deflate, balanced level
    DeflateBalanced,
    /// Deflate, best compression
    DeflateBest,
}

impl Compression {
    pub fn to_tiff_compression(self) -> TiffCompression {
        match self {
            Compression::None => TiffCompression::None,
            Compression::Lzw => TiffCompression::Lzw,
            Compression::DeflateFast => TiffCompression::DeflateFast,
            Compression::DeflateBalanced => TiffCompression::DeflateBalanced,
            Compression::DeflateBest => TiffCompression::DeflateBest,
        }
    }
}

/// Render the colors of a swatch file as a grid of solid cells.
#[derive(Debug, Parser)]
#[command(name = "acodraw", version)]
pub struct Args {
    /// Swatch file to read
    pub input: PathBuf,

    /// Output TIFF path [default: <INPUT>.tiff]
    #[arg(long)]
    pub out: Option<PathBuf>,

    /// Grid size in cells, <COLUMNS>x<ROWS>
    #[arg(long, default_value = "25x12")]
    pub canvas: GridSize,

    /// Cell size in pixels, <WIDTH>x<HEIGHT>
    #[arg(long, default_value = "10x10")]
    pub cell: GridSize,

    /// TIFF compression
    #[arg(long, value_enum, default_value_t = Compression::None)]
    pub compression: Compression,
}

impl Args {
    pub fn output_path(&self) -> PathBuf {
        self.out.clone().unwrap_or_else(|| {
            let mut name = self.input.clone().into_os_string();
            name.push(".tiff");
            PathBuf::from(name)
        })
    }

    pub fn render_config(&self) -> RenderConfig {
        RenderConfig::builder()
            .canvas(self.canvas)
            .cell(self.cell)
            .compression(self.compression.to_tiff_compression())
            .build()
    }
}
