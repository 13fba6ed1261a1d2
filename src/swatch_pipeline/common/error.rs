use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConversionError {
    #[error("Failed to read input file: {0}")]
    InputReadError(String),

    #[error("Failed to write output file: {0}")]
    OutputWriteError(String),

    #[error("Truncated swatch data: needed {needed} bytes at offset {offset}")]
    Truncated { offset: u64, needed: usize },

    #[error("The color space (ID: {0}) is not supported")]
    UnsupportedColorSpace(u16),

    #[error("Failed to encode TIFF image: {0}")]
    EncodeError(String),

    #[error("Invalid grid: columns={columns}, rows={rows}")]
    InvalidGrid { columns: usize, rows: usize },

    #[error("Invalid cell size: width={width}, height={height}")]
    InvalidCellSize { width: usize, height: usize },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ConversionError>;
