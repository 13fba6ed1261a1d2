//! Pipeline conversions module
//!
//! This module contains orchestration logic for turning swatch files into images.

mod aco_to_tiff;
#[cfg(test)]
mod tests;

pub use aco_to_tiff::AcoToTiffPipeline;
