//! Common utilities module
//!
//! This module contains the error type and byte helpers shared across the swatch pipeline.

pub mod bytes;
pub mod error;

pub use bytes::{read_i16_be, read_u16_be};
pub use error::{ConversionError, Result};
