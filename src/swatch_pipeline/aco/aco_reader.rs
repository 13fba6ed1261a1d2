//! Reader for the version 1 color section of Photoshop-style swatch files.
//!
//! Layout, big-endian throughout:
//!
//! | Offset | Size | Field                      |
//! |--------|------|----------------------------|
//! | 0      | 2    | format version (ignored)   |
//! | 2      | 2    | record count N             |
//! | 4..    | 10   | N x (color space id, payload) |
//!
//! Any data following the N records is left unread.

use std::io::{Cursor, Read};

use tracing::{debug, trace};
use crate::swatch_pipeline::aco::reader::PaletteReader;
use crate::swatch_pipeline::aco::types::{Palette, RawRecord};
use crate::swatch_pipeline::color::PAYLOAD_LEN;
use crate::swatch_pipeline::common::bytes::read_u16_be;
use crate::swatch_pipeline::common::error::{ConversionError, Result};

/// Parses the record stream of a swatch file.
///
/// Decoding stops at the first malformed record; no partial palette is returned.
pub struct AcoReader;

/// Reads exactly `N` bytes, reporting where the stream ran short.
fn read_array<const N: usize>(cursor: &mut Cursor<&[u8]>) -> Result<[u8; N]> {
    let offset = cursor.position();
    let mut buf = [0u8; N];
    cursor.read_exact(&mut buf).map_err(|e| match e.kind() {
        std::io::ErrorKind::UnexpectedEof => ConversionError::Truncated { offset, needed: N },
        _ => ConversionError::IoError(e),
    })?;
    Ok(buf)
}

impl AcoReader {
    fn read_record(cursor: &mut Cursor<&[u8]>) -> Result<RawRecord> {
        let color_space_id = read_u16_be(&read_array::<2>(cursor)?);
        let payload = read_array::<PAYLOAD_LEN>(cursor)?;
        Ok(RawRecord { color_space_id, payload })
    }
}

impl PaletteReader for AcoReader {
    fn read_palette(&self, data: &[u8]) -> Result<Palette> {
        debug!("Parsing swatch data, {} bytes", data.len());

        let mut cursor = Cursor::new(data);
        let version = read_u16_be(&read_array::<2>(&mut cursor)?);
        let count = read_u16_be(&read_array::<2>(&mut cursor)?) as usize;

        debug!(version, count, "Read swatch header");

        let mut colors = Vec::with_capacity(count);
        for index in 0..count {
            let record = Self::read_record(&mut cursor)?;
            let color = record.decode()?;
            trace!(index, color_space = record.color_space_id, ?color, "Decoded record");
            colors.push(color);
        }

        debug!("Decoded {} colors", colors.len());
        Ok(Palette::new(colors))
    }
}
