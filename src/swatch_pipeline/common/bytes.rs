//! Big-endian field helpers.
//!
//! Callers always hand in a window of at least two bytes; anything shorter is a bug
//! at the call site and panics on the slice index.

/// Reads the first two bytes of `bytes` as a big-endian `u16`.
#[inline]
pub fn read_u16_be(bytes: &[u8]) -> u16 {
    u16::from_be_bytes([bytes[0], bytes[1]])
}

/// Reads the first two bytes of `bytes` as a big-endian `i16`.
#[inline]
pub fn read_i16_be(bytes: &[u8]) -> i16 {
    i16::from_be_bytes([bytes[0], bytes[1]])
}
