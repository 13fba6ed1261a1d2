//! RGB, HSB, CMYK and grayscale decoders.
//!
//! Every decoder takes the full 8-byte payload as four big-endian 16-bit fields and
//! ignores the ones its color space does not use.

use crate::swatch_pipeline::color::types::{Color, PAYLOAD_LEN};
use crate::swatch_pipeline::common::bytes::read_u16_be;

/// Raw hue units per degree (65535 / 360).
const HUE_UNITS_PER_DEGREE: f64 = 182.04;

/// Raw saturation/brightness units per percent (65535 / 100).
const PERCENT_UNITS: f64 = 655.35;

/// Grayscale raw units per 8-bit level (10000 / 256).
const GRAY_UNITS_PER_LEVEL: f64 = 39.0625;

/// Returns the 16-bit field at position `index` (0..4) of the payload.
#[inline]
fn field(payload: &[u8; PAYLOAD_LEN], index: usize) -> u16 {
    read_u16_be(&payload[index * 2..index * 2 + 2])
}

/// Truncates toward zero and saturates into an 8-bit channel.
#[inline]
pub(crate) fn to_channel(value: f64) -> u8 {
    value.clamp(0.0, 255.0) as u8
}

pub fn from_rgb(payload: &[u8; PAYLOAD_LEN]) -> Color {
    Color::new(
        (field(payload, 0) / 256) as u8,
        (field(payload, 1) / 256) as u8,
        (field(payload, 2) / 256) as u8,
    )
}

/// HSB with hue in [0, 65535] ~ [0, 360) degrees and saturation/brightness in [0, 65535].
pub fn from_hsb(payload: &[u8; PAYLOAD_LEN]) -> Color {
    let h = field(payload, 0) as f64 / HUE_UNITS_PER_DEGREE;
    let s = field(payload, 1) as f64 / PERCENT_UNITS / 100.0;
    let v = field(payload, 2) as f64 / PERCENT_UNITS / 100.0;

    let sector = (h / 60.0).floor();
    let f = h / 60.0 - sector;
    let p = v * (1.0 - s);
    let q = v * (1.0 - f * s);
    let t = v * (1.0 - (1.0 - f) * s);

    let (r, g, b) = match sector as i64 % 6 {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        5 => (v, p, q),
        i => unreachable!("hue sector {} outside 0..6", i),
    };

    Color::new(
        to_channel((r * 255.0).round()),
        to_channel((g * 255.0).round()),
        to_channel((b * 255.0).round()),
    )
}

/// CMYK where each raw field stores the inverse of the ink coverage.
pub fn from_cmyk(payload: &[u8; PAYLOAD_LEN]) -> Color {
    let inverse = |i: usize| 1.0 - field(payload, i) as f64 / u16::MAX as f64;
    cmyk_to_rgb(inverse(0), inverse(1), inverse(2), inverse(3))
}

/// CMYK with each field holding ink coverage in percent x 100, i.e. [0, 10000].
pub fn from_wide_cmyk(payload: &[u8; PAYLOAD_LEN]) -> Color {
    let coverage = |i: usize| (field(payload, i) / 100) as f64 / 100.0;
    cmyk_to_rgb(coverage(0), coverage(1), coverage(2), coverage(3))
}

/// Single channel in [0, 10000] replicated into all three components.
pub fn from_grayscale(payload: &[u8; PAYLOAD_LEN]) -> Color {
    let level = to_channel((field(payload, 0) as f64 / GRAY_UNITS_PER_LEVEL).trunc());
    Color::new(level, level, level)
}

/// Shared CMYK conversion on ink coverages normalized to [0, 1].
fn cmyk_to_rgb(c: f64, m: f64, y: f64, k: f64) -> Color {
    let channel = |ink: f64| 1.0 - (ink * (1.0 - k) + k).min(1.0);
    Color::new(
        to_channel(channel(c) * 255.0),
        to_channel(channel(m) * 255.0),
        to_channel(channel(y) * 255.0),
    )
}
