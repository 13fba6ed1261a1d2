//! L*a*b* decoder
//!
//! Lab is referenced to D50. The decoded XYZ is adapted towards D65 with a fixed
//! matrix and then projected to linear RGB. No gamma curve is applied.

use crate::swatch_pipeline::color::decoders::to_channel;
use crate::swatch_pipeline::color::types::{Color, PAYLOAD_LEN};
use crate::swatch_pipeline::common::bytes::{read_i16_be, read_u16_be};

// D50 reference white
const X_N: f64 = 0.9642;
const Y_N: f64 = 1.0;
const Z_N: f64 = 0.8249;

/// f(t) breakpoint, 6/29
const DELTA: f64 = 6.0 / 29.0;

const D50_TO_D65: [[f64; 3]; 3] = [
    [3.134187, -1.617209, -0.490694],
    [-0.978749, 1.916130, 0.033433],
    [0.071964, -0.228994, 1.405754],
];

const XYZ_TO_RGB: [[f64; 3]; 3] = [
    [3.240479, -1.537150, -0.498535],
    [-0.969256, 1.875991, 0.041556],
    [0.055648, -0.204043, 1.057331],
];

#[inline]
fn mat_vec(m: &[[f64; 3]; 3], v: [f64; 3]) -> [f64; 3] {
    let mut out = [0.0; 3];
    for (row, o) in m.iter().zip(out.iter_mut()) {
        *o = row[0] * v[0] + row[1] * v[1] + row[2] * v[2];
    }
    out
}

/// Inverse of the Lab companding function, scaled by the reference white component.
#[inline]
fn f_inv(f: f64, white: f64) -> f64 {
    if f > DELTA {
        f.powi(3) * white
    } else {
        (3.0 / 29.0_f64).powi(3) * (116.0 * f - 16.0) * white
    }
}

/// Converts L* in [0, 100] and a*, b* in about [-128, 127] to D50 XYZ.
pub fn lab_to_xyz(l: f64, a: f64, b: f64) -> [f64; 3] {
    let f_y = (l + 16.0) / 116.0;
    let f_x = f_y + a / 500.0;
    let f_z = f_y - b / 200.0;

    [f_inv(f_x, X_N), f_inv(f_y, Y_N), f_inv(f_z, Z_N)]
}

/// L* as unsigned hundredths, a* and b* as signed hundredths.
pub fn from_lab(payload: &[u8; PAYLOAD_LEN]) -> Color {
    let l = read_u16_be(&payload[0..2]) as f64 / 100.0;
    let a = read_i16_be(&payload[2..4]) as f64 / 100.0;
    let b = read_i16_be(&payload[4..6]) as f64 / 100.0;

    let xyz = mat_vec(&D50_TO_D65, lab_to_xyz(l, a, b));
    let [r, g, b] = mat_vec(&XYZ_TO_RGB, xyz);

    Color::new(
        to_channel((r * 255.0).trunc()),
        to_channel((g * 255.0).trunc()),
        to_channel((b * 255.0).trunc()),
    )
}
