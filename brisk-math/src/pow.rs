//! Power approximation through the IEEE-754 bit layout.
//!
//! The bit pattern of a positive `f32`, read as an integer and scaled by
//! `2^-23`, is `log2(a) + 127` up to a piecewise-linear error in the mantissa.
//! Multiplying that by the exponent and writing the result back as a bit
//! pattern gives `a^b`. Two quadratic correction terms on the fractional parts
//! pull the error down to around one percent.

use crate::consts::{INV_SHIFT_23, SHIFT_23};
use crate::math::floor;

/// Correction applied to the fractional part of the approximate logarithm.
const LOG_CORRECTION: f32 = 0.346_607;
/// Correction applied to the fractional part of the scaled exponent.
const EXP_CORRECTION: f32 = 0.339_71;

/// Approximate `a^b` for positive `a`.
///
/// Zero and negative bases are outside the supported domain: their bit patterns
/// are not logarithms and the result has no meaning. No check is made.
#[must_use]
pub fn pow(a: f32, b: f32) -> f32 {
    // Approximate log2(a).
    let x = a.to_bits() as i32 as f32 * INV_SHIFT_23 - 127.0;
    let y = x - floor(x) as f32;
    let b = b * (x + (y - y * y) * LOG_CORRECTION);

    // Approximate 2^b.
    let y = b - floor(b) as f32;
    let y = (y - y * y) * EXP_CORRECTION;
    f32::from_bits(((b + 127.0 - y) * SHIFT_23) as i32 as u32)
}
