//! Distribution helpers over an explicit [`Random`] source.

use crate::math::round;
use crate::random::Random;

/// Uniform `f32` in `[0, 1)`.
#[inline]
pub fn uniform<R: Random>(rng: &mut R) -> f32 {
    rng.next_f32()
}

/// Uniform `f32` in `[min, max)`.
#[inline]
pub fn uniform_in<R: Random>(rng: &mut R, min: f32, max: f32) -> f32 {
    rng.next_f32() * (max - min) + min
}

/// Uniform integer in `[min, max]` (both inclusive).
///
/// The span is computed in `i64`, so any pair of `i32` bounds is accepted.
#[inline]
pub fn int_in<R: Random>(rng: &mut R, min: i32, max: i32) -> i32 {
    let span = i64::from(max) - i64::from(min) + 1;
    let offset = (rng.next_f32() * span as f32).floor() as i64;
    let value = (i64::from(min) + offset).min(i64::from(max));
    i32::try_from(value).unwrap_or(max)
}

/// Standard normal sample narrowed to `f32`.
#[inline]
pub fn gaussian<R: Random>(rng: &mut R) -> f32 {
    rng.next_gaussian() as f32
}

/// Gaussian sample mapped from `[-1, 1]` onto `[min, max]`.
///
/// Tails are not clipped; results can fall outside `[min, max]`.
#[inline]
pub fn gaussian_in<R: Random>(rng: &mut R, min: f32, max: f32) -> f32 {
    min + (gaussian(rng) + 1.0) / 2.0 * (max - min)
}

/// Integer Gaussian sample mapped onto `[min, max]` and rounded.
#[inline]
pub fn gaussian_int_in<R: Random>(rng: &mut R, min: i32, max: i32) -> i32 {
    round(gaussian_in(rng, min as f32, max as f32))
}

/// `true` with the given probability.
///
/// Never `true` for a probability of `0` or below, always `true` for `1` or above.
#[inline]
pub fn chance<R: Random>(rng: &mut R, probability: f32) -> bool {
    rng.next_f32() < probability
}
