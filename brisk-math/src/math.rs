//! Floor/fractional primitives and small scalar helpers.
//!
//! These are the building blocks the noise generator and the bit-level
//! approximations lean on. They work on `f32` and return `i32` lattice indices,
//! saturating at the `i32` range the same way an `as` cast does.

use num_traits::Float;

use crate::consts::{DEG_RAD, EPSILON, HALF_PI, PI, RAD_DEG, TWO_PI};

/// Round down to the nearest integer.
///
/// Truncates toward zero and corrects negative non-integral values, so
/// `floor(-0.5) == -1` and `floor(2.0) == 2`.
#[inline]
#[must_use]
pub fn floor(a: f32) -> i32 {
    let b = a as i32;
    if a < b as f32 { b.saturating_sub(1) } else { b }
}

/// Round up to the nearest integer.
#[inline]
#[must_use]
pub fn ceil(a: f32) -> i32 {
    let b = a as i32;
    if a > b as f32 { b.saturating_add(1) } else { b }
}

/// Round half-up to the nearest integer.
#[inline]
#[must_use]
pub fn round(a: f32) -> i32 {
    floor(a + 0.5)
}

/// Fractional part of `a`, `a - floor(a)`.
///
/// In `[0, 1)` for finite values within the `i32` range.
#[inline]
#[must_use]
pub fn fract(a: f32) -> f32 {
    a - floor(a) as f32
}

/// Linear interpolation: `a + t * (b - a)`.
#[inline]
#[must_use]
pub fn lerp<T: Float>(t: T, a: T, b: T) -> T {
    a + t * (b - a)
}

/// Quintic fade curve `t³(6t² - 15t + 10)`.
///
/// Has zero first and second derivatives at `t = 0` and `t = 1`.
#[inline]
#[must_use]
pub fn fade(t: f32) -> f32 {
    t * t * t * (t * (t * 6.0 - 15.0) + 10.0)
}

/// Convert radians to degrees.
#[inline]
#[must_use]
pub fn degrees(rad: f32) -> f32 {
    rad * RAD_DEG
}

/// Convert degrees to radians.
#[inline]
#[must_use]
pub fn radians(deg: f32) -> f32 {
    deg * DEG_RAD
}

/// Fold an angle into `[-π/2, π/2]` while preserving its sine.
#[must_use]
pub fn reduce_angle(theta: f32) -> f32 {
    let mut theta = theta % TWO_PI;
    if theta > PI {
        theta -= TWO_PI;
    } else if theta < -PI {
        theta += TWO_PI;
    }
    if theta > HALF_PI {
        PI - theta
    } else if theta < -HALF_PI {
        -PI - theta
    } else {
        theta
    }
}

/// `true` when `a` and `b` differ by less than [`EPSILON`].
#[inline]
#[must_use]
pub fn approx_eq(a: f32, b: f32) -> bool {
    approx_eq_within(a, b, EPSILON)
}

/// `true` when `a` and `b` differ by less than `error`.
#[inline]
#[must_use]
pub fn approx_eq_within(a: f32, b: f32, error: f32) -> bool {
    (a - b).abs() < error
}

/// `true` when `a` is neither infinite nor NaN.
///
/// No approximation in this crate calls this implicitly; callers that need a
/// validity check ask for it.
#[inline]
#[must_use]
pub const fn is_valid(a: f32) -> bool {
    a.is_finite()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_floor_matches_std() {
        for i in -200..200 {
            let a = i as f32 * 0.37;
            assert_eq!(floor(a), a.floor() as i32, "floor({a})");
        }
        assert_eq!(floor(-0.5), -1);
        assert_eq!(floor(-3.0), -3);
        assert_eq!(floor(2.0), 2);
    }

    #[test]
    fn test_ceil_and_round() {
        assert_eq!(ceil(1.2), 2);
        assert_eq!(ceil(-1.2), -1);
        assert_eq!(ceil(3.0), 3);
        assert_eq!(round(2.5), 3);
        assert_eq!(round(-2.5), -2);
        assert_eq!(round(-2.6), -3);
    }

    #[test]
    fn test_floor_saturates() {
        assert_eq!(floor(1e20), i32::MAX);
        assert_eq!(floor(-1e20), i32::MIN);
        assert_eq!(floor(f32::NAN), 0);
    }

    #[test]
    fn test_fract_range() {
        for i in -100..100 {
            let f = fract(i as f32 * 0.173);
            assert!((0.0..1.0).contains(&f), "fract out of range: {f}");
        }
    }

    #[test]
    #[allow(clippy::float_cmp, reason = "fade endpoints are exact")]
    fn test_fade_endpoints() {
        assert_eq!(fade(0.0), 0.0);
        assert_eq!(fade(1.0), 1.0);
        assert!((fade(0.5) - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_angle_conversions() {
        assert!((degrees(PI) - 180.0).abs() < 1e-4);
        assert!((radians(90.0) - HALF_PI).abs() < 1e-6);
    }

    #[test]
    fn test_reduce_angle_preserves_sine() {
        for i in -50..50 {
            let theta = i as f32 * 0.41;
            let reduced = reduce_angle(theta);
            assert!(reduced.abs() <= HALF_PI + 1e-5);
            assert!((reduced.sin() - theta.sin()).abs() < 1e-4, "theta = {theta}");
        }
    }

    #[test]
    fn test_validity() {
        assert!(is_valid(1.0));
        assert!(!is_valid(f32::NAN));
        assert!(!is_valid(f32::INFINITY));
        assert!(approx_eq(0.25, 0.25));
        assert!(!approx_eq(0.25, 0.250_001));
        assert!(approx_eq_within(0.25, 0.250_001, 1e-3));
    }
}
