//! Newton's-method square roots.
//!
//! The integer and floating-point versions are different algorithms with
//! different convergence behavior, so they are separate functions. [`FastSqrt`]
//! only gives them a common method name.

/// Integer square root by Newton's method, rounded to the nearest integer.
///
/// Non-positive input returns `0`. The starting divisor is picked from the bit
/// length of `a`, and iteration stops as soon as the estimate stops decreasing.
#[must_use]
pub const fn sqrt_i32(a: i32) -> i32 {
    if a <= 0 {
        return 0;
    }

    let mut div = if a & 0xFFFF_0000_u32 as i32 != 0 {
        if a & 0xFF00_0000_u32 as i32 != 0 {
            0x3FFF
        } else {
            0x3FF
        }
    } else if a & 0xFF00 != 0 {
        0x3F
    } else if a > 4 {
        0x7
    } else {
        a
    };

    let mut result = a;
    loop {
        // Half-sum rounded up.
        let sum = a / div + div;
        div = (sum >> 1) + (sum & 1);

        if result > div {
            result = div;
        } else {
            if a / result == result - 1 && a % result == 0 {
                result -= 1;
            }
            return result;
        }
    }
}

/// Number of Newton steps taken by [`sqrt_f32`].
const FLOAT_ITERATIONS: u32 = 4;

/// Floating-point square root by a fixed number of Newton steps.
///
/// Non-positive input returns `0.0`. The argument is first brought into
/// `[1, 16]` (inverting values below one and dividing by 16 while above 16),
/// four Newton steps run from an initial guess of `2.0`, and the result is
/// scaled back by `4` per division. Relative error of the square is well under
/// `1e-3`; the result is not correctly rounded.
#[must_use]
pub fn sqrt_f32(a: f32) -> f32 {
    if a <= 0.0 {
        return 0.0;
    }

    let inverted = a < 1.0;
    let mut a = if inverted { 1.0 / a } else { a };

    let mut halvings = 0;
    while a > 16.0 {
        halvings += 1;
        a /= 16.0;
    }

    let mut result = 2.0_f32;
    for _ in 0..FLOAT_ITERATIONS {
        result = (result + a / result) * 0.5;
    }

    for _ in 0..halvings {
        result *= 4.0;
    }

    if inverted { 1.0 / result } else { result }
}

/// Fast square root under one method name for integers and floats.
pub trait FastSqrt {
    /// Approximate square root; `0` for non-positive input.
    #[must_use]
    fn fast_sqrt(self) -> Self;
}

impl FastSqrt for i32 {
    #[inline]
    fn fast_sqrt(self) -> Self {
        sqrt_i32(self)
    }
}

impl FastSqrt for f32 {
    #[inline]
    fn fast_sqrt(self) -> Self {
        sqrt_f32(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sqrt_i32_known_values() {
        assert_eq!(sqrt_i32(144), 12);
        assert_eq!(sqrt_i32(0), 0);
        assert_eq!(sqrt_i32(-5), 0);
        assert_eq!(sqrt_i32(1), 1);
        assert_eq!(sqrt_i32(2), 1);
        assert_eq!(sqrt_i32(1_000_000), 1000);
        assert_eq!(sqrt_i32(999_999), 1000);
        assert_eq!(sqrt_i32(i32::MAX), 46341);
    }

    #[test]
    fn test_sqrt_i32_perfect_squares() {
        for n in 1..46_341 {
            assert_eq!(sqrt_i32(n * n), n, "sqrt({})", n * n);
        }
    }

    #[test]
    fn test_sqrt_i32_within_one() {
        for a in (1..2_000_000).step_by(7) {
            let exact = f64::from(a).sqrt();
            assert!(
                (f64::from(sqrt_i32(a)) - exact).abs() <= 1.0,
                "sqrt_i32({a}) = {}",
                sqrt_i32(a)
            );
        }
    }

    #[test]
    fn test_sqrt_f32_non_positive() {
        assert!(sqrt_f32(0.0).abs() < f32::EPSILON);
        assert!(sqrt_f32(-4.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_sqrt_f32_relative_error() {
        let mut a = 1e-3_f32;
        while a <= 1e6 {
            let r = sqrt_f32(a);
            assert!(((r * r - a) / a).abs() < 1e-3, "sqrt_f32({a}) = {r}");
            a *= 1.013;
        }
        for i in 1..=1000 {
            let a = i as f32 * 1000.0;
            let r = sqrt_f32(a);
            assert!(((r * r - a) / a).abs() < 1e-3, "sqrt_f32({a}) = {r}");
        }
    }

    #[test]
    fn test_fast_sqrt_trait() {
        assert_eq!(144_i32.fast_sqrt(), 12);
        assert!((16.0_f32.fast_sqrt() - 4.0).abs() < 1e-3);
        assert!((0.25_f32.fast_sqrt() - 0.5).abs() < 1e-3);
    }
}
