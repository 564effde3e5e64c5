//! Rational approximation of `atan2`.

use crate::consts::{HALF_PI, PI};

/// Empirical coefficient minimising the error of `z / (1 + k·z²)` on `[-1, 1]`.
const K: f32 = 0.28;

/// Approximate `atan2(y, x)` in radians, in `(-π, π]`.
///
/// Maximum error is about 0.005 rad. At `x == 0` the result is exactly `π/2`,
/// `0` or `-π/2` depending on the sign of `y`; it is never NaN for finite input.
#[must_use]
pub fn atan2(y: f32, x: f32) -> f32 {
    if x == 0.0 {
        return if y > 0.0 {
            HALF_PI
        } else if y == 0.0 {
            0.0
        } else {
            -HALF_PI
        };
    }

    let z = y / x;
    if z.abs() < 1.0 {
        let atan = z / (1.0 + K * z * z);
        if x < 0.0 {
            if y < 0.0 { atan - PI } else { atan + PI }
        } else {
            atan
        }
    } else {
        let atan = HALF_PI - z / (z * z + K);
        if y < 0.0 { atan - PI } else { atan }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[allow(clippy::float_cmp, reason = "axis results are exact constants")]
    fn test_singular_axis() {
        assert_eq!(atan2(0.0, 0.0), 0.0);
        assert_eq!(atan2(1.0, 0.0), HALF_PI);
        assert_eq!(atan2(-1.0, 0.0), -HALF_PI);
        assert_eq!(atan2(5.0, -0.0), HALF_PI);
    }

    #[test]
    fn test_first_quadrant_range() {
        for i in 1..50 {
            for j in 1..50 {
                let a = atan2(i as f32 * 0.7, j as f32 * 1.3);
                assert!(a > 0.0 && a < HALF_PI, "atan2({i}, {j}) = {a}");
            }
        }
    }

    #[test]
    fn test_error_bound_all_quadrants() {
        for i in 0..360 {
            let theta = (i as f32 + 0.5).to_radians();
            for r in [0.01_f32, 1.0, 250.0] {
                let (y, x) = (r * theta.sin(), r * theta.cos());
                let approx = atan2(y, x);
                let exact = y.atan2(x);
                assert!((approx - exact).abs() < 0.01, "atan2({y}, {x}) = {approx}, exact {exact}");
                assert!(approx > -PI && approx <= PI + 1e-6);
            }
        }
    }
}
