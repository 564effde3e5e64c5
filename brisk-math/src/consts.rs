//! Single-precision constants shared by the approximations and by callers.

#![allow(
    clippy::excessive_precision,
    reason = "literals are kept at full precision and rounded by the compiler"
)]

/// Euler's number.
pub const E: f32 = 2.718_281_828_459_045_235_36;
/// Natural logarithm of 2.
pub const LN_2: f32 = 0.693_147_180_559_945_309_41;
/// Natural logarithm of 10.
pub const LN_10: f32 = 2.302_585_092_994_045_684_02;

/// Ratio of a circle's circumference to its diameter.
pub const PI: f32 = 3.141_592_653_589_793_238_46;
/// `2π`, one full turn.
pub const TWO_PI: f32 = PI * 2.0;
/// `π/2`.
pub const HALF_PI: f32 = PI / 2.0;
/// `π/3`.
pub const THIRD_PI: f32 = PI / 3.0;
/// `π/4`.
pub const QUARTER_PI: f32 = PI / 4.0;
/// `3π/2`, computed as `2π - π/2`.
pub const THREE_HALVES_PI: f32 = TWO_PI - HALF_PI;

/// Square root of 2.
pub const SQRT_2: f32 = 1.414_213_562_373_095_048_8;
/// `1 / √2`.
pub const INV_SQRT_2: f32 = 1.0 / SQRT_2;
/// `1 / 3`.
pub const THIRD: f32 = 1.0 / 3.0;
/// `1 / √3`.
pub const SQRT_INV_3: f32 = 0.577_350_269_189_625_764_5;

/// Tolerance used by [`approx_eq`](crate::math::approx_eq).
///
/// This is the double-precision half-ulp of 1.0 narrowed to `f32`, so in practice
/// only exactly equal values compare equal under it.
pub const EPSILON: f32 = 1.110_223_024_625_156_5e-16;

/// Multiply radians by this to get degrees.
pub const RAD_DEG: f32 = 180.0 / PI;
/// Multiply degrees by this to get radians.
pub const DEG_RAD: f32 = PI / 180.0;

/// `2^23`, the scale of the `f32` mantissa field.
pub(crate) const SHIFT_23: f32 = (1 << 23) as f32;
/// `1 / 2^23`.
pub(crate) const INV_SHIFT_23: f32 = 1.0 / SHIFT_23;
