//! Fast, lower-precision replacements for standard math functions.
//!
//! Every function here trades accuracy for speed on purpose. None of them panic or
//! return errors; out-of-domain inputs produce documented sentinel values instead.
//!
//! # Modules
//!
//! - [`consts`] - Single-precision constants (π multiples, conversions, epsilon)
//! - [`math`] - Floor/fractional primitives and small scalar helpers
//! - [`random`] - Seeded pseudo-random source and distribution helpers
//! - [`trig`] - Lookup-table sine and cosine
//! - [`root`] - Integer and floating-point Newton square roots
//! - [`pow`] - IEEE-754 bit-pattern power approximation
//! - [`atan`] - Rational `atan2` approximation

pub mod atan;
pub mod consts;
pub mod math;
pub mod pow;
pub mod random;
pub mod root;
pub mod trig;

pub use atan::atan2;
pub use pow::pow;
pub use root::{FastSqrt, sqrt_f32, sqrt_i32};
pub use trig::{LerpWeight, Trig, TrigConfig, TrigTable};
