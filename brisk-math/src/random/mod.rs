//! Seeded pseudo-random sources.
//!
//! There is no process-wide generator here: anything that needs randomness takes a
//! `&mut impl Random`, so tests can pin a seed and get a reproducible sequence.
//!
//! - [`LegacyRandom`] - 48-bit linear congruential generator
//! - [`sample`] - Uniform and Gaussian helpers over any [`Random`]

pub mod legacy_random;
pub mod sample;

pub use legacy_random::LegacyRandom;

/// A source of pseudo-random numbers.
pub trait Random {
    /// Next uniformly distributed `i32` over the full range.
    fn next_i32(&mut self) -> i32;

    /// Next uniformly distributed `i32` in `[0, bound)`.
    ///
    /// A non-positive `bound` yields `0`.
    fn next_i32_bounded(&mut self, bound: i32) -> i32;

    /// Next uniformly distributed `f32` in `[0, 1)`.
    fn next_f32(&mut self) -> f32;

    /// Next uniformly distributed `f64` in `[0, 1)`.
    fn next_f64(&mut self) -> f64;

    /// Next normally distributed `f64` with mean 0 and standard deviation 1.
    fn next_gaussian(&mut self) -> f64;

    /// Advance the generator by `count` draws, discarding the results.
    fn consume_count(&mut self, count: u32) {
        for _ in 0..count {
            self.next_i32();
        }
    }
}
