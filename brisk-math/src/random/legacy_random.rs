//! 48-bit linear congruential generator.
//!
//! Produces the same sequence as the classic `java.util.Random` family of
//! generators, which keeps permutation tables built from a given seed stable.

use crate::random::Random;

const MULTIPLIER: i64 = 0x5_DEEC_E66D;
const ADDEND: i64 = 0xB;
const MASK: i64 = (1 << 48) - 1;
const DOUBLE_UNIT: f64 = 1.0 / (1_u64 << 53) as f64;

/// 48-bit LCG with a cached second Gaussian value.
#[derive(Debug, Clone)]
pub struct LegacyRandom {
    seed: i64,
    next_gaussian: Option<f64>,
}

impl LegacyRandom {
    /// Create a generator from a seed. The seed is scrambled before use.
    #[must_use]
    pub const fn from_seed(seed: i64) -> Self {
        Self {
            seed: (seed ^ MULTIPLIER) & MASK,
            next_gaussian: None,
        }
    }

    /// Reset the generator as if it had just been created with `seed`.
    pub const fn set_seed(&mut self, seed: i64) {
        self.seed = (seed ^ MULTIPLIER) & MASK;
        self.next_gaussian = None;
    }

    /// Advance the state and return the top `bits` bits (at most 32).
    #[inline]
    const fn next(&mut self, bits: u32) -> i32 {
        self.seed = (self.seed.wrapping_mul(MULTIPLIER).wrapping_add(ADDEND)) & MASK;
        (self.seed >> (48 - bits)) as i32
    }
}

impl Random for LegacyRandom {
    #[inline]
    fn next_i32(&mut self) -> i32 {
        self.next(32)
    }

    fn next_i32_bounded(&mut self, bound: i32) -> i32 {
        if bound <= 0 {
            return 0;
        }

        // Power of two: take the high bits directly.
        if bound & -bound == bound {
            return ((i64::from(bound) * i64::from(self.next(31))) >> 31) as i32;
        }

        loop {
            let bits = self.next(31);
            let val = bits % bound;
            // Reject the partial block at the top of the range.
            if bits.wrapping_sub(val).wrapping_add(bound - 1) >= 0 {
                return val;
            }
        }
    }

    #[inline]
    fn next_f32(&mut self) -> f32 {
        self.next(24) as f32 / (1 << 24) as f32
    }

    #[inline]
    fn next_f64(&mut self) -> f64 {
        let high = i64::from(self.next(26)) << 27;
        let low = i64::from(self.next(27));
        (high + low) as f64 * DOUBLE_UNIT
    }

    fn next_gaussian(&mut self) -> f64 {
        if let Some(cached) = self.next_gaussian.take() {
            return cached;
        }

        // Marsaglia polar method, two values per accepted pair.
        loop {
            let v1 = 2.0 * self.next_f64() - 1.0;
            let v2 = 2.0 * self.next_f64() - 1.0;
            let s = v1 * v1 + v2 * v2;
            if s < 1.0 && s != 0.0 {
                let multiplier = (-2.0 * s.ln() / s).sqrt();
                self.next_gaussian = Some(v2 * multiplier);
                return v1 * multiplier;
            }
        }
    }
}
