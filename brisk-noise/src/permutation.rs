//! Seeded permutation table used to hash lattice coordinates.

use brisk_math::random::{LegacyRandom, Random};

/// Number of distinct lattice hashes.
const SIZE: usize = 256;

/// A shuffle of `0..256`, stored twice in a row.
///
/// The duplicate half lets chained lookups like `p[p[x] + y]` stay in bounds
/// without reducing the index after each addition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PermutationTable {
    p: [u8; SIZE * 2],
}

impl PermutationTable {
    /// Build the table for `seed`. Any seed is valid.
    #[must_use]
    pub fn from_seed(seed: i64) -> Self {
        let mut table = Self { p: [0; SIZE * 2] };
        table.reseed(seed);
        table
    }

    /// Rebuild the whole table from `seed`.
    ///
    /// Starts from the identity permutation and swaps each slot with one picked
    /// by the low byte of the next draw from a [`LegacyRandom`] seeded with `seed`.
    pub fn reseed(&mut self, seed: i64) {
        let mut rng = LegacyRandom::from_seed(seed);

        for (i, val) in self.p.iter_mut().enumerate().take(SIZE) {
            *val = i as u8;
        }

        for i in 0..SIZE {
            let j = (rng.next_i32() & 0xFF) as usize;
            self.p.swap(i, j);
        }

        self.p.copy_within(..SIZE, SIZE);
        tracing::debug!(seed, "reseeded permutation table");
    }

    /// Entry at `index`, which must be below 512.
    #[inline]
    #[must_use]
    pub const fn get(&self, index: usize) -> usize {
        self.p[index] as usize
    }

    /// All 512 entries.
    #[must_use]
    pub const fn as_slice(&self) -> &[u8; SIZE * 2] {
        &self.p
    }
}
