//! Classic gradient noise and its multi-octave sum.

use std::time::{SystemTime, UNIX_EPOCH};

use brisk_math::math::{fade, floor, lerp};

use crate::config::NoiseConfig;
use crate::gradient::{GRADIENT_1D, GRADIENT_2D, GRADIENT_3D, GRADIENT_4D, dot};
use crate::permutation::PermutationTable;

/// Split a coordinate into its lattice cell (masked to `0..256`) and the
/// offset inside the cell.
#[inline]
fn split(v: f32) -> (usize, f32) {
    let cell = floor(v);
    ((cell & 0xFF) as usize, v - cell as f32)
}

/// Seed taken from the wall clock for generators created without one.
fn clock_seed() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |elapsed| elapsed.as_nanos() as i64)
}

/// Perlin noise generator with its own permutation table and octave settings.
///
/// Single-octave samples ([`noise_1d`](Self::noise_1d) through
/// [`noise_4d`](Self::noise_4d)) are roughly in `[-1, 1]`, with no hard bound.
/// They are exactly `0.0` at every lattice point.
///
/// Fractal samples ([`fractal_1d`](Self::fractal_1d) through
/// [`fractal_4d`](Self::fractal_4d)) sum `amplitude · (1 + noise) / 2` over the
/// octaves and are not normalised by the total amplitude.
#[derive(Debug, Clone)]
pub struct PerlinNoise {
    permutation: PermutationTable,
    config: NoiseConfig,
}

impl PerlinNoise {
    /// Create a generator with default settings, seeded from the clock.
    #[must_use]
    pub fn new() -> Self {
        Self::with_seed(clock_seed())
    }

    /// Create a generator with default settings and a fixed seed.
    #[must_use]
    pub fn with_seed(seed: i64) -> Self {
        Self::with_config(seed, NoiseConfig::default())
    }

    /// Create a generator with the given seed and octave settings.
    #[must_use]
    pub fn with_config(seed: i64, config: NoiseConfig) -> Self {
        Self {
            permutation: PermutationTable::from_seed(seed),
            config,
        }
    }

    /// Rebuild the permutation table from `seed`.
    ///
    /// Two generators reseeded with the same seed produce identical samples.
    pub fn reseed(&mut self, seed: i64) {
        self.permutation.reseed(seed);
    }

    /// The permutation table.
    #[must_use]
    pub const fn permutation(&self) -> &PermutationTable {
        &self.permutation
    }

    /// The octave settings.
    #[must_use]
    pub const fn config(&self) -> &NoiseConfig {
        &self.config
    }

    /// Mutable access to the octave settings.
    pub const fn config_mut(&mut self) -> &mut NoiseConfig {
        &mut self.config
    }

    /// Amplitude multiplier applied after each octave.
    #[must_use]
    pub const fn persistence(&self) -> f32 {
        self.config.persistence
    }

    /// Set the persistence.
    pub const fn set_persistence(&mut self, persistence: f32) {
        self.config.persistence = persistence;
    }

    /// Frequency of the first octave.
    #[must_use]
    pub const fn frequency(&self) -> f32 {
        self.config.frequency
    }

    /// Set the first-octave frequency.
    pub const fn set_frequency(&mut self, frequency: f32) {
        self.config.frequency = frequency;
    }

    /// Amplitude of the first octave.
    #[must_use]
    pub const fn amplitude(&self) -> f32 {
        self.config.amplitude
    }

    /// Set the first-octave amplitude.
    pub const fn set_amplitude(&mut self, amplitude: f32) {
        self.config.amplitude = amplitude;
    }

    /// Number of octaves.
    #[must_use]
    pub const fn octaves(&self) -> u32 {
        self.config.octaves
    }

    /// Set the number of octaves.
    pub const fn set_octaves(&mut self, octaves: u32) {
        self.config.octaves = octaves;
    }

    #[inline]
    const fn p(&self, index: usize) -> usize {
        self.permutation.get(index)
    }

    #[inline]
    fn grad_1d(hash: usize, x: f32) -> f32 {
        dot(&GRADIENT_1D[hash & 1], [x])
    }

    #[inline]
    fn grad_2d(hash: usize, x: f32, y: f32) -> f32 {
        dot(&GRADIENT_2D[hash & 3], [x, y])
    }

    #[inline]
    fn grad_3d(hash: usize, x: f32, y: f32, z: f32) -> f32 {
        dot(&GRADIENT_3D[hash & 15], [x, y, z])
    }

    #[inline]
    fn grad_4d(hash: usize, x: f32, y: f32, z: f32, w: f32) -> f32 {
        dot(&GRADIENT_4D[hash & 31], [x, y, z, w])
    }

    /// Single-octave 1D noise.
    #[must_use]
    pub fn noise_1d(&self, x: f32) -> f32 {
        let (xi, x) = split(x);
        let fx = fade(x);

        let a = self.p(xi);
        let b = self.p(xi + 1);

        lerp(fx, Self::grad_1d(self.p(a), x), Self::grad_1d(self.p(b), x - 1.0))
    }

    /// Single-octave 2D noise.
    #[must_use]
    pub fn noise_2d(&self, x: f32, y: f32) -> f32 {
        let (xi, x) = split(x);
        let (yi, y) = split(y);
        let fx = fade(x);
        let fy = fade(y);

        let a = self.p(xi) + yi;
        let b = self.p(xi + 1) + yi;

        lerp(
            fy,
            lerp(
                fx,
                Self::grad_2d(self.p(a), x, y),
                Self::grad_2d(self.p(b), x - 1.0, y),
            ),
            lerp(
                fx,
                Self::grad_2d(self.p(a + 1), x, y - 1.0),
                Self::grad_2d(self.p(b + 1), x - 1.0, y - 1.0),
            ),
        )
    }

    /// Single-octave 3D noise.
    #[must_use]
    pub fn noise_3d(&self, x: f32, y: f32, z: f32) -> f32 {
        let (xi, x) = split(x);
        let (yi, y) = split(y);
        let (zi, z) = split(z);
        let fx = fade(x);
        let fy = fade(y);
        let fz = fade(z);

        let a = self.p(xi) + yi;
        let aa = self.p(a) + zi;
        let ab = self.p(a + 1) + zi;
        let b = self.p(xi + 1) + yi;
        let ba = self.p(b) + zi;
        let bb = self.p(b + 1) + zi;

        // Blend the slab at z, then the slab at z + 1.
        let near = lerp(
            fy,
            lerp(
                fx,
                Self::grad_3d(self.p(aa), x, y, z),
                Self::grad_3d(self.p(ba), x - 1.0, y, z),
            ),
            lerp(
                fx,
                Self::grad_3d(self.p(ab), x, y - 1.0, z),
                Self::grad_3d(self.p(bb), x - 1.0, y - 1.0, z),
            ),
        );
        let far = lerp(
            fy,
            lerp(
                fx,
                Self::grad_3d(self.p(aa + 1), x, y, z - 1.0),
                Self::grad_3d(self.p(ba + 1), x - 1.0, y, z - 1.0),
            ),
            lerp(
                fx,
                Self::grad_3d(self.p(ab + 1), x, y - 1.0, z - 1.0),
                Self::grad_3d(self.p(bb + 1), x - 1.0, y - 1.0, z - 1.0),
            ),
        );

        lerp(fz, near, far)
    }

    /// Single-octave 4D noise.
    #[must_use]
    pub fn noise_4d(&self, x: f32, y: f32, z: f32, w: f32) -> f32 {
        let (xi, x) = split(x);
        let (yi, y) = split(y);
        let (zi, z) = split(z);
        let (wi, w) = split(w);
        let fx = fade(x);
        let fy = fade(y);
        let fz = fade(z);
        let fw = fade(w);

        let a = self.p(xi) + yi;
        let aa = self.p(a) + zi;
        let ab = self.p(a + 1) + zi;
        let b = self.p(xi + 1) + yi;
        let ba = self.p(b) + zi;
        let bb = self.p(b + 1) + zi;

        let aaa = self.p(aa) + wi;
        let aab = self.p(aa + 1) + wi;
        let aba = self.p(ab) + wi;
        let abb = self.p(ab + 1) + wi;
        let baa = self.p(ba) + wi;
        let bab = self.p(ba + 1) + wi;
        let bba = self.p(bb) + wi;
        let bbb = self.p(bb + 1) + wi;

        // One 3D cell blend for a fixed w corner; `dw` is 0 or 1.
        let cube = |dw: usize| {
            let w = w - dw as f32;
            let near = lerp(
                fy,
                lerp(
                    fx,
                    Self::grad_4d(self.p(aaa + dw), x, y, z, w),
                    Self::grad_4d(self.p(baa + dw), x - 1.0, y, z, w),
                ),
                lerp(
                    fx,
                    Self::grad_4d(self.p(aba + dw), x, y - 1.0, z, w),
                    Self::grad_4d(self.p(bba + dw), x - 1.0, y - 1.0, z, w),
                ),
            );
            let far = lerp(
                fy,
                lerp(
                    fx,
                    Self::grad_4d(self.p(aab + dw), x, y, z - 1.0, w),
                    Self::grad_4d(self.p(bab + dw), x - 1.0, y, z - 1.0, w),
                ),
                lerp(
                    fx,
                    Self::grad_4d(self.p(abb + dw), x, y - 1.0, z - 1.0, w),
                    Self::grad_4d(self.p(bbb + dw), x - 1.0, y - 1.0, z - 1.0, w),
                ),
            );
            lerp(fz, near, far)
        };

        lerp(fw, cube(0), cube(1))
    }

    /// Sum `amplitude · (1 + sample(frequency)) / 2` over the octaves.
    #[inline]
    fn octave_sum(&self, sample: impl Fn(f32) -> f32) -> f32 {
        let mut total = 0.0;
        let mut frequency = self.config.frequency;
        let mut amplitude = self.config.amplitude;

        for _ in 0..self.config.octaves {
            total += amplitude * (1.0 + sample(frequency)) / 2.0;
            amplitude *= self.config.persistence;
            frequency *= 2.0;
        }

        total
    }

    /// Multi-octave 1D noise.
    #[must_use]
    pub fn fractal_1d(&self, x: f32) -> f32 {
        self.octave_sum(|f| self.noise_1d(x * f))
    }

    /// Multi-octave 2D noise.
    ///
    /// A `y` of exactly zero is evaluated as [`fractal_1d`](Self::fractal_1d)
    /// of `x`, which differs from sampling the 2D field on the `y = 0` line.
    #[must_use]
    #[allow(clippy::float_cmp, reason = "only a literal zero takes the 1D path")]
    pub fn fractal_2d(&self, x: f32, y: f32) -> f32 {
        if y == 0.0 {
            return self.fractal_1d(x);
        }
        self.octave_sum(|f| self.noise_2d(x * f, y * f))
    }

    /// Multi-octave 3D noise.
    ///
    /// A `z` of exactly zero is evaluated as [`fractal_2d`](Self::fractal_2d).
    #[must_use]
    #[allow(clippy::float_cmp, reason = "only a literal zero takes the 2D path")]
    pub fn fractal_3d(&self, x: f32, y: f32, z: f32) -> f32 {
        if z == 0.0 {
            return self.fractal_2d(x, y);
        }
        self.octave_sum(|f| self.noise_3d(x * f, y * f, z * f))
    }

    /// Multi-octave 4D noise.
    ///
    /// A `w` of exactly zero is evaluated as [`fractal_3d`](Self::fractal_3d).
    #[must_use]
    #[allow(clippy::float_cmp, reason = "only a literal zero takes the 3D path")]
    pub fn fractal_4d(&self, x: f32, y: f32, z: f32, w: f32) -> f32 {
        if w == 0.0 {
            return self.fractal_3d(x, y, z);
        }
        self.octave_sum(|f| self.noise_4d(x * f, y * f, z * f, w * f))
    }
}

impl Default for PerlinNoise {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coords() -> impl Iterator<Item = f32> {
        (-40..40).map(|i| i as f32 * 0.731 + 0.1)
    }

    #[test]
    #[allow(clippy::float_cmp, reason = "lattice points are exactly zero")]
    fn test_zero_at_lattice_points() {
        let noise = PerlinNoise::with_seed(42);
        for n in -300..300 {
            let v = n as f32;
            assert_eq!(noise.noise_1d(v), 0.0, "noise_1d({v})");
            assert_eq!(noise.noise_2d(v, -v), 0.0);
            assert_eq!(noise.noise_3d(v, 3.0, v), 0.0);
            assert_eq!(noise.noise_4d(v, 1.0, -2.0, v), 0.0);
        }
    }

    #[test]
    fn test_deterministic_for_seed() {
        let a = PerlinNoise::with_seed(9001);
        let mut b = PerlinNoise::with_seed(1);
        b.reseed(9001);

        for x in coords() {
            let y = x * 0.5 - 3.0;
            assert_eq!(a.noise_1d(x).to_bits(), b.noise_1d(x).to_bits());
            assert_eq!(a.noise_2d(x, y).to_bits(), b.noise_2d(x, y).to_bits());
            assert_eq!(a.noise_3d(x, y, 1.7).to_bits(), b.noise_3d(x, y, 1.7).to_bits());
            assert_eq!(
                a.noise_4d(x, y, 1.7, -0.4).to_bits(),
                b.noise_4d(x, y, 1.7, -0.4).to_bits()
            );
        }
    }

    #[test]
    fn test_seeds_differ() {
        let a = PerlinNoise::with_seed(1);
        let b = PerlinNoise::with_seed(2);
        assert!(coords().any(|x| (a.noise_2d(x, 0.37) - b.noise_2d(x, 0.37)).abs() > 1e-4));
    }

    #[test]
    fn test_typical_range() {
        let noise = PerlinNoise::with_seed(3);
        for x in coords() {
            for y in coords().step_by(7) {
                assert!(noise.noise_2d(x, y).abs() <= 1.01);
                assert!(noise.noise_3d(x, y, x * 0.3).abs() <= 1.5);
            }
        }
    }

    #[test]
    fn test_spatial_variation() {
        let noise = PerlinNoise::with_seed(0);
        let values: Vec<f32> = coords().map(|x| noise.noise_3d(x, x * 0.7, 2.3)).collect();
        let min = values.iter().copied().fold(f32::INFINITY, f32::min);
        let max = values.iter().copied().fold(f32::NEG_INFINITY, f32::max);
        assert!(max - min > 0.1, "3D noise should vary over space");
    }

    #[test]
    fn test_negative_and_wrapped_cells() {
        let noise = PerlinNoise::with_seed(5);
        // Cells 256 apart hash identically.
        let v = noise.noise_2d(-3.25, 17.5);
        assert_eq!(v.to_bits(), noise.noise_2d(252.75, 17.5).to_bits());
    }

    #[test]
    #[allow(clippy::float_cmp, reason = "shortcut paths must match bit for bit")]
    fn test_dimensional_shortcuts() {
        let noise = PerlinNoise::with_seed(77);
        assert_eq!(noise.fractal_2d(1.5, 0.0), noise.fractal_1d(1.5));
        assert_eq!(noise.fractal_3d(1.5, 2.5, 0.0), noise.fractal_2d(1.5, 2.5));
        assert_eq!(noise.fractal_4d(1.5, 2.5, 3.5, 0.0), noise.fractal_3d(1.5, 2.5, 3.5));
        assert_eq!(noise.fractal_4d(1.5, 0.0, 0.0, 0.0), noise.fractal_1d(1.5));
    }

    #[test]
    fn test_fractal_sum_matches_octaves() {
        let noise = PerlinNoise::with_config(
            11,
            NoiseConfig {
                persistence: 0.5,
                frequency: 0.25,
                amplitude: 2.0,
                octaves: 3,
            },
        );
        let x = 5.3;
        let expected = 2.0 * (1.0 + noise.noise_1d(x * 0.25)) / 2.0
            + 1.0 * (1.0 + noise.noise_1d(x * 0.5)) / 2.0
            + 0.5 * (1.0 + noise.noise_1d(x)) / 2.0;
        assert!((noise.fractal_1d(x) - expected).abs() < 1e-6);
    }

    #[test]
    fn test_fractal_is_not_normalised() {
        let mut noise = PerlinNoise::with_seed(12);
        noise.set_amplitude(10.0);
        noise.set_persistence(1.0);
        noise.set_octaves(6);
        // Each octave contributes amplitude / 2 at a lattice-aligned coordinate.
        assert!((noise.fractal_1d(0.0) - 30.0).abs() < 1e-4);
        assert!(noise.fractal_2d(3.3, 1.9) > 1.0);
    }

    #[test]
    #[allow(clippy::float_cmp, reason = "an empty octave sum is exactly zero")]
    fn test_zero_octaves() {
        let mut noise = PerlinNoise::with_seed(4);
        noise.set_octaves(0);
        assert_eq!(noise.fractal_1d(2.2), 0.0);
        assert_eq!(noise.fractal_4d(2.2, 1.0, 1.0, 1.0), 0.0);
    }

    #[test]
    fn test_idempotent_queries() {
        let noise = PerlinNoise::with_seed(8);
        let first = noise.fractal_4d(0.3, 1.1, -2.7, 4.4);
        let second = noise.fractal_4d(0.3, 1.1, -2.7, 4.4);
        assert_eq!(first.to_bits(), second.to_bits());
    }

    #[test]
    fn test_accessors() {
        let mut noise = PerlinNoise::with_seed(0);
        assert_eq!(*noise.config(), NoiseConfig::default());
        noise.set_frequency(1.5);
        noise.config_mut().persistence = 0.25;
        assert!((noise.frequency() - 1.5).abs() < f32::EPSILON);
        assert!((noise.persistence() - 0.25).abs() < f32::EPSILON);
        assert!((noise.amplitude() - 1.0).abs() < f32::EPSILON);
        assert_eq!(noise.octaves(), 4);
    }

    #[test]
    fn test_clock_seeded_generators_work() {
        let noise = PerlinNoise::new();
        assert!(noise.fractal_3d(0.5, 0.5, 0.5).is_finite());
    }
}
