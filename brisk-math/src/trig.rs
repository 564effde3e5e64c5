//! Lookup-table sine and cosine.
//!
//! A [`TrigTable`] holds 4096 samples of one full turn for each function. It is
//! built once, never mutated, and shared between engines through an [`Arc`].
//! A [`Trig`] engine pairs a table with a [`TrigConfig`] that decides how each
//! call reads it: straight from the reference implementation, nearest sample,
//! or linear interpolation between neighbouring samples.

use std::sync::Arc;

use serde::Deserialize;

use crate::consts::TWO_PI;
use crate::math::floor;

const TABLE_SIZE_BITS: u32 = 12;
/// Number of samples per turn. Always a power of two.
pub const TABLE_SIZE: usize = 1 << TABLE_SIZE_BITS;
const TABLE_SIZE_MASK: i32 = TABLE_SIZE as i32 - 1;
/// Table indices per radian, `TABLE_SIZE / 2π`.
pub const CONVERSION_FACTOR: f32 = TABLE_SIZE as f32 / TWO_PI;

/// How interpolated lookups weight the two neighbouring samples.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LerpWeight {
    /// Weight by the angle's fractional position between the two samples.
    #[default]
    Fractional,
    /// Weight by the raw input angle in radians.
    ///
    /// Kept for output parity with older data. The error grows with `|angle|`
    /// and the result is only close to the true value for small angles.
    RawAngle,
}

/// Per-engine lookup behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TrigConfig {
    /// Read from the table. When `false`, every call goes to the reference
    /// implementation.
    pub lut_enabled: bool,
    /// Interpolate between neighbouring samples instead of taking the nearest
    /// lower one.
    pub lut_interpolate: bool,
    /// Interpolation weighting, only used when `lut_interpolate` is set.
    pub weight: LerpWeight,
}

impl Default for TrigConfig {
    fn default() -> Self {
        Self {
            lut_enabled: true,
            lut_interpolate: true,
            weight: LerpWeight::Fractional,
        }
    }
}

/// Precomputed sine and cosine samples over `[0, 2π)`.
///
/// `sin[i] ≈ sin(i · 2π / TABLE_SIZE)`, likewise for `cos`.
#[derive(Debug)]
pub struct TrigTable {
    sin: Box<[f32]>,
    cos: Box<[f32]>,
}

impl TrigTable {
    /// Build both tables. Samples are evaluated in double precision and then
    /// narrowed to `f32`.
    #[must_use]
    pub fn new() -> Self {
        let angle = |i: usize| f64::from(i as f32 / CONVERSION_FACTOR);
        let sin = (0..TABLE_SIZE).map(|i| angle(i).sin() as f32).collect();
        let cos = (0..TABLE_SIZE).map(|i| angle(i).cos() as f32).collect();
        tracing::debug!(size = TABLE_SIZE, "built trig lookup table");
        Self { sin, cos }
    }

    /// Build a table ready to be shared between engines.
    #[must_use]
    pub fn shared() -> Arc<Self> {
        Arc::new(Self::new())
    }

    /// Raw sine samples.
    #[must_use]
    pub fn sin_samples(&self) -> &[f32] {
        &self.sin
    }

    /// Raw cosine samples.
    #[must_use]
    pub fn cos_samples(&self) -> &[f32] {
        &self.cos
    }

    /// Sine of `angle` (radians) read according to `config`.
    #[inline]
    #[must_use]
    pub fn sin(&self, angle: f32, config: TrigConfig) -> f32 {
        if config.lut_enabled {
            Self::lookup(&self.sin, angle, config)
        } else {
            f64::from(angle).sin() as f32
        }
    }

    /// Cosine of `angle` (radians) read according to `config`.
    #[inline]
    #[must_use]
    pub fn cos(&self, angle: f32, config: TrigConfig) -> f32 {
        if config.lut_enabled {
            Self::lookup(&self.cos, angle, config)
        } else {
            f64::from(angle).cos() as f32
        }
    }

    #[inline]
    fn lookup(samples: &[f32], angle: f32, config: TrigConfig) -> f32 {
        let scaled = angle * CONVERSION_FACTOR;
        let lattice = floor(scaled);
        let index = (lattice & TABLE_SIZE_MASK) as usize;
        if !config.lut_interpolate {
            return samples[index];
        }

        let next = (index + 1) & TABLE_SIZE_MASK as usize;
        let t = match config.weight {
            LerpWeight::Fractional => scaled - lattice as f32,
            LerpWeight::RawAngle => angle,
        };
        (1.0 - t) * samples[index] + t * samples[next]
    }
}

impl Default for TrigTable {
    fn default() -> Self {
        Self::new()
    }
}

/// Sine/cosine engine: a shared table plus its own lookup configuration.
///
/// Engines with different configurations can share one table and be used from
/// different threads at once; nothing here is global.
#[derive(Debug, Clone)]
pub struct Trig {
    table: Arc<TrigTable>,
    config: TrigConfig,
}

impl Trig {
    /// Create an engine reading `table` with `config`.
    #[must_use]
    pub const fn new(table: Arc<TrigTable>, config: TrigConfig) -> Self {
        Self { table, config }
    }

    /// Create an engine reading `table` with the default configuration.
    #[must_use]
    pub fn with_table(table: Arc<TrigTable>) -> Self {
        Self::new(table, TrigConfig::default())
    }

    /// The lookup configuration.
    #[must_use]
    pub const fn config(&self) -> TrigConfig {
        self.config
    }

    /// Replace the lookup configuration.
    pub const fn set_config(&mut self, config: TrigConfig) {
        self.config = config;
    }

    /// The shared table.
    #[must_use]
    pub const fn table(&self) -> &Arc<TrigTable> {
        &self.table
    }

    /// Approximate sine of `angle` in radians.
    #[inline]
    #[must_use]
    pub fn sin(&self, angle: f32) -> f32 {
        self.table.sin(angle, self.config)
    }

    /// Approximate cosine of `angle` in radians.
    #[inline]
    #[must_use]
    pub fn cos(&self, angle: f32) -> f32 {
        self.table.cos(angle, self.config)
    }
}

impl Default for Trig {
    fn default() -> Self {
        Self::with_table(TrigTable::shared())
    }
}
