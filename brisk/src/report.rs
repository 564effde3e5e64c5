//! Accuracy of each approximation against the standard library.

use brisk_math::consts::TWO_PI;
use brisk_math::{Trig, atan2, pow, sqrt_f32};

const SAMPLES: u32 = 10_000;

/// Worst-case errors measured over fixed sample sweeps.
#[derive(Debug, Clone, Copy)]
pub struct AccuracyReport {
    /// Max absolute `sin` error over `[-2π, 2π]`.
    pub sin: f32,
    /// Max absolute `cos` error over `[-2π, 2π]`.
    pub cos: f32,
    /// Max relative error of `sqrt_f32(a)²` against `a` over `(0, 1e6]`.
    pub sqrt: f32,
    /// Max relative error of `pow(a, 1)` against `a` over `(0, 1000]`.
    pub pow: f32,
    /// Max absolute `atan2` error around the unit circle, in radians.
    pub atan2: f32,
}

impl AccuracyReport {
    /// Measure every approximation, using `trig` for sine and cosine.
    #[must_use]
    pub fn measure(trig: &Trig) -> Self {
        let sweep = |lo: f32, hi: f32| {
            (1..=SAMPLES).map(move |i| lo + (hi - lo) * i as f32 / SAMPLES as f32)
        };

        let sin = sweep(-TWO_PI, TWO_PI)
            .map(|a| (trig.sin(a) - a.sin()).abs())
            .fold(0.0, f32::max);
        let cos = sweep(-TWO_PI, TWO_PI)
            .map(|a| (trig.cos(a) - a.cos()).abs())
            .fold(0.0, f32::max);
        let sqrt = sweep(0.0, 1e6)
            .map(|a| {
                let r = sqrt_f32(a);
                ((r * r - a) / a).abs()
            })
            .fold(0.0, f32::max);
        let pow = sweep(0.0, 1000.0)
            .map(|a| ((pow(a, 1.0) - a) / a).abs())
            .fold(0.0, f32::max);
        let atan2 = sweep(-TWO_PI, TWO_PI)
            .map(|theta| {
                let (y, x) = theta.sin_cos();
                (atan2(y, x) - y.atan2(x)).abs()
            })
            .fold(0.0, f32::max);

        Self {
            sin,
            cos,
            sqrt,
            pow,
            atan2,
        }
    }

    /// Write the report to the log.
    pub fn log(&self) {
        tracing::info!("sin   max abs error: {:.6}", self.sin);
        tracing::info!("cos   max abs error: {:.6}", self.cos);
        tracing::info!("sqrt  max rel error: {:.3e}", self.sqrt);
        tracing::info!("pow   max rel error: {:.4}", self.pow);
        tracing::info!("atan2 max abs error: {:.5} rad", self.atan2);
    }
}
