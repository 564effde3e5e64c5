//! Octave parameters for fractal noise.

use serde::Deserialize;

/// Parameters of the multi-octave sum.
///
/// No field is validated. Zero octaves yields `0.0`; a negative persistence
/// alternates the sign of successive octaves.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct NoiseConfig {
    /// Amplitude multiplier applied after each octave.
    pub persistence: f32,
    /// Sampling frequency of the first octave. Doubles after each octave.
    pub frequency: f32,
    /// Amplitude of the first octave.
    pub amplitude: f32,
    /// Number of octaves summed.
    pub octaves: u32,
}

impl NoiseConfig {
    /// Default persistence.
    pub const DEFAULT_PERSISTENCE: f32 = 0.5;
    /// Default first-octave frequency.
    pub const DEFAULT_FREQUENCY: f32 = 0.25;
    /// Default first-octave amplitude.
    pub const DEFAULT_AMPLITUDE: f32 = 1.0;
    /// Default octave count.
    pub const DEFAULT_OCTAVES: u32 = 4;

    /// Sum of the amplitudes of all octaves.
    ///
    /// Fractal samples are not divided by this; callers that want output in
    /// `[0, 1]` can divide themselves.
    #[must_use]
    pub fn total_amplitude(&self) -> f32 {
        let mut amplitude = self.amplitude;
        let mut total = 0.0;
        for _ in 0..self.octaves {
            total += amplitude;
            amplitude *= self.persistence;
        }
        total
    }
}

impl Default for NoiseConfig {
    fn default() -> Self {
        Self {
            persistence: Self::DEFAULT_PERSISTENCE,
            frequency: Self::DEFAULT_FREQUENCY,
            amplitude: Self::DEFAULT_AMPLITUDE,
            octaves: Self::DEFAULT_OCTAVES,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_amplitude() {
        let config = NoiseConfig::default();
        assert!((config.total_amplitude() - 1.875).abs() < f32::EPSILON);

        let silent = NoiseConfig {
            octaves: 0,
            ..NoiseConfig::default()
        };
        assert!(silent.total_amplitude().abs() < f32::EPSILON);
    }
}
