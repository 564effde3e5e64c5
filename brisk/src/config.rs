//! `brisk.json5` loading.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use brisk_math::TrigConfig;
use brisk_noise::NoiseConfig;
use serde::Deserialize;
use thiserror::Error;

/// Config file used when no path is given on the command line.
pub const DEFAULT_PATH: &str = "brisk.json5";

/// Written to disk when the config file does not exist yet.
const DEFAULT_CONFIG: &str = r#"{
  // Noise seed. Leave out to seed from the clock.
  // seed: 42,

  trig: {
    lut_enabled: true,
    lut_interpolate: true,
    // "fractional" or "raw_angle"
    weight: "fractional",
  },

  noise: {
    persistence: 0.5,
    frequency: 0.25,
    amplitude: 1.0,
    octaves: 4,
  },

  preview: {
    width: 64,
    height: 24,
    // World units per character cell.
    scale: 0.5,
  },
}
"#;

/// An error that can occur while loading the configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The config file could not be read or created.
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        /// File being accessed.
        path: PathBuf,
        /// Underlying error.
        source: io::Error,
    },
    /// The config file is not valid JSON5 for this schema.
    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_json5::Error),
    /// The config parsed but holds unusable values.
    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// Largest accepted preview width or height, in character cells.
pub const MAX_PREVIEW_SIDE: u32 = 4096;
/// Largest accepted preview area, in character cells.
pub const MAX_PREVIEW_CELLS: u32 = 1 << 20;

/// Size and sampling scale of the ASCII noise preview.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct PreviewConfig {
    /// Characters per row.
    pub width: u32,
    /// Number of rows.
    pub height: u32,
    /// World units per character cell.
    pub scale: f32,
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            width: 64,
            height: 24,
            scale: 0.5,
        }
    }
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct BriskConfig {
    /// Noise seed; `None` seeds from the clock.
    pub seed: Option<i64>,
    /// Trig lookup behavior.
    pub trig: TrigConfig,
    /// Fractal noise octave settings.
    pub noise: NoiseConfig,
    /// ASCII preview settings.
    pub preview: PreviewConfig,
}

impl BriskConfig {
    /// Parse and validate a config from JSON5 text.
    pub fn parse(text: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json5::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Load the config at `path`, writing the default file first if it is missing.
    pub fn load_or_create(path: &Path) -> Result<Self, ConfigError> {
        let io_error = |source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        };

        if !path.exists() {
            fs::write(path, DEFAULT_CONFIG).map_err(io_error)?;
            tracing::info!("Created default config at {}", path.display());
        }

        let text = fs::read_to_string(path).map_err(io_error)?;
        Self::parse(&text)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let PreviewConfig { width, height, .. } = self.preview;
        if width == 0 || height == 0 {
            return Err(ConfigError::Invalid(format!(
                "preview size must be non-zero, got {width}x{height}"
            )));
        }
        if width > MAX_PREVIEW_SIDE || height > MAX_PREVIEW_SIDE {
            return Err(ConfigError::Invalid(format!(
                "preview sides must be at most {MAX_PREVIEW_SIDE}, got {width}x{height}"
            )));
        }
        if width.checked_mul(height).is_none_or(|cells| cells > MAX_PREVIEW_CELLS) {
            return Err(ConfigError::Invalid(format!(
                "preview area must be at most {MAX_PREVIEW_CELLS} cells, got {width}x{height}"
            )));
        }
        if !self.preview.scale.is_finite() {
            return Err(ConfigError::Invalid(format!(
                "preview scale must be finite, got {}",
                self.preview.scale
            )));
        }
        Ok(())
    }
}
