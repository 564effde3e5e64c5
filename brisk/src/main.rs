//! Brisk command-line front end.
//!
//! Loads `brisk.json5` (or the path given as the first argument), logs how far
//! each fast approximation strays from the standard library, and prints an
//! ASCII preview of the configured fractal noise.

mod config;
mod preview;
mod report;

use std::env;
use std::path::PathBuf;
use std::process::ExitCode;

use brisk_math::{Trig, TrigTable};
use brisk_noise::PerlinNoise;
use tracing_subscriber::EnvFilter;

use crate::config::{BriskConfig, DEFAULT_PATH};
use crate::report::AccuracyReport;

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn main() -> ExitCode {
    init_logging();

    let path = env::args_os()
        .nth(1)
        .map_or_else(|| PathBuf::from(DEFAULT_PATH), PathBuf::from);
    let config = match BriskConfig::load_or_create(&path) {
        Ok(config) => config,
        Err(err) => {
            tracing::error!("Failed to load {}: {err}", path.display());
            return ExitCode::FAILURE;
        }
    };

    let trig = Trig::new(TrigTable::shared(), config.trig);
    tracing::info!("Trig lookup: {:?}", trig.config());
    AccuracyReport::measure(&trig).log();

    let noise = match config.seed {
        Some(seed) => PerlinNoise::with_config(seed, config.noise),
        None => {
            tracing::warn!("No seed configured, seeding from the clock");
            let mut noise = PerlinNoise::new();
            *noise.config_mut() = config.noise;
            noise
        }
    };
    tracing::info!(
        "Noise: {} octaves, frequency {}, persistence {}, amplitude {}",
        noise.octaves(),
        noise.frequency(),
        noise.persistence(),
        noise.amplitude()
    );

    print!("{}", preview::render(&noise, &config.preview));
    ExitCode::SUCCESS
}
