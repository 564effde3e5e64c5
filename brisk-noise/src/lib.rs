//! Seedable multi-dimensional Perlin noise.
//!
//! - [`PerlinNoise`] - Classic gradient noise in 1–4 dimensions plus its
//!   multi-octave (fractal) form
//! - [`PermutationTable`] - Seeded 512-entry lattice hash table
//! - [`NoiseConfig`] - Persistence, frequency, amplitude and octave count
//! - [`gradient`] - Constant gradient directions per dimension
//!
//! Each generator owns its permutation table. Generators never share mutable
//! state, so separate instances can be sampled from separate threads freely.

mod config;
pub mod gradient;
mod perlin;
mod permutation;

pub use config::NoiseConfig;
pub use perlin::PerlinNoise;
pub use permutation::PermutationTable;
