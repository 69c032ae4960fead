use serde::{Deserialize, Serialize};
use thiserror::Error;

pub mod map;
pub mod noise;

pub use map::MapConfig;
pub use noise::NoiseConfig;

/// Everything needed to build a height map generator.
///
/// Loading this from disk is up to the host application; every field falls back to its default
/// when missing.
#[derive(Deserialize, Serialize, Clone, Copy, Debug, Default, PartialEq)]
#[serde(default)]
pub struct GeneratorConfiguration {
    pub map: MapConfig,
    pub noise: NoiseConfig,
}

impl GeneratorConfiguration {
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        self.map.validate()?;
        self.noise.validate()
    }
}

#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum ConfigurationError {
    #[error("Map dimensions must be at least 1x1, got {width}x{height}")]
    ZeroDimension { width: usize, height: usize },
    #[error("Map of {width}x{height} cells is too large to allocate")]
    TooManyCells { width: usize, height: usize },
    #[error("At least one noise octave is required")]
    ZeroOctaves,
    #[error("Noise persistence must be finite and non-negative, got {0}")]
    InvalidPersistence(f64),
    #[error("Noise amplitude must be finite and positive, got {0}")]
    InvalidAmplitude(f64),
    #[error(
        "Amplitude {amplitude} with persistence {persistence} over {octaves} octaves sums past the largest finite value"
    )]
    NonFiniteNormalization {
        octaves: u32,
        persistence: f64,
        amplitude: f64,
    },
}
