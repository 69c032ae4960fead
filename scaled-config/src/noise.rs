use std::num::NonZeroU32;

use serde::{Deserialize, Serialize};

use crate::ConfigurationError;

#[derive(Deserialize, Serialize, Clone, Copy, Debug, PartialEq)]
#[serde(default)]
pub struct NoiseConfig {
    /// How many layers of noise are summed. Every layer doubles the frequency of the previous one.
    pub octaves: u32,
    /// Factor applied to the amplitude between two octaves.
    pub persistence: f64,
    /// Amplitude of the first octave.
    pub amplitude: f64,
}

impl Default for NoiseConfig {
    fn default() -> Self {
        Self {
            octaves: 4,
            persistence: 0.5,
            amplitude: 1.0,
        }
    }
}

impl NoiseConfig {
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        let octaves = validate_octaves(self.octaves)?;
        validate_persistence(self.persistence)?;
        validate_amplitude(self.amplitude)?;
        validate_normalization(octaves, self.persistence, self.amplitude)
    }
}

pub fn validate_octaves(octaves: u32) -> Result<NonZeroU32, ConfigurationError> {
    NonZeroU32::new(octaves).ok_or(ConfigurationError::ZeroOctaves)
}

pub fn validate_persistence(persistence: f64) -> Result<(), ConfigurationError> {
    if !persistence.is_finite() || persistence < 0.0 {
        return Err(ConfigurationError::InvalidPersistence(persistence));
    }
    if persistence > 1.0 {
        log::warn!(
            "Noise persistence {} is above 1, higher octaves will outweigh the base octave",
            persistence
        );
    }
    Ok(())
}

pub fn validate_amplitude(amplitude: f64) -> Result<(), ConfigurationError> {
    if !amplitude.is_finite() || amplitude <= 0.0 {
        return Err(ConfigurationError::InvalidAmplitude(amplitude));
    }
    Ok(())
}

/// Checks that the sum of every octave's amplitude, which divides each sample, stays finite.
pub fn validate_normalization(
    octaves: NonZeroU32,
    persistence: f64,
    amplitude: f64,
) -> Result<(), ConfigurationError> {
    let mut octave_amplitude = amplitude;
    let mut max_value = 0f64;
    for _ in 0..octaves.get() {
        max_value += octave_amplitude;
        if !max_value.is_finite() {
            return Err(ConfigurationError::NonFiniteNormalization {
                octaves: octaves.get(),
                persistence,
                amplitude,
            });
        }
        octave_amplitude *= persistence;
        if octave_amplitude == 0.0 {
            break;
        }
    }
    Ok(())
}
