use std::num::NonZeroU32;

use derive_getters::Getters;
use scaled_config::{
    ConfigurationError, GeneratorConfiguration, NoiseConfig, map::validate_dimensions,
    noise::{validate_amplitude, validate_normalization, validate_octaves, validate_persistence},
};
use scaled_util::noise::perlin::{OctavePerlinNoiseSampler, PerlinNoiseSampler};

use super::{domain::check_coordinate_domain, height_map::HeightMap};

/// Generates fractal Perlin noise height maps of a fixed size.
///
/// Every generator samples the same canonical permutation table, so two generators with equal
/// settings produce identical maps. Sampling never mutates the generator, and a generator can be
/// shared between threads.
#[derive(Getters, Clone, Debug)]
pub struct Generator {
    #[getter(copy)]
    map_width: usize,
    #[getter(copy)]
    map_height: usize,
    #[getter(skip)]
    noise: OctavePerlinNoiseSampler<'static>,
}

impl Generator {
    /// Creates a generator for `width` x `height` maps with the default noise settings.
    ///
    /// Note the argument order: height comes first.
    pub fn new(height: usize, width: usize) -> Result<Self, ConfigurationError> {
        Self::with_noise(height, width, &NoiseConfig::default())
    }

    pub fn from_config(config: &GeneratorConfiguration) -> Result<Self, ConfigurationError> {
        Self::with_noise(config.map.height, config.map.width, &config.noise)
    }

    fn with_noise(
        height: usize,
        width: usize,
        noise: &NoiseConfig,
    ) -> Result<Self, ConfigurationError> {
        validate_dimensions(width, height)?;
        noise.validate()?;
        let octaves = validate_octaves(noise.octaves)?;

        Ok(Self {
            map_width: width,
            map_height: height,
            noise: OctavePerlinNoiseSampler::new(
                PerlinNoiseSampler::default(),
                octaves,
                noise.persistence,
                noise.amplitude,
            ),
        })
    }

    pub fn octaves(&self) -> NonZeroU32 {
        self.noise.octaves()
    }

    pub fn persistence(&self) -> f64 {
        self.noise.persistence()
    }

    pub fn amplitude(&self) -> f64 {
        self.noise.amplitude()
    }

    /// The sampler backing [`Self::perlin`].
    pub fn noise_sampler(&self) -> &OctavePerlinNoiseSampler<'static> {
        &self.noise
    }

    pub fn set_noise_octaves(&mut self, octaves: u32) -> Result<(), ConfigurationError> {
        let octaves = validate_octaves(octaves)?;
        validate_normalization(octaves, self.persistence(), self.amplitude())?;
        log::trace!("Noise octaves set to {}", octaves);
        self.noise.set_octaves(octaves);
        Ok(())
    }

    pub fn set_noise_persistence(&mut self, persistence: f64) -> Result<(), ConfigurationError> {
        validate_persistence(persistence)?;
        validate_normalization(self.octaves(), persistence, self.amplitude())?;
        log::trace!("Noise persistence set to {}", persistence);
        self.noise.set_persistence(persistence);
        Ok(())
    }

    /// Sets the amplitude of the first octave. Later octaves scale it down by the persistence.
    pub fn set_amplitude(&mut self, amplitude: f64) -> Result<(), ConfigurationError> {
        validate_amplitude(amplitude)?;
        validate_normalization(self.octaves(), self.persistence(), amplitude)?;
        log::trace!("Noise amplitude set to {}", amplitude);
        self.noise.set_amplitude(amplitude);
        Ok(())
    }

    /// Fractal noise at `(x, y)`, roughly within `[0, 1]`.
    ///
    /// Coordinates whose highest octave leaves the precise range of an `f64` still produce a
    /// value, but a warning is logged since the result no longer varies.
    pub fn perlin(&self, x: f64, y: f64) -> f64 {
        let top_frequency = 2f64.powi((self.octaves().get() - 1).min(1023) as i32);
        if let Err(warning) = check_coordinate_domain(x * top_frequency, y * top_frequency) {
            log::warn!("{}", warning);
        }
        self.noise.sample(x, y)
    }

    /// Samples one cell per map position, centred on the unit square starting at `(0.5, 0.5)`.
    pub fn generate_map(&self) -> HeightMap {
        let width = self.map_width;
        let height = self.map_height;
        log::debug!(
            "Generating {}x{} height map with {} octaves",
            width,
            height,
            self.octaves()
        );

        let map = HeightMap::from_fn(width, height, |i, j| {
            let nx = i as f64 / width as f64 + 0.5;
            let ny = j as f64 / height as f64 + 0.5;
            self.noise.sample(nx, ny)
        });

        log::debug!("Generated {}x{} height map", width, height);
        map
    }
}
