mod generation;

pub use generation::domain::{
    MAX_PRECISE_COORDINATE, NumericDomainWarning, check_coordinate_domain,
};
pub use generation::generator::Generator;
pub use generation::height_map::HeightMap;
pub use scaled_config::{ConfigurationError, GeneratorConfiguration, MapConfig, NoiseConfig};

// Re-exported so benches and downstream crates can sample without naming `scaled-util`.
pub use scaled_util::noise::perlin::{OctavePerlinNoiseSampler, PERMUTATION, PerlinNoiseSampler};
