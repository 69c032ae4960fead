use std::mem::size_of;

use serde::{Deserialize, Serialize};

use crate::ConfigurationError;

#[derive(Deserialize, Serialize, Clone, Copy, Debug, PartialEq)]
#[serde(default)]
pub struct MapConfig {
    /// Number of columns in a generated height map.
    pub width: usize,
    /// Number of rows in a generated height map.
    pub height: usize,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            width: 256,
            height: 256,
        }
    }
}

impl MapConfig {
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        validate_dimensions(self.width, self.height)
    }
}

/// Largest cell count a map of `f64` values can allocate.
pub const MAX_CELLS: usize = isize::MAX as usize / size_of::<f64>();

pub fn validate_dimensions(width: usize, height: usize) -> Result<(), ConfigurationError> {
    if width == 0 || height == 0 {
        return Err(ConfigurationError::ZeroDimension { width, height });
    }
    match width.checked_mul(height) {
        Some(cells) if cells <= MAX_CELLS => Ok(()),
        _ => Err(ConfigurationError::TooManyCells { width, height }),
    }
}
