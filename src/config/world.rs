use serde::{Deserialize, Serialize};

use super::error::ConfigError;

/// World layout parameters, fixed for the lifetime of a session.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct WorldConfig {
    /// Edge length of a cubic chunk in voxels.
    pub chunk_size: u32,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self { chunk_size: 32 }
    }
}

impl WorldConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.chunk_size == 0 {
            return Err(ConfigError::InvalidChunkSize(self.chunk_size));
        }
        Ok(())
    }
}
