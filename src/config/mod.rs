pub mod atlas;
pub mod error;
pub mod world;

pub use atlas::AtlasConfig;
pub use error::ConfigError;
pub use world::WorldConfig;

use serde::{Deserialize, Serialize};

/// Everything a session needs at construction, loadable from TOML.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SessionConfig {
    #[serde(default)]
    pub world: WorldConfig,
    #[serde(default)]
    pub atlas: AtlasConfig,
}

impl SessionConfig {
    pub fn from_toml_str(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.world.validate()?;
        self.atlas.validate()?;
        Ok(())
    }
}
