use serde::{Deserialize, Serialize};

use super::error::ConfigError;

/// Texture atlas layout. The atlas is a single image of fixed-size square
/// tiles; a voxel value selects the column, the face direction selects the
/// row (row 0 = sides, row 1 = bottom, row 2 = top).
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct AtlasConfig {
    /// Tile edge length in pixels.
    pub tile_size_px: u32,
    /// Atlas width in tiles (one column per material).
    pub width_tiles: u32,
    /// Atlas height in tiles.
    pub height_tiles: u32,
}

impl Default for AtlasConfig {
    fn default() -> Self {
        Self {
            tile_size_px: 16,
            width_tiles: 16,
            height_tiles: 4,
        }
    }
}

impl AtlasConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.tile_size_px == 0 {
            return Err(ConfigError::InvalidTileSize(self.tile_size_px));
        }
        if self.width_tiles == 0 || self.height_tiles == 0 {
            return Err(ConfigError::InvalidAtlasDimensions(
                self.width_tiles,
                self.height_tiles,
            ));
        }
        Ok(())
    }

    /// Atlas width in pixels.
    pub fn width_px(&self) -> f32 {
        (self.width_tiles * self.tile_size_px) as f32
    }

    /// Atlas height in pixels.
    pub fn height_px(&self) -> f32 {
        (self.height_tiles * self.tile_size_px) as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(AtlasConfig::default().validate().is_ok());
    }

    #[test]
    fn test_zero_dimensions_rejected() {
        let config = AtlasConfig {
            tile_size_px: 0,
            ..AtlasConfig::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::InvalidTileSize(0)));

        let config = AtlasConfig {
            width_tiles: 0,
            ..AtlasConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::InvalidAtlasDimensions(0, 4))
        );
    }
}
