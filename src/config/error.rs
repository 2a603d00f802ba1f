use thiserror::Error;

/// Construction-time validation failures. These are fatal: a session is
/// never created with an invalid chunk size or atlas layout.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("chunk size must be positive, got {0}")]
    InvalidChunkSize(u32),

    #[error("atlas tile size must be positive, got {0} px")]
    InvalidTileSize(u32),

    #[error("atlas must be at least 1x1 tiles, got {0}x{1}")]
    InvalidAtlasDimensions(u32, u32),
}
