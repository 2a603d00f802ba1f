pub mod config;
pub mod mesh;
pub mod raycast;
pub mod world;

// Re-export commonly used types
pub use config::{AtlasConfig, ConfigError, SessionConfig, WorldConfig};
pub use mesh::{ChunkMesh, MeshExtractor};
pub use raycast::{intersect_segment, RayHit};
pub use world::{Chunk, ChunkCoord, ChunkStore, VoxelWorld};
