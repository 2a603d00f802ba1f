pub mod chunk;
pub mod chunk_coord;
pub mod core;
pub mod store;

pub use chunk::Chunk;
pub use chunk_coord::ChunkCoord;
pub use core::VoxelWorld;
pub use store::ChunkStore;
