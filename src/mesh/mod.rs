pub mod extractor;
pub mod face;

pub use extractor::{ChunkMesh, MeshExtractor};
pub use face::{Corner, FaceDescriptor, FACES};
