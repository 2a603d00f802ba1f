use glam::IVec3;
use log::trace;
use std::collections::HashMap;

use super::chunk::Chunk;
use super::chunk_coord::ChunkCoord;

/// Sparse world voxel storage: a map from chunk coordinate to a dense
/// fixed-size block. Chunks are allocated lazily on first write and kept
/// for the lifetime of the session.
#[derive(Debug)]
pub struct ChunkStore {
    chunk_size: i32,
    chunks: HashMap<ChunkCoord, Chunk>,
}

impl ChunkStore {
    pub fn new(chunk_size: u32) -> Self {
        Self {
            chunk_size: chunk_size as i32,
            chunks: HashMap::new(),
        }
    }

    pub fn chunk_size(&self) -> i32 {
        self.chunk_size
    }

    /// Chunk owning the given world voxel.
    pub fn chunk_coord_of(&self, voxel: IVec3) -> ChunkCoord {
        ChunkCoord::from_voxel(voxel, self.chunk_size)
    }

    /// Offset of the voxel inside its owning chunk.
    pub fn local_offset_of(&self, voxel: IVec3) -> IVec3 {
        ChunkCoord::local_offset(voxel, self.chunk_size)
    }

    /// Reads the voxel at a world coordinate. Unallocated chunks read as
    /// empty; this never fails and never allocates.
    pub fn get(&self, voxel: IVec3) -> u8 {
        let coord = self.chunk_coord_of(voxel);
        match self.chunks.get(&coord) {
            Some(chunk) => chunk.get(self.local_offset_of(voxel)),
            None => 0,
        }
    }

    /// Writes one voxel at a world coordinate, allocating the owning chunk
    /// on first touch. Mesh regeneration is the caller's concern.
    pub fn set(&mut self, voxel: IVec3, value: u8) {
        let coord = self.chunk_coord_of(voxel);
        let local = self.local_offset_of(voxel);
        let chunk_size = self.chunk_size as u32;
        let chunk = self.chunks.entry(coord).or_insert_with(|| {
            trace!("allocating chunk at {:?}", coord);
            Chunk::empty(chunk_size)
        });
        chunk.set(local, value);
    }

    /// Borrow the chunk at a coordinate, if it has been allocated.
    pub fn chunk(&self, coord: ChunkCoord) -> Option<&Chunk> {
        self.chunks.get(&coord)
    }

    /// Coordinates of every allocated chunk.
    pub fn coords(&self) -> impl Iterator<Item = ChunkCoord> + '_ {
        self.chunks.keys().copied()
    }

    pub fn chunk_count(&self) -> usize {
        self.chunks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chunks.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unwritten_reads_empty() {
        let store = ChunkStore::new(32);
        assert_eq!(store.get(IVec3::new(0, 0, 0)), 0);
        assert_eq!(store.get(IVec3::new(-1000, 512, 77)), 0);
        assert!(store.is_empty());
        assert_eq!(store.chunk_count(), 0);
    }

    #[test]
    fn test_set_then_get() {
        let mut store = ChunkStore::new(32);
        store.set(IVec3::new(5, 6, 7), 3);
        assert_eq!(store.get(IVec3::new(5, 6, 7)), 3);
        assert_eq!(store.chunk_count(), 1);

        let coord = store.chunk_coord_of(IVec3::new(5, 6, 7));
        let chunk = store.chunk(coord).expect("chunk was allocated");
        assert_eq!(chunk.get(IVec3::new(5, 6, 7)), 3);
        assert!(store.chunk(ChunkCoord::new(9, 9, 9)).is_none());

        // Overwrite, including erasing with 0. The chunk stays allocated.
        store.set(IVec3::new(5, 6, 7), 0);
        assert_eq!(store.get(IVec3::new(5, 6, 7)), 0);
        assert_eq!(store.chunk_count(), 1);
    }

    #[test]
    fn test_negative_world_coordinates() {
        let mut store = ChunkStore::new(32);
        store.set(IVec3::new(-1, -1, -1), 9);
        assert_eq!(store.get(IVec3::new(-1, -1, -1)), 9);
        assert_eq!(store.chunk_coord_of(IVec3::new(-1, -1, -1)), ChunkCoord::new(-1, -1, -1));
        assert_eq!(store.local_offset_of(IVec3::new(-1, -1, -1)), IVec3::new(31, 31, 31));
        // The voxel one step over lives in a different chunk.
        assert_eq!(store.get(IVec3::new(0, -1, -1)), 0);
    }

    #[test]
    fn test_writes_in_distinct_chunks_allocate_separately() {
        let mut store = ChunkStore::new(4);
        store.set(IVec3::new(0, 0, 0), 1);
        store.set(IVec3::new(4, 0, 0), 1);
        store.set(IVec3::new(-1, 0, 0), 1);
        assert_eq!(store.chunk_count(), 3);
    }
}
