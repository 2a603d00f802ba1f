use glam::IVec3;

/// A dense cubic block of voxel values. The backing array always holds
/// exactly `size^3` entries and is never resized; 0 marks an empty cell.
#[derive(Debug, Clone)]
pub struct Chunk {
    size: usize,
    voxels: Vec<u8>,
}

impl Chunk {
    /// Creates an all-empty chunk with the given edge length.
    pub fn empty(size: u32) -> Self {
        let size = size as usize;
        Self {
            size,
            voxels: vec![0; size * size * size],
        }
    }

    fn index(&self, local: IVec3) -> usize {
        let (x, y, z) = (local.x as usize, local.y as usize, local.z as usize);
        debug_assert!(x < self.size && y < self.size && z < self.size);
        y * self.size * self.size + z * self.size + x
    }

    /// Reads a voxel at chunk-local coordinates in [0, size).
    pub fn get(&self, local: IVec3) -> u8 {
        self.voxels[self.index(local)]
    }

    /// Writes a voxel at chunk-local coordinates in [0, size).
    pub fn set(&mut self, local: IVec3, value: u8) {
        let index = self.index(local);
        self.voxels[index] = value;
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// True when every voxel is 0.
    pub fn is_empty(&self) -> bool {
        self.voxels.iter().all(|&v| v == 0)
    }
}
