use glam::IVec3;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::cmp::Ordering;

/// Coordinate of a chunk in the sparse chunk grid. One unit here spans
/// `chunk_size` world voxels along each axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChunkCoord(pub IVec3);

impl Serialize for ChunkCoord {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        (self.0.x, self.0.y, self.0.z).serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for ChunkCoord {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let (x, y, z) = <(i32, i32, i32)>::deserialize(deserializer)?;
        Ok(ChunkCoord(IVec3::new(x, y, z)))
    }
}

impl PartialOrd for ChunkCoord {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ChunkCoord {
    fn cmp(&self, other: &Self) -> Ordering {
        match self.0.x.cmp(&other.0.x) {
            Ordering::Equal => match self.0.y.cmp(&other.0.y) {
                Ordering::Equal => self.0.z.cmp(&other.0.z),
                ord => ord,
            },
            ord => ord,
        }
    }
}

impl ChunkCoord {
    pub fn new(x: i32, y: i32, z: i32) -> Self {
        Self(IVec3::new(x, y, z))
    }

    /// Chunk owning the given world voxel. Euclidean division keeps the
    /// mapping correct for negative coordinates: voxel x = -1 with
    /// chunk_size = 32 belongs to chunk -1, not chunk 0.
    pub fn from_voxel(voxel: IVec3, chunk_size: i32) -> Self {
        Self(IVec3::new(
            voxel.x.div_euclid(chunk_size),
            voxel.y.div_euclid(chunk_size),
            voxel.z.div_euclid(chunk_size),
        ))
    }

    /// Voxel offset inside the owning chunk, each component in [0, chunk_size).
    pub fn local_offset(voxel: IVec3, chunk_size: i32) -> IVec3 {
        IVec3::new(
            voxel.x.rem_euclid(chunk_size),
            voxel.y.rem_euclid(chunk_size),
            voxel.z.rem_euclid(chunk_size),
        )
    }

    /// World voxel coordinate of this chunk's (0,0,0) corner.
    pub fn base_voxel(&self, chunk_size: i32) -> IVec3 {
        self.0 * chunk_size
    }

    pub fn x(&self) -> i32 {
        self.0.x
    }

    pub fn y(&self) -> i32 {
        self.0.y
    }

    pub fn z(&self) -> i32 {
        self.0.z
    }
}

impl From<IVec3> for ChunkCoord {
    fn from(vec: IVec3) -> Self {
        Self(vec)
    }
}

impl From<ChunkCoord> for IVec3 {
    fn from(coord: ChunkCoord) -> Self {
        coord.0
    }
}
