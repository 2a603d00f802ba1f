use glam::{IVec3, Vec3};
use log::trace;

use crate::config::AtlasConfig;
use crate::world::{ChunkCoord, ChunkStore};

use super::face::{FaceDescriptor, FACES};

/// Triangle-mesh buffers for one chunk, laid out for direct upload:
/// positions and normals as xyz triples, uvs as pairs, indices as u32.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChunkMesh {
    pub positions: Vec<f32>,
    pub normals: Vec<f32>,
    pub uvs: Vec<f32>,
    pub indices: Vec<u32>,
}

impl ChunkMesh {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one quad: 4 vertices and 6 indices forming two triangles
    /// with the fixed pattern (i, i+1, i+2, i+2, i+1, i+3).
    fn add_face(&mut self, positions: &[Vec3; 4], normal: IVec3, uvs: &[[f32; 2]; 4]) {
        let base = (self.positions.len() / 3) as u32;

        for (pos, uv) in positions.iter().zip(uvs) {
            self.positions.extend(&[pos.x, pos.y, pos.z]);
            self.normals
                .extend(&[normal.x as f32, normal.y as f32, normal.z as f32]);
            self.uvs.extend(uv);
        }

        self.indices
            .extend(&[base, base + 1, base + 2, base + 2, base + 1, base + 3]);
    }

    pub fn vertex_count(&self) -> usize {
        self.positions.len() / 3
    }

    pub fn face_count(&self) -> usize {
        self.indices.len() / 6
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

/// Extracts the visible surface of a chunk: one quad per voxel face that
/// borders empty space. Neighbor lookups go through the store in world
/// coordinates, so faces on chunk boundaries are culled (or emitted)
/// correctly against adjacent chunks, allocated or not.
#[derive(Debug, Clone)]
pub struct MeshExtractor {
    atlas: AtlasConfig,
}

impl MeshExtractor {
    pub fn new(atlas: AtlasConfig) -> Self {
        Self { atlas }
    }

    /// Rebuilds the chunk's mesh from scratch. Pure read of store state:
    /// two calls without intervening writes produce identical buffers.
    pub fn generate(&self, store: &ChunkStore, coord: ChunkCoord) -> ChunkMesh {
        let mut mesh = ChunkMesh::new();
        let size = store.chunk_size();
        let base = coord.base_voxel(size);

        for y in 0..size {
            for z in 0..size {
                for x in 0..size {
                    let voxel = base + IVec3::new(x, y, z);
                    let value = store.get(voxel);
                    if value == 0 {
                        continue;
                    }
                    for face in &FACES {
                        if store.get(voxel + face.normal) == 0 {
                            self.emit_face(&mut mesh, voxel, value, face);
                        }
                    }
                }
            }
        }

        trace!(
            "meshed chunk {:?}: {} faces, {} vertices",
            coord,
            mesh.face_count(),
            mesh.vertex_count()
        );
        mesh
    }

    fn emit_face(&self, mesh: &mut ChunkMesh, voxel: IVec3, value: u8, face: &FaceDescriptor) {
        let origin = voxel.as_vec3();
        let column = (value - 1) as f32;
        let tile = self.atlas.tile_size_px as f32;

        let mut positions = [Vec3::ZERO; 4];
        let mut uvs = [[0.0f32; 2]; 4];
        for (i, corner) in face.corners.iter().enumerate() {
            positions[i] = origin + corner.offset.as_vec3();
            // Column from the material, row from the face direction. The
            // vertical coordinate is flipped so the texture origin sits at
            // the bottom-left.
            uvs[i] = [
                (column + corner.uv[0] as f32) * tile / self.atlas.width_px(),
                1.0 - (face.uv_row as f32 + 1.0 - corner.uv[1] as f32) * tile
                    / self.atlas.height_px(),
            ];
        }

        mesh.add_face(&positions, face.normal, &uvs);
    }
}
