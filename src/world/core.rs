use glam::{IVec3, Vec3};
use log::{debug, info};
use rayon::prelude::*;
use std::collections::{HashMap, HashSet};

use crate::config::{AtlasConfig, ConfigError, WorldConfig};
use crate::mesh::{ChunkMesh, MeshExtractor};
use crate::raycast::{intersect_segment, RayHit};

use super::chunk_coord::ChunkCoord;
use super::store::ChunkStore;

/// Offsets probed after an edit: the edited voxel plus its six axis
/// neighbors. An edit on a chunk boundary changes face visibility in the
/// adjacent chunk even though no voxel there changed.
const EDIT_NEIGHBORHOOD: [IVec3; 7] = [
    IVec3::new(0, 0, 0),
    IVec3::new(-1, 0, 0),
    IVec3::new(1, 0, 0),
    IVec3::new(0, -1, 0),
    IVec3::new(0, 1, 0),
    IVec3::new(0, 0, -1),
    IVec3::new(0, 0, 1),
];

/// One editable voxel world: sparse storage plus the mesher that derives
/// surface geometry from it. Multiple worlds coexist independently; there
/// is no process-wide state.
pub struct VoxelWorld {
    store: ChunkStore,
    extractor: MeshExtractor,
}

impl VoxelWorld {
    /// Validates the configuration once; an invalid chunk size or atlas
    /// layout never produces a session.
    pub fn new(world: WorldConfig, atlas: AtlasConfig) -> Result<Self, ConfigError> {
        world.validate()?;
        atlas.validate()?;
        info!(
            "world session: chunk size {}, atlas {}x{} tiles of {} px",
            world.chunk_size, atlas.width_tiles, atlas.height_tiles, atlas.tile_size_px
        );
        Ok(Self {
            store: ChunkStore::new(world.chunk_size),
            extractor: MeshExtractor::new(atlas),
        })
    }

    pub fn store(&self) -> &ChunkStore {
        &self.store
    }

    pub fn get_voxel(&self, voxel: IVec3) -> u8 {
        self.store.get(voxel)
    }

    pub fn set_voxel(&mut self, voxel: IVec3, value: u8) {
        self.store.set(voxel, value)
    }

    /// Surface mesh of one chunk, rebuilt from current store state.
    pub fn generate_chunk_mesh(&self, coord: ChunkCoord) -> ChunkMesh {
        self.extractor.generate(&self.store, coord)
    }

    /// First occupied voxel along the segment, if any. Used by the input
    /// collaborator to turn a screen pick into an edit point.
    pub fn pick(&self, start: Vec3, end: Vec3) -> Option<RayHit> {
        intersect_segment(&self.store, start, end)
    }

    /// Writes one voxel at the enclosing integer coordinate of `point`
    /// (material 0 erases) and regenerates every chunk whose surface could
    /// have changed. Returns the rebuilt meshes keyed by chunk coordinate;
    /// the key set is exactly the set of affected chunks.
    ///
    /// Callers editing via a raycast hit should nudge the hit position by
    /// half a voxel along the hit normal first: outward (+0.5) to place
    /// against the face, inward (-0.5) to erase the hit voxel.
    pub fn apply_edit(&mut self, point: Vec3, material: u8) -> HashMap<ChunkCoord, ChunkMesh> {
        let voxel = point.floor().as_ivec3();
        self.store.set(voxel, material);

        let affected: HashSet<ChunkCoord> = EDIT_NEIGHBORHOOD
            .iter()
            .map(|offset| self.store.chunk_coord_of(voxel + *offset))
            .collect();

        debug!(
            "edit at {:?} (material {}): remeshing {} chunk(s)",
            voxel,
            material,
            affected.len()
        );

        affected
            .into_iter()
            .map(|coord| (coord, self.extractor.generate(&self.store, coord)))
            .collect()
    }

    /// Rebuilds the mesh of every allocated chunk. Distinct chunks are
    /// independent, so this runs them in parallel; the store is only read.
    pub fn remesh_all(&self) -> HashMap<ChunkCoord, ChunkMesh> {
        let coords: Vec<ChunkCoord> = self.store.coords().collect();
        coords
            .into_par_iter()
            .map(|coord| (coord, self.extractor.generate(&self.store, coord)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn world_with_chunk_size(chunk_size: u32) -> VoxelWorld {
        VoxelWorld::new(
            WorldConfig { chunk_size },
            AtlasConfig::default(),
        )
        .unwrap()
    }

    #[test]
    fn test_invalid_config_rejected() {
        let result = VoxelWorld::new(WorldConfig { chunk_size: 0 }, AtlasConfig::default());
        assert_eq!(result.err(), Some(ConfigError::InvalidChunkSize(0)));
    }

    #[test]
    fn test_interior_edit_affects_one_chunk() {
        let mut world = world_with_chunk_size(8);
        let meshes = world.apply_edit(Vec3::new(3.5, 3.5, 3.5), 1);
        assert_eq!(meshes.len(), 1);
        assert!(meshes.contains_key(&ChunkCoord::new(0, 0, 0)));
        assert_eq!(meshes[&ChunkCoord::new(0, 0, 0)].face_count(), 6);
        assert_eq!(world.get_voxel(IVec3::new(3, 3, 3)), 1);
    }

    #[test]
    fn test_boundary_edit_affects_both_chunks() {
        let mut world = world_with_chunk_size(8);
        // Voxel at local x = 0: the -x neighbor lives in chunk (-1,0,0).
        let meshes = world.apply_edit(Vec3::new(0.5, 3.5, 3.5), 2);
        assert_eq!(meshes.len(), 2);
        assert!(meshes.contains_key(&ChunkCoord::new(0, 0, 0)));
        assert!(meshes.contains_key(&ChunkCoord::new(-1, 0, 0)));
        // The edited chunk carries the cube; the neighbor stays empty.
        assert_eq!(meshes[&ChunkCoord::new(0, 0, 0)].face_count(), 6);
        assert!(meshes[&ChunkCoord::new(-1, 0, 0)].is_empty());
    }

    #[test]
    fn test_corner_edit_affects_four_chunks() {
        let mut world = world_with_chunk_size(8);
        // Local (0,0,0): three axis neighbors cross into distinct chunks.
        let meshes = world.apply_edit(Vec3::new(0.5, 0.5, 0.5), 1);
        assert_eq!(meshes.len(), 4);
    }

    #[test]
    fn test_erase_edit() {
        let mut world = world_with_chunk_size(8);
        world.apply_edit(Vec3::new(3.5, 3.5, 3.5), 1);
        let meshes = world.apply_edit(Vec3::new(3.5, 3.5, 3.5), 0);
        assert_eq!(world.get_voxel(IVec3::new(3, 3, 3)), 0);
        assert!(meshes[&ChunkCoord::new(0, 0, 0)].is_empty());
    }

    #[test]
    fn test_edit_unhides_neighbor_boundary_face() {
        let mut world = world_with_chunk_size(4);
        // Fill the voxel just across the boundary, then its neighbor in the
        // next chunk. Remeshing must suppress the now-shared face pair.
        world.apply_edit(Vec3::new(3.5, 0.5, 0.5), 1);
        let meshes = world.apply_edit(Vec3::new(4.5, 0.5, 0.5), 1);

        assert!(meshes.contains_key(&ChunkCoord::new(0, 0, 0)));
        assert!(meshes.contains_key(&ChunkCoord::new(1, 0, 0)));
        // 5 faces each: the shared pair is culled on both sides.
        assert_eq!(meshes[&ChunkCoord::new(0, 0, 0)].face_count(), 5);
        assert_eq!(meshes[&ChunkCoord::new(1, 0, 0)].face_count(), 5);
    }

    #[test]
    fn test_pick_then_edit_round_trip() {
        let mut world = world_with_chunk_size(8);
        world.set_voxel(IVec3::new(4, 0, 0), 3);

        let hit = world
            .pick(Vec3::new(0.5, 0.5, 0.5), Vec3::new(7.5, 0.5, 0.5))
            .expect("pick crosses the voxel");
        assert_eq!(hit.value, 3);

        // Place against the hit face: nudge outward by half a voxel.
        let place_point = hit.position + hit.normal.as_vec3() * 0.5;
        world.apply_edit(place_point, 5);
        assert_eq!(world.get_voxel(IVec3::new(3, 0, 0)), 5);

        // Erase the hit voxel: nudge inward.
        let erase_hit = world
            .pick(Vec3::new(0.5, 0.5, 0.5), Vec3::new(7.5, 0.5, 0.5))
            .unwrap();
        let erase_point = erase_hit.position - erase_hit.normal.as_vec3() * 0.5;
        world.apply_edit(erase_point, 0);
        assert_eq!(world.get_voxel(IVec3::new(3, 0, 0)), 0);
    }

    #[test]
    fn test_remesh_all_covers_allocated_chunks() {
        let mut world = world_with_chunk_size(4);
        world.set_voxel(IVec3::new(0, 0, 0), 1);
        world.set_voxel(IVec3::new(10, 0, 0), 1);

        let meshes = world.remesh_all();
        assert_eq!(meshes.len(), 2);
        assert!(meshes.values().all(|m| m.face_count() == 6));
    }
}
