use anyhow::Result;
use glam::Vec3;
use log::{info, LevelFilter};
use noise::{NoiseFn, Perlin};
use simple_logger::SimpleLogger;

use voxelgrid::{SessionConfig, VoxelWorld};

const DEMO_CONFIG: &str = r#"
[world]
chunk_size = 32

[atlas]
tile_size_px = 16
width_tiles = 16
height_tiles = 4
"#;

const GRASS: u8 = 1;
const DIRT: u8 = 2;

fn main() -> Result<()> {
    SimpleLogger::new().with_level(LevelFilter::Debug).init()?;
    info!("Initializing demo world...");

    let config = SessionConfig::from_toml_str(DEMO_CONFIG)?;
    config.validate()?;
    let mut world = VoxelWorld::new(config.world, config.atlas)?;

    seed_terrain(&mut world, config.world.chunk_size as i32);
    info!("seeded {} chunk(s)", world.store().chunk_count());

    let meshes = world.remesh_all();
    let total_faces: usize = meshes.values().map(|m| m.face_count()).sum();
    let total_vertices: usize = meshes.values().map(|m| m.vertex_count()).sum();
    info!(
        "initial surface: {} chunk mesh(es), {} faces, {} vertices",
        meshes.len(),
        total_faces,
        total_vertices
    );

    // Simulate a click: cast straight down onto the terrain, place a voxel
    // against the hit face, then erase the one underneath it.
    let start = Vec3::new(10.5, 40.0, 10.5);
    let end = Vec3::new(10.5, -4.0, 10.5);
    if let Some(hit) = world.pick(start, end) {
        info!(
            "pick hit voxel {:?} (material {}) at {:?}, normal {:?}",
            hit.voxel, hit.value, hit.position, hit.normal
        );

        let place_point = hit.position + hit.normal.as_vec3() * 0.5;
        let regenerated = world.apply_edit(place_point, GRASS);
        info!("placed a voxel; {} chunk(s) remeshed", regenerated.len());

        let erase_point = hit.position - hit.normal.as_vec3() * 0.5;
        let regenerated = world.apply_edit(erase_point, 0);
        info!("erased a voxel; {} chunk(s) remeshed", regenerated.len());
    } else {
        info!("pick missed the terrain");
    }

    Ok(())
}

/// Seeds a small rolling-hills terrain. Generation stays out of the core;
/// this only exercises the edit path to build an initial world.
fn seed_terrain(world: &mut VoxelWorld, extent: i32) {
    let perlin = Perlin::new(42);
    for x in 0..extent {
        for z in 0..extent {
            let sample = perlin.get([x as f64 / 16.0, z as f64 / 16.0]);
            let height = ((sample * 0.5 + 0.5) * (extent as f64 / 2.0)) as i32 + 1;
            for y in 0..height {
                let material = if y == height - 1 { GRASS } else { DIRT };
                world.set_voxel(glam::IVec3::new(x, y, z), material);
            }
        }
    }
}
