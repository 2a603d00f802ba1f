//! Exact voxel-grid traversal of a bounded ray segment.
//!
//! Steps through every voxel the segment passes, in order, without missing
//! or revisiting cells (Amanatides & Woo, "A Fast Voxel Traversal Algorithm
//! for Ray Tracing").

use glam::{IVec3, Vec3};

use crate::world::ChunkStore;

/// First occupied voxel hit by a segment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayHit {
    /// Exact intersection point on the crossed face.
    pub position: Vec3,
    /// Normal of the face the ray entered through. Nonzero on exactly one
    /// axis, except when the segment starts inside an occupied voxel, in
    /// which case no face was crossed and the normal is zero.
    pub normal: IVec3,
    /// Integer coordinate of the hit voxel.
    pub voxel: IVec3,
    /// Stored voxel value (always nonzero).
    pub value: u8,
}

impl RayHit {
    /// The empty cell in front of the crossed face; the natural target for
    /// placing a new voxel against the hit one.
    pub fn adjacent_position(&self) -> IVec3 {
        self.voxel + self.normal
    }
}

/// Walks the segment from `start` to `end` and returns the first occupied
/// voxel, or `None` when the segment only crosses empty space. Zero-length
/// segments are an immediate no-hit.
pub fn intersect_segment(store: &ChunkStore, start: Vec3, end: Vec3) -> Option<RayHit> {
    let len = start.distance(end);
    if len == 0.0 {
        return None;
    }
    let dir = (end - start) / len;

    let mut voxel = start.floor().as_ivec3();

    // Per axis: which way we step, how far along the ray one voxel spans,
    // and the distance to the first grid plane. Axes the ray never moves
    // along get an infinite crossing distance and are never stepped.
    let mut step = IVec3::ZERO;
    let mut t_delta = [f32::INFINITY; 3];
    let mut t_max = [f32::INFINITY; 3];
    for axis in 0..3 {
        let d = dir[axis];
        if d > 0.0 {
            step[axis] = 1;
            t_delta[axis] = 1.0 / d;
            t_max[axis] = (voxel[axis] as f32 + 1.0 - start[axis]) / d;
        } else if d < 0.0 {
            step[axis] = -1;
            t_delta[axis] = -1.0 / d;
            t_max[axis] = (start[axis] - voxel[axis] as f32) / -d;
        }
    }

    let mut t = 0.0;
    let mut normal = IVec3::ZERO;
    while t <= len {
        let value = store.get(voxel);
        if value != 0 {
            return Some(RayHit {
                position: start + dir * t,
                normal,
                voxel,
                value,
            });
        }

        // Advance to the nearest pending grid crossing.
        let axis = if t_max[0] < t_max[1] {
            if t_max[0] < t_max[2] {
                0
            } else {
                2
            }
        } else if t_max[1] < t_max[2] {
            1
        } else {
            2
        };

        t = t_max[axis];
        t_max[axis] += t_delta[axis];
        voxel[axis] += step[axis];
        normal = IVec3::ZERO;
        normal[axis] = -step[axis];
    }

    None
}
