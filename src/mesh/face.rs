use glam::IVec3;

/// One corner of a face quad: where it sits on the unit cube and which
/// corner of the atlas tile it samples.
#[derive(Debug, Clone, Copy)]
pub struct Corner {
    pub offset: IVec3,
    pub uv: [u32; 2],
}

/// Geometry and texturing data for one of the six axis-aligned face
/// directions. The table below is the only per-direction knowledge in the
/// mesher; everything else is direction-agnostic.
#[derive(Debug, Clone, Copy)]
pub struct FaceDescriptor {
    /// Outward unit normal of the face.
    pub normal: IVec3,
    /// Atlas row: 0 = side faces, 1 = bottom, 2 = top.
    pub uv_row: u32,
    /// Quad corners in fixed winding order. Triangulated as
    /// (0,1,2) and (2,1,3), which keeps the front side facing `normal`.
    pub corners: [Corner; 4],
}

const fn corner(x: i32, y: i32, z: i32, u: u32, v: u32) -> Corner {
    Corner {
        offset: IVec3::new(x, y, z),
        uv: [u, v],
    }
}

pub const FACES: [FaceDescriptor; 6] = [
    // -X (left)
    FaceDescriptor {
        normal: IVec3::new(-1, 0, 0),
        uv_row: 0,
        corners: [
            corner(0, 1, 0, 0, 1),
            corner(0, 0, 0, 0, 0),
            corner(0, 1, 1, 1, 1),
            corner(0, 0, 1, 1, 0),
        ],
    },
    // +X (right)
    FaceDescriptor {
        normal: IVec3::new(1, 0, 0),
        uv_row: 0,
        corners: [
            corner(1, 1, 1, 0, 1),
            corner(1, 0, 1, 0, 0),
            corner(1, 1, 0, 1, 1),
            corner(1, 0, 0, 1, 0),
        ],
    },
    // -Y (bottom)
    FaceDescriptor {
        normal: IVec3::new(0, -1, 0),
        uv_row: 1,
        corners: [
            corner(1, 0, 1, 1, 0),
            corner(0, 0, 1, 0, 0),
            corner(1, 0, 0, 1, 1),
            corner(0, 0, 0, 0, 1),
        ],
    },
    // +Y (top)
    FaceDescriptor {
        normal: IVec3::new(0, 1, 0),
        uv_row: 2,
        corners: [
            corner(0, 1, 1, 1, 1),
            corner(1, 1, 1, 0, 1),
            corner(0, 1, 0, 1, 0),
            corner(1, 1, 0, 0, 0),
        ],
    },
    // -Z (back)
    FaceDescriptor {
        normal: IVec3::new(0, 0, -1),
        uv_row: 0,
        corners: [
            corner(1, 0, 0, 0, 0),
            corner(0, 0, 0, 1, 0),
            corner(1, 1, 0, 0, 1),
            corner(0, 1, 0, 1, 1),
        ],
    },
    // +Z (front)
    FaceDescriptor {
        normal: IVec3::new(0, 0, 1),
        uv_row: 0,
        corners: [
            corner(0, 0, 1, 0, 0),
            corner(1, 0, 1, 1, 0),
            corner(0, 1, 1, 0, 1),
            corner(1, 1, 1, 1, 1),
        ],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_covers_all_six_directions() {
        let mut sum = IVec3::ZERO;
        for face in &FACES {
            assert_eq!(face.normal.abs().to_array().iter().sum::<i32>(), 1);
            sum += face.normal;
        }
        assert_eq!(sum, IVec3::ZERO);
    }

    #[test]
    fn test_corners_lie_on_face_plane() {
        for face in &FACES {
            for corner in &face.corners {
                // Along the normal axis every corner sits on the exposed
                // side: offset 1 for positive directions, 0 for negative.
                let along = face.normal.to_array();
                let offset = corner.offset.to_array();
                for axis in 0..3 {
                    if along[axis] == 1 {
                        assert_eq!(offset[axis], 1);
                    } else if along[axis] == -1 {
                        assert_eq!(offset[axis], 0);
                    }
                }
            }
        }
    }

    #[test]
    fn test_rows_follow_atlas_convention() {
        let rows: Vec<u32> = FACES.iter().map(|f| f.uv_row).collect();
        assert_eq!(rows, vec![0, 0, 1, 2, 0, 0]);
    }
}
