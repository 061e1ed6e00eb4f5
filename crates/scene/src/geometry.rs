use glam::Vec3;

pub const FACE_COUNT: usize = 6;
pub const TRIANGLE_COUNT: usize = FACE_COUNT * 2;

/// Unit cube corners, four per face so every face owns its vertices.
pub const VERTICES: [Vec3; 24] = [
    Vec3::new(0.5, -0.5, 0.5),
    Vec3::new(-0.5, -0.5, 0.5),
    Vec3::new(0.5, 0.5, 0.5),
    Vec3::new(-0.5, 0.5, 0.5),
    Vec3::new(0.5, 0.5, -0.5),
    Vec3::new(-0.5, 0.5, -0.5),
    Vec3::new(0.5, -0.5, -0.5),
    Vec3::new(-0.5, -0.5, -0.5),
    Vec3::new(0.5, 0.5, 0.5),
    Vec3::new(-0.5, 0.5, 0.5),
    Vec3::new(0.5, 0.5, -0.5),
    Vec3::new(-0.5, 0.5, -0.5),
    Vec3::new(0.5, -0.5, -0.5),
    Vec3::new(0.5, -0.5, 0.5),
    Vec3::new(-0.5, -0.5, 0.5),
    Vec3::new(-0.5, -0.5, -0.5),
    Vec3::new(-0.5, -0.5, 0.5),
    Vec3::new(-0.5, 0.5, 0.5),
    Vec3::new(-0.5, 0.5, -0.5),
    Vec3::new(-0.5, -0.5, -0.5),
    Vec3::new(0.5, -0.5, -0.5),
    Vec3::new(0.5, 0.5, -0.5),
    Vec3::new(0.5, 0.5, 0.5),
    Vec3::new(0.5, -0.5, 0.5),
];

#[rustfmt::skip]
pub const TRIANGLES: [u16; TRIANGLE_COUNT * 3] = [
    0, 2, 3,    0, 3, 1,    // z = +0.5
    8, 4, 5,    8, 5, 9,    // y = +0.5
    10, 6, 7,   10, 7, 11,  // z = -0.5
    12, 13, 14, 12, 14, 15, // y = -0.5
    16, 17, 18, 16, 18, 19, // x = -0.5
    20, 21, 22, 20, 22, 23, // x = +0.5
];

pub fn triangles() -> impl Iterator<Item = [u16; 3]> {
    TRIANGLES.chunks_exact(3).map(|t| [t[0], t[1], t[2]])
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    fn corner(index: u16) -> Vec3 {
        VERTICES[index as usize]
    }

    /// Axis and sign of the plane shared by every corner, if any.
    fn face_plane(corners: &[Vec3]) -> Option<(usize, i8)> {
        (0..3).find_map(|axis| {
            let value = corners[0][axis];
            corners
                .iter()
                .all(|c| c[axis] == value)
                .then_some((axis, if value > 0.0 { 1 } else { -1 }))
        })
    }

    #[test]
    fn index_list_shape() {
        assert_eq!(TRIANGLES.len(), 36);
        assert!(TRIANGLES.iter().all(|&i| (i as usize) < VERTICES.len()));
        assert_eq!(triangles().count(), TRIANGLE_COUNT);
    }

    #[test]
    fn every_vertex_is_a_cube_corner() {
        for v in VERTICES {
            assert_eq!(v.abs(), Vec3::splat(0.5));
        }
    }

    #[test]
    fn faces_are_pairs_sharing_a_diagonal() {
        let tris: Vec<[u16; 3]> = triangles().collect();
        let mut planes = HashSet::new();

        for pair in tris.chunks_exact(2) {
            let first: HashSet<u16> = pair[0].iter().copied().collect();
            let second: HashSet<u16> = pair[1].iter().copied().collect();

            let shared: Vec<u16> = first.intersection(&second).copied().collect();
            assert_eq!(shared.len(), 2, "triangles {pair:?} must share one edge");

            let delta = (corner(shared[0]) - corner(shared[1])).abs();
            let differing = (0..3).filter(|&axis| delta[axis] > 0.0).count();
            assert_eq!(differing, 2, "shared edge of {pair:?} is not a diagonal");

            let corners: Vec<Vec3> = first.union(&second).map(|&i| corner(i)).collect();
            assert_eq!(corners.len(), 4);
            let plane = face_plane(&corners).expect("face corners must be coplanar");
            assert!(planes.insert(plane), "face {plane:?} covered twice");
        }

        assert_eq!(planes.len(), FACE_COUNT);
    }
}
