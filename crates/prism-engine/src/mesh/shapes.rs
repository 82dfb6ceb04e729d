use super::{Vertex2d, Vertex3dUv};

/// Unit quad.
///
/// ```txt
///  (0, 1)   (1, 1)
/// +--------+
/// |        |
/// |        |
/// +--------+
///  (0, 0)   (1, 0)
/// ```
pub const QUAD_VERTICES: [Vertex2d; 4] = [
    Vertex2d::new([0.0, 0.0]),
    Vertex2d::new([1.0, 0.0]),
    Vertex2d::new([0.0, 1.0]),
    Vertex2d::new([1.0, 1.0]),
];

pub const QUAD_INDICES: [u16; 6] = [0, 1, 3, 0, 2, 3];

/// Unit cube in `[0, 1]³` with independent UVs per face.
pub const CUBE_VERTICES: [Vertex3dUv; 24] = [
    // South (+Z)
    Vertex3dUv::new([0., 0., 1.], [0.0, 1.0]),
    Vertex3dUv::new([1., 0., 1.], [1.0, 1.0]),
    Vertex3dUv::new([1., 1., 1.], [1.0, 0.0]),
    Vertex3dUv::new([0., 1., 1.], [0.0, 0.0]),
    // North (-Z)
    Vertex3dUv::new([0., 0., 0.], [1.0, 1.0]),
    Vertex3dUv::new([0., 1., 0.], [1.0, 0.0]),
    Vertex3dUv::new([1., 1., 0.], [0.0, 0.0]),
    Vertex3dUv::new([1., 0., 0.], [0.0, 1.0]),
    // East (+X)
    Vertex3dUv::new([1., 0., 0.], [1.0, 1.0]),
    Vertex3dUv::new([1., 1., 0.], [1.0, 0.0]),
    Vertex3dUv::new([1., 1., 1.], [0.0, 0.0]),
    Vertex3dUv::new([1., 0., 1.], [0.0, 1.0]),
    // West (-X)
    Vertex3dUv::new([0., 1., 0.], [0.0, 0.0]),
    Vertex3dUv::new([0., 0., 0.], [0.0, 1.0]),
    Vertex3dUv::new([0., 0., 1.], [1.0, 1.0]),
    Vertex3dUv::new([0., 1., 1.], [1.0, 0.0]),
    // Up (+Y)
    Vertex3dUv::new([1., 1., 0.], [0.0, 1.0]),
    Vertex3dUv::new([0., 1., 0.], [1.0, 1.0]),
    Vertex3dUv::new([0., 1., 1.], [1.0, 0.0]),
    Vertex3dUv::new([1., 1., 1.], [0.0, 0.0]),
    // Down (-Y)
    Vertex3dUv::new([0., 0., 0.], [0.0, 1.0]),
    Vertex3dUv::new([1., 0., 0.], [1.0, 1.0]),
    Vertex3dUv::new([1., 0., 1.], [1.0, 0.0]),
    Vertex3dUv::new([0., 0., 1.], [0.0, 0.0]),
];

pub const CUBE_INDICES: [u32; 36] = [
    0, 1, 2, 2, 3, 0, // South (+Z)
    4, 5, 6, 6, 7, 4, // North (-Z)
    8, 9, 10, 10, 11, 8, // East (+X)
    12, 13, 14, 14, 15, 12, // West (-X)
    16, 17, 18, 18, 19, 16, // Up (+Y)
    20, 21, 22, 22, 23, 20, // Down (-Y)
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indices_are_in_bounds() {
        assert!(QUAD_INDICES.iter().all(|&i| (i as usize) < QUAD_VERTICES.len()));
        assert!(CUBE_INDICES.iter().all(|&i| (i as usize) < CUBE_VERTICES.len()));
    }

    #[test]
    fn cube_faces_stay_in_unit_cube() {
        for v in CUBE_VERTICES {
            assert!(v.position.iter().all(|c| (0.0..=1.0).contains(c)));
            assert!(v.uv.iter().all(|c| (0.0..=1.0).contains(c)));
        }
    }
}
