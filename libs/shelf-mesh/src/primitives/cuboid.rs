//! # Box Primitive
//!
//! Generates a centred box mesh.

use crate::error::MeshError;
use crate::mesh::Mesh;
use glam::DVec3;

/// Outward-facing quads over the corner indices below.
///
/// Corner `i` sits at `+x` when bit 0 is set, `+y` for bit 1, `+z` for bit 2.
const FACES: [[u32; 4]; 6] = [
    [1, 3, 7, 5], // +X
    [0, 4, 6, 2], // -X
    [2, 6, 7, 3], // +Y
    [0, 1, 5, 4], // -Y
    [4, 5, 7, 6], // +Z
    [0, 2, 3, 1], // -Z
];

/// Creates a box centred on the origin.
///
/// # Example
///
/// ```rust
/// use shelf_mesh::primitives::create_box;
///
/// let mesh = create_box(2.0, 4.0, 6.0).unwrap();
/// assert_eq!(mesh.vertex_count(), 8);
/// assert_eq!(mesh.triangle_count(), 12);
/// ```
pub fn create_box(width: f64, height: f64, depth: f64) -> Result<Mesh, MeshError> {
    if !(width > 0.0 && height > 0.0 && depth > 0.0) {
        return Err(MeshError::degenerate(format!(
            "Box dimensions must be positive: [{}, {}, {}]",
            width, height, depth
        )));
    }

    let half = DVec3::new(width, height, depth) / 2.0;
    let mut mesh = Mesh::with_capacity(8, 12);

    for i in 0..8u32 {
        mesh.add_vertex(DVec3::new(
            if i & 1 == 0 { -half.x } else { half.x },
            if i & 2 == 0 { -half.y } else { half.y },
            if i & 4 == 0 { -half.z } else { half.z },
        ));
    }

    for [a, b, c, d] in FACES {
        mesh.add_quad(a, b, c, d);
    }

    Ok(mesh)
}
