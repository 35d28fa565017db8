//! # Sphere Primitive
//!
//! Generates mesh for sphere shapes using latitude/longitude tessellation.

use crate::error::MeshError;
use crate::mesh::Mesh;
use config::constants::MIN_SEGMENTS;
use glam::DVec3;
use std::f64::consts::{PI, TAU};

/// Creates a sphere mesh centred on the origin.
///
/// # Algorithm
///
/// - num_rings = (segments + 1) / 2
/// - Ring `i` at polar angle phi = PI * (i + 0.5) / num_rings, measured from +Y
/// - No pole vertices; the first and last rings are closed with fans
///
/// # Example
///
/// ```rust
/// use shelf_mesh::primitives::create_sphere;
///
/// let mesh = create_sphere(1.0, 16).unwrap();
/// assert_eq!(mesh.vertex_count(), 8 * 16);
/// ```
pub fn create_sphere(radius: f64, segments: u32) -> Result<Mesh, MeshError> {
    if !(radius > 0.0) {
        return Err(MeshError::degenerate(format!(
            "Sphere radius must be positive: {}",
            radius
        )));
    }

    if segments < MIN_SEGMENTS {
        return Err(MeshError::degenerate(format!(
            "Sphere segments must be at least {}: {}",
            MIN_SEGMENTS, segments
        )));
    }

    let num_rings = (segments + 1) / 2;
    let n = segments as usize;
    let mut mesh = Mesh::new();

    let rings: Vec<Vec<u32>> = (0..num_rings)
        .map(|i| {
            let phi = PI * (i as f64 + 0.5) / num_rings as f64;
            let ring_radius = radius * phi.sin();
            let y = radius * phi.cos();

            (0..segments)
                .map(|j| {
                    let theta = TAU * j as f64 / segments as f64;
                    mesh.add_vertex(DVec3::new(
                        ring_radius * theta.sin(),
                        y,
                        ring_radius * theta.cos(),
                    ))
                })
                .collect()
        })
        .collect();

    // Top cap
    let first = &rings[0];
    for j in 1..n - 1 {
        mesh.add_triangle(first[0], first[j], first[j + 1]);
    }

    // Bands, upper ring `a` to lower ring `b`
    for pair in rings.windows(2) {
        let (a, b) = (&pair[0], &pair[1]);
        for j in 0..n {
            let k = (j + 1) % n;
            mesh.add_triangle(a[j], b[j], b[k]);
            mesh.add_triangle(a[j], b[k], a[k]);
        }
    }

    // Bottom cap
    let last = &rings[rings.len() - 1];
    for j in 1..n - 1 {
        mesh.add_triangle(last[0], last[j + 1], last[j]);
    }

    Ok(mesh)
}
