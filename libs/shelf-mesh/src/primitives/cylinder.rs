//! # Cylinder Primitive
//!
//! Generates mesh for cylinder and frustum shapes along the Y axis.

use crate::error::MeshError;
use crate::mesh::Mesh;
use config::constants::MIN_SEGMENTS;
use glam::DVec3;
use std::f64::consts::TAU;

/// Creates a capped cylinder or frustum centred on the origin.
///
/// # Arguments
///
/// * `height` - Height along Y
/// * `radius_bottom` - Radius at y = -height/2
/// * `radius_top` - Radius at y = +height/2
/// * `segments` - Number of segments around circumference
///
/// # Example
///
/// ```rust
/// use shelf_mesh::primitives::create_cylinder;
///
/// let mesh = create_cylinder(10.0, 0.4, 0.4, 24).unwrap();
/// assert_eq!(mesh.vertex_count(), 48);
/// assert_eq!(mesh.triangle_count(), 4 * 24 - 4);
/// ```
pub fn create_cylinder(
    height: f64,
    radius_bottom: f64,
    radius_top: f64,
    segments: u32,
) -> Result<Mesh, MeshError> {
    if !(height > 0.0) {
        return Err(MeshError::degenerate(format!(
            "Cylinder height must be positive: {}",
            height
        )));
    }

    if !(radius_bottom > 0.0 && radius_top > 0.0) {
        return Err(MeshError::degenerate(format!(
            "Cylinder radii must be positive: r1={}, r2={}",
            radius_bottom, radius_top
        )));
    }

    if segments < MIN_SEGMENTS {
        return Err(MeshError::degenerate(format!(
            "Cylinder segments must be at least {}: {}",
            MIN_SEGMENTS, segments
        )));
    }

    let n = segments as usize;
    let mut mesh = Mesh::with_capacity(2 * n, 4 * n - 4);
    let half = height / 2.0;

    // Rings wind counter-clockwise seen from +Y.
    let ring = |mesh: &mut Mesh, radius: f64, y: f64| -> Vec<u32> {
        (0..segments)
            .map(|j| {
                let theta = TAU * j as f64 / segments as f64;
                mesh.add_vertex(DVec3::new(radius * theta.sin(), y, radius * theta.cos()))
            })
            .collect()
    };
    let bottom = ring(&mut mesh, radius_bottom, -half);
    let top = ring(&mut mesh, radius_top, half);

    for j in 0..n {
        let k = (j + 1) % n;
        mesh.add_quad(bottom[j], bottom[k], top[k], top[j]);
    }

    for j in 1..n - 1 {
        mesh.add_triangle(top[0], top[j], top[j + 1]);
        mesh.add_triangle(bottom[0], bottom[j + 1], bottom[j]);
    }

    Ok(mesh)
}
