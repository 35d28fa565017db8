//! # Primitives
//!
//! Mesh generation for scene shapes. Every mesh is centred on its local
//! origin with cylinders along Y.

pub mod cuboid;
pub mod cylinder;
pub mod sphere;

pub use cuboid::create_box;
pub use cylinder::create_cylinder;
pub use sphere::create_sphere;

use shelf_geometry::Shape;

use crate::error::MeshError;
use crate::mesh::Mesh;

/// Tessellates a shape in its local frame.
pub fn tessellate(shape: &Shape) -> Result<Mesh, MeshError> {
    match *shape {
        Shape::Cylinder {
            radius_top,
            radius_bottom,
            height,
            segments,
        } => create_cylinder(height, radius_bottom, radius_top, segments),
        Shape::Box {
            width,
            height,
            depth,
        } => create_box(width, height, depth),
        Shape::Sphere { radius, segments } => create_sphere(radius, segments),
    }
}
