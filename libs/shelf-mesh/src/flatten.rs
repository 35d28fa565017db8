//! # Scene Flattening
//!
//! Tessellates every primitive, moves it into world space and merges the
//! result into one mesh.

use config::constants::{MAX_TRIANGLES, MAX_VERTICES};
use shelf_geometry::SceneGraph;
use tracing::debug;

use crate::error::MeshError;
use crate::mesh::Mesh;
use crate::primitives::tessellate;

/// Builds a single world-space mesh from `scene`.
///
/// Primitives are processed in scene order, so identical scenes give
/// identical meshes.
///
/// # Errors
///
/// Returns [`MeshError`] when a primitive is degenerate or the merged mesh
/// exceeds the vertex or triangle limits.
pub fn scene_to_mesh(scene: &SceneGraph) -> Result<Mesh, MeshError> {
    let mut mesh = Mesh::new();

    for primitive in scene {
        let mut part = tessellate(&primitive.shape)?;
        part.transform(&primitive.transform());

        let vertices = mesh.vertex_count() + part.vertex_count();
        if vertices > MAX_VERTICES {
            return Err(MeshError::TooManyVertices {
                count: vertices,
                max: MAX_VERTICES,
            });
        }
        let triangles = mesh.triangle_count() + part.triangle_count();
        if triangles > MAX_TRIANGLES {
            return Err(MeshError::TooManyTriangles {
                count: triangles,
                max: MAX_TRIANGLES,
            });
        }

        mesh.merge(&part);
    }

    debug!(
        primitives = scene.len(),
        vertices = mesh.vertex_count(),
        triangles = mesh.triangle_count(),
        "scene flattened"
    );
    Ok(mesh)
}
