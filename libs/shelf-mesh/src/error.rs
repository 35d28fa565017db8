//! # Mesh Errors
//!
//! Error types for tessellation and export.

use thiserror::Error;

/// Errors that can occur during mesh generation.
#[derive(Debug, Error)]
pub enum MeshError {
    /// Degenerate geometry
    #[error("Degenerate geometry: {message}")]
    DegenerateGeometry { message: String },

    /// Too many vertices
    #[error("Too many vertices: {count} (max: {max})")]
    TooManyVertices { count: usize, max: usize },

    /// Too many triangles
    #[error("Too many triangles: {count} (max: {max})")]
    TooManyTriangles { count: usize, max: usize },
}

impl MeshError {
    /// Creates a degenerate geometry error.
    pub fn degenerate(message: impl Into<String>) -> Self {
        Self::DegenerateGeometry {
            message: message.into(),
        }
    }
}

/// Errors surfaced by [`crate::export`].
#[derive(Debug, Error)]
pub enum ExportError {
    /// The scene had no primitives. `placeholder` is a valid, empty
    /// document in the requested format.
    #[error("Nothing to export: scene is empty")]
    NothingToExport { placeholder: Vec<u8> },

    /// A primitive failed to tessellate.
    #[error(transparent)]
    Mesh(#[from] MeshError),

    /// Writing the artifact failed.
    #[error("Failed to write mesh: {0}")]
    Io(#[from] std::io::Error),
}

impl ExportError {
    /// Returns true for the empty-scene condition.
    pub fn is_nothing_to_export(&self) -> bool {
        matches!(self, Self::NothingToExport { .. })
    }
}
