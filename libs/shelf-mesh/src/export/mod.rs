//! # Export
//!
//! Scene to interchange-format bytes.
//!
//! ```text
//! SceneGraph → scene_to_mesh → Mesh → STL (binary | ASCII) / OBJ
//! ```

pub mod obj;
pub mod stl;

use std::path::Path;

use shelf_geometry::SceneGraph;
use shelf_params::ShelfParameters;
use tracing::{debug, warn};

use crate::error::{ExportError, MeshError};
use crate::flatten::scene_to_mesh;
use crate::mesh::Mesh;

/// Default solid name written into STL headers.
pub const DEFAULT_SOLID_NAME: &str = "wire_shelf";

/// STL encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StlFormat {
    #[default]
    Binary,
    Ascii,
}

/// Options for [`export`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportOptions {
    pub format: StlFormat,
    /// Written after `solid` in ASCII output and into the binary header.
    pub solid_name: String,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            format: StlFormat::Binary,
            solid_name: DEFAULT_SOLID_NAME.to_string(),
        }
    }
}

impl ExportOptions {
    pub fn ascii() -> Self {
        Self {
            format: StlFormat::Ascii,
            ..Self::default()
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.solid_name = name.into();
        self
    }
}

/// An encoded mesh document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MeshBytes {
    pub bytes: Vec<u8>,
    pub triangle_count: usize,
    pub format: StlFormat,
}

impl MeshBytes {
    /// Writes the document to `path`.
    pub fn write_to_path(&self, path: impl AsRef<Path>) -> Result<(), ExportError> {
        std::fs::write(path, &self.bytes)?;
        Ok(())
    }
}

/// Triangulates `scene` in world space and encodes it as STL.
///
/// # Errors
///
/// - [`ExportError::NothingToExport`] for an empty scene; `placeholder`
///   holds a valid zero-facet document in the requested format.
/// - [`ExportError::Mesh`] when a primitive cannot be tessellated.
///
/// # Example
///
/// ```rust
/// use shelf_geometry::build;
/// use shelf_mesh::{export, ExportOptions};
/// use shelf_params::ShelfParameters;
///
/// let scene = build(&ShelfParameters::new(36.0, 18.0, 72.0, 4));
/// let stl = export(&scene, &ExportOptions::default()).unwrap();
/// assert_eq!(stl.bytes.len(), 84 + 50 * stl.triangle_count);
/// ```
pub fn export(scene: &SceneGraph, options: &ExportOptions) -> Result<MeshBytes, ExportError> {
    if scene.is_empty() {
        warn!("scene is empty, nothing to export");
        let placeholder = encode(&Mesh::new(), options)?;
        return Err(ExportError::NothingToExport { placeholder });
    }

    let mesh = scene_to_mesh(scene)?;
    let bytes = encode(&mesh, options)?;
    debug!(
        format = ?options.format,
        triangles = mesh.triangle_count(),
        bytes = bytes.len(),
        "exported STL"
    );

    Ok(MeshBytes {
        bytes,
        triangle_count: mesh.triangle_count(),
        format: options.format,
    })
}

/// Encodes `scene` as a Wavefront OBJ document.
pub fn export_obj(scene: &SceneGraph, name: &str) -> Result<String, ExportError> {
    if scene.is_empty() {
        warn!("scene is empty, nothing to export");
        let mut placeholder = Vec::new();
        obj::write_obj(&Mesh::new(), name, &mut placeholder)?;
        return Err(ExportError::NothingToExport { placeholder });
    }

    let mesh = scene_to_mesh(scene)?;
    let mut out = Vec::new();
    obj::write_obj(&mesh, name, &mut out)?;
    debug!(vertices = mesh.vertex_count(), triangles = mesh.triangle_count(), "exported OBJ");
    Ok(String::from_utf8_lossy(&out).into_owned())
}

/// Download filename, e.g. `shelf_36x18x72_4shelves.stl`.
pub fn export_filename(params: &ShelfParameters) -> String {
    format!("{}.stl", params.export_file_stem())
}

fn encode(mesh: &Mesh, options: &ExportOptions) -> Result<Vec<u8>, ExportError> {
    let mut bytes = match options.format {
        StlFormat::Binary => Vec::with_capacity(stl::binary_len(mesh.triangle_count())),
        StlFormat::Ascii => Vec::new(),
    };
    match options.format {
        StlFormat::Binary => stl::write_binary(mesh, &options.solid_name, &mut bytes)?,
        StlFormat::Ascii => stl::write_ascii(mesh, &options.solid_name, &mut bytes)?,
    }
    Ok(bytes)
}

/// Renderer buffers: flat f32 positions and normals, u32 indices.
///
/// # Example
///
/// ```rust
/// use shelf_geometry::build;
/// use shelf_mesh::MeshBuffers;
/// use shelf_params::ShelfParameters;
///
/// let scene = build(&ShelfParameters::new(24.0, 12.0, 48.0, 2));
/// let buffers = MeshBuffers::from_scene(&scene).unwrap();
/// assert_eq!(buffers.vertices.len(), buffers.normals.len());
/// assert!(buffers.triangle_count() > 0);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MeshBuffers {
    pub vertices: Vec<f32>,
    pub indices: Vec<u32>,
    pub normals: Vec<f32>,
}

impl MeshBuffers {
    pub fn from_mesh(mesh: &Mesh) -> Self {
        Self {
            vertices: mesh.vertices_f32(),
            indices: mesh.indices_u32(),
            normals: mesh.normals_f32(),
        }
    }

    /// Flattens `scene` and converts it to buffers. Empty scenes give
    /// empty buffers.
    pub fn from_scene(scene: &SceneGraph) -> Result<Self, MeshError> {
        Ok(Self::from_mesh(&scene_to_mesh(scene)?))
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len() / 3
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }
}
