//! # Shelf Mesh
//!
//! Triangulates a [`shelf_geometry::SceneGraph`] and writes it in a
//! standard interchange format.
//!
//! ## Architecture
//!
//! ```text
//! SceneGraph → primitives (box / cylinder / sphere) → world transform → Mesh → STL / OBJ
//! ```
//!
//! Tessellation density is fixed per shape kind, so the same scene always
//! produces byte-identical output.
//!
//! ## Usage
//!
//! ```rust
//! use shelf_geometry::build;
//! use shelf_mesh::{export, export_filename, ExportOptions};
//! use shelf_params::ShelfParameters;
//!
//! let params = ShelfParameters::new(36.0, 18.0, 72.0, 4);
//! let stl = export(&build(&params), &ExportOptions::default()).unwrap();
//! assert!(stl.triangle_count > 0);
//! assert_eq!(export_filename(&params), "shelf_36x18x72_4shelves.stl");
//! ```

pub mod error;
pub mod export;
pub mod flatten;
pub mod mesh;
pub mod primitives;

pub use error::{ExportError, MeshError};
pub use export::{
    export, export_filename, export_obj, ExportOptions, MeshBuffers, MeshBytes, StlFormat,
};
pub use flatten::scene_to_mesh;
pub use mesh::Mesh;
