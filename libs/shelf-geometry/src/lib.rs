//! # Shelf Geometry
//!
//! Deterministic scene construction for configurable wire shelf units.
//!
//! ## Architecture
//!
//! ```text
//! ShelfParameters → rules (posts, shelves, dividers, enclosure, bracing, casters) → SceneGraph
//! ```
//!
//! The scene is a flat list of primitives (cylinder, box, sphere) in a
//! Y-up frame with the unit centred on the origin at floor level. Rules
//! never interact; the builder concatenates their output in a fixed
//! order, so identical inputs give identical scenes.
//!
//! ## Usage
//!
//! ```rust
//! use shelf_geometry::{build, MaterialTag};
//! use shelf_params::ShelfParameters;
//!
//! let scene = build(&ShelfParameters::new(36.0, 18.0, 72.0, 4));
//! assert_eq!(scene.count_by_material(MaterialTag::Post), 4);
//! ```

pub mod builder;
pub mod rules;
pub mod scene;

pub use builder::{build, build_with};
pub use scene::{Face, MaterialTag, Part, Primitive, SceneGraph, Shape, ShapeKind};
