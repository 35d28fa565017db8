//! # Shelf Params
//!
//! Input boundary for the wire shelf generator. Everything upstream of the
//! geometry builder lives here.
//!
//! ## Architecture
//!
//! ```text
//! form JSON / chat text → normalize / extract → ShelfParameters → shelf-geometry
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use serde_json::json;
//! use shelf_params::normalize;
//!
//! let params = normalize(&json!({
//!     "width": "36",
//!     "length": 18,
//!     "postHeight": {"value": 72, "unit": "in"},
//!     "numberOfShelves": 4,
//! }));
//! assert!(params.is_ready());
//! ```

pub mod error;
pub mod extract;
pub mod normalize;
pub mod style;
pub mod types;
mod validate;

pub use error::{ParamIssue, ParamsError};
pub use extract::{apply_entities_block, extract_from_response, extract_from_text};
pub use normalize::{from_json_str, normalize, normalize_onto};
pub use style::{wire_style, wire_style_by_name, WireStyle, WIRE_STYLES};
pub use types::{
    Color, EnclosureType, Finish, PostType, RequiredField, ShelfParameters, ShelfStyle,
};
