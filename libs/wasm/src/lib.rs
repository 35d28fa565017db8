//! WASM-facing entry points for the wire shelf generator.
//!
//! This crate is compiled to a `cdylib` and consumed from JavaScript via
//! `wasm-bindgen`. Every exported function takes the configurator's
//! parameter JSON, normalizes it leniently and runs the pipeline. Native
//! tests use the `*_internal` helpers, which return Rust error types and
//! do not need a JS host.
//!
//! ```
//! let scene = shelf_wasm::build_scene_internal(
//!     r#"{"width": 36, "length": 18, "postHeight": 72, "numberOfShelves": 4}"#,
//! )
//! .unwrap();
//! assert_eq!(scene.shelf_levels().len(), 4);
//! ```

mod diagnostics;
mod mesh_handle;

pub use diagnostics::{Diagnostic, DiagnosticList, Severity};
pub use mesh_handle::{MeshHandle, StlDownload};

use shelf_geometry::{build, SceneGraph};
use shelf_mesh::{export, export_filename, ExportError, ExportOptions, MeshBuffers, MeshError};
use shelf_params::{extract_from_response, from_json_str, ParamsError, ShelfParameters};
use thiserror::Error;
use wasm_bindgen::prelude::*;

/// Errors surfaced by the `*_internal` helpers.
#[derive(Debug, Error)]
pub enum FacadeError {
    #[error(transparent)]
    Params(#[from] ParamsError),

    #[error(transparent)]
    Mesh(#[from] MeshError),

    #[error(transparent)]
    Export(#[from] ExportError),

    #[error("Failed to serialize: {0}")]
    Serialize(#[from] serde_json::Error),
}

fn to_js(err: FacadeError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// Installs a panic hook that forwards Rust panics to the browser console.
///
/// # Examples
/// ```no_run
/// // In JavaScript: import and call once at startup.
/// // import { init_panic_hook } from "shelf-wasm";
/// // init_panic_hook();
/// ```
#[wasm_bindgen]
pub fn init_panic_hook() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Returns the radial segment count used for corner posts.
#[wasm_bindgen]
pub fn default_post_segments() -> u32 {
    config::constants::POST_SEGMENTS
}

/// Normalizes raw parameter JSON and returns the canonical form.
///
/// # Errors
/// Returns a JavaScript error when the text is not JSON at all.
#[wasm_bindgen]
pub fn normalize_params(params_json: &str) -> Result<String, JsValue> {
    normalize_params_internal(params_json).map_err(to_js)
}

pub fn normalize_params_internal(params_json: &str) -> Result<String, FacadeError> {
    let params = from_json_str(params_json)?;
    Ok(serde_json::to_string(&params)?)
}

/// Reports missing fields and out-of-range values.
#[wasm_bindgen]
pub fn check(params_json: &str) -> Result<DiagnosticList, JsValue> {
    check_internal(params_json).map_err(to_js)
}

pub fn check_internal(params_json: &str) -> Result<DiagnosticList, FacadeError> {
    let params = from_json_str(params_json)?;
    Ok(DiagnosticList::for_params(&params))
}

/// Applies a chat reply (or free text) on top of the current parameters.
///
/// A trailing `ENTITIES_EXTRACTED: {...}` block takes precedence over
/// keyword extraction.
#[wasm_bindgen]
pub fn extract(text: &str, current_json: &str) -> Result<String, JsValue> {
    extract_internal(text, current_json).map_err(to_js)
}

pub fn extract_internal(text: &str, current_json: &str) -> Result<String, FacadeError> {
    let current = if current_json.trim().is_empty() {
        ShelfParameters::default()
    } else {
        from_json_str(current_json)?
    };
    let next = extract_from_response(text, &current);
    Ok(serde_json::to_string(&next)?)
}

/// Builds the scene and returns it as JSON.
#[wasm_bindgen]
pub fn build_scene(params_json: &str) -> Result<String, JsValue> {
    build_scene_internal(params_json)
        .and_then(|scene| Ok(serde_json::to_string(&scene)?))
        .map_err(to_js)
}

pub fn build_scene_internal(params_json: &str) -> Result<SceneGraph, FacadeError> {
    let params = from_json_str(params_json)?;
    Ok(build(&params))
}

/// Builds the scene and triangulates it for rendering.
///
/// Incomplete parameters give an empty handle rather than an error.
///
/// # Examples
/// ```no_run
/// // In JavaScript:
/// // const mesh = render(paramsJson);
/// // if (!mesh.is_empty()) scene.add(toThreeMesh(mesh));
/// ```
#[wasm_bindgen]
pub fn render(params_json: &str) -> Result<MeshHandle, JsValue> {
    render_internal(params_json).map_err(to_js)
}

pub fn render_internal(params_json: &str) -> Result<MeshHandle, FacadeError> {
    let scene = build_scene_internal(params_json)?;
    let buffers = MeshBuffers::from_scene(&scene)?;
    Ok(MeshHandle::from_buffers(buffers, scene.finish()))
}

/// Encodes the scene as STL for download.
///
/// An empty scene is not an error here: the result carries a zero-facet
/// placeholder and `nothing_to_export` is set.
#[wasm_bindgen]
pub fn export_stl(params_json: &str, ascii: bool) -> Result<StlDownload, JsValue> {
    export_stl_internal(params_json, ascii).map_err(to_js)
}

pub fn export_stl_internal(params_json: &str, ascii: bool) -> Result<StlDownload, FacadeError> {
    let params = from_json_str(params_json)?;
    let options = if ascii {
        ExportOptions::ascii()
    } else {
        ExportOptions::default()
    };
    let filename = export_filename(&params);

    match export(&build(&params), &options) {
        Ok(stl) => Ok(StlDownload::new(stl.bytes, filename, false)),
        Err(ExportError::NothingToExport { placeholder }) => {
            Ok(StlDownload::new(placeholder, filename, true))
        }
        Err(err) => Err(err.into()),
    }
}
