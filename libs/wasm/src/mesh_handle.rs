//! # Mesh Handle
//!
//! WASM-friendly wrapper for mesh data that can be transferred to JavaScript.

use shelf_mesh::MeshBuffers;
use shelf_params::Finish;
use wasm_bindgen::prelude::*;

/// Render-ready buffers plus the finish to shade them with.
///
/// # Example (JavaScript)
///
/// ```javascript
/// const mesh = render(JSON.stringify({ width: 36, length: 18, postHeight: 72, numberOfShelves: 4 }));
///
/// const geometry = new THREE.BufferGeometry();
/// geometry.setAttribute('position', new THREE.BufferAttribute(mesh.vertices(), 3));
/// geometry.setAttribute('normal', new THREE.BufferAttribute(mesh.normals(), 3));
/// geometry.setIndex(new THREE.BufferAttribute(mesh.indices(), 1));
///
/// const material = new THREE.MeshStandardMaterial({
///   color: mesh.color, metalness: mesh.metalness, roughness: mesh.roughness,
/// });
/// ```
#[wasm_bindgen]
#[derive(Debug, Clone)]
pub struct MeshHandle {
    /// Vertex positions as [x, y, z, x, y, z, ...]
    vertices: Vec<f32>,
    /// Triangle indices as [i0, i1, i2, i0, i1, i2, ...]
    indices: Vec<u32>,
    /// Vertex normals as [nx, ny, nz, ...]
    normals: Vec<f32>,
    finish: Finish,
}

#[wasm_bindgen]
impl MeshHandle {
    /// Returns the number of vertices.
    #[wasm_bindgen(getter)]
    pub fn vertex_count(&self) -> u32 {
        (self.vertices.len() / 3) as u32
    }

    /// Returns the number of triangles.
    #[wasm_bindgen(getter)]
    pub fn triangle_count(&self) -> u32 {
        (self.indices.len() / 3) as u32
    }

    /// Returns the vertex positions as a Float32Array.
    pub fn vertices(&self) -> Vec<f32> {
        self.vertices.clone()
    }

    /// Returns the triangle indices as a Uint32Array.
    pub fn indices(&self) -> Vec<u32> {
        self.indices.clone()
    }

    /// Returns the vertex normals as a Float32Array.
    pub fn normals(&self) -> Vec<f32> {
        self.normals.clone()
    }

    /// Finish colour as `0xRRGGBB`.
    #[wasm_bindgen(getter)]
    pub fn color(&self) -> u32 {
        self.finish.rgb
    }

    #[wasm_bindgen(getter)]
    pub fn metalness(&self) -> f32 {
        self.finish.metalness
    }

    #[wasm_bindgen(getter)]
    pub fn roughness(&self) -> f32 {
        self.finish.roughness
    }

    /// Returns true if the mesh is empty.
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }
}

impl MeshHandle {
    /// Wraps flattened mesh buffers.
    pub fn from_buffers(buffers: MeshBuffers, finish: Finish) -> Self {
        Self {
            vertices: buffers.vertices,
            indices: buffers.indices,
            normals: buffers.normals,
            finish,
        }
    }
}

/// An STL document ready to download.
#[wasm_bindgen]
#[derive(Debug, Clone)]
pub struct StlDownload {
    bytes: Vec<u8>,
    filename: String,
    nothing_to_export: bool,
}

#[wasm_bindgen]
impl StlDownload {
    /// Returns the file contents as a Uint8Array.
    pub fn bytes(&self) -> Vec<u8> {
        self.bytes.clone()
    }

    /// Suggested filename, e.g. `shelf_36x18x72_4shelves.stl`.
    #[wasm_bindgen(getter)]
    pub fn filename(&self) -> String {
        self.filename.clone()
    }

    /// True when the scene was empty and `bytes` is a zero-facet placeholder.
    #[wasm_bindgen(getter)]
    pub fn nothing_to_export(&self) -> bool {
        self.nothing_to_export
    }
}

impl StlDownload {
    pub fn new(bytes: Vec<u8>, filename: String, nothing_to_export: bool) -> Self {
        Self {
            bytes,
            filename,
            nothing_to_export,
        }
    }
}
