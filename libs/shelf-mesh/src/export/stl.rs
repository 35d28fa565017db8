//! STL writers.
//!
//! Binary layout: 80-byte header, little-endian `u32` facet count, then one
//! 50-byte record per facet (normal, three vertices, `u16` attribute).

use std::io::{self, Write};

use config::constants::{STL_FACET_BYTES, STL_HEADER_BYTES};
use glam::DVec3;

use crate::mesh::Mesh;

/// Exact byte length of a binary STL with `triangles` facets.
pub fn binary_len(triangles: usize) -> usize {
    STL_HEADER_BYTES + 4 + triangles * STL_FACET_BYTES
}

pub fn write_binary<W: Write>(mesh: &Mesh, name: &str, mut out: W) -> io::Result<()> {
    let mut header = [0u8; STL_HEADER_BYTES];
    let name_bytes = name.as_bytes();
    let header_len = name_bytes.len().min(STL_HEADER_BYTES);
    header[..header_len].copy_from_slice(&name_bytes[..header_len]);
    out.write_all(&header)?;

    let count = u32::try_from(mesh.triangle_count())
        .map_err(|_| io::Error::new(io::ErrorKind::InvalidInput, "too many facets for STL"))?;
    out.write_all(&count.to_le_bytes())?;

    let mut record = [0u8; STL_FACET_BYTES];
    for points in mesh.iter_triangles() {
        let normal = Mesh::face_normal(&points);
        for (slot, v) in [normal, points[0], points[1], points[2]].iter().enumerate() {
            put_vec3(&mut record[slot * 12..slot * 12 + 12], *v);
        }
        record[48..50].copy_from_slice(&0u16.to_le_bytes());
        out.write_all(&record)?;
    }
    out.flush()
}

pub fn write_ascii<W: Write>(mesh: &Mesh, name: &str, mut out: W) -> io::Result<()> {
    writeln!(out, "solid {name}")?;
    for points in mesh.iter_triangles() {
        let n = Mesh::face_normal(&points).as_vec3();
        writeln!(out, "  facet normal {} {} {}", n.x, n.y, n.z)?;
        writeln!(out, "    outer loop")?;
        for p in points {
            let p = p.as_vec3();
            writeln!(out, "      vertex {} {} {}", p.x, p.y, p.z)?;
        }
        writeln!(out, "    endloop")?;
        writeln!(out, "  endfacet")?;
    }
    writeln!(out, "endsolid {name}")?;
    out.flush()
}

#[inline]
fn put_vec3(slot: &mut [u8], v: DVec3) {
    slot[0..4].copy_from_slice(&(v.x as f32).to_le_bytes());
    slot[4..8].copy_from_slice(&(v.y as f32).to_le_bytes());
    slot[8..12].copy_from_slice(&(v.z as f32).to_le_bytes());
}
