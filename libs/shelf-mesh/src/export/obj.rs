//! Wavefront OBJ writer.

use std::io::{self, Write};

use crate::mesh::Mesh;

/// Writes an `o` object with positions and 1-based triangle faces.
pub fn write_obj<W: Write>(mesh: &Mesh, name: &str, mut out: W) -> io::Result<()> {
    writeln!(out, "o {name}")?;
    for v in mesh.vertices() {
        let v = v.as_vec3();
        writeln!(out, "v {} {} {}", v.x, v.y, v.z)?;
    }
    for [a, b, c] in mesh.triangles() {
        writeln!(out, "f {} {} {}", a + 1, b + 1, c + 1)?;
    }
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::DVec3;

    #[test]
    fn test_obj_vertices_and_faces() {
        let mut mesh = Mesh::new();
        mesh.add_vertex(DVec3::ZERO);
        mesh.add_vertex(DVec3::X);
        mesh.add_vertex(DVec3::Y);
        mesh.add_triangle(0, 1, 2);

        let mut bytes = Vec::new();
        write_obj(&mesh, "shelf", &mut bytes).unwrap();
        let text = String::from_utf8(bytes).unwrap();
        assert!(text.starts_with("o shelf\n"));
        assert!(text.contains("v 1 0 0\n"));
        assert!(text.contains("f 1 2 3\n"));
    }
}
