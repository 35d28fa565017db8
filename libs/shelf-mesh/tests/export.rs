use shelf_geometry::build;
use shelf_mesh::{export, scene_to_mesh, ExportError, ExportOptions, MeshBuffers};
use shelf_params::{EnclosureType, PostType, ShelfParameters, ShelfStyle};

fn loaded() -> ShelfParameters {
    ShelfParameters {
        post_type: PostType::Mobile,
        enclosure_type: EnclosureType::Full,
        shelf_style: ShelfStyle::HeavyDuty,
        solid_bottom_shelf: true,
        shelf_dividers_count: 2,
        shelf_dividers_shelves: [2, 3].into_iter().collect(),
        ..ShelfParameters::new(36.0, 18.0, 72.0, 4)
    }
}

fn facet_count(bytes: &[u8]) -> usize {
    u32::from_le_bytes([bytes[80], bytes[81], bytes[82], bytes[83]]) as usize
}

#[test]
fn standard_unit_exports_valid_binary_stl() {
    let scene = build(&ShelfParameters::new(36.0, 18.0, 72.0, 4));
    let stl = export(&scene, &ExportOptions::default()).unwrap();

    assert!(stl.triangle_count > 0);
    assert_eq!(facet_count(&stl.bytes), stl.triangle_count);
    assert_eq!(stl.bytes.len(), 84 + 50 * stl.triangle_count);

    for facet in stl.bytes[84..].chunks_exact(50) {
        for value in facet[..48].chunks_exact(4) {
            let v = f32::from_le_bytes([value[0], value[1], value[2], value[3]]);
            assert!(v.is_finite());
        }
    }
}

#[test]
fn every_option_produces_a_closed_outward_mesh() {
    let mesh = scene_to_mesh(&build(&loaded())).unwrap();
    assert!(mesh.validate());
    assert!(mesh.signed_volume() > 0.0);

    let (min, max) = mesh.bounding_box();
    assert!(min.y >= -1e-9);
    assert!(max.y > 72.0 - 1e-9);
}

#[test]
fn export_is_deterministic() {
    let params = loaded();
    let a = export(&build(&params), &ExportOptions::default()).unwrap();
    let b = export(&build(&params), &ExportOptions::default()).unwrap();
    assert_eq!(a, b);

    let a = export(&build(&params), &ExportOptions::ascii()).unwrap();
    let b = export(&build(&params), &ExportOptions::ascii()).unwrap();
    assert_eq!(a.bytes, b.bytes);
}

#[test]
fn incomplete_parameters_report_nothing_to_export() {
    let scene = build(&ShelfParameters::default());
    match export(&scene, &ExportOptions::default()) {
        Err(ExportError::NothingToExport { placeholder }) => {
            assert_eq!(placeholder.len(), 84);
            assert_eq!(facet_count(&placeholder), 0);
        }
        other => panic!("expected NothingToExport, got {other:?}"),
    }
}

#[test]
fn more_options_more_triangles() {
    let plain = export(
        &build(&ShelfParameters::new(36.0, 18.0, 72.0, 4)),
        &ExportOptions::default(),
    )
    .unwrap();
    let full = export(&build(&loaded()), &ExportOptions::default()).unwrap();
    assert!(full.triangle_count > plain.triangle_count);
}

#[test]
fn buffers_line_up_with_mesh() {
    let scene = build(&loaded());
    let mesh = scene_to_mesh(&scene).unwrap();
    let buffers = MeshBuffers::from_scene(&scene).unwrap();
    assert_eq!(buffers.vertex_count(), mesh.vertex_count());
    assert_eq!(buffers.triangle_count(), mesh.triangle_count());
    assert!(buffers.indices.iter().all(|&i| (i as usize) < mesh.vertex_count()));
    assert!(buffers.normals.iter().all(|n| n.is_finite()));
}
