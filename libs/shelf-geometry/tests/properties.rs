use approx::assert_relative_eq;
use shelf_geometry::{build, MaterialTag, Part, Primitive, SceneGraph, Shape, ShapeKind};
use shelf_params::{EnclosureType, PostType, ShelfParameters, ShelfStyle};

fn standard() -> ShelfParameters {
    ShelfParameters::new(36.0, 18.0, 72.0, 4)
}

fn shelf_heights(scene: &SceneGraph) -> Vec<f64> {
    scene
        .shelf_levels()
        .into_iter()
        .map(|level| {
            scene
                .parts(move |p| *p == Part::Shelf { level })
                .map(|p| p.position.y)
                .next()
                .unwrap_or(f64::NAN)
        })
        .collect()
}

#[test]
fn identical_inputs_give_identical_scenes() {
    let mut params = standard();
    params.shelf_dividers_count = 3;
    params.shelf_dividers_shelves = [1, 3].into_iter().collect();
    params.enclosure_type = EnclosureType::Full;
    params.post_type = PostType::Mobile;
    assert_eq!(build(&params), build(&params));
}

#[test]
fn always_four_posts_at_half_extents() {
    for (w, l, h) in [(12.0, 12.0, 24.0), (36.0, 18.0, 72.0), (96.0, 60.0, 96.0)] {
        let scene = build(&ShelfParameters::new(w, l, h, 3));
        let posts: Vec<&Primitive> = scene.parts(|p| matches!(p, Part::Post { .. })).collect();
        assert_eq!(posts.len(), 4);
        for post in posts {
            assert_relative_eq!(post.position.x.abs(), w / 2.0);
            assert_relative_eq!(post.position.z.abs(), l / 2.0);
            assert_relative_eq!(post.position.y, h / 2.0);
        }
    }
}

#[test]
fn one_level_per_shelf_evenly_spaced() {
    for n in 2..=8 {
        let params = ShelfParameters::new(36.0, 18.0, 72.0, n);
        let scene = build(&params);
        let heights = shelf_heights(&scene);
        assert_eq!(heights.len() as u32, n);

        let spacing = 72.0 / (n as f64 + 1.0);
        for (i, y) in heights.iter().enumerate() {
            assert_relative_eq!(*y, (i as f64 + 1.0) * spacing, epsilon = 1e-9);
        }
    }
}

#[test]
fn standard_unit_matches_reference_layout() {
    let scene = build(&standard());
    let heights = shelf_heights(&scene);
    for (y, expected) in heights.iter().zip([14.4, 28.8, 43.2, 57.6]) {
        assert_relative_eq!(*y, expected, epsilon = 1e-9);
    }
    assert_eq!(scene.count_by_material(MaterialTag::Post), 4);
    assert_eq!(scene.brace_tiers().len(), 2);
    assert_eq!(scene.count_by_material(MaterialTag::Caster), 0);
    assert_eq!(scene.count_by_material(MaterialTag::Panel), 0);
    assert_eq!(scene.count_by_material(MaterialTag::Solid), 0);
    assert_eq!(scene.parts(|p| matches!(p, Part::Divider { .. })).count(), 0);
    assert_eq!(scene.parts(|p| matches!(p, Part::Enclosure { .. })).count(), 0);

    let braces: Vec<&Primitive> = scene.parts(|p| matches!(p, Part::Brace { .. })).collect();
    assert_eq!(braces.len(), 4);
    assert!(braces.iter().all(|b| b.shape.kind() == ShapeKind::Cylinder));

    // 4 posts, 4 levels of 25 + 13 wires, 2 tiers of front and back braces
    assert_eq!(scene.len(), 4 + 4 * 38 + 4);

    let (min, max) = scene.bounding_box().unwrap();
    assert_relative_eq!(min.y, 0.0, epsilon = 1e-9);
    assert_relative_eq!(max.y, 72.0, epsilon = 1e-9);
    assert!(max.x >= 18.0 && min.x <= -18.0);
}

#[test]
fn dividers_only_on_valid_shelves() {
    let mut params = standard();
    params.shelf_dividers_count = 2;
    params.shelf_dividers_shelves = [0, 2, 7].into_iter().collect();
    let scene = build(&params);

    let dividers: Vec<&Primitive> = scene
        .parts(|p| matches!(p, Part::Divider { .. }))
        .collect();
    assert_eq!(dividers.len(), 2);
    for d in dividers {
        assert!(d.position.x > -18.0 && d.position.x < 18.0);
        assert_relative_eq!(d.position.y, params.shelf_y(1) + 2.0, epsilon = 1e-9);
    }
}

#[test]
fn oversized_loose_input_builds_bounded_scene() {
    let params = shelf_params::from_json_str(
        r#"{"width": 36, "length": 18, "postHeight": 72, "numberOfShelves": 4,
            "shelfDividersCount": 1e12, "shelfDividersShelves": [1]}"#,
    )
    .unwrap();
    assert_eq!(params.shelf_dividers_count, u32::MAX);

    let scene = build(&params);
    let dividers = scene.parts(|p| matches!(p, Part::Divider { .. })).count();
    assert_eq!(dividers as u32, config::constants::MAX_DIVIDERS_PER_SHELF);

    let wide = shelf_params::from_json_str(
        r#"{"width": 1e9, "length": 18, "postHeight": 72, "numberOfShelves": 1e9}"#,
    )
    .unwrap();
    assert!(build(&wide).is_empty());
}

#[test]
fn incomplete_parameters_give_empty_scene() {
    let complete = standard();
    let cases = [
        ShelfParameters { width: 0.0, ..complete.clone() },
        ShelfParameters { length: 0.0, ..complete.clone() },
        ShelfParameters { post_height: 0.0, ..complete.clone() },
        ShelfParameters { number_of_shelves: 0, ..complete.clone() },
    ];
    for params in cases {
        let scene = build(&params);
        assert!(scene.is_empty());
        assert!(scene.bounding_box().is_none());
    }
}

#[test]
fn casters_iff_mobile() {
    for (post_type, expected) in [(PostType::Stationary, 0), (PostType::Mobile, 4)] {
        let params = ShelfParameters { post_type, ..standard() };
        let scene = build(&params);
        assert_eq!(scene.count_by_kind(ShapeKind::Sphere), expected);
    }
}

#[test]
fn every_style_and_enclosure_builds() {
    for &style in ShelfStyle::ALL {
        for &enclosure in EnclosureType::ALL {
            let params = ShelfParameters {
                shelf_style: style,
                enclosure_type: enclosure,
                ..standard()
            };
            let scene = build(&params);
            assert_eq!(scene.shelf_levels().len(), 4, "{style} / {enclosure}");
            let panels = scene.count_by_material(MaterialTag::Panel);
            let expected = match enclosure {
                EnclosureType::None => 0,
                EnclosureType::Top | EnclosureType::Back => 1,
                EnclosureType::Sides => 2,
                EnclosureType::Full => 3,
            };
            assert_eq!(panels, expected, "{style} / {enclosure}");
        }
    }
}

#[test]
fn tiny_spans_still_get_one_wire_each_way() {
    // 0.5 wide at 2.0 spacing collapses to a single centred wire
    let params = ShelfParameters::new(0.5, 0.5, 24.0, 2);
    let scene = build(&params);
    let level0: Vec<&Primitive> = scene.parts(|p| *p == Part::Shelf { level: 0 }).collect();
    assert_eq!(level0.len(), 2);
    for wire in level0 {
        assert!(matches!(wire.shape, Shape::Cylinder { .. }));
        assert_relative_eq!(wire.position.x, 0.0);
        assert_relative_eq!(wire.position.z, 0.0);
    }
}

#[test]
fn extra_brace_tier_above_four_shelves() {
    let scene = build(&ShelfParameters::new(36.0, 18.0, 72.0, 6));
    assert_eq!(scene.brace_tiers().len(), 3);
    assert_eq!(
        scene.parts(|p| matches!(p, Part::Brace { .. })).count(),
        6
    );
}

#[test]
fn scene_serializes_to_json() {
    let scene = build(&standard());
    let json = serde_json::to_string(&scene).unwrap();
    let back: SceneGraph = serde_json::from_str(&json).unwrap();
    assert_eq!(back.len(), scene.len());
}
