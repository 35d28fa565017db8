//! Shelf levels: wire grids, the optional solid bottom deck and heavy-duty
//! reinforcement.

use std::f64::consts::FRAC_PI_2;

use config::constants::{
    wire_count, REINFORCEMENT_SIZE, SHELF_EDGE_SIZE, SOLID_SHELF_THICKNESS,
};
use config::GeneratorConfig;
use glam::DVec3;
use shelf_params::{ShelfParameters, WireStyle};

use super::spread;
use crate::scene::{MaterialTag, Part, Primitive, Shape};

/// One level per shelf, bottom to top.
///
/// Level 0 is a solid deck when `solid_bottom_shelf` is set; every other
/// level is a wire grid in the selected style.
pub fn shelves(params: &ShelfParameters, _config: &GeneratorConfig) -> Vec<Primitive> {
    let style = params.shelf_style.wire();
    let mut out = Vec::new();

    for level in 0..params.number_of_shelves {
        let y = params.shelf_y(level);
        if level == 0 && params.solid_bottom_shelf {
            solid_level(params, level, y, &mut out);
        } else {
            wire_level(params, &style, level, y, &mut out);
        }
    }
    out
}

fn solid_level(params: &ShelfParameters, level: u32, y: f64, out: &mut Vec<Primitive>) {
    let part = Part::Shelf { level };
    out.push(
        Primitive::new(
            Shape::cuboid(params.width, SOLID_SHELF_THICKNESS, params.length),
            MaterialTag::Solid,
            part,
        )
        .at(DVec3::new(0.0, y, 0.0)),
    );

    let edge = Shape::cuboid(params.width, SHELF_EDGE_SIZE, SHELF_EDGE_SIZE);
    for z in [-params.length / 2.0, params.length / 2.0] {
        out.push(Primitive::new(edge, MaterialTag::Wire, part).at(DVec3::new(0.0, y, z)));
    }
}

fn wire_level(
    params: &ShelfParameters,
    style: &WireStyle,
    level: u32,
    y: f64,
    out: &mut Vec<Primitive>,
) {
    let part = Part::Shelf { level };

    // Lengthwise wires run along Z, spaced across the width.
    let lengthwise = Shape::cylinder(style.thickness, params.length, style.segments);
    for x in spread(params.width, wire_count(params.width, style.spacing)) {
        out.push(
            Primitive::new(lengthwise, MaterialTag::Wire, part)
                .at(DVec3::new(x, y, 0.0))
                .rotated(DVec3::new(FRAC_PI_2, 0.0, 0.0)),
        );
    }

    // Crosswise wires run along X, spaced along the length.
    let crosswise = Shape::cylinder(style.thickness, params.width, style.segments);
    for z in spread(params.length, wire_count(params.length, style.spacing)) {
        out.push(
            Primitive::new(crosswise, MaterialTag::Wire, part)
                .at(DVec3::new(0.0, y, z))
                .rotated(DVec3::new(0.0, 0.0, FRAC_PI_2)),
        );
    }

    if style.reinforced {
        let bar = Shape::cuboid(params.width, REINFORCEMENT_SIZE, REINFORCEMENT_SIZE);
        for z in [-params.length / 2.0, params.length / 2.0] {
            out.push(Primitive::new(bar, MaterialTag::Wire, part).at(DVec3::new(0.0, y, z)));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::ShapeKind;
    use approx::assert_relative_eq;
    use shelf_params::ShelfStyle;

    fn level_count(prims: &[Primitive], level: u32) -> usize {
        prims
            .iter()
            .filter(|p| p.part == Part::Shelf { level })
            .count()
    }

    #[test]
    fn test_metro_classic_wire_counts() {
        // 36 / 2.0 -> 19 lengthwise, 18 / 2.0 -> 10 crosswise
        let mut params = ShelfParameters::new(36.0, 18.0, 72.0, 4);
        params.shelf_style = ShelfStyle::MetroClassic;
        let prims = shelves(&params, &GeneratorConfig::default());
        for level in 0..4 {
            assert_eq!(level_count(&prims, level), 29);
        }
        assert_eq!(prims.len(), 4 * 29);
    }

    #[test]
    fn test_solid_bottom_replaces_level_zero() {
        let mut params = ShelfParameters::new(36.0, 18.0, 72.0, 4);
        params.shelf_style = ShelfStyle::MetroClassic;
        params.solid_bottom_shelf = true;
        let prims = shelves(&params, &GeneratorConfig::default());

        let bottom: Vec<&Primitive> = prims
            .iter()
            .filter(|p| p.part == Part::Shelf { level: 0 })
            .collect();
        assert_eq!(bottom.len(), 3);
        assert_eq!(bottom[0].material, MaterialTag::Solid);
        assert_eq!(bottom[0].shape, Shape::cuboid(36.0, SOLID_SHELF_THICKNESS, 18.0));
        assert_relative_eq!(bottom[0].position.y, 14.4, epsilon = 1e-9);
        assert!(bottom[1..].iter().all(|p| p.material == MaterialTag::Wire));
        assert_eq!(level_count(&prims, 1), 29);
    }

    #[test]
    fn test_wire_counts_per_style() {
        let params = ShelfParameters::new(36.0, 18.0, 72.0, 2);
        for (style, lengthwise, crosswise) in [
            (ShelfStyle::IndustrialGrid, 25, 13),
            (ShelfStyle::MetroClassic, 19, 10),
            (ShelfStyle::CommercialPro, 37, 19),
            (ShelfStyle::HeavyDuty, 31, 16),
        ] {
            let params = ShelfParameters {
                shelf_style: style,
                ..params.clone()
            };
            let prims = shelves(&params, &GeneratorConfig::default());
            let cylinders: Vec<&Primitive> = prims
                .iter()
                .filter(|p| p.part == Part::Shelf { level: 0 })
                .filter(|p| p.shape.kind() == ShapeKind::Cylinder)
                .collect();
            let along_z = cylinders.iter().filter(|p| p.rotation.x != 0.0).count();
            let along_x = cylinders.iter().filter(|p| p.rotation.z != 0.0).count();
            assert_eq!(along_z, lengthwise, "{style}");
            assert_eq!(along_x, crosswise, "{style}");
        }
    }

    #[test]
    fn test_heavy_duty_adds_reinforcement() {
        let mut params = ShelfParameters::new(24.0, 24.0, 60.0, 2);
        params.shelf_style = ShelfStyle::HeavyDuty;
        let prims = shelves(&params, &GeneratorConfig::default());
        // 24 / 1.2 -> 21 wires each way, plus two bars
        assert_eq!(level_count(&prims, 0), 21 + 21 + 2);
        assert_eq!(
            prims
                .iter()
                .filter(|p| p.shape.kind() == ShapeKind::Box)
                .count(),
            4
        );
    }

    #[test]
    fn test_wire_orientation() {
        let params = ShelfParameters::new(36.0, 18.0, 72.0, 2);
        let prims = shelves(&params, &GeneratorConfig::default());
        let first = prims[0];
        assert_relative_eq!(first.rotation.x, FRAC_PI_2);
        assert_relative_eq!(first.position.x, -18.0);
        let (min, max) = first.bounds();
        assert_relative_eq!(max.z - min.z, 18.0, epsilon = 1e-9);
    }

    #[test]
    fn test_every_style_builds_wires() {
        for &style in ShelfStyle::ALL {
            let mut params = ShelfParameters::new(30.0, 14.0, 54.0, 3);
            params.shelf_style = style;
            let prims = shelves(&params, &GeneratorConfig::default());
            for level in 0..3 {
                assert!(level_count(&prims, level) >= 2, "{style} level {level}");
            }
        }
    }
}
