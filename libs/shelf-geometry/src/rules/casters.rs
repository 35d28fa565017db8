//! Caster wheels under each post for mobile units.

use config::constants::{CASTER_PLATE_HEIGHT, CASTER_PLATE_RADIUS, CASTER_WHEEL_RADIUS};
use config::GeneratorConfig;
use glam::DVec3;
use shelf_params::{PostType, ShelfParameters};

use super::post_corners;
use crate::scene::{MaterialTag, Part, Primitive, Shape};

/// Wheel sphere resting on the floor plus a mounting plate above it.
///
/// Stationary units get nothing.
pub fn casters(params: &ShelfParameters, config: &GeneratorConfig) -> Vec<Primitive> {
    if params.post_type != PostType::Mobile {
        return Vec::new();
    }

    let wheel = Shape::sphere(CASTER_WHEEL_RADIUS, config.sphere_segments);
    let plate = Shape::cylinder(CASTER_PLATE_RADIUS, CASTER_PLATE_HEIGHT, config.caster_segments);
    let plate_y = 2.0 * CASTER_WHEEL_RADIUS + CASTER_PLATE_HEIGHT / 2.0;

    post_corners(params)
        .iter()
        .zip(0u8..)
        .flat_map(|(corner, index)| {
            let part = Part::Caster { corner: index };
            [
                Primitive::new(wheel, MaterialTag::Caster, part)
                    .at(DVec3::new(corner.x, CASTER_WHEEL_RADIUS, corner.y)),
                Primitive::new(plate, MaterialTag::Caster, part)
                    .at(DVec3::new(corner.x, plate_y, corner.y)),
            ]
        })
        .collect()
}
