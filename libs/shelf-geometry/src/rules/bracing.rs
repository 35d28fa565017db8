//! Horizontal cross-braces between the posts.

use std::f64::consts::FRAC_PI_2;

use config::constants::{BRACE_RADIUS, EXTRA_BRACE_THRESHOLD};
use config::GeneratorConfig;
use glam::DVec3;
use shelf_params::ShelfParameters;

use crate::scene::{MaterialTag, Part, Primitive, Shape};

/// Number of brace tiers: two, or three for units with more than four shelves.
pub fn brace_tier_count(number_of_shelves: u32) -> u32 {
    if number_of_shelves > EXTRA_BRACE_THRESHOLD {
        3
    } else {
        2
    }
}

/// Front and back braces per tier, evenly spaced below the top shelf.
pub fn bracing(params: &ShelfParameters, config: &GeneratorConfig) -> Vec<Primitive> {
    let n = params.number_of_shelves;
    if n == 0 {
        return Vec::new();
    }

    let tiers = brace_tier_count(n);
    let top = params.shelf_y(n - 1);
    let shape = Shape::cylinder(BRACE_RADIUS, params.width, config.brace_segments);
    let rotation = DVec3::new(0.0, 0.0, FRAC_PI_2);

    (1..=tiers)
        .flat_map(|tier| {
            let y = top * tier as f64 / (tiers + 1) as f64;
            [-params.length / 2.0, params.length / 2.0].map(|z| {
                Primitive::new(shape, MaterialTag::Wire, Part::Brace { tier })
                    .at(DVec3::new(0.0, y, z))
                    .rotated(rotation)
            })
        })
        .collect()
}
