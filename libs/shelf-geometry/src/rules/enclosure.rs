//! Enclosure panels with their frame bars.
//!
//! | Enclosure | Faces              |
//! |-----------|--------------------|
//! | None      | -                  |
//! | Top       | top                |
//! | Back      | back               |
//! | Sides     | left, right        |
//! | Full      | back, left, right  |

use config::constants::{FRAME_BAR_SIZE, PANEL_THICKNESS, TOP_PANEL_OVERHANG};
use config::GeneratorConfig;
use glam::DVec3;
use shelf_params::ShelfParameters;

use crate::scene::{Face, MaterialTag, Part, Primitive, Shape};

pub fn enclosure(params: &ShelfParameters, _config: &GeneratorConfig) -> Vec<Primitive> {
    let kind = params.enclosure_type;
    let mut out = Vec::new();

    if kind.has_top() {
        top(params, &mut out);
    }
    if kind.has_back() {
        back(params, &mut out);
    }
    if kind.has_sides() {
        side(params, Face::Left, &mut out);
        side(params, Face::Right, &mut out);
    }
    out
}

/// Overhanging lid at post height, framed on all four edges.
fn top(params: &ShelfParameters, out: &mut Vec<Primitive>) {
    let part = Part::Enclosure { face: Face::Top };
    let w = params.width + TOP_PANEL_OVERHANG;
    let l = params.length + TOP_PANEL_OVERHANG;
    let y = params.post_height;

    out.push(
        Primitive::new(Shape::cuboid(w, PANEL_THICKNESS, l), MaterialTag::Panel, part)
            .at(DVec3::new(0.0, y, 0.0)),
    );

    let across = Shape::cuboid(w, FRAME_BAR_SIZE, FRAME_BAR_SIZE);
    for z in [-l / 2.0, l / 2.0] {
        out.push(Primitive::new(across, MaterialTag::Wire, part).at(DVec3::new(0.0, y, z)));
    }
    let along = Shape::cuboid(FRAME_BAR_SIZE, FRAME_BAR_SIZE, l);
    for x in [-w / 2.0, w / 2.0] {
        out.push(Primitive::new(along, MaterialTag::Wire, part).at(DVec3::new(x, y, 0.0)));
    }
}

fn back(params: &ShelfParameters, out: &mut Vec<Primitive>) {
    let z = -params.length / 2.0;
    let panel = Shape::cuboid(params.width, params.post_height, PANEL_THICKNESS);
    let bar = Shape::cuboid(params.width, FRAME_BAR_SIZE, FRAME_BAR_SIZE);
    framed_panel(params, Face::Back, panel, bar, DVec3::new(0.0, 0.0, z), out);
}

fn side(params: &ShelfParameters, face: Face, out: &mut Vec<Primitive>) {
    let x = match face {
        Face::Left => -params.width / 2.0,
        _ => params.width / 2.0,
    };
    let panel = Shape::cuboid(PANEL_THICKNESS, params.post_height, params.length);
    let bar = Shape::cuboid(FRAME_BAR_SIZE, FRAME_BAR_SIZE, params.length);
    framed_panel(params, face, panel, bar, DVec3::new(x, 0.0, 0.0), out);
}

/// Full-height panel at `offset` with bars along its bottom and top edges.
fn framed_panel(
    params: &ShelfParameters,
    face: Face,
    panel: Shape,
    bar: Shape,
    offset: DVec3,
    out: &mut Vec<Primitive>,
) {
    let part = Part::Enclosure { face };
    let h = params.post_height;

    out.push(
        Primitive::new(panel, MaterialTag::Panel, part).at(offset + DVec3::Y * (h / 2.0)),
    );
    for y in [FRAME_BAR_SIZE / 2.0, h - FRAME_BAR_SIZE / 2.0] {
        out.push(Primitive::new(bar, MaterialTag::Wire, part).at(offset + DVec3::Y * y));
    }
}
