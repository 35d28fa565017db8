//! Vertical divider panels standing on selected shelves.

use config::constants::{
    DIVIDER_DEPTH_RATIO, DIVIDER_HEIGHT, DIVIDER_THICKNESS, MAX_DIVIDERS_PER_SHELF,
};
use config::GeneratorConfig;
use glam::DVec3;
use shelf_params::ShelfParameters;
use tracing::warn;

use crate::scene::{MaterialTag, Part, Primitive, Shape};

/// `shelf_dividers_count` panels on each selected shelf.
///
/// Shelf indices are 1-based. Indices outside `[1, number_of_shelves]` are
/// skipped. Panels split the width into `count + 1` equal bays; counts above
/// [`MAX_DIVIDERS_PER_SHELF`] are built at that maximum.
pub fn dividers(params: &ShelfParameters, _config: &GeneratorConfig) -> Vec<Primitive> {
    let count = params.shelf_dividers_count.min(MAX_DIVIDERS_PER_SHELF);
    if count == 0 || params.shelf_dividers_shelves.is_empty() {
        return Vec::new();
    }

    for &shelf in &params.shelf_dividers_shelves {
        if shelf < 1 || shelf > params.number_of_shelves {
            warn!(
                shelf,
                shelves = params.number_of_shelves,
                "divider shelf out of range, skipping"
            );
        }
    }

    if params.shelf_dividers_count > count {
        warn!(
            requested = params.shelf_dividers_count,
            max = MAX_DIVIDERS_PER_SHELF,
            "divider count capped"
        );
    }

    let bay = params.width / (count as f64 + 1.0);
    let panel = Shape::cuboid(
        DIVIDER_THICKNESS,
        DIVIDER_HEIGHT,
        params.length * DIVIDER_DEPTH_RATIO,
    );

    params
        .divider_shelves_in_range()
        .flat_map(|shelf| {
            let y = params.shelf_y(shelf - 1) + DIVIDER_HEIGHT / 2.0;
            (1..=count).map(move |slot| {
                let x = -params.width / 2.0 + slot as f64 * bay;
                Primitive::new(panel, MaterialTag::Panel, Part::Divider { shelf, slot })
                    .at(DVec3::new(x, y, 0.0))
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn with_dividers(count: u32, shelves: &[u32]) -> ShelfParameters {
        let mut params = ShelfParameters::new(36.0, 18.0, 72.0, 4);
        params.shelf_dividers_count = count;
        params.shelf_dividers_shelves = shelves.iter().copied().collect();
        params
    }

    #[test]
    fn test_dividers_split_width() {
        let prims = dividers(&with_dividers(2, &[1]), &GeneratorConfig::default());
        assert_eq!(prims.len(), 2);
        assert_relative_eq!(prims[0].position.x, -6.0);
        assert_relative_eq!(prims[1].position.x, 6.0);
        assert_relative_eq!(prims[0].position.y, 14.4 + 2.0, epsilon = 1e-9);
        assert_eq!(prims[0].shape, Shape::cuboid(0.1, 4.0, 18.0 * 0.85));
        assert_eq!(prims[0].material, MaterialTag::Panel);
    }

    #[test]
    fn test_out_of_range_shelves_skipped() {
        let prims = dividers(&with_dividers(3, &[2, 5, 9]), &GeneratorConfig::default());
        assert_eq!(prims.len(), 3);
        assert!(prims
            .iter()
            .all(|p| matches!(p.part, Part::Divider { shelf: 2, .. })));
    }

    #[test]
    fn test_no_shelves_selected() {
        assert!(dividers(&with_dividers(2, &[]), &GeneratorConfig::default()).is_empty());
        assert!(dividers(&with_dividers(0, &[1, 2]), &GeneratorConfig::default()).is_empty());
    }

    #[test]
    fn test_divider_count_is_capped() {
        let prims = dividers(&with_dividers(u32::MAX, &[1, 2]), &GeneratorConfig::default());
        assert_eq!(prims.len() as u32, 2 * MAX_DIVIDERS_PER_SHELF);
        let bay = 36.0 / (MAX_DIVIDERS_PER_SHELF as f64 + 1.0);
        assert_relative_eq!(prims[0].position.x, -18.0 + bay, epsilon = 1e-9);
    }

    #[test]
    fn test_dividers_stay_inside_width() {
        for count in 1..=6 {
            let prims = dividers(&with_dividers(count, &[1, 2, 3, 4]), &GeneratorConfig::default());
            assert_eq!(prims.len() as u32, count * 4);
            for p in &prims {
                assert!(p.position.x > -18.0 && p.position.x < 18.0);
            }
        }
    }
}
