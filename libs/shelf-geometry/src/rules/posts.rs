//! Corner posts.

use config::constants::POST_RADIUS;
use config::GeneratorConfig;
use glam::{DVec2, DVec3};
use shelf_params::ShelfParameters;

use crate::scene::{MaterialTag, Part, Primitive, Shape};

/// Post footprint centres as `(x, z)`, back-left first, front-right last.
pub fn post_corners(params: &ShelfParameters) -> [DVec2; 4] {
    let hx = params.width / 2.0;
    let hz = params.length / 2.0;
    [
        DVec2::new(-hx, -hz),
        DVec2::new(hx, -hz),
        DVec2::new(-hx, hz),
        DVec2::new(hx, hz),
    ]
}

/// Four vertical cylinders spanning the floor to `post_height`.
pub fn posts(params: &ShelfParameters, config: &GeneratorConfig) -> Vec<Primitive> {
    let shape = Shape::cylinder(POST_RADIUS, params.post_height, config.post_segments);
    let y = params.post_height / 2.0;

    post_corners(params)
        .iter()
        .zip(0u8..)
        .map(|(corner, index)| {
            Primitive::new(shape, MaterialTag::Post, Part::Post { corner: index })
                .at(DVec3::new(corner.x, y, corner.y))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_posts_at_corners() {
        let params = ShelfParameters::new(36.0, 18.0, 72.0, 4);
        let posts = posts(&params, &GeneratorConfig::default());
        assert_eq!(posts.len(), 4);
        for post in &posts {
            assert_relative_eq!(post.position.x.abs(), 18.0);
            assert_relative_eq!(post.position.z.abs(), 9.0);
            assert_relative_eq!(post.position.y, 36.0);
            assert_eq!(post.material, MaterialTag::Post);
            assert_eq!(
                post.shape,
                Shape::cylinder(POST_RADIUS, 72.0, config::constants::POST_SEGMENTS)
            );
        }
    }

    #[test]
    fn test_corners_are_distinct() {
        let corners = post_corners(&ShelfParameters::new(10.0, 20.0, 30.0, 2));
        for i in 0..4 {
            for j in (i + 1)..4 {
                assert_ne!(corners[i], corners[j]);
            }
        }
    }
}
