//! # Scene Builder
//!
//! Runs every assembly rule over one parameter set.

use config::constants::MAX_SHELF_LEVELS;
use config::GeneratorConfig;
use shelf_params::ShelfParameters;
use tracing::{debug, instrument, warn};

use crate::rules::RULES;
use crate::scene::SceneGraph;

/// Builds the scene with default tessellation settings.
///
/// # Example
///
/// ```rust
/// use shelf_geometry::build;
/// use shelf_params::ShelfParameters;
///
/// let scene = build(&ShelfParameters::new(36.0, 18.0, 72.0, 4));
/// assert_eq!(scene.shelf_levels().len(), 4);
/// assert!(build(&ShelfParameters::default()).is_empty());
/// ```
pub fn build(params: &ShelfParameters) -> SceneGraph {
    build_with(params, &GeneratorConfig::default())
}

/// Builds the scene for `params`.
///
/// Returns an empty scene while any required field is still missing, or
/// when `number_of_shelves` exceeds [`MAX_SHELF_LEVELS`].
/// Output is a pure function of the inputs.
#[instrument(level = "debug", skip_all, fields(
    width = params.width,
    length = params.length,
    height = params.post_height,
    shelves = params.number_of_shelves,
))]
pub fn build_with(params: &ShelfParameters, config: &GeneratorConfig) -> SceneGraph {
    let mut scene = SceneGraph::with_finish(params.color.finish());

    if !params.is_ready() {
        debug!(missing = ?params.missing_required(), "parameters incomplete, empty scene");
        return scene;
    }

    if params.number_of_shelves > MAX_SHELF_LEVELS {
        warn!(
            shelves = params.number_of_shelves,
            max = MAX_SHELF_LEVELS,
            "too many shelf levels, empty scene"
        );
        return scene;
    }

    for (name, rule) in RULES {
        let primitives = rule(params, config);
        debug!(rule = name, count = primitives.len(), "assembled");
        scene.extend(primitives);
    }

    debug!(primitives = scene.len(), "scene built");
    scene
}
