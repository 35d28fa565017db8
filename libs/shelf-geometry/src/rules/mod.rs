//! # Assembly Rules
//!
//! Each rule is a pure function from parameters to the primitives of one
//! sub-assembly. The builder runs them in [`RULES`] order and concatenates
//! the results.

mod bracing;
mod casters;
mod dividers;
mod enclosure;
mod posts;
mod shelves;

pub use bracing::{brace_tier_count, bracing};
pub use casters::casters;
pub use dividers::dividers;
pub use enclosure::enclosure;
pub use posts::{post_corners, posts};
pub use shelves::shelves;

use config::GeneratorConfig;
use shelf_params::ShelfParameters;

use crate::scene::Primitive;

/// Signature shared by every assembly rule.
pub type AssemblyRule = fn(&ShelfParameters, &GeneratorConfig) -> Vec<Primitive>;

/// Rules in composition order.
pub const RULES: [(&str, AssemblyRule); 6] = [
    ("posts", posts),
    ("shelves", shelves),
    ("dividers", dividers),
    ("enclosure", enclosure),
    ("bracing", bracing),
    ("casters", casters),
];

/// `count` evenly spaced offsets spanning `[-span/2, span/2]`.
///
/// A single offset sits at the centre.
pub(crate) fn spread(span: f64, count: u32) -> impl Iterator<Item = f64> {
    let half = span / 2.0;
    let step = if count > 1 {
        span / (count - 1) as f64
    } else {
        0.0
    };
    (0..count).map(move |j| if count > 1 { -half + j as f64 * step } else { 0.0 })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_spread_endpoints() {
        let xs: Vec<f64> = spread(36.0, 19).collect();
        assert_eq!(xs.len(), 19);
        assert_relative_eq!(xs[0], -18.0);
        assert_relative_eq!(xs[18], 18.0);
        assert_relative_eq!(xs[1] - xs[0], 2.0);
    }

    #[test]
    fn test_spread_single_is_centred() {
        let xs: Vec<f64> = spread(10.0, 1).collect();
        assert_eq!(xs, vec![0.0]);
    }

    #[test]
    fn test_spread_zero() {
        assert_eq!(spread(10.0, 0).count(), 0);
    }

    #[test]
    fn test_rule_order() {
        let names: Vec<&str> = RULES.iter().map(|(name, _)| *name).collect();
        assert_eq!(
            names,
            ["posts", "shelves", "dividers", "enclosure", "bracing", "casters"]
        );
    }
}
