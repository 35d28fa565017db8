//! # Configuration Constants
//!
//! Centralized constants for the shelf generator. Every dimension used by the
//! assembly rules, the tessellators, and the parameter validator lives here.
//!
//! ## Categories
//!
//! - **Precision**: Floating-point comparison tolerances
//! - **Ranges**: Accepted parameter ranges
//! - **Geometry**: Fixed part dimensions
//! - **Wire styles**: Per-style spacing, thickness and segment counts
//! - **Tessellation**: Polygon densities per shape kind
//! - **Limits**: Maximum values for safety bounds

use std::ops::RangeInclusive;

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Epsilon for floating-point comparisons.
///
/// # Example
///
/// ```rust
/// use config::constants::EPSILON;
///
/// fn approximately_equal(a: f64, b: f64) -> bool {
///     (a - b).abs() < EPSILON
/// }
///
/// assert!(approximately_equal(1.0, 1.0 + 1e-11));
/// ```
pub const EPSILON: f64 = 1e-10;

/// Smallest triangle area considered non-degenerate during mesh validation.
pub const DEGENERATE_AREA_EPSILON: f64 = 1e-12;

// =============================================================================
// PARAMETER RANGES
// =============================================================================

/// Accepted shelf width in inches.
///
/// # Example
///
/// ```rust
/// use config::constants::WIDTH_RANGE;
/// assert!(WIDTH_RANGE.contains(&48.0));
/// assert!(!WIDTH_RANGE.contains(&100.0));
/// ```
pub const WIDTH_RANGE: RangeInclusive<f64> = 12.0..=96.0;

/// Accepted shelf length (depth) in inches.
pub const LENGTH_RANGE: RangeInclusive<f64> = 12.0..=96.0;

/// Accepted post height in inches.
pub const POST_HEIGHT_RANGE: RangeInclusive<f64> = 24.0..=96.0;

/// Accepted number of shelf levels.
pub const SHELF_COUNT_RANGE: RangeInclusive<u32> = 2..=8;

/// Largest divider count the configurator offers per shelf.
pub const MAX_DIVIDERS_PER_SHELF: u32 = 6;

/// Upper bound on wires in one direction of a grid level.
///
/// Out-of-range widths are still built, but never with more wires than this.
pub const MAX_WIRES_PER_RUN: u32 = 512;

/// Most shelf levels the builder will assemble. Above this the scene is empty.
pub const MAX_SHELF_LEVELS: u32 = 64;

// =============================================================================
// GEOMETRY CONSTANTS
// =============================================================================

/// Radius of the four corner posts.
pub const POST_RADIUS: f64 = 0.4;

/// Thickness of the solid bottom shelf panel.
pub const SOLID_SHELF_THICKNESS: f64 = 0.25;

/// Cross-section of the front/back edge boxes on a solid shelf.
pub const SHELF_EDGE_SIZE: f64 = 0.2;

/// Cross-section of the heavy-duty front/back reinforcement boxes.
pub const REINFORCEMENT_SIZE: f64 = 0.3;

/// Height of a shelf divider panel.
pub const DIVIDER_HEIGHT: f64 = 4.0;

/// Fraction of the shelf length a divider spans.
///
/// # Example
///
/// ```rust
/// use config::constants::DIVIDER_DEPTH_RATIO;
/// assert!((0.8..=0.9).contains(&DIVIDER_DEPTH_RATIO));
/// ```
pub const DIVIDER_DEPTH_RATIO: f64 = 0.85;

/// Thickness of a shelf divider panel.
pub const DIVIDER_THICKNESS: f64 = 0.1;

/// Thickness of enclosure panels.
pub const PANEL_THICKNESS: f64 = 0.1;

/// How much the top enclosure panel exceeds the footprint in width and length.
pub const TOP_PANEL_OVERHANG: f64 = 1.0;

/// Cross-section of enclosure frame bars.
pub const FRAME_BAR_SIZE: f64 = 0.3;

/// Radius of the horizontal cross-braces.
pub const BRACE_RADIUS: f64 = 0.1;

/// Shelf count above which a third brace tier is added.
pub const EXTRA_BRACE_THRESHOLD: u32 = 4;

/// Radius of the spherical caster wheel.
pub const CASTER_WHEEL_RADIUS: f64 = 1.0;

/// Radius of the caster mounting plate.
pub const CASTER_PLATE_RADIUS: f64 = 1.2;

/// Height of the caster mounting plate.
pub const CASTER_PLATE_HEIGHT: f64 = 0.25;

// =============================================================================
// WIRE STYLES
// =============================================================================

/// Industrial Grid wire spacing, thickness and radial segments.
pub const INDUSTRIAL_GRID_WIRE: (f64, f64, u32) = (1.5, 0.08, 12);

/// Metro Classic wire spacing, thickness and radial segments.
pub const METRO_CLASSIC_WIRE: (f64, f64, u32) = (2.0, 0.06, 16);

/// Commercial Pro wire spacing, thickness and radial segments.
pub const COMMERCIAL_PRO_WIRE: (f64, f64, u32) = (1.0, 0.10, 20);

/// Heavy Duty wire spacing, thickness and radial segments.
pub const HEAVY_DUTY_WIRE: (f64, f64, u32) = (1.2, 0.12, 16);

// =============================================================================
// TESSELLATION CONSTANTS
// =============================================================================

/// Radial segments for the corner posts.
pub const POST_SEGMENTS: u32 = 24;

/// Radial segments for the cross-braces.
pub const BRACE_SEGMENTS: u32 = 12;

/// Radial segments for the caster mounting plates.
pub const CASTER_SEGMENTS: u32 = 16;

/// Segments around a sphere's circumference.
///
/// # Example
///
/// ```rust
/// use config::constants::SPHERE_SEGMENTS;
///
/// // Ring count used by the sphere tessellator
/// let rings = (SPHERE_SEGMENTS + 1) / 2;
/// assert_eq!(rings, 8);
/// ```
pub const SPHERE_SEGMENTS: u32 = 16;

/// Minimum number of segments for any circular shape.
pub const MIN_SEGMENTS: u32 = 3;

// =============================================================================
// LIMIT CONSTANTS
// =============================================================================

/// Maximum number of vertices in a single exported mesh.
///
/// # Example
///
/// ```rust
/// use config::constants::MAX_VERTICES;
///
/// let vertex_count = 1000;
/// assert!(vertex_count < MAX_VERTICES);
/// ```
pub const MAX_VERTICES: usize = 10_000_000;

/// Maximum number of triangles in a single exported mesh.
pub const MAX_TRIANGLES: usize = 10_000_000;

/// Size of the fixed binary STL header in bytes.
pub const STL_HEADER_BYTES: usize = 80;

/// Size of one binary STL facet record in bytes.
pub const STL_FACET_BYTES: usize = 50;

// =============================================================================
// HELPER FUNCTIONS
// =============================================================================

/// Checks if two f64 values are approximately equal within EPSILON.
///
/// # Example
///
/// ```rust
/// use config::constants::approx_equal;
///
/// assert!(approx_equal(1.0, 1.0 + 1e-11));
/// assert!(!approx_equal(1.0, 1.1));
/// ```
#[inline]
pub fn approx_equal(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

/// Number of evenly spaced wires that fit across `span` at `spacing`.
///
/// Always at least one so a grid never ends up empty, and never more than
/// [`MAX_WIRES_PER_RUN`].
///
/// # Example
///
/// ```rust
/// use config::constants::wire_count;
///
/// assert_eq!(wire_count(36.0, 1.5), 25);
/// assert_eq!(wire_count(0.5, 1.5), 1);
/// assert_eq!(wire_count(1e9, 1.5), 512);
/// ```
#[inline]
pub fn wire_count(span: f64, spacing: f64) -> u32 {
    if !(span > 0.0) || !(spacing > 0.0) {
        return 1;
    }
    ((span / spacing).floor() + 1.0).min(MAX_WIRES_PER_RUN as f64) as u32
}
