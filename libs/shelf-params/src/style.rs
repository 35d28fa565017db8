//! # Wire Style Table
//!
//! Maps each [`ShelfStyle`] to the wire spacing, thickness and radial segment
//! count used when building its grid.

use config::constants::{
    COMMERCIAL_PRO_WIRE, HEAVY_DUTY_WIRE, INDUSTRIAL_GRID_WIRE, METRO_CLASSIC_WIRE,
};
use serde::{Deserialize, Serialize};

use crate::types::ShelfStyle;

/// Wire dimensions for one shelf style.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WireStyle {
    /// Centre-to-centre distance between parallel wires.
    pub spacing: f64,
    /// Wire radius.
    pub thickness: f64,
    /// Radial segments per wire cylinder.
    pub segments: u32,
    /// Adds front/back reinforcement boxes to every wire level.
    pub reinforced: bool,
}

impl WireStyle {
    const fn from_tuple(values: (f64, f64, u32), reinforced: bool) -> Self {
        Self {
            spacing: values.0,
            thickness: values.1,
            segments: values.2,
            reinforced,
        }
    }
}

/// Style table in [`ShelfStyle::ALL`] order. The first entry is the fallback.
pub const WIRE_STYLES: [(ShelfStyle, WireStyle); 4] = [
    (
        ShelfStyle::IndustrialGrid,
        WireStyle::from_tuple(INDUSTRIAL_GRID_WIRE, false),
    ),
    (
        ShelfStyle::MetroClassic,
        WireStyle::from_tuple(METRO_CLASSIC_WIRE, false),
    ),
    (
        ShelfStyle::CommercialPro,
        WireStyle::from_tuple(COMMERCIAL_PRO_WIRE, false),
    ),
    (
        ShelfStyle::HeavyDuty,
        WireStyle::from_tuple(HEAVY_DUTY_WIRE, true),
    ),
];

/// Looks up the wire dimensions for `style`, falling back to the first entry.
///
/// # Example
///
/// ```rust
/// use shelf_params::{wire_style, ShelfStyle};
///
/// let style = wire_style(ShelfStyle::MetroClassic);
/// assert_eq!(style.spacing, 2.0);
/// assert_eq!(style.segments, 16);
/// ```
pub fn wire_style(style: ShelfStyle) -> WireStyle {
    WIRE_STYLES
        .iter()
        .find(|(key, _)| *key == style)
        .map(|(_, wire)| *wire)
        .unwrap_or(WIRE_STYLES[0].1)
}

/// Looks up wire dimensions by style name, falling back to the first entry
/// for names that match no style.
pub fn wire_style_by_name(name: &str) -> WireStyle {
    ShelfStyle::parse_loose(name)
        .map(wire_style)
        .unwrap_or(WIRE_STYLES[0].1)
}

impl ShelfStyle {
    /// Wire dimensions for this style.
    pub fn wire(self) -> WireStyle {
        wire_style(self)
    }
}
