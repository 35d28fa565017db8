//! # Parameter Types
//!
//! Canonical, fully-typed shelf parameters. Every value in these types has
//! already passed through the normalization boundary; nothing here is
//! loosely typed.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParamsError;

/// Lowercases and strips everything but ASCII alphanumerics so that
/// `"Industrial Grid"`, `"industrial_grid"` and `"IndustrialGrid"` compare equal.
pub(crate) fn choice_key(raw: &str) -> String {
    raw.chars()
        .filter(char::is_ascii_alphanumeric)
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

macro_rules! choice_enum {
    (
        $(#[$meta:meta])*
        $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $label:literal $(| $alias:literal)* ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
        pub enum $name {
            $(
                $(#[$vmeta])*
                $variant,
            )+
        }

        impl $name {
            /// Every variant in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Human-readable label as shown in the configurator.
            pub fn label(self) -> &'static str {
                match self {
                    $($name::$variant => $label,)+
                }
            }

            /// Lenient lookup ignoring case, spaces and punctuation.
            pub fn parse_loose(raw: &str) -> Option<Self> {
                let key = choice_key(raw);
                $(
                    if key == choice_key($label) $(|| key == choice_key($alias))* {
                        return Some($name::$variant);
                    }
                )+
                None
            }
        }

        impl FromStr for $name {
            type Err = ParamsError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::parse_loose(s).ok_or_else(|| ParamsError::UnknownChoice {
                    field: stringify!($name),
                    value: s.to_string(),
                })
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.label())
            }
        }
    };
}

choice_enum! {
    /// Finish colour. Affects materials only, never geometry.
    Color {
        #[default]
        Chrome => "Chrome",
        Black => "Black",
        White => "White",
        StainlessSteel => "Stainless Steel" | "stainless",
        Bronze => "Bronze",
        Zinc => "Zinc",
    }
}

choice_enum! {
    /// Wire grid style; selects spacing, thickness and segment density.
    ShelfStyle {
        #[default]
        IndustrialGrid => "Industrial Grid" | "industrial",
        MetroClassic => "Metro Classic" | "metro",
        CommercialPro => "Commercial Pro" | "commercial",
        HeavyDuty => "Heavy Duty" | "heavy",
    }
}

choice_enum! {
    /// Post mounting. Mobile units get casters.
    PostType {
        #[default]
        Stationary => "Stationary" | "fixed",
        Mobile => "Mobile" | "casters" | "wheels",
    }
}

choice_enum! {
    /// Optional enclosure panels.
    EnclosureType {
        #[default]
        None => "None" | "no" | "open",
        Top => "Top",
        Sides => "Sides" | "side",
        Back => "Back",
        Full => "Full" | "complete",
    }
}

impl EnclosureType {
    /// Returns true if the left and right faces are panelled.
    pub fn has_sides(self) -> bool {
        matches!(self, EnclosureType::Sides | EnclosureType::Full)
    }

    /// Returns true if the back face is panelled.
    pub fn has_back(self) -> bool {
        matches!(self, EnclosureType::Back | EnclosureType::Full)
    }

    /// Returns true if a top panel is fitted.
    pub fn has_top(self) -> bool {
        matches!(self, EnclosureType::Top)
    }
}

/// Surface appearance handed to the renderer alongside the scene.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Finish {
    /// Packed `0xRRGGBB` base colour.
    pub rgb: u32,
    /// PBR metalness in `[0, 1]`.
    pub metalness: f32,
    /// PBR roughness in `[0, 1]`.
    pub roughness: f32,
}

impl Finish {
    /// Base colour as linear `[r, g, b]` in `[0, 1]`.
    pub fn rgb_f32(&self) -> [f32; 3] {
        [
            ((self.rgb >> 16) & 0xff) as f32 / 255.0,
            ((self.rgb >> 8) & 0xff) as f32 / 255.0,
            (self.rgb & 0xff) as f32 / 255.0,
        ]
    }
}

impl Color {
    /// Renderer finish for this colour.
    pub fn finish(self) -> Finish {
        let (rgb, metalness, roughness) = match self {
            Color::Chrome => (0xc0c0c0, 0.9, 0.1),
            Color::StainlessSteel => (0xb8b8b8, 0.8, 0.2),
            Color::Black => (0x2a2a2a, 0.7, 0.3),
            Color::White => (0xf5f5f5, 0.1, 0.4),
            Color::Zinc => (0xa8a8a8, 0.6, 0.3),
            Color::Bronze => (0xcd7f32, 0.8, 0.3),
        };
        Finish {
            rgb,
            metalness,
            roughness,
        }
    }
}

/// One of the four dimensions required before geometry can be generated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequiredField {
    Width,
    Length,
    PostHeight,
    NumberOfShelves,
}

impl fmt::Display for RequiredField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            RequiredField::Width => "width",
            RequiredField::Length => "length",
            RequiredField::PostHeight => "height",
            RequiredField::NumberOfShelves => "number of shelves",
        })
    }
}

/// Canonical shelf configuration.
///
/// Lengths are in inches. Zero means "not provided".
///
/// # Example
///
/// ```rust
/// use shelf_params::ShelfParameters;
///
/// let params = ShelfParameters::new(36.0, 18.0, 72.0, 4);
/// assert!(params.is_ready());
/// assert!(!ShelfParameters::default().is_ready());
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ShelfParameters {
    pub width: f64,
    pub length: f64,
    pub post_height: f64,
    pub number_of_shelves: u32,
    pub color: Color,
    pub shelf_style: ShelfStyle,
    pub solid_bottom_shelf: bool,
    pub post_type: PostType,
    pub shelf_dividers_count: u32,
    /// 1-based shelf indices that receive dividers.
    pub shelf_dividers_shelves: BTreeSet<u32>,
    pub enclosure_type: EnclosureType,
}

impl ShelfParameters {
    /// Creates parameters with the four required dimensions and defaults
    /// for everything else.
    pub fn new(width: f64, length: f64, post_height: f64, number_of_shelves: u32) -> Self {
        Self {
            width,
            length,
            post_height,
            number_of_shelves,
            ..Self::default()
        }
    }

    /// Lists the required dimensions that are missing or non-positive.
    pub fn missing_required(&self) -> Vec<RequiredField> {
        let usable = |v: f64| v.is_finite() && v > 0.0;
        let mut missing = Vec::new();
        if !usable(self.width) {
            missing.push(RequiredField::Width);
        }
        if !usable(self.length) {
            missing.push(RequiredField::Length);
        }
        if !usable(self.post_height) {
            missing.push(RequiredField::PostHeight);
        }
        if self.number_of_shelves == 0 {
            missing.push(RequiredField::NumberOfShelves);
        }
        missing
    }

    /// Returns true once all required dimensions are present and positive.
    pub fn is_ready(&self) -> bool {
        self.missing_required().is_empty()
    }

    /// Vertical distance between consecutive shelf levels.
    pub fn shelf_spacing(&self) -> f64 {
        self.post_height / (self.number_of_shelves as f64 + 1.0)
    }

    /// Height of shelf level `index` (0-based).
    pub fn shelf_y(&self, index: u32) -> f64 {
        (index as f64 + 1.0) * self.shelf_spacing()
    }

    /// Divider target shelves that fall inside `[1, number_of_shelves]`.
    pub fn divider_shelves_in_range(&self) -> impl Iterator<Item = u32> + '_ {
        let max = self.number_of_shelves;
        self.shelf_dividers_shelves
            .iter()
            .copied()
            .filter(move |&shelf| shelf >= 1 && shelf <= max)
    }

    /// Deterministic export file stem, e.g. `shelf_36x18x72_4shelves`.
    pub fn export_file_stem(&self) -> String {
        format!(
            "shelf_{}x{}x{}_{}shelves",
            self.width, self.length, self.post_height, self.number_of_shelves
        )
    }
}
