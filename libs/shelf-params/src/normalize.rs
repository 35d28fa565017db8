//! # Input Normalization
//!
//! The single boundary where loosely-typed input becomes [`ShelfParameters`].
//!
//! Values arrive from form controls and from a text-extraction service, so a
//! width may be `36`, `"36"`, `"36 inches"` or `{"value": 36, "unit": "in"}`.
//! Each field has one coercion rule in [`FIELD_RULES`]; anything a rule cannot
//! make sense of becomes the field's zero value.
//!
//! ```text
//! serde_json::Value → FIELD_RULES → ShelfParameters
//! ```

use std::collections::BTreeSet;
use std::sync::LazyLock;

use regex::Regex;
use serde_json::{Map, Value};

use crate::error::ParamsError;
use crate::types::{Color, EnclosureType, PostType, ShelfParameters, ShelfStyle};

static NUMBER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"-?(?:\d+(?:\.\d*)?|\.\d+)(?:[eE][-+]?\d+)?")
        .unwrap_or_else(|e| panic!("invalid number pattern: {e}"))
});

/// Canonical field a rule writes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Width,
    Length,
    PostHeight,
    NumberOfShelves,
    Color,
    ShelfStyle,
    SolidBottomShelf,
    PostType,
    ShelfDividersCount,
    ShelfDividersShelves,
    EnclosureType,
}

/// How a raw value is coerced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Coercion {
    /// Non-negative finite length; malformed → `0.0`.
    Length,
    /// Non-negative integer, truncated; malformed → `0`.
    Count,
    /// Boolean; `"true"`/`"yes"`/`"1"` strings and non-zero numbers are true.
    Flag,
    /// Named choice matched leniently; unknown → the enum default.
    Choice,
    /// Set of positive 1-based indices; malformed entries dropped.
    IndexSet,
}

/// One row of the coercion table.
#[derive(Debug, Clone, Copy)]
pub struct FieldRule {
    pub field: Field,
    /// Accepted keys, canonical camelCase first.
    pub keys: &'static [&'static str],
    pub coercion: Coercion,
}

/// Per-field coercion rules.
pub const FIELD_RULES: &[FieldRule] = &[
    FieldRule {
        field: Field::Width,
        keys: &["width"],
        coercion: Coercion::Length,
    },
    FieldRule {
        field: Field::Length,
        keys: &["length", "depth"],
        coercion: Coercion::Length,
    },
    FieldRule {
        field: Field::PostHeight,
        keys: &["postHeight", "post_height", "height"],
        coercion: Coercion::Length,
    },
    FieldRule {
        field: Field::NumberOfShelves,
        keys: &["numberOfShelves", "number_of_shelves", "shelves"],
        coercion: Coercion::Count,
    },
    FieldRule {
        field: Field::Color,
        keys: &["color", "colour", "finish"],
        coercion: Coercion::Choice,
    },
    FieldRule {
        field: Field::ShelfStyle,
        keys: &["shelfStyle", "shelf_style", "style"],
        coercion: Coercion::Choice,
    },
    FieldRule {
        field: Field::SolidBottomShelf,
        keys: &["solidBottomShelf", "solid_bottom_shelf"],
        coercion: Coercion::Flag,
    },
    FieldRule {
        field: Field::PostType,
        keys: &["postType", "post_type"],
        coercion: Coercion::Choice,
    },
    FieldRule {
        field: Field::ShelfDividersCount,
        keys: &["shelfDividersCount", "shelf_dividers_count", "dividers"],
        coercion: Coercion::Count,
    },
    FieldRule {
        field: Field::ShelfDividersShelves,
        keys: &["shelfDividersShelves", "shelf_dividers_shelves"],
        coercion: Coercion::IndexSet,
    },
    FieldRule {
        field: Field::EnclosureType,
        keys: &["enclosureType", "enclosure_type", "enclosure"],
        coercion: Coercion::Choice,
    },
];

/// Unwraps `{"value": x, ...}` wrappers, however deeply nested.
fn unwrap_value(value: &Value) -> &Value {
    let mut current = value;
    while let Some(inner) = current.as_object().and_then(|obj| obj.get("value")) {
        current = inner;
    }
    current
}

/// Extracts a finite number from a number or the first number in a string.
pub fn loose_number(value: &Value) -> Option<f64> {
    let n = match unwrap_value(value) {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => NUMBER.find(s).and_then(|m| m.as_str().parse::<f64>().ok()),
        _ => None,
    }?;
    n.is_finite().then_some(n)
}

/// Coerces to a non-negative finite length.
pub fn loose_length(value: &Value) -> f64 {
    loose_number(value).filter(|n| *n >= 0.0).unwrap_or(0.0)
}

/// Coerces to a non-negative integer by truncation.
pub fn loose_count(value: &Value) -> u32 {
    loose_number(value)
        .map(f64::trunc)
        .filter(|n| *n >= 0.0)
        .map(|n| n.min(u32::MAX as f64) as u32)
        .unwrap_or(0)
}

/// Coerces to a boolean.
pub fn loose_flag(value: &Value) -> bool {
    match unwrap_value(value) {
        Value::Bool(b) => *b,
        Value::String(s) => matches!(
            s.trim().to_ascii_lowercase().as_str(),
            "true" | "yes" | "1" | "on"
        ),
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
        _ => false,
    }
}

/// Text of a choice value; numbers are stringified, everything else is absent.
fn loose_text(value: &Value) -> Option<String> {
    match unwrap_value(value) {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Coerces to a set of positive 1-based indices.
///
/// Accepts arrays of loose numbers, a single number, or a delimited string
/// such as `"1, 3"`.
pub fn loose_index_set(value: &Value) -> BTreeSet<u32> {
    let candidates: Vec<f64> = match unwrap_value(value) {
        Value::Array(items) => items.iter().filter_map(loose_number).collect(),
        Value::String(s) => NUMBER
            .find_iter(s)
            .filter_map(|m| m.as_str().parse::<f64>().ok())
            .collect(),
        other => loose_number(other).into_iter().collect(),
    };
    candidates
        .into_iter()
        .filter(|n| n.is_finite() && *n >= 1.0)
        .map(|n| n.trunc().min(u32::MAX as f64) as u32)
        .collect()
}

fn loose_choice<T: Default + Copy>(
    value: &Value,
    field: &'static str,
    parse: fn(&str) -> Option<T>,
) -> T {
    match loose_text(value) {
        Some(text) => parse(&text).unwrap_or_else(|| {
            tracing::warn!(field, value = %text, "unknown choice, using default");
            T::default()
        }),
        None => {
            if !value.is_null() {
                tracing::warn!(field, "non-text choice, using default");
            }
            T::default()
        }
    }
}

fn find_value<'a>(object: &'a Map<String, Value>, keys: &[&str]) -> Option<&'a Value> {
    keys.iter().find_map(|key| object.get(*key))
}

fn apply_rule(params: &mut ShelfParameters, rule: &FieldRule, value: &Value) {
    debug_assert!(matches!(
        (rule.field, rule.coercion),
        (Field::Width | Field::Length | Field::PostHeight, Coercion::Length)
            | (Field::NumberOfShelves | Field::ShelfDividersCount, Coercion::Count)
            | (Field::SolidBottomShelf, Coercion::Flag)
            | (Field::ShelfDividersShelves, Coercion::IndexSet)
            | (
                Field::Color | Field::ShelfStyle | Field::PostType | Field::EnclosureType,
                Coercion::Choice
            )
    ));

    match rule.field {
        Field::Width => params.width = loose_length(value),
        Field::Length => params.length = loose_length(value),
        Field::PostHeight => params.post_height = loose_length(value),
        Field::NumberOfShelves => params.number_of_shelves = loose_count(value),
        Field::Color => params.color = loose_choice(value, "color", Color::parse_loose),
        Field::ShelfStyle => {
            params.shelf_style = loose_choice(value, "shelfStyle", ShelfStyle::parse_loose)
        }
        Field::SolidBottomShelf => params.solid_bottom_shelf = loose_flag(value),
        Field::PostType => params.post_type = loose_choice(value, "postType", PostType::parse_loose),
        Field::ShelfDividersCount => params.shelf_dividers_count = loose_count(value),
        Field::ShelfDividersShelves => params.shelf_dividers_shelves = loose_index_set(value),
        Field::EnclosureType => {
            params.enclosure_type =
                loose_choice(value, "enclosureType", EnclosureType::parse_loose)
        }
    }
}

/// Overlays the fields present in `value` onto `base`.
///
/// Fields absent from `value` keep their value from `base`. A non-object
/// `value` leaves `base` untouched.
pub fn normalize_onto(base: &ShelfParameters, value: &Value) -> ShelfParameters {
    let mut params = base.clone();
    let Some(object) = value.as_object() else {
        tracing::warn!("parameter input is not an object, ignoring");
        return params;
    };
    for rule in FIELD_RULES {
        if let Some(raw) = find_value(object, rule.keys) {
            apply_rule(&mut params, rule, raw);
        }
    }
    params
}

/// Coerces arbitrary JSON into canonical parameters.
///
/// # Example
///
/// ```rust
/// use serde_json::json;
/// use shelf_params::{normalize, ShelfStyle};
///
/// let params = normalize(&json!({
///     "width": {"value": 36, "unit": "in"},
///     "length": "18 inches",
///     "postHeight": 72,
///     "numberOfShelves": "4",
///     "shelfStyle": "Heavy Duty",
///     "solidBottomShelf": "true",
/// }));
/// assert_eq!(params.width, 36.0);
/// assert_eq!(params.length, 18.0);
/// assert_eq!(params.number_of_shelves, 4);
/// assert_eq!(params.shelf_style, ShelfStyle::HeavyDuty);
/// assert!(params.solid_bottom_shelf);
/// ```
pub fn normalize(value: &Value) -> ShelfParameters {
    normalize_onto(&ShelfParameters::default(), value)
}

/// Parses JSON text and normalizes it. Only fails if the text is not JSON.
pub fn from_json_str(text: &str) -> Result<ShelfParameters, ParamsError> {
    let value: Value = serde_json::from_str(text)?;
    Ok(normalize(&value))
}
