//! # Free-Text Extraction
//!
//! Keyword and pattern extraction of shelf parameters from a conversational
//! message such as *"I need a 36 inch wide, 18 deep, 72 tall unit with 4
//! shelves in black, on casters"*.
//!
//! Only fields the text actually mentions are overwritten; everything else is
//! carried over from the current parameters.

use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;

use crate::normalize::normalize_onto;
use crate::types::{Color, EnclosureType, PostType, ShelfParameters, ShelfStyle};

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).unwrap_or_else(|e| panic!("invalid extraction pattern {pattern:?}: {e}"))
}

const UNIT: &str = r#"\s*(?:inches|inch|in\b|"|''|′)?\s*"#;

static WIDTH: LazyLock<Regex> = LazyLock::new(|| {
    compile(&format!(
        r"(\d+(?:\.\d+)?){UNIT}(?:wide|width)|width\s*(?:of|is|:|=)?\s*(\d+(?:\.\d+)?)"
    ))
});
static LENGTH: LazyLock<Regex> = LazyLock::new(|| {
    compile(&format!(
        r"(\d+(?:\.\d+)?){UNIT}(?:long|length|deep|depth)|(?:length|depth)\s*(?:of|is|:|=)?\s*(\d+(?:\.\d+)?)"
    ))
});
static HEIGHT: LazyLock<Regex> = LazyLock::new(|| {
    compile(&format!(
        r"(\d+(?:\.\d+)?){UNIT}(?:tall|high|height)|height\s*(?:of|is|:|=)?\s*(\d+(?:\.\d+)?)"
    ))
});
static SHELVES: LazyLock<Regex> =
    LazyLock::new(|| compile(r"(\d+)\s*(?:shelves|shelf|levels|level|tiers|tier)\b"));
static DIVIDERS: LazyLock<Regex> = LazyLock::new(|| compile(r"(\d+)\s*dividers?\b"));
static ENTITIES_BLOCK: LazyLock<Regex> =
    LazyLock::new(|| compile(r"(?is)ENTITIES_EXTRACTED:\s*(\{.*\})"));

const COLOR_WORDS: &[(&str, Color)] = &[
    ("stainless steel", Color::StainlessSteel),
    ("stainless", Color::StainlessSteel),
    ("chrome", Color::Chrome),
    ("black", Color::Black),
    ("white", Color::White),
    ("bronze", Color::Bronze),
    ("zinc", Color::Zinc),
];

const STYLE_PHRASES: &[(&str, ShelfStyle)] = &[
    ("industrial grid", ShelfStyle::IndustrialGrid),
    ("metro classic", ShelfStyle::MetroClassic),
    ("commercial pro", ShelfStyle::CommercialPro),
    ("heavy duty", ShelfStyle::HeavyDuty),
    ("heavy-duty", ShelfStyle::HeavyDuty),
];

const STYLE_HINTS: &[(&str, ShelfStyle)] = &[
    ("heavy", ShelfStyle::HeavyDuty),
    ("commercial", ShelfStyle::CommercialPro),
    ("professional", ShelfStyle::CommercialPro),
    ("industrial", ShelfStyle::IndustrialGrid),
    ("warehouse", ShelfStyle::IndustrialGrid),
    ("metro", ShelfStyle::MetroClassic),
];

fn first_number(re: &Regex, text: &str) -> Option<f64> {
    let caps = re.captures(text)?;
    caps.iter()
        .skip(1)
        .flatten()
        .find_map(|m| m.as_str().parse::<f64>().ok())
}

/// Returns the word whose first occurrence is earliest in `text`.
fn earliest<T: Copy>(text: &str, table: &[(&str, T)]) -> Option<T> {
    table
        .iter()
        .filter_map(|(word, value)| text.find(word).map(|pos| (pos, *value)))
        .min_by_key(|(pos, _)| *pos)
        .map(|(_, value)| value)
}

fn contains_any(text: &str, words: &[&str]) -> bool {
    words.iter().any(|word| text.contains(word))
}

/// Extracts parameters mentioned in `text` and overlays them onto `current`.
///
/// # Example
///
/// ```rust
/// use shelf_params::{extract_from_text, PostType, ShelfParameters};
///
/// let params = extract_from_text(
///     "36 inches wide, 18 deep and 72 tall with 4 shelves, on wheels",
///     &ShelfParameters::default(),
/// );
/// assert_eq!(params.width, 36.0);
/// assert_eq!(params.length, 18.0);
/// assert_eq!(params.post_height, 72.0);
/// assert_eq!(params.number_of_shelves, 4);
/// assert_eq!(params.post_type, PostType::Mobile);
/// ```
pub fn extract_from_text(text: &str, current: &ShelfParameters) -> ShelfParameters {
    let text = text.to_lowercase();
    let mut params = current.clone();

    if let Some(width) = first_number(&WIDTH, &text) {
        params.width = width;
    }
    if let Some(length) = first_number(&LENGTH, &text) {
        params.length = length;
    }
    if let Some(height) = first_number(&HEIGHT, &text) {
        params.post_height = height;
    }
    if let Some(shelves) = first_number(&SHELVES, &text) {
        params.number_of_shelves = shelves as u32;
    }

    if let Some(color) = earliest(&text, COLOR_WORDS) {
        params.color = color;
    }
    if let Some(style) = earliest(&text, STYLE_PHRASES).or_else(|| earliest(&text, STYLE_HINTS)) {
        params.shelf_style = style;
    }

    if contains_any(&text, &["mobile", "caster", "wheel"]) {
        params.post_type = PostType::Mobile;
    } else if contains_any(&text, &["stationary", "fixed"]) {
        params.post_type = PostType::Stationary;
    }

    if contains_any(&text, &["wire bottom", "no solid"]) {
        params.solid_bottom_shelf = false;
    } else if contains_any(
        &text,
        &["solid bottom", "solid shelf", "small parts", "small items"],
    ) {
        params.solid_bottom_shelf = true;
    }

    if contains_any(&text, &["divider", "organiz"]) {
        params.shelf_dividers_count = first_number(&DIVIDERS, &text)
            .map(|n| n as u32)
            .unwrap_or(2);
        if params.shelf_dividers_shelves.is_empty() {
            params.shelf_dividers_shelves = [1, 2].into_iter().collect();
        }
    }

    if contains_any(&text, &["no enclosure", "open frame"]) {
        params.enclosure_type = EnclosureType::None;
    } else if contains_any(&text, &["enclos", "protect", "dust", "panel"]) {
        params.enclosure_type = if contains_any(&text, &["full", "complete"]) {
            EnclosureType::Full
        } else if contains_any(&text, &["back", "wall"]) {
            EnclosureType::Back
        } else if contains_any(&text, &["top", "lid"]) {
            EnclosureType::Top
        } else {
            EnclosureType::Sides
        };
    }

    params
}

/// Applies a trailing `ENTITIES_EXTRACTED: {...}` block from an assistant
/// reply onto `current`. Returns `current` unchanged when there is no block or
/// its body is not valid JSON.
pub fn apply_entities_block(response: &str, current: &ShelfParameters) -> ShelfParameters {
    let Some(body) = ENTITIES_BLOCK
        .captures(response)
        .and_then(|caps| caps.get(1))
    else {
        return current.clone();
    };
    match serde_json::from_str::<Value>(body.as_str()) {
        Ok(value) => normalize_onto(current, &value),
        Err(err) => {
            tracing::warn!(%err, "malformed entities block, ignoring");
            current.clone()
        }
    }
}

/// Runs [`apply_entities_block`] and then [`extract_from_text`] over the
/// same reply, the way the chat collaborator's responses are consumed.
pub fn extract_from_response(response: &str, current: &ShelfParameters) -> ShelfParameters {
    let structured = apply_entities_block(response, current);
    let prose = ENTITIES_BLOCK.replace(response, "");
    extract_from_text(&prose, &structured)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn empty() -> ShelfParameters {
        ShelfParameters::default()
    }

    #[test]
    fn test_dimension_patterns() {
        let params = extract_from_text("48\" wide, 24 inches deep, 84 in tall", &empty());
        assert_eq!(params.width, 48.0);
        assert_eq!(params.length, 24.0);
        assert_eq!(params.post_height, 84.0);
    }

    #[test]
    fn test_width_of_phrase() {
        let params = extract_from_text("Width of 30 please", &empty());
        assert_eq!(params.width, 30.0);
    }

    #[test]
    fn test_shelf_count() {
        assert_eq!(extract_from_text("5 tiers", &empty()).number_of_shelves, 5);
        assert_eq!(extract_from_text("I need 3 shelves", &empty()).number_of_shelves, 3);
    }

    #[test]
    fn test_unmentioned_fields_are_kept() {
        let current = ShelfParameters::new(36.0, 18.0, 72.0, 4);
        let params = extract_from_text("make it black", &current);
        assert_eq!(params.width, 36.0);
        assert_eq!(params.number_of_shelves, 4);
        assert_eq!(params.color, Color::Black);
    }

    #[test]
    fn test_earliest_color_wins() {
        let params = extract_from_text("stainless steel, not white", &empty());
        assert_eq!(params.color, Color::StainlessSteel);
    }

    #[test]
    fn test_style_phrases_and_hints() {
        assert_eq!(
            extract_from_text("metro classic look", &empty()).shelf_style,
            ShelfStyle::MetroClassic
        );
        assert_eq!(
            extract_from_text("for a warehouse", &empty()).shelf_style,
            ShelfStyle::IndustrialGrid
        );
        assert_eq!(
            extract_from_text("nothing relevant", &empty()).shelf_style,
            ShelfStyle::IndustrialGrid
        );
    }

    #[test]
    fn test_post_type_keywords() {
        assert_eq!(extract_from_text("with casters", &empty()).post_type, PostType::Mobile);
        let mobile = ShelfParameters {
            post_type: PostType::Mobile,
            ..empty()
        };
        assert_eq!(
            extract_from_text("keep it fixed", &mobile).post_type,
            PostType::Stationary
        );
    }

    #[test]
    fn test_solid_bottom_keywords() {
        assert!(extract_from_text("for small parts", &empty()).solid_bottom_shelf);
        let solid = ShelfParameters {
            solid_bottom_shelf: true,
            ..empty()
        };
        assert!(!extract_from_text("wire bottom is fine", &solid).solid_bottom_shelf);
    }

    #[test]
    fn test_dividers_default_to_two_on_lower_shelves() {
        let params = extract_from_text("help me organize", &empty());
        assert_eq!(params.shelf_dividers_count, 2);
        assert_eq!(params.shelf_dividers_shelves, [1, 2].into_iter().collect());

        let params = extract_from_text("add 3 dividers", &empty());
        assert_eq!(params.shelf_dividers_count, 3);
    }

    #[test]
    fn test_enclosure_keywords() {
        let kind = |text: &str| extract_from_text(text, &empty()).enclosure_type;
        assert_eq!(kind("fully enclosed, complete protection"), EnclosureType::Full);
        assert_eq!(kind("dust panel against the wall"), EnclosureType::Back);
        assert_eq!(kind("enclosure with a lid"), EnclosureType::Top);
        assert_eq!(kind("protect it"), EnclosureType::Sides);
        assert_eq!(kind("no enclosure"), EnclosureType::None);
    }

    #[test]
    fn test_entities_block() {
        let reply = "Great choice!\nENTITIES_EXTRACTED: {\"width\": 40, \"postType\": \"Mobile\"}";
        let params = apply_entities_block(reply, &empty());
        assert_eq!(params.width, 40.0);
        assert_eq!(params.post_type, PostType::Mobile);
    }

    #[test]
    fn test_malformed_entities_block_is_ignored() {
        let current = ShelfParameters::new(36.0, 18.0, 72.0, 4);
        let params = apply_entities_block("ENTITIES_EXTRACTED: {width: }", &current);
        assert_eq!(params, current);
    }

    #[test]
    fn test_extract_from_response_combines_both() {
        let reply = "Let's do 5 shelves.\nENTITIES_EXTRACTED: {\"width\": 30}";
        let params = extract_from_response(reply, &empty());
        assert_eq!(params.width, 30.0);
        assert_eq!(params.number_of_shelves, 5);
    }
}
