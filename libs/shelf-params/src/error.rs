//! # Parameter Errors
//!
//! Error types for the strict parameter entry points. The lenient
//! normalization path never returns these; it falls back to defaults.

use thiserror::Error;

/// Errors raised by strict parameter parsing.
#[derive(Debug, Error)]
pub enum ParamsError {
    /// Input text was not JSON at all.
    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// A named choice did not match any known variant.
    #[error("Unknown {field} value: {value:?}")]
    UnknownChoice { field: &'static str, value: String },
}

/// Problems found by [`ShelfParameters::validate`](crate::ShelfParameters::validate).
///
/// These are informational; generation still proceeds.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParamIssue {
    /// A dimension is outside the range the configurator offers.
    #[error("{field} = {value} is outside {min}..={max}")]
    OutOfRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    /// A divider target names a shelf that does not exist.
    #[error("divider shelf {shelf} is outside 1..={shelves}")]
    DividerShelfOutOfRange { shelf: u32, shelves: u32 },

    /// More dividers were requested than fit the configurator's limit.
    #[error("{count} dividers exceeds the limit of {max}")]
    TooManyDividers { count: u32, max: u32 },

    /// Dividers were requested but no shelf was selected.
    #[error("{count} dividers requested but no shelf selected")]
    DividersWithoutShelves { count: u32 },
}
