//! WASM-compatible diagnostic types.
//!
//! Parameter readiness and range checks reported to the configurator UI.

use serde::Serialize;
use shelf_params::{ParamIssue, RequiredField, ShelfParameters};
use wasm_bindgen::prelude::*;

/// Diagnostic severity for JavaScript.
#[wasm_bindgen]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Severity {
    /// A required field is missing; nothing will be generated.
    Error,
    /// Outside the configurator's usual range; geometry is still built.
    Warning,
}

/// A diagnostic message for JavaScript.
///
/// # Examples
/// ```no_run
/// // In JavaScript:
/// // const list = check(paramsJson);
/// // const diag = list.get(0);
/// // console.log(diag.field, diag.message);
/// ```
#[wasm_bindgen]
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Diagnostic {
    severity: Severity,
    field: String,
    message: String,
}

#[wasm_bindgen]
impl Diagnostic {
    /// Returns the severity of the diagnostic.
    #[wasm_bindgen(getter)]
    pub fn severity(&self) -> Severity {
        self.severity
    }

    /// Returns the camelCase parameter name the diagnostic refers to.
    #[wasm_bindgen(getter)]
    pub fn field(&self) -> String {
        self.field.clone()
    }

    /// Returns the diagnostic message.
    #[wasm_bindgen(getter)]
    pub fn message(&self) -> String {
        self.message.clone()
    }
}

impl From<RequiredField> for Diagnostic {
    fn from(field: RequiredField) -> Self {
        let name = match field {
            RequiredField::Width => "width",
            RequiredField::Length => "length",
            RequiredField::PostHeight => "postHeight",
            RequiredField::NumberOfShelves => "numberOfShelves",
        };
        Self {
            severity: Severity::Error,
            field: name.to_string(),
            message: format!("missing {field}"),
        }
    }
}

impl From<ParamIssue> for Diagnostic {
    fn from(issue: ParamIssue) -> Self {
        let field = match &issue {
            ParamIssue::OutOfRange { field, .. } => *field,
            ParamIssue::DividerShelfOutOfRange { .. } => "shelfDividersShelves",
            ParamIssue::TooManyDividers { .. } | ParamIssue::DividersWithoutShelves { .. } => {
                "shelfDividersCount"
            }
        };
        Self {
            severity: Severity::Warning,
            field: field.to_string(),
            message: issue.to_string(),
        }
    }
}

/// A collection of diagnostics.
#[wasm_bindgen]
#[derive(Debug, Clone, Default)]
pub struct DiagnosticList {
    diagnostics: Vec<Diagnostic>,
}

#[wasm_bindgen]
impl DiagnosticList {
    /// Returns the number of diagnostics.
    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    /// Returns true if there are no diagnostics.
    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Returns a diagnostic by index.
    pub fn get(&self, index: usize) -> Option<Diagnostic> {
        self.diagnostics.get(index).cloned()
    }

    /// True when the parameters are complete enough to build.
    pub fn is_ready(&self) -> bool {
        !self
            .diagnostics
            .iter()
            .any(|d| d.severity == Severity::Error)
    }

    /// Serializes the list as a JSON array, for passing across workers.
    pub fn to_json(&self) -> String {
        serde_json::to_string(&self.diagnostics).unwrap_or_else(|_| "[]".to_string())
    }
}

impl DiagnosticList {
    /// Missing fields first, then range issues.
    pub fn for_params(params: &ShelfParameters) -> Self {
        let diagnostics = params
            .missing_required()
            .into_iter()
            .map(Diagnostic::from)
            .chain(params.validate().into_iter().map(Diagnostic::from))
            .collect();
        Self { diagnostics }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter()
    }
}
