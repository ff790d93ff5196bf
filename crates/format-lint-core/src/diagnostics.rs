//! Diagnostic records and the builder that turns scanner matches into them.
//!
//! # Example
//!
//! ```
//! use format_lint_core::diagnostics::{AllowList, DiagnosticSeverity, check_text};
//!
//! let diagnostics = check_text("capture({ format: 'gif' });", &AllowList::default()).unwrap();
//! assert_eq!(diagnostics.len(), 1);
//! assert_eq!(diagnostics[0].severity, DiagnosticSeverity::Warning);
//! assert!(diagnostics[0].message.contains("gif"));
//! ```

use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::LintResult;
use crate::position::{PositionIndex, Range};
use crate::scanner::{self, FormatMatch};

/// Source tag attached to every diagnostic this crate produces.
pub const DIAGNOSTIC_SOURCE: &str = "format-lint";

/// Rule code for a disallowed `format` value.
pub const INVALID_FORMAT_CODE: &str = "invalid-format";

/// Values accepted when no allow-list is configured.
pub const DEFAULT_ALLOWED_VALUES: &[&str] = &["png", "jpeg", "webp"];

/// Diagnostic severity levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum DiagnosticSeverity {
    /// Error diagnostics.
    Error,
    /// Warning diagnostics.
    Warning,
    /// Informational diagnostics.
    Information,
    /// Hint diagnostics.
    Hint,
}

impl DiagnosticSeverity {
    /// Returns the severity as a lowercase string slice.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warning => "warning",
            Self::Information => "information",
            Self::Hint => "hint",
        }
    }
}

impl fmt::Display for DiagnosticSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single positioned report about a document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Diagnostic {
    /// How serious the issue is.
    pub severity: DiagnosticSeverity,
    /// Span the diagnostic applies to.
    pub range: Range,
    /// Human-readable description.
    pub message: String,
    /// Tool that produced the diagnostic.
    pub source: String,
    /// Stable rule identifier.
    pub code: String,
}

impl Diagnostic {
    /// Warning for a `format` value that is not in `allow_list`.
    pub fn invalid_format(value: &str, range: Range, allow_list: &AllowList) -> Self {
        Self {
            severity: DiagnosticSeverity::Warning,
            range,
            message: format!("Invalid format '{value}'. Allowed formats: {allow_list}."),
            source: DIAGNOSTIC_SOURCE.to_string(),
            code: INVALID_FORMAT_CODE.to_string(),
        }
    }
}

/// Ordered set of accepted `format` values.
///
/// Membership is exact and case-sensitive. Duplicates are dropped, keeping the
/// first occurrence, so the configured order is what messages enumerate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AllowList {
    values: Vec<String>,
}

impl AllowList {
    /// Build an allow-list from values in their configured order.
    pub fn new<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut deduped: Vec<String> = Vec::new();
        for value in values {
            let value = value.into();
            if !deduped.contains(&value) {
                deduped.push(value);
            }
        }
        Self { values: deduped }
    }

    /// Returns `true` if `value` is accepted.
    pub fn contains(&self, value: &str) -> bool {
        self.values.iter().any(|v| v == value)
    }

    /// Accepted values in configured order.
    pub fn values(&self) -> &[String] {
        &self.values
    }

    /// Number of accepted values.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if nothing is accepted.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl Default for AllowList {
    fn default() -> Self {
        Self::new(DEFAULT_ALLOWED_VALUES.iter().copied())
    }
}

impl fmt::Display for AllowList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.values.is_empty() {
            return f.write_str("(none)");
        }
        f.write_str(&self.values.join(", "))
    }
}

/// Turn scanner matches into diagnostics, preserving match order.
///
/// `index` must have been built from the same text the matches came from.
pub fn build_diagnostics<'a, I>(
    index: &PositionIndex,
    matches: I,
    allow_list: &AllowList,
) -> LintResult<Vec<Diagnostic>>
where
    I: IntoIterator<Item = FormatMatch<'a>>,
{
    let mut diagnostics = Vec::new();
    for m in matches {
        if allow_list.contains(m.value) {
            continue;
        }
        let range = index.range(m.start, m.end)?;
        diagnostics.push(Diagnostic::invalid_format(m.value, range, allow_list));
    }
    Ok(diagnostics)
}

/// Scan `text` and report every `format` value outside `allow_list`.
#[tracing::instrument(skip_all, fields(text_len = text.len(), allowed = allow_list.len()))]
pub fn check_text(text: &str, allow_list: &AllowList) -> LintResult<Vec<Diagnostic>> {
    let index = PositionIndex::new(text);
    let diagnostics = build_diagnostics(&index, scanner::scan(text), allow_list)?;
    tracing::debug!(count = diagnostics.len(), "format literals checked");
    Ok(diagnostics)
}
