//! Lint execution entry point.
//!
//! Runs the `format` literal check over a [`Document`] and packages the
//! diagnostics with the document identity they belong to.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::diagnostics::{self, AllowList, Diagnostic};
use crate::document::Document;
use crate::error::{LintError, LintResult};

/// Diagnostics for one document version.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct DocumentReport {
    /// Document that was checked.
    pub uri: String,
    /// Language tag of the document.
    pub language_id: String,
    /// Version the diagnostics apply to.
    pub version: i32,
    /// Diagnostics in document order.
    pub diagnostics: Vec<Diagnostic>,
    /// `true` when no diagnostics were produced.
    pub pass: bool,
}

/// Check one document snapshot against `allow_list`.
#[tracing::instrument(skip_all, fields(uri = document.uri(), version = document.version()))]
pub fn check_document(document: &Document, allow_list: &AllowList) -> LintResult<DocumentReport> {
    let diagnostics = diagnostics::check_text(document.text(), allow_list)?;
    let pass = diagnostics.is_empty();
    tracing::debug!(count = diagnostics.len(), pass, "document checked");
    Ok(DocumentReport {
        uri: document.uri().to_string(),
        language_id: document.language_id().to_string(),
        version: document.version(),
        diagnostics,
        pass,
    })
}

/// Reject input larger than `limit` bytes. `None` means unlimited.
pub const fn check_input_size(size: usize, limit: Option<usize>) -> LintResult<()> {
    match limit {
        Some(limit) if size > limit => Err(LintError::InputTooLarge { size, limit }),
        _ => Ok(()),
    }
}
