//! Versioned document snapshots handed to the engine by an editor integration.

use serde::{Deserialize, Serialize};

/// An immutable snapshot of one document version.
///
/// The hosting layer owns documents and hands a fresh snapshot to the engine
/// on open and on every change; the engine never mutates or retains it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    uri: String,
    language_id: String,
    version: i32,
    text: String,
}

impl Document {
    /// Create a snapshot.
    pub fn new(
        uri: impl Into<String>,
        language_id: impl Into<String>,
        version: i32,
        text: impl Into<String>,
    ) -> Self {
        Self {
            uri: uri.into(),
            language_id: language_id.into(),
            version,
            text: text.into(),
        }
    }

    /// Document identifier.
    pub fn uri(&self) -> &str {
        &self.uri
    }

    /// Language tag (e.g. `typescript`).
    pub fn language_id(&self) -> &str {
        &self.language_id
    }

    /// Version number; increases with every change.
    pub const fn version(&self) -> i32 {
        self.version
    }

    /// Full text content.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Next version of this document with `text` replacing the content.
    #[must_use]
    pub fn with_text(&self, text: impl Into<String>) -> Self {
        Self {
            uri: self.uri.clone(),
            language_id: self.language_id.clone(),
            version: self.version.saturating_add(1),
            text: text.into(),
        }
    }
}

/// Guess a language id from a file extension.
///
/// Unknown or missing extensions map to `plaintext`.
pub fn language_id_for_extension(ext: Option<&str>) -> &'static str {
    match ext {
        Some("ts" | "mts" | "cts") => "typescript",
        Some("tsx") => "typescriptreact",
        Some("js" | "mjs" | "cjs") => "javascript",
        Some("jsx") => "javascriptreact",
        Some("json") => "json",
        Some("yaml" | "yml") => "yaml",
        Some("toml") => "toml",
        Some("md") => "markdown",
        _ => "plaintext",
    }
}
