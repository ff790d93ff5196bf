//! Core library for format-lint.
//!
//! Scans plain text for `format: '<value>'` literals and reports values that
//! are not on an allow-list as positioned warnings. Nothing here parses the
//! host language; matching is purely textual.
//!
//! # Modules
//!
//! - [`position`] - Offset to (line, character) mapping
//! - [`scanner`] - Lazy scanner for `format` literals
//! - [`diagnostics`] - Diagnostic records, allow-list, and the builder
//! - [`document`] - Versioned document snapshots
//! - [`lint`] - Per-document entry point and input limits
//! - [`overrides`] - Path-scoped allow-lists
//! - [`config`] - Configuration loading and management
//! - [`error`] - Error types and result aliases
//!
//! # Quick Start
//!
//! ```
//! use format_lint_core::{AllowList, Document, check_document};
//!
//! let doc = Document::new("file:///shot.ts", "typescript", 1, "capture({ format: 'gif' });");
//! let report = check_document(&doc, &AllowList::default()).unwrap();
//! assert!(!report.pass);
//! assert_eq!(report.diagnostics[0].code, "invalid-format");
//! ```
#![deny(unsafe_code)]

pub mod config;
pub mod diagnostics;
pub mod document;
pub mod error;
pub mod lint;
pub mod overrides;
pub mod position;
pub mod scanner;

pub use config::{Config, ConfigLoader, ConfigSources, LogLevel};
pub use diagnostics::{AllowList, Diagnostic, DiagnosticSeverity, check_text};
pub use document::Document;
pub use error::{ConfigError, ConfigResult, LintError, LintResult};
pub use lint::{DocumentReport, check_document};
pub use position::{Position, PositionIndex, Range};

/// Default maximum input size: 5 MiB.
pub const DEFAULT_MAX_INPUT_BYTES: usize = 5 * 1024 * 1024;
