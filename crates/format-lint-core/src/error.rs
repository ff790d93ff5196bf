//! Error types for format-lint-core.

use thiserror::Error;

/// Errors that can occur when working with configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to deserialize configuration.
    #[error("invalid configuration: {0}")]
    Deserialize(#[from] Box<figment::Error>),
}

/// Result type alias using [`ConfigError`].
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors that can occur while checking a document.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LintError {
    /// A character offset outside `0..=len` was passed to the position index.
    ///
    /// Only offsets produced by the scanner for the same text are valid, so
    /// this indicates a caller bug rather than bad input.
    #[error("offset {offset} is out of bounds for text of {len} characters")]
    OffsetOutOfBounds {
        /// The offset that was requested.
        offset: usize,
        /// Length of the indexed text, in characters.
        len: usize,
    },

    /// The input exceeds the configured size limit.
    #[error("input too large: {size} bytes (limit: {limit} bytes)")]
    InputTooLarge {
        /// Size of the rejected input, in bytes.
        size: usize,
        /// Configured limit, in bytes.
        limit: usize,
    },
}

/// Result type alias using [`LintError`].
pub type LintResult<T> = Result<T, LintError>;
