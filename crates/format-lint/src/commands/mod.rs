//! Command implementations.

use anyhow::Context;
use camino::Utf8Path;
use format_lint_core::lint;

pub mod check;
pub mod info;
#[cfg(feature = "mcp")]
pub mod serve;

/// Read a file after validating its size against the configured limit.
pub fn read_input_file(path: &Utf8Path, max_bytes: Option<usize>) -> anyhow::Result<String> {
    // Preflight: check file size via metadata before reading into memory.
    let metadata =
        std::fs::metadata(path.as_std_path()).with_context(|| format!("failed to read {path}"))?;
    let size = usize::try_from(metadata.len()).unwrap_or(usize::MAX);
    lint::check_input_size(size, max_bytes).with_context(|| format!("cannot check {path}"))?;

    std::fs::read_to_string(path.as_std_path()).with_context(|| format!("failed to read {path}"))
}
