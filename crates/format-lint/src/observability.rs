//! Logging setup for the CLI.
//!
//! Human-readable logs go to stderr (stdout is reserved for command output
//! and the MCP transport). JSONL logs additionally go to a file when a log
//! target is known:
//!
//! 1. `FORMAT_LINT_LOG_PATH`: exact file path
//! 2. `FORMAT_LINT_LOG_DIR`: directory of daily-rotated `format-lint.<date>.jsonl` files
//! 3. `log_dir` from configuration
//! 4. the platform local data dir (`~/.local/share/format-lint/logs`)
//!
//! A target that cannot be created disables file logging instead of failing.

use std::path::PathBuf;

use anyhow::Context;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::prelude::*;

const LOG_PATH_ENV: &str = "FORMAT_LINT_LOG_PATH";
const LOG_DIR_ENV: &str = "FORMAT_LINT_LOG_DIR";
const LOG_FILE_PREFIX: &str = "format-lint";

/// Where file logs should go, if anywhere.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LogTarget {
    /// Write to this exact file.
    File(PathBuf),
    /// Write daily-rotated files into this directory.
    Dir(PathBuf),
    /// No file logging.
    #[default]
    None,
}

/// Resolved observability settings.
#[derive(Debug, Clone, Default)]
pub struct ObservabilityConfig {
    /// File log destination.
    pub target: LogTarget,
}

impl ObservabilityConfig {
    /// Resolve from environment, then `config_log_dir`, then platform defaults.
    pub fn from_env_with_overrides(config_log_dir: Option<PathBuf>) -> Self {
        Self::resolve(
            std::env::var_os(LOG_PATH_ENV).map(PathBuf::from),
            std::env::var_os(LOG_DIR_ENV).map(PathBuf::from),
            config_log_dir,
        )
    }

    fn resolve(
        env_path: Option<PathBuf>,
        env_dir: Option<PathBuf>,
        config_dir: Option<PathBuf>,
    ) -> Self {
        let target = if let Some(path) = env_path {
            LogTarget::File(path)
        } else if let Some(dir) = env_dir.or(config_dir) {
            LogTarget::Dir(dir)
        } else if let Some(dir) = format_lint_core::config::user_data_local_dir() {
            LogTarget::Dir(dir.join("logs").into_std_path_buf())
        } else {
            LogTarget::None
        };
        Self { target }
    }
}

/// Build the log filter.
///
/// `RUST_LOG` wins; otherwise `-q` means errors only, each `-v` raises the
/// level above the configured default.
pub fn env_filter(quiet: bool, verbose: u8, default_level: &str) -> EnvFilter {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return filter;
    }
    let level = if quiet {
        "error"
    } else {
        match verbose {
            0 => default_level,
            1 => "debug",
            _ => "trace",
        }
    };
    EnvFilter::new(level)
}

/// Install the global subscriber.
///
/// Keep the returned guard alive for the life of the process so buffered file
/// logs are flushed on exit.
pub fn init_observability(
    config: &ObservabilityConfig,
    filter: EnvFilter,
) -> anyhow::Result<Option<WorkerGuard>> {
    let (file_layer, guard) = match file_writer(&config.target) {
        Some((writer, guard)) => {
            let layer = tracing_subscriber::fmt::layer()
                .json()
                .with_writer(writer)
                .with_current_span(true);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact();

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .with(file_layer)
        .try_init()
        .context("failed to install tracing subscriber")?;

    Ok(guard)
}

fn file_writer(
    target: &LogTarget,
) -> Option<(tracing_appender::non_blocking::NonBlocking, WorkerGuard)> {
    let (dir, builder) = match target {
        LogTarget::File(path) => {
            let dir = path.parent().filter(|p| !p.as_os_str().is_empty())?;
            let name = path.file_name()?.to_str()?;
            let builder = RollingFileAppender::builder()
                .rotation(Rotation::NEVER)
                .filename_prefix(name);
            (dir, builder)
        }
        LogTarget::Dir(dir) => {
            let builder = RollingFileAppender::builder()
                .rotation(Rotation::DAILY)
                .filename_prefix(LOG_FILE_PREFIX)
                .filename_suffix("jsonl");
            (dir.as_path(), builder)
        }
        LogTarget::None => return None,
    };
    std::fs::create_dir_all(dir).ok()?;
    let appender = builder.build(dir).ok()?;
    Some(tracing_appender::non_blocking(appender))
}
