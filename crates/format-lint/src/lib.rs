//! Command-line front end for format-lint.
//!
//! The binary in `main.rs` is a thin shell around this library: it parses
//! [`Cli`], loads configuration, and hands each [`Commands`] variant to the
//! matching function in [`commands`]. Keeping the parser here lets `xtask`
//! build man pages and completions from [`command()`] and lets integration
//! tests share the same definitions.
//!
//! With the default `mcp` feature the crate also carries [`server`], which
//! exposes the same check over the Model Context Protocol.

pub mod commands;

#[cfg(feature = "mcp")]
pub mod server;

use clap::{CommandFactory, Parser, Subcommand};
use std::path::PathBuf;

/// When to colorize terminal output.
#[derive(Debug, Clone, Copy, Default, clap::ValueEnum)]
pub enum ColorChoice {
    /// Color only when the stream is a capable terminal.
    #[default]
    Auto,
    /// Color even when piped.
    Always,
    /// Plain text.
    Never,
}

impl ColorChoice {
    /// Forced color setting, or `None` to let owo-colors probe the stream.
    pub const fn forced(self) -> Option<bool> {
        match self {
            Self::Auto => None,
            Self::Always => Some(true),
            Self::Never => Some(false),
        }
    }

    /// Install this choice for every `if_supports_color` call in the process.
    pub fn apply(self) {
        match self.forced() {
            Some(enabled) => owo_colors::set_override(enabled),
            None => owo_colors::unset_override(),
        }
    }
}

const ENV_HELP: &str = "\
ENVIRONMENT VARIABLES:
    RUST_LOG                     Log filter (e.g., debug, format_lint=trace)
    FORMAT_LINT_LOG_PATH         Explicit log file path
    FORMAT_LINT_LOG_DIR          Log directory
    FORMAT_LINT_ALLOWED_VALUES   Accepted format values (e.g., \"[png, webp]\")
";

/// Top-level arguments shared by every subcommand.
#[derive(Parser)]
#[command(name = "format-lint")]
#[command(about = "Report `format` literals whose value is not on the allow-list", long_about = None)]
#[command(version, arg_required_else_help = true)]
#[command(after_long_help = ENV_HELP)]
pub struct Cli {
    /// Selected subcommand; `None` only with `--version-only`.
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Print the bare version string and exit
    #[arg(long)]
    pub version_only: bool,

    /// Extra configuration file, merged above discovered ones
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Run as if started in DIR
    #[arg(short = 'C', long, global = true)]
    pub chdir: Option<PathBuf>,

    /// Log errors only
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Raise log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// When to use color
    #[arg(long, global = true, value_enum, default_value_t)]
    pub color: ColorChoice,

    /// Machine-readable JSON on stdout
    #[arg(long, global = true)]
    pub json: bool,
}

/// Subcommands.
#[derive(Subcommand)]
pub enum Commands {
    /// Check files for disallowed `format` values
    Check(commands::check::CheckArgs),

    /// Show version and effective configuration
    Info(commands::info::InfoArgs),

    /// Serve the check as MCP tools over stdio
    #[cfg(feature = "mcp")]
    Serve(commands::serve::ServeArgs),
}

/// The fully built clap command, for man pages and shell completions.
pub fn command() -> clap::Command {
    Cli::command()
}
