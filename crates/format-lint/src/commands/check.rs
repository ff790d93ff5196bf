//! Check command: report disallowed `format` values in files.
//!
//! Each file is checked on its own. The allow-list comes from `--allow` when
//! given, else from the most specific configured override, else from
//! `allowed_values`. This is the CLI counterpart of the `check_formats` MCP
//! tool.
//!
//! A file that cannot be read or checked is reported on stderr and skipped;
//! the remaining files are still checked and printed.

use anyhow::{Context, bail};
use camino::{Utf8Path, Utf8PathBuf};
use clap::Args;
use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::{OwoColorize, Stream};
use serde::Serialize;
use tracing::{debug, instrument, warn};

use format_lint_core::config::Config;
use format_lint_core::diagnostics::AllowList;
use format_lint_core::document::{self, Document};
use format_lint_core::lint::{self, DocumentReport};
use format_lint_core::overrides::OverrideSet;

use super::read_input_file;

/// Show a progress bar when checking more files than this.
const PROGRESS_THRESHOLD: usize = 20;

/// Result of checking one file, as emitted in JSON mode.
#[derive(Serialize)]
#[serde(untagged)]
enum FileOutcome {
    Checked(DocumentReport),
    Failed { uri: String, error: String },
}

/// Arguments for the `check` subcommand.
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Files to check.
    #[arg(required = true)]
    pub files: Vec<Utf8PathBuf>,

    /// Accepted value (repeatable). Replaces configured allow-lists and overrides.
    #[arg(long = "allow", value_name = "VALUE")]
    pub allow: Vec<String>,
}

/// Check files for `format` values outside the allow-list.
#[instrument(name = "cmd_check", skip_all, fields(files = args.files.len()))]
pub fn cmd_check(args: CheckArgs, global_json: bool, config: &Config) -> anyhow::Result<()> {
    debug!(files = args.files.len(), allow = ?args.allow, "executing check command");

    let (default_allow, overrides) = if args.allow.is_empty() {
        let overrides = config
            .overrides
            .as_deref()
            .map(OverrideSet::compile)
            .unwrap_or_default();
        (config.allow_list(), overrides)
    } else {
        (AllowList::new(args.allow.iter().cloned()), OverrideSet::default())
    };
    let max_input = config.input_limit();

    let progress = if !global_json && args.files.len() > PROGRESS_THRESHOLD {
        let bar = ProgressBar::new(args.files.len() as u64);
        bar.set_style(
            ProgressStyle::with_template("{spinner} [{bar:30}] {pos}/{len} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_bar()),
        );
        bar
    } else {
        ProgressBar::hidden()
    };

    let mut outcomes = Vec::with_capacity(args.files.len());
    for path in &args.files {
        progress.set_message(path.to_string());
        let allow = overrides.allow_list_for(path.as_str(), &default_allow);
        match check_file(path, allow, max_input) {
            Ok(report) => outcomes.push(FileOutcome::Checked(report)),
            Err(err) => {
                warn!(%path, error = %format!("{err:#}"), "file could not be checked");
                progress.suspend(|| {
                    eprintln!(
                        "{}: {}: {err:#}",
                        path.if_supports_color(Stream::Stderr, |t| t.bold()),
                        "error".if_supports_color(Stream::Stderr, |t| t.red()),
                    );
                });
                outcomes.push(FileOutcome::Failed {
                    uri: path.to_string(),
                    error: format!("{err:#}"),
                });
            }
        }
        progress.inc(1);
    }
    progress.finish_and_clear();

    let failed = outcomes
        .iter()
        .filter(|o| matches!(o, FileOutcome::Failed { .. }))
        .count();

    if global_json {
        println!("{}", serde_json::to_string_pretty(&outcomes)?);
        if failed > 0 {
            bail!("{failed} file(s) could not be checked");
        }
        return Ok(());
    }

    let reports: Vec<&DocumentReport> = outcomes
        .iter()
        .filter_map(|o| match o {
            FileOutcome::Checked(report) => Some(report),
            FileOutcome::Failed { .. } => None,
        })
        .collect();
    let total = print_reports(&reports);

    let mut problems = Vec::new();
    if total > 0 {
        problems.push(format!(
            "{total} invalid format value{} found in {} file(s)",
            if total == 1 { "" } else { "s" },
            reports.iter().filter(|r| !r.pass).count()
        ));
    }
    if failed > 0 {
        problems.push(format!("{failed} file(s) could not be checked"));
    }
    if !problems.is_empty() {
        bail!("{}", problems.join("; "));
    }

    println!(
        "{} {} file(s) checked, no invalid format values",
        "OK:".if_supports_color(Stream::Stdout, |t| t.green()),
        reports.len()
    );
    Ok(())
}

/// Read and check one file.
fn check_file(
    path: &Utf8Path,
    allow: &AllowList,
    max_input: Option<usize>,
) -> anyhow::Result<DocumentReport> {
    let text = read_input_file(path, max_input)?;
    let doc = Document::new(
        path.as_str(),
        document::language_id_for_extension(path.extension()),
        0,
        text,
    );
    lint::check_document(&doc, allow).with_context(|| format!("failed to check {path}"))
}

/// Print diagnostics as `path:line:col: severity[code]: message` (1-based).
///
/// Returns the number of diagnostics printed.
fn print_reports(reports: &[&DocumentReport]) -> usize {
    let mut total = 0;
    for report in reports {
        for d in &report.diagnostics {
            println!(
                "{}:{}:{}: {}[{}]: {}",
                report.uri.if_supports_color(Stream::Stdout, |t| t.bold()),
                d.range.start.line + 1,
                d.range.start.character + 1,
                d.severity.if_supports_color(Stream::Stdout, |t| t.yellow()),
                d.code.if_supports_color(Stream::Stdout, |t| t.dimmed()),
                d.message
            );
            total += 1;
        }
    }
    total
}
