//! `format-lint` binary.
#![deny(unsafe_code)]

use std::path::PathBuf;

use anyhow::Context;
use camino::Utf8PathBuf;
use clap::Parser;
use format_lint::{Cli, Commands, commands};
use format_lint_core::config::{Config, ConfigLoader, ConfigSources};

mod observability;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    cli.color.apply();

    if cli.version_only {
        println!("{}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }
    let Some(command) = cli.command else {
        // clap prints help before we get here unless --version-only was given
        return Ok(());
    };

    if let Some(dir) = &cli.chdir {
        std::env::set_current_dir(dir)
            .with_context(|| format!("failed to change directory to {}", dir.display()))?;
    }

    let (config, sources) = load_config(cli.config.clone())?;

    let _log_guard = observability::init_observability(
        &observability::ObservabilityConfig::from_env_with_overrides(
            config.log_dir.clone().map(Utf8PathBuf::into_std_path_buf),
        ),
        observability::env_filter(cli.quiet, cli.verbose, config.log_level.as_str()),
    )
    .context("failed to initialize logging")?;
    tracing::debug!(
        config_file = ?sources.primary_file(),
        json = cli.json,
        verbose = cli.verbose,
        "starting"
    );

    let outcome = run(command, cli.json, config, &sources);
    if let Err(err) = &outcome {
        tracing::error!(error = %format!("{err:#}"), "command failed");
    }
    outcome
}

fn run(
    command: Commands,
    json: bool,
    config: Config,
    sources: &ConfigSources,
) -> anyhow::Result<()> {
    match command {
        Commands::Check(args) => commands::check::cmd_check(args, json, &config),
        Commands::Info(args) => commands::info::cmd_info(args, json, &config, sources),
        #[cfg(feature = "mcp")]
        Commands::Serve(args) => tokio::runtime::Runtime::new()
            .context("failed to start async runtime")?
            .block_on(commands::serve::cmd_serve(args, config)),
    }
}

/// Discover project config from the working directory, plus `--config` if given.
fn load_config(explicit: Option<PathBuf>) -> anyhow::Result<(Config, ConfigSources)> {
    let cwd = utf8(std::env::current_dir().context("failed to determine current directory")?)?;
    let mut loader = ConfigLoader::new().with_project_search(&cwd);
    if let Some(path) = explicit {
        loader = loader.with_file(utf8(path)?);
    }
    loader.load().context("failed to load configuration")
}

fn utf8(path: PathBuf) -> anyhow::Result<Utf8PathBuf> {
    Utf8PathBuf::from_path_buf(path)
        .map_err(|p| anyhow::anyhow!("path is not valid UTF-8: {}", p.display()))
}
