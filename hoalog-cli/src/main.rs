mod commands;
mod render;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use hoalog_core::error::TimelineResult;
use hoalog_core::query::QueryParams;
use hoalog_core::site_config::SiteConfig;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "hoalog")]
#[command(about = "Browse the building's timeline of works and news")]
struct Cli {
    /// Timeline JSON file to use instead of the configured one
    #[arg(long, global = true)]
    data: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the timeline
    List {
        /// Only events on or after this date (YYYY-MM-DD)
        #[arg(long)]
        from: Option<String>,

        /// Only events on or before this date (YYYY-MM-DD)
        #[arg(long)]
        to: Option<String>,

        /// Only events of this type (maintenance, news, improvements)
        #[arg(long = "type")]
        event_type: Option<String>,

        /// Date order: desc (newest first, default) or asc
        #[arg(long)]
        sort: Option<String>,
    },
    /// Show a single event
    Show { id: String },
    /// Validate the timeline data
    Check,
}

fn main() -> Result<ExitCode> {
    // Logs go to stderr and only when asked for, so they never mix with output
    if std::env::var_os("RUST_LOG").is_some() {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_writer(std::io::stderr)
            .init();
    }

    let cli = Cli::parse();

    let config = resolve_config(cli.data, SiteConfig::load)?;

    match cli.command {
        Commands::List {
            from,
            to,
            event_type,
            sort,
        } => {
            let params = QueryParams {
                from,
                to,
                event_type,
                sort,
            };
            commands::list::run(&config, &params)?;
            Ok(ExitCode::SUCCESS)
        }
        Commands::Show { id } => commands::show::run(&config, &id),
        Commands::Check => Ok(commands::check::run(&config)),
    }
}

/// The configured site settings, with `--data` taking precedence.
///
/// With `--data` the config file is only needed for the remaining settings,
/// so a config that cannot be loaded falls back to the defaults.
fn resolve_config(
    data: Option<PathBuf>,
    load: impl FnOnce() -> TimelineResult<SiteConfig>,
) -> Result<SiteConfig> {
    let Some(data) = data else {
        return load().context("Could not load configuration");
    };

    let mut config = load().unwrap_or_else(|e| {
        tracing::warn!(error = %e, "ignoring unreadable configuration");
        SiteConfig::default()
    });
    config.data_file = Some(data);

    Ok(config)
}
