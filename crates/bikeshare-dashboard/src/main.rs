//! Main entry point for the bike rental dashboard.

use anyhow::Context;
use bikeshare_common::init_logging;
use bikeshare_config::{Config, ConfigError, ConfigLoader};
use bikeshare_dashboard::{run_server, AppState};
use bikeshare_data::Dataset;
use clap::Parser;
use std::path::PathBuf;
use tracing::info;

/// Single-page analytics dashboard over the bike sharing rental dataset.
#[derive(Debug, Parser)]
#[command(name = "bikeshare-dashboard", version, about)]
struct Args {
    /// Configuration file (YAML, or TOML by extension)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log level or filter directive, e.g. `debug` or `bikeshare_data=trace`
    #[arg(long)]
    log_level: Option<String>,

    /// Rental CSV to load
    #[arg(long)]
    data: Option<PathBuf>,

    /// Port to listen on
    #[arg(short, long, value_parser = clap::value_parser!(u16).range(1..))]
    port: Option<u16>,
}

impl Args {
    /// Applies the overrides and validates the result.
    fn apply(self, config: &mut Config) -> Result<(), ConfigError> {
        if let Some(level) = self.log_level {
            config.logging.level = level;
        }
        if let Some(path) = self.data {
            config.data.path = path;
        }
        if let Some(port) = self.port {
            config.server.port = port;
        }
        ConfigLoader::validate(config)
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let mut args = Args::parse();

    let config_path = args.config.take();
    let mut config = match config_path {
        Some(path) => ConfigLoader::load_from_file(path)?,
        None => ConfigLoader::load()?,
    };
    args.apply(&mut config)?;

    init_logging(&config.logging.to_logging_config())?;
    info!(version = env!("CARGO_PKG_VERSION"), "Starting bike rental dashboard");

    let dataset = Dataset::load(&config.data.path)
        .with_context(|| format!("failed to load dataset '{}'", config.data.path.display()))?;

    run_server(AppState::new(dataset, config)).await
}
