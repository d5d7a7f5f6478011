mod cli;
mod commands;
mod error;
mod output;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use roster_api::{TransportConfig, UsersClient};
use roster_core::Registry;

use crate::cli::{Cli, GlobalOpts};
use crate::error::CliError;

#[tokio::main]
async fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup tracing based on verbosity
    init_tracing(cli.global.verbose);

    // Dispatch and handle errors with proper exit codes
    if let Err(err) = run(cli).await {
        let code = err.exit_code();
        eprintln!("{:?}", miette::Report::new(err));
        std::process::exit(code);
    }
}

fn init_tracing(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_target(false)
        .init();
}

async fn run(cli: Cli) -> Result<(), CliError> {
    let registry = build_registry(&cli.global)?;

    tracing::debug!(command = ?cli.command, "dispatching command");
    commands::dispatch(cli.command, &registry, &cli.global).await
}

/// Build the registry from the config file and CLI overrides.
fn build_registry(global: &GlobalOpts) -> Result<Registry, CliError> {
    let config = roster_config::Config::load()?;
    let timeout = global
        .timeout
        .map_or_else(|| config.timeout(), std::time::Duration::from_secs);
    let api_url = global.api_url.clone().unwrap_or(config.api_url);

    let client = UsersClient::new(&api_url, &TransportConfig { timeout }).map_err(|e| {
        CliError::Validation {
            field: "api-url".into(),
            reason: e.to_string(),
        }
    })?;

    Ok(Registry::new(client))
}
