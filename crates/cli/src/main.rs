//! UptimeRobot CLI - Command-line interface for the UptimeRobot API.
//!
//! Responsibilities:
//! - Parse command-line arguments and environment variables.
//! - Execute API calls via the shared client library.
//! - Format and display results as tables or JSON.
//!
//! Does NOT handle:
//! - Request encoding or response decoding (see `crates/client`).
//!
//! Invariants:
//! - `load_dotenv()` is called BEFORE CLI parsing to allow `.env` to provide clap defaults.
//! - Command-line options override environment variables.
//! - Logs go to stderr so stdout only carries command output.

mod args;
mod commands;
mod dispatch;
mod error;
mod formatters;

use args::Cli;
use clap::Parser;
use dispatch::run_command;
use error::{ExitCode, ExitCodeExt};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};
use uptimerobot_config::{Config, ConfigError, ConfigLoader};

/// Layer command-line overrides on top of the environment.
fn build_config(cli: &Cli) -> Result<Config, ConfigError> {
    let mut loader = ConfigLoader::new().from_env()?;

    // Blank values are ignored so the environment still applies.
    if let Some(key) = cli.api_key.as_deref().map(str::trim).filter(|k| !k.is_empty()) {
        loader = loader.with_api_key(key.to_string());
    }
    if let Some(url) = cli.base_url.as_deref().map(str::trim).filter(|u| !u.is_empty()) {
        loader = loader.with_base_url(url.to_string());
    }
    if let Some(timeout_secs) = cli.timeout {
        loader = loader.with_timeout(std::time::Duration::from_secs(timeout_secs));
    }
    if cli.disable_caching {
        loader = loader.with_disable_caching(true);
    }

    loader.build()
}

#[tokio::main]
async fn main() {
    // Load .env file BEFORE CLI parsing so clap env defaults can read .env values
    if let Err(e) = ConfigLoader::new().load_dotenv() {
        eprintln!("Failed to load environment: {}", e);
        std::process::exit(ExitCode::GeneralError.as_i32());
    }

    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = match build_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to build configuration: {:#}", e);
            std::process::exit(ExitCode::GeneralError.as_i32());
        }
    };

    let exit_code = match run_command(cli, config).await {
        Ok(()) => ExitCode::Success,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            e.exit_code()
        }
    };

    std::process::exit(exit_code.as_i32());
}
