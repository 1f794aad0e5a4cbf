//! Command dispatch logic.
//!
//! Responsibilities:
//! - Build the API client from the resolved configuration.
//! - Route parsed CLI arguments to the appropriate command handler.
//!
//! Does NOT handle:
//! - CLI structure definitions (see `args` module).
//! - Configuration loading (see `main()`).

use anyhow::Result;
use uptimerobot_client::UptimeRobotClient;
use uptimerobot_config::Config;

use crate::args::{Cli, Commands};
use crate::commands;

pub(crate) async fn run_command(cli: Cli, config: Config) -> Result<()> {
    let client = UptimeRobotClient::builder().from_config(&config).build()?;

    match cli.command {
        Commands::Account => commands::account::run(&client, cli.output).await?,
        Commands::Monitors { command } => {
            commands::monitors::run(&client, command, cli.output).await?
        }
        Commands::Contacts { command } => {
            commands::contacts::run(&client, command, cli.output).await?
        }
    }

    Ok(())
}
