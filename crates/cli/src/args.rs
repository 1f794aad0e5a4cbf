//! CLI argument definitions and parsing.
//!
//! Responsibilities:
//! - Define the CLI structure using clap derive macros.
//! - Bind global connection options to their environment variables.
//!
//! Non-responsibilities:
//! - Does not execute commands (see `dispatch` module).
//! - Does not build the configuration (see `main`).

use clap::{Parser, Subcommand};

use crate::commands;
use crate::formatters::OutputFormat;

#[derive(Parser)]
#[command(name = "uptimerobot")]
#[command(about = "UptimeRobot CLI - Manage monitors and alert contacts from the command line", long_about = None)]
#[command(version)]
#[command(
    after_help = "Examples:\n  uptimerobot account\n  uptimerobot monitors list --statuses down,seems-down\n  uptimerobot monitors list --ids 775564132 --logs --response-times\n  uptimerobot monitors save --name Home --url https://example.com --type http\n  uptimerobot contacts create --type email --value ops@example.com --name Ops\n  uptimerobot -o json contacts list\n"
)]
pub struct Cli {
    /// Account or monitor-specific API key
    #[arg(short = 'k', long, global = true, env = "UPTIMEROBOT_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Base URL of the API (default: https://api.uptimerobot.com)
    #[arg(short, long, global = true, env = "UPTIMEROBOT_BASE_URL")]
    pub base_url: Option<String>,

    /// Request timeout in seconds
    #[arg(long, global = true, env = "UPTIMEROBOT_TIMEOUT")]
    pub timeout: Option<u64>,

    /// Add a unique parameter to every request so no cached response is served
    #[arg(long, global = true)]
    pub disable_caching: bool,

    /// Output format (table, json)
    #[arg(short, long, global = true, default_value = "table")]
    pub output: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show account limits and monitor counters
    Account,

    /// List and manage monitors
    Monitors {
        #[command(subcommand)]
        command: commands::monitors::MonitorsCommand,
    },

    /// List and manage alert contacts
    Contacts {
        #[command(subcommand)]
        command: commands::contacts::ContactsCommand,
    },
}
