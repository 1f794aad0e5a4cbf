//! Account command implementation.

use anyhow::{Context, Result};
use tracing::info;
use uptimerobot_client::UptimeRobotClient;

use crate::formatters::{OutputFormat, get_formatter};

pub async fn run(client: &UptimeRobotClient, output_format: OutputFormat) -> Result<()> {
    info!("Fetching account details");

    let account = client
        .get_account_details()
        .await
        .context("Failed to fetch account details")?;

    println!("{}", get_formatter(output_format).format_account(&account)?);
    Ok(())
}
