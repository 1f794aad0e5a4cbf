//! Alert contact commands.

use anyhow::{Context, Result};
use clap::Subcommand;
use tracing::info;
use uptimerobot_client::{AlertContactType, NewAlertContact, UptimeRobotClient};

use crate::formatters::{ActionOutput, OutputFormat, get_formatter};

#[derive(Subcommand)]
pub enum ContactsCommand {
    /// List alert contacts
    List {
        /// Only these contact ids (comma-separated)
        #[arg(long, value_delimiter = ',')]
        ids: Vec<u64>,
    },

    /// Create an alert contact (it starts out not activated)
    Create {
        /// Contact type (e.g. email, sms, webhook, slack)
        #[arg(long = "type")]
        contact_type: AlertContactType,

        /// Address, number or URL to notify
        #[arg(long)]
        value: String,

        /// Display name, at most 30 characters
        #[arg(long)]
        name: Option<String>,
    },

    /// Delete an alert contact
    Delete {
        /// Contact id
        id: u64,
    },
}

pub async fn run(
    client: &UptimeRobotClient,
    command: ContactsCommand,
    output_format: OutputFormat,
) -> Result<()> {
    let formatter = get_formatter(output_format);

    match command {
        ContactsCommand::List { ids } => {
            info!(count = ids.len(), "Listing alert contacts");
            let contacts = client
                .list_alert_contacts(&ids)
                .await
                .context("Failed to list alert contacts")?;
            println!("{}", formatter.format_alert_contacts(&contacts)?);
        }
        ContactsCommand::Create {
            contact_type,
            value,
            name,
        } => {
            info!(%contact_type, "Creating alert contact");
            let mut input = NewAlertContact::new(contact_type, value);
            input.friendly_name = name;

            let contact = client
                .create_alert_contact(&input)
                .await
                .context("Failed to create alert contact")?;
            println!("{}", formatter.format_alert_contact(&contact)?);
        }
        ContactsCommand::Delete { id } => {
            info!(id, "Deleting alert contact");
            client
                .delete_alert_contact(id)
                .await
                .with_context(|| format!("Failed to delete alert contact {id}"))?;
            println!(
                "{}",
                formatter.format_action(&ActionOutput {
                    resource: "Alert contact",
                    id,
                    action: "deleted",
                })?
            );
        }
    }

    Ok(())
}
