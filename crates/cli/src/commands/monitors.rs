//! Monitor commands.

use anyhow::{Context, Result, bail};
use chrono::NaiveDate;
use clap::Subcommand;
use tracing::info;
use uptimerobot_client::{
    DateRange, GetMonitorsInput, KeywordType, Monitor, MonitorStatus, MonitorSubtype, MonitorType,
    UptimeRobotClient,
};

use crate::formatters::{ActionOutput, OutputFormat, get_formatter};

#[derive(Subcommand)]
pub enum MonitorsCommand {
    /// List monitors, following every page
    List {
        /// Only these monitor ids (comma-separated)
        #[arg(long, value_delimiter = ',')]
        ids: Vec<u64>,

        /// Only these types (comma-separated: http, keyword, ping, port)
        #[arg(long, value_delimiter = ',')]
        types: Vec<MonitorType>,

        /// Only these statuses (comma-separated: paused, not-checked-yet, up, seems-down, down)
        #[arg(long, value_delimiter = ',')]
        statuses: Vec<MonitorStatus>,

        /// Match against URL and friendly name
        #[arg(long)]
        search: Option<String>,

        /// Include state-change logs
        #[arg(long)]
        logs: bool,

        /// Include the contacts notified for each log entry
        #[arg(long, requires = "logs")]
        log_alert_contacts: bool,

        /// Include response-time samples
        #[arg(long)]
        response_times: bool,

        /// Average response times over this many minutes
        #[arg(long, requires = "response_times")]
        response_time_average: Option<u32>,

        /// First day of response-time data (YYYY-MM-DD, needs exactly one --ids value)
        #[arg(long, requires_all = ["response_times", "to"])]
        from: Option<NaiveDate>,

        /// Last day of response-time data (YYYY-MM-DD, at most 7 days after --from)
        #[arg(long, requires = "from")]
        to: Option<NaiveDate>,

        /// Include the alert contacts attached to each monitor
        #[arg(long)]
        alert_contacts: bool,

        /// Uptime ratio periods in days (comma-separated, e.g. 7,30)
        #[arg(long, value_delimiter = ',')]
        custom_uptime_ratio: Vec<u32>,
    },

    /// Create a monitor, or edit it when --id is given
    Save {
        /// Id of the monitor to edit
        #[arg(long)]
        id: Option<u64>,

        /// Friendly name
        #[arg(long)]
        name: String,

        /// URL or IP to monitor
        #[arg(long)]
        url: String,

        /// Monitor type (http, keyword, ping, port)
        #[arg(long = "type")]
        monitor_type: MonitorType,

        /// Port monitor subtype (http, https, ftp, smtp, pop3, imap, custom-port)
        #[arg(long)]
        subtype: Option<MonitorSubtype>,

        /// Port for custom-port monitors
        #[arg(long)]
        port: Option<u16>,

        /// Keyword monitor condition (exists, not-exists)
        #[arg(long)]
        keyword_type: Option<KeywordType>,

        /// Keyword to look for
        #[arg(long)]
        keyword_value: Option<String>,

        /// HTTP basic auth username
        #[arg(long)]
        http_username: Option<String>,

        /// HTTP basic auth password
        #[arg(long)]
        http_password: Option<String>,

        /// Check interval in seconds
        #[arg(long)]
        interval: Option<u32>,

        /// Attach an existing alert contact (repeatable)
        #[arg(long = "alert-contact", value_name = "ID")]
        alert_contacts: Vec<u64>,

        /// Minutes to wait before alerting attached contacts
        #[arg(long, requires = "alert_contacts")]
        alert_threshold: Option<u32>,

        /// Minutes between repeated alerts to attached contacts
        #[arg(long, requires = "alert_contacts")]
        alert_recurrence: Option<u32>,
    },

    /// Delete a monitor
    Delete {
        /// Monitor id
        id: u64,
    },

    /// Clear the logs and statistics of a monitor
    Reset {
        /// Monitor id
        id: u64,
    },
}

/// Options of `monitors save` that describe the monitor itself.
struct SaveOptions {
    id: Option<u64>,
    name: String,
    url: String,
    monitor_type: MonitorType,
    subtype: Option<MonitorSubtype>,
    port: Option<u16>,
    keyword_type: Option<KeywordType>,
    keyword_value: Option<String>,
    http_username: Option<String>,
    http_password: Option<String>,
    interval: Option<u32>,
}

impl SaveOptions {
    fn into_monitor(self) -> Monitor {
        let mut monitor = Monitor::new(self.name, self.url, self.monitor_type);
        monitor.id = self.id.unwrap_or(0);
        monitor.subtype = self.subtype;
        monitor.port = self.port;
        monitor.keyword_type = self.keyword_type;
        monitor.keyword_value = self.keyword_value.unwrap_or_default();
        monitor.http_username = self.http_username.unwrap_or_default();
        monitor.http_password = self.http_password.unwrap_or_default();
        monitor.interval = self.interval;
        monitor
    }
}

pub async fn run(
    client: &UptimeRobotClient,
    command: MonitorsCommand,
    output_format: OutputFormat,
) -> Result<()> {
    let formatter = get_formatter(output_format);

    match command {
        MonitorsCommand::List {
            ids,
            types,
            statuses,
            search,
            logs,
            log_alert_contacts,
            response_times,
            response_time_average,
            from,
            to,
            alert_contacts,
            custom_uptime_ratio,
        } => {
            let input = GetMonitorsInput {
                monitors: ids,
                types,
                statuses,
                custom_uptime_ratio_days: custom_uptime_ratio,
                logs,
                response_times,
                response_time_average,
                response_time_range: from.zip(to).map(|(start, end)| DateRange::new(start, end)),
                log_alert_contacts,
                show_monitor_alert_contacts: alert_contacts,
                show_timezone: false,
                search,
            };

            info!("Listing monitors");
            let monitors = client
                .list_monitors(&input)
                .await
                .context("Failed to list monitors")?;
            println!("{}", formatter.format_monitors(&monitors)?);
        }
        MonitorsCommand::Save {
            id,
            name,
            url,
            monitor_type,
            subtype,
            port,
            keyword_type,
            keyword_value,
            http_username,
            http_password,
            interval,
            alert_contacts,
            alert_threshold,
            alert_recurrence,
        } => {
            let mut monitor = SaveOptions {
                id,
                name,
                url,
                monitor_type,
                subtype,
                port,
                keyword_type,
                keyword_value,
                http_username,
                http_password,
                interval,
            }
            .into_monitor();

            if !alert_contacts.is_empty() {
                let mut found = client
                    .list_alert_contacts(&alert_contacts)
                    .await
                    .context("Failed to look up alert contacts")?;
                found.retain(|contact| alert_contacts.contains(&contact.id));

                if let Some(missing) = alert_contacts
                    .iter()
                    .find(|id| !found.iter().any(|contact| contact.id == **id))
                {
                    bail!("Alert contact {missing} does not exist");
                }

                for contact in &mut found {
                    contact.threshold = alert_threshold;
                    contact.recurrence = alert_recurrence;
                }
                monitor.alert_contacts = found;
            }

            info!(id = monitor.id, name = %monitor.friendly_name, "Saving monitor");
            let saved = client
                .save_monitor(&monitor)
                .await
                .context("Failed to save monitor")?;
            println!("{}", formatter.format_monitor(&saved)?);
        }
        MonitorsCommand::Delete { id } => {
            info!(id, "Deleting monitor");
            client
                .delete_monitor(id)
                .await
                .with_context(|| format!("Failed to delete monitor {id}"))?;
            println!(
                "{}",
                formatter.format_action(&ActionOutput {
                    resource: "Monitor",
                    id,
                    action: "deleted",
                })?
            );
        }
        MonitorsCommand::Reset { id } => {
            info!(id, "Resetting monitor");
            client
                .reset_monitor(id)
                .await
                .with_context(|| format!("Failed to reset monitor {id}"))?;
            println!(
                "{}",
                formatter.format_action(&ActionOutput {
                    resource: "Monitor",
                    id,
                    action: "reset",
                })?
            );
        }
    }

    Ok(())
}
