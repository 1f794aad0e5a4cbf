//! Table formatter implementation.
//!
//! Responsibilities:
//! - Format resources as tab-separated tables with a header row.
//! - Print logs and response times below the monitor table when present.
//!
//! Does NOT handle:
//! - Column alignment beyond tab stops.

use std::fmt::Write as _;

use anyhow::Result;
use uptimerobot_client::{AccountDetails, AlertContact, Monitor};

use crate::formatters::{ActionOutput, DEFAULT_MISSING_VALUE, Formatter};

/// Table formatter.
pub struct TableFormatter;

fn or_missing<T: ToString>(value: Option<T>) -> String {
    value
        .map(|v| v.to_string())
        .unwrap_or_else(|| DEFAULT_MISSING_VALUE.to_string())
}

fn or_missing_str(value: &str) -> &str {
    if value.is_empty() {
        DEFAULT_MISSING_VALUE
    } else {
        value
    }
}

/// All-time ratio followed by any custom-period ratios, e.g. `99.98 (100/99.92)`.
fn uptime_column(monitor: &Monitor) -> String {
    let mut uptime = or_missing(monitor.all_time_uptime_ratio);
    if !monitor.custom_uptime_ratios.is_empty() {
        let custom = monitor
            .custom_uptime_ratios
            .iter()
            .map(|r| r.to_string())
            .collect::<Vec<_>>()
            .join("/");
        uptime.push_str(&format!(" ({custom})"));
    }
    uptime
}

fn write_monitor_details(output: &mut String, monitor: &Monitor) -> Result<()> {
    if !monitor.alert_contacts.is_empty() {
        writeln!(output, "\nAlert contacts of {} ({}):", monitor.friendly_name, monitor.id)?;
        for contact in &monitor.alert_contacts {
            writeln!(
                output,
                "  {}\t{}\t{}\tthreshold={}\trecurrence={}",
                contact.id,
                contact.contact_type,
                or_missing_str(&contact.value),
                contact.threshold.unwrap_or(0),
                contact.recurrence.unwrap_or(0)
            )?;
        }
    }

    if !monitor.logs.is_empty() {
        writeln!(output, "\nLogs of {} ({}):", monitor.friendly_name, monitor.id)?;
        for log in &monitor.logs {
            let notified = log
                .alert_contacts
                .iter()
                .map(|c| c.value.as_str())
                .collect::<Vec<_>>()
                .join(", ");
            writeln!(
                output,
                "  {}\t{}\t{}",
                log.datetime,
                log.log_type,
                or_missing_str(&notified)
            )?;
        }
    }

    if !monitor.response_times.is_empty() {
        writeln!(
            output,
            "\nResponse times of {} ({}):",
            monitor.friendly_name, monitor.id
        )?;
        for sample in &monitor.response_times {
            writeln!(output, "  {}\t{} ms", sample.datetime, sample.value)?;
        }
    }

    Ok(())
}

impl Formatter for TableFormatter {
    fn format_account(&self, account: &AccountDetails) -> Result<String> {
        let mut output = String::new();
        writeln!(output, "Monitor limit:\t{}", account.monitor_limit)?;
        writeln!(output, "Minimum interval:\t{} min", account.monitor_interval)?;
        writeln!(output, "Up monitors:\t{}", account.up_monitors)?;
        writeln!(output, "Down monitors:\t{}", account.down_monitors)?;
        writeln!(output, "Paused monitors:\t{}", account.paused_monitors)?;
        Ok(output)
    }

    fn format_monitors(&self, monitors: &[Monitor]) -> Result<String> {
        if monitors.is_empty() {
            return Ok("No monitors found.".to_string());
        }

        let mut output = String::new();
        output.push_str("ID\tName\tType\tStatus\tInterval\tUptime\tURL\n");
        for monitor in monitors {
            writeln!(
                output,
                "{}\t{}\t{}\t{}\t{}\t{}\t{}",
                monitor.id,
                monitor.friendly_name,
                monitor.monitor_type,
                monitor.status,
                or_missing(monitor.interval),
                uptime_column(monitor),
                monitor.url
            )?;
        }

        for monitor in monitors {
            write_monitor_details(&mut output, monitor)?;
        }

        Ok(output)
    }

    fn format_monitor(&self, monitor: &Monitor) -> Result<String> {
        let mut output = String::new();
        writeln!(output, "ID:\t{}", monitor.id)?;
        writeln!(output, "Name:\t{}", monitor.friendly_name)?;
        writeln!(output, "URL:\t{}", monitor.url)?;
        writeln!(output, "Type:\t{}", monitor.monitor_type)?;
        writeln!(output, "Subtype:\t{}", or_missing(monitor.subtype))?;
        writeln!(output, "Port:\t{}", or_missing(monitor.port))?;
        writeln!(output, "Keyword:\t{}", or_missing(monitor.keyword_type))?;
        writeln!(output, "Keyword value:\t{}", or_missing_str(&monitor.keyword_value))?;
        writeln!(output, "Interval:\t{}", or_missing(monitor.interval))?;
        writeln!(output, "Status:\t{}", monitor.status)?;
        write_monitor_details(&mut output, monitor)?;
        Ok(output)
    }

    fn format_alert_contacts(&self, contacts: &[AlertContact]) -> Result<String> {
        if contacts.is_empty() {
            return Ok("No alert contacts found.".to_string());
        }

        let mut output = String::new();
        output.push_str("ID\tName\tType\tStatus\tValue\n");
        for contact in contacts {
            writeln!(
                output,
                "{}\t{}\t{}\t{}\t{}",
                contact.id,
                or_missing_str(&contact.friendly_name),
                contact.contact_type,
                or_missing(contact.status),
                contact.value
            )?;
        }
        Ok(output)
    }

    fn format_alert_contact(&self, contact: &AlertContact) -> Result<String> {
        self.format_alert_contacts(std::slice::from_ref(contact))
    }

    fn format_action(&self, output: &ActionOutput) -> Result<String> {
        Ok(format!("{} {} {}.", output.resource, output.id, output.action))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uptimerobot_client::{
        AlertContactStatus, AlertContactType, Log, LogType, MonitorStatus, MonitorType,
        UptimeRobotDate,
    };

    fn monitor() -> Monitor {
        let mut monitor = Monitor::new("Home", "https://example.com", MonitorType::Http);
        monitor.id = 42;
        monitor.status = MonitorStatus::Up;
        monitor.interval = Some(300);
        monitor
    }

    #[test]
    fn test_empty_lists() {
        assert_eq!(TableFormatter.format_monitors(&[]).unwrap(), "No monitors found.");
        assert_eq!(
            TableFormatter.format_alert_contacts(&[]).unwrap(),
            "No alert contacts found."
        );
    }

    #[test]
    fn test_monitor_row() {
        let mut m = monitor();
        m.all_time_uptime_ratio = Some(99.5);
        m.custom_uptime_ratios = vec![100.0, 98.25];

        let output = TableFormatter.format_monitors(&[m]).unwrap();
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines[0], "ID\tName\tType\tStatus\tInterval\tUptime\tURL");
        assert_eq!(
            lines[1],
            "42\tHome\thttp\tup\t300\t99.5 (100/98.25)\thttps://example.com"
        );
    }

    #[test]
    fn test_monitor_logs_section() {
        let mut m = monitor();
        m.logs = vec![Log {
            log_type: LogType::Down,
            datetime: "10/14/2016 08:26:12".parse::<UptimeRobotDate>().unwrap(),
            alert_contacts: Vec::new(),
        }];

        let output = TableFormatter.format_monitors(&[m]).unwrap();
        assert!(output.contains("Logs of Home (42):"));
        assert!(output.contains("10/14/2016 08:26:12\tdown\tN/A"));
    }

    #[test]
    fn test_contact_row_uses_missing_placeholder() {
        let mut contact = AlertContact::reference(7, AlertContactType::Email);
        contact.value = "ops@example.com".to_string();
        contact.status = Some(AlertContactStatus::Active);

        let output = TableFormatter.format_alert_contact(&contact).unwrap();
        assert!(output.contains("7\tN/A\temail\tactive\tops@example.com"));
    }

    #[test]
    fn test_action_message() {
        let output = TableFormatter
            .format_action(&ActionOutput {
                resource: "Monitor",
                id: 5,
                action: "deleted",
            })
            .unwrap();
        assert_eq!(output, "Monitor 5 deleted.");
    }
}
