//! Output formatters for CLI commands.
//!
//! Responsibilities:
//! - Provide the table and JSON output formats.
//! - Implement the `Formatter` trait for every resource the CLI prints.
//!
//! Does NOT handle:
//! - Direct printing to stdout (returns formatted strings).
//!
//! Invariants:
//! - Tables use tab-separation for consistent alignment in standard terminals.
//! - Empty JSON lists render as `[]`; empty tables render a human message.
//! - Missing values render as `N/A` in tables and `null` in JSON.

use std::fmt;
use std::str::FromStr;

use anyhow::Result;
use serde::Serialize;
use uptimerobot_client::{AccountDetails, AlertContact, Monitor};

mod json;
mod table;

pub use json::JsonFormatter;
pub use table::TableFormatter;

/// Placeholder for absent values in human-readable output.
pub const DEFAULT_MISSING_VALUE: &str = "N/A";

/// Supported output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "table" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!(
                "Invalid output format: {other}. Valid options: table, json"
            )),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            OutputFormat::Table => "table",
            OutputFormat::Json => "json",
        })
    }
}

/// Result of a command that changes something remotely without returning a record.
#[derive(Debug, Clone, Serialize)]
pub struct ActionOutput {
    pub resource: &'static str,
    pub id: u64,
    pub action: &'static str,
}

/// Formatter trait for different output types.
pub trait Formatter {
    fn format_account(&self, account: &AccountDetails) -> Result<String>;

    /// Format a monitor list, including any logs and response times it carries.
    fn format_monitors(&self, monitors: &[Monitor]) -> Result<String>;

    /// Format a single created or edited monitor.
    fn format_monitor(&self, monitor: &Monitor) -> Result<String>;

    fn format_alert_contacts(&self, contacts: &[AlertContact]) -> Result<String>;

    fn format_alert_contact(&self, contact: &AlertContact) -> Result<String>;

    fn format_action(&self, output: &ActionOutput) -> Result<String>;
}

/// Get a formatter for the specified output format.
pub fn get_formatter(format: OutputFormat) -> Box<dyn Formatter> {
    match format {
        OutputFormat::Table => Box::new(TableFormatter),
        OutputFormat::Json => Box::new(JsonFormatter),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_format_parsing() {
        assert_eq!("json".parse::<OutputFormat>(), Ok(OutputFormat::Json));
        assert_eq!(" TABLE ".parse::<OutputFormat>(), Ok(OutputFormat::Table));
        assert!("csv".parse::<OutputFormat>().unwrap_err().contains("Valid options"));
    }
}
