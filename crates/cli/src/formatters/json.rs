//! JSON formatter implementation.
//!
//! Records are serialized as the client models define them, so codes appear
//! as the API's string codes and dates in the API's textual format.

use anyhow::Result;
use uptimerobot_client::{AccountDetails, AlertContact, Monitor};

use crate::formatters::{ActionOutput, Formatter};

/// JSON formatter.
pub struct JsonFormatter;

impl Formatter for JsonFormatter {
    fn format_account(&self, account: &AccountDetails) -> Result<String> {
        Ok(serde_json::to_string_pretty(account)?)
    }

    fn format_monitors(&self, monitors: &[Monitor]) -> Result<String> {
        Ok(serde_json::to_string_pretty(monitors)?)
    }

    fn format_monitor(&self, monitor: &Monitor) -> Result<String> {
        Ok(serde_json::to_string_pretty(monitor)?)
    }

    fn format_alert_contacts(&self, contacts: &[AlertContact]) -> Result<String> {
        Ok(serde_json::to_string_pretty(contacts)?)
    }

    fn format_alert_contact(&self, contact: &AlertContact) -> Result<String> {
        Ok(serde_json::to_string_pretty(contact)?)
    }

    fn format_action(&self, output: &ActionOutput) -> Result<String> {
        Ok(serde_json::to_string_pretty(output)?)
    }
}
