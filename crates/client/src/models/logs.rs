//! Monitor log entries and response-time samples.

use serde::{Deserialize, Serialize};

use crate::models::codes::{AlertContactType, LogType};
use crate::models::date::UptimeRobotDate;

/// Contact notified for a log event (returned when log alert contacts are requested).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogAlertContact {
    #[serde(rename = "type")]
    pub contact_type: AlertContactType,
    #[serde(default)]
    pub value: String,
}

/// A state change of a monitor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Log {
    #[serde(rename = "type")]
    pub log_type: LogType,
    pub datetime: UptimeRobotDate,
    #[serde(rename = "alertcontact", default)]
    pub alert_contacts: Vec<LogAlertContact>,
}

/// One response-time sample in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseTime {
    pub datetime: UptimeRobotDate,
    #[serde(deserialize_with = "crate::serde_helpers::u32_from_string_or_number")]
    pub value: u32,
}
