//! Monitor models and the `getMonitors` query input.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::alert_contacts::AlertContact;
use crate::models::codes::{KeywordType, MonitorStatus, MonitorSubtype, MonitorType};
use crate::models::common::{ApiEnvelope, StatusResponse};
use crate::models::logs::{Log, ResponseTime};

/// A monitored endpoint.
///
/// `id == 0` marks a record that has not been created remotely yet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Monitor {
    #[serde(
        default,
        deserialize_with = "crate::serde_helpers::u64_from_string_or_number"
    )]
    pub id: u64,
    #[serde(rename = "friendlyname", default)]
    pub friendly_name: String,
    #[serde(default)]
    pub url: String,
    #[serde(rename = "type")]
    pub monitor_type: MonitorType,
    #[serde(
        default,
        deserialize_with = "crate::models::codes::optional_nonzero_code"
    )]
    pub subtype: Option<MonitorSubtype>,
    #[serde(
        rename = "keywordtype",
        default,
        deserialize_with = "crate::models::codes::optional_nonzero_code"
    )]
    pub keyword_type: Option<KeywordType>,
    #[serde(rename = "keywordvalue", default)]
    pub keyword_value: String,
    #[serde(rename = "httpusername", default)]
    pub http_username: String,
    #[serde(rename = "httppassword", default)]
    pub http_password: String,
    #[serde(
        default,
        deserialize_with = "crate::serde_helpers::opt_nonzero_u16_from_string_or_number"
    )]
    pub port: Option<u16>,
    /// Check interval.
    #[serde(
        default,
        deserialize_with = "crate::serde_helpers::opt_nonzero_u32_from_string_or_number"
    )]
    pub interval: Option<u32>,
    #[serde(default)]
    pub status: MonitorStatus,
    #[serde(
        rename = "alltimeuptimeratio",
        default,
        deserialize_with = "crate::serde_helpers::opt_f64_from_string_or_number"
    )]
    pub all_time_uptime_ratio: Option<f64>,
    /// One ratio per period requested through `custom_uptime_ratio_days`.
    #[serde(
        rename = "customuptimeratio",
        default,
        deserialize_with = "crate::serde_helpers::f64_list_from_dashed_string"
    )]
    pub custom_uptime_ratios: Vec<f64>,
    #[serde(rename = "alertcontact", default)]
    pub alert_contacts: Vec<AlertContact>,
    #[serde(rename = "log", default)]
    pub logs: Vec<Log>,
    #[serde(rename = "responsetime", default)]
    pub response_times: Vec<ResponseTime>,
}

impl Monitor {
    /// An unsaved monitor with only the required fields set.
    pub fn new(
        friendly_name: impl Into<String>,
        url: impl Into<String>,
        monitor_type: MonitorType,
    ) -> Self {
        Self {
            id: 0,
            friendly_name: friendly_name.into(),
            url: url.into(),
            monitor_type,
            subtype: None,
            keyword_type: None,
            keyword_value: String::new(),
            http_username: String::new(),
            http_password: String::new(),
            port: None,
            interval: None,
            status: MonitorStatus::NotCheckedYet,
            all_time_uptime_ratio: None,
            custom_uptime_ratios: Vec::new(),
            alert_contacts: Vec::new(),
            logs: Vec::new(),
            response_times: Vec::new(),
        }
    }

    pub fn is_new(&self) -> bool {
        self.id == 0
    }
}

/// Inclusive calendar range for response-time data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// Days between start and end; negative when the range is reversed.
    pub fn span_days(&self) -> i64 {
        (self.end - self.start).num_days()
    }
}

/// Filters and optional sections for `getMonitors`.
///
/// The default value lists every monitor without logs, response times or
/// alert contacts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetMonitorsInput {
    pub monitors: Vec<u64>,
    pub types: Vec<MonitorType>,
    pub statuses: Vec<MonitorStatus>,
    /// Periods in days to compute uptime ratios for (e.g. `[7, 30, 45]`).
    pub custom_uptime_ratio_days: Vec<u32>,
    pub logs: bool,
    pub response_times: bool,
    /// Average response times over this many minutes.
    pub response_time_average: Option<u32>,
    /// Only valid together with exactly one monitor id.
    pub response_time_range: Option<DateRange>,
    /// Include the contacts notified for each log entry.
    pub log_alert_contacts: bool,
    pub show_monitor_alert_contacts: bool,
    pub show_timezone: bool,
    /// Matches against URL and friendly name.
    pub search: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct MonitorList {
    #[serde(default)]
    pub monitor: Vec<Monitor>,
}

/// Page of `getMonitors`.
#[derive(Debug, Clone, Deserialize)]
pub struct MonitorListResponse {
    #[serde(flatten)]
    pub status: StatusResponse,
    #[serde(
        default,
        deserialize_with = "crate::serde_helpers::usize_from_string_or_number"
    )]
    pub offset: usize,
    #[serde(
        default,
        deserialize_with = "crate::serde_helpers::usize_from_string_or_number"
    )]
    pub limit: usize,
    #[serde(
        default,
        deserialize_with = "crate::serde_helpers::usize_from_string_or_number"
    )]
    pub total: usize,
    #[serde(default)]
    pub monitors: MonitorList,
}

impl ApiEnvelope for MonitorListResponse {
    fn status(&self) -> &StatusResponse {
        &self.status
    }
}

/// Identifier (and status, when reported) of a created or edited monitor.
#[derive(Debug, Clone, Deserialize)]
pub struct MonitorRef {
    #[serde(deserialize_with = "crate::serde_helpers::u64_from_string_or_number")]
    pub id: u64,
    #[serde(default, deserialize_with = "crate::models::codes::optional_code")]
    pub status: Option<MonitorStatus>,
}

/// Body of `newMonitor`, `editMonitor`, `deleteMonitor` and `resetMonitor`.
#[derive(Debug, Clone, Deserialize)]
pub struct MonitorRefResponse {
    #[serde(flatten)]
    pub status: StatusResponse,
    #[serde(default)]
    pub monitor: Option<MonitorRef>,
}

impl ApiEnvelope for MonitorRefResponse {
    fn status(&self) -> &StatusResponse {
        &self.status
    }
}
