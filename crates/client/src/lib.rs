//! UptimeRobot API client.
//!
//! This crate provides a typed, async client for the UptimeRobot v1 HTTP/JSON
//! API: account details, monitors (with logs, response times and uptime
//! ratios) and alert contacts. List methods follow every page and return the
//! concatenated result.

pub mod client;
pub mod endpoints;
pub mod error;
pub mod metrics;
pub mod models;
mod serde_helpers;

#[cfg(any(feature = "test-utils", test))]
pub mod testing;

pub use client::UptimeRobotClient;
pub use client::builder::UptimeRobotClientBuilder;
pub use error::{ClientError, Result};
pub use metrics::{ErrorCategory, MetricsCollector};
pub use models::{
    AccountDetails, AlertContact, AlertContactStatus, AlertContactType, ApiErrorCode, DateRange,
    GetMonitorsInput, KeywordType, Log, LogAlertContact, LogType, Monitor, MonitorStatus,
    MonitorSubtype, MonitorType, NewAlertContact, ResponseTime, Stat, UptimeRobotDate,
};
