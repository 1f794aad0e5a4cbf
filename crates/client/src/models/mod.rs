//! Data models for UptimeRobot API responses.
//!
//! Types are organized by resource in submodules and re-exported here
//! for convenient access.

pub mod account;
pub mod alert_contacts;
pub mod api_errors;
pub mod codes;
pub mod common;
pub mod date;
pub mod logs;
pub mod monitors;

pub use account::{AccountDetails, AccountDetailsResponse};
pub use alert_contacts::{
    AlertContact, AlertContactList, AlertContactListResponse, AlertContactRef,
    AlertContactRefResponse, NewAlertContact,
};
pub use api_errors::ApiErrorCode;
pub use codes::{
    AlertContactStatus, AlertContactType, KeywordType, LogType, MonitorStatus, MonitorSubtype,
    MonitorType, UnknownCodeError,
};
pub use common::{ApiEnvelope, Stat, StatusResponse, check_stat};
pub use date::{DateParseError, UptimeRobotDate};
pub use logs::{Log, LogAlertContact, ResponseTime};
pub use monitors::{
    DateRange, GetMonitorsInput, Monitor, MonitorList, MonitorListResponse, MonitorRef,
    MonitorRefResponse,
};
