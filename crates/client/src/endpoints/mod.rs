//! UptimeRobot API endpoint implementations.
//!
//! Each function takes an [`ApiContext`] and performs exactly one remote
//! method (list functions walk every page). [`crate::UptimeRobotClient`]
//! wraps these as methods.

mod account;
mod alert_contacts;
mod monitors;
pub mod pagination;
pub mod params;
pub mod request;

pub use account::get_account_details;
pub use alert_contacts::{create_alert_contact, delete_alert_contact, list_alert_contacts};
pub use monitors::{delete_monitor, list_monitors, reset_monitor, save_monitor};
pub use pagination::{Page, collect_pages};
pub use params::ApiParams;
pub use request::{ApiContext, call_api, send_api_request};

/// Validation message for missing required input.
pub(crate) const REQUIRED_PARAMETERS_MISSING: &str =
    "Required parameters missing. Please check the documentation.";
