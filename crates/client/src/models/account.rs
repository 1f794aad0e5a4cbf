//! Account limits and monitor counters.

use serde::{Deserialize, Serialize};

use crate::models::common::{ApiEnvelope, StatusResponse};

/// Details returned by `getAccountDetails`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountDetails {
    /// Maximum number of monitors the account can create.
    #[serde(
        rename = "monitorLimit",
        deserialize_with = "crate::serde_helpers::u32_from_string_or_number"
    )]
    pub monitor_limit: u32,
    /// Minimum check interval in minutes.
    #[serde(
        rename = "monitorInterval",
        deserialize_with = "crate::serde_helpers::u32_from_string_or_number"
    )]
    pub monitor_interval: u32,
    #[serde(
        rename = "upMonitors",
        deserialize_with = "crate::serde_helpers::u32_from_string_or_number"
    )]
    pub up_monitors: u32,
    #[serde(
        rename = "downMonitors",
        deserialize_with = "crate::serde_helpers::u32_from_string_or_number"
    )]
    pub down_monitors: u32,
    #[serde(
        rename = "pausedMonitors",
        deserialize_with = "crate::serde_helpers::u32_from_string_or_number"
    )]
    pub paused_monitors: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AccountDetailsResponse {
    #[serde(flatten)]
    pub status: StatusResponse,
    #[serde(default)]
    pub account: Option<AccountDetails>,
}

impl ApiEnvelope for AccountDetailsResponse {
    fn status(&self) -> &StatusResponse {
        &self.status
    }
}
