//! Alert contact models.

use serde::{Deserialize, Serialize};

use crate::models::codes::{AlertContactStatus, AlertContactType};
use crate::models::common::{ApiEnvelope, StatusResponse};

/// A notification destination.
///
/// The same shape is used for account-level contacts (`getAlertContacts`)
/// and for contacts attached to a monitor, where `status` is absent and
/// `threshold` / `recurrence` are set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlertContact {
    #[serde(deserialize_with = "crate::serde_helpers::u64_from_string_or_number")]
    pub id: u64,
    #[serde(rename = "type")]
    pub contact_type: AlertContactType,
    #[serde(default)]
    pub value: String,
    #[serde(
        default,
        deserialize_with = "crate::models::codes::optional_code"
    )]
    pub status: Option<AlertContactStatus>,
    /// Minutes to wait before alerting.
    #[serde(
        default,
        deserialize_with = "crate::serde_helpers::opt_u32_from_string_or_number"
    )]
    pub threshold: Option<u32>,
    /// Minutes between repeated alerts.
    #[serde(
        default,
        deserialize_with = "crate::serde_helpers::opt_u32_from_string_or_number"
    )]
    pub recurrence: Option<u32>,
    #[serde(rename = "friendlyname", default)]
    pub friendly_name: String,
}

impl AlertContact {
    /// Reference an existing contact when attaching it to a monitor.
    pub fn reference(id: u64, contact_type: AlertContactType) -> Self {
        Self {
            id,
            contact_type,
            value: String::new(),
            status: None,
            threshold: None,
            recurrence: None,
            friendly_name: String::new(),
        }
    }

    /// `id_threshold_recurrence`, the form used by `monitorAlertContacts`.
    pub fn monitor_assignment(&self) -> String {
        format!(
            "{}_{}_{}",
            self.id,
            self.threshold.unwrap_or(0),
            self.recurrence.unwrap_or(0)
        )
    }
}

/// Input for `newAlertContact`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewAlertContact {
    pub contact_type: Option<AlertContactType>,
    pub value: String,
    pub friendly_name: Option<String>,
}

impl NewAlertContact {
    pub fn new(contact_type: AlertContactType, value: impl Into<String>) -> Self {
        Self {
            contact_type: Some(contact_type),
            value: value.into(),
            friendly_name: None,
        }
    }

    pub fn with_friendly_name(mut self, name: impl Into<String>) -> Self {
        self.friendly_name = Some(name.into());
        self
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AlertContactList {
    #[serde(default)]
    pub alertcontact: Vec<AlertContact>,
}

/// Page of `getAlertContacts`.
#[derive(Debug, Clone, Deserialize)]
pub struct AlertContactListResponse {
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
    pub alertcontacts: AlertContactList,
}

impl ApiEnvelope for AlertContactListResponse {
    fn status(&self) -> &StatusResponse {
        &self.status
    }
}

/// Identifier (and initial status) assigned to a new contact.
#[derive(Debug, Clone, Deserialize)]
pub struct AlertContactRef {
    #[serde(deserialize_with = "crate::serde_helpers::u64_from_string_or_number")]
    pub id: u64,
    #[serde(default, deserialize_with = "crate::models::codes::optional_code")]
    pub status: Option<AlertContactStatus>,
}

/// Body of `newAlertContact` and `deleteAlertContact`.
#[derive(Debug, Clone, Deserialize)]
pub struct AlertContactRefResponse {
    #[serde(flatten)]
    pub status: StatusResponse,
    #[serde(default)]
    pub alertcontact: Option<AlertContactRef>,
}

impl ApiEnvelope for AlertContactRefResponse {
    fn status(&self) -> &StatusResponse {
        &self.status
    }
}
