//! Alert contact API methods for [`UptimeRobotClient`].
//!
//! # What this module handles:
//! - Listing alert contacts (all pages)
//! - Creating alert contacts
//! - Deleting alert contacts
//!
//! # What this module does NOT handle:
//! - Low-level HTTP calls (in [`crate::endpoints::alert_contacts`])
//! - Assigning contacts to monitors (set `Monitor::alert_contacts` and save the monitor)

use crate::client::UptimeRobotClient;
use crate::endpoints;
use crate::error::Result;
use crate::models::{AlertContact, NewAlertContact};

impl UptimeRobotClient {
    /// List alert contacts. An empty `ids` slice lists all of them.
    pub async fn list_alert_contacts(&self, ids: &[u64]) -> Result<Vec<AlertContact>> {
        endpoints::list_alert_contacts(&self.context(), ids).await
    }

    /// Create a new alert contact.
    ///
    /// Type and value are required and the friendly name is limited to 30
    /// characters. Both are checked before any request is made.
    pub async fn create_alert_contact(&self, input: &NewAlertContact) -> Result<AlertContact> {
        endpoints::create_alert_contact(&self.context(), input).await
    }

    /// Delete an alert contact by id.
    pub async fn delete_alert_contact(&self, id: u64) -> Result<()> {
        endpoints::delete_alert_contact(&self.context(), id).await
    }
}
