//! Monitor API methods for [`UptimeRobotClient`].
//!
//! # What this module handles:
//! - Listing monitors with optional logs, response times and uptime ratios
//! - Creating and editing monitors through a single save call
//! - Deleting and resetting monitors
//!
//! # What this module does NOT handle:
//! - Low-level HTTP calls (in [`crate::endpoints::monitors`])

use crate::client::UptimeRobotClient;
use crate::endpoints;
use crate::error::Result;
use crate::models::{GetMonitorsInput, Monitor};

impl UptimeRobotClient {
    /// List monitors matching `input`, following every page.
    pub async fn list_monitors(&self, input: &GetMonitorsInput) -> Result<Vec<Monitor>> {
        endpoints::list_monitors(&self.context(), input).await
    }

    /// Create the monitor when it has no id, otherwise edit it.
    ///
    /// Returns the submitted monitor with the id and status reported by the service.
    pub async fn save_monitor(&self, monitor: &Monitor) -> Result<Monitor> {
        endpoints::save_monitor(&self.context(), monitor).await
    }

    /// Delete a monitor by id.
    pub async fn delete_monitor(&self, id: u64) -> Result<()> {
        endpoints::delete_monitor(&self.context(), id).await
    }

    /// Clear the logs and statistics of a monitor.
    pub async fn reset_monitor(&self, id: u64) -> Result<()> {
        endpoints::reset_monitor(&self.context(), id).await
    }
}
