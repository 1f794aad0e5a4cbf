//! Main UptimeRobot API client and API methods.
//!
//! This module provides the primary [`UptimeRobotClient`]. Methods are grouped
//! by resource in submodules.
//!
//! # Submodules
//! - [`builder`]: Client construction and configuration
//! - `account`: Account details
//! - `alert_contacts`: Alert contact management
//! - `monitors`: Monitor listing and management
//!
//! # What this module does NOT handle:
//! - Direct HTTP request implementation (delegated to [`crate::endpoints`])
//! - Retries or caching (none are performed)
//!
//! # Invariants
//! - The client holds no mutable state; calls may run concurrently
//! - The API key is only exposed when a request is built

pub mod builder;

mod account;
mod alert_contacts;
mod monitors;

use secrecy::SecretString;

use crate::endpoints::ApiContext;
use crate::metrics::MetricsCollector;

/// UptimeRobot API client.
///
/// # Creating a Client
///
/// ```rust,ignore
/// use uptimerobot_client::UptimeRobotClient;
///
/// let client = UptimeRobotClient::builder()
///     .api_key("u956-afus321g565fghr519")
///     .build()?;
/// let account = client.get_account_details().await?;
/// ```
#[derive(Debug, Clone)]
pub struct UptimeRobotClient {
    pub(crate) http: reqwest::Client,
    pub(crate) base_url: String,
    pub(crate) api_key: SecretString,
    pub(crate) disable_caching: bool,
    pub(crate) metrics: Option<MetricsCollector>,
}

impl UptimeRobotClient {
    /// Create a new client builder.
    pub fn builder() -> builder::UptimeRobotClientBuilder {
        builder::UptimeRobotClientBuilder::new()
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Whether every request carries a cache-busting parameter.
    pub fn caching_disabled(&self) -> bool {
        self.disable_caching
    }

    pub(crate) fn context(&self) -> ApiContext<'_> {
        ApiContext {
            http: &self.http,
            base_url: &self.base_url,
            api_key: &self.api_key,
            disable_caching: self.disable_caching,
            metrics: self.metrics.as_ref(),
        }
    }
}
