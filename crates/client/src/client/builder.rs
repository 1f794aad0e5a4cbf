//! Client builder for constructing [`UptimeRobotClient`] instances.
//!
//! This module is responsible for:
//! - Providing a fluent builder API for client configuration
//! - Validating required configuration (API key, base URL)
//! - Normalizing the base URL (removing trailing slashes)
//! - Configuring the underlying HTTP client (timeout, redirects) unless one is injected
//!
//! # What this module does NOT handle:
//! - Actual API calls (handled by [`UptimeRobotClient`] methods)
//! - Loading configuration from the environment (handled by `uptimerobot-config`)
//!
//! # Invariants
//! - An API key is required and must not be blank
//! - The base URL is always normalized to have no trailing slashes
//! - An injected `reqwest::Client` is used as-is; `timeout` only applies to the default one

use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};
use uptimerobot_config::Config;
use uptimerobot_config::constants::{DEFAULT_BASE_URL, DEFAULT_MAX_REDIRECTS, DEFAULT_TIMEOUT_SECS};

use crate::client::UptimeRobotClient;
use crate::error::{ClientError, Result};
use crate::metrics::MetricsCollector;

/// Builder for creating a new [`UptimeRobotClient`].
///
/// Everything except the API key has a default.
///
/// # Example
///
/// ```rust,ignore
/// use uptimerobot_client::UptimeRobotClient;
///
/// let client = UptimeRobotClient::builder()
///     .api_key("u956-afus321g565fghr519")
///     .timeout(Duration::from_secs(60))
///     .disable_caching(true)
///     .build()?;
/// ```
pub struct UptimeRobotClientBuilder {
    api_key: Option<SecretString>,
    base_url: String,
    timeout: Duration,
    disable_caching: bool,
    http_client: Option<reqwest::Client>,
    metrics: Option<MetricsCollector>,
}

impl Default for UptimeRobotClientBuilder {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            disable_caching: false,
            http_client: None,
            metrics: None,
        }
    }
}

impl UptimeRobotClientBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the account (or monitor-specific) API key.
    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(SecretString::from(api_key.into()));
        self
    }

    /// Set the API key from an existing secret.
    pub fn api_key_secret(mut self, api_key: SecretString) -> Self {
        self.api_key = Some(api_key);
        self
    }

    /// Set the base URL. Trailing slashes are removed.
    ///
    /// Defaults to the public API endpoint; override for mock servers or proxies.
    pub fn base_url(mut self, url: String) -> Self {
        self.base_url = url;
        self
    }

    /// Set the request timeout of the default HTTP client.
    ///
    /// Default is 30 seconds.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Append a unique `v` parameter to every request.
    pub fn disable_caching(mut self, disable: bool) -> Self {
        self.disable_caching = disable;
        self
    }

    /// Use a prebuilt HTTP client instead of constructing one.
    pub fn http_client(mut self, client: reqwest::Client) -> Self {
        self.http_client = Some(client);
        self
    }

    /// Set the metrics collector for API call performance tracking.
    pub fn metrics(mut self, metrics: MetricsCollector) -> Self {
        self.metrics = Some(metrics);
        self
    }

    /// Create a client builder from configuration.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use uptimerobot_client::UptimeRobotClient;
    /// use uptimerobot_config::ConfigLoader;
    ///
    /// let config = ConfigLoader::new().load_dotenv()?.from_env()?.build()?;
    /// let client = UptimeRobotClient::builder().from_config(&config).build()?;
    /// ```
    pub fn from_config(mut self, config: &Config) -> Self {
        self.api_key = Some(config.auth.api_key.clone());
        self.base_url = config.connection.base_url.clone();
        self.timeout = config.connection.timeout;
        self.disable_caching = config.connection.disable_caching;
        self
    }

    /// Normalize a base URL by removing trailing slashes.
    ///
    /// - `"https://api.uptimerobot.com/"` -> `"https://api.uptimerobot.com"`
    /// - `"http://localhost:8080/v1//"` -> `"http://localhost:8080/v1"`
    fn normalize_base_url(url: String) -> String {
        url.trim().trim_end_matches('/').to_string()
    }

    fn validate_base_url(url: &str) -> Result<()> {
        let parsed = reqwest::Url::parse(url)
            .map_err(|e| ClientError::InvalidUrl(format!("Invalid base URL '{url}': {e}")))?;

        match parsed.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(ClientError::InvalidUrl(format!(
                "Unsupported scheme '{scheme}' in base URL '{url}'"
            ))),
        }
    }

    /// Build the [`UptimeRobotClient`] with the configured options.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::MissingApiKey`] if no (or a blank) API key was provided.
    /// Returns [`ClientError::InvalidUrl`] if the base URL is not an http(s) URL.
    /// Returns `ClientError::HttpError` if the HTTP client fails to build.
    pub fn build(self) -> Result<UptimeRobotClient> {
        let api_key = self
            .api_key
            .filter(|key| !key.expose_secret().trim().is_empty())
            .ok_or(ClientError::MissingApiKey)?;

        let base_url = Self::normalize_base_url(self.base_url);
        Self::validate_base_url(&base_url)?;

        let http = match self.http_client {
            Some(client) => client,
            None => reqwest::Client::builder()
                .timeout(self.timeout)
                .redirect(reqwest::redirect::Policy::limited(DEFAULT_MAX_REDIRECTS))
                .build()?,
        };

        Ok(UptimeRobotClient {
            http,
            base_url,
            api_key,
            disable_caching: self.disable_caching,
            metrics: self.metrics,
        })
    }
}
