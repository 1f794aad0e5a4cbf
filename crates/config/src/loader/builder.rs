//! Layered [`ConfigLoader`].
//!
//! Sources apply in call order and later ones win, so the usual chain is
//! `load_dotenv()`, then `from_env()`, then the `with_*` overrides.
//! `build()` fills defaults and validates.

use secrecy::SecretString;
use std::time::Duration;

use super::env::apply_env;
use super::error::{ConfigError, normalize_base_url};
use crate::constants::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS, MAX_TIMEOUT_SECS};
use crate::types::{AuthConfig, Config, ConnectionConfig};

/// Collects settings before validation. Unset fields fall back to defaults.
#[derive(Default)]
pub struct ConfigLoader {
    pub(super) api_key: Option<SecretString>,
    pub(super) base_url: Option<String>,
    pub(super) timeout: Option<Duration>,
    pub(super) disable_caching: Option<bool>,
}

impl ConfigLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Export variables from a `.env` file in the working directory (or a parent).
    ///
    /// Skipped when `DOTENV_DISABLED` is `1` or `true`. A missing file is fine.
    pub fn load_dotenv(self) -> Result<Self, ConfigError> {
        let disabled = matches!(
            std::env::var("DOTENV_DISABLED").ok().as_deref(),
            Some("1" | "true")
        );
        if disabled {
            tracing::debug!("Skipping .env loading");
            return Ok(self);
        }

        match dotenvy::dotenv() {
            Ok(path) => tracing::debug!(path = %path.display(), "Loaded .env file"),
            Err(e) => {
                if let Some(err) = ConfigError::from_dotenv(e) {
                    return Err(err);
                }
            }
        }
        Ok(self)
    }

    /// Read the `UPTIMEROBOT_*` environment variables.
    pub fn from_env(mut self) -> Result<Self, ConfigError> {
        apply_env(&mut self)?;
        Ok(self)
    }

    pub fn with_api_key(mut self, key: String) -> Self {
        self.api_key = Some(SecretString::from(key));
        self
    }

    pub fn with_base_url(mut self, url: String) -> Self {
        self.base_url = Some(url);
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Ask the client to append a cache-busting parameter to each request.
    pub fn with_disable_caching(mut self, disable: bool) -> Self {
        self.disable_caching = Some(disable);
        self
    }

    /// Validate and produce the final [`Config`].
    ///
    /// # Errors
    ///
    /// - [`ConfigError::MissingApiKey`] when no key was supplied by any source.
    /// - [`ConfigError::InvalidValue`] for a base URL that is not absolute http(s).
    /// - [`ConfigError::InvalidTimeout`] outside `1..=MAX_TIMEOUT_SECS` seconds.
    pub fn build(self) -> Result<Config, ConfigError> {
        let api_key = self.api_key.ok_or(ConfigError::MissingApiKey)?;
        let base_url = normalize_base_url(self.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL))?;
        let timeout = checked_timeout(
            self.timeout
                .unwrap_or(Duration::from_secs(DEFAULT_TIMEOUT_SECS)),
        )?;

        Ok(Config {
            connection: ConnectionConfig {
                base_url,
                timeout,
                disable_caching: self.disable_caching.unwrap_or(false),
            },
            auth: AuthConfig { api_key },
        })
    }
}

fn checked_timeout(timeout: Duration) -> Result<Duration, ConfigError> {
    let message = match timeout.as_secs() {
        0 => "timeout must be greater than 0 seconds".to_string(),
        secs if secs > MAX_TIMEOUT_SECS => {
            format!("{secs}s exceeds maximum allowed value of {MAX_TIMEOUT_SECS} seconds")
        }
        _ => return Ok(timeout),
    };
    Err(ConfigError::InvalidTimeout { message })
}
