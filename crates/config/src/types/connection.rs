//! Connection configuration types for the UptimeRobot client.
//!
//! Responsibilities:
//! - Define connection settings (URL, timeout, cache busting).
//! - Define the main `Config` structure combining connection and auth.
//!
//! Invariants:
//! - All duration fields are serialized as seconds (integers).
//! - Default values come from `crate::constants`, not magic numbers.

use crate::constants::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS};
use crate::types::auth::AuthConfig;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Module for serializing Duration as seconds (integer).
mod duration_seconds {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        duration.as_secs().serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let secs = u64::deserialize(deserializer)?;
        Ok(Duration::from_secs(secs))
    }
}

/// Connection configuration for the UptimeRobot API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConnectionConfig {
    /// Base URL of the API (e.g., https://api.uptimerobot.com)
    pub base_url: String,
    /// Request timeout (serialized as seconds)
    #[serde(with = "duration_seconds")]
    pub timeout: Duration,
    /// Append a unique `v` parameter to every request so intermediate
    /// caches never serve a stale response.
    #[serde(default)]
    pub disable_caching: bool,
}

impl Default for ConnectionConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            disable_caching: false,
        }
    }
}

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Connection settings
    pub connection: ConnectionConfig,
    /// Authentication settings
    pub auth: AuthConfig,
}

impl Config {
    /// Create a config for the public API with the given API key.
    pub fn with_api_key(api_key: impl Into<String>) -> Self {
        Self {
            connection: ConnectionConfig::default(),
            auth: AuthConfig::new(api_key),
        }
    }

    /// Create a config against a custom base URL (mock servers, proxies).
    pub fn with_base_url(base_url: String, api_key: impl Into<String>) -> Self {
        Self {
            connection: ConnectionConfig {
                base_url,
                ..ConnectionConfig::default()
            },
            auth: AuthConfig::new(api_key),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_connection_defaults() {
        let conn = ConnectionConfig::default();
        assert_eq!(conn.base_url, "https://api.uptimerobot.com");
        assert_eq!(conn.timeout, Duration::from_secs(30));
        assert!(!conn.disable_caching);
    }

    #[test]
    fn test_timeout_serialized_as_seconds() {
        let config = Config::with_api_key("key");
        let json = serde_json::to_value(&config.connection).unwrap();
        assert_eq!(json["timeout"], 30);
    }

    #[test]
    fn test_disable_caching_defaults_when_missing() {
        let conn: ConnectionConfig =
            serde_json::from_str(r#"{"base_url":"http://localhost","timeout":5}"#).unwrap();
        assert!(!conn.disable_caching);
        assert_eq!(conn.timeout, Duration::from_secs(5));
    }
}
