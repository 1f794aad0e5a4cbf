//! Environment variable parsing for configuration.
//!
//! Invariants:
//! - Empty or whitespace-only environment variables are treated as unset.
//! - Returned values are trimmed (leading/trailing whitespace removed).
//! - Invalid numeric or boolean values return `ConfigError::InvalidValue`.

use secrecy::SecretString;
use std::time::Duration;

use super::builder::ConfigLoader;
use super::error::ConfigError;

/// Environment variable holding the API key.
pub(crate) const ENV_API_KEY: &str = "UPTIMEROBOT_API_KEY";
/// Environment variable overriding the API base URL.
pub(crate) const ENV_BASE_URL: &str = "UPTIMEROBOT_BASE_URL";
/// Environment variable holding the request timeout in seconds.
pub(crate) const ENV_TIMEOUT: &str = "UPTIMEROBOT_TIMEOUT";
/// Environment variable toggling cache-busting request parameters.
pub(crate) const ENV_DISABLE_CACHING: &str = "UPTIMEROBOT_DISABLE_CACHING";

/// Trimmed value of `key`, or `None` when it is unset or blank.
pub fn env_var_or_none(key: &str) -> Option<String> {
    let value = std::env::var(key).ok()?;
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// Apply environment variable configuration to the loader.
pub fn apply_env(loader: &mut ConfigLoader) -> Result<(), ConfigError> {
    if let Some(key) = env_var_or_none(ENV_API_KEY) {
        loader.api_key = Some(SecretString::from(key));
    }
    if let Some(url) = env_var_or_none(ENV_BASE_URL) {
        loader.base_url = Some(url);
    }
    if let Some(timeout) = env_var_or_none(ENV_TIMEOUT) {
        let secs: u64 = timeout.parse().map_err(|_| ConfigError::InvalidValue {
            var: ENV_TIMEOUT.to_string(),
            message: "must be a number".to_string(),
        })?;
        loader.timeout = Some(Duration::from_secs(secs));
    }
    if let Some(disable) = env_var_or_none(ENV_DISABLE_CACHING) {
        let disable = parse_bool(&disable).ok_or_else(|| ConfigError::InvalidValue {
            var: ENV_DISABLE_CACHING.to_string(),
            message: "must be true or false".to_string(),
        })?;
        loader.disable_caching = Some(disable);
    }
    Ok(())
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" => Some(true),
        "0" | "false" | "no" => Some(false),
        _ => None,
    }
}
