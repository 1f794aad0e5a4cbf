//! Errors raised while assembling a [`Config`](crate::Config).
//!
//! Messages name the offending setting. `.env` failures report a position or
//! an I/O kind only, so a broken line holding a key never reaches the terminal.

use std::io::ErrorKind;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// A setting was present but could not be used.
    #[error("Invalid value for {var}: {message}")]
    InvalidValue { var: String, message: String },

    #[error("API key is required. Set UPTIMEROBOT_API_KEY or pass --api-key.")]
    MissingApiKey,

    #[error("invalid timeout: {message}")]
    InvalidTimeout { message: String },

    /// The `.env` file has a syntax error at `error_index`.
    #[error("Failed to parse .env file at position {error_index} (set DOTENV_DISABLED=1 to skip .env loading)")]
    DotenvParse { error_index: usize },

    #[error("Failed to read .env file: {kind}")]
    DotenvIo { kind: ErrorKind },

    #[error("Failed to load .env file (set DOTENV_DISABLED=1 to skip .env loading)")]
    DotenvUnknown,
}

impl ConfigError {
    /// Map a dotenvy failure, or `None` when there simply is no `.env` file.
    pub(crate) fn from_dotenv(err: dotenvy::Error) -> Option<Self> {
        match err {
            dotenvy::Error::Io(io) if io.kind() == ErrorKind::NotFound => None,
            dotenvy::Error::Io(io) => Some(Self::DotenvIo { kind: io.kind() }),
            dotenvy::Error::LineParse(_, error_index) => Some(Self::DotenvParse { error_index }),
            _ => Some(Self::DotenvUnknown),
        }
    }

    fn base_url(message: String) -> Self {
        Self::InvalidValue {
            var: "base_url".to_string(),
            message,
        }
    }
}

/// Parse `raw` as an absolute http(s) URL and drop trailing slashes.
pub(crate) fn normalize_base_url(raw: &str) -> Result<String, ConfigError> {
    let parsed = url::Url::parse(raw.trim()).map_err(|e| {
        ConfigError::base_url(format!(
            "expected an absolute http(s) URL such as {}: {e}",
            crate::constants::DEFAULT_BASE_URL
        ))
    })?;

    match parsed.scheme() {
        "http" | "https" => {}
        other => {
            return Err(ConfigError::base_url(format!(
                "scheme must be http or https, got: {other}"
            )));
        }
    }
    if parsed.host_str().is_none() {
        return Err(ConfigError::base_url("a host is required".to_string()));
    }

    Ok(parsed.as_str().trim_end_matches('/').to_string())
}
