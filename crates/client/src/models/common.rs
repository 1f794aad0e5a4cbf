//! Response envelope shared by every API method.
//!
//! Every response carries `stat` (`ok` or `fail`). Failed responses add an
//! error `id` and a human-readable `message`. Resource payloads sit next to
//! these fields and are modelled per resource.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{ClientError, Result};
use crate::models::ApiErrorCode;

/// Value of the `stat` field.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Stat {
    Ok,
    #[default]
    Fail,
    Other(String),
}

impl Stat {
    pub fn as_str(&self) -> &str {
        match self {
            Stat::Ok => "ok",
            Stat::Fail => "fail",
            Stat::Other(s) => s,
        }
    }

    pub fn is_ok(&self) -> bool {
        matches!(self, Stat::Ok)
    }
}

impl From<&str> for Stat {
    fn from(value: &str) -> Self {
        match value {
            "ok" => Stat::Ok,
            "fail" => Stat::Fail,
            other => Stat::Other(other.to_string()),
        }
    }
}

impl fmt::Display for Stat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Stat {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Stat {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Stat::from(raw.as_str()))
    }
}

/// `stat`, `id` and `message` of a response. Also the full body of methods
/// that return nothing else of interest.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StatusResponse {
    /// Missing `stat` decodes as `fail`.
    #[serde(default)]
    pub stat: Stat,
    #[serde(
        default,
        deserialize_with = "crate::serde_helpers::opt_u32_from_string_or_number"
    )]
    pub id: Option<u32>,
    #[serde(default)]
    pub message: Option<String>,
}

impl StatusResponse {
    pub fn error_code(&self) -> Option<ApiErrorCode> {
        self.id.and_then(ApiErrorCode::from_id)
    }
}

/// A decoded response body that carries the common status fields.
pub trait ApiEnvelope {
    fn status(&self) -> &StatusResponse;
}

impl ApiEnvelope for StatusResponse {
    fn status(&self) -> &StatusResponse {
        self
    }
}

/// Map a non-`ok` stat to [`ClientError::ApiError`].
pub fn check_stat(method: &str, response: &StatusResponse) -> Result<()> {
    if response.stat.is_ok() {
        return Ok(());
    }

    let message = response
        .message
        .as_deref()
        .map(str::trim)
        .filter(|m| !m.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| format!("Got unexpected status: {}", response.stat));

    Err(ClientError::ApiError {
        method: method.to_string(),
        stat: response.stat.to_string(),
        code: response.id,
        message,
    })
}
