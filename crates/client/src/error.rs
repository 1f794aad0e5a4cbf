//! Error types for the UptimeRobot client.
//!
//! Two families of failure exist:
//! - transport and decode failures (network errors, non-2xx statuses, malformed JSON)
//! - logical failures reported by the API through a `stat` other than `ok`
//!
//! Client-side validation failures are raised before any request is sent.

use thiserror::Error;

use crate::models::ApiErrorCode;

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur during UptimeRobot client operations.
#[derive(Error, Debug)]
pub enum ClientError {
    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Non-success HTTP status. `url` holds the path only so the API key
    /// never ends up in an error message.
    #[error("HTTP status {status} at {url}: {body}")]
    HttpStatus {
        status: u16,
        url: String,
        body: String,
    },

    /// Response body could not be decoded into the expected shape.
    #[error("Invalid response format: {0}")]
    InvalidResponse(String),

    /// The API answered with a `stat` other than `ok`.
    #[error("API error from {method}: {message}{}", .code.map(|c| format!(" [error {c}]")).unwrap_or_default())]
    ApiError {
        method: String,
        stat: String,
        code: Option<u32>,
        message: String,
    },

    /// Input rejected before any request was sent.
    #[error("Validation failed: {0}")]
    ValidationError(String),

    /// Invalid URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// The client was built without an API key.
    #[error("API key is required")]
    MissingApiKey,
}

impl ClientError {
    /// The documented remote error, if this is an API error with a known id.
    pub fn api_error_code(&self) -> Option<ApiErrorCode> {
        match self {
            Self::ApiError { code: Some(code), .. } => ApiErrorCode::from_id(*code),
            _ => None,
        }
    }

    /// Check if this error was raised by client-side validation.
    pub fn is_validation_error(&self) -> bool {
        matches!(self, Self::ValidationError(_))
    }

    /// Check if this error was reported by the remote API.
    pub fn is_api_error(&self) -> bool {
        matches!(self, Self::ApiError { .. })
    }
}
