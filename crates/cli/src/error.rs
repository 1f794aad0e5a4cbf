//! CLI exit codes for scripting and automation.
//!
//! Responsibilities:
//! - Define structured exit codes that scripts can use to distinguish error types.
//! - Map `ClientError` variants to appropriate exit codes.
//!
//! Does NOT handle:
//! - Error message formatting (handled by anyhow Display).
//!
//! Invariants:
//! - Any error that is not a `ClientError` exits with `GeneralError`.

use uptimerobot_client::ClientError;

/// Structured exit codes for `uptimerobot`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Command completed successfully.
    Success = 0,

    /// Unhandled or generic failure, including configuration problems.
    GeneralError = 1,

    /// The API rejected the call (`stat` other than `ok`, or a non-2xx status).
    ///
    /// Scripts should inspect the message; retrying the same call rarely helps.
    ApiError = 2,

    /// Network, timeout or DNS failure, or an unusable base URL.
    ///
    /// Scripts may retry with backoff.
    ConnectionError = 3,

    /// Input rejected before anything was sent.
    ///
    /// Scripts should fix the input and not retry the same request.
    ValidationError = 5,
}

impl ExitCode {
    /// Convert the exit code to an i32 for use with std::process::exit().
    pub const fn as_i32(self) -> i32 {
        self as u8 as i32
    }
}

impl From<&ClientError> for ExitCode {
    fn from(err: &ClientError) -> Self {
        match err {
            ClientError::ApiError { .. } | ClientError::HttpStatus { .. } => ExitCode::ApiError,

            ClientError::InvalidUrl(_) => ExitCode::ConnectionError,
            ClientError::HttpError(e) if e.is_connect() || e.is_timeout() => {
                ExitCode::ConnectionError
            }

            ClientError::ValidationError(_) | ClientError::MissingApiKey => {
                ExitCode::ValidationError
            }

            ClientError::HttpError(_) | ClientError::InvalidResponse(_) => ExitCode::GeneralError,
        }
    }
}

/// Extension trait for extracting exit codes from anyhow errors.
pub trait ExitCodeExt {
    fn exit_code(&self) -> ExitCode;
}

impl ExitCodeExt for anyhow::Error {
    fn exit_code(&self) -> ExitCode {
        self.chain()
            .find_map(|cause| cause.downcast_ref::<ClientError>())
            .map(ExitCode::from)
            .unwrap_or(ExitCode::GeneralError)
    }
}
