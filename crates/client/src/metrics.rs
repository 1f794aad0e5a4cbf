//! Metrics collection for API call performance.
//!
//! This module provides metrics collection for UptimeRobot API calls, including:
//! - Request latency histograms
//! - Request and error counters
//! - Error categorization
//!
//! # What this module does NOT handle:
//! - Metrics exposition/export (install a recorder from the `metrics` ecosystem)
//! - Persistent storage of metrics
//!
//! # Invariants
//! - All metrics use consistent label names: `method`, `status`, `error_category`
//! - `method` is the remote API method name (e.g. `getMonitors`)
//! - Metric recording is infallible and zero-cost when no recorder is installed

use crate::error::ClientError;
use std::time::Duration;

/// Metric name for request duration histogram.
pub const METRIC_REQUEST_DURATION: &str = "uptimerobot_api_request_duration_seconds";

/// Metric name for total request counter.
pub const METRIC_REQUESTS_TOTAL: &str = "uptimerobot_api_requests_total";

/// Metric name for error counter.
pub const METRIC_ERRORS_TOTAL: &str = "uptimerobot_api_errors_total";

/// Error categories for metrics labeling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Connection, DNS, TLS or timeout failures.
    Transport,
    /// Non-success HTTP status.
    HttpStatus,
    /// Body could not be decoded.
    Decode,
    /// `stat` other than `ok`.
    Api,
    /// Input rejected before sending.
    Validation,
}

impl ErrorCategory {
    /// Returns the string label for this error category.
    pub const fn as_str(&self) -> &'static str {
        match self {
            ErrorCategory::Transport => "transport",
            ErrorCategory::HttpStatus => "http_status",
            ErrorCategory::Decode => "decode",
            ErrorCategory::Api => "api",
            ErrorCategory::Validation => "validation",
        }
    }
}

impl From<&ClientError> for ErrorCategory {
    fn from(error: &ClientError) -> Self {
        match error {
            ClientError::HttpError(e) if e.is_decode() => ErrorCategory::Decode,
            ClientError::HttpError(_) => ErrorCategory::Transport,
            ClientError::HttpStatus { .. } => ErrorCategory::HttpStatus,
            ClientError::InvalidResponse(_) => ErrorCategory::Decode,
            ClientError::ApiError { .. } => ErrorCategory::Api,
            ClientError::ValidationError(_)
            | ClientError::InvalidUrl(_)
            | ClientError::MissingApiKey => ErrorCategory::Validation,
        }
    }
}

/// Metrics collector for UptimeRobot API calls.
///
/// A thin wrapper around the `metrics` crate macros that keeps metric names
/// and labels consistent.
///
/// # Example
///
/// ```rust,ignore
/// use uptimerobot_client::metrics::MetricsCollector;
///
/// let collector = MetricsCollector::new();
/// collector.record_request_duration("getMonitors", Duration::from_millis(150), Some(200));
/// ```
#[derive(Debug, Clone, Default)]
pub struct MetricsCollector {
    enabled: bool,
}

impl MetricsCollector {
    /// Create an enabled collector.
    pub fn new() -> Self {
        Self { enabled: true }
    }

    /// Create a collector that records nothing.
    pub fn disabled() -> Self {
        Self { enabled: false }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Record the duration of an API request.
    ///
    /// `status` is `None` when the request failed before a response arrived.
    pub fn record_request_duration(&self, method: &str, duration: Duration, status: Option<u16>) {
        if !self.enabled {
            return;
        }

        let status_label = status.map_or("error".to_string(), |s| s.to_string());

        metrics::histogram!(METRIC_REQUEST_DURATION,
            "method" => method.to_string(),
            "status" => status_label,
        )
        .record(duration.as_secs_f64());
    }

    /// Record a request attempt.
    pub fn record_request(&self, method: &str) {
        if !self.enabled {
            return;
        }

        metrics::counter!(METRIC_REQUESTS_TOTAL,
            "method" => method.to_string(),
        )
        .increment(1);
    }

    /// Record an error.
    pub fn record_error(&self, method: &str, category: ErrorCategory) {
        if !self.enabled {
            return;
        }

        metrics::counter!(METRIC_ERRORS_TOTAL,
            "method" => method.to_string(),
            "error_category" => category.as_str(),
        )
        .increment(1);
    }

    /// Record an error, categorizing it automatically.
    pub fn record_client_error(&self, method: &str, error: &ClientError) {
        self.record_error(method, ErrorCategory::from(error));
    }
}
