//! Centralized constants for the UptimeRobot client workspace.
//!
//! This module contains default values and API limits used across crates to
//! avoid magic number duplication.

// =============================================================================
// Connection & Timeout Defaults
// =============================================================================

/// Base URL of the public UptimeRobot API (v1).
pub const DEFAULT_BASE_URL: &str = "https://api.uptimerobot.com";

/// Default HTTP request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Maximum allowed request timeout in seconds (1 hour).
pub const MAX_TIMEOUT_SECS: u64 = 3600;

/// Default maximum number of HTTP redirects to follow.
pub const DEFAULT_MAX_REDIRECTS: usize = 5;

// =============================================================================
// API Limits
// =============================================================================

/// Page size requested from paginated list methods.
pub const DEFAULT_PAGE_LIMIT: usize = 50;

/// Longest friendly name the API accepts for an alert contact.
pub const MAX_FRIENDLY_NAME_LEN: usize = 30;

/// Longest response-time window (in days) the API serves in one request.
pub const MAX_RESPONSE_TIME_RANGE_DAYS: i64 = 7;
