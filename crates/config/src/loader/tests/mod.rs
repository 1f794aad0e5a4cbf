//! Tests for the configuration loader.
//!
//! Invariants:
//! - Tests that touch process environment use `serial_test` and `env_lock()`.
//! - Temporary directories are cleaned up automatically via `tempfile`.

use std::sync::Mutex;

mod env_tests;

/// Returns the global test lock for environment variable isolation.
pub fn env_lock() -> &'static Mutex<()> {
    crate::test_util::global_test_lock()
}

/// Every variable the loader reads, cleared so host settings cannot leak in.
pub const CLEARED_ENV: [(&str, Option<&str>); 4] = [
    ("UPTIMEROBOT_API_KEY", None),
    ("UPTIMEROBOT_BASE_URL", None),
    ("UPTIMEROBOT_TIMEOUT", None),
    ("UPTIMEROBOT_DISABLE_CACHING", None),
];
