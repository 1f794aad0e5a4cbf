//! Shared test utilities for `uptimerobot` CLI integration tests.
//!
//! Invariants / Assumptions:
//! - `DOTENV_DISABLED=1` keeps a local `.env` out of every test.
//! - `UPTIMEROBOT_API_KEY` is set to "test-key" unless overridden.

use assert_cmd::Command;

/// Returns a hermetic `uptimerobot` command.
pub fn uptimerobot_cmd() -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("uptimerobot");

    cmd.env("DOTENV_DISABLED", "1");
    cmd.env("UPTIMEROBOT_API_KEY", "test-key");

    cmd.env_remove("UPTIMEROBOT_BASE_URL")
        .env_remove("UPTIMEROBOT_TIMEOUT")
        .env_remove("UPTIMEROBOT_DISABLE_CACHING")
        .env_remove("RUST_LOG");

    cmd
}

/// Returns a hermetic `uptimerobot` command pointed at `base_url`.
#[allow(dead_code)]
pub fn uptimerobot_cmd_with_base_url(base_url: &str) -> Command {
    let mut cmd = uptimerobot_cmd();
    cmd.env("UPTIMEROBOT_BASE_URL", base_url);
    cmd
}
