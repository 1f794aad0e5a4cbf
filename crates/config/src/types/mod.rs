//! Configuration type definitions for the UptimeRobot client.
//!
//! Responsibilities:
//! - Define the connection and authentication settings consumed by the client builder.
//! - Provide serialization helpers for sensitive types (secrets, durations).
//!
//! Does NOT handle:
//! - Configuration loading from files or environment variables (see `loader` module).
//! - Actual network connections (see client crate).
//!
//! Invariants:
//! - The API key is always held as a `secrecy::SecretString`.
//! - Serialization helpers (`secret_string`, `duration_seconds`) are private modules.

mod auth;
mod connection;

pub use auth::AuthConfig;
pub use connection::{Config, ConnectionConfig};
