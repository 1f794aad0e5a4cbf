//! Configuration management for the UptimeRobot client workspace.
//!
//! This crate provides types and loaders for managing the UptimeRobot API
//! connection settings from `.env` files, environment variables and explicit
//! overrides.

pub mod constants;
mod loader;
pub mod types;

pub use loader::{ConfigError, ConfigLoader, env_var_or_none};
pub use types::{AuthConfig, Config, ConnectionConfig};
