//! CLI command implementations.

pub mod account;
pub mod contacts;
pub mod monitors;
