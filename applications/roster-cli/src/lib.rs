//! Roster CLI Library
//!
//! Configuration and subcommand flows for the `roster` binary.
//!
//! This library exposes the core components for testing purposes.

pub mod commands;
pub mod config;
pub mod error;

// Re-export commonly used types for convenience
pub use config::RosterConfig;
pub use error::{CliError, Result};
