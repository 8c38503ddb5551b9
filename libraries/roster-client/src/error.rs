//! Error types for building the Roster HTTP client.

use thiserror::Error;

/// Errors that can occur while constructing a client.
///
/// Failures of individual API calls are reported as
/// [`roster_core::ApiError`] instead.
#[derive(Error, Debug)]
pub enum ClientError {
    /// HTTP client could not be built
    #[error("HTTP client setup failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Invalid base URL
    #[error("Invalid base URL: {0}")]
    InvalidUrl(String),
}

/// Result type for client construction.
pub type Result<T> = std::result::Result<T, ClientError>;
