/// CLI error types
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Client error: {0}")]
    Client(#[from] roster_client::ClientError),

    #[error("Login failed: {0}")]
    LoginFailed(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// `loaded` holds the view list fetched before the failure
    #[error("Failed to load staff: {message}")]
    Listing {
        message: String,
        loaded: Vec<roster_core::ListItem>,
    },
}

impl From<config::ConfigError> for CliError {
    fn from(err: config::ConfigError) -> Self {
        CliError::Config(err.to_string())
    }
}
