/// Error types for API calls made on behalf of the controllers
use serde::Deserialize;
use thiserror::Error;

/// Result type alias for `ApiClient` operations
pub type ApiResult<T> = std::result::Result<T, ApiError>;

/// Failure of a single API call.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Server answered with a non-2xx status
    #[error("Request failed with status {status}")]
    Status {
        status: u16,
        /// Raw response body, if any
        body: Option<String>,
    },

    /// Connection, timeout or other transport-level failure
    #[error("Transport error: {}", .0.as_deref().unwrap_or("unknown"))]
    Transport(Option<String>),

    /// A 2xx response whose body could not be decoded
    #[error("Failed to decode response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Create a status error from a response status and body text.
    ///
    /// An empty body is stored as `None`.
    pub fn status(status: u16, body: impl Into<String>) -> Self {
        let body = body.into();
        Self::Status {
            status,
            body: (!body.is_empty()).then_some(body),
        }
    }

    /// Create a transport error carrying a message.
    pub fn transport(msg: impl Into<String>) -> Self {
        Self::Transport(Some(msg.into()))
    }

    /// Human-readable message to show the user for this failure.
    ///
    /// Status errors use the `error` field of a `{"error": "..."}` body when
    /// it parses and is not blank, otherwise `generic`. Transport and decode
    /// errors surface their own message as-is and fall back to `generic`
    /// only when they carry none.
    pub fn user_message(&self, generic: &str) -> String {
        match self {
            ApiError::Status { body, .. } => body
                .as_deref()
                .and_then(error_from_body)
                .unwrap_or_else(|| generic.to_string()),
            ApiError::Transport(message) => message
                .as_deref()
                .filter(|m| !m.is_empty())
                .map_or_else(|| generic.to_string(), str::to_string),
            ApiError::Decode(message) if !message.is_empty() => message.clone(),
            ApiError::Decode(_) => generic.to_string(),
        }
    }
}

/// Structured error body returned by the API
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    error: Option<String>,
}

fn error_from_body(body: &str) -> Option<String> {
    serde_json::from_str::<ErrorBody>(body)
        .ok()?
        .error
        .filter(|e| !e.trim().is_empty())
}
