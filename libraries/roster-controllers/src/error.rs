//! Error types for controller operations

use thiserror::Error;

/// Reasons a controller operation did not issue a request.
///
/// These are not failures of the request itself; those are reconciled
/// into the controller's observable state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ControllerError {
    /// A request is already outstanding
    #[error("A request is already in flight")]
    Busy,

    /// Local validation rejected the input
    #[error("Invalid input (email: {email_invalid}, password: {password_invalid})")]
    InvalidInput {
        email_invalid: bool,
        password_invalid: bool,
    },
}

/// Result type for controller operations
pub type Result<T> = std::result::Result<T, ControllerError>;
