//! Roster Core
//!
//! Platform-agnostic types, validation and the API seam shared by the
//! Roster client and controllers.
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Domain Types**: `Credentials`, `StaffMember`, `StaffPage`, `ListItem`
//! - **Validation**: email and password rules applied before any request
//! - **Core Traits**: `ApiClient`, the only thing the controllers call
//! - **Error Handling**: `ApiError` and the user-facing message rules
//!
//! # Example
//!
//! ```rust
//! use roster_core::validation::{is_valid_email, is_valid_password};
//! use roster_core::ApiError;
//!
//! assert!(is_valid_email("eve.holt@reqres.in"));
//! assert!(!is_valid_password("12345"));
//!
//! let err = ApiError::status(400, r#"{"error":"Missing password"}"#);
//! assert_eq!(err.user_message("Something went wrong"), "Missing password");
//! ```

#![forbid(unsafe_code)]

pub mod error;
pub mod traits;
pub mod types;
pub mod validation;

pub use error::{ApiError, ApiResult};
pub use traits::ApiClient;
pub use types::{Credentials, ListItem, LoginResponse, StaffMember, StaffPage, ValidationState};
