//! Roster - Controllers
//!
//! Stateful controllers behind the login screen and the staff list.
//!
//! This crate provides:
//! - [`AuthController`]: input fields, local validation, one login request
//!   at a time, token-or-error result
//! - [`StaffListController`]: sequential page fetches, append-only record
//!   accumulation, "load more" affordance while pages remain
//!
//! # Architecture
//!
//! The controllers perform no I/O of their own. They depend only on the
//! [`roster_core::ApiClient`] trait, so the same code runs against the
//! HTTP client in `roster-client` or a test double.
//!
//! State is held in a `tokio::sync::watch` channel. Each operation
//! publishes complete steps only: an observer sees the input validated and
//! the request marked in flight together, and later sees the result with
//! loading cleared together.
//!
//! # Example
//!
//! ```rust,no_run
//! use roster_controllers::{AuthController, AuthResult};
//! # use roster_core::{ApiClient, ApiResult, Credentials, LoginResponse, StaffPage};
//! # struct Api;
//! # #[async_trait::async_trait]
//! # impl ApiClient for Api {
//! #     async fn login(&self, _: Credentials) -> ApiResult<Option<LoginResponse>> {
//! #         Ok(Some(LoginResponse::with_token("token")))
//! #     }
//! #     async fn fetch_page(&self, _: u32) -> ApiResult<Option<StaffPage>> { Ok(None) }
//! # }
//! # async fn run() {
//! let controller = AuthController::new(Api, "Something went wrong");
//! controller.set_email("eve.holt@reqres.in");
//! controller.set_password("cityslicka");
//!
//! match controller.submit_login().await {
//!     Ok(AuthResult::Success(token)) => println!("token: {token}"),
//!     Ok(other) => println!("login failed: {other:?}"),
//!     Err(e) => println!("not submitted: {e}"),
//! }
//! controller.reset_result();
//! # }
//! ```

mod auth;
mod error;
mod in_flight;
mod list;
pub mod types;

// Public exports
pub use auth::AuthController;
pub use error::{ControllerError, Result};
pub use list::StaffListController;
pub use types::{AuthResult, AuthState, ListState};
