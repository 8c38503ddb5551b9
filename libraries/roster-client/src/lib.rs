//! Roster HTTP Client
//!
//! reqwest-backed implementation of [`roster_core::ApiClient`] for a
//! reqres-style staff directory API.
//!
//! # Features
//!
//! - **Authentication**: `POST /login` with email and password
//! - **Staff listing**: `GET /users?page=N`
//! - Optional `x-api-key` header and server-side login delay
//!
//! Call failures are reported as [`roster_core::ApiError`]: non-2xx
//! responses keep their raw body so callers can extract the server's
//! message, and 2xx responses with an empty body decode to `None`.
//!
//! # Example
//!
//! ```ignore
//! use roster_client::{ClientConfig, HttpApiClient};
//! use roster_core::ApiClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = HttpApiClient::new(ClientConfig::default())?;
//!
//!     if let Some(page) = client.fetch_page(1).await? {
//!         println!("{} staff on page 1", page.data.unwrap_or_default().len());
//!     }
//!
//!     Ok(())
//! }
//! ```

mod auth;
mod client;
mod error;
mod staff;
mod types;

pub use client::HttpApiClient;
pub use error::{ClientError, Result};
pub use types::{ClientConfig, DEFAULT_BASE_URL};

pub use auth::AuthClient;
pub use staff::StaffClient;
