/// The API seam the controllers depend on
use crate::error::ApiResult;
use crate::types::{Credentials, LoginResponse, StaffPage};
use async_trait::async_trait;
use std::sync::Arc;

/// Remote directory API.
///
/// Implementers perform the actual transport. `Ok(None)` means the call
/// succeeded but the response carried no body.
#[async_trait]
pub trait ApiClient: Send + Sync {
    /// Exchange credentials for a session token.
    ///
    /// # Errors
    /// Returns an error for non-2xx responses and transport failures
    async fn login(&self, credentials: Credentials) -> ApiResult<Option<LoginResponse>>;

    /// Fetch one page of staff records.
    ///
    /// # Arguments
    /// * `page` - 1-based page number
    ///
    /// # Errors
    /// Returns an error for non-2xx responses and transport failures
    async fn fetch_page(&self, page: u32) -> ApiResult<Option<StaffPage>>;
}

#[async_trait]
impl<T: ApiClient + ?Sized> ApiClient for Arc<T> {
    async fn login(&self, credentials: Credentials) -> ApiResult<Option<LoginResponse>> {
        (**self).login(credentials).await
    }

    async fn fetch_page(&self, page: u32) -> ApiResult<Option<StaffPage>> {
        (**self).fetch_page(page).await
    }
}
