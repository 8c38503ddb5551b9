//! Staff listing calls.

use crate::client::{decode_optional, send, HttpApiClient};
use reqwest::Method;
use roster_core::{ApiResult, StaffPage};
use tracing::{debug, warn};

/// Staff listing client for the directory API.
pub struct StaffClient<'a> {
    client: &'a HttpApiClient,
}

impl<'a> StaffClient<'a> {
    pub(crate) fn new(client: &'a HttpApiClient) -> Self {
        Self { client }
    }

    /// Fetch one page of staff records.
    ///
    /// # Arguments
    /// * `page` - 1-based page number
    pub async fn fetch_page(&self, page: u32) -> ApiResult<Option<StaffPage>> {
        debug!(page, "Fetching staff page");

        let request = self
            .client
            .request(Method::GET, "users")
            .query(&[("page", page)]);

        let response = send(request).await?;
        let result = decode_optional::<StaffPage>(response, "staff page").await;

        match &result {
            Ok(Some(body)) => debug!(
                page = ?body.page,
                total_pages = ?body.total_pages,
                records = body.data.as_ref().map_or(0, Vec::len),
                "Fetched staff page"
            ),
            Ok(None) => warn!(page, "Staff page response had no body"),
            Err(e) => warn!(page, error = %e, "Staff page request failed"),
        }

        result
    }
}
