//! Authentication calls.

use crate::client::{decode_optional, send, HttpApiClient};
use reqwest::Method;
use roster_core::{ApiResult, Credentials, LoginResponse};
use tracing::{debug, info, warn};

/// Authentication client for the directory API.
pub struct AuthClient<'a> {
    client: &'a HttpApiClient,
    delay_secs: Option<u32>,
}

impl<'a> AuthClient<'a> {
    pub(crate) fn new(client: &'a HttpApiClient, delay_secs: Option<u32>) -> Self {
        Self { client, delay_secs }
    }

    /// Login with email and password.
    ///
    /// Returns `Ok(None)` when the server answered 2xx without a body.
    pub async fn login(&self, credentials: &Credentials) -> ApiResult<Option<LoginResponse>> {
        debug!(email = %credentials.email, delay = ?self.delay_secs, "Attempting login");

        let mut request = self.client.request(Method::POST, "login").json(credentials);
        if let Some(delay) = self.delay_secs {
            request = request.query(&[("delay", delay)]);
        }

        let response = send(request).await?;
        let result = decode_optional::<LoginResponse>(response, "login response").await;

        match &result {
            Ok(Some(body)) if body.usable_token().is_some() => {
                info!(email = %credentials.email, "Login successful");
            }
            Ok(_) => warn!(email = %credentials.email, "Login response carried no token"),
            Err(e) => warn!(email = %credentials.email, error = %e, "Login failed"),
        }

        result
    }
}
