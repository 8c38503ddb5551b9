//! Main Roster HTTP client.

use crate::auth::AuthClient;
use crate::error::{ClientError, Result};
use crate::staff::StaffClient;
use crate::types::ClientConfig;
use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response};
use roster_core::{ApiClient, ApiError, ApiResult, Credentials, LoginResponse, StaffPage};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};
use url::Url;

/// Header carrying the optional API key
const API_KEY_HEADER: &str = "x-api-key";

/// HTTP implementation of [`ApiClient`].
///
/// # Example
///
/// ```ignore
/// use roster_client::{ClientConfig, HttpApiClient};
/// use roster_core::{ApiClient, Credentials};
///
/// let client = HttpApiClient::new(ClientConfig::default())?;
/// let response = client
///     .login(Credentials::new("eve.holt@reqres.in", "cityslicka"))
///     .await?;
/// ```
pub struct HttpApiClient {
    http: Client,
    config: ClientConfig,
}

impl HttpApiClient {
    /// Create a new client with the given configuration.
    pub fn new(config: ClientConfig) -> Result<Self> {
        if config.base_url.trim().is_empty() {
            return Err(ClientError::InvalidUrl("URL cannot be empty".into()));
        }

        let base_url = config.base_url.trim().trim_end_matches('/').to_string();
        let parsed =
            Url::parse(&base_url).map_err(|e| ClientError::InvalidUrl(format!("{base_url}: {e}")))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ClientError::InvalidUrl(
                "URL must start with http:// or https://".into(),
            ));
        }

        let http = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .user_agent(format!("Roster/{}", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http,
            config: ClientConfig { base_url, ..config },
        })
    }

    /// Get the normalized base URL.
    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    /// Get an authentication client.
    pub fn auth(&self) -> AuthClient<'_> {
        AuthClient::new(self, self.config.login_delay_secs)
    }

    /// Get a staff listing client.
    pub fn staff(&self) -> StaffClient<'_> {
        StaffClient::new(self)
    }

    /// Build a request for `path` under the base URL, with the API key attached.
    pub(crate) fn request(&self, method: reqwest::Method, path: &str) -> RequestBuilder {
        let url = format!("{}/{}", self.config.base_url, path.trim_start_matches('/'));
        let builder = self.http.request(method, url);
        match &self.config.api_key {
            Some(key) => builder.header(API_KEY_HEADER, key),
            None => builder,
        }
    }
}

#[async_trait]
impl ApiClient for HttpApiClient {
    async fn login(&self, credentials: Credentials) -> ApiResult<Option<LoginResponse>> {
        self.auth().login(&credentials).await
    }

    async fn fetch_page(&self, page: u32) -> ApiResult<Option<StaffPage>> {
        self.staff().fetch_page(page).await
    }
}

/// Send a request, mapping transport failures to [`ApiError::Transport`].
pub(crate) async fn send(request: RequestBuilder) -> ApiResult<Response> {
    request.send().await.map_err(|e| {
        if e.is_connect() || e.is_timeout() {
            warn!(error = %e, "Server unreachable");
        } else {
            warn!(error = %e, "Request failed");
        }
        ApiError::transport(e.to_string())
    })
}

/// Decode a response into an optional body.
///
/// 2xx with an empty or `null` body yields `Ok(None)`. Non-2xx responses
/// become [`ApiError::Status`] carrying the raw body text.
pub(crate) async fn decode_optional<T: DeserializeOwned>(
    response: Response,
    what: &str,
) -> ApiResult<Option<T>> {
    let status = response.status();
    let text = response
        .text()
        .await
        .map_err(|e| ApiError::transport(e.to_string()))?;

    if !status.is_success() {
        debug!(status = %status, what, "Server returned error status");
        return Err(ApiError::status(status.as_u16(), text));
    }

    let trimmed = text.trim();
    if trimmed.is_empty() || trimmed == "null" {
        debug!(what, "Empty response body");
        return Ok(None);
    }

    serde_json::from_str(trimmed)
        .map(Some)
        .map_err(|e| ApiError::Decode(format!("Failed to parse {what}: {e}")))
}
