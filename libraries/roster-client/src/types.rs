//! Configuration for the Roster HTTP client.

use std::time::Duration;

/// Public reqres-compatible endpoint
pub const DEFAULT_BASE_URL: &str = "https://reqres.in/api";

/// Configuration for connecting to a directory API.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the API (e.g., "https://reqres.in/api")
    pub base_url: String,
    /// Sent as `x-api-key` on every request when set
    pub api_key: Option<String>,
    /// Server-side simulated delay for login, passed as `?delay=`
    pub login_delay_secs: Option<u32>,
    /// Whole-request timeout
    pub timeout: Duration,
    pub connect_timeout: Duration,
}

impl ClientConfig {
    /// Create a config with just the base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: None,
            login_delay_secs: None,
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
        }
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn with_login_delay(mut self, secs: u32) -> Self {
        self.login_delay_secs = Some(secs);
        self
    }

    pub fn with_timeouts(mut self, timeout: Duration, connect_timeout: Duration) -> Self {
        self.timeout = timeout;
        self.connect_timeout = connect_timeout;
        self
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}
