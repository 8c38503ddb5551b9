/// CLI configuration
use crate::error::{CliError, Result};
use roster_client::{ClientConfig, DEFAULT_BASE_URL};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Config file read when no `--config` is given
pub const DEFAULT_CONFIG_FILE: &str = "roster.toml";

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RosterConfig {
    #[serde(default = "default_api")]
    pub api: ApiSettings,

    #[serde(default = "default_messages")]
    pub messages: MessageSettings,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiSettings {
    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(default)]
    pub api_key: Option<String>,

    /// Simulated server delay for login, in seconds
    #[serde(default)]
    pub login_delay_secs: Option<u32>,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MessageSettings {
    /// Shown when no specific error text can be extracted
    #[serde(default = "default_generic_error")]
    pub generic_error: String,
}

impl RosterConfig {
    /// Load configuration from file and environment.
    ///
    /// `path` must exist when given; otherwise `roster.toml` in the working
    /// directory is read if present. Environment variables prefixed with
    /// `ROSTER_` override file values, e.g. `ROSTER_API__BASE_URL`.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut settings = config::Config::builder();

        match path {
            Some(path) => {
                settings = settings.add_source(config::File::from(path).required(true));
            }
            None => {
                let default_path = Path::new(DEFAULT_CONFIG_FILE);
                if default_path.exists() {
                    settings = settings.add_source(config::File::from(default_path));
                }
            }
        }

        // Override with environment variables (prefixed with ROSTER_)
        settings = settings.add_source(
            config::Environment::with_prefix("ROSTER")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let config = settings.build()?.try_deserialize()?;
        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.api.base_url.trim().is_empty() {
            return Err(CliError::Config(
                "API base URL is required (set ROSTER_API__BASE_URL)".to_string(),
            ));
        }

        if self.messages.generic_error.trim().is_empty() {
            return Err(CliError::Config(
                "Generic error message cannot be empty".to_string(),
            ));
        }

        if self.api.timeout_secs == 0 {
            return Err(CliError::Config("Timeout must be at least 1 second".to_string()));
        }

        Ok(())
    }

    /// HTTP client settings derived from this configuration.
    pub fn client_config(&self) -> ClientConfig {
        let mut client = ClientConfig::new(self.api.base_url.clone()).with_timeouts(
            Duration::from_secs(self.api.timeout_secs),
            Duration::from_secs(self.api.connect_timeout_secs),
        );
        if let Some(key) = &self.api.api_key {
            client = client.with_api_key(key.clone());
        }
        if let Some(delay) = self.api.login_delay_secs {
            client = client.with_login_delay(delay);
        }
        client
    }
}

// Default values
fn default_api() -> ApiSettings {
    ApiSettings {
        base_url: default_base_url(),
        api_key: None,
        login_delay_secs: None,
        timeout_secs: default_timeout_secs(),
        connect_timeout_secs: default_connect_timeout_secs(),
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_connect_timeout_secs() -> u64 {
    10
}

fn default_messages() -> MessageSettings {
    MessageSettings {
        generic_error: default_generic_error(),
    }
}

fn default_generic_error() -> String {
    "Something went wrong. Please try again later.".to_string()
}

impl Default for RosterConfig {
    fn default() -> Self {
        Self {
            api: default_api(),
            messages: default_messages(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_are_valid() {
        let config = RosterConfig::default();
        assert_eq!(config.api.base_url, DEFAULT_BASE_URL);
        assert!(config.api.api_key.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn loads_partial_file_with_defaults() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(
            file,
            r#"
[api]
base_url = "http://localhost:3000/api"
api_key = "reqres-free-v1"
login_delay_secs = 3
"#
        )
        .unwrap();

        let config = RosterConfig::load(Some(file.path())).unwrap();
        assert_eq!(config.api.base_url, "http://localhost:3000/api");
        assert_eq!(config.api.api_key.as_deref(), Some("reqres-free-v1"));
        assert_eq!(config.api.login_delay_secs, Some(3));
        assert_eq!(config.api.timeout_secs, 30);
        assert_eq!(config.messages.generic_error, default_generic_error());

        let client = config.client_config();
        assert_eq!(client.login_delay_secs, Some(3));
        assert_eq!(client.timeout, Duration::from_secs(30));
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let result = RosterConfig::load(Some(Path::new("/nonexistent/roster.toml")));
        assert!(matches!(result, Err(CliError::Config(_))));
    }

    #[test]
    fn validate_rejects_blank_values() {
        let mut config = RosterConfig::default();
        config.api.base_url = "  ".to_string();
        assert!(config.validate().is_err());

        let mut config = RosterConfig::default();
        config.messages.generic_error = String::new();
        assert!(config.validate().is_err());

        let mut config = RosterConfig::default();
        config.api.timeout_secs = 0;
        assert!(config.validate().is_err());
    }
}
