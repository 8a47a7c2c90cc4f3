//! Client configuration
//!
//! The access token and every other setting reach the client through an
//! explicit [`ClientConfig`]. Configs can be built in code, loaded from a
//! YAML/JSON file, or (for the binary) read from the environment.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Default API base URL
pub const DEFAULT_BASE_URL: &str = "https://api.surveymonkey.com/v3";

/// Environment variable holding the access token
pub const TOKEN_ENV_VAR: &str = "SURVEYMONKEY_ACCESS_TOKEN";

/// Environment variable overriding the base URL
pub const BASE_URL_ENV_VAR: &str = "SURVEYMONKEY_BASE_URL";

/// Configuration for a client session
#[derive(Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Base URL for all requests
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Bearer access token
    #[serde(default)]
    pub access_token: String,

    /// Request timeout in milliseconds
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,

    /// User agent string
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Stop following `links.next` after this many pages
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_pages: Option<u32>,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_timeout_ms() -> u64 {
    30_000
}

fn duration_ms(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}

fn default_user_agent() -> String {
    format!("surveymonkey-client/{}", crate::VERSION)
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            access_token: String::new(),
            timeout_ms: default_timeout_ms(),
            user_agent: default_user_agent(),
            max_pages: None,
        }
    }
}

impl ClientConfig {
    /// Create a config with the given access token and defaults elsewhere
    pub fn new(access_token: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
            ..Default::default()
        }
    }

    /// Create a new config builder
    pub fn builder() -> ClientConfigBuilder {
        ClientConfigBuilder::default()
    }

    /// Parse a config from YAML (JSON is valid YAML, so both work)
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(content)?;
        Ok(config)
    }

    /// Load a config file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }

    /// Build a config from `SURVEYMONKEY_ACCESS_TOKEN` and, if set,
    /// `SURVEYMONKEY_BASE_URL`
    pub fn from_env() -> Result<Self> {
        let token = std::env::var(TOKEN_ENV_VAR)
            .ok()
            .filter(|t| !t.is_empty())
            .ok_or_else(|| {
                Error::config(format!("{TOKEN_ENV_VAR} environment variable is not set."))
            })?;

        let mut config = Self::new(token);
        if let Ok(base_url) = std::env::var(BASE_URL_ENV_VAR) {
            if !base_url.is_empty() {
                config.base_url = base_url;
            }
        }
        Ok(config)
    }

    /// Request timeout as a `Duration`
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    /// Set the request timeout, kept at millisecond resolution
    pub fn set_timeout(&mut self, timeout: Duration) {
        self.timeout_ms = duration_ms(timeout);
    }

    /// Check the fields that must be present before any request is made
    pub fn validate(&self) -> Result<()> {
        if self.access_token.trim().is_empty() {
            return Err(Error::config("Access token must not be empty"));
        }
        url::Url::parse(&self.base_url)?;
        if self.timeout_ms == 0 {
            return Err(Error::config("timeout must be greater than zero"));
        }
        if self.max_pages == Some(0) {
            return Err(Error::config("max_pages must be at least 1"));
        }
        Ok(())
    }
}

impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("base_url", &self.base_url)
            .field("access_token", &"<redacted>")
            .field("timeout_ms", &self.timeout_ms)
            .field("user_agent", &self.user_agent)
            .field("max_pages", &self.max_pages)
            .finish()
    }
}

/// Builder for [`ClientConfig`]
#[derive(Default)]
pub struct ClientConfigBuilder {
    config: ClientConfig,
}

impl ClientConfigBuilder {
    /// Set the access token
    pub fn access_token(mut self, token: impl Into<String>) -> Self {
        self.config.access_token = token.into();
        self
    }

    /// Set the base URL
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.config.base_url = url.into();
        self
    }

    /// Set the request timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.set_timeout(timeout);
        self
    }

    /// Set user agent
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.config.user_agent = agent.into();
        self
    }

    /// Cap the number of pages a list call may follow
    pub fn max_pages(mut self, max_pages: u32) -> Self {
        self.config.max_pages = Some(max_pages);
        self
    }

    /// Build the config
    pub fn build(self) -> ClientConfig {
        self.config
    }
}
