//! Auth context implementation
//!
//! Holds the current bearer token and base URL, builds request headers, and
//! talks to the `/users/me` and `/oauth/token` endpoints.

use super::types::{RefreshRequest, TokenResponse};
use crate::config::ClientConfig;
use crate::error::{Error, Result, ResultExt};
use crate::http::{HttpClient, HttpClientConfig, RequestConfig};
use crate::types::{into_record, Record};
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::Method;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{info, warn};
use url::Url;

/// Session state shared by every resource client
#[derive(Clone)]
pub struct AuthContext {
    /// Current access token, replaced by `refresh_token`
    token: Arc<RwLock<String>>,
    /// Base URL without a trailing slash
    base_url: Arc<str>,
    /// Page cap applied by `handle_pagination`
    max_pages: Option<u32>,
    /// HTTP client for all requests of this session
    http: HttpClient,
}

impl AuthContext {
    /// Create a context from an explicit configuration
    pub fn new(config: ClientConfig) -> Result<Self> {
        config.validate()?;
        let http = HttpClient::with_config(HttpClientConfig::from(&config))?;
        Ok(Self::with_client(config, http))
    }

    /// Create a context with default settings and the given token
    pub fn with_token(access_token: impl Into<String>) -> Result<Self> {
        Self::new(ClientConfig::new(access_token))
    }

    /// Create a context that reuses an existing HTTP client
    pub fn with_client(config: ClientConfig, http: HttpClient) -> Self {
        Self {
            token: Arc::new(RwLock::new(config.access_token)),
            base_url: Arc::from(config.base_url.trim_end_matches('/')),
            max_pages: config.max_pages,
            http,
        }
    }

    /// The current access token
    pub async fn token(&self) -> String {
        self.token.read().await.clone()
    }

    /// Base URL, without a trailing slash
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Join a path onto the base URL
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Append percent-encoded path segments to the base URL
    pub fn endpoint(&self, segments: &[&str]) -> Result<String> {
        let mut url = Url::parse(&self.base_url)?;
        url.path_segments_mut()
            .map_err(|()| Error::config(format!("Base URL cannot hold a path: {}", self.base_url)))?
            .pop_if_empty()
            .extend(segments);
        Ok(url.to_string())
    }

    /// Page cap for list operations, if any
    pub fn max_pages(&self) -> Option<u32> {
        self.max_pages
    }

    /// Headers for an authenticated request, built from the current token
    pub async fn headers(&self) -> Result<HeaderMap> {
        let token = self.token.read().await;
        let mut value = HeaderValue::from_str(&format!("Bearer {}", *token))
            .map_err(|e| Error::config(format!("Access token is not a valid header value: {e}")))?;
        value.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, value);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        Ok(headers)
    }

    /// Send an authenticated request and parse the JSON response
    pub(crate) async fn send_json(
        &self,
        method: Method,
        url: &str,
        config: RequestConfig,
    ) -> Result<serde_json::Value> {
        let config = config.headers(self.headers().await?);
        self.http.request_json(method, url, config).await
    }

    /// Send an authenticated request, ignoring the response body
    pub(crate) async fn send(&self, method: Method, url: &str) -> Result<()> {
        let config = RequestConfig::new().headers(self.headers().await?);
        self.http.request(method, url, config).await?;
        Ok(())
    }

    /// Fetch the user that owns the current token
    pub async fn current_user(&self) -> Result<Record> {
        let url = self.url("users/me");
        let body = self
            .send_json(Method::GET, &url, RequestConfig::new())
            .await
            .context("Error getting current user")?;
        into_record(body).context("Error getting current user")
    }

    /// Check the token against `/users/me`
    ///
    /// Returns `false` on any failure and logs why; never errors.
    pub async fn verify_token(&self) -> bool {
        match self.current_user().await {
            Ok(user) => {
                let scopes = user.get("scopes").cloned().unwrap_or_default();
                info!("Received scopes: {}", scopes);
                true
            }
            Err(e) => {
                warn!("Error verifying token: {}", e);
                if let Error::HttpStatus { status, body } = e.root() {
                    warn!("Status code: {}", status);
                    warn!("Response content: {}", body);
                }
                false
            }
        }
    }

    /// Exchange a refresh token for a new access token
    ///
    /// The token request carries no authorization header. On success the
    /// held token is replaced and the new value returned; on any failure the
    /// previous token stays in place.
    pub async fn refresh_token(&self, refresh_token: &str) -> Result<String> {
        let url = self.url("oauth/token");
        let body = serde_json::to_value(RefreshRequest::new(refresh_token))?;

        let response = self
            .http
            .request_json(Method::POST, &url, RequestConfig::new().json(body))
            .await
            .context("Error refreshing token")?;

        let token_response: TokenResponse = serde_json::from_value(response)
            .map_err(|e| Error::protocol(format!("Malformed token response: {e}")))
            .context("Error refreshing token")?;

        let new_token = token_response
            .access_token()
            .ok_or_else(|| Error::protocol("Failed to refresh token: no access_token in response"))?
            .to_string();

        HeaderValue::from_str(&format!("Bearer {new_token}")).map_err(|e| {
            Error::protocol(format!("Refreshed token is not a valid header value: {e}"))
        })?;

        *self.token.write().await = new_token.clone();
        info!("Access token refreshed");
        Ok(new_token)
    }
}

impl std::fmt::Debug for AuthContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthContext")
            .field("base_url", &self.base_url)
            .field("max_pages", &self.max_pages)
            .field("http", &self.http)
            .finish_non_exhaustive()
    }
}
