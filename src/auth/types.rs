//! Token endpoint payloads

use serde::{Deserialize, Serialize};

/// Body of the refresh-token exchange
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RefreshRequest {
    /// Always `refresh_token`
    pub grant_type: String,
    /// The refresh token to exchange
    pub refresh_token: String,
}

impl RefreshRequest {
    /// Create a refresh request for the given refresh token
    pub fn new(refresh_token: impl Into<String>) -> Self {
        Self {
            grant_type: "refresh_token".to_string(),
            refresh_token: refresh_token.into(),
        }
    }
}

/// OAuth2 token response
///
/// Every field is optional: the caller decides what a missing
/// `access_token` means.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TokenResponse {
    #[serde(default)]
    pub access_token: Option<String>,
    #[serde(default)]
    pub refresh_token: Option<String>,
    #[serde(default)]
    pub expires_in: Option<i64>,
    #[serde(default)]
    pub token_type: Option<String>,
}

impl TokenResponse {
    /// The access token, if present and non-empty
    pub fn access_token(&self) -> Option<&str> {
        self.access_token.as_deref().filter(|t| !t.is_empty())
    }
}
