//! Client facade
//!
//! [`SurveyMonkeyClient`] builds one [`AuthContext`] and hands out resource
//! services that all share it.
//!
//! ```no_run
//! use surveymonkey_client::{ClientConfig, SurveyMonkeyClient};
//! use surveymonkey_client::api::ListParams;
//!
//! # async fn example() -> surveymonkey_client::Result<()> {
//! let client = SurveyMonkeyClient::new(ClientConfig::new("my-access-token"))?;
//! if client.verify_token().await {
//!     let surveys = client.surveys().list(&ListParams::new()).await?;
//!     println!("Found {} surveys", surveys.len());
//! }
//! # Ok(())
//! # }
//! ```

use crate::api::{Collectors, Responses, Surveys};
use crate::auth::AuthContext;
use crate::config::ClientConfig;
use crate::error::Result;

/// Entry point to the API
#[derive(Debug, Clone)]
pub struct SurveyMonkeyClient {
    auth: AuthContext,
}

impl SurveyMonkeyClient {
    /// Create a client from an explicit configuration
    pub fn new(config: ClientConfig) -> Result<Self> {
        Ok(Self {
            auth: AuthContext::new(config)?,
        })
    }

    /// The shared auth context
    pub fn auth(&self) -> &AuthContext {
        &self.auth
    }

    /// Survey operations
    pub fn surveys(&self) -> Surveys {
        Surveys::new(self.auth.clone())
    }

    /// Response operations
    pub fn responses(&self) -> Responses {
        Responses::new(self.auth.clone())
    }

    /// Collector operations
    pub fn collectors(&self) -> Collectors {
        Collectors::new(self.auth.clone())
    }

    /// See [`AuthContext::verify_token`]
    pub async fn verify_token(&self) -> bool {
        self.auth.verify_token().await
    }

    /// See [`AuthContext::refresh_token`]
    pub async fn refresh_token(&self, refresh_token: &str) -> Result<String> {
        self.auth.refresh_token(refresh_token).await
    }
}
