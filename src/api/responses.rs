//! Survey responses service.

use super::{delete_record, get_record, send_record, ListParams};
use crate::auth::AuthContext;
use crate::error::{Result, ResultExt};
use crate::pagination::handle_pagination;
use crate::types::{Fields, Record};
use reqwest::Method;

/// Service for the responses of a survey.
#[derive(Debug, Clone)]
pub struct Responses {
    auth: AuthContext,
}

impl Responses {
    /// Create the service on top of a shared auth context
    pub fn new(auth: AuthContext) -> Self {
        Self { auth }
    }

    /// List every response of a survey, following pagination.
    pub async fn list(&self, survey_id: &str, params: &ListParams) -> Result<Vec<Record>> {
        let url = self.auth.endpoint(&["surveys", survey_id, "responses"])?;
        handle_pagination(&self.auth, &url, params.to_query()).await
    }

    /// Get a single response.
    pub async fn get(&self, survey_id: &str, response_id: &str) -> Result<Record> {
        let url = self
            .auth
            .endpoint(&["surveys", survey_id, "responses", response_id])?;
        get_record(&self.auth, &url)
            .await
            .context("Error getting response details")
    }

    /// Create a response. `data` is sent as the request body unchanged.
    pub async fn create(&self, survey_id: &str, data: Fields) -> Result<Record> {
        let url = self.auth.endpoint(&["surveys", survey_id, "responses"])?;
        send_record(&self.auth, Method::POST, &url, data)
            .await
            .context("Error creating response")
    }

    /// Update a response with the given fields.
    pub async fn update(
        &self,
        survey_id: &str,
        response_id: &str,
        fields: Fields,
    ) -> Result<Record> {
        let url = self
            .auth
            .endpoint(&["surveys", survey_id, "responses", response_id])?;
        send_record(&self.auth, Method::PATCH, &url, fields)
            .await
            .context("Error updating response")
    }

    /// Delete a response.
    pub async fn delete(&self, survey_id: &str, response_id: &str) -> Result<bool> {
        let url = self
            .auth
            .endpoint(&["surveys", survey_id, "responses", response_id])?;
        delete_record(&self.auth, &url)
            .await
            .context("Error deleting response")
    }
}
