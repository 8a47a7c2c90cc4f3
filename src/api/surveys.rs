//! Surveys service.

use super::{delete_record, get_record, send_record, ListParams};
use crate::auth::AuthContext;
use crate::error::{Result, ResultExt};
use crate::pagination::handle_pagination;
use crate::types::{merge_fields, Fields, Record};
use reqwest::Method;
use serde_json::Value;

/// Service for survey operations.
///
/// # Example
///
/// ```no_run
/// # async fn example(auth: surveymonkey_client::AuthContext) -> surveymonkey_client::Result<()> {
/// use surveymonkey_client::api::{ListParams, Surveys};
///
/// let surveys = Surveys::new(auth);
/// let all = surveys.list(&ListParams::new()).await?;
/// println!("Found {} surveys", all.len());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Surveys {
    auth: AuthContext,
}

impl Surveys {
    /// Create the service on top of a shared auth context
    pub fn new(auth: AuthContext) -> Self {
        Self { auth }
    }

    /// List every survey, following pagination.
    pub async fn list(&self, params: &ListParams) -> Result<Vec<Record>> {
        let url = self.auth.endpoint(&["surveys"])?;
        handle_pagination(&self.auth, &url, params.to_query()).await
    }

    /// Get a survey.
    pub async fn get(&self, survey_id: &str) -> Result<Record> {
        let url = self.auth.endpoint(&["surveys", survey_id])?;
        get_record(&self.auth, &url)
            .await
            .context("Error getting survey details")
    }

    /// Get a survey with its pages and questions expanded.
    pub async fn details(&self, survey_id: &str) -> Result<Record> {
        let url = self.auth.endpoint(&["surveys", survey_id, "details"])?;
        get_record(&self.auth, &url)
            .await
            .context("Error getting expanded survey details")
    }

    /// Create a survey.
    ///
    /// `extra` is merged over `{"title": title}`; a `title` in `extra` wins.
    pub async fn create(&self, title: &str, extra: Fields) -> Result<Record> {
        let url = self.auth.endpoint(&["surveys"])?;
        let mut base = Fields::new();
        base.insert("title".to_string(), Value::String(title.to_string()));

        send_record(&self.auth, Method::POST, &url, merge_fields(base, extra))
            .await
            .context("Error creating survey")
    }

    /// Update a survey with the given fields.
    pub async fn update(&self, survey_id: &str, fields: Fields) -> Result<Record> {
        let url = self.auth.endpoint(&["surveys", survey_id])?;
        send_record(&self.auth, Method::PATCH, &url, fields)
            .await
            .context("Error updating survey")
    }

    /// Delete a survey.
    pub async fn delete(&self, survey_id: &str) -> Result<bool> {
        let url = self.auth.endpoint(&["surveys", survey_id])?;
        delete_record(&self.auth, &url)
            .await
            .context("Error deleting survey")
    }
}
