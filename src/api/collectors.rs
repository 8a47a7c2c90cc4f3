//! Collectors service.
//!
//! A collector is the channel a survey gathers responses through
//! (`weblink`, `email`, ...).

use super::{delete_record, get_record, send_record, ListParams};
use crate::auth::AuthContext;
use crate::error::{Result, ResultExt};
use crate::pagination::handle_pagination;
use crate::types::{merge_fields, Fields, Record};
use reqwest::Method;
use serde_json::Value;

/// Service for the collectors of a survey.
#[derive(Debug, Clone)]
pub struct Collectors {
    auth: AuthContext,
}

impl Collectors {
    /// Create the service on top of a shared auth context
    pub fn new(auth: AuthContext) -> Self {
        Self { auth }
    }

    /// List every collector of a survey, following pagination.
    pub async fn list(&self, survey_id: &str, params: &ListParams) -> Result<Vec<Record>> {
        let url = self.auth.endpoint(&["surveys", survey_id, "collectors"])?;
        handle_pagination(&self.auth, &url, params.to_query()).await
    }

    /// Get a single collector.
    pub async fn get(&self, survey_id: &str, collector_id: &str) -> Result<Record> {
        let url = self
            .auth
            .endpoint(&["surveys", survey_id, "collectors", collector_id])?;
        get_record(&self.auth, &url)
            .await
            .context("Error getting collector details")
    }

    /// Create a collector of the given type (`weblink`, `email`, ...).
    ///
    /// `extra` is merged over `{"type": kind}`.
    pub async fn create(&self, survey_id: &str, kind: &str, extra: Fields) -> Result<Record> {
        let url = self.auth.endpoint(&["surveys", survey_id, "collectors"])?;
        let mut base = Fields::new();
        base.insert("type".to_string(), Value::String(kind.to_string()));

        send_record(&self.auth, Method::POST, &url, merge_fields(base, extra))
            .await
            .context("Error creating collector")
    }

    /// Update a collector with the given fields.
    pub async fn update(
        &self,
        survey_id: &str,
        collector_id: &str,
        fields: Fields,
    ) -> Result<Record> {
        let url = self
            .auth
            .endpoint(&["surveys", survey_id, "collectors", collector_id])?;
        send_record(&self.auth, Method::PATCH, &url, fields)
            .await
            .context("Error updating collector")
    }

    /// Delete a collector.
    pub async fn delete(&self, survey_id: &str, collector_id: &str) -> Result<bool> {
        let url = self
            .auth
            .endpoint(&["surveys", survey_id, "collectors", collector_id])?;
        delete_record(&self.auth, &url)
            .await
            .context("Error deleting collector")
    }
}
