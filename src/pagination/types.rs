//! Pagination types
//!
//! Defines the page-to-page state and the decision returned after each page.

use crate::error::{Error, Result};
use crate::types::Record;
use serde_json::Value;
use url::Url;

/// Result of the next page computation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NextPage {
    /// Fetch this URL next (its query string is used as-is)
    Continue {
        /// Fully resolved URL of the next page
        url: Url,
    },
    /// No more pages
    Done,
}

impl NextPage {
    /// Create a continuation with a new URL
    pub fn with_url(url: Url) -> Self {
        Self::Continue { url }
    }

    /// Check if this is a done result
    pub fn is_done(&self) -> bool {
        matches!(self, Self::Done)
    }

    /// Check if this is a continue result
    pub fn is_continue(&self) -> bool {
        matches!(self, Self::Continue { .. })
    }
}

/// Tracks pagination state during iteration
#[derive(Debug, Clone, Default)]
pub struct PaginationState {
    /// Number of pages fetched so far
    pub pages: u32,
    /// Total records fetched so far
    pub total_fetched: u64,
    /// Is pagination complete?
    pub done: bool,
}

impl PaginationState {
    /// Create a new pagination state
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a fetched page and its item count
    pub fn add_page(&mut self, records: usize) {
        self.pages += 1;
        self.total_fetched += records as u64;
    }

    /// Mark pagination as complete
    pub fn mark_done(&mut self) {
        self.done = true;
    }
}

/// Pull the `data` array out of a page envelope
///
/// A missing or `null` `data` key yields no records.
pub fn extract_records(body: &Value) -> Result<Vec<Record>> {
    let items = match body.get("data") {
        None | Some(Value::Null) => return Ok(Vec::new()),
        Some(Value::Array(items)) => items,
        Some(other) => {
            return Err(Error::protocol(format!(
                "Expected 'data' to be an array, got {other}"
            )))
        }
    };

    items
        .iter()
        .map(|item| match item {
            Value::Object(map) => Ok(map.clone()),
            other => Err(Error::protocol(format!(
                "Expected page items to be objects, got {other}"
            ))),
        })
        .collect()
}
