//! Query parameters for list operations

use crate::error::Result;
use crate::types::{parse_date_range, StringMap};

/// First page requested by default
pub const DEFAULT_PAGE: u32 = 1;

/// Page size requested by default
pub const DEFAULT_PER_PAGE: u32 = 50;

/// Parameters for the first request of a list operation
///
/// ```
/// use surveymonkey_client::api::ListParams;
///
/// let params = ListParams::new()
///     .per_page(100)
///     .filter("sort_by", "date_modified");
/// assert_eq!(params.to_query()["per_page"], "100");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListParams {
    /// Page number to start from
    pub page: u32,
    /// Items per page
    pub per_page: u32,
    /// Extra endpoint-specific filters (`sort_by`, `title`, `status`, ...)
    pub filters: StringMap,
}

impl Default for ListParams {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            per_page: DEFAULT_PER_PAGE,
            filters: StringMap::new(),
        }
    }
}

impl ListParams {
    /// Parameters with `page=1` and `per_page=50`
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the starting page
    #[must_use]
    pub fn page(mut self, page: u32) -> Self {
        self.page = page;
        self
    }

    /// Set the page size
    #[must_use]
    pub fn per_page(mut self, per_page: u32) -> Self {
        self.per_page = per_page;
        self
    }

    /// Add a filter
    #[must_use]
    pub fn filter(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.filters.insert(key.into(), value.into());
        self
    }

    /// Only include items created between two `YYYY-MM-DD` dates
    pub fn created_between(self, start: &str, end: &str) -> Result<Self> {
        self.date_range("start_created_at", "end_created_at", start, end)
    }

    /// Only include items modified between two `YYYY-MM-DD` dates
    pub fn modified_between(self, start: &str, end: &str) -> Result<Self> {
        self.date_range("start_modified_at", "end_modified_at", start, end)
    }

    fn date_range(self, start_key: &str, end_key: &str, start: &str, end: &str) -> Result<Self> {
        let (start_date, end_date) = parse_date_range(start, end)?;
        Ok(self
            .filter(start_key, format!("{start_date}T00:00:00"))
            .filter(end_key, format!("{end_date}T23:59:59")))
    }

    /// Flatten into query parameters; `page`/`per_page` win over filters
    pub fn to_query(&self) -> StringMap {
        let mut query = self.filters.clone();
        query.insert("page".to_string(), self.page.to_string());
        query.insert("per_page".to_string(), self.per_page.to_string());
        query
    }
}
