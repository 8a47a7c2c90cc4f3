//! `links.next` pagination
//!
//! Extracts the next page URL from a field in the response body and keeps
//! fetching until it is absent.

use super::types::{extract_records, NextPage, PaginationState};
use crate::auth::AuthContext;
use crate::error::{Error, Result, ResultExt};
use crate::http::RequestConfig;
use crate::types::{extract_jsonpath, Record, StringMap};
use reqwest::Method;
use serde_json::Value;
use tracing::debug;
use url::Url;

/// Where the API puts the next page URL
pub const DEFAULT_NEXT_PATH: &str = "links.next";

/// Next URL pagination (URL in response body)
#[derive(Debug, Clone)]
pub struct NextLinkPaginator {
    /// JSONPath to extract next URL from response
    pub path: String,
    /// Fail once this many pages have been fetched and another is advertised
    pub max_pages: Option<u32>,
}

impl Default for NextLinkPaginator {
    fn default() -> Self {
        Self {
            path: DEFAULT_NEXT_PATH.to_string(),
            max_pages: None,
        }
    }
}

impl NextLinkPaginator {
    /// Create a paginator reading the next URL from `path`
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            max_pages: None,
        }
    }

    /// Set the page cap
    #[must_use]
    pub fn with_max_pages(mut self, max_pages: Option<u32>) -> Self {
        self.max_pages = max_pages;
        self
    }

    /// Process a page and decide whether another one follows
    ///
    /// Relative next links are resolved against `current`. An absent, `null`
    /// or empty link ends pagination.
    pub fn process_response(
        &self,
        body: &Value,
        current: &Url,
        records_count: usize,
        state: &mut PaginationState,
    ) -> Result<NextPage> {
        state.add_page(records_count);

        let Some(next) = extract_jsonpath(body, &self.path).filter(|s| !s.is_empty()) else {
            state.mark_done();
            return Ok(NextPage::Done);
        };

        if let Some(max_pages) = self.max_pages {
            if state.pages >= max_pages {
                return Err(Error::PageLimitExceeded { max_pages });
            }
        }

        Ok(NextPage::with_url(current.join(&next)?))
    }
}

/// Fetch every page starting at `url` and return all items in order
///
/// `params` apply to the first request only; next links already embed
/// their query string. Any failure discards the pages collected so far.
pub async fn handle_pagination(
    auth: &AuthContext,
    url: &str,
    params: StringMap,
) -> Result<Vec<Record>> {
    collect_pages(auth, url, params)
        .await
        .context("Error handling pagination")
}

async fn collect_pages(auth: &AuthContext, url: &str, params: StringMap) -> Result<Vec<Record>> {
    let paginator = NextLinkPaginator::default().with_max_pages(auth.max_pages());
    let mut state = PaginationState::new();
    let mut url = Url::parse(url)?;
    let mut params = params;
    let mut items = Vec::new();

    loop {
        let config = RequestConfig::new().query_params(std::mem::take(&mut params));
        let body = auth.send_json(Method::GET, url.as_str(), config).await?;

        let records = extract_records(&body)?;
        let count = records.len();
        items.extend(records);
        debug!("Fetched page {} from {} ({} items)", state.pages + 1, url, count);

        match paginator.process_response(&body, &url, count, &mut state)? {
            NextPage::Continue { url: next } => url = next,
            NextPage::Done => break,
        }
    }

    debug!(
        "Pagination complete: {} items over {} pages",
        state.total_fetched, state.pages
    );
    Ok(items)
}
