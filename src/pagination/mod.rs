//! Pagination module
//!
//! List endpoints answer with an envelope of the form
//! `{ "data": [...], "links": { "next": "<url>" } }`. [`handle_pagination`]
//! follows `links.next` until the server stops advertising one and returns
//! the concatenation of every page's `data`, in server order.

mod next_link;
mod types;

pub use next_link::{handle_pagination, NextLinkPaginator, DEFAULT_NEXT_PATH};
pub use types::{extract_records, NextPage, PaginationState};

#[cfg(test)]
mod tests;
