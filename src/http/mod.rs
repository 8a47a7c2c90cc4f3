//! HTTP client module
//!
//! A thin layer over `reqwest` that sends each request exactly once and
//! turns non-2xx answers into [`Error::HttpStatus`](crate::Error::HttpStatus).
//! A failed request surfaces immediately; nothing is retried.

mod client;

pub use client::{HttpClient, HttpClientConfig, RequestConfig};
