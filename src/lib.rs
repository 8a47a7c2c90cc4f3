// Allow common clippy pedantic lints that aren't critical for this codebase
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::module_name_repetitions)]

//! # SurveyMonkey API client
//!
//! An async client for the SurveyMonkey v3 REST API.
//!
//! ## Features
//!
//! - **Bearer auth**: token verification against `/users/me` and
//!   refresh-token exchange, shared by every service
//! - **Pagination**: list calls follow `links.next` and return every item
//! - **Resources**: surveys, responses and collectors with list / get /
//!   create / update / delete
//! - **Structured errors**: transport, HTTP status and protocol failures are
//!   distinct variants, each wrapped with the operation that failed
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use surveymonkey_client::{api::ListParams, ClientConfig, Result, SurveyMonkeyClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let client = SurveyMonkeyClient::new(ClientConfig::new("my-access-token"))?;
//!
//!     let surveys = client.surveys().list(&ListParams::new()).await?;
//!     for survey in &surveys {
//!         println!("{}", survey["title"]);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────┐
//! │                  SurveyMonkeyClient                    │
//! │        surveys()   responses()   collectors()          │
//! └────────────────────────────────────────────────────────┘
//!                            │
//! ┌──────────────┬───────────┴──────┬──────────────────────┐
//! │ AuthContext  │  Pagination      │  HttpClient          │
//! ├──────────────┼──────────────────┼──────────────────────┤
//! │ Bearer token │  links.next      │  one send, no retry  │
//! │ /users/me    │  page cap        │  status → Error      │
//! │ /oauth/token │                  │  JSON decode         │
//! └──────────────┴──────────────────┴──────────────────────┘
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(missing_docs)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Common types and type aliases
pub mod types;

/// Client configuration
pub mod config;

/// HTTP client
pub mod http;

/// Token handling
pub mod auth;

/// `links.next` pagination
pub mod pagination;

/// Resource services
pub mod api;

/// Client facade
pub mod client;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use auth::AuthContext;
pub use client::SurveyMonkeyClient;
pub use config::ClientConfig;
pub use error::{Error, Result, ResultExt};
pub use pagination::handle_pagination;
pub use types::{Fields, Record};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
