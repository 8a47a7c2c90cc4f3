//! Authentication module
//!
//! [`AuthContext`] owns the bearer token for a session. Every resource client
//! holds a clone of the same context, so a token refreshed through one
//! handle is immediately used by all of them.

mod context;
mod types;

pub use context::AuthContext;
pub use types::{RefreshRequest, TokenResponse};
