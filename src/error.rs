//! Error types for the SurveyMonkey client
//!
//! Every public API returns `Result<T, Error>`. Failures are split by cause
//! (transport, HTTP status, protocol) and wrapped with a short description of
//! the attempted operation via [`ResultExt`].

use thiserror::Error;

/// The main error type for the SurveyMonkey client
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Configuration Errors
    // ============================================================================
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // ============================================================================
    // HTTP Errors
    // ============================================================================
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP {status}: {body}")]
    HttpStatus { status: u16, body: String },

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    // ============================================================================
    // Protocol Errors
    // ============================================================================
    #[error("Unexpected response: {message}")]
    Protocol { message: String },

    #[error("Pagination stopped after {max_pages} pages")]
    PageLimitExceeded { max_pages: u32 },

    #[error("Invalid date range: {message}")]
    InvalidDateRange { message: String },

    // ============================================================================
    // Context
    // ============================================================================
    #[error("{operation}: {source}")]
    Operation {
        operation: String,
        #[source]
        source: Box<Error>,
    },
}

impl Error {
    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create an HTTP status error
    pub fn http_status(status: u16, body: impl Into<String>) -> Self {
        Self::HttpStatus {
            status,
            body: body.into(),
        }
    }

    /// Create a protocol error
    pub fn protocol(message: impl Into<String>) -> Self {
        Self::Protocol {
            message: message.into(),
        }
    }

    /// Wrap this error with the operation that produced it
    pub fn during(self, operation: impl Into<String>) -> Self {
        Self::Operation {
            operation: operation.into(),
            source: Box::new(self),
        }
    }

    /// The innermost error, skipping any operation context
    pub fn root(&self) -> &Error {
        match self {
            Error::Operation { source, .. } => source.root(),
            other => other,
        }
    }

    /// HTTP status code, if the remote API answered with a non-2xx status
    pub fn status(&self) -> Option<u16> {
        match self.root() {
            Error::HttpStatus { status, .. } => Some(*status),
            Error::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Network-level failure (DNS, connect, timeout, broken body)
    pub fn is_transport(&self) -> bool {
        matches!(self.root(), Error::Http(_))
    }

    /// The remote API answered, but not with what was asked for
    pub fn is_api_error(&self) -> bool {
        matches!(
            self.root(),
            Error::HttpStatus { .. } | Error::Protocol { .. } | Error::PageLimitExceeded { .. }
        )
    }
}

/// Result type alias for the SurveyMonkey client
pub type Result<T> = std::result::Result<T, Error>;

/// Extension trait for adding operation context to errors
pub trait ResultExt<T> {
    /// Add context to an error
    fn context(self, operation: impl Into<String>) -> Result<T>;

    /// Add context with a closure (lazy evaluation)
    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T>;
}

impl<T, E: Into<Error>> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, operation: impl Into<String>) -> Result<T> {
        self.map_err(|e| e.into().during(operation))
    }

    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T> {
        self.map_err(|e| e.into().during(f()))
    }
}
