//! CLI module
//!
//! Command-line interface over the client.
//!
//! # Commands
//!
//! - `demo` - Verify the token and walk the first survey (default)
//! - `whoami` - Show the user that owns the token
//! - `surveys` - List or fetch surveys
//! - `responses` - List the responses of a survey
//! - `collectors` - List the collectors of a survey
//! - `refresh` - Exchange a refresh token for a new access token

mod commands;
mod runner;

pub use commands::{Cli, Commands, OutputFormat, SurveyCommands};
pub use runner::{describe_error, Runner};
