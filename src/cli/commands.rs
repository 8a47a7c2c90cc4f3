//! CLI commands and argument parsing

use crate::config::TOKEN_ENV_VAR;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// SurveyMonkey API command-line client
#[derive(Parser, Debug)]
#[command(name = "surveymonkey")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Bearer access token
    #[arg(long, global = true, env = TOKEN_ENV_VAR, hide_env_values = true)]
    pub token: Option<String>,

    /// Configuration file (YAML or JSON)
    #[arg(short = 'C', long, global = true)]
    pub config: Option<PathBuf>,

    /// API base URL
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Request timeout in seconds
    #[arg(long, global = true)]
    pub timeout: Option<u64>,

    /// Fail list commands that would follow more than this many pages
    #[arg(long, global = true)]
    pub max_pages: Option<u32>,

    /// Output format
    #[arg(short, long, global = true, default_value = "pretty")]
    pub format: OutputFormat,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// CLI subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Verify the token, list surveys and inspect the first one
    Demo,

    /// Show the user that owns the token
    Whoami,

    /// Survey operations
    Surveys {
        #[command(subcommand)]
        action: SurveyCommands,
    },

    /// List the responses of a survey
    Responses {
        /// Survey ID
        survey_id: String,

        /// Items per page
        #[arg(long, default_value = "50")]
        per_page: u32,

        /// Only responses created on or after this date (YYYY-MM-DD)
        #[arg(long, requires = "to")]
        from: Option<String>,

        /// Only responses created on or before this date (YYYY-MM-DD)
        #[arg(long, requires = "from")]
        to: Option<String>,
    },

    /// List the collectors of a survey
    Collectors {
        /// Survey ID
        survey_id: String,

        /// Items per page
        #[arg(long, default_value = "50")]
        per_page: u32,
    },

    /// Exchange a refresh token for a new access token
    Refresh {
        /// Refresh token
        #[arg(long)]
        refresh_token: String,
    },
}

/// Survey subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum SurveyCommands {
    /// List all surveys
    List {
        /// Items per page
        #[arg(long, default_value = "50")]
        per_page: u32,

        /// Only surveys whose title contains this text
        #[arg(long)]
        title: Option<String>,
    },

    /// Fetch one survey
    Get {
        /// Survey ID
        survey_id: String,

        /// Include pages and questions
        #[arg(long)]
        details: bool,
    },
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output (one record per line)
    Json,
    /// Human-readable output
    Pretty,
}
