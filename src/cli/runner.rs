//! CLI runner - executes commands

use crate::api::ListParams;
use crate::cli::commands::{Cli, Commands, OutputFormat, SurveyCommands};
use crate::client::SurveyMonkeyClient;
use crate::config::{ClientConfig, TOKEN_ENV_VAR};
use crate::error::{Error, Result};
use crate::types::{record_id, Record};
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command
    pub async fn run(&self) -> Result<()> {
        let client = SurveyMonkeyClient::new(self.client_config()?)?;
        debug!("Using API at {}", client.auth().base_url());

        match self.cli.command.clone().unwrap_or(Commands::Demo) {
            Commands::Demo => self.demo(&client).await,
            Commands::Whoami => {
                let user = client.auth().current_user().await?;
                self.output_value(&Value::Object(user));
                Ok(())
            }
            Commands::Surveys { action } => self.surveys(&client, action).await,
            Commands::Responses {
                survey_id,
                per_page,
                from,
                to,
            } => {
                let mut params = ListParams::new().per_page(per_page);
                if let (Some(from), Some(to)) = (from, to) {
                    params = params.created_between(&from, &to)?;
                }
                let records = client.responses().list(&survey_id, &params).await?;
                self.output_records(&records);
                Ok(())
            }
            Commands::Collectors {
                survey_id,
                per_page,
            } => {
                let params = ListParams::new().per_page(per_page);
                let records = client.collectors().list(&survey_id, &params).await?;
                self.output_records(&records);
                Ok(())
            }
            Commands::Refresh { refresh_token } => {
                let token = client.refresh_token(&refresh_token).await?;
                println!("{token}");
                Ok(())
            }
        }
    }

    /// Resolve the client configuration
    ///
    /// The config file is read first; command-line flags (and the token
    /// environment variable) override it.
    pub fn client_config(&self) -> Result<ClientConfig> {
        let mut config = match &self.cli.config {
            Some(path) => ClientConfig::from_file(path)?,
            None => ClientConfig::default(),
        };

        if let Some(token) = self.cli.token.as_ref().filter(|t| !t.is_empty()) {
            config.access_token.clone_from(token);
        }
        if let Some(base_url) = &self.cli.base_url {
            config.base_url.clone_from(base_url);
        }
        if let Some(timeout) = self.cli.timeout {
            config.set_timeout(Duration::from_secs(timeout));
        }
        if self.cli.max_pages.is_some() {
            config.max_pages = self.cli.max_pages;
        }

        if config.access_token.is_empty() {
            return Err(Error::config(format!(
                "{TOKEN_ENV_VAR} environment variable is not set."
            )));
        }
        Ok(config)
    }

    /// Verify the token, list surveys and inspect the first one
    async fn demo(&self, client: &SurveyMonkeyClient) -> Result<()> {
        println!("Verifying token and checking scopes...");
        if !client.verify_token().await {
            println!("Invalid access token or missing required scopes");
            return Ok(());
        }
        println!("Token verified successfully with all required scopes");

        println!("Fetching survey list...");
        let surveys = client.surveys().list(&ListParams::new()).await?;
        println!("Found {} surveys", surveys.len());

        let Some(first) = surveys.first() else {
            println!("No surveys found");
            return Ok(());
        };
        let survey_id = record_id(first)
            .ok_or_else(|| Error::protocol("First survey in the list has no 'id'"))?;

        println!("Fetching details for survey ID: {survey_id}");
        let details = client.surveys().get(&survey_id).await?;
        println!("Details of first survey: {}", display_field(&details, "title"));

        println!("Fetching responses...");
        let responses = client
            .responses()
            .list(&survey_id, &ListParams::new())
            .await?;
        println!("Found {} responses for the first survey", responses.len());

        println!("Fetching collectors...");
        let collectors = client
            .collectors()
            .list(&survey_id, &ListParams::new())
            .await?;
        println!("Found {} collectors for the first survey", collectors.len());

        Ok(())
    }

    async fn surveys(&self, client: &SurveyMonkeyClient, action: SurveyCommands) -> Result<()> {
        match action {
            SurveyCommands::List { per_page, title } => {
                let mut params = ListParams::new().per_page(per_page);
                if let Some(title) = title {
                    params = params.filter("title", title);
                }
                let records = client.surveys().list(&params).await?;
                self.output_records(&records);
            }
            SurveyCommands::Get { survey_id, details } => {
                let record = if details {
                    client.surveys().details(&survey_id).await?
                } else {
                    client.surveys().get(&survey_id).await?
                };
                self.output_value(&Value::Object(record));
            }
        }
        Ok(())
    }

    /// Output a list of records
    fn output_records(&self, records: &[Record]) {
        match self.cli.format {
            OutputFormat::Json => {
                for record in records {
                    println!("{}", serde_json::to_string(record).unwrap_or_default());
                }
            }
            OutputFormat::Pretty => {
                for record in records {
                    println!("{}", summarize(record));
                }
                println!("({} total)", records.len());
            }
        }
    }

    /// Output a single JSON value
    fn output_value(&self, value: &Value) {
        match self.cli.format {
            OutputFormat::Json => {
                println!("{}", serde_json::to_string(value).unwrap_or_default());
            }
            OutputFormat::Pretty => {
                println!("{}", serde_json::to_string_pretty(value).unwrap_or_default());
            }
        }
    }
}

/// One line per record: id followed by the first descriptive field present
fn summarize(record: &Record) -> String {
    let id = record_id(record).unwrap_or_else(|| "-".to_string());
    let label = ["title", "name", "type", "response_status"]
        .iter()
        .find_map(|key| record.get(*key).and_then(Value::as_str))
        .unwrap_or("");
    format!("{id}\t{label}")
}

fn display_field(record: &Record, key: &str) -> String {
    match record.get(key) {
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
        None => "<none>".to_string(),
    }
}

/// User-facing message for a failed command
pub fn describe_error(err: &Error) -> String {
    if err.is_api_error() {
        format!("A SurveyMonkey API error occurred: {err}")
    } else if err.is_transport() {
        format!("A network error occurred: {err}")
    } else if matches!(err.root(), Error::Config { .. } | Error::Io(_)) {
        err.to_string()
    } else {
        format!("An unexpected error occurred: {err}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use serde_json::json;

    fn cli(args: &[&str]) -> Cli {
        let mut cli = Cli::parse_from(args);
        // Ignore whatever token the test environment might export
        if !args.contains(&"--token") {
            cli.token = None;
        }
        cli
    }

    #[test]
    fn test_defaults_to_demo() {
        let cli = cli(&["surveymonkey", "--token", "t"]);
        assert!(cli.command.is_none());
        assert_eq!(cli.format, OutputFormat::Pretty);
    }

    #[test]
    fn test_client_config_from_flags() {
        let runner = Runner::new(cli(&[
            "surveymonkey",
            "--token",
            "abc",
            "--base-url",
            "http://localhost:1234/v3",
            "--timeout",
            "5",
            "--max-pages",
            "4",
            "whoami",
        ]));

        let config = runner.client_config().unwrap();
        assert_eq!(config.access_token, "abc");
        assert_eq!(config.base_url, "http://localhost:1234/v3");
        assert_eq!(config.timeout(), Duration::from_secs(5));
        assert_eq!(config.max_pages, Some(4));
    }

    #[test]
    fn test_client_config_missing_token() {
        let runner = Runner::new(cli(&["surveymonkey", "demo"]));
        let err = runner.client_config().unwrap_err();
        assert_eq!(
            describe_error(&err),
            "Configuration error: SURVEYMONKEY_ACCESS_TOKEN environment variable is not set."
        );
    }

    #[test]
    fn test_client_config_flag_overrides_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        std::io::Write::write_all(
            &mut file,
            b"access_token: from-file\ntimeout_ms: 12000\n",
        )
        .unwrap();

        let path = file.path().to_string_lossy().to_string();
        let runner = Runner::new(cli(&[
            "surveymonkey",
            "--config",
            &path,
            "--token",
            "from-flag",
        ]));

        let config = runner.client_config().unwrap();
        assert_eq!(config.access_token, "from-flag");
        assert_eq!(config.timeout(), Duration::from_secs(12));
    }

    #[test]
    fn test_zero_timeout_flag_is_rejected() {
        let runner = Runner::new(cli(&["surveymonkey", "--token", "t", "--timeout", "0"]));
        let config = runner.client_config().unwrap();
        let err = SurveyMonkeyClient::new(config).unwrap_err();
        assert!(matches!(err, Error::Config { .. }));
    }

    #[test]
    fn test_missing_config_file_is_reported_plainly() {
        let runner = Runner::new(cli(&[
            "surveymonkey",
            "--config",
            "/definitely/not/here.yaml",
            "--token",
            "t",
        ]));
        let err = runner.client_config().unwrap_err();
        assert!(matches!(err, Error::Io(_)));
        assert!(describe_error(&err).starts_with("IO error"));
    }

    #[test]
    fn test_parse_responses_date_range() {
        let cli = cli(&[
            "surveymonkey",
            "responses",
            "123",
            "--from",
            "2024-01-01",
            "--to",
            "2024-02-01",
        ]);
        match cli.command {
            Some(Commands::Responses { survey_id, from, .. }) => {
                assert_eq!(survey_id, "123");
                assert_eq!(from.as_deref(), Some("2024-01-01"));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_describe_error() {
        assert!(describe_error(&Error::http_status(401, "").during("op"))
            .starts_with("A SurveyMonkey API error occurred"));
        assert!(describe_error(&Error::InvalidDateRange {
            message: "x".to_string()
        })
        .starts_with("An unexpected error occurred"));
    }

    #[test]
    fn test_summarize() {
        let record = crate::types::fields_from_value(json!({"id": "1", "title": "T"})).unwrap();
        assert_eq!(summarize(&record), "1\tT");

        let record = crate::types::fields_from_value(json!({"id": 2, "type": "weblink"})).unwrap();
        assert_eq!(summarize(&record), "2\tweblink");
    }
}
