use std::env;
use std::fmt;

use chrono::{DateTime, Utc};

pub const DEFAULT_GITHUB_API_URL: &str = "https://api.github.com";

/// Top-level runtime configuration, loaded from the environment.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub telemetry: TelemetryConfig,
    pub github: GithubConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());
        let api_url = env::var("GITHUB_API_URL")
            .unwrap_or_else(|_| DEFAULT_GITHUB_API_URL.to_string())
            .trim_end_matches('/')
            .to_string();
        let token = env::var("GITHUB_TOKEN").ok().filter(|t| !t.is_empty());

        Ok(Self {
            telemetry: TelemetryConfig { log_level },
            github: GithubConfig { api_url, token },
        })
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

/// Settings for the code-hosting API collaborator.
#[derive(Debug, Clone)]
pub struct GithubConfig {
    pub api_url: String,
    pub token: Option<String>,
}

/// Parse the run deadline. The deadline arrives as an RFC 3339 string
/// (`2022-04-05T17:00:00Z`); anything else is a fatal configuration error
/// surfaced before any document is read.
pub fn parse_deadline(raw: &str) -> Result<DateTime<Utc>, ConfigError> {
    DateTime::parse_from_rfc3339(raw)
        .map(|deadline| deadline.with_timezone(&Utc))
        .map_err(|source| ConfigError::InvalidDeadline {
            value: raw.to_string(),
            source,
        })
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidDeadline {
        value: String,
        source: chrono::ParseError,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidDeadline { value, .. } => {
                write!(
                    f,
                    "deadline '{}' must be an RFC 3339 datetime such as 2022-04-05T17:00:00Z",
                    value
                )
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidDeadline { source, .. } => Some(source),
        }
    }
}
