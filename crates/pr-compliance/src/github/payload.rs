use std::fs;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::Deserialize;

/// The pull-request event file GitHub Actions writes for the triggering
/// workflow run. Only the fields the checker consumes are modeled; a missing
/// or unparseable `created_at` fails deserialization, which is fatal.
#[derive(Debug, Clone, Deserialize)]
pub struct PullRequestEvent {
    pub pull_request: PullRequestPayload,
    pub repository: RepositorySummary,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PullRequestPayload {
    pub number: u64,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
    pub comments_url: String,
    pub head: HeadRef,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HeadRef {
    pub sha: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RepositorySummary {
    pub name: String,
    pub owner: OwnerSummary,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OwnerSummary {
    pub login: String,
}

#[derive(Debug, thiserror::Error)]
pub enum PayloadError {
    #[error("unable to read event payload {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },
    #[error("malformed event payload {path}: {source}")]
    Decode {
        path: String,
        source: serde_json::Error,
    },
}

impl PullRequestEvent {
    pub fn from_path(path: &Path) -> Result<Self, PayloadError> {
        let raw = fs::read_to_string(path).map_err(|source| PayloadError::Read {
            path: path.display().to_string(),
            source,
        })?;
        serde_json::from_str(&raw).map_err(|source| PayloadError::Decode {
            path: path.display().to_string(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use std::io::Write;

    fn event_json(updated_at: Option<&str>) -> String {
        let updated = match updated_at {
            Some(value) => format!(r#""updated_at": "{value}","#),
            None => String::new(),
        };
        format!(
            r#"{{
                "pull_request": {{
                    "number": 42,
                    "created_at": "2022-04-01T09:30:00Z",
                    {updated}
                    "comments_url": "https://api.github.com/repos/kth/course/issues/42/comments",
                    "head": {{ "sha": "abc123" }}
                }},
                "repository": {{
                    "name": "course",
                    "owner": {{ "login": "kth" }}
                }}
            }}"#
        )
    }

    #[test]
    fn reads_event_from_disk() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        file.write_all(event_json(Some("2022-04-02T10:00:00Z")).as_bytes())
            .expect("write payload");

        let event = PullRequestEvent::from_path(file.path()).expect("payload parses");
        assert_eq!(event.pull_request.number, 42);
        assert_eq!(
            event.pull_request.created_at,
            Utc.with_ymd_and_hms(2022, 4, 1, 9, 30, 0).unwrap()
        );
        assert_eq!(event.repository.owner.login, "kth");
        assert_eq!(event.pull_request.head.sha, "abc123");
    }

    #[test]
    fn updated_at_is_optional() {
        let event: PullRequestEvent =
            serde_json::from_str(&event_json(None)).expect("payload parses");
        assert!(event.pull_request.updated_at.is_none());
    }

    #[test]
    fn missing_created_at_is_fatal() {
        let raw = event_json(None).replace(r#""created_at": "2022-04-01T09:30:00Z","#, "");
        let result: Result<PullRequestEvent, _> = serde_json::from_str(&raw);
        assert!(result.is_err());
    }

    #[test]
    fn missing_file_reports_path() {
        let err = PullRequestEvent::from_path(Path::new("/nonexistent/event.json"))
            .expect_err("read must fail");
        assert!(err.to_string().contains("/nonexistent/event.json"));
    }
}
