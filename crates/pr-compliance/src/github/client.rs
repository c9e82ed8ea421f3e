use reqwest::header::{ACCEPT, AUTHORIZATION};
use serde::Deserialize;
use serde_json::{json, Value};
use tokio::runtime::Runtime;
use tracing::debug;

use super::gateway::{GithubError, GithubGateway};
use super::payload::PullRequestEvent;
use crate::config::GithubConfig;
use crate::validation::{ChangesetEntry, CommitStatus, RepoRef};

const ACCEPT_JSON: &str = "application/vnd.github.v3+json";

/// Thin wrapper around reqwest so the synchronous run loop can talk to the
/// GitHub REST API without exposing async details. The client owns its own
/// runtime and blocks on each call, mirroring how the run itself is a single
/// start-to-finish pass over one pull-request event.
pub struct GithubApiClient {
    http: reqwest::Client,
    base_url: String,
    token: Option<String>,
    runtime: Runtime,
}

#[derive(Debug, Deserialize)]
struct PullRequestFile {
    filename: String,
    raw_url: String,
    #[serde(default)]
    status: Option<String>,
}

impl GithubApiClient {
    pub fn new(config: &GithubConfig) -> Result<Self, GithubError> {
        let runtime = Runtime::new().map_err(|err| GithubError::Runtime(err.to_string()))?;
        let http = reqwest::Client::builder()
            .user_agent("pr-compliance-runner")
            .build()
            .map_err(|err| GithubError::Transport(err.to_string()))?;

        Ok(Self {
            http,
            base_url: config.api_url.trim_end_matches('/').to_string(),
            token: config.token.clone(),
            runtime,
        })
    }

    fn authorize(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        let request = request.header(ACCEPT, ACCEPT_JSON);
        match &self.token {
            Some(token) => request.header(AUTHORIZATION, format!("token {token}")),
            None => request,
        }
    }

    fn get_json(&self, url: &str) -> Result<Value, GithubError> {
        self.runtime.block_on(async {
            let response = self
                .authorize(self.http.get(url))
                .send()
                .await
                .map_err(|err| GithubError::Transport(err.to_string()))?;
            if !response.status().is_success() {
                return Err(GithubError::Status {
                    url: url.to_string(),
                    status: response.status().as_u16(),
                });
            }
            response
                .json()
                .await
                .map_err(|err| GithubError::Decode(err.to_string()))
        })
    }

    fn get_text(&self, url: &str) -> Result<String, GithubError> {
        self.runtime.block_on(async {
            let response = self
                .authorize(self.http.get(url))
                .send()
                .await
                .map_err(|err| GithubError::Transport(err.to_string()))?;
            if !response.status().is_success() {
                return Err(GithubError::Status {
                    url: url.to_string(),
                    status: response.status().as_u16(),
                });
            }
            response
                .text()
                .await
                .map_err(|err| GithubError::Decode(err.to_string()))
        })
    }

    fn post_json(&self, url: &str, body: &Value) -> Result<Value, GithubError> {
        if self.token.is_none() {
            return Err(GithubError::MissingToken);
        }

        self.runtime.block_on(async {
            let response = self
                .authorize(self.http.post(url))
                .json(body)
                .send()
                .await
                .map_err(|err| GithubError::Transport(err.to_string()))?;
            if !response.status().is_success() {
                return Err(GithubError::Status {
                    url: url.to_string(),
                    status: response.status().as_u16(),
                });
            }
            response
                .json()
                .await
                .map_err(|err| GithubError::Decode(err.to_string()))
        })
    }
}

impl GithubGateway for GithubApiClient {
    fn changed_files(&self, event: &PullRequestEvent) -> Result<Vec<ChangesetEntry>, GithubError> {
        let url = format!(
            "{}/repos/{}/{}/pulls/{}/files?per_page=100",
            self.base_url,
            event.repository.owner.login,
            event.repository.name,
            event.pull_request.number
        );
        let files: Vec<PullRequestFile> = serde_json::from_value(self.get_json(&url)?)
            .map_err(|err| GithubError::Decode(err.to_string()))?;

        let mut entries = Vec::new();
        for file in files {
            if file.status.as_deref() == Some("removed") {
                continue;
            }
            // Only markdown participates in evaluation; skip downloading the rest.
            if !file.filename.ends_with(".md") {
                continue;
            }
            let content = self.get_text(&file.raw_url)?;
            debug!(path = %file.filename, bytes = content.len(), "fetched changed file");
            entries.push(ChangesetEntry::new(file.filename, content));
        }

        Ok(entries)
    }

    fn is_public(&self, repo: &RepoRef) -> Result<bool, GithubError> {
        let url = format!("{}/repos/{}/{}", self.base_url, repo.owner, repo.name);
        // A repository the API will not show us counts as not public.
        match self.get_json(&url) {
            Ok(value) => Ok(!value
                .get("private")
                .and_then(Value::as_bool)
                .unwrap_or(true)),
            Err(GithubError::Status { .. }) => Ok(false),
            Err(err) => Err(err),
        }
    }

    fn add_labels(&self, event: &PullRequestEvent, labels: &[String]) -> Result<(), GithubError> {
        let url = format!(
            "{}/repos/{}/{}/issues/{}/labels",
            self.base_url,
            event.repository.owner.login,
            event.repository.name,
            event.pull_request.number
        );
        debug!(?labels, "posting labels");
        self.post_json(&url, &json!({ "labels": labels }))?;
        Ok(())
    }

    fn post_comment(
        &self,
        event: &PullRequestEvent,
        body: &str,
    ) -> Result<Option<String>, GithubError> {
        debug!(url = %event.pull_request.comments_url, "posting feedback comment");
        let response = self.post_json(&event.pull_request.comments_url, &json!({ "body": body }))?;
        Ok(response
            .get("html_url")
            .and_then(Value::as_str)
            .map(str::to_string))
    }

    fn set_status(
        &self,
        event: &PullRequestEvent,
        status: &CommitStatus,
        target_url: Option<&str>,
    ) -> Result<(), GithubError> {
        let url = format!(
            "{}/repos/{}/{}/statuses/{}",
            self.base_url,
            event.repository.owner.login,
            event.repository.name,
            event.pull_request.head.sha
        );
        let mut payload = json!({
            "state": status.state,
            "description": status.description,
            "context": status.context,
        });
        if let Some(target) = target_url {
            payload["target_url"] = json!(target);
        }
        debug!(state = status.state, "posting commit status");
        self.post_json(&url, &payload)?;
        Ok(())
    }
}

impl std::fmt::Debug for GithubApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GithubApiClient")
            .field("base_url", &self.base_url)
            .field("token", &self.token.as_deref().map(|_| "***"))
            .finish_non_exhaustive()
    }
}
