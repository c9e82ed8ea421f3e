use super::payload::PullRequestEvent;
use crate::validation::{ChangesetEntry, CommitStatus, RepoRef};

#[derive(Debug, thiserror::Error)]
pub enum GithubError {
    #[error("github api request failed: {0}")]
    Transport(String),
    #[error("unexpected response from github api: {0}")]
    Decode(String),
    #[error("github api returned status {status} for {url}")]
    Status { url: String, status: u16 },
    #[error("github token required to publish feedback")]
    MissingToken,
    #[error("github runtime unavailable: {0}")]
    Runtime(String),
}

/// Boundary to the code-hosting API. The validation core never touches this;
/// the runner drives it for changeset retrieval, the delegated visibility
/// check, and feedback publication. Kept synchronous so the single-threaded
/// run loop stays free of async plumbing.
pub trait GithubGateway {
    /// Ordered `(path, content)` pairs for the markdown files changed by the
    /// pull request.
    fn changed_files(&self, event: &PullRequestEvent) -> Result<Vec<ChangesetEntry>, GithubError>;

    /// Whether the referenced repository is publicly visible. Lookups that
    /// fail resolve to "not public" rather than aborting the run.
    fn is_public(&self, repo: &RepoRef) -> Result<bool, GithubError>;

    fn add_labels(&self, event: &PullRequestEvent, labels: &[String]) -> Result<(), GithubError>;

    /// Post the rendered feedback; returns the comment's html_url when the
    /// API provides one, so the commit status can link back to it.
    fn post_comment(
        &self,
        event: &PullRequestEvent,
        body: &str,
    ) -> Result<Option<String>, GithubError>;

    fn set_status(
        &self,
        event: &PullRequestEvent,
        status: &CommitStatus,
        target_url: Option<&str>,
    ) -> Result<(), GithubError>;
}
