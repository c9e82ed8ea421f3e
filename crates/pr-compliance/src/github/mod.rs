//! Code-hosting API collaborators: event payload parsing, changeset
//! retrieval, the delegated repository-visibility lookup, and feedback
//! publication (labels, comment, commit status).

mod client;
mod gateway;
mod payload;

pub use client::GithubApiClient;
pub use gateway::{GithubError, GithubGateway};
pub use payload::{
    HeadRef, OwnerSummary, PayloadError, PullRequestEvent, PullRequestPayload, RepositorySummary,
};
