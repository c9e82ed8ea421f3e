use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One file changed by the pull request, as reported by the changeset source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangesetEntry {
    pub path: String,
    pub content: String,
}

impl ChangesetEntry {
    pub fn new(path: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }

    /// Only markdown documents participate in evaluation.
    pub fn is_markdown(&self) -> bool {
        self.path.ends_with(".md")
    }
}

/// The submission type a document claims to represent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Stage {
    Proposal,
    FinalSubmission,
    Undetermined,
}

impl Stage {
    pub const fn label(self) -> &'static str {
        match self {
            Stage::Proposal => "proposal",
            Stage::FinalSubmission => "final_submission",
            Stage::Undetermined => "undetermined",
        }
    }
}

/// A candidate external repository link extracted from document text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepoRef {
    pub owner: String,
    pub name: String,
    pub url: String,
}

impl RepoRef {
    pub fn new(owner: impl Into<String>, name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            name: name.into(),
            url: url.into(),
        }
    }

    pub fn slug(&self) -> String {
        format!("{}/{}", self.owner, self.name)
    }
}

/// Per-document result: classified stage plus the repository links that
/// survived the exclusion filter. `raw_matches` counts every syntactic match
/// so callers can tell "found but excluded" apart from "found nothing".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentFinding {
    pub path: String,
    pub stage: Stage,
    pub repos: Vec<RepoRef>,
    pub raw_matches: usize,
}

impl DocumentFinding {
    pub fn has_valid_repo(&self) -> bool {
        !self.repos.is_empty()
    }

    pub fn only_excluded_repos(&self) -> bool {
        self.repos.is_empty() && self.raw_matches > 0
    }
}

/// Closed set of validation outcomes so downstream labeling and status logic
/// can branch exhaustively instead of parsing rendered text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// Final submission with a valid public repository link, on time.
    MandatoryPartsFound,
    /// Every provided repository is excluded-owner or not publicly visible.
    RepoNotPublic,
    /// Final submission without any repository link.
    RepoMissing,
    /// Proposal received on time; no repository required.
    ProposalAccepted,
    /// No document in the changeset states a usable stage.
    StageUndetermined,
    /// Effective instant falls after the deadline.
    AfterDeadline,
}

impl Outcome {
    pub const fn is_valid(self) -> bool {
        matches!(self, Outcome::MandatoryPartsFound | Outcome::ProposalAccepted)
    }
}

/// The single outcome of validating one pull request, with the evidence the
/// feedback renderer interpolates. Immutable once produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verdict {
    pub outcome: Outcome,
    pub effective_at: DateTime<Utc>,
    pub deadline: DateTime<Utc>,
    pub document: Option<String>,
    pub stage: Stage,
    pub repos: Vec<RepoRef>,
}
