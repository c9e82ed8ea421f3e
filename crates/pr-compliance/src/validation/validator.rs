use chrono::{DateTime, Utc};

use super::domain::{ChangesetEntry, DocumentFinding, Outcome, RepoRef, Stage, Verdict};
use super::evaluate::DocumentEvaluator;
use super::timing;

pub const DEFAULT_EXCLUDED_ORG: &str = "KTH";

/// Run configuration for the validator, passed in explicitly so the core has
/// no hidden process-wide state.
#[derive(Debug, Clone)]
pub struct ValidationConfig {
    pub deadline: DateTime<Utc>,
    pub excluded_org: String,
}

impl ValidationConfig {
    pub fn new(deadline: DateTime<Utc>, excluded_org: impl Into<String>) -> Self {
        Self {
            deadline,
            excluded_org: excluded_org.into(),
        }
    }
}

/// Fatal input problems that halt the run before a verdict exists. Everything
/// else the validator can say about a pull request is a normal [`Verdict`].
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("no markdown documents found in the pull request changeset")]
    EmptyChangeset,
}

/// Folds timeliness and per-document findings into one verdict.
pub struct SubmissionValidator {
    config: ValidationConfig,
    evaluator: DocumentEvaluator,
}

impl SubmissionValidator {
    pub fn new(config: ValidationConfig) -> Self {
        let evaluator = DocumentEvaluator::new(config.excluded_org.clone());
        Self { config, evaluator }
    }

    pub fn config(&self) -> &ValidationConfig {
        &self.config
    }

    /// Validate one pull request changeset against the configured deadline
    /// and excluded organization.
    ///
    /// Documents are evaluated in changeset order and the first one with a
    /// determinable stage becomes the document of record; a clearly-staged
    /// document is never shadowed by an ambiguous one elsewhere in the set.
    pub fn validate(
        &self,
        changeset: &[ChangesetEntry],
        created: DateTime<Utc>,
        updated: Option<DateTime<Utc>>,
    ) -> Result<Verdict, ValidationError> {
        let effective_at = timing::effective_instant(created, updated);
        let late = timing::is_late(effective_at, self.config.deadline);

        let findings: Vec<DocumentFinding> = changeset
            .iter()
            .filter(|entry| entry.is_markdown())
            .map(|entry| self.evaluator.evaluate(entry))
            .collect();
        if findings.is_empty() {
            return Err(ValidationError::EmptyChangeset);
        }

        let assumed = findings
            .iter()
            .find(|finding| finding.stage != Stage::Undetermined);

        let verdict = match assumed {
            Some(finding) => Verdict {
                outcome: decide(finding, late),
                effective_at,
                deadline: self.config.deadline,
                document: Some(finding.path.clone()),
                stage: finding.stage,
                repos: finding.repos.clone(),
            },
            None => Verdict {
                outcome: Outcome::StageUndetermined,
                effective_at,
                deadline: self.config.deadline,
                document: None,
                stage: Stage::Undetermined,
                repos: Vec::new(),
            },
        };

        Ok(verdict)
    }
}

// Decision table for a stage-determinable document of record. Lateness is the
// harder gate and invalidates regardless of content completeness.
fn decide(finding: &DocumentFinding, late: bool) -> Outcome {
    if late {
        return Outcome::AfterDeadline;
    }

    if finding.stage == Stage::Proposal {
        return Outcome::ProposalAccepted;
    }

    if finding.has_valid_repo() {
        return Outcome::MandatoryPartsFound;
    }

    if finding.only_excluded_repos() {
        return Outcome::RepoNotPublic;
    }

    Outcome::RepoMissing
}

/// Fold an external repository-visibility report into a verdict. The check
/// itself (a code-hosting API lookup) stays outside the core; this only
/// downgrades a passing verdict when none of its repositories turned out to
/// be publicly visible.
pub fn confirm_visibility<F>(verdict: Verdict, is_public: F) -> Verdict
where
    F: Fn(&RepoRef) -> bool,
{
    if verdict.outcome != Outcome::MandatoryPartsFound {
        return verdict;
    }
    if verdict.repos.iter().any(is_public) {
        return verdict;
    }

    Verdict {
        outcome: Outcome::RepoNotPublic,
        ..verdict
    }
}
