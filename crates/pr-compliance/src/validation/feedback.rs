use super::domain::{Outcome, Verdict};

/// Context string attached to every commit status this checker publishes.
pub const STATUS_CONTEXT: &str = "Check mandatory part(s)";

/// Marker label applied to every evaluated pull request.
pub const MARKER_LABEL: &str = "course_automation";

// The outcome sentences are displayed verbatim by CI comment bots and pinned
// by existing grading fixtures, typos included.
const VALID_MESSAGE: &str = "All mandatory parts where found. Awaiting TA for final judgement.";
const REPO_NOT_PUBLIC_MESSAGE: &str = "Provided repo is not public";
const REPO_MISSING_MESSAGE: &str = "No repository url found in provided pull request. \
     Please provide one, or clearly state in your pull request that it is only a proposal.";
const STAGE_UNDETERMINED_MESSAGE: &str =
    "Cannot evaluate whether PR is final submission or proposal. \
     Please state it explicitly in your PR";

/// Render the human-readable feedback for a verdict. Pure template
/// substitution; the publishing collaborator posts the result verbatim.
pub fn render(verdict: &Verdict) -> String {
    let headline = match verdict.outcome {
        Outcome::MandatoryPartsFound | Outcome::ProposalAccepted => VALID_MESSAGE.to_string(),
        Outcome::RepoNotPublic => REPO_NOT_PUBLIC_MESSAGE.to_string(),
        Outcome::RepoMissing => REPO_MISSING_MESSAGE.to_string(),
        Outcome::StageUndetermined => STAGE_UNDETERMINED_MESSAGE.to_string(),
        Outcome::AfterDeadline => format!(
            "Pull request after deadline: {}",
            verdict.deadline.format("%Y-%m-%d %H:%M:%S%:z")
        ),
    };

    format!("{headline}\n\n{}", evidence(verdict))
}

fn evidence(verdict: &Verdict) -> String {
    let mut lines = Vec::new();

    match &verdict.document {
        Some(path) => lines.push(format!(
            "Evaluated document: `{path}` (stage: {})",
            verdict.stage.label()
        )),
        None => lines.push("Evaluated document: none".to_string()),
    }

    lines.push(format!(
        "Last change: {}",
        verdict.effective_at.format("%Y-%m-%dT%H:%M:%SZ")
    ));

    if !verdict.repos.is_empty() {
        let urls: Vec<&str> = verdict.repos.iter().map(|repo| repo.url.as_str()).collect();
        lines.push(format!("Repositories: {}", urls.join(", ")));
    }

    lines.join("\n")
}

/// Labels the labeling collaborator applies for a verdict: the permanent
/// marker plus exactly one classification label.
pub fn labels(verdict: &Verdict) -> Vec<String> {
    let classification = match verdict.outcome {
        Outcome::MandatoryPartsFound => "final_submission",
        Outcome::ProposalAccepted => "proposal",
        Outcome::RepoNotPublic
        | Outcome::RepoMissing
        | Outcome::StageUndetermined
        | Outcome::AfterDeadline => "invalid",
    };

    vec![MARKER_LABEL.to_string(), classification.to_string()]
}

/// Commit status published alongside the comment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommitStatus {
    pub state: &'static str,
    pub description: &'static str,
    pub context: &'static str,
}

pub fn commit_status(verdict: &Verdict) -> CommitStatus {
    if verdict.outcome.is_valid() {
        CommitStatus {
            state: "success",
            description: "Validation successful",
            context: STATUS_CONTEXT,
        }
    } else {
        CommitStatus {
            state: "failure",
            description: "Validation failed",
            context: STATUS_CONTEXT,
        }
    }
}
