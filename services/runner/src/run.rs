use tracing::{error, info, warn};

use pr_compliance::error::AppError;
use pr_compliance::github::{GithubGateway, PullRequestEvent};
use pr_compliance::validation::{
    commit_status, confirm_visibility, labels, render, CommitStatus, SubmissionValidator, Verdict,
    MARKER_LABEL, STATUS_CONTEXT,
};

/// One start-to-finish evaluation of a pull-request event: retrieve the
/// changeset, validate, confirm repository visibility, and publish feedback.
pub(crate) fn execute<G: GithubGateway>(
    gateway: &G,
    event: &PullRequestEvent,
    validator: &SubmissionValidator,
    dry_run: bool,
) -> Result<Verdict, AppError> {
    let changeset = gateway.changed_files(event)?;
    info!(
        pull_request = event.pull_request.number,
        documents = changeset.len(),
        "retrieved changeset"
    );

    let verdict = match validator.validate(
        &changeset,
        event.pull_request.created_at,
        event.pull_request.updated_at,
    ) {
        Ok(verdict) => verdict,
        Err(err) => {
            // Fatal input problems still reach the author through the
            // feedback channel before the run aborts.
            error!(%err, "validation aborted");
            if !dry_run {
                publish_failure(gateway, event, &err.to_string())?;
            }
            return Err(err.into());
        }
    };

    let verdict = confirm_visibility(verdict, |repo| match gateway.is_public(repo) {
        Ok(public) => public,
        Err(err) => {
            warn!(repo = %repo.slug(), %err, "visibility lookup failed; treating repository as not public");
            false
        }
    });

    if verdict.outcome.is_valid() {
        info!(outcome = ?verdict.outcome, "validation successful");
    } else {
        error!(outcome = ?verdict.outcome, "validation failed");
    }

    if dry_run {
        println!("{}", render(&verdict));
        return Ok(verdict);
    }

    publish_verdict(gateway, event, &verdict)?;
    Ok(verdict)
}

fn publish_verdict<G: GithubGateway>(
    gateway: &G,
    event: &PullRequestEvent,
    verdict: &Verdict,
) -> Result<(), AppError> {
    gateway.add_labels(event, &labels(verdict))?;
    let comment_url = gateway.post_comment(event, &render(verdict))?;
    gateway.set_status(event, &commit_status(verdict), comment_url.as_deref())?;
    Ok(())
}

fn publish_failure<G: GithubGateway>(
    gateway: &G,
    event: &PullRequestEvent,
    message: &str,
) -> Result<(), AppError> {
    gateway.add_labels(event, &[MARKER_LABEL.to_string(), "invalid".to_string()])?;
    let comment_url = gateway.post_comment(event, message)?;
    let status = CommitStatus {
        state: "failure",
        description: "Validation failed",
        context: STATUS_CONTEXT,
    };
    gateway.set_status(event, &status, comment_url.as_deref())?;
    Ok(())
}
