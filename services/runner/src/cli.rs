use std::path::PathBuf;

use clap::Parser;

use pr_compliance::config::{parse_deadline, AppConfig};
use pr_compliance::error::AppError;
use pr_compliance::github::{GithubApiClient, PullRequestEvent};
use pr_compliance::telemetry;
use pr_compliance::validation::{
    SubmissionValidator, ValidationConfig, Verdict, DEFAULT_EXCLUDED_ORG,
};

#[derive(Parser, Debug)]
#[command(
    name = "pr-compliance-runner",
    about = "Validate course pull requests against the deadline and repository-link requirements",
    version
)]
pub(crate) struct Cli {
    /// Deadline for the evaluated task (RFC 3339, e.g. 2022-04-05T17:00:00Z)
    #[arg(short = 'd', long)]
    pub(crate) deadline: String,
    /// Path to the GitHub Actions pull-request event payload
    #[arg(short = 'e', long)]
    pub(crate) event: PathBuf,
    /// Token used to publish labels, comments, and commit statuses
    #[arg(short = 's', long, env = "GITHUB_TOKEN")]
    pub(crate) secret: Option<String>,
    /// Repository owner that is never accepted as a public submission link
    #[arg(long, default_value = DEFAULT_EXCLUDED_ORG)]
    pub(crate) excluded_org: String,
    /// Evaluate and print the verdict without posting feedback to GitHub
    #[arg(long)]
    pub(crate) dry_run: bool,
}

pub(crate) fn run() -> Result<Verdict, AppError> {
    let cli = Cli::parse();

    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;

    let deadline = parse_deadline(&cli.deadline)?;
    let event = PullRequestEvent::from_path(&cli.event)?;

    let mut github = config.github;
    if cli.secret.is_some() {
        github.token = cli.secret;
    }
    let gateway = GithubApiClient::new(&github)?;

    let validator = SubmissionValidator::new(ValidationConfig::new(deadline, cli.excluded_org));
    crate::run::execute(&gateway, &event, &validator, cli.dry_run)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_the_required_arguments() {
        let cli = Cli::try_parse_from([
            "pr-compliance-runner",
            "-d",
            "2022-04-05T17:00:00Z",
            "-e",
            "/tmp/event.json",
        ])
        .expect("arguments parse");

        assert_eq!(cli.deadline, "2022-04-05T17:00:00Z");
        assert_eq!(cli.event, PathBuf::from("/tmp/event.json"));
        assert_eq!(cli.excluded_org, "KTH");
        assert!(!cli.dry_run);
    }

    #[test]
    fn deadline_and_event_are_mandatory() {
        assert!(Cli::try_parse_from(["pr-compliance-runner"]).is_err());
        assert!(Cli::try_parse_from(["pr-compliance-runner", "-d", "2022-04-05T17:00:00Z"]).is_err());
    }

    #[test]
    fn excluded_org_can_be_overridden() {
        let cli = Cli::try_parse_from([
            "pr-compliance-runner",
            "-d",
            "2022-04-05T17:00:00Z",
            "-e",
            "/tmp/event.json",
            "--excluded-org",
            "acme-university",
            "--dry-run",
        ])
        .expect("arguments parse");

        assert_eq!(cli.excluded_org, "acme-university");
        assert!(cli.dry_run);
    }
}
