use super::domain::Stage;

const FINAL_PHRASES: [&str; 2] = ["final submission", "assignment submission"];
const PROPOSAL_PHRASE: &str = "proposal";

/// Classify a document's text into the submission stage it claims.
///
/// The first markdown heading is the authoritative signal: a title that
/// mentions "submission" or "proposal" overrides any keyword elsewhere in the
/// body. Without a usable title, the earliest keyword occurrence in the body
/// decides, and a document with no cue at all stays `Undetermined`.
pub fn classify(text: &str) -> Stage {
    if let Some(title) = first_heading(text) {
        let title = title.to_lowercase();
        if title.contains("submission") {
            return Stage::FinalSubmission;
        }
        if title.contains(PROPOSAL_PHRASE) {
            return Stage::Proposal;
        }
    }

    let body = text.to_lowercase();
    let final_at = FINAL_PHRASES
        .iter()
        .filter_map(|phrase| body.find(phrase))
        .min();
    let proposal_at = body.find(PROPOSAL_PHRASE);

    match (final_at, proposal_at) {
        (Some(final_at), Some(proposal_at)) => {
            if final_at <= proposal_at {
                Stage::FinalSubmission
            } else {
                Stage::Proposal
            }
        }
        (Some(_), None) => Stage::FinalSubmission,
        (None, Some(_)) => Stage::Proposal,
        (None, None) => Stage::Undetermined,
    }
}

fn first_heading(text: &str) -> Option<&str> {
    text.lines()
        .map(str::trim_start)
        .find(|line| line.starts_with('#'))
        .map(|line| line.trim_start_matches('#').trim())
}
