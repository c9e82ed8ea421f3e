use crate::validation::stage::classify;
use crate::validation::Stage;

#[test]
fn submission_title_classifies_as_final() {
    let text = "# Assignment Submission\n\nHere is our repository.";
    assert_eq!(classify(text), Stage::FinalSubmission);
}

#[test]
fn proposal_title_classifies_as_proposal() {
    let text = "# Assignment Proposal\n\nWe intend to automate grading.";
    assert_eq!(classify(text), Stage::Proposal);
}

#[test]
fn title_cue_overrides_body_keywords() {
    // A proposal title wins even when "submission" appears later in the body.
    let text = "# Assignment Proposal\n\nThe final submission will follow in two weeks.";
    assert_eq!(classify(text), Stage::Proposal);
}

#[test]
fn classification_is_case_insensitive() {
    assert_eq!(classify("This is our FINAL SUBMISSION."), Stage::FinalSubmission);
    assert_eq!(classify("this is a PROPOSAL for the course"), Stage::Proposal);
}

#[test]
fn body_phrase_assignment_submission_counts_as_final() {
    let text = "Please treat this as our assignment submission.";
    assert_eq!(classify(text), Stage::FinalSubmission);
}

#[test]
fn earliest_body_keyword_wins_without_a_title() {
    let final_first = "We hand in our final submission, building on the earlier proposal.";
    assert_eq!(classify(final_first), Stage::FinalSubmission);

    let proposal_first = "This proposal may later become a final submission.";
    assert_eq!(classify(proposal_first), Stage::Proposal);
}

#[test]
fn heading_may_appear_after_leading_text() {
    let text = "badges and shields\n\n## Project Submission\n\nproposal proposal proposal";
    assert_eq!(classify(text), Stage::FinalSubmission);
}

#[test]
fn no_cues_yields_undetermined() {
    assert_eq!(classify("# Meeting notes\n\nNothing to see here."), Stage::Undetermined);
    assert_eq!(classify(""), Stage::Undetermined);
}

#[test]
fn classification_is_pure() {
    let text = "# Assignment Submission\n\nhttps://github.com/acme/widget";
    assert_eq!(classify(text), classify(text));
}
