use chrono::{DateTime, TimeZone, Utc};

use crate::validation::{ChangesetEntry, SubmissionValidator, ValidationConfig};

pub(super) fn utc(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, mo, d, h, mi, s).single().expect("valid instant")
}

pub(super) fn deadline() -> DateTime<Utc> {
    utc(2022, 4, 5, 17, 0, 0)
}

pub(super) fn before_deadline() -> DateTime<Utc> {
    utc(2022, 4, 1, 9, 30, 0)
}

pub(super) fn after_deadline() -> DateTime<Utc> {
    utc(2022, 4, 6, 8, 0, 0)
}

pub(super) fn config() -> ValidationConfig {
    ValidationConfig::new(deadline(), "KTH")
}

pub(super) fn validator() -> SubmissionValidator {
    SubmissionValidator::new(config())
}

pub(super) fn entry(path: &str, content: &str) -> ChangesetEntry {
    ChangesetEntry::new(path, content)
}

pub(super) fn submission_doc() -> ChangesetEntry {
    entry(
        "README.md",
        "# Assignment Submission\n\nOur work lives at \
         https://github.com/landeholt/dd2482-course-automation and is ready for review.",
    )
}

pub(super) fn proposal_doc() -> ChangesetEntry {
    entry(
        "proposal.md",
        "# Assignment Proposal\n\nWe plan to build a course automation grader.",
    )
}

pub(super) fn unclassifiable_doc() -> ChangesetEntry {
    entry(
        "notes.md",
        "# Meeting notes\n\nDiscussed grading and timelines.",
    )
}
