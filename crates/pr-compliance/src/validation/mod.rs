//! Submission classification and validation engine.
//!
//! Everything in this module is synchronous, pure, and free of I/O: the
//! caller supplies the changeset, the pull-request timestamps, and the run
//! configuration, and gets back exactly one immutable [`Verdict`].

pub mod domain;
pub(crate) mod evaluate;
pub mod feedback;
pub(crate) mod repolink;
pub(crate) mod stage;
pub(crate) mod timing;
pub mod validator;

#[cfg(test)]
mod tests;

pub use domain::{ChangesetEntry, DocumentFinding, Outcome, RepoRef, Stage, Verdict};
pub use feedback::{commit_status, labels, render, CommitStatus, MARKER_LABEL, STATUS_CONTEXT};
pub use validator::{
    confirm_visibility, SubmissionValidator, ValidationConfig, ValidationError,
    DEFAULT_EXCLUDED_ORG,
};
