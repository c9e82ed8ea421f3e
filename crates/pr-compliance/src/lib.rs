//! Pull-request compliance checks for course submissions.
//!
//! The [`validation`] module holds the synchronous core: stage
//! classification, repository-link extraction, timeliness, and the verdict
//! fold. The [`github`] module is the gateway to the code-hosting API used to
//! retrieve the changeset and publish feedback.

pub mod config;
pub mod error;
pub mod github;
pub mod telemetry;
pub mod validation;
