//! Auth feature module: form records, validation, the submission orchestrator
//! and the per-flow glue between forms, the auth API and notifications. It keeps
//! authentication logic out of the views. Payloads carry passwords and tokens;
//! nothing here may log them.
//!
//! Flow Overview: a page owns one form record and one `Submission`. On submit the
//! flow validates the record, sends exactly one request through `AuthClient`,
//! reports the outcome as a toast and hands back a `FollowUp` for the page.

pub(crate) mod client;
pub(crate) mod flows;
pub(crate) mod forms;
pub(crate) mod submission;
pub(crate) mod types;
pub(crate) mod validation;
pub(crate) mod verification;

#[cfg(test)]
pub(crate) mod test_support;
