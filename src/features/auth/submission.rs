//! Submission state for a single form instance and the orchestrator every auth
//! flow runs through: re-entrancy guard, fail-fast validation, exactly one
//! request, and a guaranteed exit from `Submitting`.
//!
//! State lives behind `SubmissionCell` so the same orchestration drives a Leptos
//! signal in the browser and a plain `RefCell` in tests. Values are replaced
//! wholesale, never mutated in place.

use crate::{app_lib::AppError, features::auth::validation::ValidationError};
use std::{cell::RefCell, future::Future};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Submission {
    pub status: SubmissionStatus,
    pub last_error: Option<String>,
}

impl Submission {
    pub fn idle() -> Self {
        Self::default()
    }

    pub fn submitting() -> Self {
        Self {
            status: SubmissionStatus::Submitting,
            last_error: None,
        }
    }

    pub fn succeeded() -> Self {
        Self {
            status: SubmissionStatus::Succeeded,
            last_error: None,
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            status: SubmissionStatus::Failed,
            last_error: Some(message.into()),
        }
    }

    pub fn is_submitting(&self) -> bool {
        self.status == SubmissionStatus::Submitting
    }
}

/// Holder of one form's `Submission`, owned by that form only.
pub trait SubmissionCell {
    fn current(&self) -> Submission;
    fn replace(&self, next: Submission);
}

impl SubmissionCell for RefCell<Submission> {
    fn current(&self) -> Submission {
        self.borrow().clone()
    }

    fn replace(&self, next: Submission) {
        *self.borrow_mut() = next;
    }
}

/// Signals may already be disposed when a late response lands after unmount;
/// reads then report idle and writes are dropped.
#[cfg(target_arch = "wasm32")]
impl SubmissionCell for leptos::prelude::RwSignal<Submission> {
    fn current(&self) -> Submission {
        use leptos::prelude::GetUntracked;
        self.try_get_untracked().unwrap_or_default()
    }

    fn replace(&self, next: Submission) {
        use leptos::prelude::Set;
        let _ = self.try_set(next);
    }
}

/// Result of one submit attempt as seen by the flow.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitOutcome<T> {
    /// A submission was already in flight; nothing happened.
    Ignored,
    Invalid(ValidationError),
    Failed(AppError),
    /// The owning page went away; the form was returned to idle.
    Cancelled,
    Succeeded(T),
}

impl<T> SubmitOutcome<T> {
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> SubmitOutcome<U> {
        match self {
            SubmitOutcome::Ignored => SubmitOutcome::Ignored,
            SubmitOutcome::Invalid(err) => SubmitOutcome::Invalid(err),
            SubmitOutcome::Failed(err) => SubmitOutcome::Failed(err),
            SubmitOutcome::Cancelled => SubmitOutcome::Cancelled,
            SubmitOutcome::Succeeded(value) => SubmitOutcome::Succeeded(f(value)),
        }
    }

    pub fn succeeded(&self) -> Option<&T> {
        match self {
            SubmitOutcome::Succeeded(value) => Some(value),
            _ => None,
        }
    }
}

/// Resets the cell to idle if the request future is dropped before it resolves.
struct InFlight<'a, C: SubmissionCell + ?Sized> {
    cell: &'a C,
    armed: bool,
}

impl<C: SubmissionCell + ?Sized> InFlight<'_, C> {
    fn disarm(&mut self) {
        self.armed = false;
    }
}

impl<C: SubmissionCell + ?Sized> Drop for InFlight<'_, C> {
    fn drop(&mut self) {
        if self.armed {
            self.cell.replace(Submission::idle());
        }
    }
}

/// Runs one submission. `validate` is only called when no submission is in
/// flight and `send` only when validation passed, so an ignored or invalid
/// attempt never reaches the network. Failed requests store
/// `AppError::user_message(fallback)` as the last error.
pub async fn submit<C, P, T, F, Fut>(
    cell: &C,
    fallback: &str,
    validate: impl FnOnce() -> Result<P, ValidationError>,
    send: F,
) -> SubmitOutcome<T>
where
    C: SubmissionCell + ?Sized,
    F: FnOnce(P) -> Fut,
    Fut: Future<Output = Result<T, AppError>>,
{
    if cell.current().is_submitting() {
        return SubmitOutcome::Ignored;
    }

    let payload = match validate() {
        Ok(payload) => payload,
        Err(err) => {
            cell.replace(Submission::failed(err.to_string()));
            return SubmitOutcome::Invalid(err);
        }
    };

    cell.replace(Submission::submitting());
    let mut in_flight = InFlight { cell, armed: true };
    let result = send(payload).await;
    in_flight.disarm();

    match result {
        Ok(value) => {
            cell.replace(Submission::succeeded());
            SubmitOutcome::Succeeded(value)
        }
        Err(AppError::Cancelled) => {
            cell.replace(Submission::idle());
            SubmitOutcome::Cancelled
        }
        Err(err) => {
            cell.replace(Submission::failed(err.user_message(fallback)));
            SubmitOutcome::Failed(err)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{cell::Cell, time::Duration};

    #[tokio::test]
    async fn success_leaves_submitting() {
        let cell = RefCell::new(Submission::idle());
        let observed = &cell;
        let outcome = submit(&cell, "failed", || Ok(2), move |value| async move {
            assert!(observed.current().is_submitting());
            Ok::<_, AppError>(value * 2)
        })
        .await;

        assert_eq!(outcome, SubmitOutcome::Succeeded(4));
        assert_eq!(cell.current(), Submission::succeeded());
    }

    #[tokio::test]
    async fn request_error_stores_backend_or_fallback_message() {
        let cell = RefCell::new(Submission::idle());
        let outcome = submit(&cell, "Registration failed", || Ok(()), |()| async {
            Err::<(), _>(AppError::Http {
                status: 409,
                message: Some("Email already registered".to_string()),
            })
        })
        .await;
        assert!(matches!(outcome, SubmitOutcome::Failed(AppError::Http { status: 409, .. })));
        assert_eq!(cell.current(), Submission::failed("Email already registered"));

        let outcome = submit(&cell, "Registration failed", || Ok(()), |()| async {
            Err::<(), _>(AppError::Network("offline".to_string()))
        })
        .await;
        assert!(matches!(outcome, SubmitOutcome::Failed(AppError::Network(_))));
        assert_eq!(cell.current(), Submission::failed("Registration failed"));
    }

    #[tokio::test]
    async fn validation_failure_skips_send() {
        let cell = RefCell::new(Submission::idle());
        let sent = Cell::new(false);
        let outcome = submit(
            &cell,
            "failed",
            || Err::<(), _>(ValidationError::PasswordMismatch),
            |()| {
                sent.set(true);
                async { Ok::<_, AppError>(()) }
            },
        )
        .await;

        assert_eq!(outcome, SubmitOutcome::Invalid(ValidationError::PasswordMismatch));
        assert!(!sent.get());
        assert_eq!(cell.current(), Submission::failed("Passwords do not match"));
    }

    #[tokio::test]
    async fn in_flight_submission_ignores_new_attempts() {
        let cell = RefCell::new(Submission::submitting());
        let validated = Cell::new(false);
        let outcome = submit(
            &cell,
            "failed",
            || {
                validated.set(true);
                Ok(())
            },
            |()| async { Ok::<_, AppError>(()) },
        )
        .await;

        assert_eq!(outcome, SubmitOutcome::Ignored);
        assert!(!validated.get());
        assert!(cell.current().is_submitting());
    }

    #[tokio::test]
    async fn failed_and_succeeded_states_allow_resubmission() {
        let cell = RefCell::new(Submission::failed("previous"));
        let succeed = |()| async { Ok::<_, AppError>(()) };
        let outcome = submit(&cell, "failed", || Ok(()), succeed).await;
        assert_eq!(outcome, SubmitOutcome::Succeeded(()));

        let outcome = submit(&cell, "failed", || Ok(()), succeed).await;
        assert_eq!(outcome, SubmitOutcome::Succeeded(()));
    }

    #[tokio::test]
    async fn cancellation_returns_to_idle() {
        let cell = RefCell::new(Submission::idle());
        let outcome = submit(&cell, "failed", || Ok(()), |()| async {
            Err::<(), _>(AppError::Cancelled)
        })
        .await;

        assert_eq!(outcome, SubmitOutcome::Cancelled);
        assert_eq!(cell.current(), Submission::idle());
    }

    #[tokio::test]
    async fn dropping_the_request_returns_to_idle() {
        let cell = RefCell::new(Submission::idle());
        let pending = submit(&cell, "failed", || Ok(()), |()| {
            std::future::pending::<Result<(), AppError>>()
        });

        let timed_out = tokio::time::timeout(Duration::from_millis(10), pending).await;
        assert!(timed_out.is_err());
        assert_eq!(cell.current(), Submission::idle());
    }

    #[test]
    fn outcome_map_keeps_non_success_variants() {
        let outcome: SubmitOutcome<u8> = SubmitOutcome::Invalid(ValidationError::InvalidEmail);
        assert_eq!(
            outcome.map(|value| value + 1),
            SubmitOutcome::Invalid(ValidationError::InvalidEmail)
        );
        assert_eq!(SubmitOutcome::Succeeded(1).map(|value| value + 1).succeeded(), Some(&2));
    }
}
