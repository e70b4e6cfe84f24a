//! Email verification runs once per page visit: no token means no request,
//! otherwise a single verify call drives `Loading` to `Success` or `Error`.

use crate::{
    app_lib::{HttpTransport, notify::Notifier},
    features::auth::{
        flows::{AuthFlows, messages},
        types::VerifyEmailRequest,
    },
};
use tracing::{info, warn};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum VerificationState {
    NoToken,
    Loading,
    Success,
    Error(String),
}

impl VerificationState {
    /// Initial state for a page visit.
    pub fn enter(token: Option<&str>) -> Self {
        match token {
            Some(_) => Self::Loading,
            None => Self::NoToken,
        }
    }

    /// Resend is offered when there is nothing to verify or verification failed.
    pub fn offers_resend(&self) -> bool {
        matches!(self, Self::NoToken | Self::Error(_))
    }
}

impl<T: HttpTransport, N: Notifier + ?Sized> AuthFlows<'_, T, N> {
    /// Publishes every state through `on_state` and returns the final one.
    /// A cancelled request publishes nothing further; the page is gone.
    pub async fn run_verification(
        &self,
        token: Option<String>,
        on_state: impl Fn(VerificationState),
    ) -> VerificationState {
        let Some(token) = token else {
            on_state(VerificationState::NoToken);
            return VerificationState::NoToken;
        };

        on_state(VerificationState::Loading);
        let state = match self.client.verify_email(&VerifyEmailRequest { token }).await {
            Ok(()) => {
                info!(flow = "verify_email", "email verified");
                self.notifier.success(messages::VERIFY_SUCCESS);
                VerificationState::Success
            }
            Err(err) if err.is_cancelled() => {
                info!(flow = "verify_email", "verification cancelled");
                return VerificationState::Loading;
            }
            Err(err) => {
                warn!(flow = "verify_email", error = %err, "verification failed");
                let message = err.user_message(messages::VERIFY_FAILED);
                self.notifier.error(&message);
                VerificationState::Error(message)
            }
        };
        on_state(state.clone());
        state
    }
}

#[cfg(test)]
mod tests {
    use super::VerificationState;
    use crate::{
        app_lib::{AppError, notify::Toast},
        features::auth::{
            client::{AuthClient, endpoints},
            flows::{AuthFlows, messages},
            test_support::{MockTransport, RecordingNotifier},
        },
    };
    use std::cell::RefCell;

    #[test]
    fn entry_state_depends_on_token() {
        assert_eq!(VerificationState::enter(None), VerificationState::NoToken);
        assert_eq!(VerificationState::enter(Some("abc")), VerificationState::Loading);
        assert!(VerificationState::NoToken.offers_resend());
        assert!(VerificationState::Error("x".to_string()).offers_resend());
        assert!(!VerificationState::Success.offers_resend());
    }

    #[tokio::test]
    async fn valid_token_moves_loading_to_success() {
        let transport = MockTransport::new().respond(endpoints::VERIFY_EMAIL, 200, "{}");
        let client = AuthClient::new(&transport);
        let notifier = RecordingNotifier::default();
        let flows = AuthFlows::new(&client, &notifier);
        let seen = RefCell::new(Vec::new());

        let state = flows
            .run_verification(Some("abc".to_string()), |state| seen.borrow_mut().push(state))
            .await;

        assert_eq!(state, VerificationState::Success);
        assert_eq!(
            seen.into_inner(),
            vec![VerificationState::Loading, VerificationState::Success]
        );
        assert_eq!(transport.request_count(), 1);
        assert_eq!(notifier.toasts(), vec![Toast::success(messages::VERIFY_SUCCESS)]);
    }

    #[tokio::test]
    async fn rejected_token_shows_backend_message() {
        let transport =
            MockTransport::new().respond(endpoints::VERIFY_EMAIL, 404, r#"{"message":"expired"}"#);
        let client = AuthClient::new(&transport);
        let notifier = RecordingNotifier::default();
        let flows = AuthFlows::new(&client, &notifier);

        let state = flows.run_verification(Some("abc".to_string()), |_| {}).await;

        assert_eq!(state, VerificationState::Error("expired".to_string()));
        assert_eq!(notifier.toasts(), vec![Toast::error("expired")]);
    }

    #[tokio::test]
    async fn network_error_falls_back_to_generic_message() {
        let transport = MockTransport::new().fail_with(AppError::Network("offline".to_string()));
        let client = AuthClient::new(&transport);
        let notifier = RecordingNotifier::default();
        let flows = AuthFlows::new(&client, &notifier);

        let state = flows.run_verification(Some("abc".to_string()), |_| {}).await;

        assert_eq!(state, VerificationState::Error(messages::VERIFY_FAILED.to_string()));
    }

    #[tokio::test]
    async fn missing_token_makes_no_request() {
        let transport = MockTransport::new();
        let client = AuthClient::new(&transport);
        let notifier = RecordingNotifier::default();
        let flows = AuthFlows::new(&client, &notifier);
        let seen = RefCell::new(Vec::new());

        let state = flows.run_verification(None, |state| seen.borrow_mut().push(state)).await;

        assert_eq!(state, VerificationState::NoToken);
        assert_eq!(seen.into_inner(), vec![VerificationState::NoToken]);
        assert_eq!(transport.request_count(), 0);
        assert!(notifier.toasts().is_empty());
    }

    #[tokio::test]
    async fn cancelled_verification_publishes_nothing_after_loading() {
        let transport = MockTransport::new().fail_with(AppError::Cancelled);
        let client = AuthClient::new(&transport);
        let notifier = RecordingNotifier::default();
        let flows = AuthFlows::new(&client, &notifier);
        let seen = RefCell::new(Vec::new());

        flows
            .run_verification(Some("abc".to_string()), |state| seen.borrow_mut().push(state))
            .await;

        assert_eq!(seen.into_inner(), vec![VerificationState::Loading]);
        assert!(notifier.toasts().is_empty());
    }
}
