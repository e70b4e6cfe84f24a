//! One orchestration function per auth flow. Each runs the shared submission
//! contract, reports the result as a toast and returns the follow-up the page
//! applies (navigation, redirect or a result screen). Nothing here touches the
//! browser directly.

use crate::{
    app_lib::{HttpTransport, notify::Notifier},
    features::auth::{
        client::AuthClient,
        forms::{ForgotPasswordForm, LoginForm, ResetPasswordForm, SignupForm},
        submission::{SubmissionCell, SubmitOutcome, submit},
        types::OAuthProvider,
    },
    routes::paths,
};
use tracing::{info, warn};

/// User-facing toast texts.
pub mod messages {
    pub const SIGNUP_SUCCESS: &str = "Account created successfully! Please verify your email.";
    pub const SIGNUP_FAILED: &str = "Registration failed";
    pub const LOGIN_SUCCESS: &str = "Signed in successfully.";
    pub const LOGIN_FAILED: &str = "Login failed";
    pub const FORGOT_SUCCESS: &str = "Password reset link has been sent to your email.";
    pub const FORGOT_FAILED: &str = "Failed to send reset email";
    pub const RESET_SUCCESS: &str = "Your password has been reset successfully.";
    pub const RESET_FAILED: &str = "Failed to reset password";
    pub const RESET_TOKEN_MISSING: &str = "Invalid or missing reset token";
    pub const VERIFY_SUCCESS: &str = "Your email has been verified successfully.";
    pub const VERIFY_FAILED: &str = "Verification failed";
    pub const RESEND_SUCCESS: &str = "Verification email has been resent.";
    pub const RESEND_FAILED: &str = "Failed to resend email";
    pub const OAUTH_FAILED: &str = "Failed to initiate social signup";
}

/// What the page does after a successful submission.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FollowUp {
    /// Client-side navigation to an app path.
    Navigate(&'static str),
    /// Full browser redirect to an external URL.
    Redirect(String),
    /// Show the "check your email" screen for this address.
    CheckEmail { email: String },
    PasswordReset,
    Stay,
}

pub struct AuthFlows<'a, T, N: ?Sized> {
    pub(crate) client: &'a AuthClient<T>,
    pub(crate) notifier: &'a N,
}

impl<'a, T: HttpTransport, N: Notifier + ?Sized> AuthFlows<'a, T, N> {
    pub fn new(client: &'a AuthClient<T>, notifier: &'a N) -> Self {
        Self { client, notifier }
    }

    pub async fn signup<C>(&self, cell: &C, form: &SignupForm) -> SubmitOutcome<FollowUp>
    where
        C: SubmissionCell + ?Sized,
    {
        let outcome = submit(
            cell,
            messages::SIGNUP_FAILED,
            || form.validate(),
            |request| async move { self.client.register(&request).await },
        )
        .await;

        self.report(
            "signup",
            outcome,
            messages::SIGNUP_SUCCESS,
            messages::SIGNUP_FAILED,
        )
        .map(|()| FollowUp::Navigate(paths::VERIFY_EMAIL))
    }

    pub async fn login<C>(&self, cell: &C, form: &LoginForm) -> SubmitOutcome<FollowUp>
    where
        C: SubmissionCell + ?Sized,
    {
        let outcome = submit(
            cell,
            messages::LOGIN_FAILED,
            || form.validate(),
            |request| async move { self.client.login(&request).await },
        )
        .await;

        self.report("login", outcome, messages::LOGIN_SUCCESS, messages::LOGIN_FAILED)
            .map(|()| FollowUp::Navigate(paths::DASHBOARD))
    }

    /// On success the submitted address is kept for the check-email screen.
    pub async fn forgot_password<C>(
        &self,
        cell: &C,
        form: &ForgotPasswordForm,
    ) -> SubmitOutcome<FollowUp>
    where
        C: SubmissionCell + ?Sized,
    {
        let outcome = submit(
            cell,
            messages::FORGOT_FAILED,
            || form.validate(),
            |request| async move {
                self.client
                    .forgot_password(&request)
                    .await
                    .map(|()| request.email)
            },
        )
        .await;

        self.report(
            "forgot_password",
            outcome,
            messages::FORGOT_SUCCESS,
            messages::FORGOT_FAILED,
        )
        .map(|email| FollowUp::CheckEmail { email })
    }

    pub async fn reset_password<C>(
        &self,
        cell: &C,
        form: &ResetPasswordForm,
    ) -> SubmitOutcome<FollowUp>
    where
        C: SubmissionCell + ?Sized,
    {
        let outcome = submit(
            cell,
            messages::RESET_FAILED,
            || form.validate(),
            |request| async move { self.client.reset_password(&request).await },
        )
        .await;

        self.report(
            "reset_password",
            outcome,
            messages::RESET_SUCCESS,
            messages::RESET_FAILED,
        )
        .map(|()| FollowUp::PasswordReset)
    }

    /// Side request from the verify-email page; it never changes verification state.
    pub async fn resend_verification<C>(&self, cell: &C) -> SubmitOutcome<FollowUp>
    where
        C: SubmissionCell + ?Sized,
    {
        let outcome = submit(cell, messages::RESEND_FAILED, || Ok(()), |()| async move {
            self.client.resend_verification().await
        })
        .await;

        self.report(
            "resend_verification",
            outcome,
            messages::RESEND_SUCCESS,
            messages::RESEND_FAILED,
        )
        .map(|()| FollowUp::Stay)
    }

    /// Starts social signup. Success carries no toast; the browser leaves the app.
    pub async fn oauth_signup<C>(
        &self,
        cell: &C,
        provider: OAuthProvider,
    ) -> SubmitOutcome<FollowUp>
    where
        C: SubmissionCell + ?Sized,
    {
        let outcome = submit(
            cell,
            messages::OAUTH_FAILED,
            || Ok(provider),
            |provider| async move { self.client.oauth_authorization_url(provider).await },
        )
        .await;

        let slug = provider.slug();
        match &outcome {
            SubmitOutcome::Succeeded(_) => {
                info!(flow = "oauth", provider = slug, "redirecting to provider");
            }
            SubmitOutcome::Failed(err) => {
                warn!(flow = "oauth", provider = slug, error = %err, "submission failed");
                self.notifier.error(&err.user_message(messages::OAUTH_FAILED));
            }
            _ => {}
        }
        outcome.map(FollowUp::Redirect)
    }

    /// Logs the outcome and emits the matching toast. Ignored and cancelled
    /// attempts stay silent.
    fn report<V>(
        &self,
        flow: &'static str,
        outcome: SubmitOutcome<V>,
        success: &str,
        fallback: &str,
    ) -> SubmitOutcome<V> {
        match &outcome {
            SubmitOutcome::Succeeded(_) => {
                info!(flow, "submission succeeded");
                self.notifier.success(success);
            }
            SubmitOutcome::Invalid(err) => {
                info!(flow, reason = %err, "submission rejected locally");
                self.notifier.error(&err.to_string());
            }
            SubmitOutcome::Failed(err) => {
                warn!(flow, error = %err, "submission failed");
                self.notifier.error(&err.user_message(fallback));
            }
            SubmitOutcome::Ignored => info!(flow, "submission already in flight"),
            SubmitOutcome::Cancelled => info!(flow, "submission cancelled"),
        }
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::{AuthFlows, FollowUp, messages};
    use crate::{
        app_lib::{AppError, notify::Toast},
        features::auth::{
            client::{AuthClient, endpoints},
            forms::{ForgotPasswordForm, LoginForm, ResetPasswordForm, valid_signup},
            submission::{Submission, SubmissionCell, SubmitOutcome},
            test_support::{MockTransport, RecordingNotifier},
            types::OAuthProvider,
            validation::ValidationError,
        },
    };
    use serde_json::{Value, json};
    use std::cell::RefCell;

    fn sent_body(transport: &MockTransport) -> Value {
        let requests = transport.requests();
        serde_json::from_str(requests[0].body.as_deref().expect("body")).expect("json")
    }

    #[tokio::test]
    async fn signup_success_notifies_and_navigates_to_verify_email() {
        let transport = MockTransport::new().respond(endpoints::REGISTER, 201, r#"{"id":"u1"}"#);
        let client = AuthClient::new(&transport);
        let notifier = RecordingNotifier::default();
        let flows = AuthFlows::new(&client, &notifier);
        let cell = RefCell::new(Submission::idle());

        let outcome = flows.signup(&cell, &valid_signup()).await;

        assert_eq!(outcome, SubmitOutcome::Succeeded(FollowUp::Navigate("/verify-email")));
        assert_eq!(cell.current(), Submission::succeeded());
        assert_eq!(notifier.toasts(), vec![Toast::success(messages::SIGNUP_SUCCESS)]);

        let body = sent_body(&transport);
        assert_eq!(body["phoneNumber"], json!("024-123-4567"));
        assert_eq!(body["gender"], json!("FEMALE"));
        assert!(body.get("confirmPassword").is_none());
    }

    #[tokio::test]
    async fn signup_with_mismatched_passwords_never_hits_the_network() {
        let transport = MockTransport::new().respond(endpoints::REGISTER, 201, "{}");
        let client = AuthClient::new(&transport);
        let notifier = RecordingNotifier::default();
        let flows = AuthFlows::new(&client, &notifier);
        let cell = RefCell::new(Submission::idle());

        let mut form = valid_signup();
        form.set_confirm_password("abc12345?".to_string());
        let outcome = flows.signup(&cell, &form).await;

        assert_eq!(outcome, SubmitOutcome::Invalid(ValidationError::PasswordMismatch));
        assert_eq!(transport.request_count(), 0);
        assert_eq!(cell.current(), Submission::failed("Passwords do not match"));
        assert_eq!(notifier.toasts(), vec![Toast::error("Passwords do not match")]);
    }

    #[tokio::test]
    async fn signup_failure_uses_backend_message_then_fallback() {
        let transport = MockTransport::new().respond(
            endpoints::REGISTER,
            409,
            r#"{"message":"Username already taken"}"#,
        );
        let client = AuthClient::new(&transport);
        let notifier = RecordingNotifier::default();
        let flows = AuthFlows::new(&client, &notifier);
        let cell = RefCell::new(Submission::idle());

        let outcome = flows.signup(&cell, &valid_signup()).await;
        assert!(matches!(outcome, SubmitOutcome::Failed(AppError::Http { status: 409, .. })));
        assert_eq!(notifier.toasts(), vec![Toast::error("Username already taken")]);

        let transport = MockTransport::new().respond(endpoints::REGISTER, 500, "oops");
        let client = AuthClient::new(&transport);
        let notifier = RecordingNotifier::default();
        let flows = AuthFlows::new(&client, &notifier);
        flows.signup(&cell, &valid_signup()).await;
        assert_eq!(notifier.toasts(), vec![Toast::error(messages::SIGNUP_FAILED)]);
        assert_eq!(cell.current(), Submission::failed(messages::SIGNUP_FAILED));
    }

    #[tokio::test]
    async fn malformed_success_body_is_a_failure() {
        let transport = MockTransport::new().respond(endpoints::REGISTER, 200, "<html>ok</html>");
        let client = AuthClient::new(&transport);
        let notifier = RecordingNotifier::default();
        let flows = AuthFlows::new(&client, &notifier);
        let cell = RefCell::new(Submission::idle());

        let outcome = flows.signup(&cell, &valid_signup()).await;

        assert!(matches!(outcome, SubmitOutcome::Failed(AppError::Parse(_))));
        assert_eq!(notifier.toasts(), vec![Toast::error(messages::SIGNUP_FAILED)]);
    }

    #[tokio::test]
    async fn concurrent_second_submission_is_ignored() {
        let transport = MockTransport::new().respond(endpoints::REGISTER, 201, "{}");
        let client = AuthClient::new(&transport);
        let notifier = RecordingNotifier::default();
        let flows = AuthFlows::new(&client, &notifier);
        let cell = RefCell::new(Submission::idle());
        let form = valid_signup();

        let (first, second) = tokio::join!(flows.signup(&cell, &form), flows.signup(&cell, &form));

        assert_eq!(first, SubmitOutcome::Succeeded(FollowUp::Navigate("/verify-email")));
        assert_eq!(second, SubmitOutcome::Ignored);
        assert_eq!(transport.request_count(), 1);
        assert_eq!(cell.current(), Submission::succeeded());
        assert_eq!(notifier.toasts().len(), 1);
    }

    #[tokio::test]
    async fn transport_failure_resolves_to_failed_with_fallback() {
        let transport = MockTransport::new().fail_with(AppError::Network("offline".to_string()));
        let client = AuthClient::new(&transport);
        let notifier = RecordingNotifier::default();
        let flows = AuthFlows::new(&client, &notifier);
        let cell = RefCell::new(Submission::idle());

        let mut form = LoginForm::default();
        form.set_email("ama@jinva.app".to_string());
        form.set_password("secret".to_string());
        let outcome = flows.login(&cell, &form).await;

        assert!(matches!(outcome, SubmitOutcome::Failed(AppError::Network(_))));
        assert!(!cell.current().is_submitting());
        assert_eq!(cell.current(), Submission::failed(messages::LOGIN_FAILED));
        assert_eq!(notifier.toasts(), vec![Toast::error(messages::LOGIN_FAILED)]);
        assert_eq!(transport.request_count(), 1);
    }

    #[tokio::test]
    async fn login_success_navigates_to_dashboard() {
        let transport = MockTransport::new().respond(endpoints::LOGIN, 200, r#"{"token":"x"}"#);
        let client = AuthClient::new(&transport);
        let notifier = RecordingNotifier::default();
        let flows = AuthFlows::new(&client, &notifier);
        let cell = RefCell::new(Submission::idle());

        let mut form = LoginForm::default();
        form.set_email(" Ama@JinVa.app".to_string());
        form.set_password("secret".to_string());
        let outcome = flows.login(&cell, &form).await;

        assert_eq!(outcome, SubmitOutcome::Succeeded(FollowUp::Navigate("/dashboard")));
        assert_eq!(
            sent_body(&transport),
            json!({ "email": "ama@jinva.app", "password": "secret" })
        );
        assert!(transport.requests()[0].with_credentials);
    }

    #[tokio::test]
    async fn forgot_password_keeps_email_for_check_screen() {
        let transport = MockTransport::new().respond(endpoints::FORGOT_PASSWORD, 200, "{}");
        let client = AuthClient::new(&transport);
        let notifier = RecordingNotifier::default();
        let flows = AuthFlows::new(&client, &notifier);
        let cell = RefCell::new(Submission::idle());

        let mut form = ForgotPasswordForm::default();
        form.set_email("ama@jinva.app".to_string());
        let outcome = flows.forgot_password(&cell, &form).await;

        assert_eq!(
            outcome,
            SubmitOutcome::Succeeded(FollowUp::CheckEmail {
                email: "ama@jinva.app".to_string(),
            })
        );
        assert_eq!(sent_body(&transport), json!({ "email": "ama@jinva.app" }));
        assert_eq!(notifier.toasts(), vec![Toast::success(messages::FORGOT_SUCCESS)]);
    }

    #[tokio::test]
    async fn reset_password_without_token_never_submits() {
        let transport = MockTransport::new().respond(endpoints::RESET_PASSWORD, 200, "{}");
        let client = AuthClient::new(&transport);
        let notifier = RecordingNotifier::default();
        let flows = AuthFlows::new(&client, &notifier);
        let cell = RefCell::new(Submission::idle());

        let mut form = ResetPasswordForm::with_token(None);
        form.set_password("abc12345!".to_string());
        form.set_confirm_password("abc12345!".to_string());
        let outcome = flows.reset_password(&cell, &form).await;

        assert_eq!(outcome, SubmitOutcome::Invalid(ValidationError::MissingResetToken));
        assert_eq!(transport.request_count(), 0);
        assert_eq!(notifier.toasts(), vec![Toast::error(messages::RESET_TOKEN_MISSING)]);
    }

    #[tokio::test]
    async fn reset_password_sends_token_and_new_password() {
        let transport = MockTransport::new().respond(endpoints::RESET_PASSWORD, 200, "");
        let client = AuthClient::new(&transport);
        let notifier = RecordingNotifier::default();
        let flows = AuthFlows::new(&client, &notifier);
        let cell = RefCell::new(Submission::idle());

        let mut form = ResetPasswordForm::with_token(Some("reset-token".to_string()));
        form.set_password("abc12345!".to_string());
        form.set_confirm_password("abc12345!".to_string());
        let outcome = flows.reset_password(&cell, &form).await;

        assert_eq!(outcome, SubmitOutcome::Succeeded(FollowUp::PasswordReset));
        assert_eq!(
            sent_body(&transport),
            json!({ "token": "reset-token", "newPassword": "abc12345!" })
        );
        assert_eq!(notifier.toasts(), vec![Toast::success(messages::RESET_SUCCESS)]);
    }

    #[tokio::test]
    async fn resend_verification_reports_both_outcomes() {
        let transport =
            MockTransport::new().respond(endpoints::RESEND_VERIFICATION, 200, "{}");
        let client = AuthClient::new(&transport);
        let notifier = RecordingNotifier::default();
        let flows = AuthFlows::new(&client, &notifier);
        let cell = RefCell::new(Submission::idle());

        let outcome = flows.resend_verification(&cell).await;
        assert_eq!(outcome, SubmitOutcome::Succeeded(FollowUp::Stay));

        let transport = MockTransport::new().respond(
            endpoints::RESEND_VERIFICATION,
            429,
            r#"{"message":"Too many requests"}"#,
        );
        let client = AuthClient::new(&transport);
        let flows = AuthFlows::new(&client, &notifier);
        flows.resend_verification(&cell).await;

        assert_eq!(
            notifier.toasts(),
            vec![
                Toast::success(messages::RESEND_SUCCESS),
                Toast::error("Too many requests"),
            ]
        );
    }

    #[tokio::test]
    async fn oauth_signup_redirects_without_toast() {
        let transport = MockTransport::new().respond(
            "/auth/oauth/facebook",
            200,
            r#"{"authUrl":"https://www.facebook.com/dialog/oauth?x=1"}"#,
        );
        let client = AuthClient::new(&transport);
        let notifier = RecordingNotifier::default();
        let flows = AuthFlows::new(&client, &notifier);
        let cell = RefCell::new(Submission::idle());

        let outcome = flows.oauth_signup(&cell, OAuthProvider::Facebook).await;

        assert_eq!(
            outcome,
            SubmitOutcome::Succeeded(FollowUp::Redirect(
                "https://www.facebook.com/dialog/oauth?x=1".to_string()
            ))
        );
        assert!(notifier.toasts().is_empty());
    }

    #[tokio::test]
    async fn oauth_signup_failure_notifies() {
        let transport = MockTransport::new();
        let client = AuthClient::new(&transport);
        let notifier = RecordingNotifier::default();
        let flows = AuthFlows::new(&client, &notifier);
        let cell = RefCell::new(Submission::idle());

        let outcome = flows.oauth_signup(&cell, OAuthProvider::Google).await;

        assert!(matches!(outcome, SubmitOutcome::Failed(AppError::Http { status: 404, .. })));
        assert_eq!(notifier.toasts(), vec![Toast::error("Not Found")]);
        assert_eq!(cell.current(), Submission::failed("Not Found"));
    }

    #[tokio::test]
    async fn cancelled_request_is_silent() {
        let transport = MockTransport::new().fail_with(AppError::Cancelled);
        let client = AuthClient::new(&transport);
        let notifier = RecordingNotifier::default();
        let flows = AuthFlows::new(&client, &notifier);
        let cell = RefCell::new(Submission::idle());

        let outcome = flows.signup(&cell, &valid_signup()).await;

        assert_eq!(outcome, SubmitOutcome::Cancelled);
        assert_eq!(cell.current(), Submission::idle());
        assert!(notifier.toasts().is_empty());
    }
}
