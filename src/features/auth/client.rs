//! Client wrappers for the auth API endpoints. Endpoint paths and response
//! interpretation live here so flows only deal with typed results. Payloads
//! carry passwords and tokens and must never be logged.

use crate::{
    app_lib::{
        AppError, HttpTransport,
        api::{ApiRequest, handle_empty_response, handle_json_response},
    },
    features::auth::types::{
        ForgotPasswordRequest, LoginRequest, OAuthProvider, OAuthStartResponse, RegisterRequest,
        ResetPasswordRequest, VerifyEmailRequest,
    },
};
use tracing::debug;
use url::Url;

/// Relative endpoint paths under the configured API base URL.
pub mod endpoints {
    pub const REGISTER: &str = "/auth/register";
    pub const LOGIN: &str = "/auth/login";
    pub const FORGOT_PASSWORD: &str = "/auth/forgot-password";
    pub const RESET_PASSWORD: &str = "/auth/reset-password";
    pub const VERIFY_EMAIL: &str = "/auth/verify-email";
    pub const RESEND_VERIFICATION: &str = "/auth/resend-verification";
    pub const OAUTH: &str = "/auth/oauth";
}

pub struct AuthClient<T> {
    transport: T,
}

impl<T: HttpTransport> AuthClient<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    /// Creates the account. The backend sends the verification email.
    pub async fn register(&self, request: &RegisterRequest) -> Result<(), AppError> {
        let request = ApiRequest::post_json(endpoints::REGISTER, request)?;
        let response = self.transport.send(request).await?;
        handle_empty_response(&response)
    }

    /// Signs in; credentials are included so the backend can set the session cookie.
    pub async fn login(&self, request: &LoginRequest) -> Result<(), AppError> {
        let request = ApiRequest::post_json(endpoints::LOGIN, request)?.with_credentials();
        let response = self.transport.send(request).await?;
        handle_empty_response(&response)
    }

    pub async fn forgot_password(&self, request: &ForgotPasswordRequest) -> Result<(), AppError> {
        let request = ApiRequest::post_json(endpoints::FORGOT_PASSWORD, request)?;
        let response = self.transport.send(request).await?;
        handle_empty_response(&response)
    }

    pub async fn reset_password(&self, request: &ResetPasswordRequest) -> Result<(), AppError> {
        let request = ApiRequest::post_json(endpoints::RESET_PASSWORD, request)?;
        let response = self.transport.send(request).await?;
        handle_empty_response(&response)
    }

    pub async fn verify_email(&self, request: &VerifyEmailRequest) -> Result<(), AppError> {
        let request = ApiRequest::post_json(endpoints::VERIFY_EMAIL, request)?;
        let response = self.transport.send(request).await?;
        handle_empty_response(&response)
    }

    /// Requests a new verification email for the session's account. No body is
    /// sent; the backend derives the recipient from the session cookie.
    pub async fn resend_verification(&self) -> Result<(), AppError> {
        let request = ApiRequest::post_empty(endpoints::RESEND_VERIFICATION).with_credentials();
        let response = self.transport.send(request).await?;
        handle_empty_response(&response)
    }

    /// Fetches the provider authorization URL. Only absolute http(s) URLs are
    /// accepted so a bad response cannot redirect to a `javascript:` URL.
    pub async fn oauth_authorization_url(
        &self,
        provider: OAuthProvider,
    ) -> Result<String, AppError> {
        let path = format!("{}/{}", endpoints::OAUTH, provider.slug());
        let response = self.transport.send(ApiRequest::get(path)).await?;
        let body: OAuthStartResponse = handle_json_response(&response)?;

        let url = Url::parse(body.auth_url.trim())
            .map_err(|err| AppError::Parse(format!("Invalid authorization URL: {err}")))?;
        if !matches!(url.scheme(), "https" | "http") {
            return Err(AppError::Parse(format!(
                "Unsupported authorization URL scheme: {}",
                url.scheme()
            )));
        }

        debug!(
            provider = provider.slug(),
            host = ?url.host_str(),
            "oauth authorization url received"
        );
        Ok(url.into())
    }
}
