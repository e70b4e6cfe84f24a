//! HTTP helpers for JSON APIs with consistent timeouts and error handling. Feature
//! clients build an `ApiRequest`, hand it to an `HttpTransport` and interpret the
//! `ApiResponse` with the helpers below, so request setup and error mapping are
//! not duplicated per endpoint. The browser transport enforces a predictable
//! timeout policy and aborts when the owning page goes away. The helpers do not
//! store secrets or tokens and never log request bodies.

use super::errors::AppError;
use serde::{Serialize, de::DeserializeOwned, de::IgnoredAny};
use serde_json::{Value, to_string};

/// Default request timeout (milliseconds) applied by the browser transport.
pub const DEFAULT_TIMEOUT_MS: u32 = 10_000;
/// Maximum number of error message characters surfaced to the UI.
const MAX_ERROR_CHARS: usize = 200;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

/// A request relative to the configured API base URL. `body` is already-encoded JSON.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    pub body: Option<String>,
    pub with_credentials: bool,
}

impl ApiRequest {
    pub fn get(path: impl Into<String>) -> Self {
        Self {
            method: Method::Get,
            path: path.into(),
            body: None,
            with_credentials: false,
        }
    }

    /// Posts without a body; the transport still sends the JSON content type.
    pub fn post_empty(path: impl Into<String>) -> Self {
        Self {
            method: Method::Post,
            path: path.into(),
            body: None,
            with_credentials: false,
        }
    }

    pub fn post_json<B: Serialize>(path: impl Into<String>, body: &B) -> Result<Self, AppError> {
        let payload = to_string(body)
            .map_err(|err| AppError::Serialization(format!("Failed to encode request: {err}")))?;
        Ok(Self {
            method: Method::Post,
            path: path.into(),
            body: Some(payload),
            with_credentials: false,
        })
    }

    /// Includes cookies, for endpoints that set or read the session.
    #[must_use]
    pub fn with_credentials(mut self) -> Self {
        self.with_credentials = true;
        self
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    pub fn ok(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Seam between auth clients and the network. The browser uses `FetchTransport`;
/// tests substitute a recording mock.
#[allow(async_fn_in_trait)]
pub trait HttpTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, AppError>;
}

impl<T: HttpTransport + ?Sized> HttpTransport for &T {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, AppError> {
        (**self).send(request).await
    }
}

/// Parses a JSON success body and surfaces HTTP errors with sanitized messages.
pub fn handle_json_response<T: DeserializeOwned>(response: &ApiResponse) -> Result<T, AppError> {
    if response.ok() {
        serde_json::from_str(&response.body)
            .map_err(|err| AppError::Parse(format!("Failed to decode response: {err}")))
    } else {
        Err(error_from_response(response))
    }
}

/// Accepts any well-formed JSON (or empty) success body without decoding it.
pub fn handle_empty_response(response: &ApiResponse) -> Result<(), AppError> {
    if !response.ok() {
        return Err(error_from_response(response));
    }
    if response.body.trim().is_empty() {
        return Ok(());
    }
    serde_json::from_str::<IgnoredAny>(&response.body)
        .map(|_| ())
        .map_err(|err| AppError::Parse(format!("Failed to decode response: {err}")))
}

/// Builds an HTTP error from a non-success response, pulling `message` out of a
/// JSON body when the backend provided one.
pub fn error_from_response(response: &ApiResponse) -> AppError {
    let message = serde_json::from_str::<Value>(&response.body)
        .ok()
        .and_then(|body| body.get("message").and_then(message_text))
        .and_then(|message| sanitize_message(&message));

    AppError::Http {
        status: response.status,
        message,
    }
}

/// Accepts a plain string or a list of strings (validation errors) as `message`.
fn message_text(value: &Value) -> Option<String> {
    match value {
        Value::String(message) => Some(message.clone()),
        Value::Array(items) => {
            let parts: Vec<&str> = items.iter().filter_map(Value::as_str).collect();
            (!parts.is_empty()).then(|| parts.join("; "))
        }
        _ => None,
    }
}

/// Sanitizes error messages for display by trimming and truncating.
fn sanitize_message(message: &str) -> Option<String> {
    let trimmed = message.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.chars().take(MAX_ERROR_CHARS).collect())
    }
}

/// Builds a URL from an explicit base URL and the provided path.
pub fn build_url_with_base(base_url: &str, path: &str) -> String {
    let base = base_url.trim().trim_end_matches('/');
    let path = path.trim();

    if base.is_empty() {
        path.to_string()
    } else {
        format!("{}/{}", base, path.trim_start_matches('/'))
    }
}

#[cfg(target_arch = "wasm32")]
pub use browser::FetchTransport;

#[cfg(target_arch = "wasm32")]
mod browser {
    use super::{
        ApiRequest, ApiResponse, DEFAULT_TIMEOUT_MS, HttpTransport, Method, build_url_with_base,
    };
    use crate::app_lib::{cancel::RequestScope, config::AppConfig, errors::AppError};
    use gloo_net::http::Request;
    use gloo_timers::callback::Timeout;
    use send_wrapper::SendWrapper;
    use tracing::debug;
    use web_sys::{AbortController, AbortSignal, RequestCredentials};

    /// `fetch`-backed transport bound to a page's `RequestScope`.
    pub struct FetchTransport {
        base_url: String,
        scope: RequestScope,
    }

    impl FetchTransport {
        pub fn new(scope: RequestScope) -> Self {
            let config = AppConfig::load();
            Self {
                base_url: config.api_base_url,
                scope,
            }
        }

        /// Maps fetch errors into `AppError`. An abort is a cancellation when the
        /// page scope ended and a timeout otherwise.
        fn map_request_error(&self, err: &gloo_net::Error, otherwise: AppError) -> AppError {
            let lowered = err.to_string().to_lowercase();

            if self.scope.is_cancelled() {
                AppError::Cancelled
            } else if lowered.contains("timeout") || lowered.contains("abort") {
                AppError::Timeout("Request timed out. Please try again.".to_string())
            } else {
                otherwise
            }
        }
    }

    impl HttpTransport for FetchTransport {
        /// Sends the request and reads the whole body under one abort controller.
        /// The timeout and the page-scope hook stay armed until the body is read.
        async fn send(&self, request: ApiRequest) -> Result<ApiResponse, AppError> {
            if self.scope.is_cancelled() {
                return Err(AppError::Cancelled);
            }

            let controller = AbortController::new().map_err(|_| {
                AppError::Config("Failed to initialize request timeout.".to_string())
            })?;
            let timeout_controller = controller.clone();
            let _timeout = Timeout::new(DEFAULT_TIMEOUT_MS, move || timeout_controller.abort());
            let scope_controller = SendWrapper::new(controller.clone());
            let _registration = self.scope.on_cancel(move || scope_controller.abort());

            let url = build_url_with_base(&self.base_url, &request.path);
            debug!(method = ?request.method, path = %request.path, "sending request");

            let response = build(&url, &request, &controller.signal())?
                .send()
                .await
                .map_err(|err| {
                    let message = format!("Unable to reach the server: {err}");
                    self.map_request_error(&err, AppError::Network(message))
                })?;
            let status = response.status();
            let body = response.text().await.map_err(|err| {
                let message = format!("Failed to read response: {err}");
                self.map_request_error(&err, AppError::Parse(message))
            })?;

            debug!(path = %request.path, status, "received response");
            Ok(ApiResponse { status, body })
        }
    }

    fn build(url: &str, request: &ApiRequest, signal: &AbortSignal) -> Result<Request, AppError> {
        let credentials = if request.with_credentials {
            RequestCredentials::Include
        } else {
            RequestCredentials::SameOrigin
        };

        let built = match request.method {
            Method::Get => Request::get(url)
                .credentials(credentials)
                .abort_signal(Some(signal))
                .build(),
            Method::Post => Request::post(url)
                .header("Content-Type", "application/json")
                .credentials(credentials)
                .abort_signal(Some(signal))
                .body(request.body.clone().unwrap_or_default()),
        };

        built.map_err(|err| AppError::Serialization(format!("Failed to build request: {err}")))
    }
}
