//! Test doubles for the network and notification seams.

use crate::app_lib::{
    AppError, HttpTransport,
    api::{ApiRequest, ApiResponse},
    notify::{Notifier, Toast},
};
use std::{cell::RefCell, collections::HashMap};

/// Canned backend keyed by request path. Every request is recorded before the
/// mock yields once to the runtime, so concurrent callers interleave.
#[derive(Default)]
pub struct MockTransport {
    routes: HashMap<String, ApiResponse>,
    failure: Option<AppError>,
    requests: RefCell<Vec<ApiRequest>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(mut self, path: &str, status: u16, body: &str) -> Self {
        self.routes.insert(
            path.to_string(),
            ApiResponse {
                status,
                body: body.to_string(),
            },
        );
        self
    }

    /// Fails every request at the transport level.
    pub fn fail_with(mut self, err: AppError) -> Self {
        self.failure = Some(err);
        self
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.borrow().clone()
    }

    pub fn request_count(&self) -> usize {
        self.requests.borrow().len()
    }
}

impl HttpTransport for MockTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, AppError> {
        let path = request.path.clone();
        self.requests.borrow_mut().push(request);
        tokio::task::yield_now().await;

        if let Some(err) = &self.failure {
            return Err(err.clone());
        }
        Ok(self.routes.get(&path).cloned().unwrap_or_else(|| ApiResponse {
            status: 404,
            body: r#"{"message":"Not Found"}"#.to_string(),
        }))
    }
}

#[derive(Default)]
pub struct RecordingNotifier {
    toasts: RefCell<Vec<Toast>>,
}

impl RecordingNotifier {
    pub fn toasts(&self) -> Vec<Toast> {
        self.toasts.borrow().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, toast: Toast) {
        self.toasts.borrow_mut().push(toast);
    }
}
