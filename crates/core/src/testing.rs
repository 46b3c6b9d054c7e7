//! In-memory [`RequestExecutor`] for tests
//!
//! Stubs are keyed by method and path. Every executed request is recorded so
//! tests can assert on headers and bodies afterwards.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use papertrail_domain::{ApiError, ApiResult};
use serde_json::Value;

use crate::http_ports::{ApiRequest, HttpMethod, RawResponse, RequestExecutor};

type Stub = ApiResult<Option<Value>>;

/// Recording executor with canned responses.
#[derive(Default)]
pub struct MockExecutor {
    stubs: Mutex<HashMap<(HttpMethod, String), Stub>>,
    requests: Mutex<Vec<ApiRequest>>,
}

impl MockExecutor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the outcome for `method path`. Later registrations replace
    /// earlier ones.
    pub fn respond(&self, method: HttpMethod, path: impl Into<String>, outcome: Stub) {
        if let Ok(mut stubs) = self.stubs.lock() {
            stubs.insert((method, path.into()), outcome);
        }
    }

    /// All requests executed so far, in order.
    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.lock().map(|r| r.clone()).unwrap_or_default()
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().map(|r| r.len()).unwrap_or_default()
    }
}

#[async_trait]
impl RequestExecutor for MockExecutor {
    async fn execute(&self, request: ApiRequest) -> ApiResult<RawResponse> {
        let key = (request.method, request.path.clone());
        if let Ok(mut requests) = self.requests.lock() {
            requests.push(request);
        }

        let stub = self.stubs.lock().ok().and_then(|stubs| stubs.get(&key).cloned());
        match stub {
            Some(Ok(body)) => Ok(RawResponse::new(key.1, body)),
            Some(Err(error)) => Err(error),
            None => Err(ApiError::new(
                404,
                "Not Found",
                format!("no stub registered for {} {}", key.0, key.1),
                "1970-01-01T00:00:00Z",
                key.1,
            )),
        }
    }
}
