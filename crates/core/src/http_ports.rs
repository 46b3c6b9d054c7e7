//! Port interfaces for HTTP execution
//!
//! These types define the boundary between the resource clients and the
//! transport that actually talks to the PaperTrail API.

use std::collections::BTreeMap;

use async_trait::async_trait;
use papertrail_domain::constants::CONTENT_TYPE_JSON;
use papertrail_domain::impl_wire_name_conversions;
use papertrail_domain::{ApiResult, PaperTrailError, Result};
use serde::Serialize;
use serde_json::Value;

/// HTTP verbs used by the SDK
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl_wire_name_conversions!(HttpMethod {
    Get => "GET",
    Post => "POST",
    Put => "PUT",
    Delete => "DELETE",
});

/// Description of one API call, relative to the executor's base URL.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: HttpMethod,
    /// Path starting with `/`, e.g. `/api/v1/log/audit/123`
    pub path: String,
    pub headers: BTreeMap<String, String>,
    pub body: Option<Value>,
}

impl ApiRequest {
    pub fn new(method: HttpMethod, path: impl Into<String>) -> Self {
        Self { method, path: path.into(), headers: BTreeMap::new(), body: None }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(HttpMethod::Get, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(HttpMethod::Post, path)
    }

    pub fn put(path: impl Into<String>) -> Self {
        Self::new(HttpMethod::Put, path)
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(HttpMethod::Delete, path)
    }

    /// Attach a header, replacing any previous value for the same name.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    /// Mark the exchange as JSON (`Content-Type: application/json`).
    pub fn json_content(self) -> Self {
        self.header("Content-Type", CONTENT_TYPE_JSON)
    }

    /// Serialize `body` as the JSON request payload.
    ///
    /// # Errors
    /// Returns [`PaperTrailError::InvalidInput`] if the value cannot be
    /// represented as JSON.
    pub fn json<B: Serialize + ?Sized>(mut self, body: &B) -> Result<Self> {
        let value = serde_json::to_value(body).map_err(|e| {
            PaperTrailError::InvalidInput(format!("Failed to serialize request body: {e}"))
        })?;
        self.body = Some(value);
        Ok(self.json_content())
    }
}

/// Successful response as seen by the port: the absolute URL that was called
/// and the JSON body, if any.
#[derive(Debug, Clone, PartialEq)]
pub struct RawResponse {
    pub url: String,
    pub body: Option<Value>,
}

impl RawResponse {
    pub fn new(url: impl Into<String>, body: Option<Value>) -> Self {
        Self { url: url.into(), body }
    }
}

/// Executes a single API call.
///
/// Implementations must never panic or surface a transport error any other
/// way than as the `Err` branch: 4xx/5xx bodies are parsed into
/// [`ApiError`](papertrail_domain::ApiError), and unreachable hosts are
/// reported as a synthesized 503.
#[async_trait]
pub trait RequestExecutor: Send + Sync {
    async fn execute(&self, request: ApiRequest) -> ApiResult<RawResponse>;
}
