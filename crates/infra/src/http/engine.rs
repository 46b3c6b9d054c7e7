//! `reqwest`-backed request executor
//!
//! [`HttpServiceEngine`] is the only place where HTTP responses are
//! inspected. Every outcome is folded into an
//! [`ApiResult`](papertrail_domain::ApiResult):
//!
//! | Outcome | Result | Log level |
//! |---|---|---|
//! | 2xx | `Ok(RawResponse)` | debug |
//! | 4xx with error body | `Err(parsed body)` | debug |
//! | 5xx with error body | `Err(parsed body)` | warn |
//! | no response / unparsable error body | `Err(503 "API Unreachable")` | error |

use async_trait::async_trait;
use papertrail_core::{ApiRequest, HttpMethod, RawResponse, RequestExecutor};
use papertrail_domain::{ApiConfig, ApiError, ApiResult, PaperTrailError, Result};
use reqwest::{Method, StatusCode};
use serde_json::Value;
use tracing::{debug, error, instrument, warn};

use super::client::HttpClient;
use crate::errors::{transport_kind, unreachable_error};

/// Executes [`ApiRequest`]s against a fixed PaperTrail base URL.
#[derive(Clone, Debug)]
pub struct HttpServiceEngine {
    http: HttpClient,
    base_url: String,
}

impl HttpServiceEngine {
    /// Create an engine with a default [`HttpClient`].
    ///
    /// # Errors
    /// [`PaperTrailError::InvalidBaseUrl`] if `base_url` is blank,
    /// [`PaperTrailError::Http`] if the transport cannot be built.
    pub fn new(base_url: &str) -> Result<Self> {
        Self::with_client(base_url, HttpClient::new()?)
    }

    /// Create an engine around an existing transport handle.
    ///
    /// # Errors
    /// [`PaperTrailError::InvalidBaseUrl`] if `base_url` is blank.
    pub fn with_client(base_url: &str, http: HttpClient) -> Result<Self> {
        let base_url = validate_base_url(Some(base_url))?;
        Ok(Self { http, base_url })
    }

    /// Create an engine from configuration.
    ///
    /// # Errors
    /// [`PaperTrailError::MissingBaseUrl`] if no base URL is configured.
    pub fn from_config(config: &ApiConfig) -> Result<Self> {
        let base_url = validate_base_url(config.base_url.as_deref())?;

        let mut builder =
            HttpClient::builder().timeout(std::time::Duration::from_secs(config.timeout_secs));
        if let Some(agent) = &config.user_agent {
            builder = builder.user_agent(agent.clone());
        }

        Ok(Self { http: builder.build()?, base_url })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for a request path.
    pub fn url_for(&self, path: &str) -> String {
        if path.is_empty() {
            return self.base_url.clone();
        }
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    async fn dispatch(&self, request: ApiRequest, url: &str) -> ApiResult<RawResponse> {
        let mut builder = self.http.request(to_reqwest_method(request.method), url);
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = self.http.send(builder).await.map_err(|err| {
            error!(
                method = %request.method,
                url = %url,
                kind = transport_kind(&err),
                error = %err,
                "PaperTrail API unreachable"
            );
            unreachable_error(&err, url)
        })?;

        let status = response.status();
        let bytes = response.bytes().await.map_err(|err| {
            error!(method = %request.method, url = %url, %status, error = %err, "Failed to read response body");
            unreachable_error(&err, url)
        })?;

        if status.is_success() {
            let body = if bytes.is_empty() {
                None
            } else {
                Some(serde_json::from_slice::<Value>(&bytes).map_err(|e| {
                    error!(method = %request.method, url = %url, %status, error = %e, "Response body is not JSON");
                    ApiError::unreachable(format!("Failed to decode response body: {e}"), url)
                })?)
            };
            debug!(method = %request.method, url = %url, %status, "PaperTrail API call succeeded");
            return Ok(RawResponse::new(url, body));
        }

        Err(error_from_body(request.method, url, status, &bytes))
    }
}

#[async_trait]
impl RequestExecutor for HttpServiceEngine {
    #[instrument(skip(self, request), fields(method = %request.method, path = %request.path))]
    async fn execute(&self, request: ApiRequest) -> ApiResult<RawResponse> {
        let url = self.url_for(&request.path);
        self.dispatch(request, &url).await
    }
}

/// Parse a non-success body as an [`ApiError`], logging by status class.
fn error_from_body(method: HttpMethod, url: &str, status: StatusCode, bytes: &[u8]) -> ApiError {
    match serde_json::from_slice::<ApiError>(bytes) {
        Ok(api_error) => {
            match status_class(status) {
                StatusClass::Client => {
                    debug!(%method, url = %url, %status, error = %api_error, "Client error from PaperTrail API");
                }
                StatusClass::Server => {
                    warn!(%method, url = %url, %status, error = %api_error, "Server error from PaperTrail API");
                }
                StatusClass::Unexpected => {
                    warn!(%method, url = %url, %status, error = %api_error, "Unexpected status from PaperTrail API");
                }
            }
            api_error
        }
        Err(e) => {
            error!(
                %method,
                url = %url,
                %status,
                error = %e,
                "PaperTrail API returned an unrecognised error body"
            );
            ApiError::unreachable(
                format!("HTTP {} with unrecognised error body: {e}", status.as_u16()),
                url,
            )
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StatusClass {
    Client,
    Server,
    /// 1xx or an unfollowed 3xx
    Unexpected,
}

fn status_class(status: StatusCode) -> StatusClass {
    if status.is_client_error() {
        StatusClass::Client
    } else if status.is_server_error() {
        StatusClass::Server
    } else {
        StatusClass::Unexpected
    }
}

fn to_reqwest_method(method: HttpMethod) -> Method {
    match method {
        HttpMethod::Get => Method::GET,
        HttpMethod::Post => Method::POST,
        HttpMethod::Put => Method::PUT,
        HttpMethod::Delete => Method::DELETE,
    }
}

/// Reject absent or blank base URLs; strip trailing slashes from the rest.
pub fn validate_base_url(base_url: Option<&str>) -> Result<String> {
    let base_url = base_url.ok_or(PaperTrailError::MissingBaseUrl)?;
    let trimmed = base_url.trim();
    if trimmed.is_empty() {
        return Err(PaperTrailError::InvalidBaseUrl("Base URL is empty".to_string()));
    }
    Ok(trimmed.trim_end_matches('/').to_string())
}
