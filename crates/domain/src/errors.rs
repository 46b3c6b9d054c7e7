//! Error types used throughout the SDK
//!
//! Two families live here:
//! - [`PaperTrailError`] for SDK-level faults (bad construction arguments,
//!   configuration problems). These are returned from constructors and
//!   loaders.
//! - [`ApiError`] for every per-call failure. It mirrors the error body the
//!   PaperTrail service returns and is also synthesized locally when the
//!   service cannot be reached.

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::{UNREACHABLE_ERROR, UNREACHABLE_STATUS};

/// Main error type for the PaperTrail SDK
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "message")]
pub enum PaperTrailError {
    /// No base URL was supplied at all.
    #[error("Base URL is missing")]
    MissingBaseUrl,

    /// A base URL was supplied but is empty or whitespace.
    #[error("Invalid base URL: {0}")]
    InvalidBaseUrl(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("HTTP client error: {0}")]
    Http(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Result type alias for SDK operations that can fail at construction time
pub type Result<T> = std::result::Result<T, PaperTrailError>;

/// Structured error returned by the PaperTrail API on 4xx/5xx responses.
///
/// All five fields are always present. When the service is unreachable the
/// executor builds one with [`ApiError::unreachable`].
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[error("{status} {error}: {message} (path: {path}, at: {time_stamp})")]
pub struct ApiError {
    /// HTTP status code associated with the error
    pub status: u16,
    /// Short error identifier, often the remote exception class
    pub error: String,
    /// Human-readable description
    pub message: String,
    /// When the error occurred
    pub time_stamp: String,
    /// Request path that caused the error
    pub path: String,
}

impl ApiError {
    /// Create an error body from its parts.
    pub fn new(
        status: u16,
        error: impl Into<String>,
        message: impl Into<String>,
        time_stamp: impl Into<String>,
        path: impl Into<String>,
    ) -> Self {
        Self {
            status,
            error: error.into(),
            message: message.into(),
            time_stamp: time_stamp.into(),
            path: path.into(),
        }
    }

    /// Synthesize the error used when no response could be received.
    ///
    /// Status is 503, category is `"API Unreachable"` and the timestamp is
    /// the current UTC instant in RFC 3339 form.
    pub fn unreachable(message: impl Into<String>, path: impl Into<String>) -> Self {
        Self::new(UNREACHABLE_STATUS, UNREACHABLE_ERROR, message, now_timestamp(), path)
    }

    /// `true` for 4xx statuses.
    pub fn is_client_error(&self) -> bool {
        (400..500).contains(&self.status)
    }

    /// `true` for 5xx statuses, including the synthesized unreachable error.
    pub fn is_server_error(&self) -> bool {
        (500..600).contains(&self.status)
    }

    /// `true` if this error was produced locally because the API could not be
    /// reached.
    pub fn is_unreachable(&self) -> bool {
        self.status == UNREACHABLE_STATUS && self.error == UNREACHABLE_ERROR
    }
}

/// Two-branch outcome of every API call.
pub type ApiResult<T> = std::result::Result<T, ApiError>;

fn now_timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_body_uses_camel_case_wire_names() {
        let json = r#"{
            "status": 404,
            "error": "GuildNotFoundException",
            "message": "Guild is not registered",
            "timeStamp": "2025-01-01T00:00:00Z",
            "path": "/api/v1/log/audit/123456789"
        }"#;

        let parsed: ApiError = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.status, 404);
        assert_eq!(parsed.error, "GuildNotFoundException");
        assert_eq!(parsed.time_stamp, "2025-01-01T00:00:00Z");
        assert!(parsed.is_client_error());
        assert!(!parsed.is_unreachable());

        let value = serde_json::to_value(&parsed).unwrap();
        assert!(value.get("timeStamp").is_some());
        assert!(value.get("time_stamp").is_none());
    }

    #[test]
    fn error_body_missing_fields_is_rejected() {
        let json = r#"{"status": 500, "error": "boom"}"#;
        assert!(serde_json::from_str::<ApiError>(json).is_err());
    }

    #[test]
    fn unreachable_error_is_fully_populated() {
        let err = ApiError::unreachable("connection refused", "http://localhost:1/api");

        assert_eq!(err.status, 503);
        assert_eq!(err.error, "API Unreachable");
        assert_eq!(err.message, "connection refused");
        assert_eq!(err.path, "http://localhost:1/api");
        assert!(!err.time_stamp.is_empty());
        assert!(chrono::DateTime::parse_from_rfc3339(&err.time_stamp).is_ok());
        assert!(err.is_unreachable());
        assert!(err.is_server_error());
    }

    #[test]
    fn display_includes_status_and_path() {
        let err = ApiError::new(500, "Internal", "db down", "now", "/actuator/health");
        let rendered = err.to_string();
        assert!(rendered.contains("500"));
        assert!(rendered.contains("/actuator/health"));
    }

    #[test]
    fn sdk_error_messages() {
        assert_eq!(PaperTrailError::MissingBaseUrl.to_string(), "Base URL is missing");
        assert_eq!(
            PaperTrailError::InvalidBaseUrl("Base URL is empty".into()).to_string(),
            "Invalid base URL: Base URL is empty"
        );
    }
}
