//! Conversions from `reqwest` errors into SDK errors.
//!
//! Per-call transport failures become the synthesized 503 [`ApiError`];
//! failures while building the client become [`PaperTrailError::Http`].

use std::error::Error as StdError;

use papertrail_domain::{ApiError, PaperTrailError};
use reqwest::Error as HttpError;

/* -------------------------------------------------------------------------- */
/* reqwest::Error → ApiError */
/* -------------------------------------------------------------------------- */

/// Short classification used as a structured logging field.
pub fn transport_kind(err: &HttpError) -> &'static str {
    if err.is_timeout() {
        return "timeout";
    }

    #[cfg(not(target_arch = "wasm32"))]
    if err.is_connect() {
        return "connect";
    }

    if err.is_builder() {
        "builder"
    } else if err.is_body() || err.is_decode() {
        "body"
    } else if err.is_request() {
        "request"
    } else {
        "other"
    }
}

/// Full description of a transport error, including its source chain.
///
/// `reqwest`'s top-level message only says which URL failed; the interesting
/// part ("Connection refused", "dns error", ...) lives in the sources.
pub fn describe_transport_error(err: &HttpError) -> String {
    let mut description = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        if !description.contains(&text) {
            description.push_str(": ");
            description.push_str(&text);
        }
        source = cause.source();
    }
    description
}

/// Error body for a call that never produced a response.
pub fn unreachable_error(err: &HttpError, url: &str) -> ApiError {
    ApiError::unreachable(describe_transport_error(err), url)
}

/* -------------------------------------------------------------------------- */
/* reqwest::Error → PaperTrailError */
/* -------------------------------------------------------------------------- */

pub fn http_build_error(err: HttpError) -> PaperTrailError {
    PaperTrailError::Http(format!("Failed to build HTTP client: {}", describe_transport_error(&err)))
}

/* -------------------------------------------------------------------------- */
/* Tests */
/* -------------------------------------------------------------------------- */
