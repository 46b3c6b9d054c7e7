//! Resource clients for the PaperTrail API
//!
//! Each client is a thin pass-through: build the request for a fixed path,
//! hand it to the shared [`RequestExecutor`](papertrail_core::RequestExecutor)
//! and collapse the result into `bool` or `Option`. Failure details are only
//! logged.

pub mod audit_log;
pub mod health;
pub mod message_content;
pub mod message_log;

use std::sync::Arc;

use papertrail_core::RequestExecutor;
use papertrail_domain::Result;

pub use audit_log::AuditLogRegistrationClient;
pub use health::HealthClient;
pub use message_content::MessageLogContentClient;
pub use message_log::MessageLogRegistrationClient;

use crate::http::{validate_base_url, HttpServiceEngine};

/// Build a default engine for an optional base URL.
///
/// `None` is reported as `MissingBaseUrl` and a blank value as
/// `InvalidBaseUrl`, both before any network activity.
pub(crate) fn engine_for(base_url: Option<&str>) -> Result<Arc<dyn RequestExecutor>> {
    let base_url = validate_base_url(base_url)?;
    Ok(Arc::new(HttpServiceEngine::new(&base_url)?))
}
