//! # PaperTrail Core
//!
//! Transport-agnostic layer of the SDK.
//!
//! This crate contains:
//! - The [`RequestExecutor`] port every resource client talks to
//! - [`ApiRequest`], a plain description of one HTTP call
//! - [`execute_json`], which turns a raw executor response into a typed
//!   [`ApiResult`](papertrail_domain::ApiResult)
//! - [`ApiResultExt`], collapsing that result into `bool`/`Option`
//!
//! ## Architecture Principles
//! - Only depends on `papertrail-domain`
//! - No HTTP library; `papertrail-infra` supplies the executor
//! - Everything above the port is testable with an in-memory executor

pub mod execution;
pub mod http_ports;

#[cfg(any(test, feature = "test-utils"))]
pub mod testing;

pub use execution::{decode_body, execute_json, ApiResultExt};
pub use http_ports::{ApiRequest, HttpMethod, RawResponse, RequestExecutor};
