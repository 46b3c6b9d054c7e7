//! Typed execution on top of a [`RequestExecutor`]

use papertrail_domain::{ApiError, ApiResult};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, error};

use crate::http_ports::{ApiRequest, RawResponse, RequestExecutor};

/// Run `request` and deserialize the success body into `S`.
///
/// An absent body is decoded from `null`, so `()` and `Option<T>` work for
/// calls that return nothing.
pub async fn execute_json<S: DeserializeOwned>(
    executor: &dyn RequestExecutor,
    request: ApiRequest,
) -> ApiResult<S> {
    let response = executor.execute(request).await?;
    decode_body(response)
}

/// Decode a raw success response.
///
/// A body that does not match `S` is reported the same way as a transport
/// failure: a synthesized 503 carrying the decode error and the URL.
pub fn decode_body<S: DeserializeOwned>(response: RawResponse) -> ApiResult<S> {
    let RawResponse { url, body } = response;
    serde_json::from_value(body.unwrap_or(Value::Null)).map_err(|e| {
        error!(url = %url, error = %e, "Failed to decode response body");
        ApiError::unreachable(format!("Failed to decode response body: {e}"), url)
    })
}

/// Collapse an [`ApiResult`] into the `bool`/`Option` surface the resource
/// clients expose. The failure is logged at debug with `context` as the
/// message and then dropped.
pub trait ApiResultExt<T> {
    fn into_option(self, context: &str) -> Option<T>;

    fn into_success(self, context: &str) -> bool;
}

impl<T> ApiResultExt<T> for ApiResult<T> {
    fn into_option(self, context: &str) -> Option<T> {
        match self {
            Ok(value) => Some(value),
            Err(failure) => {
                debug!(
                    status = failure.status,
                    path = %failure.path,
                    error = %failure,
                    "{context}"
                );
                None
            }
        }
    }

    fn into_success(self, context: &str) -> bool {
        self.into_option(context).is_some()
    }
}

#[cfg(test)]
mod tests {
    use papertrail_domain::constants::HEALTH_PATH;
    use papertrail_domain::AuditLogRegistration;
    use serde_json::json;

    use super::*;
    use crate::testing::MockExecutor;

    #[test]
    fn empty_body_decodes_to_unit() {
        let decoded: ApiResult<()> = decode_body(RawResponse::new("http://x/api", None));
        assert!(decoded.is_ok());
    }

    #[test]
    fn mismatched_body_becomes_unreachable_error() {
        let response = RawResponse::new("http://x/api/v1/log/audit/1", Some(json!({"nope": 1})));
        let err = decode_body::<AuditLogRegistration>(response).unwrap_err();

        assert_eq!(err.status, 503);
        assert_eq!(err.error, "API Unreachable");
        assert_eq!(err.path, "http://x/api/v1/log/audit/1");
        assert!(err.message.contains("decode"));
    }

    #[tokio::test]
    async fn execute_json_passes_errors_through() {
        let executor = MockExecutor::new();
        let remote = ApiError::new(500, "Internal", "boom", "t", HEALTH_PATH);
        executor.respond(crate::HttpMethod::Get, HEALTH_PATH, Err(remote.clone()));

        let result: ApiResult<Value> = execute_json(&executor, ApiRequest::get(HEALTH_PATH)).await;
        assert_eq!(result.unwrap_err(), remote);
    }

    #[tokio::test]
    async fn execute_json_decodes_success() {
        let executor = MockExecutor::new();
        executor.respond(
            crate::HttpMethod::Get,
            "/api/v1/log/audit/1",
            Ok(Some(json!({"guildId": "1", "channelId": "2"}))),
        );

        let result: ApiResult<AuditLogRegistration> =
            execute_json(&executor, ApiRequest::get("/api/v1/log/audit/1")).await;
        assert_eq!(result.unwrap(), AuditLogRegistration::new("1", "2"));
    }

    #[test]
    fn result_collapses_to_option_and_bool() {
        let found: ApiResult<u8> = Ok(7);
        assert_eq!(found.into_option("lookup"), Some(7));

        let missing: ApiResult<u8> = Err(ApiError::new(404, "Not Found", "gone", "t", "/x"));
        assert_eq!(missing.clone().into_option("lookup"), None);
        assert!(!missing.into_success("delete"));

        let done: ApiResult<()> = Ok(());
        assert!(done.into_success("delete"));
    }
}
