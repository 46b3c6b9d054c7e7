//! Audit log registration client

use std::sync::Arc;

use papertrail_core::{execute_json, ApiRequest, ApiResultExt, RequestExecutor};
use papertrail_domain::constants::AUDIT_LOG_PATH;
use papertrail_domain::{validate_identifier, ApiResult, AuditLogRegistration, Result};
use serde::de::IgnoredAny;
use tracing::warn;

use super::engine_for;

/// Registers, fetches and deletes the audit log channel of a guild.
#[derive(Clone)]
pub struct AuditLogRegistrationClient {
    executor: Arc<dyn RequestExecutor>,
}

impl AuditLogRegistrationClient {
    /// Create a client with its own HTTP engine.
    ///
    /// # Errors
    /// `InvalidBaseUrl` if `base_url` is blank.
    pub fn new(base_url: &str) -> Result<Self> {
        Self::from_optional(Some(base_url))
    }

    /// Like [`Self::new`], reporting `None` as `MissingBaseUrl`.
    pub fn from_optional(base_url: Option<&str>) -> Result<Self> {
        Ok(Self::with_executor(engine_for(base_url)?))
    }

    /// Create a client on top of a shared or test executor.
    pub fn with_executor(executor: Arc<dyn RequestExecutor>) -> Self {
        Self { executor }
    }

    /// Register `guild_id` to send audit logs to `channel_id`.
    ///
    /// Returns `true` if the API accepted the registration.
    pub async fn register_guild(&self, guild_id: &str, channel_id: &str) -> bool {
        let registration = AuditLogRegistration::new(guild_id, channel_id);
        if let Err(e) = registration.validate() {
            warn!(error = %e, "Refusing to register guild for audit logging");
            return false;
        }

        let request = match ApiRequest::post(AUDIT_LOG_PATH).json(&registration) {
            Ok(request) => request,
            Err(e) => {
                warn!(error = %e, "Failed to build audit log registration request");
                return false;
            }
        };

        let result: ApiResult<AuditLogRegistration> =
            execute_json(self.executor.as_ref(), request).await;
        result.into_success("Failed to register guild for audit logging")
    }

    /// Fetch the audit log registration of `guild_id`, if one exists.
    pub async fn get_registered_guild(&self, guild_id: &str) -> Option<AuditLogRegistration> {
        if let Err(e) = validate_identifier("guildId", guild_id) {
            warn!(error = %e, "Refusing to look up audit log registration");
            return None;
        }

        let request = ApiRequest::get(format!("{AUDIT_LOG_PATH}/{guild_id}")).json_content();
        let result: ApiResult<AuditLogRegistration> =
            execute_json(self.executor.as_ref(), request).await;
        result.into_option("No audit log registration found for guild")
    }

    /// Delete the audit log registration of `guild_id`.
    pub async fn delete_registered_guild(&self, guild_id: &str) -> bool {
        if let Err(e) = validate_identifier("guildId", guild_id) {
            warn!(error = %e, "Refusing to delete audit log registration");
            return false;
        }

        let request = ApiRequest::delete(format!("{AUDIT_LOG_PATH}/{guild_id}")).json_content();
        let result: ApiResult<IgnoredAny> = execute_json(self.executor.as_ref(), request).await;
        result.into_success("Failed to delete audit log registration")
    }
}

#[cfg(test)]
mod tests {
    use papertrail_core::testing::MockExecutor;
    use papertrail_core::HttpMethod;
    use papertrail_domain::{ApiError, PaperTrailError};
    use serde_json::json;

    use super::*;

    const GUILD_ID: &str = "123456789";
    const CHANNEL_ID: &str = "987654321";

    fn client_with(executor: &Arc<MockExecutor>) -> AuditLogRegistrationClient {
        AuditLogRegistrationClient::with_executor(executor.clone())
    }

    fn not_registered() -> ApiError {
        ApiError::new(404, "Not Found", "Guild is not registered", "now", "/api/v1/log/audit")
    }

    #[test]
    fn constructor_rejects_empty_base_url() {
        let result = AuditLogRegistrationClient::new("");
        assert!(matches!(result, Err(PaperTrailError::InvalidBaseUrl(_))));
    }

    #[test]
    fn constructor_rejects_missing_base_url() {
        let result = AuditLogRegistrationClient::from_optional(None);
        assert!(matches!(result, Err(PaperTrailError::MissingBaseUrl)));
    }

    #[tokio::test]
    async fn register_guild_success() {
        let executor = Arc::new(MockExecutor::new());
        executor.respond(
            HttpMethod::Post,
            "/api/v1/log/audit",
            Ok(Some(json!({"guildId": GUILD_ID, "channelId": CHANNEL_ID}))),
        );

        assert!(client_with(&executor).register_guild(GUILD_ID, CHANNEL_ID).await);

        let requests = executor.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].body, Some(json!({"guildId": GUILD_ID, "channelId": CHANNEL_ID})));
        assert_eq!(requests[0].headers["Content-Type"], "application/json");
    }

    #[tokio::test]
    async fn register_guild_error() {
        let executor = Arc::new(MockExecutor::new());
        executor.respond(HttpMethod::Post, "/api/v1/log/audit", Err(not_registered()));

        assert!(!client_with(&executor).register_guild(GUILD_ID, CHANNEL_ID).await);
    }

    #[tokio::test]
    async fn register_guild_with_blank_id_skips_network() {
        let executor = Arc::new(MockExecutor::new());

        assert!(!client_with(&executor).register_guild(" ", CHANNEL_ID).await);
        assert!(!client_with(&executor).register_guild(GUILD_ID, "").await);
        assert_eq!(executor.request_count(), 0);
    }

    #[tokio::test]
    async fn get_registered_guild_success() {
        let executor = Arc::new(MockExecutor::new());
        executor.respond(
            HttpMethod::Get,
            format!("/api/v1/log/audit/{GUILD_ID}"),
            Ok(Some(json!({"guildId": GUILD_ID, "channelId": CHANNEL_ID}))),
        );
        let client = client_with(&executor);

        let expected = AuditLogRegistration::new(GUILD_ID, CHANNEL_ID);
        assert_eq!(client.get_registered_guild(GUILD_ID).await, Some(expected.clone()));
        assert_eq!(client.get_registered_guild(GUILD_ID).await, Some(expected));
    }

    #[tokio::test]
    async fn get_registered_guild_empty() {
        let executor = Arc::new(MockExecutor::new());
        executor.respond(
            HttpMethod::Get,
            format!("/api/v1/log/audit/{GUILD_ID}"),
            Err(not_registered()),
        );

        assert_eq!(client_with(&executor).get_registered_guild(GUILD_ID).await, None);
    }

    #[tokio::test]
    async fn delete_registered_guild_success() {
        let executor = Arc::new(MockExecutor::new());
        executor.respond(HttpMethod::Delete, format!("/api/v1/log/audit/{GUILD_ID}"), Ok(None));

        assert!(client_with(&executor).delete_registered_guild(GUILD_ID).await);
        assert!(executor.requests()[0].body.is_none());
    }

    #[tokio::test]
    async fn delete_registered_guild_ignores_response_body() {
        let executor = Arc::new(MockExecutor::new());
        executor.respond(
            HttpMethod::Delete,
            format!("/api/v1/log/audit/{GUILD_ID}"),
            Ok(Some(json!({"deleted": true}))),
        );

        assert!(client_with(&executor).delete_registered_guild(GUILD_ID).await);
    }

    #[tokio::test]
    async fn delete_registered_guild_error() {
        let executor = Arc::new(MockExecutor::new());
        executor.respond(
            HttpMethod::Delete,
            format!("/api/v1/log/audit/{GUILD_ID}"),
            Err(ApiError::unreachable("connection refused", "/api/v1/log/audit/123456789")),
        );

        assert!(!client_with(&executor).delete_registered_guild(GUILD_ID).await);
    }

    #[tokio::test]
    async fn ids_that_leave_the_path_segment_skip_network() {
        let executor = Arc::new(MockExecutor::new());
        executor.respond(
            HttpMethod::Get,
            "/api/v1/log/audit/",
            Ok(Some(json!({"guildId": "999", "channelId": "1"}))),
        );
        let client = client_with(&executor);

        for id in ["#42", "../../content/message/1", "1?force=true", "..", "1%2F2", "a\\b"] {
            assert_eq!(client.get_registered_guild(id).await, None, "{id:?}");
            assert!(!client.delete_registered_guild(id).await, "{id:?}");
            assert!(!client.register_guild(id, CHANNEL_ID).await, "{id:?}");
        }
        assert!(!client.register_guild(GUILD_ID, "9/1").await);
        assert_eq!(executor.request_count(), 0);
    }
}
