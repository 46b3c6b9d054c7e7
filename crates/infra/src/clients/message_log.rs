//! Message log registration client

use std::sync::Arc;

use papertrail_core::{execute_json, ApiRequest, ApiResultExt, RequestExecutor};
use papertrail_domain::constants::MESSAGE_LOG_PATH;
use papertrail_domain::{validate_identifier, ApiResult, MessageLogRegistration, Result};
use serde::de::IgnoredAny;
use tracing::warn;

use super::engine_for;

/// Registers, fetches and deletes the channel that receives a guild's message
/// edit and deletion logs.
#[derive(Clone)]
pub struct MessageLogRegistrationClient {
    executor: Arc<dyn RequestExecutor>,
}

impl MessageLogRegistrationClient {
    pub fn new(base_url: &str) -> Result<Self> {
        Self::from_optional(Some(base_url))
    }

    pub fn from_optional(base_url: Option<&str>) -> Result<Self> {
        Ok(Self::with_executor(engine_for(base_url)?))
    }

    pub fn with_executor(executor: Arc<dyn RequestExecutor>) -> Self {
        Self { executor }
    }

    pub async fn register_guild(&self, guild_id: &str, channel_id: &str) -> bool {
        let registration = MessageLogRegistration::new(guild_id, channel_id);
        if let Err(e) = registration.validate() {
            warn!(error = %e, "Refusing to register guild for message logging");
            return false;
        }

        let request = match ApiRequest::post(MESSAGE_LOG_PATH).json(&registration) {
            Ok(request) => request,
            Err(e) => {
                warn!(error = %e, "Failed to build message log registration request");
                return false;
            }
        };

        let result: ApiResult<MessageLogRegistration> =
            execute_json(self.executor.as_ref(), request).await;
        result.into_success("Failed to register guild for message logging")
    }

    pub async fn get_registered_guild(&self, guild_id: &str) -> Option<MessageLogRegistration> {
        if let Err(e) = validate_identifier("guildId", guild_id) {
            warn!(error = %e, "Refusing to look up message log registration");
            return None;
        }

        let request = ApiRequest::get(format!("{MESSAGE_LOG_PATH}/{guild_id}")).json_content();
        let result: ApiResult<MessageLogRegistration> =
            execute_json(self.executor.as_ref(), request).await;
        result.into_option("No message log registration found for guild")
    }

    pub async fn delete_registered_guild(&self, guild_id: &str) -> bool {
        if let Err(e) = validate_identifier("guildId", guild_id) {
            warn!(error = %e, "Refusing to delete message log registration");
            return false;
        }

        let request = ApiRequest::delete(format!("{MESSAGE_LOG_PATH}/{guild_id}")).json_content();
        let result: ApiResult<IgnoredAny> = execute_json(self.executor.as_ref(), request).await;
        result.into_success("Failed to delete message log registration")
    }
}
