//! Message content logging client
//!
//! Stores the plain-text content of messages so that edits and deletions can
//! later be reported with the original text.

use std::sync::Arc;

use papertrail_core::{execute_json, ApiRequest, ApiResultExt, RequestExecutor};
use papertrail_domain::constants::MESSAGE_CONTENT_PATH;
use papertrail_domain::{validate_identifier, ApiResult, MessageLogContent, Result};
use serde::de::IgnoredAny;
use tracing::warn;

use super::engine_for;

#[derive(Clone)]
pub struct MessageLogContentClient {
    executor: Arc<dyn RequestExecutor>,
}

impl MessageLogContentClient {
    pub fn new(base_url: &str) -> Result<Self> {
        Self::from_optional(Some(base_url))
    }

    pub fn from_optional(base_url: Option<&str>) -> Result<Self> {
        Ok(Self::with_executor(engine_for(base_url)?))
    }

    pub fn with_executor(executor: Arc<dyn RequestExecutor>) -> Self {
        Self { executor }
    }

    /// Store a new message. Returns `true` on success.
    pub async fn log_message(&self, message_id: &str, message_content: &str, author_id: &str) -> bool {
        let content = MessageLogContent::new(message_id, message_content, author_id);
        self.write(ApiRequest::post(MESSAGE_CONTENT_PATH), &content, "log").await
    }

    /// Fetch a stored message by id.
    pub async fn retrieve_message(&self, message_id: &str) -> Option<MessageLogContent> {
        if let Err(e) = validate_identifier("messageId", message_id) {
            warn!(error = %e, "Refusing to retrieve message content");
            return None;
        }

        let request = ApiRequest::get(format!("{MESSAGE_CONTENT_PATH}/{message_id}")).json_content();
        let result: ApiResult<MessageLogContent> =
            execute_json(self.executor.as_ref(), request).await;
        result.into_option("No logged content found for message")
    }

    /// Replace the stored content of an existing message.
    pub async fn update_message(
        &self,
        message_id: &str,
        message_content: &str,
        author_id: &str,
    ) -> bool {
        let content = MessageLogContent::new(message_id, message_content, author_id);
        self.write(ApiRequest::put(MESSAGE_CONTENT_PATH), &content, "update").await
    }

    /// Delete a stored message.
    pub async fn delete_message(&self, message_id: &str) -> bool {
        if let Err(e) = validate_identifier("messageId", message_id) {
            warn!(error = %e, "Refusing to delete message content");
            return false;
        }

        let request =
            ApiRequest::delete(format!("{MESSAGE_CONTENT_PATH}/{message_id}")).json_content();
        let result: ApiResult<IgnoredAny> = execute_json(self.executor.as_ref(), request).await;
        result.into_success("Failed to delete logged message content")
    }

    async fn write(&self, request: ApiRequest, content: &MessageLogContent, operation: &str) -> bool {
        if let Err(e) = content.validate() {
            warn!(operation, error = %e, "Refusing to send message content");
            return false;
        }

        let request = match request.json(content) {
            Ok(request) => request,
            Err(e) => {
                warn!(operation, error = %e, "Failed to build message content request");
                return false;
            }
        };

        let result: ApiResult<MessageLogContent> =
            execute_json(self.executor.as_ref(), request).await;
        result.into_success("Failed to write message content")
    }
}
