//! Logged message content

use serde::{Deserialize, Serialize};

use super::validate_identifier;
use crate::errors::Result;

/// A Discord message reduced to its id, plain-text content and author.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageLogContent {
    pub message_id: String,
    pub message_content: String,
    pub author_id: String,
}

impl MessageLogContent {
    pub fn new(
        message_id: impl Into<String>,
        message_content: impl Into<String>,
        author_id: impl Into<String>,
    ) -> Self {
        Self {
            message_id: message_id.into(),
            message_content: message_content.into(),
            author_id: author_id.into(),
        }
    }

    /// Identifiers must be usable as URL path segments; the content itself
    /// may be empty (attachment-only messages).
    pub fn validate(&self) -> Result<()> {
        validate_identifier("messageId", &self.message_id)?;
        validate_identifier("authorId", &self.author_id)
    }
}
