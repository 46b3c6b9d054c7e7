//! Guild/channel registrations for audit and message logging

use serde::{Deserialize, Serialize};

use super::validate_identifier;
use crate::errors::Result;

/// Audit log registration: the channel a guild's audit events are sent to.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditLogRegistration {
    pub guild_id: String,
    pub channel_id: String,
}

impl AuditLogRegistration {
    pub fn new(guild_id: impl Into<String>, channel_id: impl Into<String>) -> Self {
        Self { guild_id: guild_id.into(), channel_id: channel_id.into() }
    }

    /// Both identifiers must be usable as URL path segments.
    pub fn validate(&self) -> Result<()> {
        validate_identifier("guildId", &self.guild_id)?;
        validate_identifier("channelId", &self.channel_id)
    }
}

/// Message log registration: the channel a guild's message edits and
/// deletions are sent to.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageLogRegistration {
    pub guild_id: String,
    pub channel_id: String,
}

impl MessageLogRegistration {
    pub fn new(guild_id: impl Into<String>, channel_id: impl Into<String>) -> Self {
        Self { guild_id: guild_id.into(), channel_id: channel_id.into() }
    }

    pub fn validate(&self) -> Result<()> {
        validate_identifier("guildId", &self.guild_id)?;
        validate_identifier("channelId", &self.channel_id)
    }
}
