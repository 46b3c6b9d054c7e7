//! Single entry point that shares one HTTP engine between all clients

use std::sync::Arc;

use papertrail_core::RequestExecutor;
use papertrail_domain::{ApiConfig, Result, SdkConfig};
use tracing::info;

use crate::clients::{
    AuditLogRegistrationClient, HealthClient, MessageLogContentClient,
    MessageLogRegistrationClient,
};
use crate::http::HttpServiceEngine;

/// Handle to every PaperTrail resource.
///
/// Build it once at startup and clone it freely; clones share the same
/// connection pool.
#[derive(Clone)]
pub struct PaperTrail {
    audit_log: AuditLogRegistrationClient,
    message_log: MessageLogRegistrationClient,
    message_content: MessageLogContentClient,
    health: HealthClient,
}

impl PaperTrail {
    /// Build from a loaded [`SdkConfig`].
    ///
    /// # Errors
    /// `MissingBaseUrl`/`InvalidBaseUrl` if no usable base URL is configured,
    /// `Http` if the transport cannot be built.
    pub fn from_config(config: &SdkConfig) -> Result<Self> {
        let engine = HttpServiceEngine::from_config(&config.api)?;
        info!(base_url = engine.base_url(), "PaperTrail client initialized");
        Ok(Self::with_executor(Arc::new(engine)))
    }

    /// Build with default transport settings.
    pub fn new(base_url: &str) -> Result<Self> {
        Self::from_config(&SdkConfig {
            api: ApiConfig { base_url: Some(base_url.to_string()), ..ApiConfig::default() },
            ..SdkConfig::default()
        })
    }

    pub fn with_executor(executor: Arc<dyn RequestExecutor>) -> Self {
        Self {
            audit_log: AuditLogRegistrationClient::with_executor(executor.clone()),
            message_log: MessageLogRegistrationClient::with_executor(executor.clone()),
            message_content: MessageLogContentClient::with_executor(executor.clone()),
            health: HealthClient::with_executor(executor),
        }
    }

    pub fn audit_log(&self) -> &AuditLogRegistrationClient {
        &self.audit_log
    }

    pub fn message_log(&self) -> &MessageLogRegistrationClient {
        &self.message_log
    }

    pub fn message_content(&self) -> &MessageLogContentClient {
        &self.message_content
    }

    pub fn health(&self) -> &HealthClient {
        &self.health
    }
}
