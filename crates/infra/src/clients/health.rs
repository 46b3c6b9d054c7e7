//! Health endpoint client

use std::sync::Arc;

use papertrail_core::{execute_json, ApiRequest, ApiResultExt, RequestExecutor};
use papertrail_domain::constants::HEALTH_PATH;
use papertrail_domain::{ApiResult, Health, Result};

use super::engine_for;

#[derive(Clone)]
pub struct HealthClient {
    executor: Arc<dyn RequestExecutor>,
}

impl HealthClient {
    pub fn new(base_url: &str) -> Result<Self> {
        Self::from_optional(Some(base_url))
    }

    pub fn from_optional(base_url: Option<&str>) -> Result<Self> {
        Ok(Self::with_executor(engine_for(base_url)?))
    }

    pub fn with_executor(executor: Arc<dyn RequestExecutor>) -> Self {
        Self { executor }
    }

    /// Fetch `/actuator/health`. `None` if the call failed or the body was
    /// empty.
    pub async fn get_health(&self) -> Option<Health> {
        let request = ApiRequest::get(HEALTH_PATH).json_content();
        let result: ApiResult<Option<Health>> =
            execute_json(self.executor.as_ref(), request).await;

        result.into_option("Failed to get health of PaperTrail API").flatten()
    }
}
