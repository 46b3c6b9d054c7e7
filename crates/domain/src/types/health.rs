//! Health report returned by `/actuator/health`

use serde::{Deserialize, Serialize};

use crate::constants::HEALTH_STATUS_UP;

/// Overall service health. Every field may be absent depending on what the
/// service chooses to expose.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Health {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub components: Option<HealthComponents>,
}

/// Per-dependency health entries
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthComponents {
    #[serde(default)]
    pub db: Option<ComponentHealth>,
    #[serde(default)]
    pub ping: Option<ComponentHealth>,
    #[serde(default)]
    pub redis: Option<ComponentHealth>,
    #[serde(default)]
    pub ssl: Option<ComponentHealth>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentHealth {
    #[serde(default)]
    pub status: Option<String>,
}

impl ComponentHealth {
    pub fn is_up(&self) -> bool {
        is_up(self.status.as_deref())
    }
}

impl Health {
    /// `true` iff the top-level status is `UP`.
    pub fn is_up(&self) -> bool {
        is_up(self.status.as_deref())
    }

    pub fn database(&self) -> Option<&ComponentHealth> {
        self.components.as_ref().and_then(|c| c.db.as_ref())
    }

    pub fn redis(&self) -> Option<&ComponentHealth> {
        self.components.as_ref().and_then(|c| c.redis.as_ref())
    }
}

fn is_up(status: Option<&str>) -> bool {
    status.is_some_and(|s| s.eq_ignore_ascii_case(HEALTH_STATUS_UP))
}
