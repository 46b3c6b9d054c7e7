//! SDK constants
//!
//! Centralized location for wire paths and fixed values shared by the
//! executor and the resource clients.

// Synthesized transport failure
pub const UNREACHABLE_STATUS: u16 = 503;
pub const UNREACHABLE_ERROR: &str = "API Unreachable";

// Transport defaults
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const CONTENT_TYPE_JSON: &str = "application/json";

// API paths
pub const AUDIT_LOG_PATH: &str = "/api/v1/log/audit";
pub const MESSAGE_LOG_PATH: &str = "/api/v1/log/message";
pub const MESSAGE_CONTENT_PATH: &str = "/api/v1/content/message";
pub const HEALTH_PATH: &str = "/actuator/health";

// Health states reported by the service
pub const HEALTH_STATUS_UP: &str = "UP";
