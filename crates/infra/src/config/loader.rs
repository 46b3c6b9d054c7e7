//! Configuration loader
//!
//! Loads [`SdkConfig`] from environment variables or from a file.
//!
//! ## Loading Strategy
//! 1. Read environment variables; `PAPERTRAIL_BASE_URL` is required
//! 2. Otherwise fall back to a config file (JSON or TOML)
//!
//! ## Environment Variables
//! - `PAPERTRAIL_BASE_URL`: Base URL of the PaperTrail API
//! - `PAPERTRAIL_TIMEOUT_SECS`: Request timeout in seconds
//! - `PAPERTRAIL_USER_AGENT`: `User-Agent` header value
//! - `PAPERTRAIL_LOG_LEVEL`: Default tracing filter directive
//! - `PAPERTRAIL_LOG_JSON`: Emit JSON logs (true/false)
//!
//! ## File Locations
//! Probed in order:
//! 1. `./papertrail.{json,toml}`, then `./config.{json,toml}`
//! 2. The same names in `..` and `../..`
//! 3. The same names next to the executable

use std::path::{Path, PathBuf};

use papertrail_domain::constants::{DEFAULT_LOG_LEVEL, DEFAULT_TIMEOUT_SECS};
use papertrail_domain::{ApiConfig, LoggingConfig, PaperTrailError, Result, SdkConfig};

const ENV_BASE_URL: &str = "PAPERTRAIL_BASE_URL";
const ENV_TIMEOUT_SECS: &str = "PAPERTRAIL_TIMEOUT_SECS";
const ENV_USER_AGENT: &str = "PAPERTRAIL_USER_AGENT";
const ENV_LOG_LEVEL: &str = "PAPERTRAIL_LOG_LEVEL";
const ENV_LOG_JSON: &str = "PAPERTRAIL_LOG_JSON";

const CONFIG_FILE_NAMES: [&str; 4] =
    ["papertrail.json", "papertrail.toml", "config.json", "config.toml"];

/// Load configuration, environment first with a file fallback.
///
/// # Errors
/// Returns `PaperTrailError::Config` if neither source yields a valid
/// configuration.
pub fn load() -> Result<SdkConfig> {
    match load_from_env() {
        Ok(config) => {
            tracing::info!("Configuration loaded from environment variables");
            Ok(config)
        }
        Err(e) => {
            tracing::debug!(error = %e, "Failed to load from environment, trying file");
            load_from_file(None)
        }
    }
}

/// Load configuration from `PAPERTRAIL_*` environment variables.
///
/// # Errors
/// Returns `PaperTrailError::Config` if `PAPERTRAIL_BASE_URL` is missing or
/// `PAPERTRAIL_TIMEOUT_SECS` is not a positive number.
pub fn load_from_env() -> Result<SdkConfig> {
    let base_url = env_var(ENV_BASE_URL)?;

    let timeout_secs = match std::env::var(ENV_TIMEOUT_SECS) {
        Ok(raw) => raw
            .trim()
            .parse::<u64>()
            .map_err(|e| PaperTrailError::Config(format!("Invalid timeout: {e}")))?,
        Err(_) => DEFAULT_TIMEOUT_SECS,
    };

    let level = std::env::var(ENV_LOG_LEVEL).unwrap_or_else(|_| DEFAULT_LOG_LEVEL.to_string());

    validated(SdkConfig {
        api: ApiConfig {
            base_url: Some(base_url),
            timeout_secs,
            user_agent: std::env::var(ENV_USER_AGENT).ok(),
        },
        logging: LoggingConfig { level, json: env_bool(ENV_LOG_JSON, false) },
    })
}

/// Reject values that parse but cannot work, such as a zero timeout.
fn validated(config: SdkConfig) -> Result<SdkConfig> {
    if config.api.timeout_secs == 0 {
        return Err(PaperTrailError::Config("Timeout must be at least one second".into()));
    }
    Ok(config)
}

/// Load configuration from a file.
///
/// With `path == None` the standard locations are probed via
/// [`probe_config_paths`]. The format is picked from the extension.
///
/// # Errors
/// Returns `PaperTrailError::Config` if the file is missing, unreadable,
/// malformed or sets a zero timeout.
pub fn load_from_file(path: Option<PathBuf>) -> Result<SdkConfig> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                return Err(PaperTrailError::Config(format!(
                    "Config file not found: {}",
                    p.display()
                )));
            }
            p
        }
        None => probe_config_paths().ok_or_else(|| {
            PaperTrailError::Config("No config file found in any of the standard locations".into())
        })?,
    };

    tracing::info!(path = %config_path.display(), "Loading configuration from file");

    let contents = std::fs::read_to_string(&config_path)
        .map_err(|e| PaperTrailError::Config(format!("Failed to read config file: {e}")))?;

    parse_config(&contents, &config_path)
}

fn parse_config(contents: &str, path: &Path) -> Result<SdkConfig> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

    let config = match extension {
        "toml" => toml::from_str(contents)
            .map_err(|e| PaperTrailError::Config(format!("Invalid TOML format: {e}")))?,
        "json" => serde_json::from_str(contents)
            .map_err(|e| PaperTrailError::Config(format!("Invalid JSON format: {e}")))?,
        _ => {
            return Err(PaperTrailError::Config(format!(
                "Unsupported config format: {extension}"
            )))
        }
    };
    validated(config)
}

/// First existing config file among the standard locations.
pub fn probe_config_paths() -> Option<PathBuf> {
    let mut roots = Vec::new();

    if let Ok(cwd) = std::env::current_dir() {
        roots.extend([cwd.clone(), cwd.join(".."), cwd.join("../..")]);
    }
    if let Some(exe_dir) = std::env::current_exe().ok().and_then(|p| p.parent().map(Path::to_path_buf)) {
        roots.extend([exe_dir.clone(), exe_dir.join(".."), exe_dir.join("../..")]);
    }

    roots
        .iter()
        .flat_map(|root| CONFIG_FILE_NAMES.iter().map(move |name| root.join(name)))
        .find(|candidate| candidate.exists())
}

fn env_var(key: &str) -> Result<String> {
    std::env::var(key)
        .ok()
        .filter(|value| !value.trim().is_empty())
        .ok_or_else(|| PaperTrailError::Config(format!("Missing required environment variable: {key}")))
}

/// Accepts `1`/`0`, `true`/`false`, `yes`/`no`, `on`/`off`
/// (case-insensitive); anything else is `false`.
fn env_bool(key: &str, default: bool) -> bool {
    std::env::var(key)
        .ok()
        .map(|s| matches!(s.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on"))
        .unwrap_or(default)
}
