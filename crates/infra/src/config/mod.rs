//! Configuration loading
//!
//! Reads [`SdkConfig`](papertrail_domain::SdkConfig) from environment
//! variables or from JSON/TOML files.

pub mod loader;

pub use loader::{load, load_from_env, load_from_file, probe_config_paths};
