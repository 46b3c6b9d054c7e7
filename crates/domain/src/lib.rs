//! # PaperTrail Domain
//!
//! Wire types and error definitions for the PaperTrail SDK.
//!
//! This crate contains:
//! - Registration, message-content and health entities
//! - The uniform remote error body ([`ApiError`]) and [`ApiResult`]
//! - SDK error types and Result definitions
//! - Configuration structures
//!
//! ## Architecture
//! - No dependencies on other PaperTrail crates
//! - No I/O, only serde-friendly data structures

pub mod config;
pub mod constants;
pub mod errors;
pub mod macros;
pub mod types;

// Re-export commonly used items
pub use config::*;
pub use errors::*;
pub use types::*;
