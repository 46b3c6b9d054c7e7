//! # PaperTrail Infrastructure
//!
//! `reqwest`-backed implementation of the PaperTrail client SDK.
//!
//! - [`http`]: transport and the [`HttpServiceEngine`] request executor
//! - [`clients`]: one client per API resource
//! - [`sdk`]: the [`PaperTrail`] facade sharing one engine
//! - [`config`]: environment and file configuration loading
//! - [`observability`]: tracing subscriber setup
//!
//! ```no_run
//! # async fn demo() -> papertrail_domain::Result<()> {
//! let config = papertrail_infra::config::load()?;
//! papertrail_infra::observability::init_tracing(&config.logging);
//!
//! let papertrail = papertrail_infra::PaperTrail::from_config(&config)?;
//! if papertrail.audit_log().register_guild("123456789", "987654321").await {
//!     println!("registered");
//! }
//! # Ok(())
//! # }
//! ```

pub mod clients;
pub mod config;
pub mod errors;
pub mod http;
pub mod observability;
pub mod sdk;

pub use clients::{
    AuditLogRegistrationClient, HealthClient, MessageLogContentClient,
    MessageLogRegistrationClient,
};
pub use http::{validate_base_url, HttpClient, HttpClientBuilder, HttpServiceEngine};
pub use sdk::PaperTrail;
