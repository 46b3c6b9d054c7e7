//! Logging setup
//!
//! The SDK itself only emits `tracing` events. Applications that do not
//! install their own subscriber can call [`init_tracing`].

mod logging;

pub use logging::{build_filter, init_tracing};
