//! Mapping of transport-library errors into SDK error values.

pub mod conversions;

pub use conversions::{describe_transport_error, http_build_error, transport_kind, unreachable_error};
