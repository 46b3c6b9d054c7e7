//! HTTP transport and the request executor built on it.

pub mod client;
pub mod engine;

pub use client::{HttpClient, HttpClientBuilder};
pub use engine::{validate_base_url, HttpServiceEngine};
