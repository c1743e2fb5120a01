//! # Connector Layer
//!
//! External integrations implementing application interfaces:
//! - Adapter for the Anthropic Messages API
//! - HTTP API (axum router, controllers, error mapping)

pub mod adapter;
pub mod api;

pub use adapter::*;
pub use api::*;
