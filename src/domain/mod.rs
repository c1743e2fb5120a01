//! # Domain Layer
//!
//! Request-scoped models, the classification router and the prompt catalogue.
//! This layer is independent of HTTP and of the model vendor.

mod error;
pub mod models;
pub mod prompts;
pub mod services;

pub use error::*;
pub use models::*;
pub use services::*;
