//! # Application Layer
//!
//! Use cases driving one inbound request from validation to its final outcome.

pub mod interfaces;
pub mod use_cases;

pub use interfaces::*;
pub use use_cases::*;
