mod anthropic_client;

pub use anthropic_client::*;
