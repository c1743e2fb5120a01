use async_trait::async_trait;

use crate::domain::{ChatTurn, DomainError};

/// Sends prompts to a remote language model and returns the text of the first
/// content block of its answer.
///
/// Implementations hold no per-call state, so one instance is shared by every
/// in-flight request.
#[async_trait]
pub trait ModelClient: Send + Sync {
    /// Ask the model which project kind fits `prompt`. The answer is returned
    /// verbatim; validating it is the caller's job.
    async fn classify(&self, prompt: &str) -> Result<String, DomainError>;

    /// Continue a conversation. `turns` are sent oldest first, unchanged.
    async fn chat(&self, turns: &[ChatTurn]) -> Result<String, DomainError>;

    /// Model identifier used for outbound calls.
    fn model_name(&self) -> &str;
}
