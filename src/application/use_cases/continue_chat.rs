use std::sync::Arc;
use std::time::Instant;

use tracing::{debug, info};

use crate::application::use_cases::remote_call::run_detached;
use crate::application::ModelClient;
use crate::domain::{ChatTurn, DomainError};

pub struct ContinueChatUseCase {
    model_client: Arc<dyn ModelClient>,
}

impl ContinueChatUseCase {
    pub fn new(model_client: Arc<dyn ModelClient>) -> Self {
        Self { model_client }
    }

    /// Forwards the conversation and returns the model's reply text.
    pub async fn execute(&self, turns: Vec<ChatTurn>) -> Result<String, DomainError> {
        if turns.is_empty() {
            return Err(DomainError::invalid_input("Invalid request body"));
        }

        info!(
            "Continuing chat of {} turns with {}",
            turns.len(),
            self.model_client.model_name()
        );
        let start_time = Instant::now();

        let client = Arc::clone(&self.model_client);
        let reply = run_detached(async move { client.chat(&turns).await }).await?;

        debug!(
            "Chat reply of {} chars after {:?}",
            reply.len(),
            start_time.elapsed()
        );
        Ok(reply)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::use_cases::test_support::StubModelClient;
    use crate::domain::Role;

    #[tokio::test]
    async fn test_turns_are_forwarded_in_order() {
        let client = Arc::new(StubModelClient::answering("sure"));
        let use_case = ContinueChatUseCase::new(client.clone());
        let turns = vec![
            ChatTurn::user("first"),
            ChatTurn::assistant("second"),
            ChatTurn::new(Role::User, "third"),
        ];

        let reply = use_case.execute(turns.clone()).await.unwrap();

        assert_eq!(reply, "sure");
        assert_eq!(client.last_turns(), turns);
    }

    #[tokio::test]
    async fn test_empty_conversation_makes_no_remote_call() {
        let client = Arc::new(StubModelClient::answering("sure"));
        let use_case = ContinueChatUseCase::new(client.clone());

        let err = use_case.execute(Vec::new()).await.unwrap_err();

        assert!(err.is_invalid_input());
        assert_eq!(client.calls(), 0);
    }

    #[tokio::test]
    async fn test_remote_failure_is_passed_through() {
        let use_case = ContinueChatUseCase::new(Arc::new(StubModelClient::failing(
            "empty response from Anthropic",
        )));
        let err = use_case
            .execute(vec![ChatTurn::user("hi")])
            .await
            .unwrap_err();
        assert!(err.is_remote());
        assert!(err.to_string().contains("empty response"));
    }
}
