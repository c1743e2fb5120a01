use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use crate::application::ModelClient;
use crate::domain::{ChatTurn, DomainError};

/// Canned [`ModelClient`] that records how it was called.
pub(crate) struct StubModelClient {
    reply: Result<String, String>,
    calls: AtomicUsize,
    last_prompt: Mutex<Option<String>>,
    last_turns: Mutex<Vec<ChatTurn>>,
}

impl StubModelClient {
    pub(crate) fn answering(text: &str) -> Self {
        Self::with_reply(Ok(text.to_string()))
    }

    pub(crate) fn failing(message: &str) -> Self {
        Self::with_reply(Err(message.to_string()))
    }

    fn with_reply(reply: Result<String, String>) -> Self {
        Self {
            reply,
            calls: AtomicUsize::new(0),
            last_prompt: Mutex::new(None),
            last_turns: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub(crate) fn last_prompt(&self) -> Option<String> {
        self.last_prompt.lock().unwrap().clone()
    }

    pub(crate) fn last_turns(&self) -> Vec<ChatTurn> {
        self.last_turns.lock().unwrap().clone()
    }

    fn reply(&self) -> Result<String, DomainError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.reply.clone().map_err(DomainError::remote)
    }
}

#[async_trait]
impl ModelClient for StubModelClient {
    async fn classify(&self, prompt: &str) -> Result<String, DomainError> {
        *self.last_prompt.lock().unwrap() = Some(prompt.to_string());
        self.reply()
    }

    async fn chat(&self, turns: &[ChatTurn]) -> Result<String, DomainError> {
        *self.last_turns.lock().unwrap() = turns.to_vec();
        self.reply()
    }

    fn model_name(&self) -> &str {
        "stub-model"
    }
}
