use serde::{Deserialize, Serialize};

use crate::domain::{ChatTurn, DomainError};

use super::super::{ApiError, Container};

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub messages: Vec<ChatTurn>,
}

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub response: String,
}

pub struct ChatController<'a> {
    container: &'a Container,
}

impl<'a> ChatController<'a> {
    pub fn new(container: &'a Container) -> Self {
        Self { container }
    }

    pub async fn chat(&self, body: &[u8]) -> Result<ChatResponse, ApiError> {
        let request: ChatRequest = serde_json::from_slice(body)
            .map_err(|_| DomainError::invalid_input("Invalid request body"))?;

        let use_case = self.container.chat_use_case();
        let response = use_case.execute(request.messages).await?;

        Ok(ChatResponse { response })
    }
}
