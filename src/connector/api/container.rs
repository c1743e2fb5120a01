use std::sync::Arc;

use tracing::debug;

use crate::application::{ClassifyProjectUseCase, ContinueChatUseCase, ModelClient};
use crate::connector::adapter::{AnthropicClient, AnthropicConfig};

/// Owns the shared model client and hands out per-request use cases.
pub struct Container {
    model_client: Arc<dyn ModelClient>,
}

impl Container {
    pub fn new(config: AnthropicConfig) -> Self {
        debug!(
            "Using Anthropic model {} at {}",
            config.model, config.base_url
        );
        Self::with_model_client(Arc::new(AnthropicClient::new(config)))
    }

    /// Builds a container around any [`ModelClient`] implementation.
    pub fn with_model_client(model_client: Arc<dyn ModelClient>) -> Self {
        Self { model_client }
    }

    pub fn classify_use_case(&self) -> ClassifyProjectUseCase {
        ClassifyProjectUseCase::new(self.model_client.clone())
    }

    pub fn chat_use_case(&self) -> ContinueChatUseCase {
        ContinueChatUseCase::new(self.model_client.clone())
    }

    pub fn model_name(&self) -> &str {
        self.model_client.model_name()
    }
}
