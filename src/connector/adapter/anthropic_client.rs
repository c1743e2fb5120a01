use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::StatusCode;
use tracing::{debug, warn};

use crate::application::ModelClient;
use crate::domain::prompts::{chat_system_prompt, CLASSIFY_SYSTEM_PROMPT};
use crate::domain::{ChatTurn, DomainError, ModelRequest, ModelResponse};

pub const DEFAULT_BASE_URL: &str = "https://api.anthropic.com";
pub const DEFAULT_MODEL: &str = "claude-3-5-sonnet-20241022";
const MESSAGES_PATH: &str = "/v1/messages";
const ANTHROPIC_API_VERSION: &str = "2023-06-01";
const MAX_TOKENS: u32 = 8000;

/// Connection settings for [`AnthropicClient`].
#[derive(Debug, Clone)]
pub struct AnthropicConfig {
    pub api_key: String,
    pub model: String,
    pub base_url: String,
    /// Working directory described to the model in the chat system prompt.
    pub work_dir: String,
}

impl AnthropicConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            work_dir: String::new(),
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_work_dir(mut self, work_dir: impl Into<String>) -> Self {
        self.work_dir = work_dir.into();
        self
    }

    /// Reads configuration from the environment:
    ///
    /// | Variable             | Default                       |
    /// |----------------------|-------------------------------|
    /// | `ANTHROPIC_API_KEY`  | required                      |
    /// | `ANTHROPIC_BASE_URL` | `https://api.anthropic.com`   |
    /// | `ANTHROPIC_MODEL`    | `claude-3-5-sonnet-20241022`  |
    /// | `PROJECT_WORK_DIR`   | `/home/project`               |
    pub fn from_env() -> Result<Self, DomainError> {
        let key = std::env::var("ANTHROPIC_API_KEY").unwrap_or_default();
        if key.is_empty() {
            return Err(DomainError::configuration(
                "ANTHROPIC_API_KEY environment variable is required",
            ));
        }

        let mut config = Self::new(key);
        if let Ok(base) = std::env::var("ANTHROPIC_BASE_URL") {
            config = config.with_base_url(base);
        }
        if let Ok(model) = std::env::var("ANTHROPIC_MODEL") {
            config = config.with_model(model);
        }
        if let Ok(dir) = std::env::var("PROJECT_WORK_DIR") {
            config = config.with_work_dir(dir);
        }
        Ok(config)
    }
}

/// HTTP client for the Anthropic Messages API.
///
/// Every call builds its own [`ModelRequest`]; the client itself is immutable
/// after construction and is shared across all in-flight requests.
///
/// No request timeout is configured. A call waits for as long as the transport
/// lets it.
pub struct AnthropicClient {
    client: reqwest::Client,
    api_key: String,
    model: String,
    /// Full endpoint URL (base + MESSAGES_PATH).
    url: String,
    /// Chat system prompt, rendered once for the configured work dir.
    chat_system: String,
}

impl AnthropicClient {
    pub fn new(config: AnthropicConfig) -> Self {
        let url = format!("{}{MESSAGES_PATH}", config.base_url.trim_end_matches('/'));
        Self {
            client: reqwest::Client::new(),
            chat_system: chat_system_prompt(&config.work_dir),
            api_key: config.api_key,
            model: config.model,
            url,
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    async fn send(&self, request: &ModelRequest) -> Result<ModelResponse, DomainError> {
        debug!(
            "AnthropicClient: POST {} ({} messages)",
            self.url,
            request.messages().len()
        );

        let response = self
            .client
            .post(&self.url)
            .header(CONTENT_TYPE, "application/json")
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", ANTHROPIC_API_VERSION)
            .json(request)
            .send()
            .await
            .map_err(|e| DomainError::remote(e.to_string()))?;

        let status = response.status();
        if status != StatusCode::OK {
            let body = response.text().await.unwrap_or_default();
            warn!("AnthropicClient: API returned {status}: {body}");
            return Err(DomainError::remote(format!(
                "unexpected status code: {}",
                status.as_u16()
            )));
        }

        response
            .json::<ModelResponse>()
            .await
            .map_err(|e| DomainError::remote(e.to_string()))
    }

    fn first_text(response: ModelResponse) -> Result<String, DomainError> {
        response
            .into_first_text()
            .ok_or_else(|| DomainError::remote("empty response from Anthropic"))
    }
}

#[async_trait]
impl ModelClient for AnthropicClient {
    async fn classify(&self, prompt: &str) -> Result<String, DomainError> {
        let request = ModelRequest::new(vec![ChatTurn::user(prompt)], &self.model, MAX_TOKENS)
            .with_system(CLASSIFY_SYSTEM_PROMPT);

        let response = self.send(&request).await?;
        Self::first_text(response)
    }

    async fn chat(&self, turns: &[ChatTurn]) -> Result<String, DomainError> {
        let request = ModelRequest::new(turns.to_vec(), &self.model, MAX_TOKENS)
            .with_system(self.chat_system.as_str());

        let response = self
            .send(&request)
            .await
            .map_err(|e| DomainError::remote(format!("chat request failed: {e}")))?;
        Self::first_text(response)
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}
