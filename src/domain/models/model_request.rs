use serde::{Deserialize, Serialize};

use super::ChatTurn;

/// Body of one Messages API call. Built fresh for every call and never reused.
#[derive(Debug, Clone, Serialize)]
pub struct ModelRequest {
    messages: Vec<ChatTurn>,
    model: String,
    max_tokens: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    system: Option<String>,
}

impl ModelRequest {
    pub fn new(messages: Vec<ChatTurn>, model: impl Into<String>, max_tokens: u32) -> Self {
        Self {
            messages,
            model: model.into(),
            max_tokens,
            system: None,
        }
    }

    pub fn with_system(mut self, system: impl Into<String>) -> Self {
        self.system = Some(system.into());
        self
    }

    pub fn messages(&self) -> &[ChatTurn] {
        &self.messages
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn max_tokens(&self) -> u32 {
        self.max_tokens
    }

    pub fn system(&self) -> Option<&str> {
        self.system.as_deref()
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ContentBlock {
    #[serde(rename = "type", default)]
    kind: String,
    #[serde(default)]
    text: String,
}

impl ContentBlock {
    pub fn kind(&self) -> &str {
        &self.kind
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

/// Subset of the Messages API response envelope this gateway reads.
#[derive(Debug, Clone, Deserialize)]
pub struct ModelResponse {
    #[serde(default)]
    content: Vec<ContentBlock>,
}

impl ModelResponse {
    pub fn content(&self) -> &[ContentBlock] {
        &self.content
    }

    /// Text of the first content block; later blocks are ignored.
    pub fn into_first_text(self) -> Option<String> {
        self.content.into_iter().next().map(|b| b.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_is_omitted_when_absent() {
        let req = ModelRequest::new(vec![ChatTurn::user("hello")], "m", 8000);
        assert_eq!(req.model(), "m");
        assert_eq!(req.max_tokens(), 8000);
        assert!(req.system().is_none());

        let json = serde_json::to_value(&req).unwrap();
        assert!(json.get("system").is_none());
        assert_eq!(json["max_tokens"], 8000);
        assert_eq!(json["messages"][0]["role"], "user");
    }

    #[test]
    fn test_system_is_sent_when_present() {
        let req = ModelRequest::new(vec![], "m", 10).with_system("be brief");
        assert_eq!(req.system(), Some("be brief"));
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["system"], "be brief");
        assert_eq!(json["model"], "m");
    }

    #[test]
    fn test_first_text_ignores_later_blocks() {
        let resp: ModelResponse = serde_json::from_str(
            r#"{"id":"msg_1","content":[{"type":"text","text":"react"},{"type":"text","text":"node"}]}"#,
        )
        .unwrap();
        assert_eq!(resp.content().len(), 2);
        assert_eq!(resp.content()[0].kind(), "text");
        assert_eq!(resp.into_first_text().as_deref(), Some("react"));
    }

    #[test]
    fn test_empty_content_has_no_text() {
        let resp: ModelResponse = serde_json::from_str(r#"{"content":[]}"#).unwrap();
        assert!(resp.into_first_text().is_none());
    }
}
