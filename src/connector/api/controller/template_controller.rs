use serde::Deserialize;

use crate::domain::{DomainError, TemplateBundle};

use super::super::{ApiError, Container};

#[derive(Debug, Deserialize)]
pub struct TemplateRequest {
    pub prompt: String,
}

pub struct TemplateController<'a> {
    container: &'a Container,
}

impl<'a> TemplateController<'a> {
    pub fn new(container: &'a Container) -> Self {
        Self { container }
    }

    pub async fn template(&self, body: &[u8]) -> Result<TemplateBundle, ApiError> {
        let request: TemplateRequest = serde_json::from_slice(body)
            .map_err(|_| DomainError::invalid_input("Invalid request body"))?;

        let use_case = self.container.classify_use_case();
        Ok(use_case.execute(request.prompt).await?)
    }
}
