use std::sync::Arc;
use std::time::Instant;

use tracing::{debug, info, warn};

use crate::application::use_cases::remote_call::run_detached;
use crate::application::ModelClient;
use crate::domain::{DomainError, TemplateBundle};

/// Asks the model which kind of project a prompt describes and returns the
/// matching template bundle.
pub struct ClassifyProjectUseCase {
    model_client: Arc<dyn ModelClient>,
}

impl ClassifyProjectUseCase {
    pub fn new(model_client: Arc<dyn ModelClient>) -> Self {
        Self { model_client }
    }

    pub async fn execute(&self, prompt: String) -> Result<TemplateBundle, DomainError> {
        if prompt.is_empty() {
            return Err(DomainError::invalid_input("Invalid request body"));
        }

        info!(
            "Classifying project prompt ({} chars) with {}",
            prompt.len(),
            self.model_client.model_name()
        );
        let start_time = Instant::now();

        let client = Arc::clone(&self.model_client);
        let answer = run_detached(async move { client.classify(&prompt).await }).await?;

        debug!(
            "Classification answer {:?} after {:?}",
            answer,
            start_time.elapsed()
        );

        TemplateBundle::resolve(&answer).inspect_err(|_| {
            warn!("Model answered with unrecognized classification {:?}", answer);
        })
    }
}
