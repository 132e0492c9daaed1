//! The boundary the chat endpoint talks to
//!
//! A gateway forwards one user prompt to a fixed model and returns the
//! text of the answer. It keeps no conversation history and never retries.

use std::sync::Arc;

use tracing::debug;

use super::core::{
    config::{GenerationConfig, DEFAULT_MODEL},
    error::LlmError,
    provider::LlmProvider,
    types::GenerateRequest,
};

/// Fixed-model completion gateway over any [`LlmProvider`]
#[derive(Clone)]
pub struct ModelGateway {
    provider: Arc<dyn LlmProvider>,
    model: String,
    config: GenerationConfig,
}

impl ModelGateway {
    /// Gateway using the default model and temperature 0.7
    pub fn new(provider: Arc<dyn LlmProvider>) -> Self {
        Self {
            provider,
            model: DEFAULT_MODEL.to_string(),
            config: GenerationConfig::default(),
        }
    }

    /// Model identifier requests are sent to
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Send `prompt` as a single user message and return the reply text
    ///
    /// Every failure (network, auth, quota, empty answer) comes back as an
    /// `LlmError`; callers are not expected to distinguish them.
    pub async fn complete(&self, prompt: &str) -> Result<String, LlmError> {
        let request =
            GenerateRequest::single_user_message(&self.model, prompt, self.config.clone());

        let response = self.provider.generate(request).await?;
        debug!(
            model = %self.model,
            finish_reason = ?response.finish_reason,
            usage = ?response.usage,
            "Model completion received"
        );

        Ok(response.text)
    }
}
