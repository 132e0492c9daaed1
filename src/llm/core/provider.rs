//! Provider trait for LLM implementations

use async_trait::async_trait;

use super::{
    error::LlmError,
    types::{GenerateRequest, GenerateResponse},
};

/// Interface every chat-completion backend implements
#[async_trait]
pub trait LlmProvider: Send + Sync {
    /// Send the request and wait for the complete response
    ///
    /// No streaming and no retries: one request, one answer or one error.
    async fn generate(&self, request: GenerateRequest) -> Result<GenerateResponse, LlmError>;
}
