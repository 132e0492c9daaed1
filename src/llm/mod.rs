//! LLM abstraction layer
//!
//! A provider-neutral core (`core`), the Groq chat-completions client
//! (`groq`), and the fixed-model [`ModelGateway`] used by the chat endpoint.

pub mod core;
pub mod gateway;
pub mod groq;

// Re-export commonly used types
pub use self::core::{
    config::{GenerationConfig, DEFAULT_MODEL, DEFAULT_TEMPERATURE},
    error::LlmError,
    provider::LlmProvider,
    types::{FinishReason, GenerateRequest, GenerateResponse, Message, MessageRole, UsageMetadata},
};
pub use gateway::ModelGateway;
pub use groq::GroqClient;
