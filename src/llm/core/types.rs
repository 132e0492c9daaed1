//! Core types for the LLM abstraction layer

use serde::{Deserialize, Serialize};

use super::config::GenerationConfig;

/// Request to generate content from an LLM
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateRequest {
    /// Model identifier understood by the provider
    pub model: String,
    /// Conversation so far
    pub messages: Vec<Message>,
    /// Generation parameters
    pub config: GenerationConfig,
    /// System prompt/instructions
    pub system: Option<String>,
}

impl GenerateRequest {
    /// A request carrying a single user message and no system prompt
    pub fn single_user_message(
        model: impl Into<String>,
        text: impl Into<String>,
        config: GenerationConfig,
    ) -> Self {
        Self {
            model: model.into(),
            messages: vec![Message::user(text)],
            config,
            system: None,
        }
    }
}

/// A single message in the conversation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    /// Role of the message sender
    pub role: MessageRole,
    /// Text content
    pub content: String,
}

impl Message {
    /// Create a new user message
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: MessageRole::User,
            content: text.into(),
        }
    }
}

/// Role of a message sender
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    /// Instructions ahead of the conversation
    System,
    /// Human input
    User,
    /// Model output
    Assistant,
}

impl MessageRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            MessageRole::System => "system",
            MessageRole::User => "user",
            MessageRole::Assistant => "assistant",
        }
    }
}

/// Complete (non-streamed) model answer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerateResponse {
    /// Provider-assigned completion id
    pub id: Option<String>,
    /// Generated text
    pub text: String,
    /// Why generation stopped
    pub finish_reason: FinishReason,
    /// Token accounting, when the provider reports it
    pub usage: Option<UsageMetadata>,
}

/// Reason why generation finished
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FinishReason {
    /// Natural completion
    Stop,
    /// Hit token limit
    MaxTokens,
    /// Blocked by content filters
    ContentFilter,
    /// Provider-specific reason
    Other(String),
}

impl FinishReason {
    /// Map an OpenAI-style `finish_reason` string
    pub fn from_openai(reason: Option<&str>) -> Self {
        match reason {
            None | Some("stop") => FinishReason::Stop,
            Some("length") => FinishReason::MaxTokens,
            Some("content_filter") => FinishReason::ContentFilter,
            Some(other) => FinishReason::Other(other.to_string()),
        }
    }
}

/// Token usage information
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsageMetadata {
    /// Prompt tokens consumed
    pub input_tokens: u32,
    /// Response tokens generated
    pub output_tokens: u32,
    /// Sum of input and output
    pub total_tokens: u32,
}

impl UsageMetadata {
    /// Create new usage metadata
    pub fn new(input_tokens: u32, output_tokens: u32) -> Self {
        Self {
            input_tokens,
            output_tokens,
            total_tokens: input_tokens + output_tokens,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_user_constructor() {
        let msg = Message::user("Hello");
        assert_eq!(msg.role, MessageRole::User);
        assert_eq!(msg.content, "Hello");
    }

    #[test]
    fn test_single_user_message_request() {
        let request = GenerateRequest::single_user_message(
            "llama3-8b-8192",
            "2+2?",
            GenerationConfig::default(),
        );
        assert_eq!(request.model, "llama3-8b-8192");
        assert_eq!(request.messages, vec![Message::user("2+2?")]);
        assert!(request.system.is_none());
    }

    #[test]
    fn test_usage_metadata_new() {
        let usage = UsageMetadata::new(100, 50);
        assert_eq!(usage.input_tokens, 100);
        assert_eq!(usage.output_tokens, 50);
        assert_eq!(usage.total_tokens, 150);
    }

    #[test]
    fn test_message_role_serialization() {
        assert_eq!(serde_json::to_string(&MessageRole::User).unwrap(), "\"user\"");
        assert_eq!(serde_json::to_string(&MessageRole::Assistant).unwrap(), "\"assistant\"");
        assert_eq!(serde_json::to_string(&MessageRole::System).unwrap(), "\"system\"");
        assert_eq!(MessageRole::System.as_str(), "system");
    }

    #[test]
    fn test_finish_reason_from_openai() {
        assert_eq!(FinishReason::from_openai(Some("stop")), FinishReason::Stop);
        assert_eq!(FinishReason::from_openai(None), FinishReason::Stop);
        assert_eq!(FinishReason::from_openai(Some("length")), FinishReason::MaxTokens);
        assert_eq!(
            FinishReason::from_openai(Some("content_filter")),
            FinishReason::ContentFilter
        );
        assert_eq!(
            FinishReason::from_openai(Some("tool_calls")),
            FinishReason::Other("tool_calls".to_string())
        );
    }
}
