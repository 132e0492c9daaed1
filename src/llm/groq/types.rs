//! Groq request and response types
//!
//! Groq serves the OpenAI chat-completions schema.

use serde::{Deserialize, Serialize};

/// Body of `POST /chat/completions`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatCompletionRequest {
    pub model: String,
    pub messages: Vec<GroqMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_p: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stop: Option<Vec<String>>,
    /// Always false; responses are read in one piece
    pub stream: bool,
}

/// A single message in the conversation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroqMessage {
    /// "system", "user" or "assistant"
    pub role: String,
    /// Null for assistant messages that carry no text
    pub content: Option<String>,
}

/// Successful chat-completion response
#[derive(Debug, Clone, Deserialize)]
pub struct ChatCompletionResponse {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub model: Option<String>,
    pub choices: Vec<Choice>,
    #[serde(default)]
    pub usage: Option<GroqUsage>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Choice {
    pub index: u32,
    pub message: GroqMessage,
    #[serde(default)]
    pub finish_reason: Option<String>,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct GroqUsage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
    #[serde(default)]
    pub total_tokens: u32,
}

/// Error envelope returned with non-2xx statuses
#[derive(Debug, Clone, Deserialize)]
pub struct GroqErrorResponse {
    pub error: GroqErrorData,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GroqErrorData {
    pub message: String,
    #[serde(rename = "type", default)]
    pub error_type: Option<String>,
    #[serde(default)]
    pub code: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_omits_unset_fields() {
        let request = ChatCompletionRequest {
            model: "llama3-8b-8192".to_string(),
            messages: vec![GroqMessage {
                role: "user".to_string(),
                content: Some("hi".to_string()),
            }],
            temperature: Some(0.7),
            max_tokens: None,
            top_p: None,
            stop: None,
            stream: false,
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["model"], "llama3-8b-8192");
        assert_eq!(value["messages"][0]["role"], "user");
        assert_eq!(value["stream"], false);
        assert!(value.get("max_tokens").is_none());
        assert!(value.get("stop").is_none());
    }

    #[test]
    fn test_response_deserialization() {
        let json = r#"{
            "id": "chatcmpl-123",
            "object": "chat.completion",
            "model": "llama3-8b-8192",
            "choices": [{
                "index": 0,
                "message": {"role": "assistant", "content": "4"},
                "finish_reason": "stop"
            }],
            "usage": {"prompt_tokens": 12, "completion_tokens": 1, "total_tokens": 13}
        }"#;
        let response: ChatCompletionResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.id.as_deref(), Some("chatcmpl-123"));
        assert_eq!(response.choices[0].message.content.as_deref(), Some("4"));
        assert_eq!(response.usage.unwrap().total_tokens, 13);
    }

    #[test]
    fn test_error_deserialization() {
        let json = r#"{"error":{"message":"Invalid API Key","type":"invalid_request_error","code":"invalid_api_key"}}"#;
        let err: GroqErrorResponse = serde_json::from_str(json).unwrap();
        assert_eq!(err.error.message, "Invalid API Key");
        assert_eq!(err.error.code.as_deref(), Some("invalid_api_key"));
        assert_eq!(err.error.error_type.as_deref(), Some("invalid_request_error"));
    }
}
