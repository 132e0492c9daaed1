//! Mapping between abstraction types and Groq-specific types

use crate::llm::core::{
    error::LlmError,
    types::{FinishReason, GenerateRequest, GenerateResponse, Message, UsageMetadata},
};

use super::types::{ChatCompletionRequest, ChatCompletionResponse, GroqMessage};

/// Convert our abstraction request to Groq's request format
pub fn to_groq_request(request: GenerateRequest) -> ChatCompletionRequest {
    let mut messages = Vec::with_capacity(request.messages.len() + 1);
    if let Some(system) = request.system {
        messages.push(GroqMessage {
            role: "system".to_string(),
            content: Some(system),
        });
    }
    messages.extend(request.messages.into_iter().map(to_groq_message));

    ChatCompletionRequest {
        model: request.model,
        messages,
        temperature: request.config.temperature,
        max_tokens: request.config.max_tokens,
        top_p: request.config.top_p,
        stop: request.config.stop_sequences,
        stream: false,
    }
}

fn to_groq_message(message: Message) -> GroqMessage {
    GroqMessage {
        role: message.role.as_str().to_string(),
        content: Some(message.content),
    }
}

/// Take the first choice of a Groq response
///
/// # Errors
///
/// * `LlmError::EmptyResponse` - If there is no choice or it carries no text
pub fn from_groq_response(response: ChatCompletionResponse) -> Result<GenerateResponse, LlmError> {
    let choice = response
        .choices
        .into_iter()
        .min_by_key(|c| c.index)
        .ok_or(LlmError::EmptyResponse)?;

    let text = choice.message.content.ok_or(LlmError::EmptyResponse)?;

    Ok(GenerateResponse {
        id: response.id,
        text,
        finish_reason: FinishReason::from_openai(choice.finish_reason.as_deref()),
        usage: response
            .usage
            .map(|u| UsageMetadata::new(u.prompt_tokens, u.completion_tokens)),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::core::config::GenerationConfig;
    use crate::llm::groq::types::{Choice, GroqUsage};

    fn response_with(choices: Vec<Choice>) -> ChatCompletionResponse {
        ChatCompletionResponse {
            id: Some("chatcmpl-1".to_string()),
            model: Some("llama3-8b-8192".to_string()),
            choices,
            usage: Some(GroqUsage {
                prompt_tokens: 5,
                completion_tokens: 3,
                total_tokens: 8,
            }),
        }
    }

    #[test]
    fn test_to_groq_request_single_user_message() {
        let request = GenerateRequest::single_user_message(
            "llama3-8b-8192",
            "Explain gravity",
            GenerationConfig::default(),
        );
        let groq = to_groq_request(request);

        assert_eq!(groq.model, "llama3-8b-8192");
        assert_eq!(groq.messages.len(), 1);
        assert_eq!(groq.messages[0].role, "user");
        assert_eq!(groq.messages[0].content.as_deref(), Some("Explain gravity"));
        assert_eq!(groq.temperature, Some(0.7));
        assert_eq!(groq.max_tokens, None);
        assert!(!groq.stream);
    }

    #[test]
    fn test_to_groq_request_puts_system_first() {
        let mut request = GenerateRequest::single_user_message(
            "m",
            "question",
            GenerationConfig::new(),
        );
        request.system = Some("You are a tutor".to_string());
        let groq = to_groq_request(request);

        assert_eq!(groq.messages.len(), 2);
        assert_eq!(groq.messages[0].role, "system");
        assert_eq!(groq.messages[1].role, "user");
    }

    #[test]
    fn test_from_groq_response_takes_first_choice() {
        let response = response_with(vec![
            Choice {
                index: 1,
                message: GroqMessage {
                    role: "assistant".to_string(),
                    content: Some("second".to_string()),
                },
                finish_reason: Some("stop".to_string()),
            },
            Choice {
                index: 0,
                message: GroqMessage {
                    role: "assistant".to_string(),
                    content: Some("first".to_string()),
                },
                finish_reason: Some("length".to_string()),
            },
        ]);

        let result = from_groq_response(response).unwrap();
        assert_eq!(result.text, "first");
        assert_eq!(result.finish_reason, FinishReason::MaxTokens);
        assert_eq!(result.usage, Some(UsageMetadata::new(5, 3)));
    }

    #[test]
    fn test_from_groq_response_without_choices() {
        let result = from_groq_response(response_with(vec![]));
        assert!(matches!(result, Err(LlmError::EmptyResponse)));
    }

    #[test]
    fn test_from_groq_response_null_content() {
        let response = response_with(vec![Choice {
            index: 0,
            message: GroqMessage {
                role: "assistant".to_string(),
                content: None,
            },
            finish_reason: None,
        }]);
        assert!(matches!(
            from_groq_response(response),
            Err(LlmError::EmptyResponse)
        ));
    }
}
