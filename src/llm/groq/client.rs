//! Groq client implementation

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{header::RETRY_AFTER, Client, Response, StatusCode};

use crate::llm::core::{
    error::LlmError,
    provider::LlmProvider,
    types::{GenerateRequest, GenerateResponse},
};

use super::mapper::{from_groq_response, to_groq_request};
use super::types::{ChatCompletionResponse, GroqErrorResponse};

/// Public Groq API root
pub const DEFAULT_BASE_URL: &str = "https://api.groq.com/openai/v1";

/// Client for Groq's chat-completions API
pub struct GroqClient {
    /// HTTP client for making requests
    http_client: Client,
    /// Bearer token
    api_key: String,
    /// API root, without trailing slash
    base_url: String,
}

impl GroqClient {
    /// Create a new Groq client
    ///
    /// # Arguments
    ///
    /// * `api_key` - Groq API key
    /// * `base_url` - API root, normally [`DEFAULT_BASE_URL`]
    ///
    /// # Errors
    ///
    /// Returns an error if the key is empty or the HTTP client cannot be built.
    pub fn new(api_key: impl Into<String>, base_url: impl Into<String>) -> Result<Self, LlmError> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(LlmError::AuthenticationError(
                "Groq API key is missing".to_string(),
            ));
        }

        let http_client = Client::builder()
            .connect_timeout(Duration::from_secs(5))
            .build()
            .map_err(|e| LlmError::HttpError {
                status: 0,
                body: format!("Failed to create HTTP client: {}", e),
            })?;

        Ok(Self {
            http_client,
            api_key,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// Build the chat-completions endpoint URL
    fn build_endpoint_url(&self) -> String {
        format!("{}/chat/completions", self.base_url)
    }

    /// Turn a non-2xx response into the matching error
    async fn error_from_response(response: Response) -> LlmError {
        let status = response.status();
        let retry_after = response
            .headers()
            .get(RETRY_AFTER)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.trim().parse::<u64>().ok())
            .map(Duration::from_secs);
        let body = response.text().await.unwrap_or_default();
        let parsed = serde_json::from_str::<GroqErrorResponse>(&body).ok();

        match status {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => LlmError::AuthenticationError(
                parsed.map(|p| p.error.message).unwrap_or(body),
            ),
            StatusCode::TOO_MANY_REQUESTS => LlmError::RateLimitExceeded { retry_after },
            _ => match parsed {
                Some(p) => LlmError::ProviderError {
                    code: p
                        .error
                        .code
                        .or(p.error.error_type)
                        .unwrap_or_else(|| status.as_u16().to_string()),
                    message: p.error.message,
                },
                None => LlmError::HttpError {
                    status: status.as_u16(),
                    body,
                },
            },
        }
    }
}

#[async_trait]
impl LlmProvider for GroqClient {
    async fn generate(&self, request: GenerateRequest) -> Result<GenerateResponse, LlmError> {
        if request.messages.is_empty() {
            return Err(LlmError::InvalidRequest(
                "at least one message is required".to_string(),
            ));
        }

        let groq_request = to_groq_request(request);

        let response = self
            .http_client
            .post(self.build_endpoint_url())
            .bearer_auth(&self.api_key)
            .json(&groq_request)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Self::error_from_response(response).await);
        }

        let body = response.text().await?;
        let completion: ChatCompletionResponse = serde_json::from_str(&body)?;
        from_groq_response(completion)
    }
}
