//! Live calls against the Groq API
//!
//! Run with `GROQ_API_KEY` set (a `.env` file works):
//! `cargo test --test groq_integration_test -- --ignored`

use std::sync::Arc;

use edubot::llm::{GroqClient, ModelGateway, DEFAULT_MODEL};

fn live_gateway() -> Option<ModelGateway> {
    dotenvy::dotenv().ok();
    let api_key = std::env::var("GROQ_API_KEY").ok()?;
    let base_url = std::env::var("GROQ_BASE_URL")
        .unwrap_or_else(|_| edubot::llm::groq::DEFAULT_BASE_URL.to_string());
    let client = GroqClient::new(api_key, base_url).ok()?;
    Some(ModelGateway::new(Arc::new(client)))
}

#[tokio::test]
#[ignore]
async fn test_live_completion() {
    let Some(gateway) = live_gateway() else {
        eprintln!("GROQ_API_KEY not set, skipping");
        return;
    };
    assert_eq!(gateway.model(), DEFAULT_MODEL);

    let answer = gateway
        .complete("Reply with the single word: pong")
        .await
        .expect("live completion failed");
    assert!(!answer.trim().is_empty());
}

#[tokio::test]
#[ignore]
async fn test_live_rejects_bad_key() {
    let client = GroqClient::new("gsk_definitely_not_valid", edubot::llm::groq::DEFAULT_BASE_URL)
        .unwrap();
    let result = ModelGateway::new(Arc::new(client)).complete("hi").await;
    assert!(result.is_err());
}
