// POST /api/chat handler

use chrono::Utc;
use thiserror::Error;
use tracing::{error, info};
use warp::{Rejection, Reply};

use crate::db::{self, operations, NewChatRecord};
use crate::error::ApiError;
use crate::llm::LlmError;
use crate::models::{ChatMessage, ChatResponse};
use crate::state::AppState;

#[derive(Debug, Error)]
enum ChatError {
    #[error(transparent)]
    Database(#[from] db::Error),

    #[error(transparent)]
    Gateway(#[from] LlmError),
}

/// Store the message, ask the model, store the answer
///
/// The record is written before the model is called, so a failed call
/// leaves a record whose response stays null.
pub async fn chat(state: &AppState, message: ChatMessage) -> Result<ChatResponse, ApiError> {
    info!(
        user_id = %message.user_id,
        subject = %message.subject,
        "Received message from user"
    );

    process(state, message).await.map_err(|e| {
        error!("Chat error: {}", e);
        ApiError::Internal("Failed to process message")
    })
}

async fn process(state: &AppState, message: ChatMessage) -> Result<ChatResponse, ChatError> {
    let conn = state.db.acquire().await?;

    let record = NewChatRecord::new(message.user_id, message.content).with_subject(message.subject);
    let message_id = operations::insert_chat(&conn, &record).await?;

    let response = state.gateway.complete(&record.message).await?;

    operations::set_chat_response(&conn, message_id, &response).await?;

    Ok(ChatResponse {
        response,
        message_id,
        timestamp: Utc::now(),
    })
}

pub async fn chat_handler(state: AppState, message: ChatMessage) -> Result<impl Reply, Rejection> {
    chat(&state, message)
        .await
        .map(|response| warp::reply::json(&response))
        .map_err(warp::reject::custom)
}
