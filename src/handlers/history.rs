// GET /api/chat/history handler

use tracing::error;
use warp::{Rejection, Reply};

use crate::db::{operations::DEFAULT_HISTORY_LIMIT, ChatRecord, HistoryOptions};
use crate::error::ApiError;
use crate::models::HistoryQuery;
use crate::state::AppState;

/// Most recent chat records first, optionally for one user only
pub async fn history(state: &AppState, query: HistoryQuery) -> Result<Vec<ChatRecord>, ApiError> {
    let limit = query.limit.unwrap_or(DEFAULT_HISTORY_LIMIT);
    if limit < 0 {
        return Err(ApiError::Validation("limit must not be negative".to_string()));
    }

    let mut options = HistoryOptions::new().with_limit(limit);
    if let Some(user_id) = query.user_id {
        options = options.with_user_id(user_id);
    }

    state.db.chat_history(&options).await.map_err(|e| {
        error!("History error: {}", e);
        ApiError::Internal("Failed to retrieve history")
    })
}

pub async fn history_handler(state: AppState, query: HistoryQuery) -> Result<impl Reply, Rejection> {
    history(&state, query)
        .await
        .map(|records| warp::reply::json(&records))
        .map_err(warp::reject::custom)
}
