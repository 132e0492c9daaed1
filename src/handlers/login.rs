// POST /api/login handler

use tracing::{error, info, warn};
use warp::{Rejection, Reply};

use crate::error::ApiError;
use crate::models::{LoginRequest, LoginResponse};
use crate::state::AppState;

/// Exact match on username and plain-text password; no session is created
pub async fn login(state: &AppState, request: LoginRequest) -> Result<LoginResponse, ApiError> {
    match state.db.find_user(&request.username, &request.password).await {
        Ok(Some(user)) => {
            info!(user_id = user.id, username = %user.username, "Login successful");
            Ok(LoginResponse {
                message: "Login successful".to_string(),
                user,
            })
        }
        Ok(None) => {
            warn!(username = %request.username, "Invalid credentials");
            Err(ApiError::InvalidCredentials)
        }
        Err(e) => {
            error!("Login error: {}", e);
            Err(ApiError::Internal("Failed to login"))
        }
    }
}

pub async fn login_handler(state: AppState, request: LoginRequest) -> Result<impl Reply, Rejection> {
    login(&state, request)
        .await
        .map(|response| warp::reply::json(&response))
        .map_err(warp::reject::custom)
}
