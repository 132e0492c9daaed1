// POST /api/signup handler

use thiserror::Error;
use tracing::{error, info, warn};
use warp::{Rejection, Reply};

use crate::db::{self, operations, Database, Transaction};
use crate::error::ApiError;
use crate::models::{MessageResponse, SignupRequest};
use crate::state::AppState;

#[derive(Debug, Error)]
enum SignupError {
    #[error("username already exists")]
    Duplicate,

    #[error(transparent)]
    Database(db::Error),
}

// A unique violation anywhere in the transaction means the name was taken
impl From<db::Error> for SignupError {
    fn from(err: db::Error) -> Self {
        if err.is_unique_violation() {
            SignupError::Duplicate
        } else {
            SignupError::Database(err)
        }
    }
}

/// Register a new account; the password is stored as given
pub async fn signup(state: &AppState, request: SignupRequest) -> Result<MessageResponse, ApiError> {
    info!(username = %request.username, "Signup attempt");

    match register(&state.db, &request).await {
        Ok(user_id) => {
            info!(user_id, username = %request.username, "User registered");
            Ok(MessageResponse {
                message: "User registered successfully".to_string(),
            })
        }
        Err(SignupError::Duplicate) => {
            warn!(username = %request.username, "Username already exists");
            Err(ApiError::DuplicateUsername)
        }
        Err(SignupError::Database(e)) => {
            error!("Signup error: {}", e);
            Err(ApiError::Internal("Failed to register user"))
        }
    }
}

async fn register(db: &Database, request: &SignupRequest) -> Result<i64, SignupError> {
    let txn = db.begin_transaction().await?;

    match insert_if_absent(&txn, request).await {
        Ok(user_id) => {
            txn.commit().await?;
            Ok(user_id)
        }
        Err(e) => {
            if let Err(rollback_err) = txn.rollback().await {
                warn!("Signup rollback failed: {}", rollback_err);
            }
            Err(e)
        }
    }
}

async fn insert_if_absent(txn: &Transaction, request: &SignupRequest) -> Result<i64, SignupError> {
    let conn = txn.connection()?;

    if operations::username_exists(conn, &request.username).await? {
        return Err(SignupError::Duplicate);
    }

    Ok(operations::insert_user(conn, &request.username, &request.password).await?)
}

pub async fn signup_handler(state: AppState, request: SignupRequest) -> Result<impl Reply, Rejection> {
    signup(&state, request)
        .await
        .map(|response| warp::reply::json(&response))
        .map_err(warp::reject::custom)
}
