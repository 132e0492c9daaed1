// Request and response bodies for the HTTP API

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::db::types::{UserSummary, DEFAULT_SUBJECT};

fn default_subject() -> String {
    DEFAULT_SUBJECT.to_string()
}

// POST /api/chat
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ChatMessage {
    pub content: String,
    #[serde(default = "default_subject")]
    pub subject: String,
    pub user_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatResponse {
    pub response: String,
    pub message_id: i64,
    /// When the response was built, not when the record was inserted
    pub timestamp: DateTime<Utc>,
}

// GET /api/chat/history
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct HistoryQuery {
    pub user_id: Option<String>,
    pub limit: Option<i64>,
}

// POST /api/signup
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct SignupRequest {
    pub username: String,
    pub password: String,
}

// POST /api/login
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub message: String,
    pub user: UserSummary,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chat_message_subject_defaults_to_general() {
        let json = r#"{"content":"2+2?","user_id":"u1"}"#;
        let message: ChatMessage = serde_json::from_str(json).unwrap();
        assert_eq!(message.content, "2+2?");
        assert_eq!(message.subject, "general");
        assert_eq!(message.user_id, "u1");
    }

    #[test]
    fn test_chat_message_with_subject() {
        let json = r#"{"content":"What is a noun?","subject":"english","user_id":"u2"}"#;
        let message: ChatMessage = serde_json::from_str(json).unwrap();
        assert_eq!(message.subject, "english");
    }

    #[test]
    fn test_chat_message_requires_user_id() {
        let json = r#"{"content":"hi"}"#;
        assert!(serde_json::from_str::<ChatMessage>(json).is_err());
    }

    #[test]
    fn test_chat_message_rejects_wrong_types() {
        let json = r#"{"content":42,"user_id":"u1"}"#;
        assert!(serde_json::from_str::<ChatMessage>(json).is_err());
    }

    #[test]
    fn test_chat_response_serialization() {
        let response = ChatResponse {
            response: "4".to_string(),
            message_id: 12,
            timestamp: Utc::now(),
        };
        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["response"], "4");
        assert_eq!(value["message_id"], 12);
        assert!(value["timestamp"].is_string());
    }

    #[test]
    fn test_login_response_shape() {
        let response = LoginResponse {
            message: "Login successful".to_string(),
            user: UserSummary {
                id: 3,
                username: "ada".to_string(),
            },
        };
        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["message"], "Login successful");
        assert_eq!(value["user"]["id"], 3);
        assert_eq!(value["user"]["username"], "ada");
    }

    #[test]
    fn test_signup_request_requires_password() {
        assert!(serde_json::from_str::<SignupRequest>(r#"{"username":"a"}"#).is_err());
        let request: SignupRequest =
            serde_json::from_str(r#"{"username":"a","password":"p"}"#).unwrap();
        assert_eq!(request.username, "a");
        assert_eq!(request.password, "p");
    }
}
