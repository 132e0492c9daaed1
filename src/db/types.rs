use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Subject used when a chat message does not name one
pub const DEFAULT_SUBJECT: &str = "general";

/// A chat message to insert; the response is filled in later
#[derive(Debug, Clone, PartialEq)]
pub struct NewChatRecord {
    /// Caller-supplied user identifier
    pub user_id: String,

    /// Raw user message
    pub message: String,

    /// Subject tag
    pub subject: String,
}

impl NewChatRecord {
    /// Create a new record with the default subject
    ///
    /// # Example
    ///
    /// ```
    /// use edubot::db::types::NewChatRecord;
    ///
    /// let record = NewChatRecord::new("u1", "2+2?").with_subject("math");
    /// assert_eq!(record.subject, "math");
    /// ```
    pub fn new(user_id: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            message: message.into(),
            subject: DEFAULT_SUBJECT.to_string(),
        }
    }

    /// Set the subject (builder pattern)
    pub fn with_subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = subject.into();
        self
    }
}

/// A stored chat record, as returned by the history endpoint
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChatRecord {
    pub id: i64,
    pub user_id: String,
    pub message: String,
    pub subject: String,
    /// `None` until the model gateway has answered
    pub response: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Public view of a user account (never carries the password)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserSummary {
    pub id: i64,
    pub username: String,
}
