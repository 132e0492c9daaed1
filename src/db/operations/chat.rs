use deadpool_postgres::Object;
use tokio_postgres::Row;

use crate::db::{
    error::{Error, Result},
    types::{ChatRecord, NewChatRecord},
};

/// Default cap on the number of history records returned
pub const DEFAULT_HISTORY_LIMIT: i64 = 50;

/// Options for reading chat history
#[derive(Debug, Clone)]
pub struct HistoryOptions {
    /// Only return records for this user; `None` returns every user's records
    pub user_id: Option<String>,

    /// Hard cap on the number of records
    pub limit: i64,
}

impl Default for HistoryOptions {
    fn default() -> Self {
        Self {
            user_id: None,
            limit: DEFAULT_HISTORY_LIMIT,
        }
    }
}

impl HistoryOptions {
    /// Create history options with no user filter and the default limit
    pub fn new() -> Self {
        Self::default()
    }

    /// Filter by user (builder pattern). An empty id means no filter.
    pub fn with_user_id(mut self, user_id: impl Into<String>) -> Self {
        let user_id = user_id.into();
        self.user_id = if user_id.is_empty() { None } else { Some(user_id) };
        self
    }

    /// Set the limit (builder pattern)
    pub fn with_limit(mut self, limit: i64) -> Self {
        self.limit = limit;
        self
    }
}

pub(crate) fn parse_chat_row(row: &Row) -> Result<ChatRecord> {
    Ok(ChatRecord {
        id: row.try_get("id")?,
        user_id: row.try_get("user_id")?,
        message: row.try_get("message")?,
        subject: row.try_get("subject")?,
        response: row.try_get("response")?,
        created_at: row.try_get("created_at")?,
    })
}

/// Insert a chat record with no response and return its assigned id
pub async fn insert_chat(conn: &Object, record: &NewChatRecord) -> Result<i64> {
    let stmt = conn
        .prepare_cached(
            "INSERT INTO chat_history (user_id, message, subject) \
             VALUES ($1, $2, $3) RETURNING id",
        )
        .await?;

    let row = conn
        .query_one(&stmt, &[&record.user_id, &record.message, &record.subject])
        .await?;

    Ok(row.try_get(0)?)
}

/// Store the model response for a previously inserted record
///
/// # Errors
///
/// * `Error::DatabaseError` - If no record has the given id
pub async fn set_chat_response(conn: &Object, id: i64, response: &str) -> Result<()> {
    let stmt = conn
        .prepare_cached("UPDATE chat_history SET response = $1 WHERE id = $2")
        .await?;

    let updated = conn.execute(&stmt, &[&response, &id]).await?;
    if updated == 0 {
        return Err(Error::DatabaseError(format!(
            "chat record {} disappeared before its response was stored",
            id
        )));
    }

    Ok(())
}

/// Fetch a single chat record by id
pub async fn get_chat(conn: &Object, id: i64) -> Result<Option<ChatRecord>> {
    let stmt = conn
        .prepare_cached(
            "SELECT id, user_id, message, subject, response, created_at \
             FROM chat_history WHERE id = $1",
        )
        .await?;

    conn.query_opt(&stmt, &[&id])
        .await?
        .as_ref()
        .map(parse_chat_row)
        .transpose()
}

/// Retrieve chat records, most recent first, capped at `options.limit`
///
/// Records sharing a timestamp are ordered by descending id so the
/// ordering is strict.
pub async fn get_chat_history(conn: &Object, options: &HistoryOptions) -> Result<Vec<ChatRecord>> {
    if options.limit < 0 {
        return Err(Error::ValidationError(format!(
            "limit must not be negative, got {}",
            options.limit
        )));
    }

    let stmt = conn
        .prepare_cached(
            "SELECT id, user_id, message, subject, response, created_at \
             FROM chat_history \
             WHERE ($1::TEXT IS NULL OR user_id = $1) \
             ORDER BY created_at DESC, id DESC \
             LIMIT $2",
        )
        .await?;

    let rows = conn
        .query(&stmt, &[&options.user_id, &options.limit])
        .await?;

    rows.iter().map(parse_chat_row).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_history_options_defaults() {
        let opts = HistoryOptions::new();
        assert_eq!(opts.user_id, None);
        assert_eq!(opts.limit, 50);
    }

    #[test]
    fn test_history_options_builder() {
        let opts = HistoryOptions::new().with_user_id("u1").with_limit(10);
        assert_eq!(opts.user_id, Some("u1".to_string()));
        assert_eq!(opts.limit, 10);
    }

    #[test]
    fn test_empty_user_id_means_no_filter() {
        let opts = HistoryOptions::new().with_user_id("");
        assert_eq!(opts.user_id, None);
    }
}
