use deadpool_postgres::Object;

use crate::db::{error::Result, types::UserSummary};

/// Check whether a username is already taken
pub async fn username_exists(conn: &Object, username: &str) -> Result<bool> {
    let stmt = conn
        .prepare_cached("SELECT id FROM users WHERE username = $1")
        .await?;

    Ok(conn.query_opt(&stmt, &[&username]).await?.is_some())
}

/// Insert a user account and return its assigned id
///
/// The password is stored exactly as given.
///
/// # Errors
///
/// * `Error::UniqueViolation` - If the username is already taken
pub async fn insert_user(conn: &Object, username: &str, password: &str) -> Result<i64> {
    let stmt = conn
        .prepare_cached(
            "INSERT INTO users (username, password, created_at) \
             VALUES ($1, $2, now()) RETURNING id",
        )
        .await?;

    let row = conn.query_one(&stmt, &[&username, &password]).await?;
    Ok(row.try_get(0)?)
}

/// Look up a user by exact username and password
pub async fn find_by_credentials(
    conn: &Object,
    username: &str,
    password: &str,
) -> Result<Option<UserSummary>> {
    let stmt = conn
        .prepare_cached("SELECT id, username FROM users WHERE username = $1 AND password = $2")
        .await?;

    match conn.query_opt(&stmt, &[&username, &password]).await? {
        Some(row) => Ok(Some(UserSummary {
            id: row.try_get("id")?,
            username: row.try_get("username")?,
        })),
        None => Ok(None),
    }
}
