//! Transaction support over a single pooled connection
//!
//! # Example
//!
//! ```no_run
//! use edubot::db::{operations, Database, DbConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let db = Database::connect(DbConfig::default()).await?;
//!
//!     let txn = db.begin_transaction().await?;
//!     if !operations::username_exists(txn.connection()?, "ada").await? {
//!         operations::insert_user(txn.connection()?, "ada", "lovelace").await?;
//!     }
//!     txn.commit().await?;
//!     Ok(())
//! }
//! ```

use deadpool_postgres::Object;
use tracing::warn;

use crate::db::error::{Error, Result};

/// A database transaction holding one pooled connection until it ends
///
/// The connection goes back to the pool when the transaction is committed
/// or rolled back. A transaction dropped while still open detaches its
/// connection from the pool instead; closing that connection makes the
/// server abort the transaction.
pub struct Transaction {
    connection: Option<Object>,
    in_transaction: bool,
}

impl Transaction {
    /// Begin a new transaction on the given connection
    pub(crate) async fn begin(connection: Object) -> Result<Self> {
        connection
            .batch_execute("BEGIN")
            .await
            .map_err(|e| Error::TransactionError(format!("Failed to begin transaction: {:?}", e)))?;

        Ok(Self {
            connection: Some(connection),
            in_transaction: true,
        })
    }

    /// Connection to run statements on within this transaction
    ///
    /// # Errors
    ///
    /// * `Error::TransactionError` - If the transaction has already ended
    pub fn connection(&self) -> Result<&Object> {
        if !self.in_transaction {
            return Err(Error::TransactionError(
                "Transaction already completed".to_string(),
            ));
        }
        self.connection
            .as_ref()
            .ok_or_else(|| Error::TransactionError("No connection available".to_string()))
    }

    /// Commit the transaction
    pub async fn commit(mut self) -> Result<()> {
        self.finish("COMMIT").await
    }

    /// Rollback the transaction
    pub async fn rollback(mut self) -> Result<()> {
        self.finish("ROLLBACK").await
    }

    async fn finish(&mut self, statement: &str) -> Result<()> {
        if !self.in_transaction {
            return Ok(());
        }
        if let Some(conn) = &self.connection {
            conn.batch_execute(statement).await.map_err(|e| {
                Error::TransactionError(format!("Failed to {} transaction: {:?}", statement, e))
            })?;
        }
        self.in_transaction = false;
        Ok(())
    }
}

impl Drop for Transaction {
    fn drop(&mut self) {
        if !self.in_transaction {
            return;
        }
        if let Some(conn) = self.connection.take() {
            // Never recycle a connection with an open transaction
            warn!("Transaction dropped while open; discarding its connection");
            drop(Object::take(conn));
        }
    }
}
