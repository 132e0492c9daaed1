use std::fmt;

use tokio_postgres::error::SqlState;

/// Result type for database operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for database operations
#[derive(Debug)]
pub enum Error {
    /// Unique constraint violated (e.g. a username that already exists)
    UniqueViolation { constraint: Option<String> },

    /// Validation error - invalid input data
    ValidationError(String),

    /// Connection error - database unreachable or authentication failure
    ConnectionError(String),

    /// Database error - SQL errors, other constraint violations
    DatabaseError(String),

    /// Pool error - connection pool exhausted or closed
    PoolError(String),

    /// Transaction error - transaction-specific errors
    TransactionError(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::UniqueViolation { constraint } => write!(
                f,
                "Unique violation on constraint '{}'",
                constraint.as_deref().unwrap_or("unknown")
            ),
            Error::ValidationError(msg) => write!(f, "Validation error: {}", msg),
            Error::ConnectionError(msg) => write!(f, "Connection error: {}", msg),
            Error::DatabaseError(msg) => write!(f, "Database error: {}", msg),
            Error::PoolError(msg) => write!(f, "Pool error: {}", msg),
            Error::TransactionError(msg) => write!(f, "Transaction error: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

impl Error {
    /// True when the error was raised by a unique constraint
    pub fn is_unique_violation(&self) -> bool {
        matches!(self, Error::UniqueViolation { .. })
    }
}

/// Convert tokio-postgres errors to database errors
impl From<tokio_postgres::Error> for Error {
    fn from(err: tokio_postgres::Error) -> Self {
        if let Some(db_error) = err.as_db_error() {
            if db_error.code() == &SqlState::UNIQUE_VIOLATION {
                return Error::UniqueViolation {
                    constraint: db_error.constraint().map(str::to_string),
                };
            }

            return Error::DatabaseError(format!(
                "{}: {}",
                db_error.code().code(),
                db_error.message()
            ));
        }

        // For non-database errors, show the full error
        Error::DatabaseError(format!("{:?}", err))
    }
}

/// Convert deadpool errors to database errors
impl From<deadpool_postgres::PoolError> for Error {
    fn from(err: deadpool_postgres::PoolError) -> Self {
        Error::PoolError(err.to_string())
    }
}

/// Convert deadpool build errors to database errors
impl From<deadpool_postgres::BuildError> for Error {
    fn from(err: deadpool_postgres::BuildError) -> Self {
        Error::ConnectionError(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unique_violation_display() {
        let err = Error::UniqueViolation {
            constraint: Some("users_username_key".to_string()),
        };
        assert!(err.is_unique_violation());
        assert!(err.to_string().contains("users_username_key"));
    }

    #[test]
    fn test_unique_violation_without_constraint_name() {
        let err = Error::UniqueViolation { constraint: None };
        assert!(err.to_string().contains("unknown"));
    }

    #[test]
    fn test_other_errors_are_not_unique_violations() {
        assert!(!Error::PoolError("timed out".to_string()).is_unique_violation());
        assert!(!Error::DatabaseError("boom".to_string()).is_unique_violation());
    }

    #[test]
    fn test_error_display_prefixes() {
        assert_eq!(
            Error::ValidationError("bad limit".to_string()).to_string(),
            "Validation error: bad limit"
        );
        assert_eq!(
            Error::ConnectionError("refused".to_string()).to_string(),
            "Connection error: refused"
        );
        assert_eq!(
            Error::TransactionError("already completed".to_string()).to_string(),
            "Transaction error: already completed"
        );
    }
}
