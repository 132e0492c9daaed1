//! PostgreSQL persistence for chat history and user accounts
//!
//! The tables are expected to exist already:
//!
//! ```sql
//! CREATE TABLE chat_history (
//!     id         BIGSERIAL PRIMARY KEY,
//!     user_id    TEXT NOT NULL,
//!     message    TEXT NOT NULL,
//!     subject    TEXT NOT NULL DEFAULT 'general',
//!     response   TEXT,
//!     created_at TIMESTAMPTZ NOT NULL DEFAULT now()
//! );
//!
//! CREATE TABLE users (
//!     id         BIGSERIAL PRIMARY KEY,
//!     username   TEXT NOT NULL UNIQUE,
//!     password   TEXT NOT NULL,
//!     created_at TIMESTAMPTZ NOT NULL DEFAULT now()
//! );
//! ```

pub mod client;
pub mod connection;
pub mod error;
pub mod operations;
pub mod transaction;
pub mod types;

pub use client::Database;
pub use connection::DbConfig;
pub use error::{Error, Result};
pub use operations::HistoryOptions;
pub use transaction::Transaction;
pub use types::{ChatRecord, NewChatRecord, UserSummary};
