// HTTP server modules
pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod state;
pub mod telemetry;

// Chat history and user persistence
pub mod db;

// Model gateway
pub mod llm;
