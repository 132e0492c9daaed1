//! Groq provider implementation
//!
//! Groq exposes an OpenAI-compatible chat-completions endpoint; this module
//! speaks that schema without streaming.

pub mod client;
pub mod mapper;
pub mod types;

pub use client::{GroqClient, DEFAULT_BASE_URL};
