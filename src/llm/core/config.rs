//! Generation configuration parameters

use serde::{Deserialize, Serialize};

/// Model every chat message is sent to
pub const DEFAULT_MODEL: &str = "llama3-8b-8192";

/// Sampling temperature used for chat completions
pub const DEFAULT_TEMPERATURE: f32 = 0.7;

/// Parameters for controlling text generation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationConfig {
    /// Maximum number of tokens to generate; `None` leaves it to the provider
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
    /// Randomness (0.0-2.0, higher = more random)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
    /// Nucleus sampling threshold
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_p: Option<f32>,
    /// Stop generation when these sequences are encountered
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stop_sequences: Option<Vec<String>>,
}

impl GenerationConfig {
    /// Create an empty configuration (provider defaults for everything)
    pub fn new() -> Self {
        Self {
            max_tokens: None,
            temperature: None,
            top_p: None,
            stop_sequences: None,
        }
    }

    /// Set the temperature
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }
}

/// Temperature 0.7, no token limit
impl Default for GenerationConfig {
    fn default() -> Self {
        Self::new().with_temperature(DEFAULT_TEMPERATURE)
    }
}
