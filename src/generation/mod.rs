//! Question generation against an external LLM provider
//!
//! Split into three pieces:
//! - [`provider`]: low-level HTTP client for a single model attempt
//! - [`fallback`]: ordered-candidate fallback over model identifiers
//! - [`prompts`]: the interview-question prompt template
//!
//! The session only sees the [`QuestionGenerator`] trait, so tests drive it
//! with scripted generators instead of a network.

pub mod fallback;
pub mod prompts;
pub mod provider;

pub use fallback::{FallbackGenerator, RetryPolicy};
pub use provider::GeminiProvider;

use async_trait::async_trait;
use thiserror::Error;

/// Failure taxonomy for generation attempts
///
/// The session has no retry policy of its own beyond exposing a manual
/// retry, so every variant's message must make the cause legible to the
/// candidate-facing layer.
#[derive(Error, Debug)]
pub enum GenerationError {
    /// The credential was rejected by the provider
    #[error("Authentication failed: {0}")]
    Authentication(String),

    /// The model identifier is unknown or not supported for this credential
    #[error("Model '{model}' is not available: {message}")]
    ModelUnavailable { model: String, message: String },

    /// Quota or rate-limit condition
    #[error("Rate limited on model '{model}': {message}")]
    RateLimited { model: String, message: String },

    /// Network, timeout, or unexpected provider error
    #[error("Transport failure: {0}")]
    Transport(String),

    /// The call succeeded but returned no usable text
    #[error("Model '{0}' returned an empty response")]
    EmptyResponse(String),

    /// Every candidate model was tried and failed
    #[error("All {attempts} candidate models failed; last error: {last}")]
    Exhausted { attempts: usize, last: String },
}

impl GenerationError {
    /// Rate-limit failures are the only class retried on the same model
    pub fn is_rate_limited(&self) -> bool {
        matches!(self, GenerationError::RateLimited { .. })
    }
}

/// A single generation attempt against one named model
///
/// Implemented by the HTTP provider; mocked in fallback tests.
#[async_trait]
pub trait ModelProvider: Send + Sync {
    async fn generate(&self, model: &str, prompt: &str)
        -> Result<String, GenerationError>;
}

/// Prompt-in, questions-out seam between the session and the provider stack
#[async_trait]
pub trait QuestionGenerator: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String, GenerationError>;
}
