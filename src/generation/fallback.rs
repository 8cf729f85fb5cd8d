//! Ordered model fallback over a single provider
//!
//! Candidate models are attempted strictly in the configured order; the
//! first success wins and later candidates are never touched. Callers list
//! faster/newer identifiers first and broadly available ones last, so the
//! order must be preserved and no attempts may race in parallel.

use crate::generation::{GenerationError, ModelProvider, QuestionGenerator};
use async_trait::async_trait;
use std::time::Duration;

/// Same-model retry behavior for rate-limit failures
///
/// This is a narrow, flat-delay retry applied only to the rate-limit class;
/// every other failure moves straight to the next candidate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Extra attempts on the same model after a rate-limit failure
    pub rate_limit_retries: u32,
    /// Flat delay before each rate-limit retry
    pub retry_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            rate_limit_retries: 2,
            retry_delay: Duration::from_millis(1500),
        }
    }
}

impl RetryPolicy {
    /// Policy that never retries, useful where waiting is unacceptable
    pub fn none() -> Self {
        Self {
            rate_limit_retries: 0,
            retry_delay: Duration::ZERO,
        }
    }
}

/// First-success-wins generation over an ordered model list
pub struct FallbackGenerator<P: ModelProvider> {
    provider: P,
    models: Vec<String>,
    retry: RetryPolicy,
}

impl<P: ModelProvider> FallbackGenerator<P> {
    /// Create a fallback generator over the given candidate order
    pub fn new(provider: P, models: Vec<String>, retry: RetryPolicy) -> Self {
        Self {
            provider,
            models,
            retry,
        }
    }

    /// The configured candidate order
    pub fn models(&self) -> &[String] {
        &self.models
    }

    /// Attempt one model, retrying in place on rate limits only
    async fn attempt_model(&self, model: &str, prompt: &str) -> Result<String, GenerationError> {
        let mut last = self.provider.generate(model, prompt).await;

        let mut retries_left = self.retry.rate_limit_retries;
        while retries_left > 0 && matches!(&last, Err(e) if e.is_rate_limited()) {
            tokio::time::sleep(self.retry.retry_delay).await;
            last = self.provider.generate(model, prompt).await;
            retries_left -= 1;
        }

        last
    }
}

#[async_trait]
impl<P: ModelProvider> QuestionGenerator for FallbackGenerator<P> {
    async fn generate(&self, prompt: &str) -> Result<String, GenerationError> {
        let mut last_error: Option<GenerationError> = None;

        for model in &self.models {
            match self.attempt_model(model, prompt).await {
                Ok(text) => return Ok(text),
                Err(e) => last_error = Some(e),
            }
        }

        Err(GenerationError::Exhausted {
            attempts: self.models.len(),
            last: last_error
                .map(|e| e.to_string())
                .unwrap_or_else(|| "no candidate models configured".to_string()),
        })
    }
}
