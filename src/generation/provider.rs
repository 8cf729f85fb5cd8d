//! Gemini API client for single-model generation attempts
//!
//! Low-level HTTP client for POST /v1beta/models/{model}:generateContent.
//! One call per attempt; the fallback loop above decides which model to try
//! next. Status classification and response parsing are free functions so
//! they test without a network.

use crate::generation::{GenerationError, ModelProvider};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default Gemini API endpoint
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Default sampling temperature
pub const DEFAULT_TEMPERATURE: f64 = 0.7;

/// HTTP client for the Gemini generateContent API
pub struct GeminiProvider {
    client: Client,
    base_url: String,
    api_key: String,
    temperature: f64,
}

impl GeminiProvider {
    /// Create a provider with default endpoint and timeout
    pub fn new(api_key: String) -> Result<Self, GenerationError> {
        Self::with_config(api_key, DEFAULT_BASE_URL, 60, DEFAULT_TEMPERATURE)
    }

    /// Create a provider with custom endpoint, timeout, and temperature
    pub fn with_config(
        api_key: String,
        base_url: &str,
        timeout_secs: u64,
        temperature: f64,
    ) -> Result<Self, GenerationError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .map_err(|e| GenerationError::Transport(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
            temperature,
        })
    }

    /// Endpoint URL for a given model identifier
    fn generate_url(&self, model: &str) -> String {
        format!("{}/v1beta/models/{}:generateContent", self.base_url, model)
    }
}

#[async_trait]
impl ModelProvider for GeminiProvider {
    async fn generate(&self, model: &str, prompt: &str) -> Result<String, GenerationError> {
        let request = GenerateRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
            generation_config: GenerationConfig {
                temperature: self.temperature,
            },
        };

        let response = self
            .client
            .post(self.generate_url(model))
            .header("x-goog-api-key", &self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    GenerationError::Transport(format!("Request to '{model}' timed out: {e}"))
                } else {
                    GenerationError::Transport(format!("Failed to reach provider: {e}"))
                }
            })?;

        let status = response.status().as_u16();

        if !(200..300).contains(&status) {
            let body = response.text().await.unwrap_or_default();
            return Err(classify_failure(model, status, &body));
        }

        let body: GenerateResponse = response
            .json()
            .await
            .map_err(|e| GenerationError::Transport(format!("Failed to parse response: {e}")))?;

        extract_text(&body).ok_or_else(|| GenerationError::EmptyResponse(model.to_string()))
    }
}

/// Map a non-success HTTP status onto the failure taxonomy
///
/// The error body is parsed for `error.message` when present; the raw body
/// is used otherwise so the cause is never silently dropped.
pub fn classify_failure(model: &str, status: u16, body: &str) -> GenerationError {
    let message = serde_json::from_str::<ErrorResponse>(body)
        .map(|e| e.error.message)
        .unwrap_or_else(|_| {
            if body.is_empty() {
                format!("HTTP {status}")
            } else {
                body.to_string()
            }
        });

    match status {
        400 | 401 | 403 => GenerationError::Authentication(message),
        404 => GenerationError::ModelUnavailable {
            model: model.to_string(),
            message,
        },
        429 => GenerationError::RateLimited {
            model: model.to_string(),
            message,
        },
        _ => GenerationError::Transport(format!("HTTP {status}: {message}")),
    }
}

/// Concatenate the text parts of the first candidate, if any
pub fn extract_text(response: &GenerateResponse) -> Option<String> {
    let candidate = response.candidates.first()?;
    let text: String = candidate
        .content
        .parts
        .iter()
        .filter_map(|p| p.text.as_deref())
        .collect::<Vec<_>>()
        .join("");

    if text.trim().is_empty() {
        None
    } else {
        Some(text)
    }
}

#[derive(Debug, Serialize)]
struct GenerateRequest {
    contents: Vec<Content>,
    #[serde(rename = "generationConfig")]
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
struct Part {
    text: String,
}

#[derive(Debug, Serialize)]
struct GenerationConfig {
    temperature: f64,
}

/// Gemini generateContent response
#[derive(Debug, Deserialize)]
pub struct GenerateResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
pub struct Candidate {
    pub content: CandidateContent,
}

#[derive(Debug, Deserialize)]
pub struct CandidateContent {
    #[serde(default)]
    pub parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
pub struct ResponsePart {
    pub text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorResponse {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}
