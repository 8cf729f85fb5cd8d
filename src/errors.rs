//! Error types for the TalentScout screening core
//!
//! Provides error handling with context propagation. Provider-side failures
//! have their own taxonomy in [`crate::generation::GenerationError`]; this
//! type covers the session, configuration, and I/O layers.

use crate::generation::GenerationError;
use thiserror::Error;

/// Main error type for the screening session and its surroundings
#[derive(Error, Debug)]
pub enum ScreenError {
    /// A user action arrived in a step that does not accept it
    #[error("Action {action} is not valid in step {step}: {reason}")]
    InvalidAction {
        step: String,
        action: String,
        reason: String,
    },

    /// Mandatory candidate fields were left blank
    #[error("Missing mandatory fields: {}", fields.join(", "))]
    MissingFields { fields: Vec<String> },

    /// A candidate field value is out of bounds
    #[error("Invalid field value: {0}")]
    InvalidField(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Question generation errors
    #[error("Generation error: {0}")]
    Generation(#[from] GenerationError),

    /// I/O errors
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Result type alias for screening operations
pub type Result<T> = std::result::Result<T, ScreenError>;
