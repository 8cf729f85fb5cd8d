//! Configuration management for TalentScout
//!
//! Provides TOML-based configuration with defaults and validation.
//! Location: ~/.talentscout/config.toml
//!
//! The fallback model order lives here rather than in code: callers tune
//! the sequence (fast/cheap first, broadly available last) without
//! touching the client. The API credential is never part of the file.

use crate::errors::{Result, ScreenError};
use crate::generation::fallback::RetryPolicy;
use crate::generation::provider::{DEFAULT_BASE_URL, DEFAULT_TEMPERATURE};
use crate::session::FieldPolicy;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Complete configuration for TalentScout
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub provider: ProviderConfig,
    pub fallback: FallbackConfig,
    pub screening: ScreeningConfig,
}

/// Generation provider connection configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderConfig {
    pub base_url: String,
    pub timeout_secs: u64,
    pub temperature: f64,
}

/// Ordered model fallback configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FallbackConfig {
    /// Candidate model identifiers, attempted strictly in this order
    pub models: Vec<String>,
    /// Extra same-model attempts after a rate-limit failure
    pub rate_limit_retries: u32,
    /// Flat delay before each rate-limit retry, in milliseconds
    pub retry_delay_ms: u64,
}

/// Info-form field requirements
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScreeningConfig {
    pub require_email: bool,
    pub require_phone: bool,
    pub require_position: bool,
    pub require_location: bool,
    pub max_years_experience: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            provider: ProviderConfig::default(),
            fallback: FallbackConfig::default(),
            screening: ScreeningConfig::default(),
        }
    }
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: 60,
            temperature: DEFAULT_TEMPERATURE,
        }
    }
}

impl Default for FallbackConfig {
    fn default() -> Self {
        Self {
            models: vec![
                "gemini-1.5-flash".to_string(),
                "gemini-1.5-flash-8b".to_string(),
                "gemini-1.5-pro".to_string(),
                "gemini-pro".to_string(),
            ],
            rate_limit_retries: 2,
            retry_delay_ms: 1500,
        }
    }
}

impl Default for ScreeningConfig {
    fn default() -> Self {
        Self {
            require_email: true,
            require_phone: false,
            require_position: false,
            require_location: false,
            max_years_experience: 50,
        }
    }
}

impl Config {
    /// Load configuration from file or use defaults
    pub fn load(path: Option<PathBuf>) -> Result<Self> {
        if let Some(config_path) = path {
            Self::load_from_file(&config_path)
        } else {
            Self::load_default()
        }
    }

    /// Load configuration from specific file
    pub fn load_from_file(path: &PathBuf) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ScreenError::ConfigError(format!("Failed to read config: {}", e)))?;

        let config: Config = toml::from_str(&contents)
            .map_err(|e| ScreenError::ConfigError(format!("Failed to parse config: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Load default configuration from standard location or use built-in defaults
    pub fn load_default() -> Result<Self> {
        if let Some(home) = dirs::home_dir() {
            let config_path = home.join(".talentscout").join("config.toml");
            if config_path.exists() {
                return Self::load_from_file(&config_path);
            }
        }

        Ok(Config::default())
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.fallback.models.is_empty() {
            return Err(ScreenError::ConfigError(
                "fallback.models must list at least one model identifier".to_string(),
            ));
        }

        if self.fallback.models.iter().any(|m| m.trim().is_empty()) {
            return Err(ScreenError::ConfigError(
                "fallback.models must not contain blank identifiers".to_string(),
            ));
        }

        if self.provider.timeout_secs == 0 {
            return Err(ScreenError::ConfigError(
                "provider.timeout_secs must be greater than 0".to_string(),
            ));
        }

        if !(0.0..=2.0).contains(&self.provider.temperature) {
            return Err(ScreenError::ConfigError(
                "provider.temperature must be between 0.0 and 2.0".to_string(),
            ));
        }

        if self.screening.max_years_experience == 0 {
            return Err(ScreenError::ConfigError(
                "screening.max_years_experience must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }

    /// Save configuration to file
    pub fn save(&self, path: &PathBuf) -> Result<()> {
        let contents = toml::to_string_pretty(self)
            .map_err(|e| ScreenError::ConfigError(format!("Failed to serialize config: {}", e)))?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                ScreenError::ConfigError(format!("Failed to create config dir: {}", e))
            })?;
        }

        std::fs::write(path, contents)
            .map_err(|e| ScreenError::ConfigError(format!("Failed to write config: {}", e)))?;

        Ok(())
    }

    /// Field policy for the info-gathering form
    pub fn field_policy(&self) -> FieldPolicy {
        FieldPolicy {
            require_email: self.screening.require_email,
            require_phone: self.screening.require_phone,
            require_position: self.screening.require_position,
            require_location: self.screening.require_location,
            max_years_experience: self.screening.max_years_experience,
        }
    }

    /// Same-model retry policy for rate-limit failures
    pub fn retry_policy(&self) -> RetryPolicy {
        RetryPolicy {
            rate_limit_retries: self.fallback.rate_limit_retries,
            retry_delay: Duration::from_millis(self.fallback.retry_delay_ms),
        }
    }
}
