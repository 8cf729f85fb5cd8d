//! Command-line argument parsing for TalentScout
//!
//! Provides clap-based CLI with subcommands. The API credential comes from
//! `--api-key` or the GEMINI_API_KEY environment variable and is held for
//! the session only, never written to disk.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Environment variable consulted when --api-key is not given
pub const API_KEY_ENV: &str = "GEMINI_API_KEY";

/// TalentScout - terminal hiring assistant with LLM-generated screening questions
#[derive(Parser, Debug)]
#[command(name = "talentscout")]
#[command(version = "0.3.0")]
#[command(about = "Screen candidates and generate technical interview questions", long_about = None)]
pub struct Args {
    /// Gemini API key (falls back to GEMINI_API_KEY)
    #[arg(short = 'k', long)]
    pub api_key: Option<String>,

    /// Configuration file path
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Override the fallback model order (repeatable, tried in given order)
    #[arg(short, long = "model")]
    pub models: Vec<String>,

    /// Subcommand
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Display the effective configuration
    Config,

    /// Display the model fallback order
    Models,
}

impl Args {
    /// Resolve the credential: flag first, then environment
    pub fn resolve_api_key(&self) -> Option<String> {
        self.api_key
            .clone()
            .or_else(|| std::env::var(API_KEY_ENV).ok())
            .filter(|key| !key.trim().is_empty())
    }
}
