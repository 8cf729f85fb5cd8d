//! TalentScout - Terminal Hiring Assistant
//!
//! A candidate-screening core built around two collaborating components:
//!
//! - **Screening session**: a linear state machine over the screening steps
//!   (greeting, info gathering, question generation, exit) that owns the
//!   candidate record and the memoized question set.
//! - **Model fallback client**: attempts an ordered list of model
//!   identifiers against the generation provider, returning the first
//!   success or an aggregated failure.
//!
//! The terminal front-end in [`ui`] is a thin rendering layer; all step
//! ordering, validation gates, and memoization live in [`session`].

pub mod cli;
pub mod config;
pub mod errors;
pub mod generation;
pub mod session;
pub mod ui;

// Re-export commonly used types
pub use errors::{Result, ScreenError};
pub use session::{ScreeningSession, ScreeningStep, UserAction};
