//! Command-line interface for TalentScout

pub mod args;

pub use args::{Args, Commands};
