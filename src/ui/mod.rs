//! Terminal front-end for the screening flow
//!
//! Thin rendering and input layer over the session: rustyline for field
//! entry with interrupt handling, colored status lines, and an indicatif
//! spinner while generation is in flight. Holds no screening state of its
//! own; everything it shows comes from the session.

use crate::errors::ScreenError;
use crate::session::{CandidateRecord, CandidateSubmission, FieldPolicy, GenerationResult};
use anyhow::anyhow;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::time::Duration;

/// Console input/output for the screening session
pub struct ConsoleUi {
    editor: DefaultEditor,
}

impl ConsoleUi {
    pub fn new() -> anyhow::Result<Self> {
        Ok(Self {
            editor: DefaultEditor::new()?,
        })
    }

    /// Welcome banner shown in the greeting step
    pub fn show_banner(&self) {
        let width = 64;
        println!("\n{}", "=".repeat(width).cyan());
        println!("{}", "  TalentScout Hiring Assistant".bold().cyan());
        println!(
            "{}",
            "  Automated screening: basic info, then technical questions".dimmed()
        );
        println!("{}\n", "=".repeat(width).cyan());
    }

    /// Read one line; Ok(None) means EOF (Ctrl-D)
    pub fn read_line(&mut self, prompt: &str) -> anyhow::Result<Option<String>> {
        match self.editor.readline(prompt) {
            Ok(line) => Ok(Some(line.trim().to_string())),
            Err(ReadlineError::Eof) => Ok(None),
            Err(ReadlineError::Interrupted) => Err(anyhow!("Interrupted")),
            Err(err) => Err(anyhow!("Readline error: {}", err)),
        }
    }

    /// Read a labelled form field
    fn read_field(&mut self, label: &str, mandatory: bool) -> anyhow::Result<Option<String>> {
        let marker = if mandatory { "*" } else { " " };
        self.read_line(&format!("  {}{}: ", label, marker.red()))
    }

    /// Collect the info-gathering form
    ///
    /// Returns Ok(None) on EOF. Validation happens in the session, not
    /// here; this only gathers raw input.
    pub fn collect_info(&mut self, policy: &FieldPolicy) -> anyhow::Result<Option<CandidateSubmission>> {
        println!("\n{}", "Candidate Information".bold());
        println!(
            "{}",
            format!("  (fields marked {} are mandatory)", "*".red()).dimmed()
        );

        let Some(full_name) = self.read_field("Full Name", true)? else {
            return Ok(None);
        };
        let Some(email) = self.read_field("Email Address", policy.require_email)? else {
            return Ok(None);
        };
        let Some(phone) = self.read_field("Phone", policy.require_phone)? else {
            return Ok(None);
        };
        let Some(position) = self.read_field("Desired Position", policy.require_position)? else {
            return Ok(None);
        };
        let Some(location) = self.read_field("Location", policy.require_location)? else {
            return Ok(None);
        };
        let years_experience = loop {
            let Some(years_raw) = self.read_field("Years of Experience", true)? else {
                return Ok(None);
            };
            if years_raw.is_empty() {
                break 0;
            }
            match years_raw.parse::<u32>() {
                Ok(n) => break n,
                Err(_) => self.show_error("Years of experience must be a whole number."),
            }
        };

        let Some(tech_stack) =
            self.read_field("Tech Stack (e.g. Python, Django, AWS)", true)?
        else {
            return Ok(None);
        };

        Ok(Some(CandidateSubmission {
            full_name,
            email,
            phone,
            position,
            location,
            years_experience,
            tech_stack,
        }))
    }

    /// Spinner shown while the fallback client is in flight
    pub fn start_generation_spinner(&self) -> ProgressBar {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.cyan} {msg}")
                .unwrap(),
        );
        pb.set_message("Generating questions...");
        pb.enable_steady_tick(Duration::from_millis(100));
        pb
    }

    /// Render the memoized generation outcome
    pub fn show_questions(&self, record: &CandidateRecord, outcome: &GenerationResult) {
        println!(
            "\n{} {}",
            "Technical Screening for".bold(),
            record.full_name.bold().cyan()
        );

        match outcome {
            GenerationResult::Questions(text) => println!("\n{}\n", text),
            GenerationResult::Failed(cause) => {
                println!("\n{} {}", "Generation failed:".red(), cause);
                println!("{}", "You can retry, or finish the screening anyway.".dimmed());
            }
        }
    }

    pub fn show_exit(&self, record: &CandidateRecord) {
        println!(
            "\n{} {}",
            "✓".green(),
            format!("Screening complete for {}.", record.full_name).bold()
        );
        if !record.email.is_empty() {
            println!("{}", format!("  We will follow up at {}.", record.email).dimmed());
        }
    }

    pub fn show_error(&self, message: &str) {
        eprintln!("{} {}", "✗".red(), message);
    }

    pub fn show_screen_error(&self, err: &ScreenError) {
        self.show_error(&err.to_string());
    }

    pub fn show_info(&self, message: &str) {
        println!("{}", message.dimmed());
    }
}
