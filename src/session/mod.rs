//! Screening session: the owned per-candidate state
//!
//! One `ScreeningSession` per candidate, driven by one action at a time.
//! Holds the current step, the candidate record, and the memoized question
//! set. Nothing here is shared across sessions; the caller owns the value.

pub mod candidate;
pub mod state;

pub use candidate::{CandidateRecord, CandidateSubmission, FieldPolicy};
pub use state::{ScreeningStep, UserAction};

use crate::errors::{Result, ScreenError};
use crate::generation::{prompts, QuestionGenerator};

/// Memoized outcome of the question-generation call
///
/// A failure is display text, not a session-fatal condition: the candidate
/// may retry or still finish the screening.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerationResult {
    /// The generated question list
    Questions(String),
    /// Human-readable failure cause
    Failed(String),
}

impl GenerationResult {
    /// The text to render for this outcome, success or not
    pub fn display_text(&self) -> &str {
        match self {
            GenerationResult::Questions(text) => text,
            GenerationResult::Failed(cause) => cause,
        }
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, GenerationResult::Failed(_))
    }
}

/// Per-candidate screening session
#[derive(Debug)]
pub struct ScreeningSession {
    step: ScreeningStep,
    record: CandidateRecord,
    questions: Option<GenerationResult>,
    policy: FieldPolicy,
}

impl ScreeningSession {
    /// Create a fresh session at the welcome step
    pub fn new(policy: FieldPolicy) -> Self {
        Self {
            step: ScreeningStep::Greeting,
            record: CandidateRecord::default(),
            questions: None,
            policy,
        }
    }

    /// Current step identifier, for the rendering layer
    pub fn step(&self) -> ScreeningStep {
        self.step
    }

    /// The candidate record, for display echoes
    pub fn record(&self) -> &CandidateRecord {
        &self.record
    }

    /// The cached question set, if generation has run since the last reset
    pub fn questions(&self) -> Option<&GenerationResult> {
        self.questions.as_ref()
    }

    /// Apply a payload-free user action
    ///
    /// Rejected actions leave the session untouched. Form submission goes
    /// through [`ScreeningSession::submit_info`] instead, since it carries
    /// the form payload and the validation gate.
    pub fn apply(&mut self, action: UserAction) -> Result<ScreeningStep> {
        if action == UserAction::SubmitInfo {
            return Err(self.invalid_action(action, "info submission requires the form payload"));
        }

        let next = self
            .step
            .next(action)
            .ok_or_else(|| self.invalid_action(action, "not accepted in this step"))?;

        match action {
            UserAction::RetryGeneration => {
                // Cache cleared; the next render re-triggers generation
                self.questions = None;
            }
            UserAction::Restart => {
                self.record = CandidateRecord::default();
                self.questions = None;
            }
            // Finish keeps the record so the exit screen can echo it
            _ => {}
        }

        self.step = next;
        Ok(next)
    }

    /// Submit the info-gathering form
    ///
    /// The guarded transition: validation failure keeps the step and the
    /// stored record exactly as they were. On success the record is written
    /// in one atomic update and any previously cached question set is
    /// dropped.
    pub fn submit_info(&mut self, submission: CandidateSubmission) -> Result<ScreeningStep> {
        let next = self
            .step
            .next(UserAction::SubmitInfo)
            .ok_or_else(|| self.invalid_action(UserAction::SubmitInfo, "the form is not open"))?;

        let record = submission.validate(&self.policy)?;

        self.record = record;
        self.questions = None;
        self.step = next;
        Ok(next)
    }

    /// Memoization guard for question generation
    ///
    /// Valid only in the question-generation step. Invokes the generator at
    /// most once per cache reset: a warm cache is returned as-is, so
    /// re-rendering the step never re-triggers the call. The outcome is
    /// stored before this returns, success and failure alike.
    pub async fn ensure_questions(
        &mut self,
        generator: &dyn QuestionGenerator,
    ) -> Result<&GenerationResult> {
        if self.step != ScreeningStep::QuestionGeneration {
            return Err(ScreenError::InvalidAction {
                step: self.step.display_name().to_string(),
                action: "generate questions".to_string(),
                reason: "generation only runs in the technical screening step".to_string(),
            });
        }

        if self.questions.is_none() {
            let prompt = prompts::technical_questions_prompt(&self.record);
            let outcome = match generator.generate(&prompt).await {
                Ok(text) => GenerationResult::Questions(text),
                Err(e) => GenerationResult::Failed(e.to_string()),
            };
            self.questions = Some(outcome);
        }

        Ok(self.questions.as_ref().expect("cache populated above"))
    }

    fn invalid_action(&self, action: UserAction, reason: &str) -> ScreenError {
        ScreenError::InvalidAction {
            step: self.step.display_name().to_string(),
            action: action.display_name().to_string(),
            reason: reason.to_string(),
        }
    }
}

impl Default for ScreeningSession {
    fn default() -> Self {
        Self::new(FieldPolicy::default())
    }
}
