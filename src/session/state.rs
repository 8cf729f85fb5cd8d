//! Screening step state machine
//!
//! Implements a deterministic finite state machine over the screening flow:
//! - Safety: no step is reachable without its guard (info submission is
//!   validated before question generation becomes reachable)
//! - Determinism: unique next step per (step, action) pair
//! - Linearity: steps advance strictly forward; the only backward edge is
//!   the full reset from Exit

use serde::{Deserialize, Serialize};

/// Steps of the screening session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScreeningStep {
    /// Initial step - welcome screen, waiting for the candidate to start
    Greeting,

    /// Candidate information form is being collected
    InfoGathering,

    /// Interview questions are generated and displayed
    QuestionGeneration,

    /// Exit screen - screening complete (terminal, except for restart)
    Exit,
}

/// User actions that drive step transitions
///
/// Carries no payload; the validated form payload travels through
/// [`crate::session::ScreeningSession::apply`] alongside the action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserAction {
    /// Candidate pressed start on the welcome screen
    Start,

    /// Candidate submitted the information form
    SubmitInfo,

    /// Candidate finished reviewing the generated questions
    Finish,

    /// Candidate asked for the question set to be regenerated
    RetryGeneration,

    /// Candidate restarted the whole screening from the exit screen
    Restart,
}

impl ScreeningStep {
    /// Check if this is the terminal step
    pub fn is_terminal(&self) -> bool {
        matches!(self, ScreeningStep::Exit)
    }

    /// Next step for a (step, action) pair, if the pair is valid
    ///
    /// Valid transitions (5 edges):
    /// 1. Greeting           → InfoGathering      (on: Start)
    /// 2. InfoGathering      → QuestionGeneration (on: SubmitInfo, guarded by
    ///    field validation in the session)
    /// 3. QuestionGeneration → QuestionGeneration (on: RetryGeneration)
    /// 4. QuestionGeneration → Exit               (on: Finish)
    /// 5. Exit               → Greeting           (on: Restart, full reset)
    ///
    /// Returns None for every other pair; the session turns that into an
    /// invalid-action error without mutating any state.
    pub fn next(&self, action: UserAction) -> Option<ScreeningStep> {
        use ScreeningStep::*;
        use UserAction::*;

        match (self, action) {
            (Greeting, Start) => Some(InfoGathering),
            (InfoGathering, SubmitInfo) => Some(QuestionGeneration),
            (QuestionGeneration, RetryGeneration) => Some(QuestionGeneration),
            (QuestionGeneration, Finish) => Some(Exit),
            (Exit, Restart) => Some(Greeting),
            _ => None,
        }
    }

    /// Actions accepted in this step
    pub fn valid_actions(&self) -> Vec<UserAction> {
        use ScreeningStep::*;
        use UserAction::*;

        match self {
            Greeting => vec![Start],
            InfoGathering => vec![SubmitInfo],
            QuestionGeneration => vec![RetryGeneration, Finish],
            Exit => vec![Restart],
        }
    }

    /// Human-readable step name
    pub fn display_name(&self) -> &'static str {
        match self {
            ScreeningStep::Greeting => "Welcome",
            ScreeningStep::InfoGathering => "Candidate Information",
            ScreeningStep::QuestionGeneration => "Technical Screening",
            ScreeningStep::Exit => "Screening Complete",
        }
    }
}

impl UserAction {
    /// Human-readable action name
    pub fn display_name(&self) -> &'static str {
        match self {
            UserAction::Start => "start",
            UserAction::SubmitInfo => "submit info",
            UserAction::Finish => "finish",
            UserAction::RetryGeneration => "retry generation",
            UserAction::Restart => "restart",
        }
    }
}
