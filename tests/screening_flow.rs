//! Integration tests for the TalentScout screening flow
//!
//! Drives full action sequences through the session with scripted
//! generators; no network or provider required.

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use talentscout::generation::fallback::{FallbackGenerator, RetryPolicy};
use talentscout::generation::{GenerationError, ModelProvider, QuestionGenerator};
use talentscout::session::{
    CandidateSubmission, FieldPolicy, ScreeningSession, ScreeningStep, UserAction,
};

/// Generator that always returns a fixed question list, counting calls
struct FixedGenerator {
    text: &'static str,
    calls: AtomicUsize,
}

impl FixedGenerator {
    fn new(text: &'static str) -> Self {
        Self {
            text,
            calls: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl QuestionGenerator for FixedGenerator {
    async fn generate(&self, _prompt: &str) -> Result<String, GenerationError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.text.to_string())
    }
}

/// Provider where only one named model works
struct SingleWorkingModel {
    working: &'static str,
    calls: Arc<Mutex<Vec<String>>>,
}

#[async_trait]
impl ModelProvider for SingleWorkingModel {
    async fn generate(&self, model: &str, _prompt: &str) -> Result<String, GenerationError> {
        self.calls.lock().unwrap().push(model.to_string());
        if model == self.working {
            Ok("1. What is a borrow checker?".to_string())
        } else {
            Err(GenerationError::ModelUnavailable {
                model: model.to_string(),
                message: "not found".to_string(),
            })
        }
    }
}

fn ada() -> CandidateSubmission {
    CandidateSubmission {
        full_name: "Ada".to_string(),
        email: "ada@example.com".to_string(),
        years_experience: 5,
        tech_stack: "Python, SQL".to_string(),
        ..CandidateSubmission::default()
    }
}

#[tokio::test]
async fn test_full_screening_run() {
    let mut session = ScreeningSession::new(FieldPolicy::default());
    let generator = FixedGenerator::new("1. Explain indexes.\n2. Explain GIL.");

    assert_eq!(session.step(), ScreeningStep::Greeting);

    session.apply(UserAction::Start).unwrap();
    session.submit_info(ada()).unwrap();
    assert_eq!(session.step(), ScreeningStep::QuestionGeneration);

    let outcome = session.ensure_questions(&generator).await.unwrap();
    assert!(outcome.display_text().contains("Explain indexes"));

    session.apply(UserAction::Finish).unwrap();
    assert_eq!(session.step(), ScreeningStep::Exit);
    // Exit screen still echoes the candidate
    assert_eq!(session.record().full_name, "Ada");

    session.apply(UserAction::Restart).unwrap();
    assert_eq!(session.step(), ScreeningStep::Greeting);
    assert!(session.record().is_empty());
    assert!(session.questions().is_none());
}

#[tokio::test]
async fn test_second_run_matches_fresh_session() {
    let mut session = ScreeningSession::new(FieldPolicy::default());
    let generator = FixedGenerator::new("run one questions");

    session.apply(UserAction::Start).unwrap();
    session.submit_info(ada()).unwrap();
    session.ensure_questions(&generator).await.unwrap();
    session.apply(UserAction::Finish).unwrap();
    session.apply(UserAction::Restart).unwrap();

    // No residual questions leak into the new run
    let second = FixedGenerator::new("run two questions");
    session.apply(UserAction::Start).unwrap();

    let mut submission = ada();
    submission.full_name = "Grace".to_string();
    session.submit_info(submission).unwrap();
    assert!(session.questions().is_none());

    let outcome = session.ensure_questions(&second).await.unwrap();
    assert_eq!(outcome.display_text(), "run two questions");
    assert_eq!(session.record().full_name, "Grace");
}

#[tokio::test]
async fn test_render_loop_never_duplicates_generation() {
    let mut session = ScreeningSession::new(FieldPolicy::default());
    let generator = FixedGenerator::new("questions");

    session.apply(UserAction::Start).unwrap();
    session.submit_info(ada()).unwrap();

    // Simulate repeated UI refreshes of the same step
    for _ in 0..5 {
        session.ensure_questions(&generator).await.unwrap();
    }
    assert_eq!(generator.calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_fallback_feeds_the_session() {
    let calls = Arc::new(Mutex::new(Vec::new()));
    let provider = SingleWorkingModel {
        working: "m2",
        calls: Arc::clone(&calls),
    };
    let generator = FallbackGenerator::new(
        provider,
        vec!["m1".to_string(), "m2".to_string(), "m3".to_string()],
        RetryPolicy::none(),
    );

    let mut session = ScreeningSession::new(FieldPolicy::default());
    session.apply(UserAction::Start).unwrap();
    session.submit_info(ada()).unwrap();

    let outcome = session.ensure_questions(&generator).await.unwrap();
    assert!(outcome.display_text().contains("borrow checker"));

    // First success wins: m3 is never attempted
    assert_eq!(*calls.lock().unwrap(), vec!["m1", "m2"]);
}

#[tokio::test]
async fn test_total_failure_surfaces_as_text_not_error() {
    struct AlwaysDown;

    #[async_trait]
    impl ModelProvider for AlwaysDown {
        async fn generate(&self, _model: &str, _prompt: &str) -> Result<String, GenerationError> {
            Err(GenerationError::Transport("connection refused".to_string()))
        }
    }

    let generator = FallbackGenerator::new(
        AlwaysDown,
        vec!["m1".to_string(), "m2".to_string()],
        RetryPolicy::none(),
    );

    let mut session = ScreeningSession::new(FieldPolicy::default());
    session.apply(UserAction::Start).unwrap();
    session.submit_info(ada()).unwrap();

    // Exhaustion is memoized as display text, not returned as Err
    let outcome = session.ensure_questions(&generator).await.unwrap();
    assert!(outcome.is_failure());
    assert!(outcome.display_text().contains("connection refused"));

    // And the session can still finish
    session.apply(UserAction::Finish).unwrap();
    assert_eq!(session.step(), ScreeningStep::Exit);
}

#[test]
fn test_mid_flow_restart_is_rejected() {
    let mut session = ScreeningSession::new(FieldPolicy::default());
    session.apply(UserAction::Start).unwrap();

    assert!(session.apply(UserAction::Restart).is_err());
    assert_eq!(session.step(), ScreeningStep::InfoGathering);
}

#[test]
fn test_strict_policy_blocks_partial_submission() {
    let strict = FieldPolicy {
        require_email: true,
        require_phone: true,
        require_position: true,
        require_location: true,
        max_years_experience: 50,
    };

    let mut session = ScreeningSession::new(strict);
    session.apply(UserAction::Start).unwrap();

    // ada() has no phone/position/location
    assert!(session.submit_info(ada()).is_err());
    assert_eq!(session.step(), ScreeningStep::InfoGathering);
    assert!(session.record().is_empty());
}
