//! Prompt template for technical interview questions
//!
//! The prompt interpolates the candidate's tech stack, experience, and
//! desired position (when given) into a fixed recruiter template. The text
//! is opaque to the rest of the crate.

use crate::session::CandidateRecord;

/// Build the interview-question prompt for a validated candidate record
pub fn technical_questions_prompt(record: &CandidateRecord) -> String {
    let role_clause = if record.position.is_empty() {
        String::new()
    } else {
        format!(" applying for the role of {}", record.position)
    };

    format!(
        "You are a technical recruiter. Generate 3 to 5 challenging technical \
         interview questions for a candidate{} with {} years of experience \
         proficient in: {}. Format as a numbered list.",
        role_clause, record.years_experience, record.tech_stack
    )
}
