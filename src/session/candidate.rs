//! Candidate record and form validation
//!
//! The record is written atomically: a raw [`CandidateSubmission`] is
//! validated against the active [`FieldPolicy`] and either becomes a full
//! [`CandidateRecord`] or is rejected without touching session state.

use crate::errors::{Result, ScreenError};
use serde::{Deserialize, Serialize};

/// Upper bound on years of experience when the config does not override it
pub const DEFAULT_MAX_YEARS: u32 = 50;

/// Fully validated candidate data, owned by the session
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateRecord {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub position: String,
    pub location: String,
    pub years_experience: u32,
    pub tech_stack: String,
}

impl CandidateRecord {
    /// True until the info form has been submitted and validated
    pub fn is_empty(&self) -> bool {
        *self == CandidateRecord::default()
    }

    /// True once the always-mandatory fields are populated
    pub fn is_complete(&self) -> bool {
        !self.full_name.trim().is_empty() && !self.tech_stack.trim().is_empty()
    }
}

/// Raw form input as entered by the candidate, prior to validation
#[derive(Debug, Clone, Default)]
pub struct CandidateSubmission {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub position: String,
    pub location: String,
    pub years_experience: u32,
    pub tech_stack: String,
}

impl CandidateSubmission {
    /// Validate against a policy, producing the record in one atomic step
    ///
    /// Name and tech stack are always mandatory; the rest of the field set
    /// is a policy choice. Reports every missing field at once rather than
    /// the first one found.
    pub fn validate(self, policy: &FieldPolicy) -> Result<CandidateRecord> {
        let mut missing = Vec::new();

        if self.full_name.trim().is_empty() {
            missing.push("full name".to_string());
        }
        if policy.require_email && self.email.trim().is_empty() {
            missing.push("email".to_string());
        }
        if policy.require_phone && self.phone.trim().is_empty() {
            missing.push("phone".to_string());
        }
        if policy.require_position && self.position.trim().is_empty() {
            missing.push("desired position".to_string());
        }
        if policy.require_location && self.location.trim().is_empty() {
            missing.push("location".to_string());
        }
        if self.tech_stack.trim().is_empty() {
            missing.push("tech stack".to_string());
        }

        if !missing.is_empty() {
            return Err(ScreenError::MissingFields { fields: missing });
        }

        if self.years_experience > policy.max_years_experience {
            return Err(ScreenError::InvalidField(format!(
                "years of experience must be between 0 and {}",
                policy.max_years_experience
            )));
        }

        Ok(CandidateRecord {
            full_name: self.full_name.trim().to_string(),
            email: self.email.trim().to_string(),
            phone: self.phone.trim().to_string(),
            position: self.position.trim().to_string(),
            location: self.location.trim().to_string(),
            years_experience: self.years_experience,
            tech_stack: self.tech_stack.trim().to_string(),
        })
    }
}

/// Which optional fields the info form treats as mandatory
///
/// Name and tech stack are not represented here: they gate the transition
/// in every variant of the flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldPolicy {
    pub require_email: bool,
    pub require_phone: bool,
    pub require_position: bool,
    pub require_location: bool,
    pub max_years_experience: u32,
}

impl Default for FieldPolicy {
    fn default() -> Self {
        Self {
            require_email: true,
            require_phone: false,
            require_position: false,
            require_location: false,
            max_years_experience: DEFAULT_MAX_YEARS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_submission() -> CandidateSubmission {
        CandidateSubmission {
            full_name: "Ada Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            phone: "+44 1234 567890".to_string(),
            position: "Backend Engineer".to_string(),
            location: "London".to_string(),
            years_experience: 5,
            tech_stack: "Python, SQL".to_string(),
        }
    }

    #[test]
    fn test_valid_submission() {
        let record = full_submission().validate(&FieldPolicy::default()).unwrap();
        assert_eq!(record.full_name, "Ada Lovelace");
        assert_eq!(record.years_experience, 5);
        assert!(record.is_complete());
        assert!(!record.is_empty());
    }

    #[test]
    fn test_name_and_tech_always_mandatory() {
        let lax = FieldPolicy {
            require_email: false,
            require_phone: false,
            require_position: false,
            require_location: false,
            max_years_experience: DEFAULT_MAX_YEARS,
        };

        let mut sub = full_submission();
        sub.full_name = "   ".to_string();
        sub.tech_stack = String::new();

        let err = sub.validate(&lax).unwrap_err();
        match err {
            ScreenError::MissingFields { fields } => {
                assert!(fields.contains(&"full name".to_string()));
                assert!(fields.contains(&"tech stack".to_string()));
            }
            other => panic!("Expected MissingFields, got {other:?}"),
        }
    }

    #[test]
    fn test_policy_gates_optional_fields() {
        let strict = FieldPolicy {
            require_email: true,
            require_phone: true,
            require_position: true,
            require_location: true,
            max_years_experience: DEFAULT_MAX_YEARS,
        };

        let mut sub = full_submission();
        sub.phone = String::new();
        sub.location = String::new();

        let err = sub.validate(&strict).unwrap_err();
        match err {
            ScreenError::MissingFields { fields } => {
                assert_eq!(fields, vec!["phone".to_string(), "location".to_string()]);
            }
            other => panic!("Expected MissingFields, got {other:?}"),
        }
    }

    #[test]
    fn test_optional_fields_skipped_when_not_required() {
        let mut sub = full_submission();
        sub.phone = String::new();
        sub.position = String::new();
        sub.location = String::new();

        // Default policy only adds email to the mandatory set
        assert!(sub.validate(&FieldPolicy::default()).is_ok());
    }

    #[test]
    fn test_experience_bound() {
        let mut sub = full_submission();
        sub.years_experience = 51;

        let err = sub.validate(&FieldPolicy::default()).unwrap_err();
        assert!(matches!(err, ScreenError::InvalidField(_)));
        assert!(err.to_string().contains("50"));
    }

    #[test]
    fn test_fields_trimmed_on_write() {
        let mut sub = full_submission();
        sub.full_name = "  Ada Lovelace  ".to_string();
        sub.tech_stack = " Rust ".to_string();

        let record = sub.validate(&FieldPolicy::default()).unwrap();
        assert_eq!(record.full_name, "Ada Lovelace");
        assert_eq!(record.tech_stack, "Rust");
    }

    #[test]
    fn test_empty_record_default() {
        let record = CandidateRecord::default();
        assert!(record.is_empty());
        assert!(!record.is_complete());
    }
}
