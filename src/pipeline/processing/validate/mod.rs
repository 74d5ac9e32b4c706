use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::common::constants::{MIN_CONTENT_CHARS, MIN_TITLE_CHARS, RATING_MAX};

/// Fields of the submission form that a validation issue can attach to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubmissionField {
    Rating,
    Title,
    Content,
}

/// A single field-level validation failure, phrased for display next to
/// the offending form field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationIssue {
    pub field: SubmissionField,
    pub message: String,
}

/// All field-level failures collected from one rejected submission.
///
/// Issues are gathered across every field in one pass so the form can
/// show them all at once instead of surfacing one failure per attempt.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("submission failed validation with {} issue(s)", .issues.len())]
pub struct ValidationError {
    pub issues: Vec<ValidationIssue>,
}

impl ValidationError {
    /// Build an error carrying a single field-level issue
    pub fn single(field: SubmissionField, message: impl Into<String>) -> Self {
        Self {
            issues: vec![ValidationIssue {
                field,
                message: message.into(),
            }],
        }
    }
}

/// Form input for a locally authored review, prior to validation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmissionInput {
    pub rating: u8,
    pub title: String,
    pub content: String,
}

/// Configuration for submission validation rules
#[derive(Debug, Clone)]
pub struct ValidationConfig {
    /// Minimum review body length, in characters
    pub min_content_chars: usize,
    /// Minimum title length, in characters
    pub min_title_chars: usize,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            min_content_chars: MIN_CONTENT_CHARS,
            min_title_chars: MIN_TITLE_CHARS,
        }
    }
}

/// Validates local submissions before they may enter the feed.
///
/// Length minimums count characters, not bytes, so multi-byte input is
/// measured the way the person typing it would count it.
pub struct SubmissionValidator {
    config: ValidationConfig,
}

impl SubmissionValidator {
    /// Create a validator with the default rules
    pub fn new() -> Self {
        Self {
            config: ValidationConfig::default(),
        }
    }

    /// Create a validator with custom rules
    pub fn with_config(config: ValidationConfig) -> Self {
        Self { config }
    }

    /// Check a submission against every rule, collecting all failures
    pub fn validate(&self, input: &SubmissionInput) -> Result<(), ValidationError> {
        let mut issues = Vec::new();

        if input.rating == 0 {
            issues.push(ValidationIssue {
                field: SubmissionField::Rating,
                message: "Please select a rating".to_string(),
            });
        } else if input.rating > RATING_MAX {
            issues.push(ValidationIssue {
                field: SubmissionField::Rating,
                message: format!("Rating must be between 1 and {}", RATING_MAX),
            });
        }

        if input.title.chars().count() < self.config.min_title_chars {
            issues.push(ValidationIssue {
                field: SubmissionField::Title,
                message: format!(
                    "Title must be at least {} characters long.",
                    self.config.min_title_chars
                ),
            });
        }

        if input.content.chars().count() < self.config.min_content_chars {
            issues.push(ValidationIssue {
                field: SubmissionField::Content,
                message: format!(
                    "Review must be at least {} characters long.",
                    self.config.min_content_chars
                ),
            });
        }

        if issues.is_empty() {
            Ok(())
        } else {
            Err(ValidationError { issues })
        }
    }
}

impl Default for SubmissionValidator {
    fn default() -> Self {
        Self::new()
    }
}
