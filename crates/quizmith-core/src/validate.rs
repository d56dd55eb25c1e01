//! Quiz authoring and submission validation.
//!
//! Validation failures are reported as structured issues; callers abort
//! the mutation when any issue is present, so no state changes on a
//! failed save or submit.

use crate::model::{QuestionType, Quiz};
use crate::scoring::Submission;

/// A single validation failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationIssue {
    /// The question ID (if applicable).
    pub question_id: Option<String>,
    /// Failure message.
    pub message: String,
}

impl ValidationIssue {
    fn quiz(message: impl Into<String>) -> Self {
        Self {
            question_id: None,
            message: message.into(),
        }
    }

    fn question(id: &str, message: impl Into<String>) -> Self {
        Self {
            question_id: Some(id.to_string()),
            message: message.into(),
        }
    }
}

/// Validate a quiz before it is stored.
///
/// An empty return value means the quiz is valid.
pub fn validate_quiz(quiz: &Quiz) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();

    if quiz.title.trim().is_empty() {
        issues.push(ValidationIssue::quiz("quiz title is empty"));
    }
    if quiz.questions.is_empty() {
        issues.push(ValidationIssue::quiz("quiz has no questions"));
    }

    let mut seen_ids = std::collections::HashSet::new();
    for question in &quiz.questions {
        if !seen_ids.insert(&question.id) {
            issues.push(ValidationIssue::question(
                &question.id,
                format!("duplicate question ID: {}", question.id),
            ));
        }

        if question.text.trim().is_empty() {
            issues.push(ValidationIssue::question(&question.id, "question text is empty"));
        }

        match question.question_type {
            QuestionType::MultipleChoice | QuestionType::Checkbox => {
                if question.answers.len() < 2 {
                    issues.push(ValidationIssue::question(
                        &question.id,
                        "choice question needs at least two answers",
                    ));
                }
                if !question.answers.iter().any(|a| a.is_correct) {
                    issues.push(ValidationIssue::question(
                        &question.id,
                        "no answer is marked correct",
                    ));
                }
            }
            QuestionType::OpenEnded => {
                if question
                    .correct_answer
                    .as_deref()
                    .is_none_or(|a| a.trim().is_empty())
                {
                    issues.push(ValidationIssue::question(
                        &question.id,
                        "open-ended question has no reference answer",
                    ));
                }
            }
            QuestionType::Satisfaction => {
                if question.answers.is_empty() {
                    issues.push(ValidationIssue::question(
                        &question.id,
                        "satisfaction question has no rating options",
                    ));
                }
            }
        }
    }

    issues
}

/// Validate a submission against the quiz it answers.
///
/// Every question, satisfaction included, must be answered.
pub fn validate_submission(quiz: &Quiz, submission: &Submission) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();

    for question in &quiz.questions {
        let answered = match question.question_type {
            QuestionType::OpenEnded => submission
                .text_answers
                .get(&question.id)
                .is_some_and(|t| !t.trim().is_empty()),
            _ => submission
                .selected
                .get(&question.id)
                .is_some_and(|s| !s.is_empty()),
        };
        if !answered {
            issues.push(ValidationIssue::question(&question.id, "question not answered"));
        }
    }

    for question_id in submission.selected.keys() {
        if !quiz.questions.iter().any(|q| &q.id == question_id) {
            issues.push(ValidationIssue::question(
                question_id,
                "answer references a question not in this quiz",
            ));
        }
    }

    issues
}
