//! Core data model types for quizmith.
//!
//! These are the fundamental types that the entire quizmith system uses
//! to represent quizzes, questions, participants, and scored results.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

fn generate_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

/// One selectable answer inside a question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Answer {
    /// Unique identifier within the owning question. Generated when an
    /// authored quiz file omits it.
    #[serde(default = "generate_id")]
    pub id: String,
    /// Display text.
    pub text: String,
    /// Whether selecting this answer is correct.
    #[serde(default)]
    pub is_correct: bool,
    /// Points awarded for this answer. When absent, correct answers are
    /// worth 1 point and incorrect answers 0.
    #[serde(default)]
    pub points: Option<u32>,
}

impl Answer {
    /// Points this answer is worth, applying the default policy.
    pub fn effective_points(&self) -> u32 {
        match self.points {
            Some(p) => p,
            None if self.is_correct => 1,
            None => 0,
        }
    }
}

/// How a question is answered and scored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum QuestionType {
    /// Exactly one answer may be selected; one answer is correct.
    MultipleChoice,
    /// Any subset of answers may be selected; each correct answer earns
    /// its own points.
    Checkbox,
    /// Free text, matched against a stored reference answer.
    OpenEnded,
    /// Survey rating; never scored.
    Satisfaction,
}

impl fmt::Display for QuestionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuestionType::MultipleChoice => write!(f, "multiple-choice"),
            QuestionType::Checkbox => write!(f, "checkbox"),
            QuestionType::OpenEnded => write!(f, "open-ended"),
            QuestionType::Satisfaction => write!(f, "satisfaction"),
        }
    }
}

impl FromStr for QuestionType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "multiple-choice" | "multiple_choice" => Ok(QuestionType::MultipleChoice),
            "checkbox" => Ok(QuestionType::Checkbox),
            "open-ended" | "open_ended" | "text" => Ok(QuestionType::OpenEnded),
            "satisfaction" => Ok(QuestionType::Satisfaction),
            other => Err(format!("unknown question type: {other}")),
        }
    }
}

/// A single prompt inside a quiz.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    /// Unique identifier within the owning quiz. Generated when an
    /// authored quiz file omits it.
    #[serde(default = "generate_id")]
    pub id: String,
    /// The prompt shown to the participant.
    pub text: String,
    /// How this question is answered and scored.
    #[serde(rename = "type")]
    pub question_type: QuestionType,
    /// Nominal points for this question. Used directly for open-ended
    /// scoring; choice types derive their maximum from their answers.
    #[serde(default = "default_question_points")]
    pub points: u32,
    /// Ordered answers. Empty for open-ended questions.
    #[serde(default)]
    pub answers: Vec<Answer>,
    /// Reference answer for open-ended questions.
    #[serde(default)]
    pub correct_answer: Option<String>,
    /// Optional illustration shown with the prompt.
    #[serde(default)]
    pub image_url: Option<String>,
}

fn default_question_points() -> u32 {
    1
}

impl Question {
    /// The maximum points obtainable on this question.
    ///
    /// Choice types sum the points of their correct answers; open-ended
    /// questions are worth their nominal points; satisfaction questions
    /// are never scored.
    pub fn max_points(&self) -> u32 {
        match self.question_type {
            QuestionType::MultipleChoice | QuestionType::Checkbox => self
                .answers
                .iter()
                .filter(|a| a.is_correct)
                .map(Answer::effective_points)
                .sum(),
            QuestionType::OpenEnded => self.points,
            QuestionType::Satisfaction => 0,
        }
    }
}

/// An ordered set of questions with a title.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quiz {
    /// Unique identifier. Generated when an authored quiz file omits it.
    #[serde(default = "generate_id")]
    pub id: String,
    /// Human-readable title.
    pub title: String,
    /// Optional cover image.
    #[serde(default)]
    pub image_url: Option<String>,
    /// The questions in this quiz, in presentation order.
    #[serde(default)]
    pub questions: Vec<Question>,
    /// When the quiz was created.
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
}

impl Quiz {
    /// Create an empty quiz with a fresh id and the current timestamp.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            title: title.into(),
            image_url: None,
            questions: Vec::new(),
            created_at: Utc::now(),
        }
    }

    /// The maximum points obtainable across all questions.
    pub fn max_points(&self) -> u32 {
        self.questions.iter().map(Question::max_points).sum()
    }
}

/// Identifying and attestation info attached to a result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    /// Participant name.
    pub name: String,
    /// Attestation date.
    pub date: DateTime<Utc>,
    /// Supervising instructor.
    #[serde(default)]
    pub instructor: String,
    /// Embedded signature image as a data URL.
    #[serde(default)]
    pub signature: Option<String>,
}

/// The scored record of one question within a result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerRecord {
    /// The question this record answers.
    pub question_id: String,
    /// Selected answer ids (empty for open-ended questions).
    #[serde(default)]
    pub selected_answer_ids: Vec<String>,
    /// Free-text answer (open-ended questions only).
    #[serde(default)]
    pub text_answer: Option<String>,
    /// Whether the question was answered fully correctly.
    pub correct: bool,
    /// Points earned on this question.
    pub points: u32,
}

/// A scored record of one participant's submission against one quiz.
///
/// `quiz_id` is a soft reference: a result may outlive its quiz, which is
/// why `quiz_title` is carried as a denormalized snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizResult {
    /// Unique identifier.
    pub id: String,
    /// The quiz this result was scored against.
    pub quiz_id: String,
    /// Title of the quiz at submission time.
    pub quiz_title: String,
    /// Who took the quiz.
    pub participant: Participant,
    /// Per-question records, in quiz order.
    pub answers: Vec<AnswerRecord>,
    /// Points earned across all questions.
    pub total_points: u32,
    /// Maximum obtainable points. Always >= `total_points`.
    pub max_points: u32,
    /// When the participant started.
    pub started_at: DateTime<Utc>,
    /// When the submission was scored.
    pub finished_at: DateTime<Utc>,
}

impl QuizResult {
    /// Score as a percentage of the maximum, 0.0 when nothing was scorable.
    pub fn percentage(&self) -> f64 {
        if self.max_points == 0 {
            0.0
        } else {
            self.total_points as f64 / self.max_points as f64 * 100.0
        }
    }
}
