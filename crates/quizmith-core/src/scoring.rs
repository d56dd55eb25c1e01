//! The canonical scoring engine.
//!
//! One implementation, one policy: multiple-choice earns the correct
//! answer's points on an exact single selection, checkbox awards each
//! correct answer's points independently, open-ended does a trimmed
//! case-insensitive match, and satisfaction questions are never scored.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::model::{AnswerRecord, Participant, Question, QuestionType, Quiz, QuizResult};

/// One participant's raw answers to a quiz, prior to scoring.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Submission {
    /// Selected answer ids per question id (choice and satisfaction types).
    #[serde(default)]
    pub selected: HashMap<String, Vec<String>>,
    /// Free-text answers per question id (open-ended questions).
    #[serde(default)]
    pub text_answers: HashMap<String, String>,
    /// Who is submitting.
    pub participant: Participant,
    /// When the participant started the quiz.
    pub started_at: DateTime<Utc>,
}

/// Outcome of scoring a single question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionScore {
    /// Whether the question was answered fully correctly.
    pub correct: bool,
    /// Points earned.
    pub points: u32,
}

/// Score one question against a selection and/or free-text answer.
pub fn score_question(
    question: &Question,
    selected_ids: &[String],
    text_answer: Option<&str>,
) -> QuestionScore {
    match question.question_type {
        QuestionType::MultipleChoice => {
            // Exactly one selection is compared against the single correct
            // answer; anything else earns nothing.
            let [only] = selected_ids else {
                return QuestionScore {
                    correct: false,
                    points: 0,
                };
            };
            match question.answers.iter().find(|a| &a.id == only) {
                Some(answer) if answer.is_correct => QuestionScore {
                    correct: true,
                    points: answer.effective_points(),
                },
                _ => QuestionScore {
                    correct: false,
                    points: 0,
                },
            }
        }
        QuestionType::Checkbox => {
            let mut points = 0u32;
            let mut fully_correct = true;
            for answer in &question.answers {
                let picked = selected_ids.contains(&answer.id);
                if answer.is_correct && picked {
                    points += answer.effective_points();
                }
                if answer.is_correct != picked {
                    fully_correct = false;
                }
            }
            QuestionScore {
                correct: fully_correct,
                points,
            }
        }
        QuestionType::OpenEnded => {
            let matched = match (&question.correct_answer, text_answer) {
                (Some(reference), Some(given)) => {
                    given.trim().eq_ignore_ascii_case(reference.trim())
                }
                _ => false,
            };
            QuestionScore {
                correct: matched,
                points: if matched { question.points } else { 0 },
            }
        }
        // Survey answers are recorded but carry no score.
        QuestionType::Satisfaction => QuestionScore {
            correct: true,
            points: 0,
        },
    }
}

/// Score a full submission against a quiz, producing a stored result.
pub fn score_submission(quiz: &Quiz, submission: &Submission) -> QuizResult {
    let mut answers = Vec::with_capacity(quiz.questions.len());
    let mut total_points = 0u32;

    for question in &quiz.questions {
        let selected = submission
            .selected
            .get(&question.id)
            .map(Vec::as_slice)
            .unwrap_or_default();
        let text_answer = submission.text_answers.get(&question.id).map(String::as_str);

        let score = score_question(question, selected, text_answer);
        total_points += score.points;

        answers.push(AnswerRecord {
            question_id: question.id.clone(),
            selected_answer_ids: selected.to_vec(),
            text_answer: text_answer.map(str::to_string),
            correct: score.correct,
            points: score.points,
        });
    }

    QuizResult {
        id: Uuid::new_v4().to_string(),
        quiz_id: quiz.id.clone(),
        quiz_title: quiz.title.clone(),
        participant: submission.participant.clone(),
        answers,
        total_points,
        max_points: quiz.max_points(),
        started_at: submission.started_at,
        finished_at: Utc::now(),
    }
}
