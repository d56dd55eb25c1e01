//! Aggregate statistics across the stored results of a quiz.
//!
//! This is the data behind the results-analysis views: attempt counts,
//! score distribution, pass rate, and a per-question breakdown.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::model::{Quiz, QuizResult};

/// Aggregate statistics for one quiz.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizStats {
    /// The quiz these stats describe.
    pub quiz_id: String,
    /// Number of stored results.
    pub attempts: usize,
    /// Mean score percentage across attempts.
    pub mean_percentage: f64,
    /// Best score percentage across attempts.
    pub best_percentage: f64,
    /// Share of attempts at or above the pass threshold.
    pub pass_rate: f64,
    /// Per-question statistics keyed by question id.
    pub per_question: HashMap<String, QuestionStats>,
}

/// Statistics for a single question across all attempts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionStats {
    /// Question identifier.
    pub question_id: String,
    /// Times this question was answered fully correctly.
    pub correct_count: usize,
    /// Times this question appeared in a result.
    pub answered_count: usize,
    /// correct_count / answered_count.
    pub correct_rate: f64,
}

/// Compute aggregate statistics for a quiz from its stored results.
///
/// `pass_threshold` is a percentage in `0.0..=100.0`. Results are matched
/// by `quiz_id`; records for other quizzes are ignored.
pub fn compute_quiz_stats(quiz: &Quiz, results: &[QuizResult], pass_threshold: f64) -> QuizStats {
    let matching: Vec<&QuizResult> = results.iter().filter(|r| r.quiz_id == quiz.id).collect();

    let attempts = matching.len();
    let percentages: Vec<f64> = matching.iter().map(|r| r.percentage()).collect();

    let mean_percentage = if attempts == 0 {
        0.0
    } else {
        percentages.iter().sum::<f64>() / attempts as f64
    };
    let best_percentage = percentages.iter().copied().fold(0.0, f64::max);
    let pass_rate = if attempts == 0 {
        0.0
    } else {
        percentages.iter().filter(|&&p| p >= pass_threshold).count() as f64 / attempts as f64
    };

    let mut per_question: HashMap<String, QuestionStats> = quiz
        .questions
        .iter()
        .map(|q| {
            (
                q.id.clone(),
                QuestionStats {
                    question_id: q.id.clone(),
                    correct_count: 0,
                    answered_count: 0,
                    correct_rate: 0.0,
                },
            )
        })
        .collect();

    for result in &matching {
        for record in &result.answers {
            // Answer records for questions since removed from the quiz
            // are skipped rather than counted.
            if let Some(stats) = per_question.get_mut(&record.question_id) {
                stats.answered_count += 1;
                if record.correct {
                    stats.correct_count += 1;
                }
            }
        }
    }
    for stats in per_question.values_mut() {
        if stats.answered_count > 0 {
            stats.correct_rate = stats.correct_count as f64 / stats.answered_count as f64;
        }
    }

    QuizStats {
        quiz_id: quiz.id.clone(),
        attempts,
        mean_percentage,
        best_percentage,
        pass_rate,
        per_question,
    }
}
