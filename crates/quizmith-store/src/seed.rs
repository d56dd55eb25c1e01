//! The demonstration quiz seeded into an empty store.

use quizmith_core::model::{Answer, Question, QuestionType, Quiz};

fn answer(id: &str, text: &str, is_correct: bool, points: Option<u32>) -> Answer {
    Answer {
        id: id.to_string(),
        text: text.to_string(),
        is_correct,
        points,
    }
}

/// Build the sample quiz shown on first run. Covers every question type
/// so a fresh install demonstrates the full scoring policy.
pub fn demo_quiz() -> Quiz {
    let mut quiz = Quiz::new("Getting Started with quizmith");
    quiz.questions = vec![
        Question {
            id: "demo-capital".into(),
            text: "What is the capital of France?".into(),
            question_type: QuestionType::MultipleChoice,
            points: 1,
            answers: vec![
                answer("demo-capital-paris", "Paris", true, Some(2)),
                answer("demo-capital-lyon", "Lyon", false, None),
                answer("demo-capital-marseille", "Marseille", false, None),
            ],
            correct_answer: None,
            image_url: None,
        },
        Question {
            id: "demo-primes".into(),
            text: "Select all prime numbers.".into(),
            question_type: QuestionType::Checkbox,
            points: 1,
            answers: vec![
                answer("demo-primes-2", "2", true, Some(1)),
                answer("demo-primes-3", "3", true, Some(1)),
                answer("demo-primes-4", "4", false, None),
                answer("demo-primes-5", "5", true, Some(1)),
            ],
            correct_answer: None,
            image_url: None,
        },
        Question {
            id: "demo-ocean".into(),
            text: "Name the largest ocean on Earth.".into(),
            question_type: QuestionType::OpenEnded,
            points: 2,
            answers: vec![],
            correct_answer: Some("Pacific".into()),
            image_url: None,
        },
        Question {
            id: "demo-feedback".into(),
            text: "How did you find this quiz?".into(),
            question_type: QuestionType::Satisfaction,
            points: 0,
            answers: vec![
                answer("demo-feedback-1", "Too easy", false, None),
                answer("demo-feedback-2", "Just right", false, None),
                answer("demo-feedback-3", "Too hard", false, None),
            ],
            correct_answer: None,
            image_url: None,
        },
    ];
    quiz
}

#[cfg(test)]
mod tests {
    use super::*;
    use quizmith_core::validate::validate_quiz;

    #[test]
    fn demo_quiz_is_valid() {
        let quiz = demo_quiz();
        assert!(validate_quiz(&quiz).is_empty(), "{:?}", validate_quiz(&quiz));
    }

    #[test]
    fn demo_quiz_max_points() {
        // 2 (multiple-choice) + 3 (checkbox) + 2 (open-ended) + 0 (survey)
        assert_eq!(demo_quiz().max_points(), 7);
    }
}
