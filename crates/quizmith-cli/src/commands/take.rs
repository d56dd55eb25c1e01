//! The `quizmith take` command.
//!
//! Scores an answers file against a quiz and stores the result. The
//! submission is validated first; an incomplete submission aborts without
//! touching the store.

use std::collections::HashMap;
use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::Deserialize;

use quizmith_core::model::Participant;
use quizmith_core::scoring::{score_submission, Submission};
use quizmith_core::validate::validate_submission;

use crate::config::load_config_from;

/// On-disk answers format: question id -> selection or free text.
#[derive(Debug, Deserialize)]
struct AnswersFile {
    #[serde(default)]
    selected: HashMap<String, Vec<String>>,
    #[serde(default)]
    text_answers: HashMap<String, String>,
    /// Optional start time; defaults to the moment of scoring.
    #[serde(default)]
    started_at: Option<DateTime<Utc>>,
}

pub fn execute(
    config_path: Option<PathBuf>,
    quiz_id: String,
    answers_path: PathBuf,
    name: String,
    instructor: String,
    signature_path: Option<PathBuf>,
) -> Result<()> {
    anyhow::ensure!(!name.trim().is_empty(), "participant name must not be empty");

    let content = super::read_to_string(&answers_path)?;
    let answers: AnswersFile = serde_json::from_str(&content)
        .with_context(|| format!("failed to parse answers file {}", answers_path.display()))?;

    let signature = signature_path
        .map(|p| super::read_to_string(&p).map(|s| s.trim().to_string()))
        .transpose()?;

    let config = load_config_from(config_path.as_deref())?;
    let mut store = super::open_store(&config)?;
    let quiz = store.quiz(&quiz_id)?.clone();

    let submission = Submission {
        selected: answers.selected,
        text_answers: answers.text_answers,
        participant: Participant {
            name,
            date: Utc::now(),
            instructor,
            signature,
        },
        started_at: answers.started_at.unwrap_or_else(Utc::now),
    };

    let issues = validate_submission(&quiz, &submission);
    if !issues.is_empty() {
        for issue in &issues {
            let prefix = issue
                .question_id
                .as_ref()
                .map(|id| format!("  [{id}]"))
                .unwrap_or_else(|| "  ".to_string());
            println!("{prefix} ERROR: {}", issue.message);
        }
        anyhow::bail!("submission is incomplete, nothing was scored");
    }

    let result = score_submission(&quiz, &submission);
    let passed = result.percentage() >= config.pass_threshold;

    println!(
        "Scored '{}' for {}: {}/{} ({:.1}%) {}",
        result.quiz_title,
        result.participant.name,
        result.total_points,
        result.max_points,
        result.percentage(),
        if passed { "PASS" } else { "FAIL" },
    );
    for record in &result.answers {
        let mark = if record.correct { "ok" } else { "x" };
        println!("  [{mark}] {} ({} pts)", record.question_id, record.points);
    }

    let result_id = result.id.clone();
    store.add_result(result)?;
    println!("Stored result {result_id}");

    Ok(())
}
