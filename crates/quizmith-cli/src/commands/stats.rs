//! The `quizmith stats` command.

use std::path::PathBuf;

use anyhow::Result;
use comfy_table::Table;

use quizmith_core::statistics::compute_quiz_stats;

use crate::config::load_config_from;

pub fn execute(config_path: Option<PathBuf>, quiz_id: String) -> Result<()> {
    let config = load_config_from(config_path.as_deref())?;
    let store = super::open_store(&config)?;
    let quiz = store.quiz(&quiz_id)?;

    let stats = compute_quiz_stats(quiz, store.results(), config.pass_threshold);

    println!("{} ({})", quiz.title, super::short_id(&quiz.id));
    println!(
        "Attempts: {} | Mean: {:.1}% | Best: {:.1}% | Pass rate: {:.1}% (threshold {:.0}%)",
        stats.attempts,
        stats.mean_percentage,
        stats.best_percentage,
        stats.pass_rate * 100.0,
        config.pass_threshold,
    );

    let mut table = Table::new();
    table.set_header(["Question", "Type", "Correct", "Rate"]);
    for question in &quiz.questions {
        let Some(question_stats) = stats.per_question.get(&question.id) else {
            continue;
        };
        table.add_row([
            question.text.clone(),
            question.question_type.to_string(),
            format!(
                "{}/{}",
                question_stats.correct_count, question_stats.answered_count
            ),
            format!("{:.0}%", question_stats.correct_rate * 100.0),
        ]);
    }
    println!("{table}");

    Ok(())
}
