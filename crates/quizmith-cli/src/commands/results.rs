//! The `quizmith results` command.

use std::path::PathBuf;

use anyhow::Result;
use comfy_table::Table;

use quizmith_core::model::QuizResult;

use crate::config::load_config_from;

pub fn execute(config_path: Option<PathBuf>, quiz_id: Option<String>) -> Result<()> {
    let config = load_config_from(config_path.as_deref())?;
    let store = super::open_store(&config)?;

    let results: Vec<&QuizResult> = match &quiz_id {
        Some(id) => {
            let quiz = store.quiz(id)?;
            store.results_for_quiz(&quiz.id)
        }
        None => store.results().iter().collect(),
    };

    let mut table = Table::new();
    table.set_header(["ID", "Quiz", "Participant", "Score", "Percent", "Finished"]);
    for result in &results {
        let passed = result.percentage() >= config.pass_threshold;
        table.add_row([
            super::short_id(&result.id).to_string(),
            result.quiz_title.clone(),
            result.participant.name.clone(),
            format!("{}/{}", result.total_points, result.max_points),
            format!(
                "{:.1}% {}",
                result.percentage(),
                if passed { "(pass)" } else { "" }
            ),
            result.finished_at.format("%Y-%m-%d %H:%M").to_string(),
        ]);
    }

    println!("{table}");
    println!("{} result(s)", results.len());
    Ok(())
}
