//! The `quizmith list` command.

use std::path::PathBuf;

use anyhow::Result;
use comfy_table::Table;

use crate::config::load_config_from;

pub fn execute(config_path: Option<PathBuf>) -> Result<()> {
    let config = load_config_from(config_path.as_deref())?;
    let store = super::open_store(&config)?;

    let mut table = Table::new();
    table.set_header(["ID", "Title", "Questions", "Max points", "Created"]);
    for quiz in store.quizzes() {
        table.add_row([
            super::short_id(&quiz.id).to_string(),
            quiz.title.clone(),
            quiz.questions.len().to_string(),
            quiz.max_points().to_string(),
            quiz.created_at.format("%Y-%m-%d").to_string(),
        ]);
    }

    println!("{table}");
    println!("{} quiz(zes)", store.quizzes().len());
    Ok(())
}
