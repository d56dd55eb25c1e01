//! The `quizmith add` command.

use std::path::PathBuf;

use anyhow::{Context, Result};

use quizmith_core::model::Quiz;
use quizmith_core::validate::validate_quiz;

use crate::config::load_config_from;

pub fn execute(config_path: Option<PathBuf>, file: PathBuf) -> Result<()> {
    let content = super::read_to_string(&file)?;
    let quiz: Quiz = serde_json::from_str(&content)
        .with_context(|| format!("failed to parse quiz file {}", file.display()))?;

    let issues = validate_quiz(&quiz);
    if !issues.is_empty() {
        for issue in &issues {
            let prefix = issue
                .question_id
                .as_ref()
                .map(|id| format!("  [{id}]"))
                .unwrap_or_else(|| "  ".to_string());
            println!("{prefix} ERROR: {}", issue.message);
        }
        anyhow::bail!("quiz is invalid, nothing was stored");
    }

    let config = load_config_from(config_path.as_deref())?;
    let mut store = super::open_store(&config)?;
    let title = quiz.title.clone();
    let id = quiz.id.clone();
    store.add_quiz(quiz)?;

    println!("Added quiz '{title}' ({id})");
    Ok(())
}
