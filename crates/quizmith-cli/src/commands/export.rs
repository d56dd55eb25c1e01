//! The `quizmith export` command.

use std::path::PathBuf;

use anyhow::{Context, Result};

use quizmith_core::exchange::{export_bundle, ExportSelection};

use crate::config::load_config_from;

pub fn execute(
    config_path: Option<PathBuf>,
    output: PathBuf,
    quizzes_only: bool,
    results_only: bool,
) -> Result<()> {
    let selection = ExportSelection {
        quizzes: !results_only,
        results: !quizzes_only,
    };

    let config = load_config_from(config_path.as_deref())?;
    let store = super::open_store(&config)?;

    let json = export_bundle(store.quizzes(), store.results(), selection)
        .context("failed to serialize export bundle")?;

    if let Some(parent) = output.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(&output, json)
        .with_context(|| format!("failed to write export to {}", output.display()))?;

    println!(
        "Exported {} quiz(zes), {} result(s) to {}",
        if selection.quizzes {
            store.quizzes().len()
        } else {
            0
        },
        if selection.results {
            store.results().len()
        } else {
            0
        },
        output.display()
    );
    Ok(())
}
