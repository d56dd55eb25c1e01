//! The `quizmith report` command.

use std::path::PathBuf;

use anyhow::Result;

use quizmith_core::statistics::compute_quiz_stats;
use quizmith_report::{csv, html};

use crate::config::load_config_from;

pub fn execute(
    config_path: Option<PathBuf>,
    quiz_id: String,
    format: String,
    output: Option<PathBuf>,
) -> Result<()> {
    let config = load_config_from(config_path.as_deref())?;
    let store = super::open_store(&config)?;
    let quiz = store.quiz(&quiz_id)?;
    let results = store.results_for_quiz(&quiz.id);

    let path = output.unwrap_or_else(|| {
        config
            .report_dir
            .join(format!("{}.{format}", super::short_id(&quiz.id)))
    });

    match format.as_str() {
        "csv" => csv::write_csv(&results, &path)?,
        "html" => {
            let stats = compute_quiz_stats(quiz, store.results(), config.pass_threshold);
            html::write_html_report(quiz, &results, &stats, config.pass_threshold, &path)?;
        }
        other => anyhow::bail!("unknown report format: {other} (expected csv or html)"),
    }

    println!(
        "Wrote {format} report for '{}' ({} result(s)) to {}",
        quiz.title,
        results.len(),
        path.display()
    );
    Ok(())
}
