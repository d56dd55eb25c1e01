//! CSV export of a quiz's results.
//!
//! One row per stored result: participant, score, percentage, timing.

use std::path::Path;

use anyhow::{Context, Result};

use quizmith_core::model::QuizResult;

const HEADERS: [&str; 8] = [
    "result_id",
    "participant",
    "instructor",
    "total_points",
    "max_points",
    "percentage",
    "started_at",
    "finished_at",
];

/// Render results as CSV text.
pub fn render_csv(results: &[&QuizResult]) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(HEADERS)?;

    for result in results {
        let percentage = format!("{:.1}", result.percentage());
        writer.write_record([
            result.id.as_str(),
            result.participant.name.as_str(),
            result.participant.instructor.as_str(),
            result.total_points.to_string().as_str(),
            result.max_points.to_string().as_str(),
            percentage.as_str(),
            result.started_at.to_rfc3339().as_str(),
            result.finished_at.to_rfc3339().as_str(),
        ])?;
    }

    let bytes = writer.into_inner().context("failed to flush CSV writer")?;
    String::from_utf8(bytes).context("CSV output was not valid UTF-8")
}

/// Render results as CSV and write them to a file.
pub fn write_csv(results: &[&QuizResult], path: &Path) -> Result<()> {
    let csv = render_csv(results)?;
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, csv)
        .with_context(|| format!("failed to write CSV to {}", path.display()))?;
    Ok(())
}
