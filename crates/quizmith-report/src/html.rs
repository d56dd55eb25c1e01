//! HTML report generator.
//!
//! Produces a self-contained HTML file with all CSS inlined: a summary
//! table, a per-question breakdown, and a printable certificate block for
//! every passing participant.

use std::path::Path;

use anyhow::{Context, Result};

use quizmith_core::model::{Quiz, QuizResult};
use quizmith_core::statistics::QuizStats;

/// Escape a string for safe HTML insertion.
fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

/// Generate a results report for one quiz.
///
/// `pass_threshold` is the percentage above which a participant earns a
/// certificate block.
pub fn generate_html(
    quiz: &Quiz,
    results: &[&QuizResult],
    stats: &QuizStats,
    pass_threshold: f64,
) -> String {
    let mut html = String::new();

    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("<meta charset=\"utf-8\">\n");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    html.push_str(&format!(
        "<title>quizmith report — {}</title>\n",
        html_escape(&quiz.title)
    ));
    html.push_str("<style>\n");
    html.push_str(CSS);
    html.push_str("</style>\n");
    html.push_str("</head>\n<body>\n");

    // Header
    html.push_str("<header>\n");
    html.push_str("<h1>quizmith report</h1>\n");
    html.push_str(&format!(
        "<p class=\"meta\">Quiz: <strong>{}</strong> | {} questions | {} attempts | created {}</p>\n",
        html_escape(&quiz.title),
        quiz.questions.len(),
        stats.attempts,
        quiz.created_at.format("%Y-%m-%d")
    ));
    html.push_str("</header>\n");

    // Summary dashboard
    html.push_str("<section class=\"dashboard\">\n");
    html.push_str("<h2>Summary</h2>\n");
    html.push_str("<table class=\"summary\">\n");
    html.push_str(
        "<thead><tr><th>Attempts</th><th>Mean</th><th>Best</th><th>Pass rate</th></tr></thead>\n",
    );
    html.push_str(&format!(
        "<tbody><tr><td>{}</td><td>{:.1}%</td><td>{:.1}%</td><td>{:.1}%</td></tr></tbody>\n",
        stats.attempts,
        stats.mean_percentage,
        stats.best_percentage,
        stats.pass_rate * 100.0,
    ));
    html.push_str("</table>\n");
    html.push_str("</section>\n");

    // Per-result table
    html.push_str("<section class=\"results\">\n");
    html.push_str("<h2>Results</h2>\n");
    html.push_str("<table class=\"results-table\">\n");
    html.push_str("<thead><tr><th>Participant</th><th>Instructor</th><th>Score</th><th>Percent</th><th>Finished</th></tr></thead>\n");
    html.push_str("<tbody>\n");
    for r in results {
        let row_class = if r.percentage() >= pass_threshold {
            "pass"
        } else {
            "fail"
        };
        html.push_str(&format!(
            "<tr class=\"{}\"><td>{}</td><td>{}</td><td>{}/{}</td><td>{:.1}%</td><td>{}</td></tr>\n",
            row_class,
            html_escape(&r.participant.name),
            html_escape(&r.participant.instructor),
            r.total_points,
            r.max_points,
            r.percentage(),
            r.finished_at.format("%Y-%m-%d %H:%M"),
        ));
    }
    html.push_str("</tbody></table>\n");
    html.push_str("</section>\n");

    // Per-question breakdown
    html.push_str("<section class=\"questions\">\n");
    html.push_str("<h2>Questions</h2>\n");
    html.push_str("<table class=\"questions-table\">\n");
    html.push_str("<thead><tr><th>Question</th><th>Type</th><th>Correct</th><th>Rate</th></tr></thead>\n");
    html.push_str("<tbody>\n");
    for question in &quiz.questions {
        let (correct, answered, rate) = stats
            .per_question
            .get(&question.id)
            .map(|s| (s.correct_count, s.answered_count, s.correct_rate))
            .unwrap_or((0, 0, 0.0));
        html.push_str(&format!(
            "<tr><td>{}</td><td>{}</td><td>{}/{}</td><td>{:.0}%</td></tr>\n",
            html_escape(&question.text),
            question.question_type,
            correct,
            answered,
            rate * 100.0,
        ));
    }
    html.push_str("</tbody></table>\n");
    html.push_str("</section>\n");

    // Certificates for passing participants
    let passing: Vec<&&QuizResult> = results
        .iter()
        .filter(|r| r.percentage() >= pass_threshold)
        .collect();
    if !passing.is_empty() {
        html.push_str("<section class=\"certificates\">\n");
        html.push_str("<h2>Certificates</h2>\n");
        for r in passing {
            html.push_str("<div class=\"certificate\">\n");
            html.push_str("<p class=\"cert-title\">Certificate of Completion</p>\n");
            html.push_str(&format!(
                "<p class=\"cert-name\">{}</p>\n",
                html_escape(&r.participant.name)
            ));
            html.push_str(&format!(
                "<p>completed <strong>{}</strong> with a score of {}/{} ({:.1}%)</p>\n",
                html_escape(&r.quiz_title),
                r.total_points,
                r.max_points,
                r.percentage(),
            ));
            html.push_str(&format!(
                "<p class=\"cert-meta\">{} | Instructor: {}</p>\n",
                r.participant.date.format("%Y-%m-%d"),
                html_escape(&r.participant.instructor),
            ));
            if let Some(signature) = &r.participant.signature {
                html.push_str(&format!(
                    "<img class=\"cert-signature\" alt=\"signature\" src=\"{}\">\n",
                    html_escape(signature)
                ));
            }
            html.push_str("</div>\n");
        }
        html.push_str("</section>\n");
    }

    // Raw JSON
    html.push_str("<section class=\"raw-data\">\n");
    html.push_str("<details>\n<summary>Raw JSON Data</summary>\n");
    html.push_str("<pre><code>");
    html.push_str(
        &serde_json::to_string_pretty(results)
            .unwrap_or_default()
            .replace('<', "&lt;")
            .replace('>', "&gt;"),
    );
    html.push_str("</code></pre>\n");
    html.push_str("</details>\n</section>\n");

    html.push_str("</body>\n</html>\n");
    html
}

/// Generate the report and write it to a file.
pub fn write_html_report(
    quiz: &Quiz,
    results: &[&QuizResult],
    stats: &QuizStats,
    pass_threshold: f64,
    path: &Path,
) -> Result<()> {
    let html = generate_html(quiz, results, stats, pass_threshold);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, html)
        .with_context(|| format!("failed to write report to {}", path.display()))?;
    Ok(())
}

const CSS: &str = r#"
body { font-family: system-ui, sans-serif; margin: 2rem auto; max-width: 60rem; color: #1a1a1a; }
header h1 { margin-bottom: 0.25rem; }
.meta { color: #666; }
table { border-collapse: collapse; width: 100%; margin: 1rem 0; }
th, td { border: 1px solid #ddd; padding: 0.5rem 0.75rem; text-align: left; }
th { background: #f5f5f5; }
tr.pass td { background: #f0faf0; }
tr.fail td { background: #fdf2f2; }
.certificate { border: 3px double #888; padding: 1.5rem; margin: 1rem 0; text-align: center; page-break-inside: avoid; }
.cert-title { font-variant: small-caps; letter-spacing: 0.2em; color: #666; }
.cert-name { font-size: 1.6rem; font-weight: bold; margin: 0.5rem 0; }
.cert-meta { color: #666; font-size: 0.9rem; }
.cert-signature { max-height: 4rem; }
.raw-data pre { background: #f8f8f8; padding: 1rem; overflow-x: auto; }
@media print { .raw-data { display: none; } }
"#;
