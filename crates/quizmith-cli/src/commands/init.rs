//! The `quizmith init` command.

use std::path::PathBuf;

use anyhow::Result;

use crate::config::load_config_from;

pub fn execute(config_path: Option<PathBuf>) -> Result<()> {
    if std::path::Path::new("quizmith.toml").exists() {
        println!("quizmith.toml already exists, skipping.");
    } else {
        std::fs::write("quizmith.toml", SAMPLE_CONFIG)?;
        println!("Created quizmith.toml");
    }

    // Opening the store seeds the demonstration quiz when empty.
    let config = load_config_from(config_path.as_deref())?;
    let store = super::open_store(&config)?;
    println!(
        "Data directory {} holds {} quiz(zes), {} result(s)",
        config.data_dir.display(),
        store.quizzes().len(),
        store.results().len()
    );

    println!("\nNext steps:");
    println!("  1. Run: quizmith list");
    println!("  2. Author a quiz file and run: quizmith add --file my-quiz.json");
    println!("  3. Run: quizmith take <quiz-id> --answers answers.json --name \"Your Name\"");

    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# quizmith configuration

# Where quizzes and results are stored.
data_dir = "./quizmith-data"

# Attempts at or above this percentage count as a pass.
pass_threshold = 60.0

# Default directory for generated reports.
report_dir = "./quizmith-reports"
"#;
