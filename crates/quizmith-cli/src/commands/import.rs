//! The `quizmith import` command.
//!
//! Import replaces the entire store. The bundle validates in full before
//! anything is written, so a failed import leaves existing data intact.

use std::path::PathBuf;

use anyhow::{Context, Result};

use quizmith_core::exchange::validate_import;

use crate::config::load_config_from;

pub fn execute(config_path: Option<PathBuf>, file: PathBuf, force: bool) -> Result<()> {
    let content = super::read_to_string(&file)?;
    let (bundle, summary) = validate_import(&content).context("import file is invalid")?;

    let config = load_config_from(config_path.as_deref())?;
    let mut store = super::open_store(&config)?;

    if !force {
        anyhow::bail!(
            "import replaces all existing data ({} quiz(zes), {} result(s) currently stored); \
             rerun with --force to confirm",
            store.quizzes().len(),
            store.results().len(),
        );
    }

    store.replace_all(bundle)?;
    println!("{}", summary.message);
    println!(
        "Store replaced: {} quiz(zes), {} result(s)",
        summary.quiz_count, summary.result_count
    );
    Ok(())
}
