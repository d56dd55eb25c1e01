//! The `quizmith validate` command.
//!
//! Checks an import file without touching the store.

use std::path::PathBuf;

use anyhow::Result;

use quizmith_core::exchange::validate_import;

pub fn execute(file: PathBuf) -> Result<()> {
    let content = super::read_to_string(&file)?;

    match validate_import(&content) {
        Ok((_, summary)) => {
            println!("{}", summary.message);
            println!(
                "  quizzes: {}\n  results: {}",
                summary.quiz_count, summary.result_count
            );
            Ok(())
        }
        Err(e) => Err(anyhow::Error::new(e).context("import file is invalid")),
    }
}
