//! The `quizmith delete` command.
//!
//! Quiz deletion always cascades: the store removes every result
//! referencing the deleted quiz, whichever path the deletion came from.

use std::path::PathBuf;

use anyhow::Result;

use crate::config::load_config_from;

pub fn execute(
    config_path: Option<PathBuf>,
    quiz: Option<String>,
    result: Option<String>,
) -> Result<()> {
    let config = load_config_from(config_path.as_deref())?;
    let mut store = super::open_store(&config)?;

    match (quiz, result) {
        (Some(quiz_id), None) => {
            let title = store.quiz(&quiz_id)?.title.clone();
            let cascaded = store.delete_quiz(&quiz_id)?;
            println!("Deleted quiz '{title}' and {cascaded} associated result(s)");
        }
        (None, Some(result_id)) => {
            store.delete_result(&result_id)?;
            println!("Deleted result {result_id}");
        }
        _ => anyhow::bail!("specify exactly one of --quiz or --result"),
    }

    Ok(())
}
