//! The `quizmith show` command.

use std::path::PathBuf;

use anyhow::Result;
use comfy_table::Table;

use crate::config::load_config_from;

pub fn execute(config_path: Option<PathBuf>, quiz_id: String) -> Result<()> {
    let config = load_config_from(config_path.as_deref())?;
    let store = super::open_store(&config)?;
    let quiz = store.quiz(&quiz_id)?;

    println!("{} ({})", quiz.title, quiz.id);
    println!(
        "Created {} | {} questions | {} max points",
        quiz.created_at.format("%Y-%m-%d"),
        quiz.questions.len(),
        quiz.max_points()
    );
    if let Some(image_url) = &quiz.image_url {
        println!("Image: {image_url}");
    }

    for (index, question) in quiz.questions.iter().enumerate() {
        println!(
            "\n{}. [{}] {} ({} pts)",
            index + 1,
            question.question_type,
            question.text,
            question.max_points()
        );

        if question.answers.is_empty() {
            if question.correct_answer.is_some() {
                println!("   (free text)");
            }
            continue;
        }

        let mut table = Table::new();
        table.set_header(["ID", "Answer", "Correct", "Points"]);
        for answer in &question.answers {
            table.add_row([
                answer.id.clone(),
                answer.text.clone(),
                if answer.is_correct { "yes" } else { "" }.to_string(),
                answer.effective_points().to_string(),
            ]);
        }
        println!("{table}");
    }

    Ok(())
}
