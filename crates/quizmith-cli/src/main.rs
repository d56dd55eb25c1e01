//! quizmith CLI — the user-facing command-line interface.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

mod commands;
mod config;

#[derive(Parser)]
#[command(name = "quizmith", version, about = "Quiz authoring, scoring, and results analysis")]
struct Cli {
    /// Config file path (defaults to ./quizmith.toml)
    #[arg(long, short, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create starter config and a seeded data directory
    Init,

    /// List stored quizzes
    List,

    /// Show one quiz with its questions
    Show {
        /// Quiz id (or unambiguous prefix)
        quiz: String,
    },

    /// Add a quiz from an authored JSON file
    Add {
        /// Path to the quiz JSON file
        #[arg(long)]
        file: PathBuf,
    },

    /// Delete a quiz (cascading to its results) or a single result
    Delete {
        /// Quiz id to delete, cascading to its results
        #[arg(long, conflicts_with = "result")]
        quiz: Option<String>,

        /// Result id to delete
        #[arg(long)]
        result: Option<String>,
    },

    /// Score a submission against a quiz and store the result
    Take {
        /// Quiz id (or unambiguous prefix)
        quiz: String,

        /// Path to the answers JSON file
        #[arg(long)]
        answers: PathBuf,

        /// Participant name
        #[arg(long)]
        name: String,

        /// Supervising instructor
        #[arg(long, default_value = "")]
        instructor: String,

        /// Path to a signature image data-URL file
        #[arg(long)]
        signature: Option<PathBuf>,
    },

    /// List stored results
    Results {
        /// Restrict to one quiz
        #[arg(long)]
        quiz: Option<String>,
    },

    /// Aggregate statistics for a quiz
    Stats {
        /// Quiz id (or unambiguous prefix)
        quiz: String,
    },

    /// Validate an import file without touching the store
    Validate {
        /// Path to the import JSON file
        #[arg(long)]
        file: PathBuf,
    },

    /// Replace the store with the contents of an import file
    Import {
        /// Path to the import JSON file
        #[arg(long)]
        file: PathBuf,

        /// Confirm replacing all existing data
        #[arg(long)]
        force: bool,
    },

    /// Export store contents to a JSON file
    Export {
        /// Output file
        #[arg(long)]
        output: PathBuf,

        /// Export quizzes only
        #[arg(long, conflicts_with = "results_only")]
        quizzes_only: bool,

        /// Export results only
        #[arg(long)]
        results_only: bool,
    },

    /// Generate a CSV or HTML report for a quiz
    Report {
        /// Quiz id (or unambiguous prefix)
        quiz: String,

        /// Output format: csv, html
        #[arg(long, default_value = "html")]
        format: String,

        /// Output file (defaults into the configured report directory)
        #[arg(long)]
        output: Option<PathBuf>,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("quizmith=info".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();
    let config_path = cli.config;

    let result = match cli.command {
        Commands::Init => commands::init::execute(config_path),
        Commands::List => commands::list::execute(config_path),
        Commands::Show { quiz } => commands::show::execute(config_path, quiz),
        Commands::Add { file } => commands::add::execute(config_path, file),
        Commands::Delete { quiz, result } => {
            commands::delete::execute(config_path, quiz, result)
        }
        Commands::Take {
            quiz,
            answers,
            name,
            instructor,
            signature,
        } => commands::take::execute(config_path, quiz, answers, name, instructor, signature),
        Commands::Results { quiz } => commands::results::execute(config_path, quiz),
        Commands::Stats { quiz } => commands::stats::execute(config_path, quiz),
        Commands::Validate { file } => commands::validate::execute(file),
        Commands::Import { file, force } => commands::import::execute(config_path, file, force),
        Commands::Export {
            output,
            quizzes_only,
            results_only,
        } => commands::export::execute(config_path, output, quizzes_only, results_only),
        Commands::Report {
            quiz,
            format,
            output,
        } => commands::report::execute(config_path, quiz, format, output),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
