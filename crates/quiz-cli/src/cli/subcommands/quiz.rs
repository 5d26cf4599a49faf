use std::path::PathBuf;

use clap::Subcommand;

/// Catalog management commands. All of them require an admin session.
#[derive(Clone, Debug, Subcommand)]
pub enum QuizCommands {
    /// Import one quiz or an array of quizzes from a JSON file
    Import {
        /// Path to the JSON file
        file: PathBuf,
    },
    /// Delete a quiz by id
    Delete { id: String },
    /// Generate a quiz on a topic with the configured AI model
    Generate {
        #[arg(short, long)]
        topic: String,
        /// Save the generated quiz to the catalog
        #[arg(long)]
        save: bool,
    },
}
