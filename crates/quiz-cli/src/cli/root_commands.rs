use clap::{Args, Subcommand};

use crate::cli::subcommands::{AdminCommands, QuizCommands};

/// Top-level commands.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Browse the quiz catalog
    List(ListArgs),
    /// Show a quiz outline (questions and options, no answers)
    Show(ShowArgs),
    /// Take a quiz interactively
    Play(PlayArgs),
    /// Recent results, newest first
    Results,
    /// Admin login
    Admin {
        #[command(subcommand)]
        action: AdminCommands,
    },
    /// Manage the catalog (admin only)
    Quiz {
        #[command(subcommand)]
        action: QuizCommands,
    },
}

#[derive(Clone, Debug, Args)]
pub struct ListArgs {
    /// Case-insensitive match on title, description or category
    #[arg(short, long)]
    pub search: Option<String>,
    /// 1-based page number
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    pub page: u32,
}

#[derive(Clone, Debug, Args)]
pub struct ShowArgs {
    pub quiz_id: String,
}

#[derive(Clone, Debug, Args)]
pub struct PlayArgs {
    pub quiz_id: String,
}
