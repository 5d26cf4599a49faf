use clap::Parser;

use crate::ui::UiPrefs;

pub mod global;
pub mod root_commands;
pub mod subcommands;

pub use global::{ColorMode, GlobalFlags, OutputFormat};
pub use root_commands::Commands;

/// Top-level CLI parser for the `quizctl` binary.
#[derive(Debug, Parser)]
#[command(name = "quizctl", version, about = "Quizmaster - take and manage timed quizzes")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, table, raw
    #[arg(short, long, global = true, default_value = "table")]
    pub format: OutputFormat,

    /// Table colors: auto, always, never
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorMode,

    /// Quiet mode (suppress non-essential output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Project root path (defaults to auto-detect via .quiz)
    #[arg(short, long, global = true)]
    pub project: Option<String>,
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers.
    #[must_use]
    pub fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            color: self.color,
            quiet: self.quiet,
            verbose: self.verbose,
            project: self.project.clone(),
            ui: UiPrefs::detect(self.color, self.format, self.quiet),
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};
    use pretty_assertions::assert_eq;

    use super::subcommands::{AdminCommands, QuizCommands};
    use super::{Cli, ColorMode, Commands, GlobalFlags, OutputFormat};

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_parse_before_subcommand() {
        let cli = Cli::try_parse_from(["quizctl", "--format", "json", "--verbose", "results"])
            .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Json);
        assert!(cli.verbose);
        assert!(matches!(cli.command, Commands::Results));
    }

    #[test]
    fn global_flags_parse_after_subcommand() {
        let cli = Cli::try_parse_from(["quizctl", "results", "--format", "raw", "--quiet"])
            .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Raw);
        assert!(cli.quiet);
        assert_eq!(cli.color, ColorMode::Auto);
    }

    #[test]
    fn output_format_rejects_invalid_value() {
        let parsed = Cli::try_parse_from(["quizctl", "--format", "xml", "results"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn list_takes_search_and_page() {
        let cli = Cli::try_parse_from(["quizctl", "list", "--search", "capitals", "--page", "2"])
            .expect("cli should parse");
        let Commands::List(args) = cli.command else {
            panic!("expected list");
        };
        assert_eq!(args.search.as_deref(), Some("capitals"));
        assert_eq!(args.page, 2);
    }

    #[test]
    fn list_page_defaults_to_first() {
        let cli = Cli::try_parse_from(["quizctl", "list"]).expect("cli should parse");
        let Commands::List(args) = cli.command else {
            panic!("expected list");
        };
        assert_eq!(args.page, 1);
        assert!(args.search.is_none());
    }

    #[test]
    fn page_zero_is_rejected() {
        assert!(Cli::try_parse_from(["quizctl", "list", "--page", "0"]).is_err());
    }

    #[test]
    fn play_requires_quiz_id() {
        assert!(Cli::try_parse_from(["quizctl", "play"]).is_err());
        let cli = Cli::try_parse_from(["quizctl", "play", "capitals"]).expect("cli should parse");
        assert!(matches!(cli.command, Commands::Play(args) if args.quiz_id == "capitals"));
    }

    #[test]
    fn admin_login_parses_credentials() {
        let cli = Cli::try_parse_from([
            "quizctl",
            "admin",
            "login",
            "--username",
            "admin",
            "--password",
            "secret",
        ])
        .expect("cli should parse");
        let Commands::Admin {
            action: AdminCommands::Login { username, password },
        } = cli.command
        else {
            panic!("expected admin login");
        };
        assert_eq!(username, "admin");
        assert_eq!(password, "secret");
    }

    #[test]
    fn quiz_generate_parses_topic_and_save() {
        let cli = Cli::try_parse_from([
            "quizctl", "quiz", "generate", "--topic", "volcanoes", "--save",
        ])
        .expect("cli should parse");
        let Commands::Quiz {
            action: QuizCommands::Generate { topic, save },
        } = cli.command
        else {
            panic!("expected quiz generate");
        };
        assert_eq!(topic, "volcanoes");
        assert!(save);
    }

    #[test]
    fn global_flags_extraction_copies_values() {
        let cli = Cli::try_parse_from(["quizctl", "--project", "/tmp/demo", "results"])
            .expect("cli should parse");
        let flags: GlobalFlags = cli.global_flags();
        assert_eq!(flags.project.as_deref(), Some("/tmp/demo"));
        assert_eq!(flags.format, OutputFormat::Table);
    }
}
