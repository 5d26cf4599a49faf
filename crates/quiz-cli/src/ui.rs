use std::io::IsTerminal;

use crate::cli::{ColorMode, OutputFormat};

/// Narrowest `COLUMNS` value that still constrains table width.
const MIN_TERM_WIDTH: usize = 40;

/// Terminal presentation resolved once from flags and environment.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UiPrefs {
    pub table_color: bool,
    pub term_width: Option<usize>,
}

impl UiPrefs {
    /// Inspect stdout, `NO_COLOR` and `COLUMNS` for the current process.
    #[must_use]
    pub fn detect(color: ColorMode, format: OutputFormat, quiet: bool) -> Self {
        let columns = std::env::var("COLUMNS").ok();
        Self::resolve(
            color,
            format,
            quiet,
            std::io::stdout().is_terminal(),
            std::env::var_os("NO_COLOR").is_some(),
            columns.as_deref(),
        )
    }

    fn resolve(
        color: ColorMode,
        format: OutputFormat,
        quiet: bool,
        is_tty: bool,
        no_color: bool,
        columns: Option<&str>,
    ) -> Self {
        let tabular = format == OutputFormat::Table;
        let table_color = match color {
            ColorMode::Always => tabular,
            ColorMode::Never => false,
            ColorMode::Auto => tabular && is_tty && !quiet && !no_color,
        };
        let term_width = columns
            .and_then(|value| value.trim().parse::<usize>().ok())
            .filter(|width| *width >= MIN_TERM_WIDTH);
        Self {
            table_color,
            term_width,
        }
    }
}
