// file: src/utils/logging.rs
// description: tracing setup and one-line user notices for the cli

use colored::{ColoredString, Colorize};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Logs go to stderr so rendered catalog output on stdout stays pipeable.
/// Without `RUST_LOG`, only this crate logs below `warn`; the HTTP stack
/// stays quiet.
pub fn init_logger(colored_output: bool, verbose: bool) {
    let directives = if verbose {
        "bookshelf=debug,warn"
    } else {
        "bookshelf=info,warn"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directives));

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(verbose)
        .with_file(verbose)
        .with_line_number(verbose)
        .compact()
        .with_ansi(colored_output);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    Success,
    Info,
    Warning,
    Error,
}

impl Notice {
    fn marker(self) -> ColoredString {
        match self {
            Self::Success => "✓".green().bold(),
            Self::Info => "ℹ".blue().bold(),
            Self::Warning => "⚠".yellow().bold(),
            Self::Error => "✗".red().bold(),
        }
    }

    /// Only the marker is colored; the message is left plain.
    pub fn line(self, msg: &str) -> String {
        format!("{} {}", self.marker(), msg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notice_lines_without_color() {
        colored::control::set_override(false);

        assert_eq!(Notice::Success.line("Exported 3 of 5 books"), "✓ Exported 3 of 5 books");
        assert_eq!(Notice::Warning.line("Skipped 1 of 4 records"), "⚠ Skipped 1 of 4 records");
        assert_eq!(Notice::Error.line("Document contains no books"), "✗ Document contains no books");
        assert_eq!(Notice::Info.line("Type 'help'"), "ℹ Type 'help'");
    }
}
