//! Command-line interface: emit one line from a shell script.
//!
//! ```text
//! taglog [--tag T] [--level L] [--color C] [--stderr] [--config PATH] <severity> <message>...
//! ```
//!
//! Without `--config` the built-in defaults apply; no file is read implicitly.

use crate::config::Config;
use crate::fmt::Color;
use crate::internal;
use crate::level::Level;
use crate::logger::{Logger, LoggerBuilder};
use crate::output::Stream;
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;

/// Severity of the line to emit. `fatal` exits with status 1 after writing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Severity {
    Debug,
    Info,
    Warn,
    Error,
    Fatal,
}

impl Severity {
    /// `None` for fatal, which is not a filterable level.
    #[must_use]
    pub const fn level(self) -> Option<Level> {
        match self {
            Self::Debug => Some(Level::Debug),
            Self::Info => Some(Level::Info),
            Self::Warn => Some(Level::Warn),
            Self::Error => Some(Level::Error),
            Self::Fatal => None,
        }
    }
}

/// taglog - write one tagged log line.
#[derive(Debug, Parser)]
#[command(name = "taglog", version, about = "Write one tagged log line")]
pub struct Cli {
    /// Tag shown in the line; empty omits the tag column.
    #[arg(short, long, default_value = "")]
    pub tag: String,

    /// Minimum level; lines below it are dropped.
    #[arg(short, long, value_parser = parse_level)]
    pub level: Option<Level>,

    /// Tag color instead of the one derived from the tag.
    #[arg(short, long, value_parser = parse_color)]
    pub color: Option<Color>,

    /// Write to stderr instead of stdout.
    #[arg(long)]
    pub stderr: bool,

    /// Config file to read; without it only built-in defaults and flags apply.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Print internal diagnostics to stderr.
    #[arg(short, long)]
    pub verbose: bool,

    /// Severity of the line.
    #[arg(value_enum)]
    pub severity: Severity,

    /// Message words, joined with single spaces.
    #[arg(required = true, num_args = 1..)]
    pub message: Vec<String>,
}

fn parse_level(s: &str) -> Result<Level, crate::Error> {
    Ok(s.parse::<Level>()?)
}

fn parse_color(s: &str) -> Result<Color, crate::Error> {
    Ok(s.parse::<Color>()?)
}

impl Cli {
    /// Config file (if given) first, then flags on top.
    ///
    /// # Errors
    /// Config file read or parse errors.
    pub fn build_logger(&self) -> Result<Logger, crate::Error> {
        let config = match &self.config {
            Some(path) => Config::load_from(path)?,
            None => Config::default(),
        };

        let base = config.for_tag(&self.tag);
        let mut builder = LoggerBuilder::new(self.tag.as_str())
            .level(self.level.unwrap_or_else(|| base.parse_level()))
            .stream(if self.stderr {
                Stream::Stderr
            } else {
                base.parse_stream()
            });

        if let Some(color) = self.color.or_else(|| base.parse_color()) {
            builder = builder.color(color);
        }

        Ok(builder.build())
    }
}

/// Runs a parsed command line.
#[must_use]
pub fn run(cli: &Cli) -> ExitCode {
    if cli.verbose {
        internal::init(Level::Debug);
    }

    let logger = match cli.build_logger() {
        Ok(logger) => logger,
        Err(e) => {
            eprintln!("taglog: {e}");
            return ExitCode::FAILURE;
        }
    };

    let message = cli.message.join(" ");
    match cli.severity.level() {
        Some(level) => logger.log(level, format_args!("{message}")),
        None => logger.fatal(&[&message]),
    }

    ExitCode::SUCCESS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_command_line() {
        let cli = Cli::try_parse_from([
            "taglog", "--tag", "deploy", "--level", "debug", "--color", "red", "warn", "disk",
            "almost", "full",
        ])
        .unwrap();
        assert_eq!(cli.tag, "deploy");
        assert_eq!(cli.level, Some(Level::Debug));
        assert_eq!(cli.color, Some(Color::Red));
        assert_eq!(cli.severity, Severity::Warn);
        assert_eq!(cli.message.join(" "), "disk almost full");
    }

    #[test]
    fn tag_defaults_to_empty() {
        let cli = Cli::try_parse_from(["taglog", "info", "hi"]).unwrap();
        assert!(cli.tag.is_empty());
        assert!(!cli.stderr);
    }

    #[test]
    fn rejects_unknown_color() {
        assert!(Cli::try_parse_from(["taglog", "--color", "mauve", "info", "hi"]).is_err());
    }

    #[test]
    fn flag_errors_name_the_rejected_value() {
        let err = Cli::try_parse_from(["taglog", "--level", "loud", "info", "hi"]).unwrap_err();
        assert!(err.to_string().contains("invalid level: loud"), "{err}");

        let err = Cli::try_parse_from(["taglog", "-c", "mauve", "info", "hi"]).unwrap_err();
        assert!(err.to_string().contains("invalid color: mauve"), "{err}");
    }

    #[test]
    fn message_is_required() {
        assert!(Cli::try_parse_from(["taglog", "info"]).is_err());
    }

    #[test]
    fn fatal_has_no_level() {
        assert_eq!(Severity::Fatal.level(), None);
        assert_eq!(Severity::Warn.level(), Some(Level::Warn));
    }
}
