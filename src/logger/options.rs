//! Construction-time options. Each one overrides a single field of a fresh
//! logger; [`Logger::with_options`](super::Logger::with_options) applies them
//! in the order given.
//!
//! ```
//! use taglog::options::{color, level, sink};
//! use taglog::{Color, Level, Logger, MemorySink};
//!
//! let out = MemorySink::new();
//! let log = Logger::with_options("db", [sink(out.clone()), level(Level::Warn), color(Color::Cyan)]);
//! assert_eq!(log.min_level(), Level::Warn);
//! ```

use super::Logger;
use crate::fmt::Color;
use crate::level::Level;
use crate::output::{Sink, WriterSink};
use std::fmt;
use std::io::Write;

/// Called with every sink failure instead of the default internal warning.
pub type ErrorHook = Box<dyn Fn(&crate::Error) + Send + Sync>;

/// One override applied to a logger before first use.
pub enum LoggerOption {
    Sink(Box<dyn Sink>),
    Color(Color),
    Level(Level),
    OnError(ErrorHook),
}

impl LoggerOption {
    pub(super) fn apply(self, logger: &mut Logger) {
        match self {
            Self::Sink(sink) => logger.sink = sink,
            Self::Color(color) => logger.color = color,
            Self::Level(level) => logger.min_level = level,
            Self::OnError(hook) => logger.on_error = Some(hook),
        }
    }
}

impl fmt::Debug for LoggerOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sink(_) => f.write_str("Sink(..)"),
            Self::Color(color) => f.debug_tuple("Color").field(color).finish(),
            Self::Level(level) => f.debug_tuple("Level").field(level).finish(),
            Self::OnError(_) => f.write_str("OnError(..)"),
        }
    }
}

/// Writes lines to any `io::Write`, serialized through a mutex.
#[must_use]
pub fn writer(w: impl Write + Send + 'static) -> LoggerOption {
    LoggerOption::Sink(Box::new(WriterSink::new(w)))
}

/// Writes lines to a custom [`Sink`].
#[must_use]
pub fn sink(s: impl Sink + 'static) -> LoggerOption {
    LoggerOption::Sink(Box::new(s))
}

/// Replaces the hashed tag color.
#[must_use]
pub const fn color(c: Color) -> LoggerOption {
    LoggerOption::Color(c)
}

/// Sets the minimum level; messages below it are dropped.
#[must_use]
pub const fn level(l: Level) -> LoggerOption {
    LoggerOption::Level(l)
}

/// Observes sink failures. Logging calls still return normally.
#[must_use]
pub fn on_error(hook: impl Fn(&crate::Error) + Send + Sync + 'static) -> LoggerOption {
    LoggerOption::OnError(Box::new(hook))
}
