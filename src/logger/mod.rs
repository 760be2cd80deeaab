//! The logger: filter by level, compose the message, stamp it with time, level,
//! tag and caller, and write one line to the sink.
//!
//! Every public logging method calls [`Logger::write_line`] directly and all of
//! them are `#[inline(never)]`, which keeps the frame distance to the caller
//! fixed at [`crate::caller::CALLER_DEPTH`]. Calling them as the last statement
//! of a function can still lose that function's frame in optimized builds; the
//! crate's macros guard against it.

mod builder;
mod from_config;
pub mod options;

pub use builder::LoggerBuilder;
pub use options::{ErrorHook, LoggerOption};

use crate::caller;
use crate::fmt::{self as line_fmt, Color, LineParts, Printable, timestamp};
use crate::internal;
use crate::level::{FATAL_LABEL, Level};
use crate::output::{Sink, StdoutSink};
use std::fmt;
use std::process;

/// A tagged logger. Immutable after construction; share it by reference or `Arc`.
pub struct Logger {
    tag: String,
    color: Color,
    min_level: Level,
    sink: Box<dyn Sink>,
    on_error: Option<ErrorHook>,
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("tag", &self.tag)
            .field("color", &self.color)
            .field("min_level", &self.min_level)
            .field("on_error", &self.on_error.is_some())
            .finish_non_exhaustive()
    }
}

impl Logger {
    /// Logger with the hashed tag color, level `Info` and stdout as sink.
    #[must_use]
    pub fn new(tag: impl Into<String>) -> Self {
        Self::with_options(tag, Vec::new())
    }

    /// Applies `options` in order on top of the defaults; later options win.
    #[must_use]
    pub fn with_options(
        tag: impl Into<String>,
        options: impl IntoIterator<Item = LoggerOption>,
    ) -> Self {
        let tag = tag.into();
        let mut logger = Self {
            color: Color::for_tag(&tag),
            tag,
            min_level: Level::Info,
            sink: Box::new(StdoutSink),
            on_error: None,
        };

        for option in options {
            option.apply(&mut logger);
        }

        logger
    }

    /// Stepwise alternative to [`Logger::with_options`].
    #[must_use]
    pub fn builder(tag: impl Into<String>) -> LoggerBuilder {
        LoggerBuilder::new(tag)
    }

    #[must_use]
    pub fn tag(&self) -> &str {
        &self.tag
    }

    #[must_use]
    pub const fn color(&self) -> Color {
        self.color
    }

    #[must_use]
    pub const fn min_level(&self) -> Level {
        self.min_level
    }

    /// Whether a message at `level` would be written.
    #[must_use]
    pub fn enabled(&self, level: Level) -> bool {
        level >= self.min_level
    }

    /// Dynamic-level entry point for callers that pick the level at runtime.
    #[inline(never)]
    pub fn log(&self, level: Level, args: fmt::Arguments<'_>) {
        if self.enabled(level) {
            self.write_line(level.label(), &args.to_string());
        }
    }

    /// Development-time diagnostics that are too noisy for normal operation.
    #[inline(never)]
    pub fn debug(&self, operands: &[&dyn Printable]) {
        if self.enabled(Level::Debug) {
            self.write_line(Level::Debug.label(), &line_fmt::concat(operands));
        }
    }

    #[inline(never)]
    pub fn debugf(&self, args: fmt::Arguments<'_>) {
        if self.enabled(Level::Debug) {
            self.write_line(Level::Debug.label(), &args.to_string());
        }
    }

    /// Normal operational milestones: listener started, config loaded.
    #[inline(never)]
    pub fn info(&self, operands: &[&dyn Printable]) {
        if self.enabled(Level::Info) {
            self.write_line(Level::Info.label(), &line_fmt::concat(operands));
        }
    }

    #[inline(never)]
    pub fn infof(&self, args: fmt::Arguments<'_>) {
        if self.enabled(Level::Info) {
            self.write_line(Level::Info.label(), &args.to_string());
        }
    }

    /// Non-fatal anomalies: retries, deprecated settings, missing optional input.
    #[inline(never)]
    pub fn warn(&self, operands: &[&dyn Printable]) {
        if self.enabled(Level::Warn) {
            self.write_line(Level::Warn.label(), &line_fmt::concat(operands));
        }
    }

    #[inline(never)]
    pub fn warnf(&self, args: fmt::Arguments<'_>) {
        if self.enabled(Level::Warn) {
            self.write_line(Level::Warn.label(), &args.to_string());
        }
    }

    /// Failures that stop an operation but not the process.
    #[inline(never)]
    pub fn error(&self, operands: &[&dyn Printable]) {
        if self.enabled(Level::Error) {
            self.write_line(Level::Error.label(), &line_fmt::concat(operands));
        }
    }

    #[inline(never)]
    pub fn errorf(&self, args: fmt::Arguments<'_>) {
        if self.enabled(Level::Error) {
            self.write_line(Level::Error.label(), &args.to_string());
        }
    }

    /// Writes a `FATAL` line regardless of the minimum level, then exits with status 1.
    ///
    /// No destructors run and no unwinding happens after the line is written.
    #[inline(never)]
    pub fn fatal(&self, operands: &[&dyn Printable]) -> ! {
        self.write_line(FATAL_LABEL, &line_fmt::concat(operands));
        self.exit()
    }

    /// Template form of [`Logger::fatal`].
    #[inline(never)]
    pub fn fatalf(&self, args: fmt::Arguments<'_>) -> ! {
        self.write_line(FATAL_LABEL, &args.to_string());
        self.exit()
    }

    /// Buffered sinks may hold the tail of the output until flushed.
    ///
    /// # Errors
    /// I/O errors from the sink.
    pub fn flush(&self) -> Result<(), crate::Error> {
        self.sink.flush()
    }

    /// Single write path shared by every public method. Must stay one frame
    /// below them and one frame above `caller::resolve`.
    #[inline(never)]
    fn write_line(&self, label: &str, message: &str) {
        let caller = caller::resolve();
        let timestamp = timestamp::now();
        let line = LineParts {
            timestamp: &timestamp,
            label,
            tag: &self.tag,
            color: self.color,
            caller: &caller,
            message,
        }
        .render();

        if let Err(e) = self.sink.write_line(&line) {
            self.report(&e);
        }
    }

    /// Sink failures never reach the logging caller.
    fn report(&self, error: &crate::Error) {
        match &self.on_error {
            Some(hook) => hook(error),
            None => internal::error("SINK", &format!("Dropped log line: {error}")),
        }
    }

    fn exit(&self) -> ! {
        if let Err(e) = self.sink.flush() {
            self.report(&e);
        }
        process::exit(1)
    }
}
