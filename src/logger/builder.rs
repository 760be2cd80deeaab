//! Stepwise construction. Each setter records an option; `build` applies them
//! in call order, so calling a setter twice keeps the last value.

use super::Logger;
use super::options::{self, LoggerOption};
use crate::fmt::Color;
use crate::level::Level;
use crate::output::{Sink, Stream};
use std::io::Write;

#[derive(Debug)]
pub struct LoggerBuilder {
    tag: String,
    options: Vec<LoggerOption>,
}

impl LoggerBuilder {
    #[must_use]
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            options: Vec::new(),
        }
    }

    /// Records a prebuilt option.
    #[must_use]
    pub fn option(mut self, option: LoggerOption) -> Self {
        self.options.push(option);
        self
    }

    /// Info is the default; Debug is opt-in.
    #[must_use]
    pub fn level(self, level: Level) -> Self {
        self.option(options::level(level))
    }

    /// Overrides the color derived from the tag.
    #[must_use]
    pub fn color(self, color: Color) -> Self {
        self.option(options::color(color))
    }

    #[must_use]
    pub fn sink(self, sink: impl Sink + 'static) -> Self {
        self.option(options::sink(sink))
    }

    #[must_use]
    pub fn writer(self, writer: impl Write + Send + 'static) -> Self {
        self.option(options::writer(writer))
    }

    /// Stdout or stderr.
    #[must_use]
    pub fn stream(self, stream: Stream) -> Self {
        self.option(LoggerOption::Sink(stream.sink()))
    }

    #[must_use]
    pub fn on_error(self, hook: impl Fn(&crate::Error) + Send + Sync + 'static) -> Self {
        self.option(options::on_error(hook))
    }

    #[must_use]
    pub fn build(self) -> Logger {
        Logger::with_options(self.tag, self.options)
    }
}
