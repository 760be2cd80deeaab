//! Console sinks. Each line is written under the stream's lock in a single
//! `write_all`, so lines from different threads never interleave.

use super::Sink;
use std::io::{self, Write};

/// The default destination.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutSink;

impl Sink for StdoutSink {
    fn write_line(&self, line: &str) -> Result<(), crate::Error> {
        io::stdout().lock().write_all(line.as_bytes())?;
        Ok(())
    }

    fn flush(&self) -> Result<(), crate::Error> {
        io::stdout().flush()?;
        Ok(())
    }
}

/// Keeps diagnostics out of a program's piped stdout.
#[derive(Debug, Clone, Copy, Default)]
pub struct StderrSink;

impl Sink for StderrSink {
    fn write_line(&self, line: &str) -> Result<(), crate::Error> {
        io::stderr().lock().write_all(line.as_bytes())?;
        Ok(())
    }

    fn flush(&self) -> Result<(), crate::Error> {
        io::stderr().flush()?;
        Ok(())
    }
}

/// Console stream selection, as named in config files and CLI flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Stream {
    #[default]
    Stdout,
    Stderr,
}

impl Stream {
    /// The sink writing to this stream.
    #[must_use]
    pub fn sink(self) -> Box<dyn Sink> {
        match self {
            Self::Stdout => Box::new(StdoutSink),
            Self::Stderr => Box::new(StderrSink),
        }
    }
}

impl std::str::FromStr for Stream {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "stdout" | "out" => Ok(Self::Stdout),
            "stderr" | "err" => Ok(Self::Stderr),
            _ => Err(crate::Error::InvalidStream(s.to_string())),
        }
    }
}
