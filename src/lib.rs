//! `taglog` - leveled, tagged console logger.
//!
//! Each [`Logger`] carries a tag, a color derived from that tag, a minimum
//! level and a sink. Every line names the function that logged it:
//!
//! ```text
//! [2024-01-02T15:04:05Z] [ INFO] [svc] [app::serve] started ok
//! ```
//!
//! # Example
//!
//! ```
//! use taglog::{Level, Logger, MemorySink};
//!
//! let out = MemorySink::new();
//! let log = Logger::builder("svc")
//!     .level(Level::Debug)
//!     .sink(out.clone())
//!     .build();
//!
//! taglog::info!(log, "started", " ok");
//! taglog::debugf!(log, "listening on port {}", 8080);
//! assert_eq!(out.lines().len(), 2);
//! ```
//!
//! # Features
//!
//! - `cli` (default): the `taglog` command-line binary

pub mod caller;
pub mod config;
mod error;
pub mod fmt;
pub mod internal;
pub mod level;
pub mod logger;
mod macros;
pub mod output;

#[cfg(feature = "cli")]
pub mod cli;

pub use config::Config;
pub use error::Error;
pub use fmt::{Color, Printable, Shown};
pub use level::Level;
pub use logger::{Logger, LoggerBuilder, LoggerOption, options};
pub use output::{MemorySink, Sink, StderrSink, StdoutSink, Stream, WriterSink};
