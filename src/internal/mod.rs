//! taglog's own diagnostic logger, used for config loading and dropped lines.
//!
//! Silent until `init` runs. It writes to stderr under the tag `taglog` and
//! swallows its own sink failures, so reporting a failure can never recurse.

use crate::config::Config;
use crate::level::Level;
use crate::logger::Logger;
use crate::output::Stream;
use std::sync::OnceLock;

static INTERNAL_LOGGER: OnceLock<Logger> = OnceLock::new();

/// Enables internal diagnostics at `level`. Only the first call takes effect.
pub fn init(level: Level) {
    let was_init = is_initialized();
    INTERNAL_LOGGER.get_or_init(|| build_internal_logger(level));
    if !was_init {
        debug("INTERNAL", &format!("Internal logger ready at {level}"));
    }
}

/// Same as [`init`], with the level taken from `[general]`.
pub fn init_with_config(config: &Config) {
    init(config.parse_level());
}

/// Whether `init` has run.
#[must_use]
pub fn is_initialized() -> bool {
    INTERNAL_LOGGER.get().is_some()
}

fn build_internal_logger(level: Level) -> Logger {
    Logger::builder("taglog")
        .level(level)
        .stream(Stream::Stderr)
        .on_error(|_| {})
        .build()
}

/// Pre-init calls silently vanish rather than crashing.
fn log(level: Level, scope: &str, msg: &str) {
    if let Some(logger) = INTERNAL_LOGGER.get() {
        logger.log(level, format_args!("{scope}: {msg}"));
    }
}

pub fn debug(scope: &str, msg: &str) {
    log(Level::Debug, scope, msg);
}

pub fn info(scope: &str, msg: &str) {
    log(Level::Info, scope, msg);
}

pub fn warn(scope: &str, msg: &str) {
    log(Level::Warn, scope, msg);
}

pub fn error(scope: &str, msg: &str) {
    log(Level::Error, scope, msg);
}
