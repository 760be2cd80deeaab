//! Unified error type for taglog operations.
//!
//! None of these ever escape a logging call: sink failures go to the
//! logger's error hook or the internal diagnostic logger instead.

use std::path::PathBuf;

/// Error type for taglog operations.
#[derive(Debug)]
pub enum Error {
    /// I/O error, usually from a sink or a config file read.
    Io(std::io::Error),
    /// TOML config parsing error.
    ConfigParse(toml::de::Error),
    /// Config directory not found.
    ConfigDirNotFound,
    /// Config file exists but is not a regular file.
    InvalidConfigPath(PathBuf),
    /// Invalid log level string.
    InvalidLevel(String),
    /// Invalid color name.
    InvalidColor(String),
    /// Invalid output stream name.
    InvalidStream(String),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::ConfigParse(e) => write!(f, "parse error: {e}"),
            Self::ConfigDirNotFound => write!(f, "config directory not found"),
            Self::InvalidConfigPath(p) => write!(f, "not a config file: {}", p.display()),
            Self::InvalidLevel(level) => write!(f, "invalid level: {level}"),
            Self::InvalidColor(color) => write!(f, "invalid color: {color}"),
            Self::InvalidStream(stream) => write!(f, "invalid stream: {stream}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::ConfigParse(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<toml::de::Error> for Error {
    fn from(e: toml::de::Error) -> Self {
        Self::ConfigParse(e)
    }
}

impl From<crate::level::ParseLevelError> for Error {
    fn from(e: crate::level::ParseLevelError) -> Self {
        Self::InvalidLevel(e.input().to_string())
    }
}

impl From<crate::fmt::ParseColorError> for Error {
    fn from(e: crate::fmt::ParseColorError) -> Self {
        Self::InvalidColor(e.input().to_string())
    }
}
