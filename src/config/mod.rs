//! Optional TOML configuration for loggers.
//!
//! Nothing here runs implicitly: `Logger::new` only uses compile-time defaults.
//! Programs that want file-driven settings load a `Config` themselves and hand
//! it to `Logger::from_config`.

mod structs;

pub use structs::{GeneralConfig, TagOverride};

use crate::fmt::Color;
use crate::internal;
use crate::level::Level;
use crate::output::Stream;
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

/// An empty file must still produce a working config, hence `#[serde(default)]` throughout.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Level, color and stream for every tag.
    pub general: GeneralConfig,
    /// Overrides keyed by tag name.
    pub tags: HashMap<String, TagOverride>,
}

impl Config {
    /// Loads the config from the default location, or defaults when there is no file.
    ///
    /// # Errors
    /// Fails if the config directory can't be determined, the file can't be read,
    /// or TOML parsing hits a syntax error.
    pub fn load() -> Result<Self, crate::Error> {
        internal::debug("CONFIG", "Loading config from default location");
        let config_path = Self::get_config_path()?;
        Self::load_from(&config_path)
    }

    /// Loads configuration from an explicit path. A missing file yields defaults.
    ///
    /// # Errors
    /// Returns error if the path is not a file, cannot be read, or fails to parse.
    pub fn load_from(path: &Path) -> Result<Self, crate::Error> {
        if !path.exists() {
            internal::debug(
                "CONFIG",
                &format!("{} not found, using defaults", path.display()),
            );
            return Ok(Self::default());
        }
        if !path.is_file() {
            return Err(crate::Error::InvalidConfigPath(path.to_path_buf()));
        }

        let content = fs::read_to_string(path)?;
        let config = Self::from_toml(&content)?;
        internal::info(
            "CONFIG",
            &format!("Config loaded from {}", path.display()),
        );
        Ok(config)
    }

    /// Parses config text directly.
    ///
    /// # Errors
    /// TOML syntax or type errors.
    pub fn from_toml(content: &str) -> Result<Self, crate::Error> {
        Ok(toml::from_str(content)?)
    }

    /// `~/.config/taglog/taglog.toml` on Linux, the platform equivalent elsewhere.
    ///
    /// # Errors
    /// Fails when the platform has no concept of a config directory.
    pub fn get_config_path() -> Result<PathBuf, crate::Error> {
        directories::BaseDirs::new()
            .map(|dirs| dirs.config_dir().join("taglog").join("taglog.toml"))
            .ok_or(crate::Error::ConfigDirNotFound)
    }

    /// The effective settings for `tag`: `[general]` with `[tags.<tag>]` laid over it.
    #[must_use]
    pub fn for_tag(&self, tag: &str) -> Self {
        let mut config = self.clone();

        if let Some(over) = self.tags.get(tag) {
            if let Some(ref level) = over.level {
                config.general.level.clone_from(level);
            }
            if let Some(ref color) = over.color {
                config.general.color = Some(color.clone());
            }
            if let Some(ref stream) = over.stream {
                config.general.stream.clone_from(stream);
            }
        }

        config
    }

    /// Falls back to `Info` on an unknown level so building a logger never fails.
    #[must_use]
    pub fn parse_level(&self) -> Level {
        self.general.level.parse::<Level>().unwrap_or_else(|e| {
            internal::warn("CONFIG", &format!("{e}, using info"));
            Level::Info
        })
    }

    /// `None` when unset or unknown; the logger then keeps its hashed color.
    #[must_use]
    pub fn parse_color(&self) -> Option<Color> {
        let name = self.general.color.as_deref()?;
        name.parse::<Color>()
            .map_err(|e| internal::warn("CONFIG", &format!("{e}, keeping tag color")))
            .ok()
    }

    /// Falls back to stdout on an unknown stream name.
    #[must_use]
    pub fn parse_stream(&self) -> Stream {
        self.general.stream.parse::<Stream>().unwrap_or_else(|e| {
            internal::warn("CONFIG", &format!("{e}, using stdout"));
            Stream::Stdout
        })
    }
}
