//! Logger construction from a loaded [`Config`].

use super::{Logger, LoggerBuilder};
use crate::config::Config;
use crate::internal;

impl Logger {
    /// Loads the default config file and builds a logger for `tag` from it.
    ///
    /// A missing or unreadable config falls back to defaults, so this never fails.
    #[must_use]
    pub fn from_default_config(tag: impl Into<String>) -> Self {
        let config = Config::load().unwrap_or_else(|e| {
            internal::warn("CONFIG", &format!("Using defaults: {e}"));
            Config::default()
        });
        Self::from_config(tag, &config)
    }

    /// `[general]` settings with the `[tags.<tag>]` section applied on top.
    ///
    /// Unknown level, color or stream names fall back to defaults with an
    /// internal warning instead of failing.
    #[must_use]
    pub fn from_config(tag: impl Into<String>, config: &Config) -> Self {
        let tag = tag.into();
        let config = config.for_tag(&tag);
        internal::debug(
            "LOGGER",
            &format!(
                "Building logger tag={tag:?} level={} stream={}",
                config.general.level, config.general.stream
            ),
        );

        let mut builder = LoggerBuilder::new(tag)
            .level(config.parse_level())
            .stream(config.parse_stream());

        if let Some(color) = config.parse_color() {
            builder = builder.color(color);
        }

        builder.build()
    }
}
