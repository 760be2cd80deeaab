//! Configuration struct definitions.

use serde::Deserialize;

/// Settings applied to every logger built from this config.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Minimum log level.
    pub level: String,
    /// Tag color; unset keeps the hashed color.
    pub color: Option<String>,
    /// Output stream (stdout, stderr).
    pub stream: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            color: None,
            stream: "stdout".to_string(),
        }
    }
}

/// Per-tag overrides from a `[tags.<name>]` section. Unset fields keep the general value.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct TagOverride {
    /// Minimum log level override.
    pub level: Option<String>,
    /// Tag color override.
    pub color: Option<String>,
    /// Output stream override.
    pub stream: Option<String>,
}
