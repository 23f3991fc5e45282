//! Configuration struct definitions.

use serde::Deserialize;

/// General configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Minimum level of patlog's own diagnostics.
    pub level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

/// Pattern layout configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Literal `%`-code pattern. Takes precedence over `preset` when non-empty.
    pub pattern: String,
    /// Named preset (default, short, abbrev, json).
    pub preset: String,
    /// Render times in UTC instead of the record's local offset.
    pub utc: bool,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            pattern: String::new(),
            preset: "default".to_string(),
            utc: false,
        }
    }
}
