//! TOML configuration loading.
//!
//! Separated from struct definitions so that the loading logic stays
//! independent of the serde schema.

mod structs;

pub use structs::{GeneralConfig, LayoutConfig};

use crate::fmt::{PATTERN_DEFAULT, preset};
use crate::internal;
use crate::level::Level;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// A completely empty config file must still produce a working layout, so
/// every field has a default.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Settings that are not about any one layout.
    pub general: GeneralConfig,
    /// Pattern and time zone mode of the layout.
    pub layout: LayoutConfig,
}

impl Config {
    /// Loads the user's config from the default location.
    ///
    /// # Errors
    /// Fails if the config directory can't be determined, the file can't be
    /// read, or TOML parsing hits a syntax error.
    pub fn load() -> Result<Self, crate::Error> {
        internal::debug("CONFIG", "Loading config from default location");
        let config_path = Self::get_config_path()?;
        let config = Self::load_from(&config_path)?;
        internal::info(
            "CONFIG",
            &format!("Config loaded from {}", config_path.display()),
        );
        Ok(config)
    }

    /// Loads configuration from an explicit path. A leading `~` is expanded;
    /// a missing file yields the defaults.
    ///
    /// # Errors
    /// Returns error if the file cannot be read or parsed.
    pub fn load_from(path: &Path) -> Result<Self, crate::Error> {
        let raw = path.to_string_lossy();
        let expanded = shellexpand::tilde(&raw);
        let path = Path::new(expanded.as_ref());

        if !path.exists() {
            internal::debug("CONFIG", "Config file not found, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)?;
        Ok(config)
    }

    /// `<config dir>/patlog/patlog.toml`, e.g. `~/.config/patlog/patlog.toml` on Linux.
    ///
    /// # Errors
    /// Fails when the platform has no concept of a config directory.
    pub fn get_config_path() -> Result<PathBuf, crate::Error> {
        directories::BaseDirs::new()
            .map(|dirs| dirs.config_dir().join("patlog").join("patlog.toml"))
            .ok_or(crate::Error::ConfigDirNotFound)
    }

    /// Config stores level as a string for TOML ergonomics.
    #[must_use]
    pub fn parse_level(&self) -> Level {
        self.general.level.parse().unwrap_or(Level::Info)
    }

    /// Effective pattern: the literal one if set, else the named preset.
    /// Unknown presets fall back to [`PATTERN_DEFAULT`].
    #[must_use]
    pub fn pattern(&self) -> String {
        if !self.layout.pattern.is_empty() {
            return self.layout.pattern.clone();
        }
        preset(&self.layout.preset).map_or_else(
            || {
                internal::warn(
                    "CONFIG",
                    &format!("Unknown preset '{}', using default", self.layout.preset),
                );
                PATTERN_DEFAULT.to_string()
            },
            ToString::to_string,
        )
    }
}
