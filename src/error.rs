//! Unified error type for all patlog operations.

/// Error type for patlog operations.
#[derive(Debug)]
pub enum Error {
    /// Option name is not recognized by the layout.
    BadOption(String),
    /// Option value has the wrong shape for the named option.
    BadValue(String),
    /// Value could not be coerced to a boolean.
    NotBool(String),
    /// Preset name is not one of the predefined patterns.
    PresetNotFound(String),
    /// I/O error.
    Io(std::io::Error),
    /// TOML config parsing error.
    ConfigParse(toml::de::Error),
    /// Config directory not found.
    ConfigDirNotFound,
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BadOption(name) => write!(f, "bad option: {name}"),
            Self::BadValue(name) => write!(f, "bad value for option: {name}"),
            Self::NotBool(value) => write!(f, "cannot convert to bool: {value}"),
            Self::PresetNotFound(name) => write!(f, "preset not found: {name}"),
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::ConfigParse(e) => write!(f, "parse error: {e}"),
            Self::ConfigDirNotFound => write!(f, "config directory not found"),
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
