//! Severity levels carried by every record, and the names `%L` renders them with.

use std::fmt;
use std::str::FromStr;

/// Ordinals are stable: `%l` prints them as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Level {
    /// Extremely detailed tracing, usually compiled out of releases.
    Finest = 0,
    /// Fine-grained tracing.
    Fine = 1,
    /// Diagnostics for developers.
    Debug = 2,
    /// Call flow tracing.
    Trace = 3,
    /// Normal operational milestones.
    #[default]
    Info = 4,
    /// Anomalies that do not stop the operation.
    Warning = 5,
    /// Failures of a single operation.
    Error = 6,
    /// Failures that threaten the whole process.
    Critical = 7,
}

impl Level {
    /// Four-letter display name, fixed width so columns line up.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Finest => "FNST",
            Self::Fine => "FINE",
            Self::Debug => "DEBG",
            Self::Trace => "TRAC",
            Self::Info => "INFO",
            Self::Warning => "WARN",
            Self::Error => "EROR",
            Self::Critical => "CRIT",
        }
    }

    /// Lowercase because config files and CLI args use lowercase level strings.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Finest => "finest",
            Self::Fine => "fine",
            Self::Debug => "debug",
            Self::Trace => "trace",
            Self::Info => "info",
            Self::Warning => "warning",
            Self::Error => "error",
            Self::Critical => "critical",
        }
    }

    #[must_use]
    pub const fn as_u8(self) -> u8 {
        self as u8
    }

    /// Inverse of [`Level::as_u8`]; `None` for ordinals past `Critical`.
    #[must_use]
    pub const fn from_u8(ordinal: u8) -> Option<Self> {
        match ordinal {
            0 => Some(Self::Finest),
            1 => Some(Self::Fine),
            2 => Some(Self::Debug),
            3 => Some(Self::Trace),
            4 => Some(Self::Info),
            5 => Some(Self::Warning),
            6 => Some(Self::Error),
            7 => Some(Self::Critical),
            _ => None,
        }
    }

    /// Every level in ascending order. Used by help output and tests.
    #[must_use]
    pub const fn all() -> [Self; 8] {
        [
            Self::Finest,
            Self::Fine,
            Self::Debug,
            Self::Trace,
            Self::Info,
            Self::Warning,
            Self::Error,
            Self::Critical,
        ]
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned by `FromStr` so callers can distinguish "unknown level" from other parse failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseLevelError(String);

impl fmt::Display for ParseLevelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown log level: '{}'", self.0)
    }
}

impl std::error::Error for ParseLevelError {}

impl FromStr for Level {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "finest" | "fnst" => Ok(Self::Finest),
            "fine" => Ok(Self::Fine),
            "debug" | "debg" => Ok(Self::Debug),
            "trace" | "trac" => Ok(Self::Trace),
            "info" => Ok(Self::Info),
            "warning" | "warn" => Ok(Self::Warning),
            "error" | "eror" | "err" => Ok(Self::Error),
            "critical" | "crit" => Ok(Self::Critical),
            _ => Err(ParseLevelError(s.to_string())),
        }
    }
}
