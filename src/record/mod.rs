//! The structured event a layout renders. Layouts only ever borrow it.

use crate::level::Level;
use chrono::{DateTime, FixedOffset, Local};

/// Carries all data a layout needs to render one log line.
///
/// `created` keeps the offset it was taken in, so local-mode rendering shows
/// the wall clock of the process that produced the record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogRecord {
    pub level: Level,
    pub created: DateTime<FixedOffset>,
    /// Free text placed in front of the message by the logger (e.g. a component name).
    pub prefix: String,
    /// Source location, usually a file path.
    pub source: String,
    pub line: u32,
    pub message: String,
}

impl LogRecord {
    /// Stamps the record with the current local time.
    #[must_use]
    pub fn new(level: Level, message: impl Into<String>) -> Self {
        Self {
            level,
            created: Local::now().fixed_offset(),
            prefix: String::new(),
            source: String::new(),
            line: 0,
            message: message.into(),
        }
    }

    #[must_use]
    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    #[must_use]
    pub fn source(mut self, source: impl Into<String>) -> Self {
        self.source = source.into();
        self
    }

    #[must_use]
    pub const fn line(mut self, line: u32) -> Self {
        self.line = line;
        self
    }

    /// Replaces the creation instant, e.g. when replaying records or in tests.
    #[must_use]
    pub const fn created(mut self, created: DateTime<FixedOffset>) -> Self {
        self.created = created;
        self
    }

    /// Text after the last `/` of the source, or the whole source when there is none.
    #[must_use]
    pub fn short_source(&self) -> &str {
        self.source
            .rfind('/')
            .map_or(self.source.as_str(), |idx| &self.source[idx + 1..])
    }
}
