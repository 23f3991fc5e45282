//! `patlog` - Pattern-driven log record layout.
//!
//! A pattern such as `"[%D %T %z] [%L] (%s:%N) %M\n"` is compiled once into
//! literal and placeholder segments; every record is then rendered by walking
//! those segments and writing fixed-width fields straight into a byte buffer.
//!
//! # Example
//!
//! ```
//! use patlog::{Layout, Level, LogRecord, PatternLayout};
//!
//! let layout = PatternLayout::new("[%L] %M\n");
//! let record = LogRecord::new(Level::Info, "hello");
//!
//! assert_eq!(layout.format(Some(&record)), b"[INFO] hello\n");
//! ```
//!
//! # Features
//!
//! - `cli` (default): Enables the `patlog` command-line tool

pub mod config;
mod error;
pub mod fmt;
pub mod internal;
pub mod layout;
pub mod level;
pub mod record;

#[cfg(feature = "cli")]
pub mod cli;

pub use config::Config;
pub use error::Error;
pub use fmt::{
    PATTERN_ABBREV, PATTERN_DEFAULT, PATTERN_JSON, PATTERN_SHORT, Placeholder, Template, ZoneCache,
    zone_abbreviation,
};
pub use layout::{Layout, NIL, OptionValue, PatternLayout, to_bool};
pub use level::{Level, ParseLevelError};
pub use record::LogRecord;
