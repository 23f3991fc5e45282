//! Command-line interface, built with Clap.

mod commands;

pub use commands::{
    RenderArgs, build_layout, build_record, cmd_codes, cmd_presets, cmd_render,
};

use crate::level::Level;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Log level for CLI arguments.
#[derive(Debug, Clone, Copy, clap::ValueEnum, Default)]
pub enum LogLevel {
    Finest,
    Fine,
    Debug,
    Trace,
    #[default]
    Info,
    Warning,
    Error,
    Critical,
}

impl From<LogLevel> for Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Finest => Self::Finest,
            LogLevel::Fine => Self::Fine,
            LogLevel::Debug => Self::Debug,
            LogLevel::Trace => Self::Trace,
            LogLevel::Info => Self::Info,
            LogLevel::Warning => Self::Warning,
            LogLevel::Error => Self::Error,
            LogLevel::Critical => Self::Critical,
        }
    }
}

/// patlog - Render log records through `%`-code patterns.
#[derive(Debug, Parser)]
#[command(
    name = "patlog",
    version,
    about = "Render log records through %-code patterns"
)]
pub struct Cli {
    /// Config file (defaults to ~/.config/patlog/patlog.toml)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Render one record created now and print it.
    Render {
        /// Literal pattern, e.g. "[%L] %M%n"
        #[arg(short, long, conflicts_with = "preset")]
        pattern: Option<String>,
        /// Named preset (default, short, abbrev, json)
        #[arg(long)]
        preset: Option<String>,
        /// Render times in UTC
        #[arg(long)]
        utc: bool,
        /// Record level
        #[arg(short, long, value_enum, default_value_t)]
        level: LogLevel,
        /// Record prefix
        #[arg(long, default_value = "")]
        prefix: String,
        /// Record source location
        #[arg(long, default_value = "")]
        source: String,
        /// Record line number
        #[arg(long, default_value_t = 0)]
        line: u32,
        /// Message words, joined with spaces
        message: Vec<String>,
    },
    /// List the named presets.
    Presets,
    /// List the placeholder codes.
    Codes,
}
