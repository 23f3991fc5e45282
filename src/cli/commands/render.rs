//! One-shot rendering, mostly for trying patterns out from a shell.

use crate::Error;
use crate::cli::LogLevel;
use crate::config::Config;
use crate::fmt::preset;
use crate::internal;
use crate::layout::{Layout, PatternLayout};
use crate::record::LogRecord;
use std::io::Write;
use std::process::ExitCode;

/// Record fields given on the command line.
#[derive(Debug, Clone, Default)]
pub struct RenderArgs {
    pub pattern: Option<String>,
    pub preset: Option<String>,
    pub utc: bool,
    pub level: LogLevel,
    pub prefix: String,
    pub source: String,
    pub line: u32,
    pub message: Vec<String>,
}

/// Flags win over the config file; the config decides whatever flags leave open.
///
/// # Errors
/// [`Error::PresetNotFound`] for an unknown `--preset`; option errors from
/// switching to UTC.
pub fn build_layout(args: &RenderArgs, config: &Config) -> Result<PatternLayout, Error> {
    let layout = PatternLayout::from_config(config);

    if let Some(pattern) = &args.pattern {
        layout.set_pattern(pattern);
    } else if let Some(name) = &args.preset {
        let pattern = preset(name).ok_or_else(|| Error::PresetNotFound(name.clone()))?;
        layout.set_pattern(pattern);
    }

    if args.utc {
        layout.set_option("utc", true.into())?;
    }
    Ok(layout)
}

/// The record the command line describes, created now.
#[must_use]
pub fn build_record(args: &RenderArgs) -> LogRecord {
    LogRecord::new(args.level.into(), args.message.join(" "))
        .prefix(args.prefix.as_str())
        .source(args.source.as_str())
        .line(args.line)
}

#[must_use]
pub fn cmd_render(args: &RenderArgs, config: &Config) -> ExitCode {
    let layout = match build_layout(args, config) {
        Ok(layout) => layout,
        Err(e) => {
            internal::error("CLI", &format!("Cannot build layout: {e}"));
            return ExitCode::FAILURE;
        }
    };

    let bytes = layout.format(Some(&build_record(args)));
    let mut stdout = std::io::stdout().lock();
    if let Err(e) = stdout.write_all(&bytes).and_then(|()| stdout.flush()) {
        internal::error("CLI", &format!("Write failed: {e}"));
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
