//! patlog's own diagnostic logger, rendered through a [`PatternLayout`] so
//! config errors and ignored options look like any other log line.
//!
//! Uses `OnceLock` so the logger is initialized exactly once, even if
//! multiple entry points (CLI, library callers, tests) race to call `init`.

use crate::config::Config;
use crate::layout::{Layout, PatternLayout};
use crate::level::Level;
use crate::record::LogRecord;
use std::io::Write;
use std::sync::OnceLock;

/// Scope travels in the prefix slot.
const INTERNAL_PATTERN: &str = "[%T] [%L] %P: %M\n";

struct InternalLogger {
    min_level: Level,
    layout: PatternLayout,
}

static INTERNAL_LOGGER: OnceLock<InternalLogger> = OnceLock::new();

/// Fallback initializer that loads config itself.
///
/// Only the first call takes effect; later calls are no-ops.
pub fn init() {
    let was_init = INTERNAL_LOGGER.get().is_some();
    INTERNAL_LOGGER.get_or_init(|| {
        let config = Config::load().unwrap_or_default();
        build_internal_logger(&config)
    });
    if !was_init {
        debug("INTERNAL", "Internal logger ready");
    }
}

/// Preferred initializer, reuses an already-loaded config.
pub fn init_with_config(config: &Config) {
    let was_init = INTERNAL_LOGGER.get().is_some();
    INTERNAL_LOGGER.get_or_init(|| build_internal_logger(config));
    if !was_init {
        debug("INTERNAL", &format!("Log level: {}", config.parse_level().name()));
        debug("INTERNAL", "Internal logger ready");
    }
}

fn build_internal_logger(config: &Config) -> InternalLogger {
    InternalLogger {
        min_level: config.parse_level(),
        layout: PatternLayout::new(INTERNAL_PATTERN),
    }
}

/// Whether a message at `level` would be written. Always false before init.
#[must_use]
pub fn enabled(level: Level) -> bool {
    INTERNAL_LOGGER
        .get()
        .is_some_and(|logger| level >= logger.min_level)
}

/// Pre-init calls silently vanish rather than crashing.
fn log(level: Level, scope: &str, msg: &str) {
    let Some(logger) = INTERNAL_LOGGER.get() else {
        return;
    };
    if !enabled(level) {
        return;
    }

    let record = LogRecord::new(level, msg).prefix(scope);
    let line = logger.layout.format(Some(&record));
    let _ = std::io::stderr().lock().write_all(&line);
}

/// Startup and teardown diagnostics.
pub fn debug(scope: &str, msg: &str) {
    log(Level::Debug, scope, msg);
}

/// Normal operational milestones, e.g. config loaded.
pub fn info(scope: &str, msg: &str) {
    log(Level::Info, scope, msg);
}

/// Non-fatal anomalies: ignored options, unknown presets.
pub fn warn(scope: &str, msg: &str) {
    log(Level::Warning, scope, msg);
}

pub fn error(scope: &str, msg: &str) {
    log(Level::Error, scope, msg);
}

