use crate::fmt::PRESETS;
use std::process::ExitCode;

/// Prints each preset name with its pattern, escapes made visible.
#[must_use]
pub fn cmd_presets() -> ExitCode {
    for (name, pattern) in PRESETS {
        println!("{name:<8} {}", pattern.escape_debug());
    }
    ExitCode::SUCCESS
}
