//! `patlog` renders records through patterns from the shell.
//!
//! Usage:
//!   patlog render [--pattern P | --preset NAME] [--utc] [--level L] MESSAGE...
//!   patlog presets
//!   patlog codes

use clap::Parser;
use patlog::cli::{Cli, Command, RenderArgs, cmd_codes, cmd_presets, cmd_render};
use patlog::config::Config;
use patlog::internal;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();

    let loaded = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    };
    let config = match loaded {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error loading config: {e}");
            return ExitCode::FAILURE;
        }
    };

    internal::init_with_config(&config);

    match cli.command {
        Command::Render {
            pattern,
            preset,
            utc,
            level,
            prefix,
            source,
            line,
            message,
        } => cmd_render(
            &RenderArgs {
                pattern,
                preset,
                utc,
                level,
                prefix,
                source,
                line,
                message,
            },
            &config,
        ),
        Command::Presets => cmd_presets(),
        Command::Codes => cmd_codes(),
    }
}
