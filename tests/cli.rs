//! Tests for command-line parsing.

#![cfg(feature = "cli")]

use clap::Parser;
use patlog::cli::{Cli, Command, LogLevel, RenderArgs, build_layout, build_record, cmd_render};
use patlog::{Config, Error, Layout, Level, LogRecord, PATTERN_SHORT};
use std::process::ExitCode;

#[test]
fn render_with_flags() {
    let cli = Cli::try_parse_from([
        "patlog", "render", "--pattern", "%L %M", "--utc", "--level", "error", "--line", "7",
        "disk", "full",
    ])
    .unwrap();

    let Command::Render {
        pattern,
        preset,
        utc,
        level,
        line,
        message,
        ..
    } = cli.command
    else {
        panic!("expected render");
    };
    assert_eq!(pattern.as_deref(), Some("%L %M"));
    assert_eq!(preset, None);
    assert!(utc);
    assert_eq!(Level::from(level), Level::Error);
    assert_eq!(line, 7);
    assert_eq!(message, ["disk", "full"]);
}

#[test]
fn render_defaults() {
    let cli = Cli::try_parse_from(["patlog", "render", "hi"]).unwrap();
    let Command::Render { level, utc, .. } = cli.command else {
        panic!("expected render");
    };
    assert_eq!(Level::from(level), Level::Info);
    assert!(!utc);
    assert!(cli.config.is_none());
}

#[test]
fn pattern_conflicts_with_preset() {
    assert!(
        Cli::try_parse_from(["patlog", "render", "--pattern", "%M", "--preset", "json", "x"])
            .is_err()
    );
}

#[test]
fn global_config_flag() {
    let cli = Cli::try_parse_from(["patlog", "presets", "--config", "/tmp/p.toml"]).unwrap();
    assert!(matches!(cli.command, Command::Presets));
    assert_eq!(cli.config.unwrap().to_str(), Some("/tmp/p.toml"));
}

#[test]
fn unknown_level_rejected() {
    assert!(Cli::try_parse_from(["patlog", "render", "--level", "loud", "x"]).is_err());
}

fn config_with_pattern(pattern: &str) -> Config {
    let mut config = Config::default();
    config.layout.pattern = pattern.to_string();
    config
}

#[test]
fn unknown_preset_fails_render() {
    let args = RenderArgs {
        preset: Some("nope".into()),
        message: vec!["x".into()],
        ..Default::default()
    };
    let code = cmd_render(&args, &Config::default());
    assert_eq!(format!("{code:?}"), format!("{:?}", ExitCode::FAILURE));

    assert!(matches!(
        build_layout(&args, &Config::default()),
        Err(Error::PresetNotFound(name)) if name == "nope"
    ));
}

#[test]
fn pattern_flag_overrides_config() {
    let args = RenderArgs {
        pattern: Some("%M!".into()),
        ..Default::default()
    };
    let layout = build_layout(&args, &config_with_pattern("%L")).unwrap();
    let rec = LogRecord::new(Level::Info, "msg");
    assert_eq!(layout.format(Some(&rec)), b"msg!");
}

#[test]
fn preset_flag_overrides_config() {
    let args = RenderArgs {
        preset: Some("short".into()),
        ..Default::default()
    };
    let layout = build_layout(&args, &config_with_pattern("%L")).unwrap();
    assert_eq!(layout.template(), patlog::Template::parse(PATTERN_SHORT));
}

#[test]
fn config_decides_without_flags() {
    let layout = build_layout(&RenderArgs::default(), &config_with_pattern("%L")).unwrap();
    let rec = LogRecord::new(Level::Warning, "msg");
    assert_eq!(layout.format(Some(&rec)), b"WARN");
    assert!(!layout.is_utc());
}

#[test]
fn utc_flag_switches_layout() {
    let args = RenderArgs {
        utc: true,
        ..Default::default()
    };
    assert!(build_layout(&args, &Config::default()).unwrap().is_utc());
}

#[test]
fn record_from_args() {
    let args = RenderArgs {
        level: LogLevel::Error,
        prefix: "app".into(),
        source: "src/main.rs".into(),
        line: 9,
        message: vec!["disk".into(), "full".into()],
        ..Default::default()
    };
    let rec = build_record(&args);
    assert_eq!(rec.level, Level::Error);
    assert_eq!(rec.prefix, "app");
    assert_eq!(rec.source, "src/main.rs");
    assert_eq!(rec.line, 9);
    assert_eq!(rec.message, "disk full");
}
