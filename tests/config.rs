//! Tests for TOML configuration loading.

use patlog::{Config, Error, Layout, Level, LogRecord, PATTERN_DEFAULT, PATTERN_SHORT, PatternLayout};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

#[test]
fn missing_file_yields_defaults() {
    let tmp_dir = TempDir::new().unwrap();
    let config = Config::load_from(&tmp_dir.path().join("absent.toml")).unwrap();
    assert_eq!(config.parse_level(), Level::Info);
    assert_eq!(config.pattern(), PATTERN_DEFAULT);
    assert!(!config.layout.utc);
}

#[test]
fn empty_file_yields_defaults() {
    let tmp_dir = TempDir::new().unwrap();
    let path = tmp_dir.path().join("patlog.toml");
    fs::write(&path, "").unwrap();

    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.layout.preset, "default");
    assert!(config.layout.pattern.is_empty());
}

#[test]
fn full_file() {
    let tmp_dir = TempDir::new().unwrap();
    let path = tmp_dir.path().join("patlog.toml");
    fs::write(
        &path,
        r#"
[general]
level = "warning"

[layout]
pattern = "%l|%M"
preset = "short"
utc = true
"#,
    )
    .unwrap();

    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.parse_level(), Level::Warning);
    assert_eq!(config.pattern(), "%l|%M");
    assert!(config.layout.utc);

    let layout = PatternLayout::from_config(&config);
    assert!(layout.is_utc());
    let rec = LogRecord::new(Level::Debug, "cfg");
    assert_eq!(layout.format(Some(&rec)), b"2|cfg");
}

#[test]
fn preset_used_when_pattern_empty() {
    let tmp_dir = TempDir::new().unwrap();
    let path = tmp_dir.path().join("patlog.toml");
    fs::write(&path, "[layout]\npreset = \"short\"\n").unwrap();

    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.pattern(), PATTERN_SHORT);
}

#[test]
fn unknown_preset_falls_back_to_default() {
    let tmp_dir = TempDir::new().unwrap();
    let path = tmp_dir.path().join("patlog.toml");
    fs::write(&path, "[layout]\npreset = \"fancy\"\n").unwrap();

    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.pattern(), PATTERN_DEFAULT);
}

#[test]
fn unknown_level_falls_back_to_info() {
    let tmp_dir = TempDir::new().unwrap();
    let path = tmp_dir.path().join("patlog.toml");
    fs::write(&path, "[general]\nlevel = \"loud\"\n").unwrap();

    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.parse_level(), Level::Info);
}

#[test]
fn syntax_error_is_reported() {
    let tmp_dir = TempDir::new().unwrap();
    let path = tmp_dir.path().join("patlog.toml");
    fs::write(&path, "[layout\npattern = ").unwrap();

    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(err, Error::ConfigParse(_)));
    assert!(std::error::Error::source(&err).is_some());
}

#[test]
fn wrong_type_is_reported() {
    let tmp_dir = TempDir::new().unwrap();
    let path = tmp_dir.path().join("patlog.toml");
    fs::write(&path, "[layout]\nutc = \"sometimes\"\n").unwrap();

    assert!(matches!(
        Config::load_from(&path),
        Err(Error::ConfigParse(_))
    ));
}

#[test]
fn default_path_lives_under_patlog_dir() {
    let path = Config::get_config_path().unwrap();
    assert!(path.ends_with("patlog/patlog.toml"));
}

#[test]
fn tilde_path_is_expanded() {
    let home = directories::BaseDirs::new().unwrap().home_dir().to_path_buf();
    // home may be read-only in sandboxed runs
    let Ok(tmp_dir) = tempfile::Builder::new().prefix(".patlog-test").tempdir_in(&home) else {
        return;
    };
    fs::write(
        tmp_dir.path().join("patlog.toml"),
        "[general]\nlevel = \"error\"\n\n[layout]\npattern = \"%M\"\n",
    )
    .unwrap();

    let relative = tmp_dir.path().strip_prefix(&home).unwrap();
    let tilde = format!("~/{}/patlog.toml", relative.display());
    let config = Config::load_from(Path::new(&tilde)).unwrap();
    assert_eq!(config.parse_level(), Level::Error);
    assert_eq!(config.pattern(), "%M");
}
