//! Config file loading, validation and flag overrides.

use clap::Parser;
use minidash::cli::Cli;
use minidash::config::{Config, ConfigError};
use std::fs;
use tempfile::TempDir;

#[test]
fn missing_file_yields_defaults() {
    let dir = TempDir::new().unwrap();
    let config = Config::load_from(&dir.path().join("absent.toml")).unwrap();
    assert_eq!(config, Config::default());
    assert_eq!(config.api.base_url, "https://jsonplaceholder.typicode.com");
    assert_eq!(config.ui.rows_per_page, 5);
    assert_eq!(config.ui.toast_ttl_ms, 3000);
}

#[test]
fn partial_file_keeps_other_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(
        &path,
        r#"
[api]
base_url = "http://localhost:3000"

[ui]
rows_per_page = 10
"#,
    )
    .unwrap();

    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.api.base_url, "http://localhost:3000");
    assert_eq!(config.api.timeout_seconds, 30);
    assert_eq!(config.ui.rows_per_page, 10);
    assert_eq!(config.ui.tick_rate_ms, 250);
    assert_eq!(config.session.dir, None);
}

#[test]
fn invalid_toml_is_a_parse_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[api\nbase_url = ").unwrap();

    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));
}

#[test]
fn validation_rejects_bad_values() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");

    fs::write(&path, "[api]\nbase_url = \"ftp://example.com\"\n").unwrap();
    let err = Config::load_from(&path).unwrap_err();
    assert!(err.to_string().contains("must start with http"));

    fs::write(&path, "[ui]\nrows_per_page = 0\n").unwrap();
    assert!(matches!(
        Config::load_from(&path),
        Err(ConfigError::ValidationError { .. })
    ));
}

#[test]
fn session_dir_override_is_used() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[session]\ndir = \"/tmp/minidash-sessions\"\n").unwrap();

    let config = Config::load_from(&path).unwrap();
    assert_eq!(
        config.session.resolve_dir(),
        std::path::PathBuf::from("/tmp/minidash-sessions")
    );
}

#[test]
fn flags_override_file_values_before_validation() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[ui]\nrows_per_page = 7\n").unwrap();

    let cli = Cli::parse_from([
        "minidash",
        "--config",
        path.to_str().unwrap(),
        "--base-url",
        "http://localhost:8080/",
    ]);
    let mut config = Config::load_from(&cli.config_path()).unwrap();
    cli.apply(&mut config);
    config.validate().unwrap();
    assert_eq!(config.api.base_url, "http://localhost:8080");
    assert_eq!(config.ui.rows_per_page, 7);

    let cli = Cli::parse_from(["minidash", "--rows-per-page", "0"]);
    cli.apply(&mut config);
    assert!(matches!(
        config.validate(),
        Err(ConfigError::ValidationError { .. })
    ));
}
