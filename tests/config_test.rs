//! Tests for loading the TOML configuration.

use std::fs;
use tempfile::TempDir;
use tictactoe_timetravel::{AppConfig, GameSession, Variant, new_session};

#[test]
fn test_load_full_config() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("tictactoe.toml");
    fs::write(
        &path,
        r#"variant = "store"
ascending = false
log_actions = false
log_file = "game.log"
log_filter = "debug"
"#,
    )
    .expect("Failed to write TOML");

    let config = AppConfig::from_file(&path).expect("Load failed");
    assert_eq!(*config.variant(), Variant::Store);
    assert!(!*config.ascending());
    assert!(!*config.log_actions());
    assert_eq!(config.log_file().to_str(), Some("game.log"));
    assert_eq!(config.log_filter(), "debug");
}

#[test]
fn test_missing_file_uses_defaults() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let config = AppConfig::load_or_default(dir.path().join("absent.toml")).expect("Load failed");
    assert_eq!(config, AppConfig::default());
    assert_eq!(*config.variant(), Variant::Local);
    assert!(*config.ascending());
}

#[test]
fn test_invalid_toml_is_error() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("bad.toml");
    fs::write(&path, "this is not valid toml !!!@@@").expect("Write failed");
    let err = AppConfig::from_file(&path).unwrap_err();
    assert!(err.to_string().contains("Failed to parse config"));
}

#[test]
fn test_config_order_reaches_session() {
    let config = AppConfig::from_toml("ascending = false").expect("Parse failed");
    for variant in [Variant::Local, Variant::Store] {
        let session = new_session(variant, &config);
        assert!(!*session.state().ascending());
        assert_eq!(session.variant(), variant);
    }
}
