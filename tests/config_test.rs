//! Config file loading.

use std::io::Write;
use std::time::Duration;
use tictactoe_vs_ai::{GameConfig, PickerKind};

#[test]
fn test_load_from_toml_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "ai_delay_ms = 250\nai = \"first\"\nseed = 17").unwrap();

    let config = GameConfig::from_file(file.path()).unwrap();

    assert_eq!(config.ai_delay(), Duration::from_millis(250));
    assert_eq!(*config.ai(), PickerKind::First);
    assert_eq!(*config.seed(), Some(17));
}

#[test]
fn test_missing_file_falls_back_to_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = GameConfig::load_or_default(dir.path().join("absent.toml")).unwrap();
    assert_eq!(config, GameConfig::default());
}

#[test]
fn test_malformed_file_is_an_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "ai = \"minimax\"").unwrap();

    let err = GameConfig::from_file(file.path()).unwrap_err();
    assert!(err.message.starts_with("Failed to parse config"));
}

#[test]
fn test_cli_overrides_win_over_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "ai_delay_ms = 250").unwrap();

    let config = GameConfig::load_or_default(file.path())
        .unwrap()
        .with_overrides(Some(10), None, None);
    assert_eq!(*config.ai_delay_ms(), 10);
}
