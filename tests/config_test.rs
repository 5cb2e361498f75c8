//! Tests for settings files.

use rewind_tictactoe::Settings;
use std::io::Write;

#[test]
fn test_load_explicit_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "title = \"Rewind\"").unwrap();
    writeln!(file, "log_filter = \"debug\"").unwrap();

    let settings = Settings::load(Some(file.path())).unwrap();
    assert_eq!(settings.title(), "Rewind");
    assert_eq!(settings.log_filter(), "debug");
    assert!(*settings.show_cell_numbers());
}

#[test]
fn test_missing_explicit_file_is_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = Settings::load(Some(&dir.path().join("nope.toml"))).unwrap_err();
    assert!(err.message.contains("Failed to read"));
}

#[test]
fn test_unknown_keys_are_ignored() {
    let settings = Settings::from_toml("theme = \"dark\"").unwrap();
    assert_eq!(settings, Settings::default());
}
