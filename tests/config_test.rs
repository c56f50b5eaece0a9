//! Tests for loading game configuration.

use std::io::Write;
use strum::IntoEnumIterator;
use unbeatable_tictactoe::{FirstPlayer, GameConfig, Highlight, Theme};

#[test]
fn test_defaults() {
    let config = GameConfig::default();
    assert_eq!(*config.first_player(), FirstPlayer::Human);
    assert_eq!(*config.human_mark(), 'O');
    assert_eq!(*config.computer_mark(), 'X');
    assert_eq!(config.log_file().to_str(), Some("unbeatable_tictactoe.log"));
    for highlight in Highlight::iter() {
        assert_eq!(
            config.theme().color_for(highlight),
            Theme::default_color_for(highlight)
        );
    }
}

#[test]
fn test_empty_toml_gives_defaults() {
    let config = GameConfig::from_toml("").expect("empty config is valid");
    assert_eq!(config, GameConfig::default());
}

#[test]
fn test_overrides_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"
first_player = "computer"
human_mark = "H"
computer_mark = "C"
log_file = "/tmp/ttt.log"

[theme]
tie = "yellow"
"#
    )
    .unwrap();

    let config = GameConfig::from_file(file.path()).expect("valid config");
    assert_eq!(*config.first_player(), FirstPlayer::Computer);
    assert_eq!(*config.human_mark(), 'H');
    assert_eq!(*config.computer_mark(), 'C');
    assert_eq!(config.log_file().to_str(), Some("/tmp/ttt.log"));
    assert_eq!(config.theme().tie(), "yellow");
    assert_eq!(config.theme().human_win(), "blue");
}

#[test]
fn test_load_explicit_path() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "first_player = \"computer\"").unwrap();
    let config = GameConfig::load(Some(file.path())).expect("valid config");
    assert_eq!(*config.first_player(), FirstPlayer::Computer);
}

#[test]
fn test_missing_explicit_file_is_error() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("missing.toml");
    let err = GameConfig::load(Some(missing.as_path())).unwrap_err();
    assert!(err.message.contains("Failed to read config file"));
}

#[test]
fn test_same_marks_rejected() {
    let err = GameConfig::from_toml("human_mark = \"X\"").unwrap_err();
    assert!(err.message.contains("must differ"), "{}", err);
}

#[test]
fn test_malformed_toml_rejected() {
    let err = GameConfig::from_toml("first_player = \"nobody\"").unwrap_err();
    assert!(err.message.starts_with("Failed to parse config"));

    let err = GameConfig::from_toml("human_mark = \"too long\"").unwrap_err();
    assert!(err.message.starts_with("Failed to parse config"));
}

#[test]
fn test_with_first_player() {
    let config = GameConfig::default().with_first_player(FirstPlayer::Computer);
    assert_eq!(*config.first_player(), FirstPlayer::Computer);
    assert_eq!(FirstPlayer::Computer.toggle(), FirstPlayer::Human);
}
