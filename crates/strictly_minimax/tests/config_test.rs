//! Tests for loading game configuration from disk.

use std::io::Write;
use strictly_minimax::{Game, GameConfig, Player};

#[test]
fn test_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "ai_player = \"X\"\nfirst_player = \"O\"").unwrap();

    let config = GameConfig::from_file(file.path()).unwrap();
    assert_eq!(*config.ai_player(), Player::X);
    assert_eq!(*config.first_player(), Player::O);

    let game = Game::new(config);
    assert_eq!(game.to_move(), Player::O);
    assert!(!game.is_ai_turn());
}

#[test]
fn test_missing_file_falls_back_to_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = GameConfig::load_or_default(dir.path().join("absent.toml")).unwrap();
    assert_eq!(config, GameConfig::default());
}

#[test]
fn test_missing_file_is_an_error_when_required() {
    let dir = tempfile::tempdir().unwrap();
    let err = GameConfig::from_file(dir.path().join("absent.toml")).unwrap_err();
    assert!(err.message.contains("Failed to read config file"));
}

#[test]
fn test_round_trips_through_toml() {
    let config = GameConfig::new(Player::X, Player::O);
    let text = toml::to_string(&config).unwrap();
    assert_eq!(GameConfig::from_toml(&text).unwrap(), config);
}
