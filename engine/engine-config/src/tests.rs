//! Tests for the configuration module.

use super::*;
use std::io::Write;

#[test]
fn test_default_config() {
    let config = CentralConfig::default();
    assert_eq!(config.common.log_level, "info");
    assert_eq!(config.common.seed, 0);
    assert_eq!(config.search.num_trials, 100);
    assert_eq!(config.game.dimension, 3);
}

#[test]
fn test_search_defaults() {
    let config = CentralConfig::default();
    assert_eq!(config.search.num_trials, 100);
    assert!((config.search.score_current - 1.0).abs() < f64::EPSILON);
    assert!((config.search.score_other - 1.0).abs() < f64::EPSILON);
    assert_eq!(config.search.workers, 1);
    assert_eq!(config.search.tie_break, "first");
}

#[test]
fn test_game_defaults() {
    let config = CentralConfig::default();
    assert_eq!(config.game.dimension, 3);
    assert!(!config.game.reverse);
    assert_eq!(config.game.machine, "x");
    assert_eq!(config.game.opponent, "random");
    assert_eq!(config.game.games, 1);
}

#[test]
fn test_env_overrides() {
    std::env::set_var("MCTTT_SEARCH_NUM_TRIALS", "750");
    std::env::set_var("MCTTT_GAME_REVERSE", "true");
    std::env::set_var("MCTTT_SEARCH_SCORE_OTHER", "0.5");

    let config = apply_env_overrides(CentralConfig::default());
    assert_eq!(config.search.num_trials, 750);
    assert!(config.game.reverse);
    assert!((config.search.score_other - 0.5).abs() < f64::EPSILON);

    std::env::remove_var("MCTTT_SEARCH_NUM_TRIALS");
    std::env::remove_var("MCTTT_GAME_REVERSE");
    std::env::remove_var("MCTTT_SEARCH_SCORE_OTHER");
}

#[test]
fn test_invalid_env_override_is_ignored() {
    std::env::set_var("MCTTT_GAME_DIMENSION", "three");

    let config = apply_env_overrides(CentralConfig::default());
    assert_eq!(config.game.dimension, 3);

    std::env::remove_var("MCTTT_GAME_DIMENSION");
}

#[test]
fn test_parse_config_toml() {
    let toml_content = r#"
[common]
log_level = "debug"
seed = 42

[search]
num_trials = 500
score_current = 2.0
score_other = 1.5
workers = 4
tie_break = "random"

[game]
dimension = 4
machine = "o"
opponent = "machine"
games = 10
"#;
    let config: CentralConfig = toml::from_str(toml_content).unwrap();
    assert_eq!(config.common.log_level, "debug");
    assert_eq!(config.common.seed, 42);
    assert_eq!(config.search.num_trials, 500);
    assert!((config.search.score_current - 2.0).abs() < f64::EPSILON);
    assert!((config.search.score_other - 1.5).abs() < f64::EPSILON);
    assert_eq!(config.search.workers, 4);
    assert_eq!(config.search.tie_break, "random");
    assert_eq!(config.game.dimension, 4);
    assert_eq!(config.game.machine, "o");
    assert_eq!(config.game.opponent, "machine");
    assert_eq!(config.game.games, 10);
}

#[test]
fn test_partial_config() {
    let toml_content = r#"
[search]
num_trials = 20
"#;
    let config: CentralConfig = toml::from_str(toml_content).unwrap();
    assert_eq!(config.search.num_trials, 20);
    assert_eq!(config.search.workers, 1); // Default
    assert_eq!(config.common.log_level, "info"); // Default
    assert_eq!(config.game.dimension, 3); // Default
}

#[test]
fn test_load_from_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    {
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "[game]\ndimension = 5\nreverse = true").unwrap();
    }

    let config = load_from_path(&path);
    assert_eq!(config.game.dimension, 5);
    assert!(config.game.reverse);
    assert_eq!(config.search.workers, 1);
}

#[test]
fn test_load_from_missing_path_uses_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.toml");
    let config = load_from_path(&path);
    assert_eq!(config.search.tie_break, "first");
    assert_eq!(config.game.machine, "x");
}

#[test]
fn test_config_clone() {
    let config = CentralConfig::default();
    let cloned = config.clone();
    assert_eq!(config.common.log_level, cloned.common.log_level);
    assert_eq!(config.search.num_trials, cloned.search.num_trials);
}
