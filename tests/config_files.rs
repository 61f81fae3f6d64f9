//! Loading engine configuration from disk.

mod common;

use std::fs;

use advisor::{
    DepthPolicy, EngineConfig, Error, SearchEngine,
    search::{Algorithm, Difficulty},
};
use common::{Scripted, board};
use tempfile::TempDir;

#[test]
fn test_written_config_loads_back() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("engine.json");

    let config = EngineConfig::default()
        .with_algorithm(Algorithm::AlphaBeta)
        .with_difficulty(Difficulty::Hard)
        .with_depth_policy(DepthPolicy {
            easy: 2,
            medium: 4,
            hard: 8,
        })
        .with_seed(7);
    config.write_json_file(&path).unwrap();

    let loaded = EngineConfig::from_json_file(&path).unwrap();
    assert_eq!(loaded, config);
}

#[test]
fn test_partial_file_keeps_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("engine.json");
    fs::write(&path, r#"{ "difficulty": "easy", "easy_random_chance": 0.0 }"#).unwrap();

    let config = EngineConfig::from_json_file(&path).unwrap();
    assert_eq!(config.difficulty, Difficulty::Easy);
    assert_eq!(config.algorithm, Algorithm::Minimax);
    assert_eq!(config.depth_policy, DepthPolicy::default());
    assert_eq!(config.easy_random_chance, 0.0);
}

#[test]
fn test_missing_file_is_an_io_error() {
    let dir = TempDir::new().unwrap();
    let err = EngineConfig::from_json_file(dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, Error::Io { .. }));
    assert!(err.to_string().contains("absent.json"));
}

#[test]
fn test_malformed_file_is_a_serialization_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("engine.json");
    fs::write(&path, "{ not json").unwrap();

    let err = EngineConfig::from_json_file(&path).unwrap_err();
    assert!(matches!(err, Error::Serialization(_)));
}

#[test]
fn test_out_of_order_policy_is_rejected_on_load() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("engine.json");
    fs::write(
        &path,
        r#"{ "depth_policy": { "easy": 5, "medium": 4, "hard": 9 } }"#,
    )
    .unwrap();

    let err = EngineConfig::from_json_file(&path).unwrap_err();
    assert!(matches!(err, Error::InvalidConfiguration { .. }));
}

#[test]
fn test_loaded_defaults_drive_the_engine() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("engine.json");
    fs::write(
        &path,
        r#"{ "algorithm": "alpha_beta", "difficulty": "hard", "max_depth": 2 }"#,
    )
    .unwrap();

    let engine = SearchEngine::new(EngineConfig::from_json_file(&path).unwrap()).unwrap();
    let (mv, analysis) = engine
        .best_move(&board("XX./O../..."), &mut Scripted::keep())
        .unwrap();

    assert_eq!(mv.position(), (0, 2));
    assert_eq!(analysis.max_depth_reached, 2);
    assert!(analysis.move_reasoning.starts_with("Alpha-beta"));
}
