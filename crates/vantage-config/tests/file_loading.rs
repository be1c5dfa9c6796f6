//! Integration tests for loading and saving configuration files.

use std::fs;

use tempfile::tempdir;
use vantage_config::{
    BatchConfig, ConfigError, ScenarioConfig, StageThresholds, VantageConfig,
};

fn custom_config() -> VantageConfig {
    VantageConfig::new()
        .with_thresholds(
            StageThresholds::new()
                .with_hypergrowth_min_growth(0.50)
                .with_mature_min_growth(0.03),
        )
        .with_scenarios(ScenarioConfig::new(0.25, 1.0, 1.75))
        .with_batch(BatchConfig::sequential().with_threshold(250))
}

#[test]
fn toml_file_round_trip() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("vantage.toml");

    let config = custom_config();
    config.save(&path).unwrap();

    let content = fs::read_to_string(&path).unwrap();
    assert!(content.contains("[thresholds]"));
    assert!(content.contains("[scenarios]"));

    let loaded = VantageConfig::from_file(&path).unwrap();
    assert_eq!(loaded, config);
}

#[test]
fn json_file_round_trip() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("nested").join("vantage.json");

    let config = custom_config();
    config.save(&path).unwrap();

    let loaded = VantageConfig::from_file(&path).unwrap();
    assert_eq!(loaded, config);
}

#[test]
fn missing_file_is_not_found() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("absent.toml");

    let err = VantageConfig::from_file(&path).unwrap_err();
    assert!(matches!(err, ConfigError::NotFound { .. }));

    let err = VantageConfig::load_or_default(Some(&path)).unwrap_err();
    assert!(matches!(err, ConfigError::NotFound { .. }));
}

#[test]
fn unsupported_extension_rejected() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("vantage.yaml");
    fs::write(&path, "thresholds: {}").unwrap();

    let err = VantageConfig::from_file(&path).unwrap_err();
    assert!(matches!(err, ConfigError::UnsupportedFormat(_)));
}

#[test]
fn invalid_file_contents_rejected() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("vantage.toml");
    fs::write(
        &path,
        "[thresholds]\ngrowth_min_growth = 0.60\nmature_min_growth = 0.70\n",
    )
    .unwrap();

    match VantageConfig::from_file(&path).unwrap_err() {
        ConfigError::MultipleValidationErrors(errors) => {
            let fields: Vec<_> = errors.iter().map(|e| e.field.as_str()).collect();
            assert_eq!(
                fields,
                vec!["thresholds.hypergrowth_min_growth", "thresholds.growth_min_growth"]
            );
        }
        other => panic!("expected validation errors, got {:?}", other),
    }
}

#[test]
fn malformed_json_is_deserialization_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("vantage.json");
    fs::write(&path, "{ \"scenarios\": ").unwrap();

    let err = VantageConfig::from_file(&path).unwrap_err();
    assert!(matches!(err, ConfigError::Deserialization(_)));
}
