//! Tests for generator configuration

use xoshiro256_core_rs::{
    ConfigError, GeneratorConfig, OutputVariant, RngError, SeedSource, Xoshiro256,
};

#[test]
fn test_fixed_seed_config_builds_seeded_generator() {
    let config = GeneratorConfig::from_json(r#"{"seed": {"fixed": 0}}"#).unwrap();
    assert!(config.is_reproducible());
    assert_eq!(config.build().unwrap(), Xoshiro256::from_seed_u64(0));
}

#[test]
fn test_words_config_builds_explicit_state() {
    let config = GeneratorConfig::from_json(
        r#"{"seed": {"words": [1, 2, 3, 4]}, "variant": "plus"}"#,
    )
    .unwrap();
    let mut rng = config.build().unwrap();
    assert_eq!(rng.variant(), OutputVariant::Plus);
    assert_eq!(rng.next(), 5);
}

#[test]
fn test_zero_words_config_fails_to_build() {
    let config = GeneratorConfig {
        seed: SeedSource::Words([0; 4]),
        variant: OutputVariant::StarStar,
    };
    assert_eq!(config.build(), Err(ConfigError::Rng(RngError::ZeroState)));
}

#[test]
fn test_time_config_builds() {
    let config = GeneratorConfig::from_json(r#"{"seed": "time"}"#).unwrap();
    assert!(!config.is_reproducible());
    assert_ne!(config.build().unwrap().words(), [0; 4]);
}

#[test]
fn test_u64_max_seed_survives_json() {
    let config = GeneratorConfig::fixed(u64::MAX, OutputVariant::StarStar);
    let json = serde_json::to_string(&config).unwrap();
    assert_eq!(GeneratorConfig::from_json(&json).unwrap(), config);
}

#[test]
fn test_malformed_json_is_parse_error() {
    let err = GeneratorConfig::from_json("{not json").unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
    assert!(err.to_string().starts_with("Invalid generator config"));
}

#[test]
fn test_config_hash_is_stable() {
    let a = GeneratorConfig::fixed(42, OutputVariant::Plus);
    let b = GeneratorConfig::from_json(r#"{"variant": "plus", "seed": {"fixed": 42}}"#).unwrap();
    assert_eq!(a.config_hash().unwrap(), b.config_hash().unwrap());
}

#[test]
fn test_config_hash_tracks_content() {
    let a = GeneratorConfig::fixed(42, OutputVariant::Plus);
    let b = GeneratorConfig::fixed(43, OutputVariant::Plus);
    let c = GeneratorConfig::fixed(42, OutputVariant::StarStar);
    assert_ne!(a.config_hash().unwrap(), b.config_hash().unwrap());
    assert_ne!(a.config_hash().unwrap(), c.config_hash().unwrap());
}
