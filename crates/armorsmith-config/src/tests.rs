//! Tests for search configuration.

use super::*;

#[test]
fn test_toml_parsing() {
    let toml = r#"
        max_recent_skill_count = 12
        max_equip_skill_count = 6

        [search]
        parallelism = 2
        solve_seconds_limit = 30
    "#;

    let config = SimConfig::from_toml_str(toml).unwrap();
    assert_eq!(config.max_recent_skill_count, 12);
    assert_eq!(config.max_equip_skill_count, 6);
    assert_eq!(config.max_deco_skill_count, 2);
    assert_eq!(config.search.parallelism, 2);
    assert_eq!(config.solve_time_limit(), Some(Duration::from_secs(30)));
}

#[test]
fn test_yaml_parsing() {
    let yaml = r#"
        max_deco_skill_count: 3
        search:
          parallelism: 8
    "#;

    let config = SimConfig::from_yaml_str(yaml).unwrap();
    assert_eq!(config.max_deco_skill_count, 3);
    assert_eq!(config.search.parallelism, 8);
    assert_eq!(config.solve_time_limit(), None);
}

#[test]
fn test_empty_toml_is_default() {
    let config = SimConfig::from_toml_str("").unwrap();
    assert_eq!(config, SimConfig::default());
}

#[test]
fn test_rejects_zero_parallelism() {
    let result = SimConfig::from_toml_str("[search]\nparallelism = 0\n");
    assert!(matches!(result, Err(ConfigError::Invalid(_))));
}

#[test]
fn test_rejects_zero_time_limit() {
    let result = SimConfig::from_yaml_str("search:\n  solve_seconds_limit: 0\n");
    assert!(matches!(result, Err(ConfigError::Invalid(_))));
}

#[test]
fn test_invalid_toml() {
    let result = SimConfig::from_toml_str("search = [");
    assert!(matches!(result, Err(ConfigError::Toml(_))));
}

#[test]
fn test_missing_file() {
    let result = SimConfig::load("/nonexistent/armorsmith.toml");
    assert!(matches!(result, Err(ConfigError::Io(_))));
}

#[test]
fn test_builder() {
    let config = SimConfig::new()
        .with_parallelism(3)
        .with_solve_seconds_limit(10)
        .with_max_recent_skill_count(5);

    assert_eq!(config.search.parallelism, 3);
    assert_eq!(config.search.solve_seconds_limit, Some(10));
    assert_eq!(config.max_recent_skill_count, 5);
    assert!(config.validate().is_ok());
}

#[test]
fn test_skill_limits() {
    let limits = SimConfig::default().skill_limits();
    assert_eq!(limits.equip, 5);
    assert_eq!(limits.deco, 2);
}

#[test]
fn test_skill_limits_gate_catalog_building() {
    let build = |config: &SimConfig| {
        armorsmith_core::Catalog::builder()
            .equipment(
                armorsmith_core::Equipment::deco("Triple Jewel", 2, 1, "mixed")
                    .with_skill("Attack", 1)
                    .with_skill("Guard", 1)
                    .with_skill("Expert", 1),
            )
            .build(config.skill_limits())
    };

    assert!(build(&SimConfig::default()).is_err());

    let config = SimConfig::from_toml_str("max_deco_skill_count = 3").unwrap();
    assert_eq!(build(&config).unwrap().len(), 1);
}
