use skillwise_core::config::*;

#[test]
fn config_loads_from_empty_toml_with_all_defaults() {
    let config = SkillwiseConfig::from_toml("").unwrap();

    assert_eq!(config.storage.db_path, "skillwise.db");
    assert_eq!(config.storage.busy_timeout_ms, 5_000);

    assert_eq!(config.decay.default_decay_rate, 0.05);
    assert_eq!(config.decay.min_decay_rate, 0.01);
    assert_eq!(config.decay.max_decay_rate, 0.15);
    assert_eq!(config.decay.projection_horizon_days, 30);

    assert_eq!(config.tracker.recent_activity_limit, 50);
    assert_eq!(config.tracker.healthy_preview, 3);
    assert_eq!(config.tracker.top_categories, 5);
    assert_eq!(config.tracker.activity_window_days, 7);

    assert_eq!(config.observability.log_level, "info");
    assert!(!config.observability.json_logs);
}

#[test]
fn config_loads_partial_toml_with_overrides() {
    let toml = r#"
[storage]
db_path = "/custom/skills.db"

[decay]
default_decay_rate = 0.08

[tracker]
recent_activity_limit = 10
"#;
    let config = SkillwiseConfig::from_toml(toml).unwrap();
    assert_eq!(config.storage.db_path, "/custom/skills.db");
    assert_eq!(config.storage.busy_timeout_ms, 5_000);
    assert_eq!(config.decay.default_decay_rate, 0.08);
    assert_eq!(config.decay.max_decay_rate, 0.15);
    assert_eq!(config.tracker.recent_activity_limit, 10);
    assert_eq!(config.tracker.healthy_preview, 3);
}

#[test]
fn config_rejects_inverted_rate_bounds() {
    let toml = r#"
[decay]
min_decay_rate = 0.2
max_decay_rate = 0.1
"#;
    let err = SkillwiseConfig::from_toml(toml).unwrap_err();
    assert!(err.to_string().contains("min_decay_rate"));
}

#[test]
fn config_rejects_default_rate_outside_bounds() {
    let toml = r#"
[decay]
default_decay_rate = 0.5
"#;
    assert!(SkillwiseConfig::from_toml(toml).is_err());
}

#[test]
fn config_rejects_malformed_toml() {
    assert!(SkillwiseConfig::from_toml("[decay\nbroken").is_err());
}

#[test]
fn config_serde_roundtrip() {
    let config = SkillwiseConfig::default();
    let toml_str = toml::to_string(&config).unwrap();
    let roundtripped = SkillwiseConfig::from_toml(&toml_str).unwrap();
    assert_eq!(roundtripped.storage.db_path, config.storage.db_path);
    assert_eq!(
        roundtripped.decay.default_decay_rate,
        config.decay.default_decay_rate
    );
}
