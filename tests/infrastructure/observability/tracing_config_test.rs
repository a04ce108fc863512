use phrasecheck::infrastructure::observability::TracingConfig;
use phrasecheck::presentation::config::{Environment, LoggingSettings};

#[test]
fn given_default_config_when_created_then_environment_and_filter_are_set() {
    let config = TracingConfig::default();

    assert!(!config.environment.is_empty());
    assert!(config.default_filter.contains("phrasecheck"));
}

#[test]
fn given_logging_settings_when_building_config_then_uses_settings_level() {
    let logging = LoggingSettings {
        level: "warn".to_string(),
        enable_json: true,
    };

    let config = TracingConfig::from_settings(&logging, Environment::Prod);

    assert_eq!(config.default_filter, "warn");
    assert_eq!(config.environment, "prod");
    assert!(config.json_format);
}
