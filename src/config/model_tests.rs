use super::*;

#[test]
fn default_config_enables_all_checks() {
    let config = Config::default();
    assert!(config.checks.encoding);
    assert!(config.checks.trailing_newline);
    assert!(config.checks.trailing_whitespace);
    assert!(config.files.patterns.is_empty());
    assert!(config.files.exclude.is_empty());
}

#[test]
fn parse_full_config() {
    let config: Config = toml::from_str(
        r#"
        [files]
        patterns = ["src/**/*.rs", "README.md"]
        exclude = ["target/**"]

        [checks]
        encoding = true
        trailing_newline = false
        trailing_whitespace = true
        "#,
    )
    .unwrap();

    assert_eq!(config.files.patterns, vec!["src/**/*.rs", "README.md"]);
    assert_eq!(config.files.exclude, vec!["target/**"]);
    assert!(!config.checks.trailing_newline);
    assert!(config.checks.trailing_whitespace);
}

#[test]
fn missing_sections_fall_back_to_defaults() {
    let config: Config = toml::from_str("").unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn missing_check_flags_default_to_true() {
    let config: Config = toml::from_str(
        r#"
        [checks]
        trailing_whitespace = false
        "#,
    )
    .unwrap();
    assert!(config.checks.encoding);
    assert!(config.checks.trailing_newline);
    assert!(!config.checks.trailing_whitespace);
}

#[test]
fn template_parses_back() {
    let config: Config = toml::from_str(Config::TEMPLATE).unwrap();
    assert!(!config.files.patterns.is_empty());
    assert!(config.checks.encoding);
}

#[test]
fn config_round_trips_through_toml() {
    let config: Config = toml::from_str(
        r#"
        [files]
        patterns = ["docs/**/*.md"]
        "#,
    )
    .unwrap();
    let serialized = toml::to_string(&config).unwrap();
    let reparsed: Config = toml::from_str(&serialized).unwrap();
    assert_eq!(config, reparsed);
}
