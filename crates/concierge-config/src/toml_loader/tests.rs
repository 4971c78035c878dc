//! Tests for TOML config loading, creation, and path resolution.

use super::loader::{default_config_path, load_from_path, load_or_create};
use std::path::Path;

#[test]
fn load_from_nonexistent_returns_file_not_found() {
    let result = load_from_path(Path::new("/tmp/nonexistent_concierge_config.toml"));
    let err = result.unwrap_err();
    assert!(matches!(err, concierge_common::ConfigError::FileNotFound(_)));
}

#[test]
fn load_valid_partial_toml() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r#"
[endpoint]
url = "https://hotel.example.com/chat/"
timeout_secs = 5

[widget]
greeting = ""
"#,
    )
    .unwrap();

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.endpoint.url, "https://hotel.example.com/chat/");
    assert_eq!(config.endpoint.timeout_secs, 5);
    assert!(config.widget.greeting.is_empty());
    // Defaults preserved
    assert_eq!(config.endpoint.connect_timeout_secs, 10);
    assert_eq!(config.history.max_length, 3000);
}

#[test]
fn load_invalid_toml_returns_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "this is not valid toml {{{").unwrap();

    let err = load_from_path(&path).unwrap_err();
    assert!(matches!(err, concierge_common::ConfigError::ParseError(_)));
}

#[test]
fn load_config_with_invalid_values_falls_back_to_default() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r#"
[history]
max_length = 5
"#,
    )
    .unwrap();

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.history.max_length, 3000);
}

#[test]
fn load_or_create_writes_template_when_missing() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("concierge").join("config.toml");

    let config = load_or_create(&path).unwrap();
    assert!(path.exists());
    assert_eq!(config.history.max_length, 3000);

    let written = std::fs::read_to_string(&path).unwrap();
    assert!(written.starts_with("# Concierge Configuration"));

    // Second load reads the file that was just written.
    let again = load_or_create(&path).unwrap();
    assert_eq!(again.endpoint.url, config.endpoint.url);
}

#[test]
fn default_config_toml_is_valid() {
    use super::template::default_config_toml;
    use crate::schema::ConciergeConfig;

    let config: ConciergeConfig = toml::from_str(&default_config_toml()).unwrap();
    assert_eq!(config.endpoint.timeout_secs, 30);
    assert!(crate::validation::validate(&config).is_ok());
}

#[test]
fn default_config_path_is_reasonable() {
    // May not resolve in every CI environment
    if let Ok(path) = default_config_path() {
        let path_str = path.to_string_lossy();
        assert!(path_str.contains("concierge"));
        assert!(path_str.ends_with("config.toml"));
    }
}
