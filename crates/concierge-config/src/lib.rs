//! Concierge configuration system.
//!
//! TOML-based configuration with full validation. All config sections use
//! sensible defaults so partial configs work out of the box.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use concierge_config::load_config;
//!
//! let config = load_config(None).expect("failed to load config");
//! println!("posting to {}", config.endpoint.url);
//! ```

pub mod schema;
mod toml_loader;
pub mod validation;

pub use schema::ConciergeConfig;

use std::path::Path;

use concierge_common::ConfigError;

/// Load config from `path`, or from the platform default path when `None`.
///
/// A missing file is created from the commented default template.
pub fn load_config(path: Option<&Path>) -> Result<ConciergeConfig, ConfigError> {
    let config = match path {
        Some(path) => toml_loader::load_or_create(path)?,
        None => toml_loader::load_default()?,
    };
    validation::validate(&config)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_config_from_explicit_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[history]\nmax_length = 1200\n").unwrap();

        let config = load_config(Some(&path)).unwrap();
        assert_eq!(config.history.max_length, 1200);
    }

    #[test]
    fn load_config_creates_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let config = load_config(Some(&path)).unwrap();
        assert!(path.exists());
        assert_eq!(config.widget.restart_label, "Restart");
    }

    #[test]
    fn load_config_propagates_parse_errors() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[history\n").unwrap();

        let err = load_config(Some(&path)).unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(_)));
    }
}
