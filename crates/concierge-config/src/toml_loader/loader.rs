//! Core TOML config loading: read from path or platform default.

use crate::schema::ConciergeConfig;
use crate::validation;
use concierge_common::ConfigError;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use super::template::default_config_toml;

/// Platform config location: `<config_dir>/concierge/config.toml`.
///
/// On macOS: `~/Library/Application Support/concierge/config.toml`
/// On Linux: `~/.config/concierge/config.toml`
pub(crate) fn default_config_path() -> Result<PathBuf, ConfigError> {
    dirs::config_dir()
        .map(|dir| dir.join("concierge").join("config.toml"))
        .ok_or_else(|| ConfigError::ParseError("no platform config directory".into()))
}

/// Read and parse `path`.
///
/// Missing fields take their serde defaults. A file whose values fail
/// validation is ignored with a warning and the default config is returned.
pub(crate) fn load_from_path(path: &Path) -> Result<ConciergeConfig, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::FileNotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)
        .map_err(|e| ConfigError::ParseError(format!("failed to read {}: {e}", path.display())))?;

    let config: ConciergeConfig = toml::from_str(&content)
        .map_err(|e| ConfigError::ParseError(format!("failed to parse TOML: {e}")))?;

    if let Err(e) = validation::validate(&config) {
        warn!(path = %path.display(), "{e}; falling back to default config");
        return Ok(ConciergeConfig::default());
    }

    info!("loaded config from {}", path.display());
    Ok(config)
}

/// Load config from `path`, writing the commented default template there
/// first if the file does not exist yet.
pub(crate) fn load_or_create(path: &Path) -> Result<ConciergeConfig, ConfigError> {
    match load_from_path(path) {
        Err(ConfigError::FileNotFound(_)) => {
            write_template(path)?;
            Ok(ConciergeConfig::default())
        }
        other => other,
    }
}

/// Load config from the platform default path, creating it when missing.
pub(crate) fn load_default() -> Result<ConciergeConfig, ConfigError> {
    load_or_create(&default_config_path()?)
}

/// Write the commented template to `path`, creating parent directories.
fn write_template(path: &Path) -> Result<(), ConfigError> {
    let write_failed =
        |e: std::io::Error| ConfigError::ParseError(format!("cannot write {}: {e}", path.display()));

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(write_failed)?;
    }
    std::fs::write(path, default_config_toml()).map_err(write_failed)?;

    info!("no config at {}, wrote default template", path.display());
    Ok(())
}
