//! Full configuration validation.
//!
//! Each section has its own submodule; this orchestrator calls them all
//! and collects errors into a single `ConfigError`.

mod endpoint;
mod helpers;
mod misc;


use crate::schema::ConciergeConfig;
use concierge_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &ConciergeConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    endpoint::validate_endpoint(&mut errors, config);
    misc::validate_history(&mut errors, config);
    misc::validate_widget(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
