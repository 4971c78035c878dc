//! Validation for smaller config sections: history and widget.

use crate::schema::ConciergeConfig;

use super::helpers::{validate_non_empty, validate_range};

/// Validate history constraints.
pub(crate) fn validate_history(errors: &mut Vec<String>, config: &ConciergeConfig) {
    validate_range(
        errors,
        "history.max_length",
        config.history.max_length,
        100,
        100_000,
    );
}

/// Validate widget strings. The greeting may be empty; the rest may not.
pub(crate) fn validate_widget(errors: &mut Vec<String>, config: &ConciergeConfig) {
    validate_non_empty(errors, "widget.error_message", &config.widget.error_message);
    validate_non_empty(
        errors,
        "widget.pending_indicator",
        &config.widget.pending_indicator,
    );
    validate_non_empty(errors, "widget.restart_label", &config.widget.restart_label);
}
