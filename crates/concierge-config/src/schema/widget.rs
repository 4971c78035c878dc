//! Chat widget text configuration.

use serde::{Deserialize, Serialize};

/// User-facing strings shown by the chat widget.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WidgetConfig {
    /// Assistant greeting shown when a session opens. Empty disables it.
    pub greeting: String,
    /// Shown in place of a reply when an exchange fails.
    pub error_message: String,
    /// Placeholder shown while a reply is pending.
    pub pending_indicator: String,
    /// Label for the action offered once the conversation is finished.
    pub restart_label: String,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            greeting: "Hi there! Would you like to book a hotel room? When do you arrive?".into(),
            error_message: "An error occurred generating the response.".into(),
            pending_indicator: "...".into(),
            restart_label: "Restart".into(),
        }
    }
}
