//! Chat endpoint configuration.

use serde::{Deserialize, Serialize};

/// Where exchanges are sent and how long to wait for them.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EndpointConfig {
    /// Absolute `http://` or `https://` URL of the chat endpoint.
    pub url: String,
    /// Whole-request timeout in seconds (valid range: 1-300).
    pub timeout_secs: u32,
    /// TCP connect timeout in seconds (valid range: 1-60).
    pub connect_timeout_secs: u32,
}

impl Default for EndpointConfig {
    fn default() -> Self {
        Self {
            url: "http://127.0.0.1:8080/chat/".into(),
            timeout_secs: 30,
            connect_timeout_secs: 10,
        }
    }
}
