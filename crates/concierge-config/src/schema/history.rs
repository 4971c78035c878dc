//! Conversation history configuration.

use concierge_common::DEFAULT_HISTORY_MAX_LENGTH;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HistoryConfig {
    /// Maximum total characters kept across all messages (valid range: 100-100000).
    pub max_length: usize,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            max_length: DEFAULT_HISTORY_MAX_LENGTH,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_budget_is_the_shared_constant() {
        assert_eq!(HistoryConfig::default().max_length, DEFAULT_HISTORY_MAX_LENGTH);
    }
}
