//! ChatSession struct: the per-conversation owner of the history.

use concierge_common::SessionId;
use tracing::info;

use crate::history::HistoryBuffer;
use crate::ExchangeError;

use super::coordinator::{ExchangeCoordinator, ExchangeOutcome};

/// A single conversation: its identifier, its history, and whether the
/// server has ended it.
pub struct ChatSession {
    id: SessionId,
    history: HistoryBuffer,
    finished: bool,
}

impl ChatSession {
    pub fn new(max_length: usize) -> Self {
        Self::with_id(SessionId::new(), max_length)
    }

    pub fn with_id(id: SessionId, max_length: usize) -> Self {
        Self {
            id,
            history: HistoryBuffer::new(max_length),
            finished: false,
        }
    }

    /// Run one exchange against this session's history.
    pub async fn exchange(
        &mut self,
        coordinator: &ExchangeCoordinator,
        user_text: &str,
    ) -> Result<ExchangeOutcome, ExchangeError> {
        let outcome = coordinator
            .perform_exchange(user_text, &self.id, &mut self.history)
            .await?;
        if outcome.finished {
            info!(session = %self.id, "Conversation finished");
            self.finished = true;
        }
        Ok(outcome)
    }

    /// Replace this session with a fresh one: new identifier, empty history.
    pub fn restart(&mut self) {
        let max_length = self.history.max_length();
        *self = Self::new(max_length);
        info!(session = %self.id, "Started new session");
    }

    pub fn id(&self) -> &SessionId {
        &self.id
    }

    pub fn history(&self) -> &HistoryBuffer {
        &self.history
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }
}

impl Default for ChatSession {
    fn default() -> Self {
        Self::new(concierge_common::DEFAULT_HISTORY_MAX_LENGTH)
    }
}
