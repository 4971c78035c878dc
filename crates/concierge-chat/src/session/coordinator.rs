//! One user-message-in, assistant-message-out exchange.

use std::sync::Arc;

use concierge_common::SessionId;
use tracing::{debug, warn};

use crate::history::HistoryBuffer;
use crate::{ChatTransport, ExchangeError, ExchangeRequest, Message};

/// Result of a successful exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExchangeOutcome {
    /// The assistant's reply, as appended to the history.
    pub text: String,
    /// Whether the server signalled that the conversation is over.
    pub finished: bool,
}

/// Drives exchanges over a shared transport.
#[derive(Clone)]
pub struct ExchangeCoordinator {
    transport: Arc<dyn ChatTransport>,
}

impl ExchangeCoordinator {
    pub fn new(transport: Arc<dyn ChatTransport>) -> Self {
        Self { transport }
    }

    /// Record the user's message, send it, and record the reply.
    ///
    /// On success the history gains the user message and the assistant
    /// reply. On failure it keeps only the user message and the error is
    /// returned as-is; nothing is retried. Empty input is rejected before
    /// the history is touched.
    pub async fn perform_exchange(
        &self,
        user_text: &str,
        session_id: &SessionId,
        history: &mut HistoryBuffer,
    ) -> Result<ExchangeOutcome, ExchangeError> {
        if user_text.trim().is_empty() {
            return Err(ExchangeError::EmptyMessage);
        }

        history.append(Message::user(user_text));

        let request = ExchangeRequest {
            text: user_text,
            session_id,
        };
        let reply = match self.transport.send(&request).await {
            Ok(reply) => reply,
            Err(e) => {
                warn!(session = %session_id, error = %e, "Exchange failed");
                return Err(e);
            }
        };

        let finished = reply.is_finished();
        debug!(
            session = %session_id,
            finished,
            history_len = history.total_length(),
            "Exchange complete"
        );

        history.append(Message::assistant(reply.text.clone()));

        Ok(ExchangeOutcome {
            text: reply.text,
            finished,
        })
    }
}
