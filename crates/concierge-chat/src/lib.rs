//! Chat core for Concierge.
//!
//! Provides the pieces a chat front-end drives:
//! - A bounded, length-trimmed conversation history
//! - A transport seam for the single request/response exchange
//! - An HTTP transport speaking the `{text, sessionId}` JSON contract
//! - The exchange coordinator and the session that owns the history

pub mod history;
pub mod http;
pub mod session;

use async_trait::async_trait;
use concierge_common::SessionId;

pub use history::HistoryBuffer;
pub use http::{HttpConfig, HttpTransport};
pub use session::{ChatSession, ExchangeCoordinator, ExchangeOutcome};

/// Reply flag the server sends once the conversational task is complete.
pub const BOOKING_FINISHED: &str = "booking_finished";

/// Carries one exchange to the server and returns its reply.
#[async_trait]
pub trait ChatTransport: Send + Sync {
    async fn send(&self, request: &ExchangeRequest<'_>) -> Result<ExchangeReply, ExchangeError>;
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

impl Message {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }

    /// Length of the content in `char`s, the unit the history budget uses.
    pub fn len(&self) -> usize {
        self.content.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// Outbound request body: the current message and the session it belongs to.
#[derive(Debug, Clone, serde::Serialize)]
pub struct ExchangeRequest<'a> {
    pub text: &'a str,
    #[serde(rename = "sessionId")]
    pub session_id: &'a SessionId,
}

/// Server reply to one exchange.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ExchangeReply {
    pub text: String,
    #[serde(default)]
    pub flag: Option<String>,
}

impl ExchangeReply {
    pub fn is_finished(&self) -> bool {
        self.flag.as_deref() == Some(BOOKING_FINISHED)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ExchangeError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },
    #[error("Parse error: {0}")]
    Parse(String),
    #[error("Timeout")]
    Timeout,
    #[error("Message is empty")]
    EmptyMessage,
}

impl ExchangeError {
    /// Whether the exchange was attempted and failed, as opposed to being
    /// rejected up front. Every failure is handled the same way: no retry,
    /// and the user is shown an error.
    pub fn is_exchange_failure(&self) -> bool {
        !matches!(self, ExchangeError::EmptyMessage)
    }
}
