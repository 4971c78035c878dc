//! Conversation session management.
//!
//! A `ChatSession` owns the session identifier and the bounded history.
//! The `ExchangeCoordinator` runs one request/response cycle against it.

mod coordinator;
mod manager;


pub use coordinator::{ExchangeCoordinator, ExchangeOutcome};
pub use manager::ChatSession;
