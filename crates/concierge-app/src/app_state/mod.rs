//! Terminal front-end state: wires the chat widget to the chat session.

mod chat;
mod core;
mod input;


pub use self::core::{ConciergeApp, LineOutcome};
