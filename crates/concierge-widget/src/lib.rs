//! Presentation model for the Concierge chat box.
//!
//! Holds what a front-end draws (transcript, input line, action label) and
//! the explicit `Idle -> AwaitingResponse -> Idle | Finished` state machine
//! that decides when input is accepted. Nothing here performs I/O.

pub mod panel;
pub mod render;
pub mod state;

pub use panel::{ChatWidget, EntryKind, TranscriptEntry};
pub use state::{transition, WidgetEvent, WidgetState};
