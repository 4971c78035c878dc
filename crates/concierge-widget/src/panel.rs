//! Chat box state: transcript, input line, and the exchange state machine.

use concierge_config::schema::WidgetConfig;
use tracing::debug;

use crate::state::{transition, WidgetEvent, WidgetState};

/// What a transcript entry represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    User,
    Assistant,
    /// Placeholder while a reply is outstanding.
    Pending,
    /// Shown in place of a reply when the exchange failed.
    Error,
}

/// A single line item in the transcript.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranscriptEntry {
    pub kind: EntryKind,
    pub text: String,
}

/// Visual state for the chat box.
pub struct ChatWidget {
    texts: WidgetConfig,
    entries: Vec<TranscriptEntry>,
    input_text: String,
    state: WidgetState,
    error: Option<String>,
}

impl Default for ChatWidget {
    fn default() -> Self {
        Self::new(WidgetConfig::default())
    }
}

impl ChatWidget {
    pub fn new(texts: WidgetConfig) -> Self {
        let mut widget = Self {
            texts,
            entries: Vec::new(),
            input_text: String::new(),
            state: WidgetState::Idle,
            error: None,
        };
        widget.push_greeting();
        widget
    }

    fn push_greeting(&mut self) {
        if !self.texts.greeting.is_empty() {
            self.entries.push(TranscriptEntry {
                kind: EntryKind::Assistant,
                text: self.texts.greeting.clone(),
            });
        }
    }

    fn apply(&mut self, event: WidgetEvent) -> bool {
        match transition(self.state, event) {
            Some(next) => {
                debug!(from = ?self.state, to = ?next, ?event, "Widget transition");
                self.state = next;
                true
            }
            None => {
                debug!(state = ?self.state, ?event, "Widget event ignored");
                false
            }
        }
    }

    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input_text = text.into();
    }

    /// Send the current input if the widget is idle and the input is not
    /// blank. Returns the text to hand to the exchange.
    ///
    /// The input line is cleared and a pending placeholder is shown until
    /// `receive_reply` or `receive_failure` is called.
    pub fn submit(&mut self) -> Option<String> {
        if self.input_text.trim().is_empty() {
            return None;
        }
        if !self.apply(WidgetEvent::Submit) {
            return None;
        }

        let text = std::mem::take(&mut self.input_text);
        self.error = None;
        self.entries.push(TranscriptEntry {
            kind: EntryKind::User,
            text: text.clone(),
        });
        self.entries.push(TranscriptEntry {
            kind: EntryKind::Pending,
            text: self.texts.pending_indicator.clone(),
        });
        Some(text)
    }

    /// Replace the pending placeholder with the assistant's reply.
    pub fn receive_reply(&mut self, text: impl Into<String>, finished: bool) {
        if !self.apply(WidgetEvent::ReplyReceived { finished }) {
            return;
        }
        self.resolve_pending(EntryKind::Assistant, text.into());
    }

    /// Replace the pending placeholder with the configured error message.
    /// `detail` is kept for diagnostics but not shown in the transcript.
    pub fn receive_failure(&mut self, detail: impl Into<String>) {
        if !self.apply(WidgetEvent::ExchangeFailed) {
            return;
        }
        self.error = Some(detail.into());
        let message = self.texts.error_message.clone();
        self.resolve_pending(EntryKind::Error, message);
    }

    fn resolve_pending(&mut self, kind: EntryKind, text: String) {
        match self
            .entries
            .iter_mut()
            .rev()
            .find(|e| e.kind == EntryKind::Pending)
        {
            Some(entry) => {
                entry.kind = kind;
                entry.text = text;
            }
            None => self.entries.push(TranscriptEntry { kind, text }),
        }
    }

    /// Clear the transcript and start over. Not accepted while a reply is
    /// outstanding.
    pub fn restart(&mut self) -> bool {
        if !self.apply(WidgetEvent::Restart) {
            return false;
        }
        self.entries.clear();
        self.input_text.clear();
        self.error = None;
        self.push_greeting();
        true
    }

    /// Label for the primary action button.
    pub fn action_label(&self) -> &str {
        match self.state {
            WidgetState::Finished => &self.texts.restart_label,
            _ => "Send",
        }
    }

    // -- Getters --

    pub fn entries(&self) -> &[TranscriptEntry] {
        &self.entries
    }

    pub fn input_text(&self) -> &str {
        &self.input_text
    }

    pub fn state(&self) -> WidgetState {
        self.state
    }

    pub fn is_input_enabled(&self) -> bool {
        self.state.accepts_input()
    }

    pub fn is_finished(&self) -> bool {
        self.state == WidgetState::Finished
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}
