//! Line handling: commands, exchanges, and restart.

use tracing::warn;

use super::core::{ConciergeApp, LineOutcome};
use super::input::Command;

impl ConciergeApp {
    /// Handle one typed line.
    pub async fn handle_line(&mut self, line: &str) -> LineOutcome {
        match Command::parse(line) {
            Command::Quit => LineOutcome::Quit,
            Command::Empty => LineOutcome::Continue(Vec::new()),
            Command::Restart => LineOutcome::Continue(self.restart()),
            Command::Message(text) => LineOutcome::Continue(self.send(text).await),
        }
    }

    fn restart(&mut self) -> Vec<String> {
        if !self.widget.restart() {
            return vec!["(still waiting for the previous reply)".into()];
        }
        self.session.restart();
        self.rendered = 0;
        self.drain_output()
    }

    async fn send(&mut self, text: &str) -> Vec<String> {
        if self.widget.is_finished() {
            return vec![self.finished_hint()];
        }

        self.widget.set_input(text);
        let Some(message) = self.widget.submit() else {
            return Vec::new();
        };
        // The user's own line is already on screen; start printing at the
        // pending placeholder.
        self.rendered = self.widget.entries().len().saturating_sub(1);

        match self.session.exchange(&self.coordinator, &message).await {
            Ok(outcome) => self.widget.receive_reply(outcome.text, outcome.finished),
            Err(e) => {
                warn!(session = %self.session.id(), error = %e, "Exchange failed");
                self.widget.receive_failure(e.to_string());
            }
        }

        let mut lines = self.drain_output();
        if self.widget.is_finished() {
            lines.push(self.finished_hint());
        }
        lines
    }

    fn finished_hint(&self) -> String {
        format!(
            "[{}] Type /restart to start a new conversation.",
            self.widget.action_label()
        )
    }
}
