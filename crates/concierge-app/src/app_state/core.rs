//! ConciergeApp struct and transcript output.

use std::sync::Arc;

use concierge_chat::{ChatSession, ChatTransport, ExchangeCoordinator};
use concierge_config::ConciergeConfig;
use concierge_widget::render::render_terminal;
use concierge_widget::ChatWidget;

/// What the read loop should do after a line was handled.
#[derive(Debug, PartialEq, Eq)]
pub enum LineOutcome {
    /// Print these lines and keep reading.
    Continue(Vec<String>),
    Quit,
}

/// Owns the widget, the session (and through it the history), and the
/// coordinator that connects them to the endpoint.
pub struct ConciergeApp {
    pub(super) widget: ChatWidget,
    pub(super) session: ChatSession,
    pub(super) coordinator: ExchangeCoordinator,
    /// Transcript entries already printed.
    pub(super) rendered: usize,
}

impl ConciergeApp {
    pub fn new(config: &ConciergeConfig, transport: Arc<dyn ChatTransport>) -> Self {
        Self {
            widget: ChatWidget::new(config.widget.clone()),
            session: ChatSession::new(config.history.max_length),
            coordinator: ExchangeCoordinator::new(transport),
            rendered: 0,
        }
    }

    /// Lines for transcript entries that have not been printed yet.
    pub fn drain_output(&mut self) -> Vec<String> {
        let entries = self.widget.entries();
        let start = self.rendered.min(entries.len());
        let lines = entries[start..].iter().map(render_terminal).collect();
        self.rendered = entries.len();
        lines
    }

    pub fn session(&self) -> &ChatSession {
        &self.session
    }

    #[cfg(test)]
    pub fn widget(&self) -> &ChatWidget {
        &self.widget
    }
}
