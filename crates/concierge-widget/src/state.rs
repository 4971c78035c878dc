//! Widget state machine.

/// Where the chat box is in its request/response cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WidgetState {
    /// Input enabled, no exchange in flight.
    #[default]
    Idle,
    /// A message was sent; input stays disabled until the reply or failure.
    AwaitingResponse,
    /// The server ended the conversation; only restart is accepted.
    Finished,
}

/// UI-level events that move the state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WidgetEvent {
    Submit,
    ReplyReceived { finished: bool },
    ExchangeFailed,
    Restart,
}

/// Next state for `event` in `state`, or `None` if the event is not
/// accepted there.
pub fn transition(state: WidgetState, event: WidgetEvent) -> Option<WidgetState> {
    use WidgetEvent::*;
    use WidgetState::*;

    match (state, event) {
        (Idle, Submit) => Some(AwaitingResponse),
        (AwaitingResponse, ReplyReceived { finished: true }) => Some(Finished),
        (AwaitingResponse, ReplyReceived { finished: false }) => Some(Idle),
        (AwaitingResponse, ExchangeFailed) => Some(Idle),
        (Idle | Finished, Restart) => Some(Idle),
        _ => None,
    }
}

impl WidgetState {
    pub fn accepts_input(&self) -> bool {
        matches!(self, WidgetState::Idle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn submit_then_reply_returns_to_idle() {
        let s = transition(WidgetState::Idle, WidgetEvent::Submit).unwrap();
        assert_eq!(s, WidgetState::AwaitingResponse);
        let s = transition(s, WidgetEvent::ReplyReceived { finished: false }).unwrap();
        assert_eq!(s, WidgetState::Idle);
    }

    #[test]
    fn finished_reply_ends_conversation() {
        let s = transition(
            WidgetState::AwaitingResponse,
            WidgetEvent::ReplyReceived { finished: true },
        );
        assert_eq!(s, Some(WidgetState::Finished));
    }

    #[test]
    fn failure_re_enables_input() {
        let s = transition(WidgetState::AwaitingResponse, WidgetEvent::ExchangeFailed);
        assert_eq!(s, Some(WidgetState::Idle));
    }

    #[test]
    fn only_one_exchange_in_flight() {
        assert_eq!(
            transition(WidgetState::AwaitingResponse, WidgetEvent::Submit),
            None
        );
        assert_eq!(
            transition(WidgetState::AwaitingResponse, WidgetEvent::Restart),
            None
        );
    }

    #[test]
    fn finished_accepts_only_restart() {
        assert_eq!(transition(WidgetState::Finished, WidgetEvent::Submit), None);
        assert_eq!(
            transition(WidgetState::Finished, WidgetEvent::ExchangeFailed),
            None
        );
        assert_eq!(
            transition(WidgetState::Finished, WidgetEvent::Restart),
            Some(WidgetState::Idle)
        );
    }

    #[test]
    fn stray_replies_are_ignored_when_idle() {
        assert_eq!(
            transition(WidgetState::Idle, WidgetEvent::ReplyReceived { finished: true }),
            None
        );
        assert_eq!(transition(WidgetState::Idle, WidgetEvent::ExchangeFailed), None);
    }

    #[test]
    fn only_idle_accepts_input() {
        assert!(WidgetState::Idle.accepts_input());
        assert!(!WidgetState::AwaitingResponse.accepts_input());
        assert!(!WidgetState::Finished.accepts_input());
    }
}
