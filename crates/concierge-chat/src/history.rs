//! Bounded conversation history.
//!
//! Messages are kept in insertion order. After every append the oldest
//! messages are evicted until the total content length fits the budget.
//! The newest message is never evicted, so a single message longer than
//! the budget is kept on its own.

use std::collections::VecDeque;

use concierge_common::DEFAULT_HISTORY_MAX_LENGTH;
use tracing::trace;

use crate::Message;

/// Conversation history bounded by total content length.
///
/// Lengths are Unicode scalar values (`char`s), not bytes or UTF-16 code
/// units, so `"Dödel"` counts as 5 against `max_length`.
#[derive(Debug, Clone)]
pub struct HistoryBuffer {
    messages: VecDeque<Message>,
    total_length: usize,
    max_length: usize,
}

impl HistoryBuffer {
    pub fn new(max_length: usize) -> Self {
        Self {
            messages: VecDeque::new(),
            total_length: 0,
            max_length,
        }
    }

    /// Append to the end, then evict from the front until the budget holds
    /// or only the new message is left.
    pub fn append(&mut self, message: Message) {
        self.total_length += message.len();
        self.messages.push_back(message);

        while self.total_length > self.max_length && self.messages.len() > 1 {
            if let Some(evicted) = self.messages.pop_front() {
                self.total_length -= evicted.len();
                trace!(
                    evicted_len = evicted.len(),
                    total = self.total_length,
                    "Evicted oldest history message"
                );
            }
        }
    }

    /// Sum of the content lengths of all current messages, in `char`s.
    pub fn total_length(&self) -> usize {
        self.total_length
    }

    pub fn max_length(&self) -> usize {
        self.max_length
    }

    pub fn messages(&self) -> impl Iterator<Item = &Message> {
        self.messages.iter()
    }

    pub fn last(&self) -> Option<&Message> {
        self.messages.back()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

impl Default for HistoryBuffer {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_MAX_LENGTH)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Role;

    fn text(len: usize, fill: char) -> String {
        std::iter::repeat(fill).take(len).collect()
    }

    fn contents(history: &HistoryBuffer) -> Vec<String> {
        history.messages().map(|m| m.content.clone()).collect()
    }

    #[test]
    fn starts_empty() {
        let history = HistoryBuffer::default();
        assert!(history.is_empty());
        assert_eq!(history.total_length(), 0);
        assert_eq!(history.max_length(), DEFAULT_HISTORY_MAX_LENGTH);
    }

    #[test]
    fn append_keeps_insertion_order() {
        let mut history = HistoryBuffer::default();
        history.append(Message::user("4th of October"));
        history.append(Message::assistant("How many nights do you stay?"));
        history.append(Message::user("2"));

        assert_eq!(
            contents(&history),
            vec!["4th of October", "How many nights do you stay?", "2"]
        );
        assert_eq!(history.last().map(|m| m.role), Some(Role::User));
        assert_eq!(history.total_length(), 14 + 28 + 1);
    }

    #[test]
    fn exactly_at_budget_is_not_trimmed() {
        let mut history = HistoryBuffer::new(100);
        history.append(Message::user(text(60, 'a')));
        history.append(Message::assistant(text(40, 'b')));
        assert_eq!(history.len(), 2);
        assert_eq!(history.total_length(), 100);
    }

    #[test]
    fn over_budget_evicts_oldest_until_it_fits() {
        let mut history = HistoryBuffer::default();
        // 2990 characters over three messages.
        history.append(Message::user(text(1000, 'a')));
        history.append(Message::assistant(text(1000, 'b')));
        history.append(Message::user(text(990, 'c')));
        assert_eq!(history.total_length(), 2990);

        history.append(Message::assistant(text(50, 'd')));

        assert!(history.total_length() <= 3000);
        assert_eq!(history.total_length(), 2040);
        let firsts: Vec<char> = history
            .messages()
            .filter_map(|m| m.content.chars().next())
            .collect();
        assert_eq!(firsts, vec!['b', 'c', 'd']);
    }

    #[test]
    fn eviction_may_remove_several_messages() {
        let mut history = HistoryBuffer::new(100);
        for _ in 0..5 {
            history.append(Message::user(text(20, 'x')));
        }
        assert_eq!(history.len(), 5);

        history.append(Message::assistant(text(70, 'y')));
        assert_eq!(history.len(), 2);
        assert_eq!(history.total_length(), 90);
    }

    #[test]
    fn budget_holds_after_every_append() {
        let mut history = HistoryBuffer::new(500);
        for i in 0..200 {
            let len = (i * 37) % 180 + 1;
            history.append(Message::user(text(len, 'z')));
            assert!(history.total_length() <= 500, "append #{i} broke the budget");
            let recomputed: usize = history.messages().map(Message::len).sum();
            assert_eq!(recomputed, history.total_length());
        }
    }

    #[test]
    fn oversized_message_is_kept_alone() {
        let mut history = HistoryBuffer::default();
        history.append(Message::user("hello"));
        history.append(Message::assistant("hi"));

        history.append(Message::user(text(3500, 'q')));

        // The newest message is never evicted, even when it alone exceeds
        // the budget.
        assert_eq!(history.len(), 1);
        assert_eq!(history.total_length(), 3500);
        assert_eq!(history.last().map(Message::len), Some(3500));

        // The next append evicts it.
        history.append(Message::assistant("Sorry?"));
        assert_eq!(contents(&history), vec!["Sorry?"]);
    }

    #[test]
    fn length_is_measured_in_characters() {
        let mut history = HistoryBuffer::new(100);
        history.append(Message::user(text(100, 'ö')));
        assert_eq!(history.total_length(), 100);
        assert_eq!(history.len(), 1);
    }
}
