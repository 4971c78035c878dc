//! Parsing of typed lines into commands.

/// A line typed at the prompt.
#[derive(Debug, PartialEq, Eq)]
pub(super) enum Command<'a> {
    Quit,
    Restart,
    Empty,
    Message(&'a str),
}

impl<'a> Command<'a> {
    /// Surrounding whitespace is ignored when matching commands; a message
    /// keeps the line exactly as typed.
    pub(super) fn parse(line: &'a str) -> Self {
        match line.trim() {
            "" => Command::Empty,
            "/quit" | "/exit" => Command::Quit,
            "/restart" => Command::Restart,
            _ => Command::Message(line),
        }
    }
}
