//! Text rendering helpers for reply bodies.

use crate::panel::{EntryKind, TranscriptEntry};

/// Split a reply into display lines, one per `\n`.
pub fn render_lines(text: &str) -> Vec<&str> {
    text.split('\n').map(|line| line.trim_end_matches('\r')).collect()
}

/// Escape `text` for HTML and turn newlines into `<br/>`.
pub fn render_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            '\n' => out.push_str("<br/>"),
            '\r' => {}
            c => out.push(c),
        }
    }
    out
}

/// Format a transcript entry for a plain terminal, continuation lines
/// indented under the speaker prefix.
pub fn render_terminal(entry: &TranscriptEntry) -> String {
    let prefix = match entry.kind {
        EntryKind::User => "you> ",
        EntryKind::Assistant | EntryKind::Pending => "bot> ",
        EntryKind::Error => "err> ",
    };
    let indent = " ".repeat(prefix.len());

    render_lines(&entry.text)
        .iter()
        .enumerate()
        .map(|(i, line)| {
            if i == 0 {
                format!("{prefix}{line}")
            } else {
                format!("{indent}{line}")
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lines_split_on_newlines() {
        assert_eq!(
            render_lines("Summary:\r\nArrival: Oct 4\nNights: 2"),
            vec!["Summary:", "Arrival: Oct 4", "Nights: 2"]
        );
        assert_eq!(render_lines("single"), vec!["single"]);
    }

    #[test]
    fn html_converts_newlines_to_breaks() {
        assert_eq!(render_html("a\nb"), "a<br/>b");
    }

    #[test]
    fn html_escapes_markup() {
        assert_eq!(
            render_html("<b>Tom & \"Jerry\"</b>"),
            "&lt;b&gt;Tom &amp; &quot;Jerry&quot;&lt;/b&gt;"
        );
    }

    #[test]
    fn terminal_indents_continuation_lines() {
        let entry = TranscriptEntry {
            kind: EntryKind::Assistant,
            text: "Booking summary\nNights: 2".into(),
        };
        assert_eq!(render_terminal(&entry), "bot> Booking summary\n     Nights: 2");
    }

    #[test]
    fn terminal_prefixes_by_kind() {
        let user = TranscriptEntry {
            kind: EntryKind::User,
            text: "hi".into(),
        };
        let error = TranscriptEntry {
            kind: EntryKind::Error,
            text: "failed".into(),
        };
        assert_eq!(render_terminal(&user), "you> hi");
        assert_eq!(render_terminal(&error), "err> failed");
    }
}
