//! Base printer rendering the message body

use crate::core::{LogEvent, LogMessage, Lines, Printer};

/// Renders the event message.
///
/// Text is split on `\n` into one line per segment, keeping empty segments
/// and dropping a trailing `\r`. Empty text yields no lines. An error renders
/// as a single `Error: <description>` line.
#[derive(Debug, Clone, Copy, Default)]
pub struct MessagePrinter;

impl MessagePrinter {
    pub const fn new() -> Self {
        Self
    }
}

impl Printer for MessagePrinter {
    fn print(&self, event: &LogEvent) -> Lines {
        match event.message() {
            LogMessage::Text(text) if text.is_empty() => Vec::new(),
            LogMessage::Text(text) => text
                .split('\n')
                .map(|segment| segment.strip_suffix('\r').unwrap_or(segment).to_string())
                .collect(),
            LogMessage::Error(error) => vec![format!("Error: {}", error)],
        }
    }
}

#[inline]
pub const fn message() -> MessagePrinter {
    MessagePrinter
}
