//! Base printer rendering a single logfmt line

use super::severity_table;
use crate::core::{LogEvent, LogMessage, Lines, Printer, Severity, SeverityMap, TimestampFormat};
use chrono::{FixedOffset, Offset, Utc};

pub const DEFAULT_LOGFMT_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%z";

const DEFAULT_LEVEL_NAMES: [(Severity, &str); Severity::COUNT] = [
    (Severity::Trace, "trace"),
    (Severity::Debug, "debug"),
    (Severity::Info, "info"),
    (Severity::Warning, "warning"),
    (Severity::Error, "error"),
    (Severity::Fatal, "fatal"),
];

/// Renders the whole event as one line of `key=value` tokens:
///
/// `level=<name> message=<text> time=<time>` (or `error=<description>` in
/// place of `message=`). A token whose datum is unavailable is left out:
/// an unmapped level, an unknown message kind or an unformattable time.
///
/// # Example
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use rust_logforge::printers::logfmt;
/// use rust_logforge::{LogEvent, Printer, Severity, SourceLocation};
///
/// let event = LogEvent::at(
///     Severity::Warning,
///     "disk full",
///     Utc.with_ymd_and_hms(2025, 1, 8, 10, 30, 45).unwrap(),
///     SourceLocation::new("main.rs", 1, 1),
/// );
/// assert_eq!(
///     logfmt().print(&event),
///     vec!["level=warning message=disk full time=2025-01-08T10:30:45+0000"]
/// );
/// ```
#[derive(Debug, Clone)]
pub struct LogFmtPrinter {
    levels: SeverityMap<String>,
    time_format: TimestampFormat,
    offset: FixedOffset,
}

impl LogFmtPrinter {
    pub fn new(levels: SeverityMap<String>, time_format: impl Into<TimestampFormat>) -> Self {
        Self {
            levels,
            time_format: time_format.into(),
            offset: Utc.fix(),
        }
    }

    #[must_use]
    pub fn with_levels(mut self, levels: SeverityMap<String>) -> Self {
        self.levels = levels;
        self
    }

    #[must_use]
    pub fn with_time_format(mut self, time_format: impl Into<TimestampFormat>) -> Self {
        self.time_format = time_format.into();
        self
    }

    /// Render times at a fixed UTC offset instead of UTC
    #[must_use]
    pub fn with_offset(mut self, offset: FixedOffset) -> Self {
        self.offset = offset;
        self
    }

    fn level_token(&self, severity: Severity) -> Option<String> {
        self.levels
            .get(severity)
            .map(|name| format!("level={}", escape_value(name)))
    }

    fn message_token(message: &LogMessage) -> Option<String> {
        match message {
            LogMessage::Text(text) => Some(format!("message={}", escape_value(text))),
            LogMessage::Error(error) => {
                Some(format!("error={}", escape_value(&error.to_string())))
            }
        }
    }

    fn time_token(&self, event: &LogEvent) -> Option<String> {
        self.time_format
            .format_with_offset(event.time(), self.offset)
            .map(|time| format!("time={}", time))
    }
}

impl Default for LogFmtPrinter {
    fn default() -> Self {
        Self::new(
            severity_table(&DEFAULT_LEVEL_NAMES),
            DEFAULT_LOGFMT_TIME_FORMAT,
        )
    }
}

impl Printer for LogFmtPrinter {
    fn print(&self, event: &LogEvent) -> Lines {
        let tokens = [
            self.level_token(event.severity()),
            Self::message_token(event.message()),
            self.time_token(event),
        ];

        let line = tokens.into_iter().flatten().collect::<Vec<_>>().join(" ");
        vec![line]
    }
}

/// Keep a value on one line
fn escape_value(value: &str) -> String {
    value.replace('\r', "\\r").replace('\n', "\\n")
}

pub fn logfmt() -> LogFmtPrinter {
    LogFmtPrinter::default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::SourceLocation;
    use chrono::{DateTime, TimeZone};
    use std::fmt;

    #[derive(Debug)]
    struct Refused;

    impl fmt::Display for Refused {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("connection refused")
        }
    }

    impl std::error::Error for Refused {}

    fn t0() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 1, 8, 10, 30, 45).unwrap()
    }

    fn event(severity: Severity, message: impl Into<LogMessage>) -> LogEvent {
        LogEvent::at(severity, message, t0(), SourceLocation::new("main.rs", 1, 1))
    }

    #[test]
    fn test_warning_line() {
        let lines = logfmt().print(&event(Severity::Warning, "disk full"));
        assert_eq!(
            lines,
            vec!["level=warning message=disk full time=2025-01-08T10:30:45+0000"]
        );
    }

    #[test]
    fn test_error_token() {
        let lines = logfmt().print(&event(Severity::Error, LogMessage::error(Refused)));
        assert_eq!(
            lines,
            vec!["level=error error=connection refused time=2025-01-08T10:30:45+0000"]
        );
    }

    #[test]
    fn test_unmapped_level_is_omitted() {
        let levels = SeverityMap::new().with(Severity::Error, "err");
        let printer = logfmt().with_levels(levels).with_time_format("%H:%M");

        assert_eq!(
            printer.print(&event(Severity::Info, "hi")),
            vec!["message=hi time=10:30"]
        );
    }

    #[test]
    fn test_invalid_time_is_omitted() {
        let printer = logfmt().with_time_format("%Q");
        assert_eq!(
            printer.print(&event(Severity::Debug, "x")),
            vec!["level=debug message=x"]
        );
    }

    #[test]
    fn test_multiline_message_stays_on_one_line() {
        let lines = logfmt()
            .with_time_format(TimestampFormat::Unix)
            .print(&event(Severity::Info, "a\nb"));

        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0], format!("level=info message=a\\nb time={}", t0().timestamp()));
    }

    #[test]
    fn test_offset_is_applied() {
        let printer = logfmt().with_offset(FixedOffset::east_opt(9 * 3600).unwrap());
        let line = &printer.print(&event(Severity::Info, "x"))[0];
        assert!(line.ends_with("time=2025-01-08T19:30:45+0900"), "{}", line);
    }
}
