//! Log event model

use super::severity::Severity;
use chrono::{DateTime, Utc};
use std::error::Error as StdError;
use std::fmt;
use std::panic::Location;
use std::sync::Arc;

/// A single rendered line
pub type Line = String;

/// Ordered rendered lines; order is significant
pub type Lines = Vec<Line>;

/// Payload of a log event.
///
/// Printer stages match on the kinds they understand and contribute
/// nothing for the rest.
#[derive(Debug, Clone)]
#[non_exhaustive]
pub enum LogMessage {
    /// Free text, possibly spanning several lines
    Text(String),
    /// A captured error value
    Error(Arc<dyn StdError + Send + Sync>),
}

impl LogMessage {
    /// Capture an error value
    pub fn error<E>(error: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        LogMessage::Error(Arc::new(error))
    }

    /// Text payload, if this is a text message
    pub fn as_text(&self) -> Option<&str> {
        match self {
            LogMessage::Text(text) => Some(text),
            LogMessage::Error(_) => None,
        }
    }

    /// Description of the captured error, if this is an error message
    pub fn error_description(&self) -> Option<String> {
        match self {
            LogMessage::Text(_) => None,
            LogMessage::Error(error) => Some(error.to_string()),
        }
    }
}

impl From<String> for LogMessage {
    fn from(text: String) -> Self {
        LogMessage::Text(text)
    }
}

impl From<&str> for LogMessage {
    fn from(text: &str) -> Self {
        LogMessage::Text(text.to_string())
    }
}

impl From<Arc<dyn StdError + Send + Sync>> for LogMessage {
    fn from(error: Arc<dyn StdError + Send + Sync>) -> Self {
        LogMessage::Error(error)
    }
}

impl From<Box<dyn StdError + Send + Sync>> for LogMessage {
    fn from(error: Box<dyn StdError + Send + Sync>) -> Self {
        LogMessage::Error(Arc::from(error))
    }
}

/// Where a log event was emitted from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SourceLocation {
    pub file: &'static str,
    pub line: u32,
    pub column: u32,
    /// Enclosing function, when the call site could name it
    pub function: Option<&'static str>,
}

impl SourceLocation {
    pub const fn new(file: &'static str, line: u32, column: u32) -> Self {
        Self {
            file,
            line,
            column,
            function: None,
        }
    }

    #[must_use]
    pub const fn with_function(mut self, function: &'static str) -> Self {
        self.function = Some(function);
        self
    }

    /// Location of the caller, propagated through `#[track_caller]` frames
    #[track_caller]
    pub fn caller() -> Self {
        Location::caller().into()
    }
}

impl From<&'static Location<'static>> for SourceLocation {
    fn from(location: &'static Location<'static>) -> Self {
        Self::new(location.file(), location.line(), location.column())
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({},{})", self.file, self.line, self.column)?;
        if let Some(function) = self.function {
            write!(f, ": {}", function)?;
        }
        Ok(())
    }
}

/// One log occurrence. Immutable once built.
#[derive(Debug, Clone)]
pub struct LogEvent {
    severity: Severity,
    message: LogMessage,
    time: DateTime<Utc>,
    location: SourceLocation,
}

impl LogEvent {
    /// Build an event stamped with the current time and the caller location
    #[track_caller]
    pub fn new(severity: Severity, message: impl Into<LogMessage>) -> Self {
        Self {
            severity,
            message: message.into(),
            time: Utc::now(),
            location: SourceLocation::caller(),
        }
    }

    /// Build an event with every field given explicitly
    pub fn at(
        severity: Severity,
        message: impl Into<LogMessage>,
        time: DateTime<Utc>,
        location: SourceLocation,
    ) -> Self {
        Self {
            severity,
            message: message.into(),
            time,
            location,
        }
    }

    #[must_use]
    pub fn with_time(mut self, time: DateTime<Utc>) -> Self {
        self.time = time;
        self
    }

    #[must_use]
    pub fn with_location(mut self, location: SourceLocation) -> Self {
        self.location = location;
        self
    }

    #[inline]
    pub fn severity(&self) -> Severity {
        self.severity
    }

    #[inline]
    pub fn message(&self) -> &LogMessage {
        &self.message
    }

    #[inline]
    pub fn time(&self) -> &DateTime<Utc> {
        &self.time
    }

    #[inline]
    pub fn location(&self) -> &SourceLocation {
        &self.location
    }
}

/// Rendered lines together with the event they came from.
///
/// Produced once per log call by the printer chain and consumed by the output.
#[derive(Debug, Clone)]
pub struct OutputEvent<'a> {
    pub lines: Lines,
    pub origin: &'a LogEvent,
}

impl<'a> OutputEvent<'a> {
    pub fn new(lines: Lines, origin: &'a LogEvent) -> Self {
        Self { lines, origin }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[derive(Debug)]
    struct DiskFull;

    impl fmt::Display for DiskFull {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("no space left on device")
        }
    }

    impl StdError for DiskFull {}

    #[test]
    fn test_new_captures_caller_location() {
        let event = LogEvent::new(Severity::Info, "hello");
        assert_eq!(event.location().file, file!());
        assert_eq!(event.location().line, line!() - 2);
        assert_eq!(event.severity(), Severity::Info);
        assert_eq!(event.message().as_text(), Some("hello"));
    }

    #[test]
    fn test_explicit_fields() {
        let time = Utc.with_ymd_and_hms(2024, 3, 1, 8, 0, 0).unwrap();
        let location = SourceLocation::new("lib.rs", 7, 3).with_function("run");
        let event = LogEvent::at(Severity::Fatal, "boom", time, location);

        assert_eq!(*event.time(), time);
        assert_eq!(event.location().function, Some("run"));
    }

    #[test]
    fn test_error_message() {
        let message = LogMessage::error(DiskFull);
        assert_eq!(message.as_text(), None);
        assert_eq!(
            message.error_description().as_deref(),
            Some("no space left on device")
        );
    }

    #[test]
    fn test_location_display() {
        let location = SourceLocation::new("src/main.rs", 10, 5);
        assert_eq!(location.to_string(), "src/main.rs(10,5)");
        assert_eq!(
            location.with_function("main").to_string(),
            "src/main.rs(10,5): main"
        );
    }
}
