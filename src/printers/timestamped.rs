//! Decorator prepending the event time

use crate::core::{Decorate, LogEvent, Lines, Printer, TimestampFormat};
use chrono::{FixedOffset, Offset, Utc};

pub const DEFAULT_TIME_FORMAT: &str = "%d.%m.%Y %H:%M:%S";
pub const DEFAULT_TIME_PREFIX: &str = "Time: ";
/// Rendered in place of a time that could not be formatted
pub const INVALID_TIME: &str = "<Invalid Time>";

/// Prepends one `<prefix><time>` line to the wrapped printer's output
#[derive(Debug, Clone)]
pub struct TimestampPrinter<P> {
    inner: P,
    format: TimestampFormat,
    prefix: String,
    offset: FixedOffset,
}

impl<P: Printer> TimestampPrinter<P> {
    pub fn new(inner: P) -> Self {
        Timestamped::default().decorate(inner)
    }

    pub fn inner(&self) -> &P {
        &self.inner
    }

    fn format_time(&self, event: &LogEvent) -> String {
        self.format
            .format_with_offset(event.time(), self.offset)
            .unwrap_or_else(|| INVALID_TIME.to_string())
    }
}

impl<P: Printer> Printer for TimestampPrinter<P> {
    fn print(&self, event: &LogEvent) -> Lines {
        let printed = self.inner.print(event);

        let mut lines = Vec::with_capacity(printed.len() + 1);
        lines.push(format!("{}{}", self.prefix, self.format_time(event)));
        lines.extend(printed);
        lines
    }
}

/// Layer building a [`TimestampPrinter`]
#[derive(Debug, Clone)]
pub struct Timestamped {
    format: TimestampFormat,
    prefix: String,
    offset: FixedOffset,
}

impl Timestamped {
    pub fn new(format: impl Into<TimestampFormat>, prefix: impl Into<String>) -> Self {
        Self {
            format: format.into(),
            prefix: prefix.into(),
            offset: Utc.fix(),
        }
    }

    #[must_use]
    pub fn with_format(mut self, format: impl Into<TimestampFormat>) -> Self {
        self.format = format.into();
        self
    }

    #[must_use]
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Render times at a fixed UTC offset instead of UTC.
    ///
    /// Unix formats count from the epoch and ignore the offset.
    #[must_use]
    pub fn with_offset(mut self, offset: FixedOffset) -> Self {
        self.offset = offset;
        self
    }
}

impl Default for Timestamped {
    fn default() -> Self {
        Self::new(DEFAULT_TIME_FORMAT, DEFAULT_TIME_PREFIX)
    }
}

impl<P: Printer> Decorate<P> for Timestamped {
    type Printer = TimestampPrinter<P>;

    fn decorate(self, printer: P) -> TimestampPrinter<P> {
        TimestampPrinter {
            inner: printer,
            format: self.format,
            prefix: self.prefix,
            offset: self.offset,
        }
    }
}

pub fn timestamped() -> Timestamped {
    Timestamped::default()
}
