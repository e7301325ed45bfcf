//! Decorator prepending the event's source location

use crate::core::{Decorate, LogEvent, Lines, Printer, SourceLocation};
use std::fmt;
use std::sync::Arc;

pub const DEFAULT_LOCATION_PREFIX: &str = "Location: ";
/// Rendered when the formatter cannot describe a location
pub const INVALID_LOCATION: &str = "<Invalid Location>";

/// Renders a source location; `None` means the location is unusable
pub type LocationFormatter = Arc<dyn Fn(&SourceLocation) -> Option<String> + Send + Sync>;

/// Renders `file(line,column): function`, dropping the function part when
/// the call site did not record one. Locations without a file are unusable.
pub fn default_location_formatter(location: &SourceLocation) -> Option<String> {
    if location.file.is_empty() {
        return None;
    }
    Some(location.to_string())
}

/// Prepends one `<prefix><location>` line to the wrapped printer's output.
///
/// Without a formatter the wrapped lines pass through unchanged.
#[derive(Clone)]
pub struct LocationPrinter<P> {
    inner: P,
    formatter: Option<LocationFormatter>,
    prefix: String,
}

impl<P: Printer> LocationPrinter<P> {
    pub fn new(inner: P) -> Self {
        Located::default().decorate(inner)
    }

    pub fn inner(&self) -> &P {
        &self.inner
    }
}

impl<P: Printer> Printer for LocationPrinter<P> {
    fn print(&self, event: &LogEvent) -> Lines {
        let printed = self.inner.print(event);
        let Some(formatter) = &self.formatter else {
            return printed;
        };

        let location =
            formatter(event.location()).unwrap_or_else(|| INVALID_LOCATION.to_string());

        let mut lines = Vec::with_capacity(printed.len() + 1);
        lines.push(format!("{}{}", self.prefix, location));
        lines.extend(printed);
        lines
    }
}

impl<P: fmt::Debug> fmt::Debug for LocationPrinter<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LocationPrinter")
            .field("inner", &self.inner)
            .field("has_formatter", &self.formatter.is_some())
            .field("prefix", &self.prefix)
            .finish()
    }
}

/// Layer building a [`LocationPrinter`]
#[derive(Clone)]
pub struct Located {
    formatter: Option<LocationFormatter>,
    prefix: String,
}

impl Located {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            formatter: Some(Arc::new(default_location_formatter)),
            prefix: prefix.into(),
        }
    }

    /// Use a custom location formatter
    #[must_use]
    pub fn with_formatter<F>(mut self, formatter: F) -> Self
    where
        F: Fn(&SourceLocation) -> Option<String> + Send + Sync + 'static,
    {
        self.formatter = Some(Arc::new(formatter));
        self
    }

    /// Remove the formatter; the resulting printer passes lines through
    #[must_use]
    pub fn without_formatter(mut self) -> Self {
        self.formatter = None;
        self
    }

    #[must_use]
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }
}

impl Default for Located {
    fn default() -> Self {
        Self::new(DEFAULT_LOCATION_PREFIX)
    }
}

impl fmt::Debug for Located {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Located")
            .field("has_formatter", &self.formatter.is_some())
            .field("prefix", &self.prefix)
            .finish()
    }
}

impl<P: Printer> Decorate<P> for Located {
    type Printer = LocationPrinter<P>;

    fn decorate(self, printer: P) -> LocationPrinter<P> {
        LocationPrinter {
            inner: printer,
            formatter: self.formatter,
            prefix: self.prefix,
        }
    }
}

pub fn located() -> Located {
    Located::default()
}
