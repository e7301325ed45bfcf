//! Decorator prefixing every line with a severity tag

use super::severity_table;
use crate::core::{Decorate, LogEvent, Lines, Printer, Severity, SeverityMap};

pub const DEFAULT_SEVERITY_PREFIXES: [(Severity, &str); Severity::COUNT] = [
    (Severity::Trace, "[TRACE]: "),
    (Severity::Debug, "[DEBUG]: "),
    (Severity::Info, "[INFO]: "),
    (Severity::Warning, "[WARNING]: "),
    (Severity::Error, "[ERROR]: "),
    (Severity::Fatal, "[FATAL]: "),
];

/// Prefixes each line with the tag configured for the event's severity.
///
/// Tags are padded with spaces to the longest configured tag so bodies of
/// different severities line up. Severities without a tag pass through.
#[derive(Debug, Clone)]
pub struct PrefixPrinter<P> {
    inner: P,
    prefixes: SeverityMap<String>,
    width: usize,
}

impl<P: Printer> PrefixPrinter<P> {
    pub fn new(inner: P) -> Self {
        Prefixed::default().decorate(inner)
    }

    pub fn inner(&self) -> &P {
        &self.inner
    }

    /// Width every prefix is padded to
    pub fn width(&self) -> usize {
        self.width
    }
}

impl<P: Printer> Printer for PrefixPrinter<P> {
    fn print(&self, event: &LogEvent) -> Lines {
        let printed = self.inner.print(event);
        let Some(prefix) = self.prefixes.get(event.severity()) else {
            return printed;
        };

        let padding = self.width - prefix.chars().count();
        let leading = format!("{prefix}{:padding$}", "");

        printed
            .into_iter()
            .map(|line| format!("{leading}{line}"))
            .collect()
    }
}

/// Layer building a [`PrefixPrinter`]
#[derive(Debug, Clone)]
pub struct Prefixed {
    prefixes: SeverityMap<String>,
}

impl Prefixed {
    pub fn new(prefixes: SeverityMap<String>) -> Self {
        Self { prefixes }
    }

    pub fn prefixes(&self) -> &SeverityMap<String> {
        &self.prefixes
    }
}

impl Default for Prefixed {
    fn default() -> Self {
        Self::new(severity_table(&DEFAULT_SEVERITY_PREFIXES))
    }
}

impl<P: Printer> Decorate<P> for Prefixed {
    type Printer = PrefixPrinter<P>;

    fn decorate(self, printer: P) -> PrefixPrinter<P> {
        let width = self
            .prefixes
            .values()
            .map(|prefix| prefix.chars().count())
            .max()
            .unwrap_or(0);

        PrefixPrinter {
            inner: printer,
            prefixes: self.prefixes,
            width,
        }
    }
}

pub fn prefixed() -> Prefixed {
    Prefixed::default()
}
