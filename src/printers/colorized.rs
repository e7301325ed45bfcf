//! Decorator wrapping lines in ANSI color codes

use super::severity_table;
use crate::core::{Decorate, LogEvent, Lines, Printer, Severity, SeverityMap};

pub const RESET_COLOR: &str = "\x1B[0m";

/// 256-color foreground codes; debug output keeps the terminal default
pub const DEFAULT_SEVERITY_COLORS: [(Severity, &str); 5] = [
    (Severity::Trace, "\x1B[38;5;244m"),
    (Severity::Info, "\x1B[38;5;12m"),
    (Severity::Warning, "\x1B[38;5;208m"),
    (Severity::Error, "\x1B[38;5;196m"),
    (Severity::Fatal, "\x1B[38;5;199m"),
];

/// Wraps each line in the color code configured for the event's severity.
///
/// Escape codes count towards line length, so place this stage after any
/// stage that measures lines ([`BoxPrinter`](super::BoxPrinter),
/// [`PrefixPrinter`](super::PrefixPrinter)).
#[derive(Debug, Clone)]
pub struct ColorPrinter<P> {
    inner: P,
    colors: SeverityMap<String>,
}

impl<P: Printer> ColorPrinter<P> {
    pub fn new(inner: P) -> Self {
        Colorized::default().decorate(inner)
    }

    pub fn inner(&self) -> &P {
        &self.inner
    }
}

impl<P: Printer> Printer for ColorPrinter<P> {
    fn print(&self, event: &LogEvent) -> Lines {
        let printed = self.inner.print(event);
        let Some(color) = self.colors.get(event.severity()) else {
            return printed;
        };

        printed
            .into_iter()
            .map(|line| format!("{color}{line}{RESET_COLOR}"))
            .collect()
    }
}

/// Layer building a [`ColorPrinter`]
#[derive(Debug, Clone)]
pub struct Colorized {
    colors: SeverityMap<String>,
}

impl Colorized {
    pub fn new(colors: SeverityMap<String>) -> Self {
        Self { colors }
    }

    /// Default palette when the environment allows colored output, no
    /// colors otherwise (`NO_COLOR`, `CLICOLOR`, `CLICOLOR_FORCE`)
    #[cfg(feature = "colors")]
    pub fn auto() -> Self {
        if ::colored::control::SHOULD_COLORIZE.should_colorize() {
            Self::default()
        } else {
            Self::new(SeverityMap::new())
        }
    }

    /// Build a palette from `colored` colors
    ///
    /// ```
    /// use colored::Color;
    /// use rust_logforge::printers::Colorized;
    /// use rust_logforge::Severity;
    ///
    /// let layer = Colorized::from_palette([
    ///     (Severity::Warning, Color::Yellow),
    ///     (Severity::Error, Color::Red),
    /// ]);
    /// assert_eq!(
    ///     layer.colors().get(Severity::Error).map(String::as_str),
    ///     Some("\x1B[31m")
    /// );
    /// ```
    #[cfg(feature = "colors")]
    pub fn from_palette<I>(palette: I) -> Self
    where
        I: IntoIterator<Item = (Severity, ::colored::Color)>,
    {
        Self::new(
            palette
                .into_iter()
                .map(|(severity, color)| (severity, ansi_foreground(color)))
                .collect(),
        )
    }

    pub fn colors(&self) -> &SeverityMap<String> {
        &self.colors
    }
}

impl Default for Colorized {
    fn default() -> Self {
        Self::new(severity_table(&DEFAULT_SEVERITY_COLORS))
    }
}

impl<P: Printer> Decorate<P> for Colorized {
    type Printer = ColorPrinter<P>;

    fn decorate(self, printer: P) -> ColorPrinter<P> {
        ColorPrinter {
            inner: printer,
            colors: self.colors,
        }
    }
}

pub fn colorized() -> Colorized {
    Colorized::default()
}

/// SGR foreground sequence for a `colored` color.
///
/// `TrueColor` follows `colored`'s terminal detection: unless `COLORTERM`
/// advertises `truecolor` or `24bit`, it is downgraded to the nearest basic
/// color.
#[cfg(feature = "colors")]
pub fn ansi_foreground(color: ::colored::Color) -> String {
    format!("\x1B[{}m", color.to_fg_str())
}
