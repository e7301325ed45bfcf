//! Stock printer stages
//!
//! Base printers produce the initial lines for an event:
//! [`MessagePrinter`] and [`LogFmtPrinter`]. Decorators wrap another printer
//! and transform its output: [`TimestampPrinter`], [`LocationPrinter`],
//! [`BoxPrinter`], [`PrefixPrinter`] and [`ColorPrinter`].
//!
//! Each decorator has a matching layer value (`Timestamped`, `Located`,
//! `Boxed`, `Prefixed`, `Colorized`) and a constructor function, so chains
//! read in the order they are applied:
//!
//! ```
//! use rust_logforge::printers::{located, message, prefixed, timestamped};
//! use rust_logforge::{LogEvent, Printer, Severity};
//!
//! let printer = message() >> prefixed() >> timestamped() >> located();
//! let lines = printer.print(&LogEvent::new(Severity::Info, "ready"));
//!
//! assert!(lines[0].starts_with("Location: "));
//! assert!(lines[1].starts_with("Time: "));
//! assert!(lines[2].ends_with("ready"));
//! ```

pub mod boxed;
pub mod colorized;
pub mod located;
pub mod logfmt;
pub mod message;
pub mod prefixed;
pub mod timestamped;

pub use self::boxed::{boxed, BoxPrinter, Boxed};
#[cfg(feature = "colors")]
pub use self::colorized::ansi_foreground;
pub use self::colorized::{
    colorized, ColorPrinter, Colorized, DEFAULT_SEVERITY_COLORS, RESET_COLOR,
};
pub use self::located::{
    default_location_formatter, located, LocationFormatter, LocationPrinter, Located,
    DEFAULT_LOCATION_PREFIX, INVALID_LOCATION,
};
pub use self::logfmt::{logfmt, LogFmtPrinter, DEFAULT_LOGFMT_TIME_FORMAT};
pub use self::message::{message, MessagePrinter};
pub use self::prefixed::{prefixed, PrefixPrinter, Prefixed, DEFAULT_SEVERITY_PREFIXES};
pub use self::timestamped::{
    timestamped, TimestampPrinter, Timestamped, DEFAULT_TIME_FORMAT, DEFAULT_TIME_PREFIX,
    INVALID_TIME,
};

pub use crate::core::{Decorate, Printer, PrinterExt};

use crate::core::{Severity, SeverityMap};

/// Build a severity table from a static list
pub(crate) fn severity_table(entries: &[(Severity, &str)]) -> SeverityMap<String> {
    entries
        .iter()
        .map(|(severity, text)| (*severity, text.to_string()))
        .collect()
}

crate::core::printer::impl_shr_composition!(
    MessagePrinter,
    LogFmtPrinter,
    TimestampPrinter<P>,
    LocationPrinter<P>,
    BoxPrinter<P>,
    PrefixPrinter<P>,
    ColorPrinter<P>,
);
