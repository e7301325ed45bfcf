//! # Rust LogForge
//!
//! A composable logging front-end. Every event runs through one pipeline:
//!
//! ```text
//! LogEvent → Filter → Printer chain → Output
//! ```
//!
//! ## Features
//!
//! - **Composable printers**: a base printer wrapped by decorators
//!   (timestamp, location, box, prefix, color), composed with `>>`
//! - **Static or dynamic**: concrete chains compile to direct calls, boxed
//!   chains can be assembled at runtime or from JSON configuration
//! - **Thread safe**: a logger can be shared between threads; outputs
//!   serialize their own writes
//!
//! ## Example
//!
//! ```
//! use rust_logforge::prelude::*;
//! use rust_logforge::printers::{boxed, message, prefixed};
//!
//! let logger = Logger::new(
//!     ThresholdFilter::new(Severity::Info),
//!     message() >> prefixed() >> boxed(),
//!     StreamOutput::new(Vec::new()),
//! );
//!
//! logger.warning("disk almost full").unwrap();
//!
//! let written = logger.output().with_writer(|buf| String::from_utf8(buf.clone()).unwrap());
//! assert_eq!(
//!     written.lines().collect::<Vec<_>>(),
//!     vec!["┌───────────────────────────┐",
//!          "│[WARNING]: disk almost full│",
//!          "└───────────────────────────┘"]
//! );
//! ```

pub mod core;
pub mod filters;
pub mod macros;
pub mod outputs;
pub mod printers;

pub mod prelude {
    pub use crate::core::{
        Decorate, DynLogger, Filter, LogEvent, LogMessage, Logger, LoggerBuilder, LoggerConfig,
        LoggerError, LoggerMetrics, Output, Printer, PrinterExt, Result, Severity, SeverityMap,
        SourceLocation, TimestampFormat,
    };
    pub use crate::filters::{CustomFilter, DebugOnlyFilter, ThresholdFilter};
    pub use crate::outputs::{ConsoleOutput, MultiOutput, StreamOutput};
}

pub use crate::core::{
    Decorate, DynFilter, DynLogger, DynOutput, DynPrinter, Filter, Line, Lines, LogEvent,
    LogMessage, Logger, LoggerBuilder, LoggerConfig, LoggerError, LoggerMetrics, Output,
    OutputEvent, OutputFailure, Printer, PrinterExt, Result, Severity, SeverityMap,
    SourceLocation, TimestampFormat,
};
