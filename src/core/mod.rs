//! Core logger types and traits

pub mod config;
pub mod error;
pub mod filter;
pub mod log_event;
pub mod logger;
pub mod metrics;
pub mod output;
pub mod printer;
pub mod severity;
pub mod timestamp;

pub use config::{
    BasePrinterConfig, FilterConfig, LoggerConfig, OutputConfig, PrinterConfig, StageConfig,
};
pub use error::{LoggerError, OutputFailure, Result};
pub use filter::{DynFilter, Filter};
pub use log_event::{Line, Lines, LogEvent, LogMessage, OutputEvent, SourceLocation};
pub use logger::{DynLogger, Logger, LoggerBuilder};
pub use metrics::LoggerMetrics;
pub use output::{DynOutput, Output};
pub use printer::{Decorate, DynPrinter, Printer, PrinterExt};
pub use severity::{Severity, SeverityMap};
pub use timestamp::TimestampFormat;
