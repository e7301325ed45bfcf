//! Logger facade tying a filter, a printer chain and an output together

use super::{
    error::Result,
    filter::{DynFilter, Filter},
    log_event::{LogEvent, LogMessage, OutputEvent},
    metrics::LoggerMetrics,
    output::{DynOutput, Output},
    printer::{DynPrinter, Printer},
    severity::Severity,
};
use crate::filters::ThresholdFilter;
use crate::outputs::{MultiOutput, StreamOutput};
use crate::printers::MessagePrinter;
use std::error::Error as StdError;

/// Runs every event through `filter → printer → output`.
///
/// With concrete type parameters the whole pipeline is resolved statically;
/// [`DynLogger`] holds boxed collaborators chosen at runtime.
///
/// # Example
///
/// ```
/// use rust_logforge::filters::ThresholdFilter;
/// use rust_logforge::outputs::StreamOutput;
/// use rust_logforge::printers::{message, prefixed};
/// use rust_logforge::{Logger, Severity};
///
/// let logger = Logger::new(
///     ThresholdFilter::new(Severity::Info),
///     message() >> prefixed(),
///     StreamOutput::new(Vec::new()),
/// );
///
/// logger.debug("dropped").unwrap();
/// logger.warning("kept").unwrap();
///
/// let written = logger.output().with_writer(|buf| String::from_utf8(buf.clone()).unwrap());
/// assert_eq!(written.lines().collect::<Vec<_>>(), vec!["[WARNING]: kept"]);
/// ```
pub struct Logger<F = DynFilter, P = DynPrinter, O = DynOutput> {
    filter: F,
    printer: P,
    output: O,
    metrics: LoggerMetrics,
}

/// A logger assembled from boxed parts
pub type DynLogger = Logger<DynFilter, DynPrinter, DynOutput>;

impl<F: Filter, P: Printer, O: Output> Logger<F, P, O> {
    pub fn new(filter: F, printer: P, output: O) -> Self {
        Self {
            filter,
            printer,
            output,
            metrics: LoggerMetrics::new(),
        }
    }

    /// Filter, print and write one event.
    ///
    /// A rejected event never reaches the printer or the output. An output
    /// failure is returned to the caller.
    pub fn log(&self, event: LogEvent) -> Result<()> {
        if !self.filter.should_log(&event) {
            self.metrics.record_filtered();
            return Ok(());
        }

        let lines = self.printer.print(&event);
        match self.output.write(&OutputEvent::new(lines, &event)) {
            Ok(()) => {
                self.metrics.record_logged();
                Ok(())
            }
            Err(e) => {
                self.metrics.record_failed_write();
                Err(e)
            }
        }
    }

    #[track_caller]
    pub fn trace(&self, message: impl Into<LogMessage>) -> Result<()> {
        self.log(LogEvent::new(Severity::Trace, message))
    }

    #[track_caller]
    pub fn debug(&self, message: impl Into<LogMessage>) -> Result<()> {
        self.log(LogEvent::new(Severity::Debug, message))
    }

    #[track_caller]
    pub fn info(&self, message: impl Into<LogMessage>) -> Result<()> {
        self.log(LogEvent::new(Severity::Info, message))
    }

    #[track_caller]
    pub fn warning(&self, message: impl Into<LogMessage>) -> Result<()> {
        self.log(LogEvent::new(Severity::Warning, message))
    }

    #[track_caller]
    pub fn error(&self, message: impl Into<LogMessage>) -> Result<()> {
        self.log(LogEvent::new(Severity::Error, message))
    }

    #[track_caller]
    pub fn fatal(&self, message: impl Into<LogMessage>) -> Result<()> {
        self.log(LogEvent::new(Severity::Fatal, message))
    }

    /// Log an error value instead of text
    #[track_caller]
    pub fn log_error<E>(&self, severity: Severity, error: E) -> Result<()>
    where
        E: StdError + Send + Sync + 'static,
    {
        self.log(LogEvent::new(severity, LogMessage::error(error)))
    }

    pub fn flush(&self) -> Result<()> {
        self.output.flush()
    }

    pub fn metrics(&self) -> &LoggerMetrics {
        &self.metrics
    }

    pub fn filter(&self) -> &F {
        &self.filter
    }

    pub fn printer(&self) -> &P {
        &self.printer
    }

    pub fn output(&self) -> &O {
        &self.output
    }

    pub fn into_parts(self) -> (F, P, O) {
        (self.filter, self.printer, self.output)
    }
}

impl Logger {
    /// Create a builder for a [`DynLogger`]
    ///
    /// # Example
    /// ```
    /// use rust_logforge::filters::ThresholdFilter;
    /// use rust_logforge::printers::{boxed, message};
    /// use rust_logforge::{Logger, Severity};
    ///
    /// let logger = Logger::builder()
    ///     .filter(ThresholdFilter::new(Severity::Warning))
    ///     .printer(message() >> boxed())
    ///     .build();
    /// ```
    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }
}

/// Builder assembling a [`DynLogger`]
///
/// Unset parts default to a filter accepting every severity, a
/// [`MessagePrinter`] and standard output. Several outputs are combined into
/// a [`MultiOutput`] in the order they were added.
#[derive(Default)]
pub struct LoggerBuilder {
    filter: Option<DynFilter>,
    printer: Option<DynPrinter>,
    outputs: Vec<DynOutput>,
}

impl LoggerBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use = "builder methods return a new value"]
    pub fn filter<F: Filter + 'static>(mut self, filter: F) -> Self {
        self.filter = Some(Box::new(filter));
        self
    }

    /// Shorthand for a [`ThresholdFilter`]
    #[must_use = "builder methods return a new value"]
    pub fn min_severity(self, severity: Severity) -> Self {
        self.filter(ThresholdFilter::new(severity))
    }

    #[must_use = "builder methods return a new value"]
    pub fn printer<P: Printer + 'static>(mut self, printer: P) -> Self {
        self.printer = Some(Box::new(printer));
        self
    }

    /// Add an output
    #[must_use = "builder methods return a new value"]
    pub fn output<O: Output + 'static>(mut self, output: O) -> Self {
        self.outputs.push(Box::new(output));
        self
    }

    pub fn build(self) -> DynLogger {
        let filter = self
            .filter
            .unwrap_or_else(|| Box::new(ThresholdFilter::default()));
        let printer = self
            .printer
            .unwrap_or_else(|| Box::new(MessagePrinter::new()));

        Logger::new(filter, printer, combine_outputs(self.outputs))
    }
}

/// One output as is, several behind a [`MultiOutput`], none as stdout
pub(crate) fn combine_outputs(mut outputs: Vec<DynOutput>) -> DynOutput {
    match outputs.len() {
        0 => Box::new(StreamOutput::stdout()),
        1 => outputs.remove(0),
        _ => Box::new(MultiOutput::new(outputs)),
    }
}
