//! Console output routing by severity

use crate::core::{LoggerError, Output, OutputEvent, Result, Severity};
use crate::outputs::stream::StreamOutput;
use std::io;

/// Writes Error and Fatal events to stderr and everything else to stdout
pub struct ConsoleOutput {
    stdout: StreamOutput<io::Stdout>,
    stderr: StreamOutput<io::Stderr>,
    stderr_threshold: Severity,
}

impl ConsoleOutput {
    pub fn new() -> Self {
        Self {
            stdout: StreamOutput::stdout(),
            stderr: StreamOutput::stderr(),
            stderr_threshold: Severity::Error,
        }
    }

    /// Route events at or above `severity` to stderr
    #[must_use]
    pub fn with_stderr_threshold(mut self, severity: Severity) -> Self {
        self.stderr_threshold = severity;
        self
    }

    fn routes_to_stderr(&self, severity: Severity) -> bool {
        severity >= self.stderr_threshold
    }
}

impl Default for ConsoleOutput {
    fn default() -> Self {
        Self::new()
    }
}

impl Output for ConsoleOutput {
    fn write(&self, event: &OutputEvent<'_>) -> Result<()> {
        let stream: &dyn Output = if self.routes_to_stderr(event.origin.severity()) {
            &self.stderr
        } else {
            &self.stdout
        };
        stream
            .write(event)
            .map_err(|e| LoggerError::output(stream.name(), e))
    }

    /// Flushes both streams, reporting the first failure
    fn flush(&self) -> Result<()> {
        let stdout = self
            .stdout
            .flush()
            .map_err(|e| LoggerError::output(self.stdout.name(), e));
        let stderr = self
            .stderr
            .flush()
            .map_err(|e| LoggerError::output(self.stderr.name(), e));
        stdout.and(stderr)
    }

    fn name(&self) -> &str {
        "console"
    }
}
