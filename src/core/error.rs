//! Error types for the logger system

use std::fmt;

pub type Result<T> = std::result::Result<T, LoggerError>;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// IO error with context
    #[error("IO error while {operation}: {message}")]
    IoOperation {
        operation: String,
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Generic IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON configuration error
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Invalid configuration with details
    #[error("Invalid configuration for {component}: {message}")]
    InvalidConfiguration { component: String, message: String },

    /// A named output failed to write
    #[error("Output '{output}' failed: {source}")]
    OutputFailed {
        output: String,
        #[source]
        source: Box<LoggerError>,
    },

    /// One or more sub-outputs of a fan-out failed; the rest were still written
    #[error("{} of {attempted} outputs failed: {}", .failures.len(), FailureList(.failures))]
    FanOut {
        failures: Vec<OutputFailure>,
        attempted: usize,
    },

    /// Generic error
    #[error("{0}")]
    Other(String),
}

/// A single failed sub-output inside a fan-out write
#[derive(Debug)]
pub struct OutputFailure {
    /// Position of the output in the fan-out
    pub index: usize,
    /// Name reported by the output
    pub output: String,
    pub error: LoggerError,
}

impl fmt::Display for OutputFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{} '{}': {}", self.index, self.output, self.error)
    }
}

struct FailureList<'a>(&'a [OutputFailure]);

impl fmt::Display for FailureList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, failure) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{}", failure)?;
        }
        Ok(())
    }
}

impl LoggerError {
    /// Create an IO operation error with context
    pub fn io_operation(
        operation: impl Into<String>,
        message: impl Into<String>,
        source: std::io::Error,
    ) -> Self {
        LoggerError::IoOperation {
            operation: operation.into(),
            message: message.into(),
            source,
        }
    }

    /// Create an invalid configuration error
    pub fn config(component: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::InvalidConfiguration {
            component: component.into(),
            message: message.into(),
        }
    }

    /// Attribute an error to a named output
    pub fn output(output: impl Into<String>, source: LoggerError) -> Self {
        LoggerError::OutputFailed {
            output: output.into(),
            source: Box::new(source),
        }
    }

    /// Create a generic error
    pub fn other<S: Into<String>>(msg: S) -> Self {
        LoggerError::Other(msg.into())
    }
}
