//! Logging macros for ergonomic log message formatting.
//!
//! These macros format their arguments like `format!` and record the call
//! site together with the enclosing function name, which the
//! [`Logger`](crate::Logger) convenience methods cannot see.
//! Each expands to `logger.log(..)` and evaluates to its `Result`.
//!
//! # Examples
//!
//! ```
//! use rust_logforge::outputs::StreamOutput;
//! use rust_logforge::printers::{located, message};
//! use rust_logforge::{info, Logger};
//!
//! let logger = Logger::builder()
//!     .printer(message() >> located())
//!     .output(StreamOutput::new(std::io::sink()))
//!     .build();
//!
//! info!(logger, "Server started").unwrap();
//!
//! let port = 8080;
//! info!(logger, "Server listening on port {}", port).unwrap();
//! ```

/// Name of the enclosing function, with closure frames stripped.
#[doc(hidden)]
#[macro_export]
macro_rules! __function_name {
    () => {{
        fn marker() {}
        fn type_name_of<T>(_: T) -> &'static str {
            ::std::any::type_name::<T>()
        }
        let name = type_name_of(marker);
        let name = name.strip_suffix("::marker").unwrap_or(name);
        name.trim_end_matches("::{{closure}}")
    }};
}

/// Log a message at the given severity.
///
/// # Examples
///
/// ```
/// # use rust_logforge::Logger;
/// # let logger = Logger::builder().output(rust_logforge::outputs::StreamOutput::new(std::io::sink())).build();
/// use rust_logforge::{log, Severity};
/// log!(logger, Severity::Info, "Simple message").unwrap();
/// log!(logger, Severity::Error, "Error code: {}", 500).unwrap();
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $severity:expr, $($arg:tt)+) => {
        $logger.log(
            $crate::LogEvent::new($severity, format!($($arg)+)).with_location(
                $crate::SourceLocation::new(file!(), line!(), column!())
                    .with_function($crate::__function_name!()),
            ),
        )
    };
}

/// Log a trace-level message.
///
/// # Examples
///
/// ```
/// # use rust_logforge::Logger;
/// # let logger = Logger::builder().output(rust_logforge::outputs::StreamOutput::new(std::io::sink())).build();
/// use rust_logforge::trace;
/// trace!(logger, "Entering function: calculate()").unwrap();
/// trace!(logger, "Variable value: {}", 42).unwrap();
/// ```
#[macro_export]
macro_rules! trace {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Severity::Trace, $($arg)+)
    };
}

/// Log a debug-level message.
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Severity::Debug, $($arg)+)
    };
}

/// Log an info-level message.
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Severity::Info, $($arg)+)
    };
}

/// Log a warning-level message.
///
/// # Examples
///
/// ```
/// # use rust_logforge::Logger;
/// # let logger = Logger::builder().output(rust_logforge::outputs::StreamOutput::new(std::io::sink())).build();
/// use rust_logforge::warning;
/// warning!(logger, "Low disk space").unwrap();
/// warning!(logger, "Retry attempt {} of {}", 3, 5).unwrap();
/// ```
#[macro_export]
macro_rules! warning {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Severity::Warning, $($arg)+)
    };
}

/// Log an error-level message.
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Severity::Error, $($arg)+)
    };
}

/// Log a fatal-level message.
#[macro_export]
macro_rules! fatal {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Severity::Fatal, $($arg)+)
    };
}
