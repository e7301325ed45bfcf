//! Basic logger usage example
//!
//! Demonstrates composing printer chains and logging at different severities.
//!
//! Run with: cargo run --example basic_usage

use rust_logforge::prelude::*;
use rust_logforge::printers::{boxed, colorized, located, logfmt, message, prefixed, timestamped};
use rust_logforge::{info, warning};

#[derive(Debug)]
struct ConnectionRefused {
    port: u16,
}

impl std::fmt::Display for ConnectionRefused {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "connection refused on port {}", self.port)
    }
}

impl std::error::Error for ConnectionRefused {}

fn main() -> Result<()> {
    println!("=== Rust LogForge - Basic Usage Example ===\n");

    // A statically composed chain: prefix every line, then colorize
    let logger = Logger::new(
        ThresholdFilter::new(Severity::Trace),
        message() >> prefixed() >> colorized(),
        ConsoleOutput::new(),
    );

    println!("1. Logging at different severities:");
    logger.trace("This is a trace message")?;
    logger.debug("This is a debug message")?;
    logger.info("This is an info message")?;
    logger.warning("This is a warning message")?;
    logger.error("This is an error message")?;
    logger.fatal("This is a fatal message")?;

    println!("\n2. Threshold filtering (INFO and above):");
    let logger = Logger::builder()
        .min_severity(Severity::Info)
        .printer(message() >> prefixed())
        .output(StreamOutput::stdout())
        .build();
    logger.debug("Debug message (hidden)")?;
    logger.info("Info message (visible)")?;

    println!("\n3. Decorated chain with header lines:");
    let logger = Logger::new(
        ThresholdFilter::default(),
        message() >> prefixed() >> boxed() >> timestamped() >> located(),
        StreamOutput::stdout(),
    );
    logger.warning("Disk usage at 91%\nCleanup scheduled")?;
    warning!(logger, "Retry attempt {} of {}", 3, 5)?;

    println!("\n4. Error values and logfmt:");
    let logger = Logger::new(ThresholdFilter::default(), logfmt(), StreamOutput::stdout());
    logger.log_error(Severity::Error, ConnectionRefused { port: 5432 })?;
    info!(logger, "Listening on port {}", 8080)?;

    println!(
        "\nMetrics: {} written, {} filtered",
        logger.metrics().total_logged(),
        logger.metrics().filtered_count()
    );
    println!("\n=== Example completed successfully! ===");

    Ok(())
}
