//! Configuration-driven logger example
//!
//! Builds a logger from a JSON description and writes to the console and a
//! log file at the same time.
//!
//! Run with: cargo run --example config_logging

use rust_logforge::prelude::*;
use std::fs;

fn main() -> Result<()> {
    println!("=== Rust LogForge - Configuration Example ===\n");

    let log_path = std::env::temp_dir().join("rust_logforge_demo.log");
    let config = format!(
        r#"{{
            "filter": {{ "kind": "threshold", "min_severity": "debug" }},
            "printer": {{
                "base": {{ "kind": "message" }},
                "stages": [
                    {{ "stage": "prefix" }},
                    {{ "stage": "box" }},
                    {{ "stage": "timestamp", "format": "Rfc3339" }}
                ]
            }},
            "outputs": [
                {{ "type": "console" }},
                {{ "type": "file", "path": {} }}
            ]
        }}"#,
        serde_json::to_string(&log_path)?
    );

    let logger = LoggerConfig::from_json(&config)?.build()?;

    logger.trace("Trace message (filtered out)")?;
    logger.debug("Configuration loaded")?;
    logger.info("Service started\nlistening on 0.0.0.0:8080")?;
    logger.error("Upstream timed out")?;
    logger.flush()?;

    println!("\nLog file: {}", log_path.display());
    let content = fs::read_to_string(&log_path)?;
    println!("{} lines written to file", content.lines().count());

    if let Err(e) = fs::remove_file(&log_path) {
        eprintln!("Failed to remove demo log file: {}", e);
    }

    println!("\n=== Example completed successfully! ===");
    Ok(())
}
