//! Output writing lines to a single `io::Write` sink

use crate::core::{LoggerError, Output, OutputEvent, Result};
use parking_lot::Mutex;
use std::fs::{File, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Platform line terminator appended after every line
#[cfg(windows)]
pub const LINE_ENDING: &str = "\r\n";
/// Platform line terminator appended after every line
#[cfg(not(windows))]
pub const LINE_ENDING: &str = "\n";

/// Writes every line followed by [`LINE_ENDING`], in order.
///
/// The writer sits behind a mutex, so one event's lines are never
/// interleaved with another's when the output is shared between threads.
pub struct StreamOutput<W: Write + Send> {
    writer: Mutex<W>,
    name: String,
}

impl<W: Write + Send> StreamOutput<W> {
    pub fn new(writer: W) -> Self {
        Self::with_name(writer, "stream")
    }

    pub fn with_name(writer: W, name: impl Into<String>) -> Self {
        Self {
            writer: Mutex::new(writer),
            name: name.into(),
        }
    }

    /// Run a closure against the underlying writer
    pub fn with_writer<R>(&self, f: impl FnOnce(&mut W) -> R) -> R {
        f(&mut self.writer.lock())
    }

    pub fn into_inner(self) -> W {
        self.writer.into_inner()
    }
}

impl StreamOutput<io::Stdout> {
    pub fn stdout() -> Self {
        Self::with_name(io::stdout(), "stdout")
    }
}

impl StreamOutput<io::Stderr> {
    pub fn stderr() -> Self {
        Self::with_name(io::stderr(), "stderr")
    }
}

impl StreamOutput<BufWriter<File>> {
    /// Append to a file, creating it when missing
    pub fn append_to_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|e| {
                LoggerError::io_operation(
                    "opening log file",
                    format!("cannot open '{}' for append", path.display()),
                    e,
                )
            })?;

        Ok(Self::with_name(BufWriter::new(file), path.display().to_string()))
    }
}

impl<W: Write + Send> Output for StreamOutput<W> {
    fn write(&self, event: &OutputEvent<'_>) -> Result<()> {
        let mut writer = self.writer.lock();
        for line in &event.lines {
            writer.write_all(line.as_bytes())?;
            writer.write_all(LINE_ENDING.as_bytes())?;
        }
        Ok(())
    }

    fn flush(&self) -> Result<()> {
        self.writer.lock().flush()?;
        Ok(())
    }

    fn name(&self) -> &str {
        &self.name
    }
}
