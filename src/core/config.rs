//! Declarative logger configuration
//!
//! A [`LoggerConfig`] describes a filter, a printer chain and a list of
//! outputs as plain data, usually loaded from JSON, and assembles them into a
//! [`DynLogger`] at runtime.
//!
//! ```
//! use rust_logforge::LoggerConfig;
//!
//! let config = LoggerConfig::from_json(r#"{
//!     "filter": { "kind": "threshold", "min_severity": "info" },
//!     "printer": {
//!         "base": { "kind": "message" },
//!         "stages": [ { "stage": "prefix" }, { "stage": "box" } ]
//!     },
//!     "outputs": [ { "type": "stderr" } ]
//! }"#).unwrap();
//!
//! let logger = config.build().unwrap();
//! assert_eq!(logger.output().name(), "stderr");
//! ```

use super::{
    error::{LoggerError, Result},
    filter::DynFilter,
    logger::{combine_outputs, DynLogger, Logger},
    output::DynOutput,
    printer::{DynPrinter, PrinterExt},
    severity::{Severity, SeverityMap},
    timestamp::TimestampFormat,
};
use crate::filters::{DebugOnlyFilter, ThresholdFilter};
use crate::outputs::{ConsoleOutput, StreamOutput};
use crate::printers::{
    Boxed, Colorized, LogFmtPrinter, Located, MessagePrinter, Prefixed, Timestamped,
};
use chrono::FixedOffset;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Complete logger description
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggerConfig {
    pub filter: FilterConfig,
    pub printer: PrinterConfig,
    pub outputs: Vec<OutputConfig>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FilterConfig {
    /// [`ThresholdFilter`]
    Threshold {
        #[serde(default)]
        min_severity: Severity,
    },
    /// [`DebugOnlyFilter`]
    DebugOnly {
        #[serde(default)]
        min_severity: Severity,
    },
}

impl Default for FilterConfig {
    fn default() -> Self {
        FilterConfig::Threshold {
            min_severity: Severity::Trace,
        }
    }
}

/// Base printer plus decorator stages, innermost first
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PrinterConfig {
    pub base: BasePrinterConfig,
    pub stages: Vec<StageConfig>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum BasePrinterConfig {
    /// [`MessagePrinter`]
    #[default]
    Message,
    /// [`LogFmtPrinter`]; unset fields keep the printer's defaults
    Logfmt {
        #[serde(default)]
        levels: Option<SeverityMap<String>>,
        #[serde(default)]
        time_format: Option<TimestampFormat>,
        #[serde(default)]
        utc_offset_seconds: Option<i32>,
    },
}

/// One decorator stage; unset fields keep the layer's defaults
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "stage", rename_all = "snake_case")]
pub enum StageConfig {
    Timestamp {
        #[serde(default)]
        format: Option<TimestampFormat>,
        #[serde(default)]
        prefix: Option<String>,
        #[serde(default)]
        utc_offset_seconds: Option<i32>,
    },
    Location {
        #[serde(default)]
        prefix: Option<String>,
    },
    Box,
    Prefix {
        #[serde(default)]
        prefixes: Option<SeverityMap<String>>,
    },
    Color {
        #[serde(default)]
        colors: Option<SeverityMap<String>>,
    },
}

#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum OutputConfig {
    Stdout,
    Stderr,
    /// [`ConsoleOutput`]; events at or above the threshold go to stderr
    Console {
        #[serde(default)]
        stderr_threshold: Option<Severity>,
    },
    /// Append to a file, created when missing
    File { path: PathBuf },
}

impl LoggerConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|e| {
            LoggerError::io_operation(
                format!("read config '{}'", path.display()),
                e.to_string(),
                e,
            )
        })?;
        Self::from_json(&json)
    }

    /// Check the configuration without opening any output
    pub fn validate(&self) -> Result<()> {
        if self.outputs.is_empty() {
            return Err(LoggerError::config(
                "outputs",
                "at least one output is required",
            ));
        }

        for output in &self.outputs {
            if let OutputConfig::File { path } = output {
                if path.as_os_str().is_empty() {
                    return Err(LoggerError::config("file output", "path must not be empty"));
                }
            }
        }

        if let BasePrinterConfig::Logfmt {
            utc_offset_seconds: Some(seconds),
            ..
        } = self.printer.base
        {
            utc_offset(seconds)?;
        }
        for stage in &self.printer.stages {
            if let StageConfig::Timestamp {
                utc_offset_seconds: Some(seconds),
                ..
            } = stage
            {
                utc_offset(*seconds)?;
            }
        }

        Ok(())
    }

    /// Assemble the described logger, opening its outputs
    pub fn build(&self) -> Result<DynLogger> {
        self.validate()?;

        let outputs = self
            .outputs
            .iter()
            .map(OutputConfig::build)
            .collect::<Result<Vec<_>>>()?;

        Ok(Logger::new(
            self.filter.build(),
            self.printer.build()?,
            combine_outputs(outputs),
        ))
    }
}

impl FilterConfig {
    pub fn build(&self) -> DynFilter {
        match *self {
            FilterConfig::Threshold { min_severity } => {
                Box::new(ThresholdFilter::new(min_severity))
            }
            FilterConfig::DebugOnly { min_severity } => {
                Box::new(DebugOnlyFilter::new(min_severity))
            }
        }
    }
}

impl PrinterConfig {
    pub fn build(&self) -> Result<DynPrinter> {
        let base = self.base.build()?;
        self.stages
            .iter()
            .try_fold(base, |printer, stage| stage.decorate(printer))
    }
}

impl BasePrinterConfig {
    pub fn build(&self) -> Result<DynPrinter> {
        match self {
            BasePrinterConfig::Message => Ok(MessagePrinter::new().into_dyn()),
            BasePrinterConfig::Logfmt {
                levels,
                time_format,
                utc_offset_seconds,
            } => {
                let mut printer = LogFmtPrinter::default();
                if let Some(levels) = levels {
                    printer = printer.with_levels(levels.clone());
                }
                if let Some(format) = time_format {
                    printer = printer.with_time_format(format.clone());
                }
                if let Some(seconds) = utc_offset_seconds {
                    printer = printer.with_offset(utc_offset(*seconds)?);
                }
                Ok(printer.into_dyn())
            }
        }
    }
}

impl StageConfig {
    /// Wrap `printer` with this stage
    pub fn decorate(&self, printer: DynPrinter) -> Result<DynPrinter> {
        let decorated = match self {
            StageConfig::Timestamp {
                format,
                prefix,
                utc_offset_seconds,
            } => {
                let mut layer = Timestamped::default();
                if let Some(format) = format {
                    layer = layer.with_format(format.clone());
                }
                if let Some(prefix) = prefix {
                    layer = layer.with_prefix(prefix.clone());
                }
                if let Some(seconds) = utc_offset_seconds {
                    layer = layer.with_offset(utc_offset(*seconds)?);
                }
                printer.with(layer).into_dyn()
            }
            StageConfig::Location { prefix } => {
                let layer = match prefix {
                    Some(prefix) => Located::default().with_prefix(prefix.clone()),
                    None => Located::default(),
                };
                printer.with(layer).into_dyn()
            }
            StageConfig::Box => printer.with(Boxed).into_dyn(),
            StageConfig::Prefix { prefixes } => {
                let layer = match prefixes {
                    Some(prefixes) => Prefixed::new(prefixes.clone()),
                    None => Prefixed::default(),
                };
                printer.with(layer).into_dyn()
            }
            StageConfig::Color { colors } => {
                let layer = match colors {
                    Some(colors) => Colorized::new(colors.clone()),
                    None => Colorized::default(),
                };
                printer.with(layer).into_dyn()
            }
        };
        Ok(decorated)
    }
}

impl OutputConfig {
    pub fn build(&self) -> Result<DynOutput> {
        let output: DynOutput = match self {
            OutputConfig::Stdout => Box::new(StreamOutput::stdout()),
            OutputConfig::Stderr => Box::new(StreamOutput::stderr()),
            OutputConfig::Console { stderr_threshold } => {
                let console = ConsoleOutput::new();
                match stderr_threshold {
                    Some(severity) => Box::new(console.with_stderr_threshold(*severity)),
                    None => Box::new(console),
                }
            }
            OutputConfig::File { path } => Box::new(StreamOutput::append_to_file(path)?),
        };
        Ok(output)
    }
}

fn utc_offset(seconds: i32) -> Result<FixedOffset> {
    FixedOffset::east_opt(seconds).ok_or_else(|| {
        LoggerError::config(
            "utc_offset_seconds",
            format!("{} is outside ±86399", seconds),
        )
    })
}
