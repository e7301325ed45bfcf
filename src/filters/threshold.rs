//! Minimum-severity filter

use crate::core::{Filter, LogEvent, Severity};

/// Accepts events at or above a minimum severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ThresholdFilter {
    min_severity: Severity,
}

impl ThresholdFilter {
    pub const fn new(min_severity: Severity) -> Self {
        Self { min_severity }
    }

    pub fn min_severity(&self) -> Severity {
        self.min_severity
    }
}

impl Filter for ThresholdFilter {
    #[inline]
    fn should_log(&self, event: &LogEvent) -> bool {
        event.severity() >= self.min_severity
    }
}
