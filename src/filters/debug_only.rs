//! Filter that only lets events through in debug builds

use crate::core::{Filter, LogEvent, Severity};

/// Threshold filter that is switched off entirely in release builds.
///
/// The build mode is resolved once, when the filter is constructed:
/// [`DebugOnlyFilter::new`] reads `cfg!(debug_assertions)` while
/// [`DebugOnlyFilter::with_build_mode`] takes it explicitly.
///
/// # Example
///
/// ```
/// use rust_logforge::filters::DebugOnlyFilter;
/// use rust_logforge::{Filter, LogEvent, Severity};
///
/// let release = DebugOnlyFilter::with_build_mode(Severity::Trace, false);
/// assert!(!release.should_log(&LogEvent::new(Severity::Fatal, "ignored")));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DebugOnlyFilter {
    min_severity: Severity,
    debug_build: bool,
}

impl DebugOnlyFilter {
    pub const fn new(min_severity: Severity) -> Self {
        Self::with_build_mode(min_severity, cfg!(debug_assertions))
    }

    pub const fn with_build_mode(min_severity: Severity, debug_build: bool) -> Self {
        Self {
            min_severity,
            debug_build,
        }
    }

    pub fn min_severity(&self) -> Severity {
        self.min_severity
    }

    pub fn is_debug_build(&self) -> bool {
        self.debug_build
    }
}

impl Default for DebugOnlyFilter {
    fn default() -> Self {
        Self::new(Severity::default())
    }
}

impl Filter for DebugOnlyFilter {
    #[inline]
    fn should_log(&self, event: &LogEvent) -> bool {
        self.debug_build && event.severity() >= self.min_severity
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filters::ThresholdFilter;

    #[test]
    fn test_debug_build_matches_threshold() {
        let debug = DebugOnlyFilter::with_build_mode(Severity::Info, true);
        let threshold = ThresholdFilter::new(Severity::Info);

        for severity in Severity::ALL {
            let event = LogEvent::new(severity, "msg");
            assert_eq!(debug.should_log(&event), threshold.should_log(&event));
        }
    }

    #[test]
    fn test_release_build_rejects_everything() {
        let release = DebugOnlyFilter::with_build_mode(Severity::Trace, false);

        for severity in Severity::ALL {
            assert!(!release.should_log(&LogEvent::new(severity, "msg")));
        }
    }

    #[test]
    fn test_new_follows_build_profile() {
        let filter = DebugOnlyFilter::new(Severity::Debug);
        assert_eq!(filter.is_debug_build(), cfg!(debug_assertions));
    }
}
