//! Closure-backed filter

use crate::core::{Filter, LogEvent};

/// Filter backed by an arbitrary predicate
///
/// # Example
///
/// ```
/// use rust_logforge::filters::CustomFilter;
/// use rust_logforge::{Filter, LogEvent, Severity};
///
/// let errors_only = CustomFilter::new(|event: &LogEvent| event.severity() == Severity::Error);
/// assert!(errors_only.should_log(&LogEvent::new(Severity::Error, "x")));
/// assert!(!errors_only.should_log(&LogEvent::new(Severity::Fatal, "x")));
/// ```
pub struct CustomFilter<F> {
    predicate: F,
}

impl<F> CustomFilter<F>
where
    F: Fn(&LogEvent) -> bool + Send + Sync,
{
    pub fn new(predicate: F) -> Self {
        Self { predicate }
    }
}

impl<F> Filter for CustomFilter<F>
where
    F: Fn(&LogEvent) -> bool + Send + Sync,
{
    fn should_log(&self, event: &LogEvent) -> bool {
        (self.predicate)(event)
    }
}
