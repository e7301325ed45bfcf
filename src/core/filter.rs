//! Filter trait gating which events reach the printer

use super::log_event::LogEvent;

pub trait Filter: Send + Sync {
    /// Whether the event should be printed and written
    fn should_log(&self, event: &LogEvent) -> bool;
}

impl<F: Filter + ?Sized> Filter for Box<F> {
    #[inline]
    fn should_log(&self, event: &LogEvent) -> bool {
        (**self).should_log(event)
    }
}

/// A runtime-selected filter
pub type DynFilter = Box<dyn Filter>;
