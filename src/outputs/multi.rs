//! Fan-out output

use crate::core::{DynOutput, LoggerError, Output, OutputEvent, OutputFailure, Result};

/// Writes every event to each sub-output in order.
///
/// A failing sub-output does not stop the fan-out: the remaining outputs are
/// still written, and the failures are reported together afterwards as
/// [`LoggerError::FanOut`].
#[derive(Default)]
pub struct MultiOutput {
    outputs: Vec<DynOutput>,
}

impl MultiOutput {
    pub fn new(outputs: Vec<DynOutput>) -> Self {
        Self { outputs }
    }

    /// Build from a list that may contain absent entries; those are skipped
    pub fn from_optional<I>(outputs: I) -> Self
    where
        I: IntoIterator<Item = Option<DynOutput>>,
    {
        Self {
            outputs: outputs.into_iter().flatten().collect(),
        }
    }

    #[must_use]
    pub fn with<O: Output + 'static>(mut self, output: O) -> Self {
        self.push(Box::new(output));
        self
    }

    pub fn push(&mut self, output: DynOutput) {
        self.outputs.push(output);
    }

    pub fn len(&self) -> usize {
        self.outputs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.outputs.is_empty()
    }

    fn for_each_output<F>(&self, mut op: F) -> Result<()>
    where
        F: FnMut(&dyn Output) -> Result<()>,
    {
        let failures: Vec<OutputFailure> = self
            .outputs
            .iter()
            .enumerate()
            .filter_map(|(index, output)| {
                op(output.as_ref()).err().map(|error| OutputFailure {
                    index,
                    output: output.name().to_string(),
                    error,
                })
            })
            .collect();

        if failures.is_empty() {
            Ok(())
        } else {
            Err(LoggerError::FanOut {
                failures,
                attempted: self.outputs.len(),
            })
        }
    }
}

impl Output for MultiOutput {
    fn write(&self, event: &OutputEvent<'_>) -> Result<()> {
        self.for_each_output(|output| output.write(event))
    }

    fn flush(&self) -> Result<()> {
        self.for_each_output(|output| output.flush())
    }

    fn name(&self) -> &str {
        "multi"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{LogEvent, Severity};
    use parking_lot::Mutex;
    use std::sync::Arc;

    struct Recording {
        name: &'static str,
        seen: Arc<Mutex<Vec<String>>>,
        fail: bool,
    }

    impl Output for Recording {
        fn write(&self, event: &OutputEvent<'_>) -> Result<()> {
            self.seen.lock().push(format!("{}:{}", self.name, event.lines.join("|")));
            if self.fail {
                return Err(LoggerError::other("sink closed"));
            }
            Ok(())
        }

        fn name(&self) -> &str {
            self.name
        }
    }

    fn recording(name: &'static str, seen: &Arc<Mutex<Vec<String>>>, fail: bool) -> DynOutput {
        Box::new(Recording {
            name,
            seen: Arc::clone(seen),
            fail,
        })
    }

    #[test]
    fn test_writes_in_configured_order() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let multi = MultiOutput::new(vec![
            recording("a", &seen, false),
            recording("b", &seen, false),
        ]);
        let origin = LogEvent::new(Severity::Info, "x");

        multi
            .write(&OutputEvent::new(vec!["x".to_string()], &origin))
            .unwrap();

        assert_eq!(*seen.lock(), vec!["a:x", "b:x"]);
    }

    #[test]
    fn test_failure_does_not_stop_fan_out() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let multi = MultiOutput::new(vec![
            recording("a", &seen, true),
            recording("b", &seen, false),
        ]);
        let origin = LogEvent::new(Severity::Error, "x");

        let result = multi.write(&OutputEvent::new(vec!["x".to_string()], &origin));

        assert_eq!(*seen.lock(), vec!["a:x", "b:x"]);
        match result {
            Err(LoggerError::FanOut { failures, attempted }) => {
                assert_eq!(attempted, 2);
                assert_eq!(failures.len(), 1);
                assert_eq!(failures[0].index, 0);
                assert_eq!(failures[0].output, "a");
            }
            other => panic!("expected fan-out error, got {:?}", other),
        }
    }

    #[test]
    fn test_absent_entries_are_skipped() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let multi = MultiOutput::from_optional(vec![
            None,
            Some(recording("a", &seen, false)),
            None,
        ]);

        assert_eq!(multi.len(), 1);
    }

    #[test]
    fn test_empty_multi_output_is_a_no_op() {
        let multi = MultiOutput::default();
        let origin = LogEvent::new(Severity::Info, "x");

        assert!(multi.is_empty());
        assert!(multi
            .write(&OutputEvent::new(vec!["x".to_string()], &origin))
            .is_ok());
    }
}
