//! Sink trait for log output destinations, and the shared sink collection

use super::error::{panic_message, Result};
use super::log_event::LogEvent;
use super::metrics::LoggerMetrics;
use parking_lot::{Mutex, MutexGuard};
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::Arc;

/// Broad class of a sink, used to target pattern changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SinkKind {
    Console,
    File,
    Custom,
}

/// A destination that renders and stores log events.
///
/// # Example
///
/// ```
/// use rust_sink_logger::core::{LogEvent, Result, Sink, SinkKind};
///
/// #[derive(Clone, Default)]
/// struct CountingSink {
///     pattern: String,
///     seen: usize,
/// }
///
/// impl Sink for CountingSink {
///     fn write(&mut self, _event: &LogEvent) -> Result<()> {
///         self.seen += 1;
///         Ok(())
///     }
///
///     fn flush(&mut self) -> Result<()> {
///         Ok(())
///     }
///
///     fn pattern(&self) -> &str {
///         &self.pattern
///     }
///
///     fn set_pattern(&mut self, pattern: String) {
///         self.pattern = pattern;
///     }
///
///     fn clone_box(&self) -> Box<dyn Sink> {
///         Box::new(self.clone())
///     }
///
///     fn name(&self) -> &str {
///         "counting"
///     }
/// }
/// ```
pub trait Sink: Send {
    fn write(&mut self, event: &LogEvent) -> Result<()>;

    fn flush(&mut self) -> Result<()>;

    fn pattern(&self) -> &str;

    fn set_pattern(&mut self, pattern: String);

    /// Build an independent sink with the same configuration.
    ///
    /// Resources such as file handles are reopened, never shared.
    fn clone_box(&self) -> Box<dyn Sink>;

    fn kind(&self) -> SinkKind {
        SinkKind::Custom
    }

    fn name(&self) -> &str;
}

/// Shared, append-only collection of sinks owned by one logger.
///
/// Cloning a `SinkSet` clones the handle, not the sinks; queued tasks hold a
/// handle so the sinks stay alive for as long as any task can reach them.
/// Use [`SinkSet::duplicate`] for a deep copy.
#[derive(Clone)]
pub struct SinkSet {
    sinks: Arc<Mutex<Vec<Box<dyn Sink>>>>,
    metrics: Arc<LoggerMetrics>,
}

impl SinkSet {
    pub fn new(metrics: Arc<LoggerMetrics>) -> Self {
        Self {
            sinks: Arc::new(Mutex::new(Vec::new())),
            metrics,
        }
    }

    pub fn push(&self, sink: Box<dyn Sink>) {
        self.sinks.lock().push(sink);
    }

    pub fn len(&self) -> usize {
        self.sinks.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.sinks.lock().is_empty()
    }

    pub fn metrics(&self) -> &Arc<LoggerMetrics> {
        &self.metrics
    }

    /// Lock the collection for a multi-step operation.
    pub fn lock(&self) -> SinkGuard<'_> {
        SinkGuard {
            sinks: self.sinks.lock(),
            metrics: &self.metrics,
        }
    }

    pub fn write_all(&self, event: &LogEvent) {
        self.lock().write_all(event);
    }

    pub fn flush_all(&self) {
        self.lock().flush_all();
    }

    /// Deep-copy every sink into a new collection reporting to `metrics`.
    pub fn duplicate(&self, metrics: Arc<LoggerMetrics>) -> SinkSet {
        let copies = self.sinks.lock().iter().map(|s| s.clone_box()).collect();
        SinkSet {
            sinks: Arc::new(Mutex::new(copies)),
            metrics,
        }
    }

    /// Set the pattern on every sink of `kind`, returning how many changed.
    pub fn set_pattern_for(&self, kind: SinkKind, pattern: &str) -> usize {
        let mut sinks = self.sinks.lock();
        let mut changed = 0;
        for sink in sinks.iter_mut().filter(|s| s.kind() == kind) {
            sink.set_pattern(pattern.to_string());
            changed += 1;
        }
        changed
    }

    /// Current `(kind, pattern)` of every sink in fan-out order.
    pub fn patterns(&self) -> Vec<(SinkKind, String)> {
        self.sinks
            .lock()
            .iter()
            .map(|s| (s.kind(), s.pattern().to_string()))
            .collect()
    }
}

/// Exclusive access to a [`SinkSet`].
///
/// Every sink call is isolated: an error or panic in one sink is reported to
/// stderr and counted, and the remaining sinks still run.
pub struct SinkGuard<'a> {
    sinks: MutexGuard<'a, Vec<Box<dyn Sink>>>,
    metrics: &'a LoggerMetrics,
}

impl SinkGuard<'_> {
    pub fn write_all(&mut self, event: &LogEvent) {
        for (idx, sink) in self.sinks.iter_mut().enumerate() {
            let result = catch_unwind(AssertUnwindSafe(|| sink.write(event)));
            report(self.metrics, idx, sink.name(), "write", result);
        }
    }

    pub fn flush_all(&mut self) {
        for (idx, sink) in self.sinks.iter_mut().enumerate() {
            let result = catch_unwind(AssertUnwindSafe(|| sink.flush()));
            report(self.metrics, idx, sink.name(), "flush", result);
        }
        self.metrics.record_flush();
    }

    pub fn len(&self) -> usize {
        self.sinks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sinks.is_empty()
    }
}

fn report(
    metrics: &LoggerMetrics,
    idx: usize,
    name: &str,
    operation: &str,
    result: std::thread::Result<Result<()>>,
) {
    match result {
        Ok(Ok(())) => {}
        Ok(Err(e)) => {
            eprintln!("[LOGGER ERROR] Sink #{} ({}) {} failed: {}", idx, name, operation, e);
            metrics.record_write_failure();
        }
        Err(payload) => {
            eprintln!(
                "[LOGGER CRITICAL] Sink #{} ({}) panicked during {}: {}. \
                 Other sinks continue to function.",
                idx,
                name,
                operation,
                panic_message(payload.as_ref())
            );
            metrics.record_write_failure();
        }
    }
}

#[cfg(test)]
pub(crate) mod testing {
    //! Recording sink shared by the unit tests of the logger types.

    use super::*;
    use crate::core::LoggerError;

    #[derive(Debug, Default)]
    pub struct Journal {
        pub writes: Vec<LogEvent>,
        pub flushes: usize,
        /// Per-write snapshot of `flushes`, to check write/flush ordering
        pub flushes_before_write: Vec<usize>,
    }

    #[derive(Clone)]
    pub struct RecordingSink {
        pub journal: Arc<Mutex<Journal>>,
        pub pattern: String,
        pub fail_writes: bool,
        pub panic_on_write: bool,
    }

    impl RecordingSink {
        pub fn new() -> (Self, Arc<Mutex<Journal>>) {
            let journal = Arc::new(Mutex::new(Journal::default()));
            let sink = Self {
                journal: Arc::clone(&journal),
                pattern: "%v".to_string(),
                fail_writes: false,
                panic_on_write: false,
            };
            (sink, journal)
        }
    }

    impl Sink for RecordingSink {
        fn write(&mut self, event: &LogEvent) -> Result<()> {
            if self.panic_on_write {
                panic!("recording sink told to panic");
            }
            if self.fail_writes {
                return Err(LoggerError::other("simulated failure"));
            }
            let mut journal = self.journal.lock();
            let flushes = journal.flushes;
            journal.flushes_before_write.push(flushes);
            journal.writes.push(event.clone());
            Ok(())
        }

        fn flush(&mut self) -> Result<()> {
            self.journal.lock().flushes += 1;
            Ok(())
        }

        fn pattern(&self) -> &str {
            &self.pattern
        }

        fn set_pattern(&mut self, pattern: String) {
            self.pattern = pattern;
        }

        fn clone_box(&self) -> Box<dyn Sink> {
            // Fresh journal so copies are observable independently
            let (mut copy, _) = RecordingSink::new();
            copy.pattern = self.pattern.clone();
            Box::new(copy)
        }

        fn name(&self) -> &str {
            "recording"
        }
    }
}
