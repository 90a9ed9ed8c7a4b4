//! Turns sink fan-out into deferred work on a background worker

use super::log_event::LogEvent;
use super::metrics::LoggerMetrics;
use super::sink::SinkSet;
use super::task_queue::TaskQueue;
use super::worker::{QueueWorker, WorkerState};
use std::sync::Arc;

/// Binds one [`TaskQueue`] to one [`QueueWorker`], started on construction.
///
/// Dropping the dispatcher stops and joins the worker; every task dispatched
/// before the drop has run by the time `drop` returns.
pub struct Dispatcher {
    queue: Arc<TaskQueue>,
    worker: QueueWorker,
}

impl Dispatcher {
    pub fn new(thread_name: impl Into<String>, metrics: Arc<LoggerMetrics>) -> Self {
        let queue = Arc::new(TaskQueue::new());
        let mut worker = QueueWorker::new(Arc::clone(&queue))
            .with_thread_name(thread_name)
            .with_metrics(metrics);

        // Without a thread, queued events still reach the sinks on flush or drop
        if let Err(e) = worker.start() {
            eprintln!(
                "[LOGGER ERROR] {}. Events will only be written on flush.",
                e
            );
        }

        Self { queue, worker }
    }

    /// Queue one task that writes `event` to every sink in `sinks`, in order.
    pub fn dispatch(&self, sinks: &SinkSet, event: LogEvent) {
        let sinks = sinks.clone();
        self.queue.push(Box::new(move || sinks.write_all(&event)));
    }

    /// Apply every previously dispatched event, then flush every sink.
    pub fn flush(&self, sinks: &SinkSet) {
        self.worker.flush();
        sinks.flush_all();
    }

    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    pub fn worker_state(&self) -> WorkerState {
        self.worker.state()
    }
}

impl Drop for Dispatcher {
    fn drop(&mut self) {
        self.worker.stop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::sink::testing::{Journal, RecordingSink};
    use crate::core::LogLevel;
    use parking_lot::Mutex;

    fn sink_set() -> (SinkSet, Arc<Mutex<Journal>>) {
        let set = SinkSet::new(Arc::new(LoggerMetrics::new()));
        let (sink, journal) = RecordingSink::new();
        set.push(Box::new(sink));
        (set, journal)
    }

    #[test]
    fn test_worker_started_on_construction() {
        let dispatcher = Dispatcher::new("dispatch-test", Arc::new(LoggerMetrics::new()));
        assert_eq!(dispatcher.worker_state(), WorkerState::Running);
    }

    #[test]
    fn test_flush_applies_everything_dispatched() {
        let dispatcher = Dispatcher::new("dispatch-test", Arc::new(LoggerMetrics::new()));
        let (sinks, journal) = sink_set();

        for i in 0..200 {
            dispatcher.dispatch(&sinks, LogEvent::new("cat", LogLevel::Info, format!("m{}", i)));
        }
        dispatcher.flush(&sinks);

        let journal = journal.lock();
        assert_eq!(journal.writes.len(), 200);
        assert_eq!(journal.flushes, 1);
        // A flush racing the worker may reorder across the two partitions
        let distinct: std::collections::HashSet<_> =
            journal.writes.iter().map(|e| e.message.as_str()).collect();
        assert_eq!(distinct.len(), 200);
    }

    #[test]
    fn test_drop_drains_pending_events() {
        let (sinks, journal) = sink_set();
        {
            let dispatcher = Dispatcher::new("dispatch-test", Arc::new(LoggerMetrics::new()));
            for i in 0..64 {
                dispatcher.dispatch(&sinks, LogEvent::new("cat", LogLevel::Debug, i.to_string()));
            }
        }
        assert_eq!(journal.lock().writes.len(), 64);
    }

    #[test]
    fn test_event_outlives_caller_frame() {
        let dispatcher = Dispatcher::new("dispatch-test", Arc::new(LoggerMetrics::new()));
        let (sinks, journal) = sink_set();
        {
            let transient = String::from("built on the stack");
            dispatcher.dispatch(&sinks, LogEvent::new("cat", LogLevel::Info, transient.as_str()));
        }
        dispatcher.flush(&sinks);
        assert_eq!(journal.lock().writes[0].message, "built on the stack");
    }
}
