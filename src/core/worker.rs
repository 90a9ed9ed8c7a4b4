//! Background consumer for a [`TaskQueue`]

use super::error::{panic_message, LoggerError, Result};
use super::metrics::LoggerMetrics;
use super::task_queue::{Task, TaskQueue, DEFAULT_DRAIN_BATCH};
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

/// Longest the idle loop waits before rechecking the running flag.
const IDLE_RECHECK: Duration = Duration::from_millis(100);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkerState {
    Created,
    Running,
    /// Terminal; the worker cannot be restarted
    Stopped,
}

/// Owns the thread that drains a [`TaskQueue`] in batches.
///
/// Tasks run inside a panic boundary: a panicking task is reported to stderr
/// and counted in [`LoggerMetrics::task_panics`], and the loop keeps going.
pub struct QueueWorker {
    queue: Arc<TaskQueue>,
    running: Arc<AtomicBool>,
    handle: Option<JoinHandle<()>>,
    state: WorkerState,
    batch_size: usize,
    thread_name: String,
    metrics: Arc<LoggerMetrics>,
}

impl QueueWorker {
    pub fn new(queue: Arc<TaskQueue>) -> Self {
        Self {
            queue,
            running: Arc::new(AtomicBool::new(false)),
            handle: None,
            state: WorkerState::Created,
            batch_size: DEFAULT_DRAIN_BATCH,
            thread_name: "log-worker".to_string(),
            metrics: Arc::new(LoggerMetrics::new()),
        }
    }

    #[must_use]
    pub fn with_batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = batch_size.max(1);
        self
    }

    #[must_use]
    pub fn with_thread_name(mut self, name: impl Into<String>) -> Self {
        self.thread_name = name.into();
        self
    }

    #[must_use]
    pub fn with_metrics(mut self, metrics: Arc<LoggerMetrics>) -> Self {
        self.metrics = metrics;
        self
    }

    pub fn state(&self) -> WorkerState {
        self.state
    }

    pub fn queue(&self) -> &Arc<TaskQueue> {
        &self.queue
    }

    /// Spawn the consume loop.
    ///
    /// Calling this on a running worker is ignored; a stopped worker cannot
    /// be restarted.
    pub fn start(&mut self) -> Result<()> {
        match self.state {
            WorkerState::Running => {
                eprintln!("[LOGGER WARNING] Queue worker '{}' is already running", self.thread_name);
                return Ok(());
            }
            WorkerState::Stopped => {
                return Err(LoggerError::other(format!(
                    "queue worker '{}' has been stopped and cannot be restarted",
                    self.thread_name
                )));
            }
            WorkerState::Created => {}
        }

        let queue = Arc::clone(&self.queue);
        let running = Arc::clone(&self.running);
        let metrics = Arc::clone(&self.metrics);
        let batch_size = self.batch_size;

        self.running.store(true, Ordering::Release);
        let spawned = thread::Builder::new()
            .name(self.thread_name.clone())
            .spawn(move || {
                while running.load(Ordering::Acquire) {
                    if let Some(batch) = queue.drain_timeout(batch_size, IDLE_RECHECK) {
                        batch.execute(|task| run_task(task, &metrics));
                    }
                }
            });

        match spawned {
            Ok(handle) => {
                self.handle = Some(handle);
                self.state = WorkerState::Running;
                Ok(())
            }
            Err(e) => {
                self.running.store(false, Ordering::Release);
                Err(LoggerError::io_operation(
                    "spawning log worker thread",
                    self.thread_name.clone(),
                    e,
                ))
            }
        }
    }

    /// Stop the loop and join the thread, then run whatever is still queued.
    ///
    /// Queued tasks are never discarded. If another consumer of the queue
    /// takes the wake-up task, the loop still exits on its next idle recheck.
    pub fn stop(&mut self) {
        if self.state == WorkerState::Stopped {
            return;
        }

        self.running.store(false, Ordering::Release);
        if let Some(handle) = self.handle.take() {
            // Wake-up task so an idle drain returns promptly
            self.queue.push(Box::new(|| {}));
            if let Err(e) = handle.join() {
                eprintln!(
                    "[LOGGER ERROR] Queue worker '{}' panicked during shutdown: {}",
                    self.thread_name,
                    panic_message(e.as_ref())
                );
            }
        }
        self.state = WorkerState::Stopped;

        self.flush();
    }

    /// Run every currently queued task on the calling thread, then wait for
    /// batches the background thread took earlier to finish.
    ///
    /// Valid in any state. When racing the background thread, pending tasks
    /// are split between the two callers; each part runs in FIFO order.
    pub fn flush(&self) {
        while let Some(batch) = self.queue.try_drain(usize::MAX) {
            batch.execute(|task| run_task(task, &self.metrics));
        }

        // A task flushing from the worker thread would wait on its own batch
        if !self.is_worker_thread() {
            self.queue.settle();
        }
    }

    fn is_worker_thread(&self) -> bool {
        self.handle
            .as_ref()
            .is_some_and(|handle| handle.thread().id() == thread::current().id())
    }
}

impl Drop for QueueWorker {
    fn drop(&mut self) {
        self.stop();
    }
}

fn run_task(task: Task, metrics: &LoggerMetrics) {
    if let Err(payload) = catch_unwind(AssertUnwindSafe(task)) {
        metrics.record_task_panic();
        eprintln!(
            "[LOGGER CRITICAL] Log task panicked: {}. Worker continues.",
            panic_message(payload.as_ref())
        );
    }
}
