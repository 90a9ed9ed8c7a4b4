//! Unbounded FIFO of deferred log tasks
//!
//! Producers never block and never fail: the queue has no capacity limit.
//! Under a sustained producer/consumer imbalance memory grows without bound;
//! there is deliberately no back-pressure.

use parking_lot::{Condvar, Mutex};
use std::collections::VecDeque;
use std::time::Duration;

/// A deferred log action, executed at most once.
pub type Task = Box<dyn FnOnce() + Send + 'static>;

/// Default upper bound on the number of tasks returned by one drain.
pub const DEFAULT_DRAIN_BATCH: usize = 32;

struct QueueState {
    tasks: VecDeque<Task>,
    next_ticket: u64,
    /// Tickets of drained batches that have not finished executing
    in_flight: Vec<u64>,
}

/// Thread-safe task queue guarded by a mutex and condition variable.
///
/// # Example
///
/// ```
/// use rust_sink_logger::core::TaskQueue;
/// use std::sync::atomic::{AtomicUsize, Ordering};
/// use std::sync::Arc;
///
/// let queue = TaskQueue::new();
/// let hits = Arc::new(AtomicUsize::new(0));
/// for _ in 0..3 {
///     let hits = Arc::clone(&hits);
///     queue.push(Box::new(move || {
///         hits.fetch_add(1, Ordering::SeqCst);
///     }));
/// }
///
/// queue.drain(32).execute(|task| task());
/// assert_eq!(hits.load(Ordering::SeqCst), 3);
/// assert!(queue.is_empty());
/// ```
pub struct TaskQueue {
    state: Mutex<QueueState>,
    available: Condvar,
    settled: Condvar,
}

impl TaskQueue {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(QueueState {
                tasks: VecDeque::new(),
                next_ticket: 0,
                in_flight: Vec::new(),
            }),
            available: Condvar::new(),
            settled: Condvar::new(),
        }
    }

    /// Append a task and wake one waiting consumer.
    pub fn push(&self, task: Task) {
        let mut state = self.state.lock();
        state.tasks.push_back(task);
        self.available.notify_one();
    }

    /// Block until a task is available and remove it.
    ///
    /// Single-task consumers only; tasks taken this way are not tracked by
    /// [`TaskQueue::settle`].
    pub fn pop(&self) -> Task {
        let mut state = self.state.lock();
        loop {
            if let Some(task) = state.tasks.pop_front() {
                return task;
            }
            self.available.wait(&mut state);
        }
    }

    /// Block until at least one task is available, then take up to
    /// `max_items` of them in FIFO order under a single lock acquisition.
    pub fn drain(&self, max_items: usize) -> Batch<'_> {
        let mut state = self.state.lock();
        while state.tasks.is_empty() {
            self.available.wait(&mut state);
        }
        self.take_batch(&mut state, max_items)
    }

    /// [`TaskQueue::drain`] that gives up after `timeout`; `None` when nothing
    /// arrived in time.
    pub fn drain_timeout(&self, max_items: usize, timeout: Duration) -> Option<Batch<'_>> {
        let mut state = self.state.lock();
        if state.tasks.is_empty() {
            self.available.wait_for(&mut state, timeout);
            if state.tasks.is_empty() {
                return None;
            }
        }
        Some(self.take_batch(&mut state, max_items))
    }

    /// Non-blocking [`TaskQueue::drain`]; `None` when the queue is empty.
    pub fn try_drain(&self, max_items: usize) -> Option<Batch<'_>> {
        let mut state = self.state.lock();
        if state.tasks.is_empty() {
            return None;
        }
        Some(self.take_batch(&mut state, max_items))
    }

    fn take_batch(&self, state: &mut QueueState, max_items: usize) -> Batch<'_> {
        let count = max_items.max(1).min(state.tasks.len());
        let tasks: Vec<Task> = state.tasks.drain(..count).collect();
        let ticket = state.next_ticket;
        state.next_ticket += 1;
        state.in_flight.push(ticket);
        Batch {
            tasks,
            ticket,
            queue: self,
        }
    }

    /// Block until every batch drained before this call has been dropped.
    ///
    /// Batches drained after the call starts are not waited for. Calling this
    /// while holding an undropped batch from the same queue deadlocks.
    pub fn settle(&self) {
        let mut state = self.state.lock();
        let horizon = state.next_ticket;
        while state.in_flight.iter().any(|&ticket| ticket < horizon) {
            self.settled.wait(&mut state);
        }
    }

    /// Point-in-time snapshot; not a synchronization primitive.
    pub fn is_empty(&self) -> bool {
        self.state.lock().tasks.is_empty()
    }

    /// Point-in-time snapshot of the number of queued tasks.
    pub fn len(&self) -> usize {
        self.state.lock().tasks.len()
    }

    fn complete(&self, ticket: u64) {
        let mut state = self.state.lock();
        state.in_flight.retain(|&t| t != ticket);
        self.settled.notify_all();
    }
}

impl Default for TaskQueue {
    fn default() -> Self {
        Self::new()
    }
}

/// Tasks taken from the queue by one drain.
///
/// The batch counts as in flight until it is dropped, which lets
/// [`TaskQueue::settle`] wait for work another thread is still executing.
pub struct Batch<'a> {
    tasks: Vec<Task>,
    ticket: u64,
    queue: &'a TaskQueue,
}

impl Batch<'_> {
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Hand every task to `run` in FIFO order, then release the batch.
    pub fn execute(mut self, mut run: impl FnMut(Task)) {
        for task in self.tasks.drain(..) {
            run(task);
        }
    }
}

impl Drop for Batch<'_> {
    fn drop(&mut self) {
        self.queue.complete(self.ticket);
    }
}
