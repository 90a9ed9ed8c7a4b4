//! Logger metrics for observability
//!
//! Counters for accepted events, sink failures, flushes and worker task
//! panics. Events rejected by the level check are never counted.

use std::sync::atomic::{AtomicU64, Ordering};

/// Metrics for logger observability
///
/// # Example
///
/// ```
/// use rust_sink_logger::LoggerMetrics;
///
/// let metrics = LoggerMetrics::new();
///
/// metrics.record_logged();
/// metrics.record_write_failure();
///
/// assert_eq!(metrics.total_logged(), 1);
/// assert_eq!(metrics.write_failures(), 1);
/// ```
#[derive(Debug)]
pub struct LoggerMetrics {
    /// Events that passed the level check
    total_logged: AtomicU64,

    /// Sink write or flush calls that returned an error or panicked
    write_failures: AtomicU64,

    /// Sink-set flushes (explicit or triggered by the flush level)
    flush_count: AtomicU64,

    /// Worker tasks that panicked
    task_panics: AtomicU64,
}

impl LoggerMetrics {
    /// Create a new metrics instance with all counters at zero
    pub const fn new() -> Self {
        Self {
            total_logged: AtomicU64::new(0),
            write_failures: AtomicU64::new(0),
            flush_count: AtomicU64::new(0),
            task_panics: AtomicU64::new(0),
        }
    }

    #[inline]
    pub fn total_logged(&self) -> u64 {
        self.total_logged.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn write_failures(&self) -> u64 {
        self.write_failures.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn flush_count(&self) -> u64 {
        self.flush_count.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn task_panics(&self) -> u64 {
        self.task_panics.load(Ordering::Relaxed)
    }

    /// Record an accepted event, returning the previous count
    #[inline]
    pub fn record_logged(&self) -> u64 {
        self.total_logged.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_write_failure(&self) -> u64 {
        self.write_failures.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_flush(&self) -> u64 {
        self.flush_count.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_task_panic(&self) -> u64 {
        self.task_panics.fetch_add(1, Ordering::Relaxed)
    }

    /// Reset all metrics to zero
    pub fn reset(&self) {
        self.total_logged.store(0, Ordering::Relaxed);
        self.write_failures.store(0, Ordering::Relaxed);
        self.flush_count.store(0, Ordering::Relaxed);
        self.task_panics.store(0, Ordering::Relaxed);
    }
}

impl Default for LoggerMetrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for LoggerMetrics {
    /// Create a snapshot of the current metrics values
    fn clone(&self) -> Self {
        Self {
            total_logged: AtomicU64::new(self.total_logged()),
            write_failures: AtomicU64::new(self.write_failures()),
            flush_count: AtomicU64::new(self.flush_count()),
            task_panics: AtomicU64::new(self.task_panics()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metrics_new() {
        let metrics = LoggerMetrics::new();
        assert_eq!(metrics.total_logged(), 0);
        assert_eq!(metrics.write_failures(), 0);
        assert_eq!(metrics.flush_count(), 0);
        assert_eq!(metrics.task_panics(), 0);
    }

    #[test]
    fn test_metrics_record_returns_previous() {
        let metrics = LoggerMetrics::new();
        assert_eq!(metrics.record_logged(), 0);
        assert_eq!(metrics.record_logged(), 1);
        assert_eq!(metrics.total_logged(), 2);
    }

    #[test]
    fn test_metrics_reset() {
        let metrics = LoggerMetrics::new();
        metrics.record_logged();
        metrics.record_write_failure();
        metrics.record_flush();
        metrics.record_task_panic();

        metrics.reset();

        assert_eq!(metrics.total_logged(), 0);
        assert_eq!(metrics.write_failures(), 0);
        assert_eq!(metrics.flush_count(), 0);
        assert_eq!(metrics.task_panics(), 0);
    }

    #[test]
    fn test_metrics_clone_is_snapshot() {
        let metrics = LoggerMetrics::new();
        metrics.record_flush();

        let snapshot = metrics.clone();
        metrics.record_flush();

        assert_eq!(metrics.flush_count(), 2);
        assert_eq!(snapshot.flush_count(), 1);
    }
}
