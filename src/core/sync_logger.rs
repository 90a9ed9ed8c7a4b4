//! Logger that writes on the calling thread

use super::{
    log_event::LogEvent,
    log_level::LogLevel,
    logger::{Logger, DEFAULT_FLUSH_LEVEL, DEFAULT_LOG_LEVEL},
    metrics::LoggerMetrics,
    sink::{Sink, SinkSet},
};
use parking_lot::RwLock;
use std::sync::Arc;

/// Writes every accepted event to its sinks before `log` returns.
///
/// The sink collection stays locked for the whole fan-out, so concurrent
/// callers interleave whole events, never partial lines.
pub struct SyncLogger {
    name: String,
    level: RwLock<LogLevel>,
    flush_level: RwLock<LogLevel>,
    sinks: SinkSet,
    metrics: Arc<LoggerMetrics>,
}

impl SyncLogger {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        let metrics = Arc::new(LoggerMetrics::new());
        Self {
            name: name.into(),
            level: RwLock::new(DEFAULT_LOG_LEVEL),
            flush_level: RwLock::new(DEFAULT_FLUSH_LEVEL),
            sinks: SinkSet::new(Arc::clone(&metrics)),
            metrics,
        }
    }
}

impl Logger for SyncLogger {
    fn name(&self) -> &str {
        &self.name
    }

    fn is_async(&self) -> bool {
        false
    }

    fn add_sink(&self, sink: Box<dyn Sink>) {
        self.sinks.push(sink);
    }

    fn sinks(&self) -> &SinkSet {
        &self.sinks
    }

    fn level(&self) -> LogLevel {
        *self.level.read()
    }

    fn set_level(&self, level: LogLevel) {
        *self.level.write() = level;
    }

    fn flush_level(&self) -> LogLevel {
        *self.flush_level.read()
    }

    fn set_flush_level(&self, level: LogLevel) {
        *self.flush_level.write() = level;
    }

    fn log(&self, event: LogEvent) {
        if !self.enabled(event.level) {
            return;
        }
        self.metrics.record_logged();

        let flush = event.level >= self.flush_level();
        let mut sinks = self.sinks.lock();
        sinks.write_all(&event);
        if flush {
            sinks.flush_all();
        }
    }

    fn flush(&self) {
        self.sinks.flush_all();
    }

    fn clone_as(&self, name: &str) -> Arc<dyn Logger> {
        let metrics = Arc::new(LoggerMetrics::new());
        Arc::new(SyncLogger {
            name: name.to_string(),
            level: RwLock::new(self.level()),
            flush_level: RwLock::new(self.flush_level()),
            sinks: self.sinks.duplicate(Arc::clone(&metrics)),
            metrics,
        })
    }

    fn metrics(&self) -> &LoggerMetrics {
        &self.metrics
    }
}
