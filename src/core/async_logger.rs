//! Logger that hands sink fan-out to a background worker

use super::{
    dispatcher::Dispatcher,
    log_event::LogEvent,
    log_level::LogLevel,
    logger::{Logger, DEFAULT_FLUSH_LEVEL, DEFAULT_LOG_LEVEL},
    metrics::LoggerMetrics,
    sink::{Sink, SinkSet},
};
use parking_lot::RwLock;
use std::sync::Arc;

/// Enqueues accepted events and returns; a dedicated thread writes them.
///
/// Events from one producing thread reach every sink in the order they were
/// logged. Dropping the logger blocks until every queued event is written.
pub struct AsyncLogger {
    dispatcher: Dispatcher,
    name: String,
    level: RwLock<LogLevel>,
    flush_level: RwLock<LogLevel>,
    sinks: SinkSet,
    metrics: Arc<LoggerMetrics>,
}

impl AsyncLogger {
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        let metrics = Arc::new(LoggerMetrics::new());
        let sinks = SinkSet::new(Arc::clone(&metrics));
        Self::with_sinks(name, DEFAULT_LOG_LEVEL, DEFAULT_FLUSH_LEVEL, sinks, metrics)
    }

    fn with_sinks(
        name: String,
        level: LogLevel,
        flush_level: LogLevel,
        sinks: SinkSet,
        metrics: Arc<LoggerMetrics>,
    ) -> Self {
        let dispatcher = Dispatcher::new(format!("{}-log-worker", name), Arc::clone(&metrics));
        Self {
            dispatcher,
            name,
            level: RwLock::new(level),
            flush_level: RwLock::new(flush_level),
            sinks,
            metrics,
        }
    }

    /// Number of events queued but not yet taken by the worker.
    pub fn pending(&self) -> usize {
        self.dispatcher.pending()
    }
}

impl Logger for AsyncLogger {
    fn name(&self) -> &str {
        &self.name
    }

    fn is_async(&self) -> bool {
        true
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
        self.dispatcher.dispatch(&self.sinks, event);
        if flush {
            self.dispatcher.flush(&self.sinks);
        }
    }

    fn flush(&self) {
        self.dispatcher.flush(&self.sinks);
    }

    fn clone_as(&self, name: &str) -> Arc<dyn Logger> {
        let metrics = Arc::new(LoggerMetrics::new());
        Arc::new(AsyncLogger::with_sinks(
            name.to_string(),
            self.level(),
            self.flush_level(),
            self.sinks.duplicate(Arc::clone(&metrics)),
            metrics,
        ))
    }

    fn metrics(&self) -> &LoggerMetrics {
        &self.metrics
    }
}
