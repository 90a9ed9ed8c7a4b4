//! Logger contract shared by the synchronous and asynchronous loggers

use super::{
    async_logger::AsyncLogger, log_event::LogEvent, log_level::LogLevel, metrics::LoggerMetrics,
    sink::Sink, sink::SinkSet, sync_logger::SyncLogger,
};
use std::sync::Arc;

/// Level below which events are dropped, unless configured otherwise.
pub const DEFAULT_LOG_LEVEL: LogLevel = LogLevel::Info;

/// Level at or above which a write also flushes every sink.
pub const DEFAULT_FLUSH_LEVEL: LogLevel = LogLevel::Error;

/// A named logger that filters by level and fans events out to its sinks.
///
/// Loggers are shared as `Arc<dyn Logger>`; every method takes `&self`.
pub trait Logger: Send + Sync {
    fn name(&self) -> &str;

    fn is_async(&self) -> bool;

    /// Append a sink; it receives events after every sink added before it.
    fn add_sink(&self, sink: Box<dyn Sink>);

    fn sinks(&self) -> &SinkSet;

    fn level(&self) -> LogLevel;

    fn set_level(&self, level: LogLevel);

    fn flush_level(&self) -> LogLevel;

    fn set_flush_level(&self, level: LogLevel);

    /// Deliver `event` to every sink unless it is below [`Logger::level`].
    ///
    /// Events at or above [`Logger::flush_level`] are flushed through every
    /// sink before this returns.
    fn log(&self, event: LogEvent);

    /// Flush every sink, after applying everything logged before the call.
    fn flush(&self);

    /// A new, unregistered logger named `name` with the same kind, levels
    /// and deep-copied sinks.
    fn clone_as(&self, name: &str) -> Arc<dyn Logger>;

    fn metrics(&self) -> &LoggerMetrics;

    fn enabled(&self, level: LogLevel) -> bool {
        level >= self.level()
    }
}

/// Message-only helpers for any [`Logger`]; the category is the logger name.
pub trait LoggerExt: Logger {
    fn log_message(&self, level: LogLevel, message: impl Into<String>) {
        if self.enabled(level) {
            self.log(LogEvent::new(self.name(), level, message));
        }
    }

    #[inline]
    fn trace(&self, message: impl Into<String>) {
        self.log_message(LogLevel::Trace, message);
    }

    #[inline]
    fn debug(&self, message: impl Into<String>) {
        self.log_message(LogLevel::Debug, message);
    }

    #[inline]
    fn info(&self, message: impl Into<String>) {
        self.log_message(LogLevel::Info, message);
    }

    #[inline]
    fn warn(&self, message: impl Into<String>) {
        self.log_message(LogLevel::Warn, message);
    }

    #[inline]
    fn error(&self, message: impl Into<String>) {
        self.log_message(LogLevel::Error, message);
    }

    #[inline]
    fn fatal(&self, message: impl Into<String>) {
        self.log_message(LogLevel::Fatal, message);
    }
}

impl<L: Logger + ?Sized> LoggerExt for L {}

/// Builder for constructing a logger with a fluent API
///
/// # Example
/// ```
/// use rust_sink_logger::prelude::*;
///
/// let logger = LoggerBuilder::new("app")
///     .level(LogLevel::Debug)
///     .flush_level(LogLevel::Warn)
///     .sink(ConsoleSink::new())
///     .async_mode(true)
///     .build();
///
/// assert!(logger.is_async());
/// assert_eq!(logger.sinks().len(), 1);
/// ```
pub struct LoggerBuilder {
    name: String,
    level: LogLevel,
    flush_level: LogLevel,
    sinks: Vec<Box<dyn Sink>>,
    async_mode: bool,
}

impl LoggerBuilder {
    /// Create a new builder with default values
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            level: DEFAULT_LOG_LEVEL,
            flush_level: DEFAULT_FLUSH_LEVEL,
            sinks: Vec::new(),
            async_mode: false,
        }
    }

    #[must_use = "builder methods return a new value"]
    pub fn level(mut self, level: LogLevel) -> Self {
        self.level = level;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn flush_level(mut self, level: LogLevel) -> Self {
        self.flush_level = level;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn sink<S: Sink + 'static>(mut self, sink: S) -> Self {
        self.sinks.push(Box::new(sink));
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn boxed_sink(mut self, sink: Box<dyn Sink>) -> Self {
        self.sinks.push(sink);
        self
    }

    /// Deliver through a background worker instead of on the calling thread.
    #[must_use = "builder methods return a new value"]
    pub fn async_mode(mut self, enabled: bool) -> Self {
        self.async_mode = enabled;
        self
    }

    pub fn build(self) -> Arc<dyn Logger> {
        let logger: Arc<dyn Logger> = if self.async_mode {
            Arc::new(AsyncLogger::new(self.name))
        } else {
            Arc::new(SyncLogger::new(self.name))
        };

        logger.set_level(self.level);
        logger.set_flush_level(self.flush_level);
        for sink in self.sinks {
            logger.add_sink(sink);
        }

        logger
    }
}
