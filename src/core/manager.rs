//! Creates, configures and tears down named loggers

use super::{
    async_logger::AsyncLogger,
    error::{LoggerError, Result},
    log_level::LogLevel,
    logger::Logger,
    registry::LoggerRegistry,
    sink::SinkKind,
    sync_logger::SyncLogger,
};
use crate::sinks::{ConsoleSink, FileSink};
use parking_lot::RwLock;
use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

/// Owns the loggers it creates and mirrors them into a [`LoggerRegistry`].
///
/// Configuration calls on unknown names return
/// [`LoggerError::LoggerNotFound`] and change nothing.
pub struct LogManager {
    loggers: RwLock<HashMap<String, Arc<dyn Logger>>>,
    registry: Arc<LoggerRegistry>,
}

impl LogManager {
    /// A manager that registers into [`LoggerRegistry::global`].
    pub fn new() -> Self {
        Self::with_registry(LoggerRegistry::global())
    }

    pub fn with_registry(registry: Arc<LoggerRegistry>) -> Self {
        Self {
            loggers: RwLock::new(HashMap::new()),
            registry,
        }
    }

    pub fn registry(&self) -> &Arc<LoggerRegistry> {
        &self.registry
    }

    /// Return the logger named `name`, creating and registering it first if
    /// needed. An existing logger keeps its original mode.
    pub fn create_logger(&self, name: &str, async_mode: bool) -> Arc<dyn Logger> {
        let mut loggers = self.loggers.write();
        if let Some(existing) = loggers.get(name) {
            return Arc::clone(existing);
        }

        let logger: Arc<dyn Logger> = if async_mode {
            Arc::new(AsyncLogger::new(name))
        } else {
            Arc::new(SyncLogger::new(name))
        };
        loggers.insert(name.to_string(), Arc::clone(&logger));
        self.registry.register(Arc::clone(&logger));
        logger
    }

    pub fn logger(&self, name: &str) -> Option<Arc<dyn Logger>> {
        self.loggers.read().get(name).cloned()
    }

    /// `false` for synchronous and for unknown loggers.
    pub fn is_logger_async(&self, name: &str) -> bool {
        self.logger(name).is_some_and(|logger| logger.is_async())
    }

    pub fn add_console_sink(&self, name: &str) -> Result<()> {
        self.require(name)?.add_sink(Box::new(ConsoleSink::new()));
        Ok(())
    }

    /// Attach an appending [`FileSink`]; an unusable path leaves a disabled
    /// sink behind, reported on stderr.
    pub fn add_file_sink(&self, name: &str, path: impl AsRef<Path>) -> Result<()> {
        let logger = self.require(name)?;
        logger.add_sink(Box::new(FileSink::new(path.as_ref(), true)));
        Ok(())
    }

    /// Set the pattern of every console sink, returning how many changed.
    pub fn set_console_pattern(&self, name: &str, pattern: &str) -> Result<usize> {
        Ok(self
            .require(name)?
            .sinks()
            .set_pattern_for(SinkKind::Console, pattern))
    }

    /// Set the pattern of every file sink, returning how many changed.
    pub fn set_file_pattern(&self, name: &str, pattern: &str) -> Result<usize> {
        Ok(self
            .require(name)?
            .sinks()
            .set_pattern_for(SinkKind::File, pattern))
    }

    pub fn set_log_level(&self, name: &str, level: LogLevel) -> Result<()> {
        self.require(name)?.set_level(level);
        Ok(())
    }

    pub fn set_flush_level(&self, name: &str, level: LogLevel) -> Result<()> {
        self.require(name)?.set_flush_level(level);
        Ok(())
    }

    /// Managed logger names, sorted.
    pub fn logger_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.loggers.read().keys().cloned().collect();
        names.sort();
        names
    }

    /// Flush and unregister every managed logger.
    ///
    /// Loggers still referenced elsewhere stay usable; an async logger stops
    /// its worker once the last reference is gone.
    pub fn finalize(&self) {
        let drained: Vec<(String, Arc<dyn Logger>)> = self.loggers.write().drain().collect();
        for (name, logger) in drained {
            logger.flush();
            // Leave a same-named logger registered by someone else in place
            if self
                .registry
                .get(&name)
                .is_some_and(|registered| Arc::ptr_eq(&registered, &logger))
            {
                self.registry.unregister(&name);
            }
        }
    }

    fn require(&self, name: &str) -> Result<Arc<dyn Logger>> {
        self.logger(name)
            .ok_or_else(|| LoggerError::not_found(name))
    }
}

impl Default for LogManager {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for LogManager {
    fn drop(&mut self) {
        self.finalize();
    }
}
