//! Process-wide logging entry points
//!
//! A lazily created [`LogManager`] backs every function here. Loggers are
//! registered in [`LoggerRegistry::global`], which is what [`log_to`] and the
//! [`log_to!`](crate::log_to) macro look names up in.
//!
//! ```
//! use rust_sink_logger::config::{LogSinkType, LoggerConfig};
//! use rust_sink_logger::logging;
//! use rust_sink_logger::{LogLevel, Logger};
//!
//! let dir = tempfile::tempdir().unwrap();
//! let config = LoggerConfig::new("doc.facade")
//!     .with_sink(LogSinkType::File)
//!     .with_file_path(dir.path().join("facade.log"))
//!     .with_log_level(LogLevel::Debug);
//!
//! let logger = logging::configure_logger(&config);
//! rust_sink_logger::debug!(logger, "configured {}", "once");
//! logger.flush();
//!
//! let text = std::fs::read_to_string(dir.path().join("facade.log")).unwrap();
//! assert!(text.contains("configured once"));
//! ```

use crate::config::LoggerConfig;
use crate::core::{LogEvent, LogLevel, LogManager, Logger, LoggerRegistry, Result};
use crate::paths;
use parking_lot::{const_mutex, Mutex};
use std::path::Path;
use std::sync::Arc;

static MANAGER: Mutex<Option<LogManager>> = const_mutex(None);

fn with_manager<R>(f: impl FnOnce(&LogManager) -> R) -> R {
    let mut guard = MANAGER.lock();
    f(guard.get_or_insert_with(LogManager::new))
}

/// Create-or-fetch the logger `name`.
pub fn initialize(name: &str, async_mode: bool) -> Arc<dyn Logger> {
    with_manager(|manager| manager.create_logger(name, async_mode))
}

/// Flush and unregister every logger created through this module.
pub fn shutdown() {
    let manager = MANAGER.lock().take();
    if let Some(manager) = manager {
        manager.finalize();
    }
}

pub fn logger(name: &str) -> Option<Arc<dyn Logger>> {
    MANAGER.lock().as_ref().and_then(|manager| manager.logger(name))
}

pub fn is_logger_async(name: &str) -> bool {
    MANAGER
        .lock()
        .as_ref()
        .is_some_and(|manager| manager.is_logger_async(name))
}

pub fn add_console_sink(name: &str) -> Result<()> {
    with_manager(|manager| manager.add_console_sink(name))
}

pub fn add_file_sink(name: &str, path: impl AsRef<Path>) -> Result<()> {
    with_manager(|manager| manager.add_file_sink(name, path))
}

pub fn set_console_pattern(name: &str, pattern: &str) -> Result<usize> {
    with_manager(|manager| manager.set_console_pattern(name, pattern))
}

pub fn set_file_pattern(name: &str, pattern: &str) -> Result<usize> {
    with_manager(|manager| manager.set_file_pattern(name, pattern))
}

pub fn set_log_level(name: &str, level: LogLevel) -> Result<()> {
    with_manager(|manager| manager.set_log_level(name, level))
}

pub fn set_flush_level(name: &str, level: LogLevel) -> Result<()> {
    with_manager(|manager| manager.set_flush_level(name, level))
}

/// Defaults for a configured logger, with its log directory created.
pub fn default_logger_config() -> LoggerConfig {
    let config = LoggerConfig::default();
    if let Some(dir) = config.file_path.parent() {
        paths::ensure_log_directory(dir);
    }
    config
}

/// Create-or-fetch the logger described by `config` and apply it.
///
/// Sinks are added on every call. Nothing here fails: an unusable file path
/// leaves a disabled file sink and a report on stderr.
pub fn configure_logger(config: &LoggerConfig) -> Arc<dyn Logger> {
    if let Err(e) = config.validate() {
        eprintln!("[LOGGER WARNING] {}. Applying the rest of the configuration.", e);
    }

    with_manager(|manager| {
        let logger = manager.create_logger(&config.name, config.async_mode);

        if config.sink.includes_console() {
            logger.add_sink(Box::new(crate::sinks::ConsoleSink::new()));
            if !config.console_pattern.is_empty() {
                let _ = manager.set_console_pattern(&config.name, &config.console_pattern);
            }
        }

        if config.sink.includes_file() && !config.file_path.as_os_str().is_empty() {
            logger.add_sink(Box::new(crate::sinks::FileSink::new(&config.file_path, true)));
            if !config.file_pattern.is_empty() {
                let _ = manager.set_file_pattern(&config.name, &config.file_pattern);
            }
        }

        logger.set_level(config.log_level);
        logger.set_flush_level(config.flush_level);
        logger
    })
}

/// Log `event` through the registered logger `name`; unknown names are ignored.
pub fn log_to(name: &str, event: LogEvent) {
    if let Some(logger) = LoggerRegistry::global().get(name) {
        logger.log(event);
    }
}
