//! Declarative logger configuration
//!
//! A [`LoggerConfig`] describes one logger; [`crate::logging::configure_logger`]
//! applies it. Every field has a default, so a JSON document only needs the
//! keys it changes.

use crate::core::{LogLevel, LoggerError, Result, DEFAULT_FLUSH_LEVEL, DEFAULT_LOG_LEVEL};
use crate::paths;
use crate::sinks::DEFAULT_CONSOLE_PATTERN;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Name of the logger used when none is given.
pub const DEFAULT_LOGGER_NAME: &str = "vne.default";

/// File pattern used by configured loggers; adds the category to the line.
pub const CONFIGURED_FILE_PATTERN: &str = "%x [%n] [%l] [%!] %v";

pub const DEFAULT_LOG_FILE_NAME: &str = "app.log";

/// Which sinks a configured logger receives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogSinkType {
    None,
    #[default]
    Console,
    File,
    Both,
}

impl LogSinkType {
    pub fn includes_console(&self) -> bool {
        matches!(self, LogSinkType::Console | LogSinkType::Both)
    }

    pub fn includes_file(&self) -> bool {
        matches!(self, LogSinkType::File | LogSinkType::Both)
    }
}

/// Configuration for one named logger.
///
/// # Example
///
/// ```
/// use rust_sink_logger::config::{LogSinkType, LoggerConfig};
/// use rust_sink_logger::LogLevel;
///
/// let config = LoggerConfig::from_json(
///     r#"{ "name": "physics", "sink": "both", "log_level": "debug", "async_mode": true }"#,
/// )
/// .unwrap();
///
/// assert_eq!(config.name, "physics");
/// assert_eq!(config.sink, LogSinkType::Both);
/// assert_eq!(config.log_level, LogLevel::Debug);
/// assert_eq!(config.flush_level, LogLevel::Error);
/// assert!(config.async_mode);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggerConfig {
    pub name: String,
    pub sink: LogSinkType,
    pub console_pattern: String,
    pub file_pattern: String,
    /// Empty disables the file sink even when `sink` asks for one
    pub file_path: PathBuf,
    pub log_level: LogLevel,
    pub flush_level: LogLevel,
    pub async_mode: bool,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            name: DEFAULT_LOGGER_NAME.to_string(),
            sink: LogSinkType::default(),
            console_pattern: DEFAULT_CONSOLE_PATTERN.to_string(),
            file_pattern: CONFIGURED_FILE_PATTERN.to_string(),
            file_path: paths::platform_log_directory().join(DEFAULT_LOG_FILE_NAME),
            log_level: DEFAULT_LOG_LEVEL,
            flush_level: DEFAULT_FLUSH_LEVEL,
            async_mode: false,
        }
    }
}

impl LoggerConfig {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reject configurations that cannot produce the requested sinks.
    pub fn validate(&self) -> Result<()> {
        if self.name.is_empty() {
            return Err(LoggerError::config("logger", "name must not be empty"));
        }
        if self.sink.includes_file() && self.file_path.as_os_str().is_empty() {
            return Err(LoggerError::config(
                self.name.clone(),
                "a file sink was requested without a file path",
            ));
        }
        Ok(())
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    #[must_use]
    pub fn with_sink(mut self, sink: LogSinkType) -> Self {
        self.sink = sink;
        self
    }

    #[must_use]
    pub fn with_file_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.file_path = path.into();
        self
    }

    #[must_use]
    pub fn with_log_level(mut self, level: LogLevel) -> Self {
        self.log_level = level;
        self
    }

    #[must_use]
    pub fn with_flush_level(mut self, level: LogLevel) -> Self {
        self.flush_level = level;
        self
    }

    #[must_use]
    pub fn with_async(mut self, async_mode: bool) -> Self {
        self.async_mode = async_mode;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = LoggerConfig::default();
        assert_eq!(config.name, DEFAULT_LOGGER_NAME);
        assert_eq!(config.sink, LogSinkType::Console);
        assert_eq!(config.console_pattern, "%x [%l] %v");
        assert_eq!(config.file_pattern, "%x [%n] [%l] [%!] %v");
        assert_eq!(config.log_level, LogLevel::Info);
        assert_eq!(config.flush_level, LogLevel::Error);
        assert!(!config.async_mode);
        assert!(config.file_path.ends_with(DEFAULT_LOG_FILE_NAME));
    }

    #[test]
    fn test_sink_type_membership() {
        assert!(!LogSinkType::None.includes_console());
        assert!(!LogSinkType::None.includes_file());
        assert!(LogSinkType::Console.includes_console());
        assert!(LogSinkType::File.includes_file());
        assert!(LogSinkType::Both.includes_console() && LogSinkType::Both.includes_file());
    }

    #[test]
    fn test_json_roundtrip() {
        let config = LoggerConfig::new("render")
            .with_sink(LogSinkType::File)
            .with_file_path("/tmp/render.log")
            .with_log_level(LogLevel::Trace)
            .with_async(true);

        let json = config.to_json().unwrap();
        assert!(json.contains("\"sink\": \"file\""));
        assert_eq!(LoggerConfig::from_json(&json).unwrap(), config);
    }

    #[test]
    fn test_validate() {
        assert!(LoggerConfig::new("ok").validate().is_ok());
        assert!(LoggerConfig::new("").validate().is_err());

        let missing_path = LoggerConfig::new("file")
            .with_sink(LogSinkType::File)
            .with_file_path("");
        assert!(matches!(
            missing_path.validate(),
            Err(LoggerError::InvalidConfiguration { component, .. }) if component == "file"
        ));
        assert!(missing_path.with_sink(LogSinkType::Console).validate().is_ok());
    }

    #[test]
    fn test_invalid_json() {
        let err = LoggerConfig::from_json(r#"{ "sink": "syslog" }"#).unwrap_err();
        assert!(matches!(err, LoggerError::JsonError(_)));
    }
}
