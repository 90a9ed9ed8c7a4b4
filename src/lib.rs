//! # Rust Sink Logger
//!
//! An embeddable logging library with synchronous and asynchronous delivery
//! of log events to multiple sinks.
//!
//! ## Features
//!
//! - **Asynchronous Pipeline**: a per-logger background worker drains an
//!   unbounded task queue in batches; shutdown never drops queued events
//! - **Multiple Sinks**: console and file sinks, plus custom [`Sink`]s
//! - **Per-logger Policy**: severity filtering, flush level and line patterns
//! - **Thread Safe**: loggers are shared as `Arc<dyn Logger>`
//!
//! ## Example
//!
//! ```
//! use rust_sink_logger::prelude::*;
//! use rust_sink_logger::info;
//!
//! let dir = tempfile::tempdir().unwrap();
//! let logger = LoggerBuilder::new("app")
//!     .sink(FileSink::new(dir.path().join("app.log"), true))
//!     .async_mode(true)
//!     .build();
//!
//! info!(logger, "hello from {}", "the worker");
//! logger.flush();
//!
//! let text = std::fs::read_to_string(dir.path().join("app.log")).unwrap();
//! assert!(text.contains("hello from the worker"));
//! ```

pub mod config;
pub mod core;
pub mod logging;
pub mod macros;
pub mod paths;
pub mod sinks;

pub mod prelude {
    pub use crate::config::{LogSinkType, LoggerConfig};
    pub use crate::core::{
        AsyncLogger, LogEvent, LogLevel, LogManager, Logger, LoggerBuilder, LoggerError,
        LoggerExt, LoggerMetrics, LoggerRegistry, Result, Sink, SinkKind, SyncLogger,
        TimestampKind,
    };
    pub use crate::sinks::{ConsoleSink, FileSink};
}

pub use config::{LogSinkType, LoggerConfig, DEFAULT_LOGGER_NAME};
pub use core::{
    AsyncLogger, LogEvent, LogLevel, LogManager, Logger, LoggerBuilder, LoggerError, LoggerExt,
    LoggerMetrics, LoggerRegistry, Result, Sink, SinkKind, SyncLogger, TimestampKind,
};
pub use sinks::{ConsoleSink, FileSink};
