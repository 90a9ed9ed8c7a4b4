//! Core logger types and traits

pub mod async_logger;
pub mod dispatcher;
pub mod error;
pub mod formatter;
pub mod log_event;
pub mod log_level;
pub mod logger;
pub mod manager;
pub mod metrics;
pub mod registry;
pub mod sink;
pub mod sync_logger;
pub mod task_queue;
pub mod timestamp;
pub mod worker;

pub use async_logger::AsyncLogger;
pub use dispatcher::Dispatcher;
pub use error::{LoggerError, Result};
pub use log_event::LogEvent;
pub use log_level::LogLevel;
pub use logger::{Logger, LoggerBuilder, LoggerExt, DEFAULT_FLUSH_LEVEL, DEFAULT_LOG_LEVEL};
pub use manager::LogManager;
pub use metrics::LoggerMetrics;
pub use registry::LoggerRegistry;
pub use sink::{Sink, SinkGuard, SinkKind, SinkSet};
pub use sync_logger::SyncLogger;
pub use task_queue::{Batch, Task, TaskQueue, DEFAULT_DRAIN_BATCH};
pub use timestamp::{TimestampKind, TIMESTAMP_LAYOUT};
pub use worker::{QueueWorker, WorkerState};
