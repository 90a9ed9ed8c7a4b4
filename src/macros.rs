//! Logging macros for ergonomic log message formatting.
//!
//! These macros provide a convenient interface for logging with automatic
//! string formatting, similar to `println!` and `format!`. They record the
//! call site (`file!()`, `module_path!()`, `line!()`) and skip formatting
//! entirely when the level is disabled.
//!
//! # Examples
//!
//! ```
//! use rust_sink_logger::prelude::*;
//! use rust_sink_logger::info;
//!
//! let logger = SyncLogger::new("server");
//!
//! // Basic logging
//! info!(logger, "Server started");
//!
//! // With format arguments
//! let port = 8080;
//! info!(logger, "Server listening on port {}", port);
//!
//! // With an explicit category instead of the module path
//! info!(logger, category: "net", "Accepted connection from {}", "10.0.0.7");
//! ```

/// Log a message with automatic formatting.
///
/// # Examples
///
/// ```
/// # use rust_sink_logger::prelude::*;
/// # let logger = SyncLogger::new("app");
/// use rust_sink_logger::log;
/// log!(logger, LogLevel::Info, "Simple message");
/// log!(logger, LogLevel::Error, "Error code: {}", 500);
/// log!(logger, category: "db", LogLevel::Warn, "Slow query: {}ms", 1200);
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, category: $category:expr, $level:expr, $($arg:tt)+) => {{
        use $crate::core::Logger as _;
        let logger = &$logger;
        let level = $level;
        if logger.enabled(level) {
            logger.log(
                $crate::core::LogEvent::new($category, level, format!($($arg)+))
                    .with_location(file!(), module_path!(), line!()),
            );
        }
    }};
    ($logger:expr, $level:expr, $($arg:tt)+) => {
        $crate::log!($logger, category: module_path!(), $level, $($arg)+)
    };
}

/// Log a trace-level message.
///
/// # Examples
///
/// ```
/// # use rust_sink_logger::prelude::*;
/// # let logger = SyncLogger::new("app");
/// # logger.set_level(LogLevel::Trace);
/// use rust_sink_logger::trace;
/// trace!(logger, "Entering function: calculate()");
/// trace!(logger, "Variable value: {}", 42);
/// ```
#[macro_export]
macro_rules! trace {
    ($logger:expr, category: $category:expr, $($arg:tt)+) => {
        $crate::log!($logger, category: $category, $crate::LogLevel::Trace, $($arg)+)
    };
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Trace, $($arg)+)
    };
}

/// Log a debug-level message.
///
/// # Examples
///
/// ```
/// # use rust_sink_logger::prelude::*;
/// # let logger = SyncLogger::new("app");
/// use rust_sink_logger::debug;
/// debug!(logger, "Debug information");
/// debug!(logger, "Counter value: {}", 10);
/// ```
#[macro_export]
macro_rules! debug {
    ($logger:expr, category: $category:expr, $($arg:tt)+) => {
        $crate::log!($logger, category: $category, $crate::LogLevel::Debug, $($arg)+)
    };
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Debug, $($arg)+)
    };
}

/// Log an info-level message.
///
/// # Examples
///
/// ```
/// # use rust_sink_logger::prelude::*;
/// # let logger = SyncLogger::new("app");
/// use rust_sink_logger::info;
/// info!(logger, "Application started");
/// info!(logger, "Processing {} items", 100);
/// ```
#[macro_export]
macro_rules! info {
    ($logger:expr, category: $category:expr, $($arg:tt)+) => {
        $crate::log!($logger, category: $category, $crate::LogLevel::Info, $($arg)+)
    };
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Info, $($arg)+)
    };
}

/// Log a warning-level message.
///
/// # Examples
///
/// ```
/// # use rust_sink_logger::prelude::*;
/// # let logger = SyncLogger::new("app");
/// use rust_sink_logger::warn;
/// warn!(logger, "Low disk space");
/// warn!(logger, "Retry attempt {} of {}", 3, 5);
/// ```
#[macro_export]
macro_rules! warn {
    ($logger:expr, category: $category:expr, $($arg:tt)+) => {
        $crate::log!($logger, category: $category, $crate::LogLevel::Warn, $($arg)+)
    };
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Warn, $($arg)+)
    };
}

/// Log an error-level message.
///
/// # Examples
///
/// ```
/// # use rust_sink_logger::prelude::*;
/// # let logger = SyncLogger::new("app");
/// use rust_sink_logger::error;
/// error!(logger, "Failed to connect to database");
/// error!(logger, "HTTP error: {}", 404);
/// ```
#[macro_export]
macro_rules! error {
    ($logger:expr, category: $category:expr, $($arg:tt)+) => {
        $crate::log!($logger, category: $category, $crate::LogLevel::Error, $($arg)+)
    };
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Error, $($arg)+)
    };
}

/// Log a fatal-level message.
///
/// # Examples
///
/// ```
/// # use rust_sink_logger::prelude::*;
/// # let logger = SyncLogger::new("app");
/// use rust_sink_logger::fatal;
/// fatal!(logger, "Critical system failure");
/// fatal!(logger, "Unrecoverable error: {}", "out of memory");
/// ```
#[macro_export]
macro_rules! fatal {
    ($logger:expr, category: $category:expr, $($arg:tt)+) => {
        $crate::log!($logger, category: $category, $crate::LogLevel::Fatal, $($arg)+)
    };
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Fatal, $($arg)+)
    };
}

/// Log through the globally registered logger `name`.
///
/// Unknown names are a silent no-op.
///
/// # Examples
///
/// ```
/// use rust_sink_logger::{log_to, logging, LogLevel};
///
/// logging::initialize("doc.log_to", false);
/// log_to!("doc.log_to", LogLevel::Info, "Connected in {}ms", 12);
/// log_to!("doc.nobody", LogLevel::Fatal, "Goes nowhere");
/// ```
#[macro_export]
macro_rules! log_to {
    ($name:expr, category: $category:expr, $level:expr, $($arg:tt)+) => {{
        if let Some(logger) = $crate::core::LoggerRegistry::global().get($name) {
            $crate::log!(logger, category: $category, $level, $($arg)+);
        }
    }};
    ($name:expr, $level:expr, $($arg:tt)+) => {
        $crate::log_to!($name, category: module_path!(), $level, $($arg)+)
    };
}
