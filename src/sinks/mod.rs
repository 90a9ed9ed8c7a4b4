//! Sink implementations

pub mod console;
pub mod file;

pub use console::{ConsoleSink, DEFAULT_CONSOLE_PATTERN};
pub use file::{FileSink, DEFAULT_FILE_PATTERN};

pub use crate::core::{Sink, SinkKind};
