//! Log event structure

use super::log_level::LogLevel;
use super::timestamp::TimestampKind;
use serde::{Deserialize, Serialize};

/// Everything a sink needs to render one log line.
///
/// All text is owned so an event can be moved into a queued task and outlive
/// the caller's stack frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEvent {
    /// Free-form grouping label, independent of the logger that handles it
    pub category: String,
    pub level: LogLevel,
    pub timestamp_kind: TimestampKind,
    pub message: String,
    pub file: String,
    pub function: String,
    pub line: u32,
}

impl LogEvent {
    pub fn new(category: impl Into<String>, level: LogLevel, message: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            level,
            timestamp_kind: TimestampKind::Local,
            message: message.into(),
            file: String::new(),
            function: String::new(),
            line: 0,
        }
    }

    pub fn with_location(
        mut self,
        file: impl Into<String>,
        function: impl Into<String>,
        line: u32,
    ) -> Self {
        self.file = file.into();
        self.function = function.into();
        self.line = line;
        self
    }

    pub fn with_timestamp(mut self, kind: TimestampKind) -> Self {
        self.timestamp_kind = kind;
        self
    }
}
