//! Console sink implementation

use crate::core::{formatter, LogEvent, Result, Sink, SinkKind};
use std::io::{IsTerminal, Write};

pub const DEFAULT_CONSOLE_PATTERN: &str = "%x [%l] %v";

/// Writes formatted lines to stdout, coloured by level.
#[derive(Debug, Clone)]
pub struct ConsoleSink {
    use_colors: bool,
    pattern: String,
}

impl ConsoleSink {
    pub fn new() -> Self {
        Self {
            use_colors: detect_color_support(),
            pattern: DEFAULT_CONSOLE_PATTERN.to_string(),
        }
    }

    /// Force colour output on or off regardless of the terminal.
    ///
    /// # Example
    ///
    /// ```
    /// use rust_sink_logger::sinks::ConsoleSink;
    ///
    /// let sink = ConsoleSink::new().with_colors(false);
    /// assert!(!sink.uses_colors());
    /// ```
    #[must_use]
    pub fn with_colors(mut self, use_colors: bool) -> Self {
        self.use_colors = use_colors;
        self
    }

    #[must_use]
    pub fn with_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.pattern = pattern.into();
        self
    }

    pub fn uses_colors(&self) -> bool {
        self.use_colors
    }

    fn render(&self, event: &LogEvent) -> String {
        let line = formatter::format(event, &self.pattern);
        if self.use_colors {
            event.level.paint(&line)
        } else {
            line
        }
    }
}

impl Default for ConsoleSink {
    fn default() -> Self {
        Self::new()
    }
}

impl Sink for ConsoleSink {
    fn write(&mut self, event: &LogEvent) -> Result<()> {
        let output = self.render(event);
        let mut stdout = std::io::stdout().lock();
        writeln!(stdout, "{}", output)?;
        Ok(())
    }

    // stdout is line-buffered; nothing to do
    fn flush(&mut self) -> Result<()> {
        Ok(())
    }

    fn pattern(&self) -> &str {
        &self.pattern
    }

    fn set_pattern(&mut self, pattern: String) {
        self.pattern = pattern;
    }

    fn clone_box(&self) -> Box<dyn Sink> {
        Box::new(self.clone())
    }

    fn kind(&self) -> SinkKind {
        SinkKind::Console
    }

    fn name(&self) -> &str {
        "console"
    }
}

/// Colour is on for terminals unless the environment says otherwise.
fn detect_color_support() -> bool {
    if std::env::var_os("FORCE_COLOR").is_some_and(|v| v != "0") {
        return true;
    }
    if std::env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty()) {
        return false;
    }
    if std::env::var("TERM").is_ok_and(|term| term == "dumb") {
        return false;
    }
    std::io::stdout().is_terminal()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LogLevel;

    #[test]
    fn test_defaults() {
        let sink = ConsoleSink::new();
        assert_eq!(sink.pattern(), DEFAULT_CONSOLE_PATTERN);
        assert_eq!(sink.kind(), SinkKind::Console);
        assert_eq!(sink.name(), "console");
    }

    #[test]
    fn test_render_without_colors() {
        let sink = ConsoleSink::new().with_colors(false).with_pattern("[%l] %n: %v");
        let event = LogEvent::new("net", LogLevel::Warn, "slow response");
        assert_eq!(sink.render(&event), "[WARN] net: slow response");
    }

    #[test]
    fn test_render_with_colors_keeps_text() {
        let sink = ConsoleSink::new().with_colors(true).with_pattern("%v");
        let event = LogEvent::new("net", LogLevel::Error, "down");
        let rendered = sink.render(&event);

        assert!(rendered.contains("down"));
        assert!(rendered.starts_with('\x1b'));
        assert!(rendered.ends_with("\x1b[0m"));
    }

    #[test]
    fn test_write_and_flush_succeed() {
        let mut sink = ConsoleSink::new().with_colors(false);
        let event = LogEvent::new("console", LogLevel::Info, "console sink test output");
        assert!(sink.write(&event).is_ok());
        assert!(sink.flush().is_ok());
    }

    #[test]
    fn test_clone_box_keeps_pattern() {
        let mut sink = ConsoleSink::new();
        sink.set_pattern("%l|%v".to_string());
        let copy = sink.clone_box();
        assert_eq!(copy.pattern(), "%l|%v");
        assert_eq!(copy.kind(), SinkKind::Console);
    }
}
