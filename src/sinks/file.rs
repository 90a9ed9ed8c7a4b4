//! File sink implementation

use crate::core::{formatter, LogEvent, LoggerError, Result, Sink, SinkKind};
use std::fs::{self, File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

pub const DEFAULT_FILE_PATTERN: &str = "%x [%l] [%!] %v";

/// Appends formatted lines to a file through a buffer.
///
/// A sink whose file could not be opened stays usable and silently discards
/// everything written to it.
pub struct FileSink {
    path: PathBuf,
    append: bool,
    pattern: String,
    writer: Option<BufWriter<File>>,
}

impl FileSink {
    /// Open `path`, appending to or truncating an existing file.
    ///
    /// Failures are reported to stderr and leave the sink disabled; use
    /// [`FileSink::try_new`] to handle them instead.
    pub fn new(path: impl Into<PathBuf>, append: bool) -> Self {
        let path = path.into();
        let writer = open_or_report(&path, append);
        Self {
            path,
            append,
            pattern: DEFAULT_FILE_PATTERN.to_string(),
            writer,
        }
    }

    /// # Example
    ///
    /// ```
    /// use rust_sink_logger::sinks::FileSink;
    ///
    /// let dir = tempfile::tempdir().unwrap();
    /// let sink = FileSink::try_new(dir.path().join("logs/app.log"), true).unwrap();
    /// assert!(sink.is_open());
    ///
    /// assert!(FileSink::try_new("", true).is_err());
    /// ```
    pub fn try_new(path: impl Into<PathBuf>, append: bool) -> Result<Self> {
        let path = path.into();
        let writer = open(&path, append)?;
        Ok(Self {
            path,
            append,
            pattern: DEFAULT_FILE_PATTERN.to_string(),
            writer: Some(writer),
        })
    }

    #[must_use]
    pub fn with_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.pattern = pattern.into();
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn is_append(&self) -> bool {
        self.append
    }

    /// Whether the file was opened; `false` means writes are discarded.
    pub fn is_open(&self) -> bool {
        self.writer.is_some()
    }
}

impl Sink for FileSink {
    fn write(&mut self, event: &LogEvent) -> Result<()> {
        let Some(writer) = self.writer.as_mut() else {
            return Ok(());
        };

        let mut output = formatter::format(event, &self.pattern);
        output.push('\n');
        writer.write_all(output.as_bytes())?;
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        if let Some(ref mut writer) = self.writer {
            writer.flush()?;
        }
        Ok(())
    }

    fn pattern(&self) -> &str {
        &self.pattern
    }

    fn set_pattern(&mut self, pattern: String) {
        self.pattern = pattern;
    }

    // Reopen in append mode so the copy never truncates the original's output
    fn clone_box(&self) -> Box<dyn Sink> {
        Box::new(FileSink {
            path: self.path.clone(),
            append: self.append,
            pattern: self.pattern.clone(),
            writer: open_or_report(&self.path, true),
        })
    }

    fn kind(&self) -> SinkKind {
        SinkKind::File
    }

    fn name(&self) -> &str {
        "file"
    }
}

impl Drop for FileSink {
    fn drop(&mut self) {
        // Ensure all buffered data is flushed to disk
        let _ = self.flush();
    }
}

fn open(path: &Path, append: bool) -> Result<BufWriter<File>> {
    if path.as_os_str().is_empty() {
        return Err(LoggerError::file_sink("", "log file path is empty"));
    }

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| {
            LoggerError::io_operation("create log directory", parent.display().to_string(), e)
        })?;
    }

    let mut options = OpenOptions::new();
    options.create(true);
    if append {
        options.append(true);
    } else {
        options.write(true).truncate(true);
    }

    let file = options
        .open(path)
        .map_err(|e| LoggerError::io_operation("open log file", path.display().to_string(), e))?;
    Ok(BufWriter::new(file))
}

fn open_or_report(path: &Path, append: bool) -> Option<BufWriter<File>> {
    match open(path, append) {
        Ok(writer) => Some(writer),
        Err(e) => {
            eprintln!("[LOGGER ERROR] {}. File sink disabled.", e);
            None
        }
    }
}
