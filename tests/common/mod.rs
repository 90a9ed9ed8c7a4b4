//! Shared helpers for integration tests
#![allow(dead_code)]

use crossbeam_channel::{unbounded, Receiver, Sender};
use rust_sink_logger::core::{LogEvent, LoggerError, Result, Sink};
use std::time::Duration;

/// What a [`ChannelSink`] observed.
#[derive(Debug, Clone, PartialEq)]
pub enum Observed {
    Write(LogEvent),
    Flush,
}

/// Mock sink that forwards every call over a channel.
#[derive(Clone)]
pub struct ChannelSink {
    tx: Sender<Observed>,
    pattern: String,
    fail: bool,
}

impl ChannelSink {
    pub fn new() -> (Self, Receiver<Observed>) {
        let (tx, rx) = unbounded();
        let sink = Self {
            tx,
            pattern: "%v".to_string(),
            fail: false,
        };
        (sink, rx)
    }

    pub fn failing() -> (Self, Receiver<Observed>) {
        let (mut sink, rx) = Self::new();
        sink.fail = true;
        (sink, rx)
    }
}

impl Sink for ChannelSink {
    fn write(&mut self, event: &LogEvent) -> Result<()> {
        if self.fail {
            return Err(LoggerError::other("channel sink refuses writes"));
        }
        let _ = self.tx.send(Observed::Write(event.clone()));
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        let _ = self.tx.send(Observed::Flush);
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

    fn name(&self) -> &str {
        "channel"
    }
}

/// Everything received so far, without waiting.
pub fn collect(rx: &Receiver<Observed>) -> Vec<Observed> {
    rx.try_iter().collect()
}

/// Messages of the received writes, without waiting.
pub fn messages(rx: &Receiver<Observed>) -> Vec<String> {
    collect(rx)
        .into_iter()
        .filter_map(|o| match o {
            Observed::Write(event) => Some(event.message),
            Observed::Flush => None,
        })
        .collect()
}

/// Wait up to `timeout` for the next write.
pub fn next_write(rx: &Receiver<Observed>, timeout: Duration) -> Option<LogEvent> {
    loop {
        match rx.recv_timeout(timeout) {
            Ok(Observed::Write(event)) => return Some(event),
            Ok(Observed::Flush) => continue,
            Err(_) => return None,
        }
    }
}
