//! Pattern-based line formatting
//!
//! | Directive | Expands to                         |
//! |-----------|------------------------------------|
//! | `%x`      | timestamp (`YYYY-MM-DD HH:MM:SS`)   |
//! | `%n`      | category                           |
//! | `%l`      | level name                         |
//! | `%t`      | thread label (`Thread-N`)          |
//! | `%$`      | source file                        |
//! | `%!`      | function                           |
//! | `%#`      | line number                        |
//! | `%v`      | message                            |
//!
//! Any other `%X` is copied through unchanged.

use super::log_event::LogEvent;
use chrono::{DateTime, Utc};
use std::cell::RefCell;
use std::fmt::Write;
use std::sync::atomic::{AtomicUsize, Ordering};

static NEXT_THREAD_LABEL: AtomicUsize = AtomicUsize::new(1);

// Labels are handed out in first-use order and cached per thread
thread_local! {
    static THREAD_LABEL_CACHE: RefCell<Option<String>> = const { RefCell::new(None) };
}

/// Short, stable label for the calling thread.
pub fn thread_label() -> String {
    THREAD_LABEL_CACHE.with(|cache| {
        cache
            .borrow_mut()
            .get_or_insert_with(|| {
                let id = NEXT_THREAD_LABEL.fetch_add(1, Ordering::Relaxed);
                format!("Thread-{}", id)
            })
            .clone()
    })
}

/// Render `event` with `pattern`, reading the clock only if `%x` is present.
pub fn format(event: &LogEvent, pattern: &str) -> String {
    render(event, pattern, None)
}

/// Render `event` with `pattern` against a fixed instant.
pub fn format_at(event: &LogEvent, pattern: &str, instant: &DateTime<Utc>) -> String {
    render(event, pattern, Some(instant))
}

fn render(event: &LogEvent, pattern: &str, instant: Option<&DateTime<Utc>>) -> String {
    let mut out = String::with_capacity(pattern.len() + event.message.len() + 32);
    let mut chars = pattern.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '%' {
            out.push(c);
            continue;
        }
        let Some(&directive) = chars.peek() else {
            out.push('%');
            break;
        };
        match directive {
            'x' => match instant {
                Some(at) => out.push_str(&event.timestamp_kind.render_at(at)),
                None => out.push_str(&event.timestamp_kind.render_now()),
            },
            'n' => out.push_str(&event.category),
            'l' => out.push_str(event.level.to_str()),
            't' => out.push_str(&thread_label()),
            '$' => out.push_str(&event.file),
            '!' => out.push_str(&event.function),
            '#' => {
                let _ = write!(out, "{}", event.line);
            }
            'v' => out.push_str(&event.message),
            _ => {
                // Unknown directive: keep the '%' and let the next char print normally
                out.push('%');
                continue;
            }
        }
        chars.next();
    }

    out
}
