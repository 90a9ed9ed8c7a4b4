//! Timestamp rendering
//!
//! Events carry only a [`TimestampKind`]; the text is produced when a sink
//! formats the event, not when the event is created or queued.

use chrono::{DateTime, Local, Utc};
use serde::{Deserialize, Serialize};

/// Layout used for the `%x` pattern directive.
pub const TIMESTAMP_LAYOUT: &str = "%Y-%m-%d %H:%M:%S";

/// Which clock a timestamp is rendered in.
///
/// # Examples
///
/// ```
/// use rust_sink_logger::core::TimestampKind;
/// use chrono::{TimeZone, Utc};
///
/// let at = Utc.with_ymd_and_hms(2025, 1, 8, 10, 30, 45).unwrap();
/// assert_eq!(TimestampKind::Utc.render_at(&at), "2025-01-08 10:30:45");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimestampKind {
    /// Local wall-clock time
    #[default]
    Local,
    /// Coordinated Universal Time
    Utc,
}

impl TimestampKind {
    /// Render the current time.
    #[must_use]
    pub fn render_now(&self) -> String {
        self.render_at(&Utc::now())
    }

    /// Render a fixed instant, converting to local time when required.
    #[must_use]
    pub fn render_at(&self, instant: &DateTime<Utc>) -> String {
        match self {
            TimestampKind::Local => instant
                .with_timezone(&Local)
                .format(TIMESTAMP_LAYOUT)
                .to_string(),
            TimestampKind::Utc => instant.format(TIMESTAMP_LAYOUT).to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn fixed_datetime() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 1, 8, 10, 30, 45)
            .single()
            .expect("valid datetime")
    }

    #[test]
    fn test_utc_render() {
        assert_eq!(
            TimestampKind::Utc.render_at(&fixed_datetime()),
            "2025-01-08 10:30:45"
        );
    }

    #[test]
    fn test_local_render_matches_chrono_local() {
        let expected = fixed_datetime()
            .with_timezone(&Local)
            .format(TIMESTAMP_LAYOUT)
            .to_string();
        assert_eq!(TimestampKind::Local.render_at(&fixed_datetime()), expected);
    }

    #[test]
    fn test_render_now_shape() {
        let text = TimestampKind::Utc.render_now();
        // YYYY-MM-DD HH:MM:SS
        assert_eq!(text.len(), 19);
        assert_eq!(&text[4..5], "-");
        assert_eq!(&text[10..11], " ");
    }

    #[test]
    fn test_default_is_local() {
        assert_eq!(TimestampKind::default(), TimestampKind::Local);
    }
}
