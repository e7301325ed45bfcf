//! Timestamp formatting utilities
//!
//! Provides standardized, configurable timestamp formats for printer stages.
//! Formatting is fallible: a malformed custom strftime pattern yields `None`
//! so callers can substitute a placeholder instead of aborting the print.

use chrono::{DateTime, FixedOffset, Offset, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Write;

/// Standardized timestamp format options
///
/// # Examples
///
/// ```
/// use rust_logforge::TimestampFormat;
/// use chrono::{TimeZone, Utc};
///
/// let time = Utc.with_ymd_and_hms(2025, 1, 8, 10, 30, 45).unwrap();
/// let format = TimestampFormat::Custom("%Y/%m/%d".to_string());
/// assert_eq!(format.format(&time).as_deref(), Some("2025/01/08"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimestampFormat {
    /// ISO 8601 with milliseconds: `2025-01-08T10:30:45.123Z`, or
    /// `2025-01-08T11:30:45.123+01:00` at a non-zero offset
    #[default]
    Iso8601,

    /// ISO 8601 with microseconds: `2025-01-08T10:30:45.123456Z`
    Iso8601Micros,

    /// RFC 3339 format: `2025-01-08T10:30:45+00:00`
    Rfc3339,

    /// Unix timestamp in seconds: `1736332245`, independent of any offset
    Unix,

    /// Unix timestamp in milliseconds: `1736332245123`
    UnixMillis,

    /// Custom strftime format
    ///
    /// ```
    /// use rust_logforge::TimestampFormat;
    ///
    /// let format = TimestampFormat::Custom("%d.%m.%Y %H:%M:%S".to_string());
    /// ```
    Custom(String),
}

impl TimestampFormat {
    /// Format a UTC time, rendered at UTC
    #[must_use]
    pub fn format(&self, datetime: &DateTime<Utc>) -> Option<String> {
        self.format_with_offset(datetime, Utc.fix())
    }

    /// Format a UTC time rendered at a fixed offset
    ///
    /// Returns `None` when a custom pattern contains an invalid specifier.
    #[must_use]
    pub fn format_with_offset(
        &self,
        datetime: &DateTime<Utc>,
        offset: FixedOffset,
    ) -> Option<String> {
        let local = datetime.with_timezone(&offset);
        let zone = if offset.local_minus_utc() == 0 { "Z" } else { "%:z" };
        match self {
            TimestampFormat::Iso8601 => Some(
                local
                    .format(&format!("%Y-%m-%dT%H:%M:%S%.3f{zone}"))
                    .to_string(),
            ),
            TimestampFormat::Iso8601Micros => Some(
                local
                    .format(&format!("%Y-%m-%dT%H:%M:%S%.6f{zone}"))
                    .to_string(),
            ),
            TimestampFormat::Rfc3339 => Some(local.to_rfc3339()),
            TimestampFormat::Unix => Some(datetime.timestamp().to_string()),
            TimestampFormat::UnixMillis => Some(datetime.timestamp_millis().to_string()),
            TimestampFormat::Custom(format_str) => {
                let mut rendered = String::new();
                write!(rendered, "{}", local.format(format_str)).ok()?;
                Some(rendered)
            }
        }
    }
}

impl From<&str> for TimestampFormat {
    fn from(format_str: &str) -> Self {
        TimestampFormat::Custom(format_str.to_string())
    }
}

impl From<String> for TimestampFormat {
    fn from(format_str: String) -> Self {
        TimestampFormat::Custom(format_str)
    }
}
