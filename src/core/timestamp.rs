//! Timestamp formatting for encoded records

use super::error::{LoggerError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Write;

/// How a handler renders the `time` field
///
/// # Examples
///
/// ```
/// use rust_source_logger::core::TimestampFormat;
/// use chrono::Utc;
///
/// let format = TimestampFormat::Iso8601;
/// assert!(format.format(&Utc::now()).unwrap().ends_with('Z'));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimestampFormat {
    /// ISO 8601 with milliseconds: `2025-01-08T10:30:45.123Z`
    #[default]
    Iso8601,

    /// ISO 8601 with microseconds: `2025-01-08T10:30:45.123456Z`
    Iso8601Micros,

    /// RFC 3339 with offset: `2025-01-08T10:30:45.123456789+00:00`
    Rfc3339,

    /// Unix timestamp in milliseconds: `1736332245123`
    UnixMillis,

    /// Any strftime-compatible pattern
    Custom(String),
}

impl TimestampFormat {
    /// Render `datetime`, failing only for an invalid `Custom` pattern
    pub fn format(&self, datetime: &DateTime<Utc>) -> Result<String> {
        let formatted = match self {
            TimestampFormat::Iso8601 => datetime.format("%Y-%m-%dT%H:%M:%S%.3fZ").to_string(),
            TimestampFormat::Iso8601Micros => datetime.format("%Y-%m-%dT%H:%M:%S%.6fZ").to_string(),
            TimestampFormat::Rfc3339 => datetime.to_rfc3339(),
            TimestampFormat::UnixMillis => datetime.timestamp_millis().to_string(),
            TimestampFormat::Custom(pattern) => {
                let mut out = String::new();
                write!(out, "{}", datetime.format(pattern)).map_err(|_| {
                    LoggerError::formatter(
                        "timestamp",
                        format!("invalid strftime pattern {:?}", pattern),
                    )
                })?;
                out
            }
        };
        Ok(formatted)
    }

    /// JSON form of the timestamp: a number for Unix formats, a string otherwise
    pub fn to_json_value(&self, datetime: &DateTime<Utc>) -> Result<serde_json::Value> {
        match self {
            TimestampFormat::UnixMillis => Ok(datetime.timestamp_millis().into()),
            _ => self.format(datetime).map(serde_json::Value::String),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn fixed() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 1, 8, 10, 30, 45).unwrap()
    }

    #[test]
    fn test_iso8601() {
        assert_eq!(
            TimestampFormat::Iso8601.format(&fixed()).unwrap(),
            "2025-01-08T10:30:45.000Z"
        );
        assert_eq!(
            TimestampFormat::Iso8601Micros.format(&fixed()).unwrap(),
            "2025-01-08T10:30:45.000000Z"
        );
    }

    #[test]
    fn test_unix_millis_is_numeric_in_json() {
        let value = TimestampFormat::UnixMillis.to_json_value(&fixed()).unwrap();
        assert_eq!(value, serde_json::json!(1736332245000_i64));
    }

    #[test]
    fn test_custom() {
        let format = TimestampFormat::Custom("%Y/%m/%d".to_string());
        assert_eq!(format.format(&fixed()).unwrap(), "2025/01/08");
    }

    #[test]
    fn test_invalid_custom_pattern_is_an_error() {
        let format = TimestampFormat::Custom("%Q".to_string());

        let err = format.format(&fixed()).unwrap_err();
        assert!(matches!(err, LoggerError::FormatterError { .. }));
        assert!(format.to_json_value(&fixed()).is_err());
    }
}
