//! Handler configuration

use super::log_level::LogLevel;
use super::timestamp::TimestampFormat;
use serde::{Deserialize, Serialize};

/// Options shared by the built-in handlers
///
/// Deserializes from any serde format, with every field optional:
///
/// ```
/// use rust_source_logger::{HandlerOptions, LogLevel};
///
/// let opts: HandlerOptions = serde_json::from_str(r#"{"level":"Debug","add_source":true}"#).unwrap();
/// assert_eq!(opts.level, LogLevel::Debug);
/// assert!(opts.add_source);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HandlerOptions {
    /// Minimum level handled; lower levels are reported as disabled
    pub level: LogLevel,

    /// Emit the record's captured location when no `source` attribute is present
    pub add_source: bool,

    /// Rendering of the `time` field
    pub timestamp_format: TimestampFormat,
}

impl Default for HandlerOptions {
    fn default() -> Self {
        Self {
            level: LogLevel::Info,
            add_source: false,
            timestamp_format: TimestampFormat::default(),
        }
    }
}

impl HandlerOptions {
    #[must_use]
    pub fn level(mut self, level: LogLevel) -> Self {
        self.level = level;
        self
    }

    #[must_use]
    pub fn add_source(mut self, add_source: bool) -> Self {
        self.add_source = add_source;
        self
    }

    #[must_use]
    pub fn timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.timestamp_format = format;
        self
    }
}

/// Encoding used by the handler a [`LoggerBuilder`](super::LoggerBuilder) creates
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    /// One JSON object per line (default)
    #[default]
    Json,

    /// `key=value` pairs, one record per line
    Text,
}
