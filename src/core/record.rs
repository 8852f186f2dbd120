//! Record structure

use super::attr::Attr;
use super::log_level::LogLevel;
use chrono::{DateTime, Utc};
use std::panic::Location;

/// One structured log entry.
///
/// A record is built once by the logger and then only read. Handlers that
/// want a different attribute set build a new record with
/// [`Record::rebuild`] instead of changing this one.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    timestamp: DateTime<Utc>,
    level: LogLevel,
    message: String,
    location: Option<&'static Location<'static>>,
    attrs: Vec<Attr>,
}

impl Record {
    pub fn new(level: LogLevel, message: impl Into<String>) -> Self {
        Self {
            timestamp: Utc::now(),
            level,
            message: message.into(),
            location: None,
            attrs: Vec::new(),
        }
    }

    /// Record the program location this entry was emitted from
    #[must_use]
    pub fn with_location(mut self, location: &'static Location<'static>) -> Self {
        self.location = Some(location);
        self
    }

    /// Capture the caller of the enclosing `#[track_caller]` chain
    #[must_use]
    #[track_caller]
    pub fn at_caller(self) -> Self {
        self.with_location(Location::caller())
    }

    #[must_use]
    pub fn with_timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = timestamp;
        self
    }

    #[must_use]
    pub fn with_attrs(mut self, attrs: impl IntoIterator<Item = Attr>) -> Self {
        self.attrs.extend(attrs);
        self
    }

    #[must_use]
    pub fn add_attr(mut self, attr: Attr) -> Self {
        self.attrs.push(attr);
        self
    }

    /// New record with the same timestamp, level, message and location,
    /// carrying `attrs` instead of this record's attributes.
    pub fn rebuild(&self, attrs: Vec<Attr>) -> Self {
        Self {
            timestamp: self.timestamp,
            level: self.level,
            message: self.message.clone(),
            location: self.location,
            attrs,
        }
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    pub fn level(&self) -> LogLevel {
        self.level
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn location(&self) -> Option<&'static Location<'static>> {
        self.location
    }

    /// Resolve the captured location to `(file, line)`
    pub fn source(&self) -> Option<(&'static str, u32)> {
        self.location.map(|loc| (loc.file(), loc.line()))
    }

    pub fn attrs(&self) -> &[Attr] {
        &self.attrs
    }

    /// First attribute with the given key, if any
    pub fn attr(&self, key: &str) -> Option<&Attr> {
        self.attrs.iter().find(|a| a.key == key)
    }
}
