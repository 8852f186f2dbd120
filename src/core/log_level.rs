//! Log level definitions
//!
//! Levels sit on a fixed integer scale with a gap of 4 between neighbours,
//! so handlers may reason about "levels in between" if they need to.
//! `Trace` and `Fatal` extend the usual Debug..Error range on either side.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Distance between two adjacent canonical levels on the scale
pub const LEVEL_STEP: i32 = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[derive(Default)]
#[repr(i8)]
pub enum LogLevel {
    Trace = -8,
    Debug = -4,
    #[default]
    Info = 0,
    Warn = 4,
    Error = 8,
    Fatal = 12,
}

impl LogLevel {
    /// All levels, lowest first
    pub const ALL: [LogLevel; 6] = [
        LogLevel::Trace,
        LogLevel::Debug,
        LogLevel::Info,
        LogLevel::Warn,
        LogLevel::Error,
        LogLevel::Fatal,
    ];

    /// Position of this level on the numeric scale
    #[inline]
    pub const fn as_i32(self) -> i32 {
        self as i8 as i32
    }

    pub fn to_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "TRACE",
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warn => "WARN",
            LogLevel::Error => "ERROR",
            LogLevel::Fatal => "FATAL",
        }
    }

    /// Whether a record at this level passes the given threshold
    #[inline]
    pub fn enabled(self, threshold: LogLevel) -> bool {
        enabled(self, threshold)
    }

    #[cfg(feature = "console")]
    pub fn color_code(&self) -> colored::Color {
        use colored::Color::*;
        match self {
            LogLevel::Trace => BrightBlack,
            LogLevel::Debug => Blue,
            LogLevel::Info => Green,
            LogLevel::Warn => Yellow,
            LogLevel::Error => Red,
            LogLevel::Fatal => BrightRed,
        }
    }
}

/// `level` is enabled under `threshold` when it is at least as severe.
#[inline]
pub fn enabled(level: LogLevel, threshold: LogLevel) -> bool {
    level.as_i32() >= threshold.as_i32()
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_str())
    }
}

impl FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "TRACE" => Ok(LogLevel::Trace),
            "DEBUG" => Ok(LogLevel::Debug),
            "INFO" => Ok(LogLevel::Info),
            "WARN" | "WARNING" => Ok(LogLevel::Warn),
            "ERROR" => Ok(LogLevel::Error),
            "FATAL" => Ok(LogLevel::Fatal),
            _ => Err(format!("Invalid log level: '{}'", s)),
        }
    }
}
