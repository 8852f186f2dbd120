//! Process-wide default logger
//!
//! The default logger writes JSON to standard output at `Debug` and above,
//! with [`SourceHandler`](crate::handlers::SourceHandler) installed so every
//! record carries a `source` attribute of the form `file:line`.
//!
//! The facade macros read the default logger on every call, so a
//! [`set_default_logger`] takes effect for all subsequent calls at once.

use super::{log_level::LogLevel, logger::Logger, options::OutputFormat};
use parking_lot::RwLock;
use std::sync::OnceLock;

fn cell() -> &'static RwLock<Logger> {
    static DEFAULT_LOGGER: OnceLock<RwLock<Logger>> = OnceLock::new();
    DEFAULT_LOGGER.get_or_init(|| RwLock::new(initial_logger()))
}

fn initial_logger() -> Logger {
    Logger::builder()
        .level(LogLevel::Debug)
        .add_source(true)
        .output_format(OutputFormat::Json)
        .decorate_source(true)
        .build()
}

/// The logger currently installed as the process default
pub fn default_logger() -> Logger {
    cell().read().clone()
}

/// Replace the process default logger.
///
/// The previous logger is dropped from the slot as a whole; nothing of its
/// configuration carries over.
pub fn set_default_logger(logger: Logger) {
    *cell().write() = logger;
}
