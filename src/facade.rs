//! Functions behind the formatting macros.
//!
//! These are public so the exported macros can reach them, but application
//! code should use the macros (`infof!`, `warn_contextf!`, `fatalf!`, ...):
//! they capture the call site and format the message.
//!
//! Every function reads [`default_logger`] afresh, so swapping the default
//! logger affects the very next call. Handler errors are discarded here;
//! use [`Logger::log`](crate::Logger::log) directly to observe them.

use crate::core::{default_logger, Context, LogLevel};
use std::fmt;

/// Exit status used by the fatal entry points
pub const FATAL_EXIT_CODE: i32 = 1;

/// Emit an already formatted message through the default logger
#[track_caller]
pub fn logf(level: LogLevel, message: String) {
    let _ = default_logger().log(&Context::background(), level, message);
}

/// Emit through the default logger, formatting only if `level` is enabled
#[track_caller]
pub fn log_contextf(ctx: &Context, level: LogLevel, args: fmt::Arguments<'_>) {
    let logger = default_logger();
    if !logger.enabled(ctx, level) {
        return;
    }
    let _ = logger.log(ctx, level, fmt::format(args));
}

/// Emit `message` at `Fatal` and terminate the process.
///
/// The process exits with [`FATAL_EXIT_CODE`] once the handler returns,
/// whether or not the record could be written.
#[track_caller]
pub fn fatalf(message: String) -> ! {
    let result = default_logger().log(&Context::background(), LogLevel::Fatal, message);
    exit_after(result)
}

/// Emit at `Fatal` with a context and terminate the process.
///
/// When the handler reports `Fatal` as disabled this returns without
/// formatting, writing or exiting, like the other context-aware calls.
#[track_caller]
pub fn fatal_contextf(ctx: &Context, args: fmt::Arguments<'_>) {
    let logger = default_logger();
    if !logger.enabled(ctx, LogLevel::Fatal) {
        return;
    }
    let result = logger.log(ctx, LogLevel::Fatal, fmt::format(args));
    exit_after(result)
}

fn exit_after(result: crate::core::Result<()>) -> ! {
    if let Err(e) = result {
        eprintln!("[LOGGER ERROR] Failed to write fatal record: {}", e);
    }
    std::process::exit(FATAL_EXIT_CODE)
}
