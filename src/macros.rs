//! Formatting macros that log through the default logger.
//!
//! Two families, one macro per level:
//!
//! - `tracef!`, `debugf!`, `infof!`, `warnf!`, `errorf!`, `fatalf!` format
//!   the message up front and hand it to the default logger.
//! - `trace_contextf!`, `debug_contextf!`, `info_contextf!`,
//!   `warn_contextf!`, `error_contextf!`, `fatal_contextf!` take a
//!   [`Context`](crate::Context) first and check whether the level is
//!   enabled before any formatting happens. Prefer these on hot paths.
//!
//! The fatal macros terminate the process after emitting the record.
//! `fatal_contextf!` returns without exiting when `Fatal` is disabled.
//!
//! # Examples
//!
//! ```
//! use rust_source_logger::{infof, warn_contextf, Context};
//!
//! infof!("user {} login id {}", "alice", 7);
//!
//! let ctx = Context::background();
//! warn_contextf!(&ctx, "cache hit rate {:.2}%", 85.5);
//! ```

/// Log a formatted trace-level message.
#[macro_export]
macro_rules! tracef {
    ($($arg:tt)+) => {
        $crate::facade::logf($crate::LogLevel::Trace, ::std::format!($($arg)+))
    };
}

/// Log a formatted debug-level message.
///
/// ```
/// use rust_source_logger::debugf;
/// debugf!("Counter value: {}", 10);
/// ```
#[macro_export]
macro_rules! debugf {
    ($($arg:tt)+) => {
        $crate::facade::logf($crate::LogLevel::Debug, ::std::format!($($arg)+))
    };
}

/// Log a formatted info-level message.
///
/// ```
/// use rust_source_logger::infof;
/// infof!("Processing {} items", 100);
/// ```
#[macro_export]
macro_rules! infof {
    ($($arg:tt)+) => {
        $crate::facade::logf($crate::LogLevel::Info, ::std::format!($($arg)+))
    };
}

/// Log a formatted warning-level message.
#[macro_export]
macro_rules! warnf {
    ($($arg:tt)+) => {
        $crate::facade::logf($crate::LogLevel::Warn, ::std::format!($($arg)+))
    };
}

/// Log a formatted error-level message.
///
/// ```
/// use rust_source_logger::errorf;
/// errorf!("Error code: {}, message: {}", 500, "Internal error");
/// ```
#[macro_export]
macro_rules! errorf {
    ($($arg:tt)+) => {
        $crate::facade::logf($crate::LogLevel::Error, ::std::format!($($arg)+))
    };
}

/// Log a formatted fatal-level message, then exit the process with status 1.
///
/// ```no_run
/// use rust_source_logger::fatalf;
/// fatalf!("Unable to recover from error: {}", "disk full");
/// ```
#[macro_export]
macro_rules! fatalf {
    ($($arg:tt)+) => {
        $crate::facade::fatalf(::std::format!($($arg)+))
    };
}

/// Log a trace-level message with a context, formatting only when enabled.
#[macro_export]
macro_rules! trace_contextf {
    ($ctx:expr, $($arg:tt)+) => {
        $crate::facade::log_contextf($ctx, $crate::LogLevel::Trace, ::std::format_args!($($arg)+))
    };
}

/// Log a debug-level message with a context, formatting only when enabled.
#[macro_export]
macro_rules! debug_contextf {
    ($ctx:expr, $($arg:tt)+) => {
        $crate::facade::log_contextf($ctx, $crate::LogLevel::Debug, ::std::format_args!($($arg)+))
    };
}

/// Log an info-level message with a context, formatting only when enabled.
///
/// ```
/// use rust_source_logger::{info_contextf, Context, TracingContext};
///
/// let ctx = Context::background().with_tracing(TracingContext::new("4bf92f35", "00f067aa"));
/// info_contextf!(&ctx, "user {} logged in, id {}", "Alice", 123);
/// ```
#[macro_export]
macro_rules! info_contextf {
    ($ctx:expr, $($arg:tt)+) => {
        $crate::facade::log_contextf($ctx, $crate::LogLevel::Info, ::std::format_args!($($arg)+))
    };
}

/// Log a warning-level message with a context, formatting only when enabled.
#[macro_export]
macro_rules! warn_contextf {
    ($ctx:expr, $($arg:tt)+) => {
        $crate::facade::log_contextf($ctx, $crate::LogLevel::Warn, ::std::format_args!($($arg)+))
    };
}

/// Log an error-level message with a context, formatting only when enabled.
#[macro_export]
macro_rules! error_contextf {
    ($ctx:expr, $($arg:tt)+) => {
        $crate::facade::log_contextf($ctx, $crate::LogLevel::Error, ::std::format_args!($($arg)+))
    };
}

/// Log a fatal-level message with a context, then exit the process with status 1.
///
/// Returns without formatting or exiting if `Fatal` is disabled for `$ctx`.
#[macro_export]
macro_rules! fatal_contextf {
    ($ctx:expr, $($arg:tt)+) => {
        $crate::facade::fatal_contextf($ctx, ::std::format_args!($($arg)+))
    };
}
