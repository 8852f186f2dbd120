//! # Rust Source Logger
//!
//! A structured logging facade over pluggable handlers, with call-site
//! source rewriting.
//!
//! ## Features
//!
//! - **Levels**: `Trace` through `Fatal` on a fixed integer scale
//! - **Handlers**: JSON and text sinks, or your own [`Handler`]
//! - **Source rewriting**: [`SourceHandler`] stamps every record with the
//!   `file:line` it was logged from, through any chain of scoped loggers
//! - **Formatting macros**: `infof!`, `error_contextf!`, `fatalf!`, ... over a
//!   swappable process-wide default logger

pub mod core;
pub mod facade;
pub mod handlers;
pub mod macros;

pub mod prelude {
    pub use crate::core::{
        default_logger, set_default_logger, Attr, Context, FieldValue, Handler, HandlerOptions,
        LogLevel, Logger, LoggerBuilder, LoggerError, OutputFormat, Record, Result,
        TimestampFormat, TracingContext, SOURCE_KEY,
    };
    pub use crate::handlers::{JsonHandler, SourceHandler, TextHandler};
}

pub use crate::core::{
    default_logger, enabled, set_default_logger, Attr, Context, FieldValue, Handler,
    HandlerOptions, LogLevel, Logger, LoggerBuilder, LoggerError, OutputFormat, Record, Result,
    TimestampFormat, TracingContext, LEVEL_STEP, SOURCE_KEY,
};
pub use facade::FATAL_EXIT_CODE;
pub use handlers::{format_source, JsonHandler, SourceHandler, TextHandler};
