//! Logger front end over a [`Handler`] chain

use super::{
    attr::Attr,
    context::Context,
    error::Result,
    handler::Handler,
    log_level::LogLevel,
    options::{HandlerOptions, OutputFormat},
    record::Record,
    timestamp::TimestampFormat,
};
use crate::handlers::{JsonHandler, SourceHandler, TextHandler};
use std::fmt;
use std::io::Write;
use std::sync::Arc;

/// Cheap-to-clone handle that builds records and hands them to a handler.
///
/// Every emitting method is `#[track_caller]`, so the record's location is
/// the line that called the logger, not a line inside this crate.
#[derive(Clone)]
pub struct Logger {
    handler: Arc<dyn Handler>,
}

impl Logger {
    #[must_use]
    pub fn new<H: Handler + 'static>(handler: H) -> Self {
        Self {
            handler: Arc::new(handler),
        }
    }

    #[must_use]
    pub fn from_arc(handler: Arc<dyn Handler>) -> Self {
        Self { handler }
    }

    pub fn handler(&self) -> &Arc<dyn Handler> {
        &self.handler
    }

    /// Whether the handler would accept a record at `level`
    #[inline]
    pub fn enabled(&self, ctx: &Context, level: LogLevel) -> bool {
        self.handler.enabled(ctx, level)
    }

    /// Emit `message` at `level`.
    ///
    /// Returns `Ok(())` without building a record when the level is
    /// disabled. Handler errors are returned as-is.
    #[track_caller]
    pub fn log(&self, ctx: &Context, level: LogLevel, message: impl Into<String>) -> Result<()> {
        self.log_attrs(ctx, level, message, Vec::new())
    }

    /// Emit `message` at `level` with extra attributes
    #[track_caller]
    pub fn log_attrs(
        &self,
        ctx: &Context,
        level: LogLevel,
        message: impl Into<String>,
        attrs: Vec<Attr>,
    ) -> Result<()> {
        if !self.enabled(ctx, level) {
            return Ok(());
        }

        let record = Record::new(level, message).at_caller().with_attrs(attrs);
        self.handler.handle(ctx, &record)
    }

    /// Emit pre-built format arguments, formatting only if `level` is enabled
    #[track_caller]
    pub fn log_fmt(&self, ctx: &Context, level: LogLevel, args: fmt::Arguments<'_>) -> Result<()> {
        if !self.enabled(ctx, level) {
            return Ok(());
        }

        let record = Record::new(level, fmt::format(args)).at_caller();
        self.handler.handle(ctx, &record)
    }

    /// Hand an already built record to the handler, bypassing the level check
    pub fn log_record(&self, ctx: &Context, record: &Record) -> Result<()> {
        self.handler.handle(ctx, record)
    }

    #[inline]
    #[track_caller]
    pub fn trace(&self, message: impl Into<String>) -> Result<()> {
        self.log(&Context::background(), LogLevel::Trace, message)
    }

    #[inline]
    #[track_caller]
    pub fn debug(&self, message: impl Into<String>) -> Result<()> {
        self.log(&Context::background(), LogLevel::Debug, message)
    }

    #[inline]
    #[track_caller]
    pub fn info(&self, message: impl Into<String>) -> Result<()> {
        self.log(&Context::background(), LogLevel::Info, message)
    }

    #[inline]
    #[track_caller]
    pub fn warn(&self, message: impl Into<String>) -> Result<()> {
        self.log(&Context::background(), LogLevel::Warn, message)
    }

    #[inline]
    #[track_caller]
    pub fn error(&self, message: impl Into<String>) -> Result<()> {
        self.log(&Context::background(), LogLevel::Error, message)
    }

    #[inline]
    #[track_caller]
    pub fn trace_context(&self, ctx: &Context, message: impl Into<String>) -> Result<()> {
        self.log(ctx, LogLevel::Trace, message)
    }

    #[inline]
    #[track_caller]
    pub fn debug_context(&self, ctx: &Context, message: impl Into<String>) -> Result<()> {
        self.log(ctx, LogLevel::Debug, message)
    }

    #[inline]
    #[track_caller]
    pub fn info_context(&self, ctx: &Context, message: impl Into<String>) -> Result<()> {
        self.log(ctx, LogLevel::Info, message)
    }

    #[inline]
    #[track_caller]
    pub fn warn_context(&self, ctx: &Context, message: impl Into<String>) -> Result<()> {
        self.log(ctx, LogLevel::Warn, message)
    }

    #[inline]
    #[track_caller]
    pub fn error_context(&self, ctx: &Context, message: impl Into<String>) -> Result<()> {
        self.log(ctx, LogLevel::Error, message)
    }

    /// Logger whose records all carry `attrs`
    #[must_use]
    pub fn with(&self, attrs: Vec<Attr>) -> Self {
        if attrs.is_empty() {
            return self.clone();
        }
        Self::from_arc(self.handler.with_attrs(attrs))
    }

    /// Logger that nests all following attributes under `name`
    #[must_use]
    pub fn with_group(&self, name: &str) -> Self {
        if name.is_empty() {
            return self.clone();
        }
        Self::from_arc(self.handler.with_group(name))
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger").finish_non_exhaustive()
    }
}

/// Builder for constructing a Logger with a fluent API
///
/// # Example
/// ```
/// use rust_source_logger::prelude::*;
///
/// let logger = Logger::builder()
///     .level(LogLevel::Debug)
///     .output_format(OutputFormat::Text)
///     .writer(std::io::sink())
///     .build();
///
/// assert!(logger.enabled(&Context::background(), LogLevel::Debug));
/// ```
pub struct LoggerBuilder {
    options: HandlerOptions,
    output_format: OutputFormat,
    writer: Option<Box<dyn Write + Send>>,
    decorate_source: bool,
}

impl LoggerBuilder {
    /// Create a new builder with default values
    pub fn new() -> Self {
        Self {
            options: HandlerOptions::default(),
            output_format: OutputFormat::default(),
            writer: None,
            decorate_source: true,
        }
    }

    /// Set minimum log level
    #[must_use = "builder methods return a new value"]
    pub fn level(mut self, level: LogLevel) -> Self {
        self.options.level = level;
        self
    }

    /// Ask the handler to emit the call-site location
    #[must_use = "builder methods return a new value"]
    pub fn add_source(mut self, add_source: bool) -> Self {
        self.options.add_source = add_source;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.options.timestamp_format = format;
        self
    }

    /// Replace all handler options at once
    #[must_use = "builder methods return a new value"]
    pub fn options(mut self, options: HandlerOptions) -> Self {
        self.options = options;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn output_format(mut self, format: OutputFormat) -> Self {
        self.output_format = format;
        self
    }

    /// Destination of encoded records. Defaults to standard output.
    #[must_use = "builder methods return a new value"]
    pub fn writer<W: Write + Send + 'static>(mut self, writer: W) -> Self {
        self.writer = Some(Box::new(writer));
        self
    }

    /// Wrap the handler in a [`SourceHandler`] (on by default)
    #[must_use = "builder methods return a new value"]
    pub fn decorate_source(mut self, decorate: bool) -> Self {
        self.decorate_source = decorate;
        self
    }

    /// Build the Logger
    pub fn build(self) -> Logger {
        let writer = self
            .writer
            .unwrap_or_else(|| Box::new(std::io::stdout()));

        let handler: Arc<dyn Handler> = match self.output_format {
            OutputFormat::Json => Arc::new(JsonHandler::new(writer, self.options)),
            OutputFormat::Text => Arc::new(TextHandler::new(writer, self.options)),
        };

        if self.decorate_source {
            Logger::new(SourceHandler::new(handler))
        } else {
            Logger::from_arc(handler)
        }
    }
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl Logger {
    /// Create a builder for Logger
    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }
}
