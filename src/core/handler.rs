//! Handler trait for record sinks and decorators

use super::{attr::Attr, context::Context, error::Result, log_level::LogLevel, record::Record};
use std::sync::Arc;

/// A sink that accepts finished records.
///
/// `with_attrs` and `with_group` return a new handler; the receiver is left
/// unchanged, so one handler can be shared by many scoped loggers.
pub trait Handler: Send + Sync {
    /// Whether a record at `level` would be handled.
    fn enabled(&self, ctx: &Context, level: LogLevel) -> bool;

    /// Encode and write a single record.
    fn handle(&self, ctx: &Context, record: &Record) -> Result<()>;

    /// Handler that adds `attrs` to every record it handles.
    fn with_attrs(&self, attrs: Vec<Attr>) -> Arc<dyn Handler>;

    /// Handler that qualifies all following attributes with `name`.
    fn with_group(&self, name: &str) -> Arc<dyn Handler>;
}

impl<H: Handler + ?Sized> Handler for Arc<H> {
    #[inline]
    fn enabled(&self, ctx: &Context, level: LogLevel) -> bool {
        (**self).enabled(ctx, level)
    }

    #[inline]
    fn handle(&self, ctx: &Context, record: &Record) -> Result<()> {
        (**self).handle(ctx, record)
    }

    fn with_attrs(&self, attrs: Vec<Attr>) -> Arc<dyn Handler> {
        (**self).with_attrs(attrs)
    }

    fn with_group(&self, name: &str) -> Arc<dyn Handler> {
        (**self).with_group(name)
    }
}

impl<H: Handler + ?Sized> Handler for Box<H> {
    #[inline]
    fn enabled(&self, ctx: &Context, level: LogLevel) -> bool {
        (**self).enabled(ctx, level)
    }

    #[inline]
    fn handle(&self, ctx: &Context, record: &Record) -> Result<()> {
        (**self).handle(ctx, record)
    }

    fn with_attrs(&self, attrs: Vec<Attr>) -> Arc<dyn Handler> {
        (**self).with_attrs(attrs)
    }

    fn with_group(&self, name: &str) -> Arc<dyn Handler> {
        (**self).with_group(name)
    }
}
