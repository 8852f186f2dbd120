//! Source-rewriting handler decorator
//!
//! [`SourceHandler`] wraps any [`Handler`] and replaces the `source`
//! attribute of every record with the record's captured call site rendered
//! as `file:line`. Everything else is forwarded untouched.
//!
//! Scoping calls (`with_attrs`, `with_group`) are forwarded to the inner
//! handler and the result is wrapped again, so a logger derived through any
//! number of scopes still rewrites the source of every record it emits.

use crate::core::{Attr, Context, FieldValue, Handler, LogLevel, Record, Result, SOURCE_KEY};
use std::sync::Arc;

pub struct SourceHandler<H = Arc<dyn Handler>> {
    inner: H,
}

impl<H: Handler> SourceHandler<H> {
    pub fn new(inner: H) -> Self {
        Self { inner }
    }

    pub fn inner(&self) -> &H {
        &self.inner
    }

    pub fn into_inner(self) -> H {
        self.inner
    }
}

/// Render a call site the way [`SourceHandler`] writes it, full path kept
pub fn format_source(file: &str, line: u32) -> String {
    format!("{}:{}", file, line)
}

/// Attributes of `record` with exactly one `source` attribute valued `source`.
///
/// An existing `source` attribute keeps its position; any further duplicates
/// are dropped. Without one, the attribute is appended.
fn rewrite_source(attrs: &[Attr], source: String) -> Vec<Attr> {
    let mut rewritten = Vec::with_capacity(attrs.len() + 1);
    let mut replacement = Some(source);
    let mut found = false;

    for attr in attrs {
        if attr.is_source() {
            if let Some(value) = replacement.take() {
                rewritten.push(Attr::new(SOURCE_KEY, FieldValue::String(value)));
            }
            found = true;
        } else {
            rewritten.push(attr.clone());
        }
    }

    if !found {
        if let Some(value) = replacement {
            rewritten.push(Attr::new(SOURCE_KEY, FieldValue::String(value)));
        }
    }

    rewritten
}

impl<H: Handler> Handler for SourceHandler<H> {
    #[inline]
    fn enabled(&self, ctx: &Context, level: LogLevel) -> bool {
        self.inner.enabled(ctx, level)
    }

    fn handle(&self, ctx: &Context, record: &Record) -> Result<()> {
        let Some((file, line)) = record.source() else {
            return self.inner.handle(ctx, record);
        };

        let attrs = rewrite_source(record.attrs(), format_source(file, line));
        self.inner.handle(ctx, &record.rebuild(attrs))
    }

    fn with_attrs(&self, attrs: Vec<Attr>) -> Arc<dyn Handler> {
        Arc::new(SourceHandler::new(self.inner.with_attrs(attrs)))
    }

    fn with_group(&self, name: &str) -> Arc<dyn Handler> {
        Arc::new(SourceHandler::new(self.inner.with_group(name)))
    }
}
