//! Handler implementations

pub mod json;
pub mod source;
pub mod text;

pub use json::JsonHandler;
pub use source::{format_source, SourceHandler};
pub use text::TextHandler;

// Re-export the trait for convenience
pub use crate::core::Handler;

use crate::core::{Attr, Context, HandlerOptions, LogLevel, Record, Result, SOURCE_KEY};
use parking_lot::Mutex;
use std::io::Write;
use std::sync::Arc;

/// Destination shared by a handler and every handler derived from it
pub type SharedWriter = Arc<Mutex<Box<dyn Write + Send>>>;

pub(crate) fn shared_writer<W: Write + Send + 'static>(writer: W) -> SharedWriter {
    Arc::new(Mutex::new(Box::new(writer)))
}

/// An attribute added through `with_attrs`, with the groups open at the time
#[derive(Debug, Clone)]
pub(crate) struct ScopedAttr {
    pub groups: Vec<String>,
    pub attr: Attr,
}

/// State common to the JSON and text handlers
#[derive(Clone)]
pub(crate) struct HandlerCore {
    writer: SharedWriter,
    pub options: HandlerOptions,
    pub scoped: Vec<ScopedAttr>,
    pub groups: Vec<String>,
}

impl HandlerCore {
    pub fn new(writer: SharedWriter, options: HandlerOptions) -> Self {
        Self {
            writer,
            options,
            scoped: Vec::new(),
            groups: Vec::new(),
        }
    }

    pub fn enabled(&self, _ctx: &Context, level: LogLevel) -> bool {
        level.enabled(self.options.level)
    }

    pub fn with_attrs(&self, attrs: Vec<Attr>) -> Self {
        let mut next = self.clone();
        next.scoped.extend(attrs.into_iter().map(|attr| ScopedAttr {
            groups: self.groups.clone(),
            attr,
        }));
        next
    }

    pub fn with_group(&self, name: &str) -> Self {
        let mut next = self.clone();
        if !name.is_empty() {
            next.groups.push(name.to_string());
        }
        next
    }

    /// Location the handler should emit itself, if any.
    ///
    /// Only when `add_source` is set and the record has no `source`
    /// attribute of its own, so a decorated record is never written twice.
    pub fn builtin_source(&self, record: &Record) -> Option<(&'static str, u32)> {
        if !self.options.add_source || record.attr(SOURCE_KEY).is_some() {
            return None;
        }
        record.source()
    }

    /// Write one encoded record and flush it to the destination
    pub fn write_line(&self, line: &str) -> Result<()> {
        let mut writer = self.writer.lock();
        writeln!(writer, "{}", line)?;
        writer.flush()?;
        Ok(())
    }
}
