//! Text handler writing `key=value` lines

use super::{shared_writer, HandlerCore, SharedWriter};
use crate::core::{
    Attr, Context, FieldValue, Handler, HandlerOptions, LogLevel, Record, Result, LEVEL_KEY,
    MESSAGE_KEY, SOURCE_KEY, TIME_KEY,
};
#[cfg(feature = "console")]
use colored::Colorize;
use std::borrow::Cow;
use std::fmt::Write as _;
use std::io::Write;
use std::sync::Arc;

/// Handler producing one logfmt-style line per record
///
/// ```text
/// time=2025-01-08T10:30:45.123Z level=INFO source=src/main.rs:12 msg="server started" port=8080
/// ```
#[derive(Clone)]
pub struct TextHandler {
    core: HandlerCore,
    use_colors: bool,
}

impl TextHandler {
    pub fn new<W: Write + Send + 'static>(writer: W, options: HandlerOptions) -> Self {
        Self::with_shared(shared_writer(writer), options)
    }

    pub fn with_shared(writer: SharedWriter, options: HandlerOptions) -> Self {
        Self {
            core: HandlerCore::new(writer, options),
            use_colors: false,
        }
    }

    /// Handler writing to standard error
    pub fn stderr(options: HandlerOptions) -> Self {
        Self::new(std::io::stderr(), options)
    }

    /// Colour the level name with ANSI escapes (needs the `console` feature)
    #[must_use]
    pub fn with_colors(mut self, use_colors: bool) -> Self {
        self.use_colors = use_colors;
        self
    }

    pub fn options(&self) -> &HandlerOptions {
        &self.core.options
    }

    /// Format a record as a single line without writing it
    pub fn format(&self, ctx: &Context, record: &Record) -> Result<String> {
        let mut line = String::with_capacity(128);
        let timestamp = self.core.options.timestamp_format.format(&record.timestamp())?;

        push_pair(&mut line, TIME_KEY, &timestamp);
        line.push(' ');
        let _ = write!(line, "{}={}", LEVEL_KEY, self.level_str(record.level()));
        if let Some((file, line_no)) = self.core.builtin_source(record) {
            line.push(' ');
            push_pair(&mut line, SOURCE_KEY, &format!("{}:{}", file, line_no));
        }
        line.push(' ');
        push_pair(&mut line, MESSAGE_KEY, record.message());

        if let Some(tracing) = ctx.tracing() {
            line.push(' ');
            push_pair(&mut line, "trace_id", &tracing.trace_id);
            line.push(' ');
            push_pair(&mut line, "span_id", &tracing.span_id);
        }

        for scoped in &self.core.scoped {
            push_attr(&mut line, &prefix(&scoped.groups), &scoped.attr);
        }
        let record_prefix = prefix(&self.core.groups);
        for attr in record.attrs() {
            push_attr(&mut line, &record_prefix, attr);
        }

        Ok(line)
    }

    #[cfg(feature = "console")]
    fn level_str(&self, level: LogLevel) -> String {
        if self.use_colors {
            level.to_str().color(level.color_code()).to_string()
        } else {
            level.to_str().to_string()
        }
    }

    #[cfg(not(feature = "console"))]
    fn level_str(&self, level: LogLevel) -> String {
        level.to_str().to_string()
    }
}

fn is_special(c: char) -> bool {
    c.is_whitespace() || c == '"' || c == '=' || c.is_control()
}

/// Keys are written bare, so anything that could end the pair or the line
/// becomes `_`
fn sanitize_key(key: &str) -> Cow<'_, str> {
    if key.chars().any(is_special) {
        Cow::Owned(key.chars().map(|c| if is_special(c) { '_' } else { c }).collect())
    } else {
        Cow::Borrowed(key)
    }
}

/// Values with special characters are quoted with `{:?}`, which also escapes
/// control characters, so one record never spans several lines
fn push_pair(line: &mut String, key: &str, value: &str) {
    let key = sanitize_key(key);
    if value.is_empty() || value.chars().any(is_special) {
        let _ = write!(line, "{}={:?}", key, value);
    } else {
        let _ = write!(line, "{}={}", key, value);
    }
}

fn prefix(groups: &[String]) -> String {
    groups.iter().fold(String::new(), |mut acc, group| {
        acc.push_str(group);
        acc.push('.');
        acc
    })
}

fn push_attr(line: &mut String, prefix: &str, attr: &Attr) {
    match &attr.value {
        FieldValue::Group(children) => {
            let nested = if attr.key.is_empty() {
                prefix.to_string()
            } else {
                format!("{}{}.", prefix, attr.key)
            };
            for child in children {
                push_attr(line, &nested, child);
            }
        }
        value => {
            line.push(' ');
            push_pair(line, &format!("{}{}", prefix, attr.key), &value.to_string());
        }
    }
}

impl Handler for TextHandler {
    fn enabled(&self, ctx: &Context, level: LogLevel) -> bool {
        self.core.enabled(ctx, level)
    }

    fn handle(&self, ctx: &Context, record: &Record) -> Result<()> {
        self.core.write_line(&self.format(ctx, record)?)
    }

    fn with_attrs(&self, attrs: Vec<Attr>) -> Arc<dyn Handler> {
        Arc::new(Self {
            core: self.core.with_attrs(attrs),
            use_colors: self.use_colors,
        })
    }

    fn with_group(&self, name: &str) -> Arc<dyn Handler> {
        Arc::new(Self {
            core: self.core.with_group(name),
            use_colors: self.use_colors,
        })
    }
}
