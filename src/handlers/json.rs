//! JSON handler for structured logging
//!
//! Writes each record as a single-line JSON object (JSONL format),
//! compatible with log aggregation tools like ELK, Loki, etc.
//!
//! Field order is `time`, `level`, the built-in `source` object (only with
//! `add_source` and no `source` attribute), `msg`, tracing ids, scoped
//! attributes, then record attributes. A decorated record's `source` string
//! is a record attribute, so it comes after `msg`. Groups become nested
//! objects. Top-level attributes named `time`, `level` or `msg` go under
//! `fields` so they cannot replace the core fields.

use super::{shared_writer, HandlerCore, SharedWriter};
use crate::core::{
    Attr, Context, FieldValue, Handler, HandlerOptions, LogLevel, Record, Result, LEVEL_KEY,
    MESSAGE_KEY, SOURCE_KEY, TIME_KEY,
};
use serde_json::{Map, Value};
use std::io::Write;
use std::sync::Arc;

/// Object holding attributes whose key collides with a core field
const FIELDS_KEY: &str = "fields";

const RESERVED_KEYS: [&str; 3] = [TIME_KEY, LEVEL_KEY, MESSAGE_KEY];

#[derive(Clone)]
pub struct JsonHandler {
    core: HandlerCore,
}

impl JsonHandler {
    pub fn new<W: Write + Send + 'static>(writer: W, options: HandlerOptions) -> Self {
        Self::with_shared(shared_writer(writer), options)
    }

    /// Handler writing to an already shared destination
    pub fn with_shared(writer: SharedWriter, options: HandlerOptions) -> Self {
        Self {
            core: HandlerCore::new(writer, options),
        }
    }

    /// Handler writing to standard output
    pub fn stdout(options: HandlerOptions) -> Self {
        Self::new(std::io::stdout(), options)
    }

    pub fn options(&self) -> &HandlerOptions {
        &self.core.options
    }

    /// Encode a record to a JSON object without writing it
    pub fn encode(&self, ctx: &Context, record: &Record) -> Result<Map<String, Value>> {
        let mut root = Map::new();

        root.insert(
            TIME_KEY.to_string(),
            self.core.options.timestamp_format.to_json_value(&record.timestamp())?,
        );
        root.insert(
            LEVEL_KEY.to_string(),
            Value::String(record.level().to_str().to_string()),
        );
        if let Some((file, line)) = self.core.builtin_source(record) {
            let mut source = Map::new();
            source.insert("file".to_string(), Value::String(file.to_string()));
            source.insert("line".to_string(), Value::Number(line.into()));
            root.insert(SOURCE_KEY.to_string(), Value::Object(source));
        }
        root.insert(
            MESSAGE_KEY.to_string(),
            Value::String(record.message().to_string()),
        );

        if let Some(tracing) = ctx.tracing() {
            root.insert("trace_id".to_string(), Value::String(tracing.trace_id.clone()));
            root.insert("span_id".to_string(), Value::String(tracing.span_id.clone()));
            if let Some(ref parent) = tracing.parent_span_id {
                root.insert("parent_span_id".to_string(), Value::String(parent.clone()));
            }
        }

        for scoped in &self.core.scoped {
            insert_attr(&mut root, &scoped.groups, &scoped.attr);
        }
        for attr in record.attrs() {
            insert_attr(&mut root, &self.core.groups, attr);
        }

        Ok(root)
    }
}

/// Insert `attr` below the object reached through `groups`.
///
/// Empty groups are skipped entirely and a group attribute with an empty
/// key is inlined into its parent.
fn insert_attr(root: &mut Map<String, Value>, groups: &[String], attr: &Attr) {
    if let FieldValue::Group(children) = &attr.value {
        if children.is_empty() {
            return;
        }
        if attr.key.is_empty() {
            for child in children {
                insert_attr(root, groups, child);
            }
            return;
        }
        let mut path = groups.to_vec();
        path.push(attr.key.clone());
        for child in children {
            insert_attr(root, &path, child);
        }
        return;
    }

    let mut target = root;
    let top = groups.first().unwrap_or(&attr.key);
    if RESERVED_KEYS.contains(&top.as_str()) {
        let Some(fields) = child_object(target, FIELDS_KEY) else {
            return;
        };
        target = fields;
    }
    for group in groups {
        let Some(map) = child_object(target, group) else {
            return;
        };
        target = map;
    }
    target.insert(attr.key.clone(), attr.value.to_json_value());
}

/// Object stored under `key`, replacing any non-object value there
fn child_object<'a>(map: &'a mut Map<String, Value>, key: &str) -> Option<&'a mut Map<String, Value>> {
    let entry = map
        .entry(key.to_string())
        .or_insert(Value::Object(Map::new()));
    if !entry.is_object() {
        *entry = Value::Object(Map::new());
    }
    entry.as_object_mut()
}

impl Handler for JsonHandler {
    fn enabled(&self, ctx: &Context, level: LogLevel) -> bool {
        self.core.enabled(ctx, level)
    }

    fn handle(&self, ctx: &Context, record: &Record) -> Result<()> {
        let json = serde_json::to_string(&Value::Object(self.encode(ctx, record)?))?;
        self.core.write_line(&json)
    }

    fn with_attrs(&self, attrs: Vec<Attr>) -> Arc<dyn Handler> {
        Arc::new(Self {
            core: self.core.with_attrs(attrs),
        })
    }

    fn with_group(&self, name: &str) -> Arc<dyn Handler> {
        Arc::new(Self {
            core: self.core.with_group(name),
        })
    }
}
