//! Shared helpers for integration tests

#![allow(dead_code)]

use parking_lot::Mutex;
use rust_source_logger::prelude::*;
use std::sync::Arc;

/// Handler that keeps every record it receives.
///
/// Attributes from `with_attrs` are prepended to each record and groups are
/// remembered, so tests can see exactly what a real sink would be given.
#[derive(Clone)]
pub struct CaptureHandler {
    pub level: LogLevel,
    pub records: Arc<Mutex<Vec<Record>>>,
    pub scoped: Vec<Attr>,
    pub groups: Vec<String>,
}

impl CaptureHandler {
    pub fn new(level: LogLevel) -> Self {
        Self {
            level,
            records: Arc::new(Mutex::new(Vec::new())),
            scoped: Vec::new(),
            groups: Vec::new(),
        }
    }

    pub fn records(&self) -> Vec<Record> {
        self.records.lock().clone()
    }
}

impl Handler for CaptureHandler {
    fn enabled(&self, _ctx: &Context, level: LogLevel) -> bool {
        level >= self.level
    }

    fn handle(&self, _ctx: &Context, record: &Record) -> rust_source_logger::Result<()> {
        let attrs = self.scoped.iter().chain(record.attrs()).cloned().collect();
        self.records.lock().push(record.rebuild(attrs));
        Ok(())
    }

    fn with_attrs(&self, attrs: Vec<Attr>) -> Arc<dyn Handler> {
        let mut next = self.clone();
        next.scoped.extend(attrs);
        Arc::new(next)
    }

    fn with_group(&self, name: &str) -> Arc<dyn Handler> {
        let mut next = self.clone();
        next.groups.push(name.to_string());
        Arc::new(next)
    }
}

/// Number of `source` attributes on a record
pub fn source_count(record: &Record) -> usize {
    record.attrs().iter().filter(|a| a.key == SOURCE_KEY).count()
}

/// Serializes tests that swap the process default logger
pub static DEFAULT_LOGGER_LOCK: Mutex<()> = parking_lot::const_mutex(());
