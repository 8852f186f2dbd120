//! Request/operation context passed alongside every record
//!
//! The logger never inspects a `Context` itself. It is handed to
//! [`Handler::enabled`](super::Handler::enabled) and
//! [`Handler::handle`](super::Handler::handle) so handlers can pull out
//! whatever they understand, such as distributed tracing identifiers.

use serde::{Deserialize, Serialize};

/// Tracing context for distributed tracing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TracingContext {
    /// Trace ID for request correlation
    pub trace_id: String,

    /// Span ID for this operation
    pub span_id: String,

    /// Parent span ID (if any)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_span_id: Option<String>,
}

impl TracingContext {
    pub fn new(trace_id: impl Into<String>, span_id: impl Into<String>) -> Self {
        Self {
            trace_id: trace_id.into(),
            span_id: span_id.into(),
            parent_span_id: None,
        }
    }

    pub fn with_parent(mut self, parent_span_id: impl Into<String>) -> Self {
        self.parent_span_id = Some(parent_span_id.into());
        self
    }
}

/// Opaque per-call context
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Context {
    tracing: Option<TracingContext>,
}

impl Context {
    /// The empty context, used by the context-free entry points
    pub const fn background() -> Self {
        Self { tracing: None }
    }

    #[must_use]
    pub fn with_tracing(mut self, tracing: TracingContext) -> Self {
        self.tracing = Some(tracing);
        self
    }

    pub fn tracing(&self) -> Option<&TracingContext> {
        self.tracing.as_ref()
    }
}
