//! Recorded log invocations.
//!
//! # Responsibilities
//! - Represent one recorded log call (level, target, rendered message)
//! - Render an event's message and structured fields into a single string
//!
//! # Design Decisions
//! - The rendering is the message followed by `key=value` pairs, so
//!   substring expectations can target structured fields as well
//! - An error value recorded on the event is kept separately in addition
//!   to appearing in the rendering
//! - Records are immutable once captured

use std::fmt;

use tracing::field::{Field, Visit};
use tracing::{Event, Level};

/// One recorded log invocation.
#[derive(Debug, Clone)]
pub struct LogRecord {
    /// Severity level of the event.
    pub level: Level,
    /// Event target (module path unless overridden at the call site).
    pub target: String,
    /// The message followed by structured fields as space-separated
    /// `key=value` pairs.
    pub rendered: String,
    /// Display rendering of an error value attached to the event, if any.
    pub error: Option<String>,
}

impl LogRecord {
    /// Captures an event into an immutable record.
    pub(crate) fn from_event(event: &Event<'_>) -> Self {
        let mut visitor = RenderVisitor::default();
        event.record(&mut visitor);
        let error = visitor.error.take();
        Self {
            level: *event.metadata().level(),
            target: event.metadata().target().to_string(),
            rendered: visitor.into_rendered(),
            error,
        }
    }
}

/// Renders an event's fields into one line: the `message` field first,
/// then every other field as `key=value`.
#[derive(Default)]
struct RenderVisitor {
    message: Option<String>,
    fields: String,
    error: Option<String>,
}

impl RenderVisitor {
    fn push_field(&mut self, name: &str, value: &str) {
        if !self.fields.is_empty() {
            self.fields.push(' ');
        }
        self.fields.push_str(name);
        self.fields.push('=');
        self.fields.push_str(value);
    }

    fn into_rendered(self) -> String {
        match self.message {
            Some(mut message) => {
                if !self.fields.is_empty() {
                    message.push(' ');
                    message.push_str(&self.fields);
                }
                message
            }
            None => self.fields,
        }
    }
}

impl Visit for RenderVisitor {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.message = Some(value.to_string());
        } else {
            self.push_field(field.name(), value);
        }
    }

    fn record_error(&mut self, field: &Field, value: &(dyn std::error::Error + 'static)) {
        let text = value.to_string();
        self.push_field(field.name(), &text);
        self.error = Some(text);
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            self.message = Some(format!("{value:?}"));
        } else {
            self.push_field(field.name(), &format!("{value:?}"));
        }
    }
}
