//! In-memory `tracing` capture for test assertions.
//!
//! Tests install a [`CaptureLayer`] on a throwaway subscriber, run the code
//! under test, and then assert on the spans and events the layer retained.
//! Field values are stored as strings, rendered the same way regardless of
//! the type they were recorded with.

use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, Mutex};

use tracing::field::{Field, Visit};
use tracing::span::{Attributes, Id, Record};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::Layer;
use tracing_subscriber::layer::Context;
use tracing_subscriber::registry::LookupSpan;

/// Layer retaining every closed span and emitted event for later assertions.
///
/// Clones share the same backing store, so a test can hand one clone to the
/// subscriber and keep another for querying.
///
/// # Examples
/// ```
/// use bosk_test_support::capture::CaptureLayer;
///
/// let layer = CaptureLayer::default();
/// assert!(layer.span("mst.run").is_none());
/// ```
#[derive(Clone, Default)]
pub struct CaptureLayer {
    store: Arc<Mutex<Store>>,
}

#[derive(Default)]
struct Store {
    spans: Vec<ClosedSpan>,
    events: Vec<CapturedEvent>,
}

impl CaptureLayer {
    /// Returns the first closed span with the given name, if any.
    #[must_use]
    pub fn span(&self, name: &str) -> Option<ClosedSpan> {
        self.store
            .lock()
            .expect("capture store poisoned")
            .spans
            .iter()
            .find(|span| span.name == name)
            .cloned()
    }

    /// Returns every closed span in completion order.
    #[must_use]
    pub fn spans(&self) -> Vec<ClosedSpan> {
        self.store
            .lock()
            .expect("capture store poisoned")
            .spans
            .clone()
    }

    /// Returns every captured event in emission order.
    #[must_use]
    pub fn events(&self) -> Vec<CapturedEvent> {
        self.store
            .lock()
            .expect("capture store poisoned")
            .events
            .clone()
    }
}

/// A span that has closed, with the fields recorded over its lifetime.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClosedSpan {
    /// Name from the span's static metadata.
    pub name: String,
    /// Field values recorded at creation or later via `Span::record`.
    pub fields: HashMap<String, String>,
}

impl ClosedSpan {
    /// Returns the recorded value of `name`, if the span carries it.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }
}

/// An event the layer observed, with its level, target and fields.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CapturedEvent {
    /// Severity the event was emitted at.
    pub level: Level,
    /// Module path or explicit target supplied at the emit site.
    pub target: String,
    /// Field values, including the rendered `message`.
    pub fields: HashMap<String, String>,
}

impl CapturedEvent {
    /// Returns the recorded value of `name`, if the event carries it.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    /// Returns the rendered `message` field, if present.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.field("message")
    }
}

impl<S> Layer<S> for CaptureLayer
where
    S: Subscriber + for<'span> LookupSpan<'span>,
{
    fn on_new_span(&self, attrs: &Attributes<'_>, id: &Id, ctx: Context<'_, S>) {
        let Some(span) = ctx.span(id) else { return };
        let mut fields = FieldMap::default();
        attrs.record(&mut fields);
        span.extensions_mut().insert(fields);
    }

    fn on_record(&self, id: &Id, values: &Record<'_>, ctx: Context<'_, S>) {
        let Some(span) = ctx.span(id) else { return };
        let mut extensions = span.extensions_mut();
        if let Some(fields) = extensions.get_mut::<FieldMap>() {
            values.record(fields);
        }
    }

    fn on_close(&self, id: Id, ctx: Context<'_, S>) {
        let Some(span) = ctx.span(&id) else { return };
        let Some(fields) = span.extensions_mut().remove::<FieldMap>() else {
            return;
        };
        self.store
            .lock()
            .expect("capture store poisoned")
            .spans
            .push(ClosedSpan {
                name: span.name().to_owned(),
                fields: fields.0,
            });
    }

    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut fields = FieldMap::default();
        event.record(&mut fields);
        let metadata = event.metadata();
        self.store
            .lock()
            .expect("capture store poisoned")
            .events
            .push(CapturedEvent {
                level: *metadata.level(),
                target: metadata.target().to_owned(),
                fields: fields.0,
            });
    }
}

/// Renders each recorded value to a string. Primitives go through
/// `Display`; everything else falls back to its `Debug` output.
#[derive(Default)]
struct FieldMap(HashMap<String, String>);

impl FieldMap {
    fn put(&mut self, field: &Field, value: impl fmt::Display) {
        self.0.insert(field.name().to_owned(), value.to_string());
    }
}

impl Visit for FieldMap {
    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        self.0.insert(field.name().to_owned(), format!("{value:?}"));
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        self.put(field, value);
    }

    fn record_bool(&mut self, field: &Field, value: bool) {
        self.put(field, value);
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        self.put(field, value);
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        self.put(field, value);
    }

    fn record_f64(&mut self, field: &Field, value: f64) {
        self.put(field, value);
    }
}
