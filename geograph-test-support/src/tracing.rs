//! Recording layer for asserting spans and events in tests.

use std::{
    collections::HashMap,
    fmt::{self, Write as _},
    sync::{Arc, Mutex, MutexGuard, PoisonError},
};

use tracing::{
    Event, Level, Subscriber,
    field::{Field, Visit},
    span::{Attributes, Id, Record},
};
use tracing_subscriber::{Layer, layer::Context, registry::LookupSpan};

/// Field name to rendered value.
pub type Fields = HashMap<String, String>;

/// Layer that keeps every closed span and emitted event for later assertions.
///
/// Clones share storage, so one clone can be installed in a subscriber while
/// the test keeps another to inspect.
///
/// # Examples
/// ```
/// use geograph_test_support::tracing::RecordingLayer;
/// use tracing_subscriber::layer::SubscriberExt;
///
/// let layer = RecordingLayer::default();
/// let subscriber = tracing_subscriber::registry().with(layer.clone());
/// tracing::subscriber::with_default(subscriber, || {
///     let _span = tracing::info_span!("work", items = 3).entered();
///     tracing::info!("done");
/// });
/// assert_eq!(layer.span("work").map(|s| s.fields["items"].clone()), Some("3".into()));
/// assert!(layer.has_message("done"));
/// ```
#[derive(Clone, Default)]
pub struct RecordingLayer {
    store: Arc<Mutex<Store>>,
}

#[derive(Default)]
struct Store {
    spans: Vec<SpanRecord>,
    events: Vec<EventRecord>,
}

/// A closed span with the fields recorded over its lifetime.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SpanRecord {
    /// Span name from the callsite metadata.
    pub name: String,
    /// Fields set at creation or recorded later.
    pub fields: Fields,
}

/// An emitted event.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct EventRecord {
    /// Event level.
    pub level: Level,
    /// Event target, usually the emitting module path.
    pub target: String,
    /// Event fields, including `message`.
    pub fields: Fields,
}

impl EventRecord {
    /// The event's `message` field, if any.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.fields.get("message").map(String::as_str)
    }
}

impl RecordingLayer {
    fn lock(&self) -> MutexGuard<'_, Store> {
        self.store.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Closed spans in completion order.
    #[must_use]
    pub fn spans(&self) -> Vec<SpanRecord> {
        self.lock().spans.clone()
    }

    /// Events in emission order.
    #[must_use]
    pub fn events(&self) -> Vec<EventRecord> {
        self.lock().events.clone()
    }

    /// The first closed span called `name`.
    #[must_use]
    pub fn span(&self, name: &str) -> Option<SpanRecord> {
        self.lock().spans.iter().find(|span| span.name == name).cloned()
    }

    /// Whether any event carried exactly `message`.
    #[must_use]
    pub fn has_message(&self, message: &str) -> bool {
        self.lock()
            .events
            .iter()
            .any(|event| event.message() == Some(message))
    }

    /// Events at `level`.
    #[must_use]
    pub fn events_at(&self, level: Level) -> Vec<EventRecord> {
        self.lock()
            .events
            .iter()
            .filter(|event| event.level == level)
            .cloned()
            .collect()
    }
}

struct OpenSpan(SpanRecord);

impl<S> Layer<S> for RecordingLayer
where
    S: Subscriber + for<'span> LookupSpan<'span>,
{
    fn on_new_span(&self, attrs: &Attributes<'_>, id: &Id, ctx: Context<'_, S>) {
        let Some(span) = ctx.span(id) else {
            return;
        };
        let mut record = SpanRecord {
            name: attrs.metadata().name().to_owned(),
            fields: Fields::new(),
        };
        attrs.record(&mut FieldVisitor(&mut record.fields));
        span.extensions_mut().insert(OpenSpan(record));
    }

    fn on_record(&self, id: &Id, values: &Record<'_>, ctx: Context<'_, S>) {
        let Some(span) = ctx.span(id) else {
            return;
        };
        if let Some(OpenSpan(record)) = span.extensions_mut().get_mut::<OpenSpan>() {
            values.record(&mut FieldVisitor(&mut record.fields));
        }
    }

    fn on_close(&self, id: Id, ctx: Context<'_, S>) {
        let Some(span) = ctx.span(&id) else {
            return;
        };
        if let Some(OpenSpan(record)) = span.extensions_mut().remove::<OpenSpan>() {
            self.lock().spans.push(record);
        }
    }

    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut fields = Fields::new();
        event.record(&mut FieldVisitor(&mut fields));
        let metadata = event.metadata();
        self.lock().events.push(EventRecord {
            level: *metadata.level(),
            target: metadata.target().to_owned(),
            fields,
        });
    }
}

struct FieldVisitor<'a>(&'a mut Fields);

impl FieldVisitor<'_> {
    fn put(&mut self, field: &Field, value: String) {
        self.0.insert(field.name().to_owned(), value);
    }
}

impl Visit for FieldVisitor<'_> {
    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        self.put(field, format!("{value:?}"));
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        self.put(field, value.to_owned());
    }

    fn record_bytes(&mut self, field: &Field, value: &[u8]) {
        let mut hex = String::with_capacity(value.len() * 2);
        for byte in value {
            let _ = write!(hex, "{byte:02x}");
        }
        self.put(field, hex);
    }

    fn record_error(&mut self, field: &Field, value: &(dyn std::error::Error + 'static)) {
        self.put(field, value.to_string());
    }

    fn record_bool(&mut self, field: &Field, value: bool) {
        self.put(field, value.to_string());
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        self.put(field, value.to_string());
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        self.put(field, value.to_string());
    }

    fn record_f64(&mut self, field: &Field, value: f64) {
        self.put(field, value.to_string());
    }
}
