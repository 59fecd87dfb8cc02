#![allow(dead_code)]

use std::collections::BTreeMap;
use std::future::Future;
use std::sync::{Arc, Mutex};

use k8s_openapi::api::core::v1::Event;
use operator::{Error, EventSink, Result};
use tracing::field::{Field, Visit};
use tracing::subscriber::DefaultGuard;
use tracing::{Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer};
use tracing_subscriber::prelude::*;
use tracing_subscriber::Registry;

/// One captured log line with its structured fields rendered as strings.
#[derive(Clone, Debug)]
pub struct LogEntry {
    pub level: Level,
    pub fields: BTreeMap<String, String>,
}

impl LogEntry {
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }
}

#[derive(Clone, Default)]
pub struct CapturedLogs(Arc<Mutex<Vec<LogEntry>>>);

impl CapturedLogs {
    /// Install as the default subscriber of the current thread.
    pub fn install() -> (Self, DefaultGuard) {
        let logs = Self::default();
        let guard = tracing::subscriber::set_default(Registry::default().with(logs.clone()));
        (logs, guard)
    }

    pub fn entries(&self) -> Vec<LogEntry> {
        self.0.lock().unwrap().clone()
    }

    pub fn at(&self, level: Level) -> Vec<LogEntry> {
        self.entries().into_iter().filter(|e| e.level == level).collect()
    }
}

#[derive(Default)]
struct FieldVisitor(BTreeMap<String, String>);

impl Visit for FieldVisitor {
    fn record_str(&mut self, field: &Field, value: &str) {
        self.0.insert(field.name().to_string(), value.to_string());
    }

    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        self.0.insert(field.name().to_string(), format!("{value:?}"));
    }
}

impl<S: Subscriber> Layer<S> for CapturedLogs {
    fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
        let mut visitor = FieldVisitor::default();
        event.record(&mut visitor);
        self.0.lock().unwrap().push(LogEntry {
            level: *event.metadata().level(),
            fields: visitor.0,
        });
    }
}

/// Sink that keeps every submitted event and optionally fails each call.
#[derive(Clone, Default)]
pub struct RecordingSink {
    events: Arc<Mutex<Vec<Event>>>,
    failure: Option<String>,
}

impl RecordingSink {
    pub fn failing(message: &str) -> Self {
        Self {
            failure: Some(message.to_string()),
            ..Default::default()
        }
    }

    pub fn events(&self) -> Vec<Event> {
        self.events.lock().unwrap().clone()
    }
}

impl EventSink for RecordingSink {
    fn create(&self, event: &Event) -> impl Future<Output = Result<()>> + Send {
        self.events.lock().unwrap().push(event.clone());
        let res = match &self.failure {
            Some(msg) => Err(Error::OtherError(msg.clone())),
            None => Ok(()),
        };
        async move { res }
    }
}

/// Sink whose submissions never complete.
#[derive(Clone, Default)]
pub struct HangingSink;

impl EventSink for HangingSink {
    fn create(&self, _event: &Event) -> impl Future<Output = Result<()>> + Send {
        std::future::pending()
    }
}
