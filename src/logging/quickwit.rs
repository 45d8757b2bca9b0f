use crate::logging::consts::{
    DEFAULT_FLUSH_INTERVAL, DEFAULT_LOGGING_BATCH_SIZE, QUICKWIT_LOGGING_CHANNEL_CAPACITY,
};
use reqwest::Client;
use serde::Serialize;
use std::collections::HashMap;
use std::io;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time::MissedTickBehavior;
use tracing::field::{Field, Visit};
use tracing_core::Event;
use tracing_core::Subscriber;
use tracing_subscriber::layer::Context as TracingContext;
use tracing_subscriber::Layer;
use url::Url;

pub(crate) type LogRecord = serde_json::Map<String, serde_json::Value>;

pub struct QuickwitLoggingLayerBuilder {
    quickwit_url: Url,
    target_field: String,
    field_to_index: HashMap<String, String>,
    batch_size: usize,
    flush_interval: Duration,
}

impl QuickwitLoggingLayerBuilder {
    pub fn new(quickwit_url: Url) -> Self {
        Self {
            quickwit_url,
            target_field: String::new(),
            field_to_index: HashMap::new(),
            batch_size: DEFAULT_LOGGING_BATCH_SIZE,
            flush_interval: DEFAULT_FLUSH_INTERVAL,
        }
    }

    pub fn marker_field(mut self, field: &str) -> Self {
        self.target_field = field.to_string();
        self
    }

    pub fn map_marker_to_index(mut self, field_value: &str, index_id: &str) -> Self {
        self.field_to_index
            .insert(field_value.to_string(), index_id.to_string());
        self
    }

    pub fn with_batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = batch_size.max(1);
        self
    }

    /// Spawns the shipping task, so this must run inside a Tokio runtime.
    pub fn build(self) -> QuickwitLoggingLayer {
        let (sender, receiver) = mpsc::channel(QUICKWIT_LOGGING_CHANNEL_CAPACITY);
        let task = QuickwitLoggingTask {
            http_client: Client::new(),
            quickwit_url: self.quickwit_url,
            receiver,
            batch_size: self.batch_size,
            flush_interval: self.flush_interval,
            buffers: HashMap::new(),
        };
        tokio::spawn(task.run());
        QuickwitLoggingLayer::new(self.target_field, self.field_to_index, sender)
    }
}

/// Forwards events whose marker field maps to an index; everything else is ignored.
pub struct QuickwitLoggingLayer {
    sender: mpsc::Sender<QuickwitLogMessage>,
    target_field: String,
    field_to_index: HashMap<String, String>,
}

impl QuickwitLoggingLayer {
    pub(crate) fn new(
        target_field: String,
        field_to_index: HashMap<String, String>,
        sender: mpsc::Sender<QuickwitLogMessage>,
    ) -> Self {
        Self {
            sender,
            target_field,
            field_to_index,
        }
    }

    fn index_for_event(&self, event: &Event<'_>) -> Option<String> {
        let mut visitor = TargetFieldVisitor::new(&self.target_field);
        event.record(&mut visitor);
        visitor
            .target_value
            .and_then(|value| self.field_to_index.get(&value).cloned())
    }
}

impl<S: Subscriber> Layer<S> for QuickwitLoggingLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: TracingContext<'_, S>) {
        if let Some(index_id) = self.index_for_event(event) {
            let mut visitor = LogVisitor::new();
            event.record(&mut visitor);
            // A full channel drops the record instead of blocking the caller.
            let _ = self.sender.try_send(QuickwitLogMessage {
                index_id,
                log: visitor.log,
            });
        }
    }
}

struct QuickwitLoggingTask {
    http_client: Client,
    quickwit_url: Url,
    receiver: mpsc::Receiver<QuickwitLogMessage>,
    batch_size: usize,
    flush_interval: Duration,
    buffers: HashMap<String, Vec<LogRecord>>,
}

impl QuickwitLoggingTask {
    async fn run(mut self) {
        let mut ticker = tokio::time::interval(self.flush_interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        loop {
            tokio::select! {
                message = self.receiver.recv() => match message {
                    Some(QuickwitLogMessage { index_id, log }) => {
                        let batch_is_full = {
                            let buffer = self.buffers.entry(index_id.clone()).or_default();
                            buffer.push(log);
                            buffer.len() >= self.batch_size
                        };
                        if batch_is_full {
                            self.flush(&index_id).await;
                        }
                    }
                    None => break,
                },
                _ = ticker.tick() => self.flush_all().await,
            }
        }
        self.flush_all().await;
    }

    async fn flush_all(&mut self) {
        let index_ids = self.buffers.keys().cloned().collect::<Vec<_>>();
        for index_id in index_ids {
            self.flush(&index_id).await;
        }
    }

    async fn flush(&mut self, index_id: &str) {
        let logs = match self.buffers.get_mut(index_id) {
            Some(buffer) if !buffer.is_empty() => std::mem::take(buffer),
            _ => return,
        };
        let body = match to_ndjson(&logs) {
            Ok(body) => body,
            Err(err) => {
                eprintln!("Failed to serialize {} logs for `{index_id}`: {err}", logs.len());
                return;
            }
        };
        let ingest_url = match self
            .quickwit_url
            .join(&format!("api/v1/{index_id}/ingest"))
        {
            Ok(url) => url,
            Err(err) => {
                eprintln!("Invalid Quickwit ingest URL for `{index_id}`: {err}");
                return;
            }
        };
        let response = self
            .http_client
            .post(ingest_url)
            .body(body)
            .send()
            .await
            .and_then(|response| response.error_for_status());
        if let Err(err) = response {
            eprintln!("Failed to ship {} logs to `{index_id}`: {err}", logs.len());
        }
    }
}

struct TargetFieldVisitor {
    target_field: String,
    target_value: Option<String>,
}

impl TargetFieldVisitor {
    pub fn new(target_field: &str) -> Self {
        Self {
            target_field: target_field.to_string(),
            target_value: None,
        }
    }
}

impl Visit for TargetFieldVisitor {
    fn record_debug(&mut self, _field: &Field, _value: &dyn std::fmt::Debug) {}

    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == self.target_field {
            self.target_value = Some(value.to_string());
        }
    }
}

struct LogVisitor {
    log: LogRecord,
}

impl LogVisitor {
    pub fn new() -> Self {
        Self {
            log: serde_json::Map::new(),
        }
    }
}

impl Visit for LogVisitor {
    fn record_str(&mut self, field: &Field, value: &str) {
        self.log.insert(field.name().to_string(), value.into());
    }

    fn record_bool(&mut self, field: &Field, value: bool) {
        self.log.insert(field.name().to_string(), value.into());
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        self.log.insert(field.name().to_string(), value.into());
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        self.log.insert(field.name().to_string(), value.into());
    }

    fn record_f64(&mut self, field: &Field, value: f64) {
        self.log.insert(field.name().to_string(), value.into());
    }

    // Quickwit stores unsigned integers as u64.
    fn record_u128(&mut self, field: &Field, value: u128) {
        let value = u64::try_from(value).unwrap_or(u64::MAX);
        self.log.insert(field.name().to_string(), value.into());
    }

    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        self.log
            .insert(field.name().to_string(), format!("{:?}", value).into());
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct QuickwitLogMessage {
    pub index_id: String,
    pub log: LogRecord,
}

pub(crate) fn to_ndjson(logs: &[LogRecord]) -> io::Result<Vec<u8>> {
    let mut body = Vec::new();
    for log in logs {
        serialize_to_ndjson(&mut body, log)?;
    }
    Ok(body)
}

fn serialize_to_ndjson<W, V>(mut writer: W, value: &V) -> io::Result<()>
where
    W: io::Write,
    V: ?Sized + Serialize,
{
    serde_json::to_writer(&mut writer, value)?;
    writer.write_all(b"\n")
}
