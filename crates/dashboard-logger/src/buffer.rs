//! Circular buffer of recent diagnostics.

use std::collections::VecDeque;
use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard};

use chrono::{DateTime, Utc};
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer};

use crate::LoggerError;

/// One captured event
#[derive(Debug, Clone, PartialEq)]
pub struct DiagnosticRecord {
    pub at: DateTime<Utc>,
    pub level: Level,
    pub target: String,
    pub message: String,
    /// Structured fields other than `message`, in emission order
    pub fields: Vec<(String, String)>,
}

impl DiagnosticRecord {
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// `HH:MM:SS LEVEL message key=value ...`
    pub fn display_line(&self) -> String {
        let mut line = format!("{} {} {}", self.at.format("%H:%M:%S"), self.level, self.message);
        for (key, value) in &self.fields {
            line.push_str(&format!(" {}={}", key, value));
        }
        line
    }
}

#[derive(Debug)]
struct Ring {
    records: VecDeque<DiagnosticRecord>,
    capacity: usize,
    dropped: u64,
}

/// Shared handle to the buffer. Clones see the same records.
#[derive(Debug, Clone)]
pub struct DiagnosticLog {
    ring: Arc<Mutex<Ring>>,
}

impl DiagnosticLog {
    pub fn with_capacity(capacity: usize) -> Result<Self, LoggerError> {
        if capacity == 0 {
            return Err(LoggerError::ZeroCapacity);
        }
        Ok(Self {
            ring: Arc::new(Mutex::new(Ring {
                records: VecDeque::with_capacity(capacity),
                capacity,
                dropped: 0,
            })),
        })
    }

    /// Layer feeding this buffer
    pub fn layer(&self) -> RingBufferLayer {
        RingBufferLayer { log: self.clone() }
    }

    fn lock(&self) -> MutexGuard<'_, Ring> {
        // A panic while holding the lock cannot leave the ring half-written
        self.ring.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn push(&self, record: DiagnosticRecord) {
        let mut ring = self.lock();
        if ring.records.len() == ring.capacity {
            ring.records.pop_front();
            ring.dropped += 1;
        }
        ring.records.push_back(record);
    }

    /// Oldest first
    pub fn recent(&self) -> Vec<DiagnosticRecord> {
        self.lock().records.iter().cloned().collect()
    }

    pub fn errors(&self) -> Vec<DiagnosticRecord> {
        self.lock()
            .records
            .iter()
            .filter(|r| r.level == Level::ERROR)
            .cloned()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.lock().records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Records evicted since creation
    pub fn dropped(&self) -> u64 {
        self.lock().dropped
    }

    pub fn clear(&self) {
        self.lock().records.clear();
    }
}

/// `tracing` layer that copies every event into a [`DiagnosticLog`]
#[derive(Debug, Clone)]
pub struct RingBufferLayer {
    log: DiagnosticLog,
}

impl<S: Subscriber> Layer<S> for RingBufferLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut visitor = FieldVisitor::default();
        event.record(&mut visitor);

        let meta = event.metadata();
        self.log.push(DiagnosticRecord {
            at: Utc::now(),
            level: *meta.level(),
            target: meta.target().to_string(),
            message: visitor.message,
            fields: visitor.fields,
        });
    }
}

#[derive(Default)]
struct FieldVisitor {
    message: String,
    fields: Vec<(String, String)>,
}

impl FieldVisitor {
    fn put(&mut self, field: &Field, value: String) {
        if field.name() == "message" {
            self.message = value;
        } else {
            self.fields.push((field.name().to_string(), value));
        }
    }
}

impl Visit for FieldVisitor {
    fn record_str(&mut self, field: &Field, value: &str) {
        self.put(field, value.to_string());
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        self.put(field, format!("{:?}", value));
    }
}
