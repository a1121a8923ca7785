//! Structured event log
//!
//! Diagnostics go through an injectable sink instead of stdout so each build
//! can route them appropriately and tests can assert on what was recorded.

use chrono::{DateTime, Utc};
use std::sync::{Mutex, PoisonError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Info,
    Warn,
    Error,
}

/// One diagnostic event with optional structured fields.
#[derive(Debug, Clone, PartialEq)]
pub struct LogEvent {
    pub at: DateTime<Utc>,
    pub level: LogLevel,
    pub message: String,
    pub fields: Vec<(&'static str, String)>,
}

impl LogEvent {
    pub fn new(level: LogLevel, message: impl Into<String>) -> Self {
        Self {
            at: Utc::now(),
            level,
            message: message.into(),
            fields: Vec::new(),
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(LogLevel::Info, message)
    }

    pub fn warn(message: impl Into<String>) -> Self {
        Self::new(LogLevel::Warn, message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(LogLevel::Error, message)
    }

    pub fn with(mut self, key: &'static str, value: impl Into<String>) -> Self {
        self.fields.push((key, value.into()));
        self
    }
}

/// Sink for diagnostic events.
pub trait EventLog: Send + Sync {
    fn record(&self, event: LogEvent);
}

/// Keeps events in memory; tests read them back.
#[derive(Default)]
pub struct MemoryLog {
    events: Mutex<Vec<LogEvent>>,
}

impl MemoryLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<LogEvent> {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn messages(&self) -> Vec<String> {
        self.events().into_iter().map(|e| e.message).collect()
    }
}

impl EventLog for MemoryLog {
    fn record(&self, event: LogEvent) {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(event);
    }
}

/// Forwards events to the `tracing` ecosystem. The desktop build installs a
/// fmt subscriber; the WASM build routes to the browser console.
#[cfg(feature = "tracing")]
pub struct TracingLog;

#[cfg(feature = "tracing")]
impl EventLog for TracingLog {
    fn record(&self, event: LogEvent) {
        let fields = event
            .fields
            .iter()
            .map(|(key, value)| format!("{}={}", key, value))
            .collect::<Vec<_>>()
            .join(" ");
        match event.level {
            LogLevel::Info => tracing::info!(target: "lounge", "{} {}", event.message, fields),
            LogLevel::Warn => tracing::warn!(target: "lounge", "{} {}", event.message, fields),
            LogLevel::Error => tracing::error!(target: "lounge", "{} {}", event.message, fields),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_log_records_in_order() {
        let log = MemoryLog::new();
        log.record(LogEvent::info("first"));
        log.record(LogEvent::error("second").with("reason", "boom"));

        let events = log.events();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].message, "first");
        assert_eq!(events[1].level, LogLevel::Error);
        assert_eq!(events[1].fields, vec![("reason", "boom".to_string())]);
    }
}
