//! Injected event sink for lifecycle observability.
//!
//! Construction and verification report what happened through a sink the
//! caller supplies, keeping observability out of the algorithms. The sink
//! is purely advisory: correctness never depends on its behavior.

/// Severity of a lifecycle event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventLevel {
    /// Fine-grained progress notices.
    Debug,
    /// Lifecycle milestones, such as a tree being created.
    Info,
    /// Suspicious but non-fatal conditions, such as a failed verification.
    Warn,
}

/// Receiver for lifecycle events.
pub trait EventSink {
    /// Called once per lifecycle notice. Must not panic.
    fn on_event(&self, level: EventLevel, message: &str);
}

/// Sink that discards every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopSink;

impl EventSink for NoopSink {
    fn on_event(&self, _level: EventLevel, _message: &str) {}
}

/// Sink that forwards events to the `tracing` facade.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl EventSink for TracingSink {
    fn on_event(&self, level: EventLevel, message: &str) {
        match level {
            EventLevel::Debug => tracing::debug!("{message}"),
            EventLevel::Info => tracing::info!("{message}"),
            EventLevel::Warn => tracing::warn!("{message}"),
        }
    }
}
