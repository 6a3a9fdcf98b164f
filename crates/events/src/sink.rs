//! Notification sink: where human-readable messages leave the domain.
//!
//! Any concrete channel (console, log stream, UI callback) satisfies the
//! contract; the domain never reads anything back.

use std::sync::{Mutex, PoisonError};

/// Outbound boundary for human-readable notifications.
pub trait NotificationSink: Send + Sync {
    fn emit(&self, text: &str);
}

/// Sink that writes every notification as a `tracing` event.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl NotificationSink for TracingSink {
    fn emit(&self, text: &str) {
        tracing::info!(target: "marketplace::notifications", notification = %text);
    }
}

/// Sink that keeps every notification in memory, in emission order.
#[derive(Debug, Default)]
pub struct MemorySink {
    messages: Mutex<Vec<String>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything emitted so far.
    pub fn messages(&self) -> Vec<String> {
        self.messages
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl NotificationSink for MemorySink {
    fn emit(&self, text: &str) {
        self.messages
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(text.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_sink_keeps_emission_order() {
        let sink = MemorySink::new();
        sink.emit("one");
        sink.emit("two");
        assert_eq!(sink.messages(), vec!["one", "two"]);
    }

    #[test]
    fn snapshot_is_detached_from_later_emissions() {
        let sink = MemorySink::new();
        sink.emit("one");
        let snapshot = sink.messages();
        sink.emit("two");
        assert_eq!(snapshot.len(), 1);
    }
}
