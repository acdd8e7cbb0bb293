//! Event sink trait and implementations.

use super::{EventType, SessionEvent};
use async_trait::async_trait;
use parking_lot::RwLock;
use tracing::{debug, info, Level};

/// Receives session events.
///
/// Implementations must not fail or block the session; anything that
/// goes wrong inside a sink is logged and dropped.
#[async_trait]
pub trait EventSink: Send + Sync {
    /// Emits an event asynchronously.
    async fn emit(&self, event: &SessionEvent);

    /// Emits an event without awaiting.
    fn try_emit(&self, event: &SessionEvent);
}

/// Discards all events.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpEventSink;

#[async_trait]
impl EventSink for NoOpEventSink {
    async fn emit(&self, _event: &SessionEvent) {}

    fn try_emit(&self, _event: &SessionEvent) {}
}

/// Logs events through `tracing`.
#[derive(Debug, Clone)]
pub struct LoggingEventSink {
    level: Level,
}

impl Default for LoggingEventSink {
    fn default() -> Self {
        Self { level: Level::INFO }
    }
}

impl LoggingEventSink {
    /// Creates a logging sink at the given level.
    #[must_use]
    pub fn new(level: Level) -> Self {
        Self { level }
    }

    /// Creates a debug-level logging sink.
    #[must_use]
    pub fn debug() -> Self {
        Self::new(Level::DEBUG)
    }

    fn log_event(&self, event: &SessionEvent) {
        let tool = event.tool.map(|t| t.as_str());
        if self.level == Level::DEBUG {
            debug!(
                event_type = %event.event_type,
                tool_id = ?tool,
                invocation_id = ?event.invocation_id,
                event_data = ?event.data,
                "Event: {}", event.event_type
            );
        } else {
            info!(
                event_type = %event.event_type,
                tool_id = ?tool,
                invocation_id = ?event.invocation_id,
                event_data = ?event.data,
                "Event: {}", event.event_type
            );
        }
    }
}

#[async_trait]
impl EventSink for LoggingEventSink {
    async fn emit(&self, event: &SessionEvent) {
        self.log_event(event);
    }

    fn try_emit(&self, event: &SessionEvent) {
        self.log_event(event);
    }
}

/// Collects events in memory, for tests and the CLI summary.
#[derive(Debug, Default)]
pub struct CollectingEventSink {
    events: RwLock<Vec<SessionEvent>>,
}

impl CollectingEventSink {
    /// Creates an empty sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All collected events.
    #[must_use]
    pub fn events(&self) -> Vec<SessionEvent> {
        self.events.read().clone()
    }

    /// Number of collected events.
    #[must_use]
    pub fn len(&self) -> usize {
        self.events.read().len()
    }

    /// True if nothing was collected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.read().is_empty()
    }

    /// Clears collected events.
    pub fn clear(&self) {
        self.events.write().clear();
    }

    /// Events of one type.
    #[must_use]
    pub fn events_of_type(&self, event_type: EventType) -> Vec<SessionEvent> {
        self.events
            .read()
            .iter()
            .filter(|e| e.event_type == event_type)
            .cloned()
            .collect()
    }

    /// Event types in arrival order.
    #[must_use]
    pub fn types(&self) -> Vec<EventType> {
        self.events.read().iter().map(|e| e.event_type).collect()
    }
}

#[async_trait]
impl EventSink for CollectingEventSink {
    async fn emit(&self, event: &SessionEvent) {
        self.events.write().push(event.clone());
    }

    fn try_emit(&self, event: &SessionEvent) {
        self.events.write().push(event.clone());
    }
}
