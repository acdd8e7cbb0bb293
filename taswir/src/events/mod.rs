//! Session event emission.
//!
//! Every milestone that lands in the session log is also emitted as a
//! structured [`SessionEvent`] to an [`EventSink`]. Sinks never fail the
//! caller.

mod event;
mod sink;

pub use event::{EventType, SessionEvent};
pub use sink::{CollectingEventSink, EventSink, LoggingEventSink, NoOpEventSink};
