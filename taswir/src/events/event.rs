use crate::tools::ToolId;
use crate::utils::{format_iso, now_utc, Timestamp};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Kinds of session events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventType {
    /// A tool view was opened and its log seeded.
    #[serde(rename = "session.reset")]
    SessionReset,
    /// A form passed validation and processing started.
    #[serde(rename = "tool.submitted")]
    ToolSubmitted,
    /// An output replaced the active output.
    #[serde(rename = "tool.completed")]
    ToolCompleted,
    /// A submission failed a precondition.
    #[serde(rename = "tool.rejected")]
    ToolRejected,
    /// A route named a tool that does not exist.
    #[serde(rename = "tool.not_found")]
    ToolNotFound,
    /// The connect form succeeded.
    #[serde(rename = "connect.succeeded")]
    ConnectSucceeded,
}

impl EventType {
    /// The dotted event name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::SessionReset => "session.reset",
            Self::ToolSubmitted => "tool.submitted",
            Self::ToolCompleted => "tool.completed",
            Self::ToolRejected => "tool.rejected",
            Self::ToolNotFound => "tool.not_found",
            Self::ConnectSucceeded => "connect.succeeded",
        }
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A structured session milestone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionEvent {
    /// What happened.
    pub event_type: EventType,
    /// The tool involved.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tool: Option<ToolId>,
    /// The invocation involved.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invocation_id: Option<Uuid>,
    /// Extra data.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
    /// When it happened.
    pub timestamp: Timestamp,
}

impl SessionEvent {
    /// Creates an event stamped now.
    #[must_use]
    pub fn new(event_type: EventType) -> Self {
        Self {
            event_type,
            tool: None,
            invocation_id: None,
            data: None,
            timestamp: now_utc(),
        }
    }

    /// Sets the tool.
    #[must_use]
    pub fn with_tool(mut self, tool: ToolId) -> Self {
        self.tool = Some(tool);
        self
    }

    /// Sets the invocation.
    #[must_use]
    pub fn with_invocation(mut self, id: Uuid) -> Self {
        self.invocation_id = Some(id);
        self
    }

    /// Attaches data.
    #[must_use]
    pub fn with_data(mut self, data: serde_json::Value) -> Self {
        self.data = Some(data);
        self
    }

    /// Converts to a JSON object with an ISO timestamp.
    #[must_use]
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "type": self.event_type.as_str(),
            "tool": self.tool.map(ToolId::as_str),
            "invocation_id": self.invocation_id.map(|id| id.to_string()),
            "data": self.data,
            "timestamp": format_iso(&self.timestamp),
        })
    }
}
