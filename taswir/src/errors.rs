//! Error types for taswir.
//!
//! Every failure in taswir is a client-side precondition: a missing form
//! field, a missing image, an oversized upload, a parameter of the wrong
//! type, or a tool id that is not in the fixed table. None of them are
//! retried; they surface as inline messages or notifications.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

/// The main error type for taswir operations.
#[derive(Debug, Error)]
pub enum TaswirError {
    /// A user-facing validation failure.
    #[error("{0}")]
    Validation(#[from] ValidationError),

    /// A tool-related error.
    #[error("{0}")]
    Tool(#[from] ToolError),

    /// Configuration could not be loaded.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Serialization/deserialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl TaswirError {
    /// Returns true if the error should be shown inline next to a form.
    #[must_use]
    pub fn is_user_facing(&self) -> bool {
        matches!(self, Self::Validation(_) | Self::Tool(_))
    }

    /// Returns the validation error, if this is one.
    #[must_use]
    pub fn as_validation(&self) -> Option<&ValidationError> {
        match self {
            Self::Validation(err) => Some(err),
            _ => None,
        }
    }
}

/// A failed precondition on user input.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("{message}")]
pub struct ValidationError {
    /// The form field the message belongs to, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
    /// The message shown to the user.
    pub message: String,
}

impl ValidationError {
    /// Creates a validation error not tied to a single field.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            field: None,
            message: message.into(),
        }
    }

    /// Creates a validation error for a specific field.
    #[must_use]
    pub fn for_field(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: Some(field.into()),
            message: message.into(),
        }
    }

    /// Converts to a dictionary representation.
    #[must_use]
    pub fn to_dict(&self) -> HashMap<String, serde_json::Value> {
        let mut map = HashMap::new();
        map.insert("message".to_string(), serde_json::Value::String(self.message.clone()));
        if let Some(ref field) = self.field {
            map.insert("field".to_string(), serde_json::Value::String(field.clone()));
        }
        map
    }
}

/// Errors related to tool lookup and invocation.
#[derive(Debug, Clone, Error)]
pub enum ToolError {
    /// Tool id is not in the fixed tool table.
    #[error("Tool not found: {id}")]
    NotFound {
        /// The requested id.
        id: String,
    },

    /// A parameter does not match the declared input schema.
    #[error("Invalid parameter '{field}' for {tool}: expected {expected}")]
    InvalidParameter {
        /// The tool id.
        tool: String,
        /// The parameter name.
        field: String,
        /// The expected primitive type.
        expected: String,
    },

    /// The invocation was addressed to a different tool.
    #[error("Invocation for {actual} handed to {expected}")]
    Mismatch {
        /// The tool that received the invocation.
        expected: String,
        /// The tool named by the invocation.
        actual: String,
    },
}

impl ToolError {
    /// Creates a not found error.
    #[must_use]
    pub fn not_found(id: impl Into<String>) -> Self {
        Self::NotFound { id: id.into() }
    }

    /// Creates an invalid parameter error.
    #[must_use]
    pub fn invalid_parameter(
        tool: impl Into<String>,
        field: impl Into<String>,
        expected: impl Into<String>,
    ) -> Self {
        Self::InvalidParameter {
            tool: tool.into(),
            field: field.into(),
            expected: expected.into(),
        }
    }
}

/// Result alias used across the crate.
pub type Result<T, E = TaswirError> = std::result::Result<T, E>;
