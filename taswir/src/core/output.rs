//! Tool output tagged union.

use super::{OutputKind, StructuredRecord};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// The output of a tool invocation.
///
/// `ToolOutput` is produced once by the resolution engine, consumed by the
/// renderer, and held as the active output of a tool view until the next
/// invocation replaces it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ToolOutput {
    /// A formatted (markdown) text block.
    FormattedText {
        /// Markdown source.
        content: String,
    },
    /// An itemized list.
    List {
        /// The items, in display order.
        items: Vec<String>,
    },
    /// A structured record shown as text.
    Structured {
        /// The record.
        record: StructuredRecord,
    },
}

impl ToolOutput {
    /// Creates a formatted text output.
    #[must_use]
    pub fn formatted(content: impl Into<String>) -> Self {
        Self::FormattedText {
            content: content.into(),
        }
    }

    /// Creates a list output.
    #[must_use]
    pub fn list<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::List {
            items: items.into_iter().map(Into::into).collect(),
        }
    }

    /// Creates a structured output.
    #[must_use]
    pub fn structured(record: StructuredRecord) -> Self {
        Self::Structured { record }
    }

    /// The rendering tag.
    #[must_use]
    pub fn kind(&self) -> OutputKind {
        match self {
            Self::FormattedText { .. } => OutputKind::Markdown,
            Self::List { .. } => OutputKind::List,
            Self::Structured { .. } => OutputKind::Text,
        }
    }

    /// Returns the markdown content, if this is formatted text.
    #[must_use]
    pub fn as_formatted(&self) -> Option<&str> {
        match self {
            Self::FormattedText { content } => Some(content),
            _ => None,
        }
    }

    /// Returns the items, if this is a list.
    #[must_use]
    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            Self::List { items } => Some(items),
            _ => None,
        }
    }

    /// Returns the record, if this is structured.
    #[must_use]
    pub fn as_record(&self) -> Option<&StructuredRecord> {
        match self {
            Self::Structured { record } => Some(record),
            _ => None,
        }
    }

    /// Converts the output to a dictionary representation.
    #[must_use]
    pub fn to_dict(&self) -> HashMap<String, serde_json::Value> {
        let mut map = HashMap::new();
        map.insert("type".to_string(), serde_json::json!(self.kind().to_string()));

        match self {
            Self::FormattedText { content } => {
                map.insert("content".to_string(), serde_json::json!(content));
            }
            Self::List { items } => {
                map.insert("items".to_string(), serde_json::json!(items));
            }
            Self::Structured { record } => {
                map.insert(
                    "record".to_string(),
                    serde_json::to_value(record).unwrap_or(serde_json::Value::Null),
                );
            }
        }

        map
    }
}
