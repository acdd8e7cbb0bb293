//! Output shape and gallery return type enums.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The display shape an output is rendered into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputKind {
    /// A single formatted (markdown) text block.
    Markdown,
    /// An itemized list.
    List,
    /// Structured plain text.
    Text,
}

impl Default for OutputKind {
    fn default() -> Self {
        Self::Text
    }
}

impl fmt::Display for OutputKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Markdown => write!(f, "markdown"),
            Self::List => write!(f, "list"),
            Self::Text => write!(f, "text"),
        }
    }
}

/// The kind of result a tool advertises on its gallery card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReturnType {
    /// Markdown text.
    Markdown,
    /// A list of findings.
    List,
    /// A chart dataset.
    Chart,
    /// A code snippet.
    Code,
    /// Plain text.
    Text,
    /// A scored analysis.
    Analysis,
}

impl Default for ReturnType {
    fn default() -> Self {
        Self::Text
    }
}

impl fmt::Display for ReturnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Markdown => write!(f, "markdown"),
            Self::List => write!(f, "list"),
            Self::Chart => write!(f, "chart"),
            Self::Code => write!(f, "code"),
            Self::Text => write!(f, "text"),
            Self::Analysis => write!(f, "analysis"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_kind_display() {
        assert_eq!(OutputKind::Markdown.to_string(), "markdown");
        assert_eq!(OutputKind::List.to_string(), "list");
        assert_eq!(OutputKind::Text.to_string(), "text");
    }

    #[test]
    fn test_return_type_serialize() {
        let json = serde_json::to_string(&ReturnType::Analysis).unwrap();
        assert_eq!(json, r#""analysis""#);

        let back: ReturnType = serde_json::from_str(r#""chart""#).unwrap();
        assert_eq!(back, ReturnType::Chart);
    }

    #[test]
    fn test_defaults() {
        assert_eq!(OutputKind::default(), OutputKind::Text);
        assert_eq!(ReturnType::default(), ReturnType::Text);
    }
}
