//! Display shapes for tool outputs.

use crate::core::{OutputKind, ToolOutput};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the three display shapes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "shape", rename_all = "snake_case")]
pub enum RenderedView {
    /// A single formatted block.
    Markdown {
        /// Markdown source.
        content: String,
    },
    /// Itemized entries.
    List {
        /// One entry per item.
        items: Vec<String>,
    },
    /// A titled plain text block.
    Text {
        /// Heading.
        title: String,
        /// Body.
        content: String,
    },
}

impl RenderedView {
    /// The shape tag.
    #[must_use]
    pub fn kind(&self) -> OutputKind {
        match self {
            Self::Markdown { .. } => OutputKind::Markdown,
            Self::List { .. } => OutputKind::List,
            Self::Text { .. } => OutputKind::Text,
        }
    }

    /// Number of rendered entries: one per list item, one for a block.
    #[must_use]
    pub fn entry_count(&self) -> usize {
        match self {
            Self::List { items } => items.len(),
            Self::Markdown { .. } | Self::Text { .. } => 1,
        }
    }

    /// What the copy button writes to the clipboard.
    #[must_use]
    pub fn clipboard_text(&self) -> String {
        match self {
            Self::Markdown { content } | Self::Text { content, .. } => content.clone(),
            Self::List { items } => items.join("\n"),
        }
    }
}

impl fmt::Display for RenderedView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Markdown { content } => f.write_str(content),
            Self::List { items } => {
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        writeln!(f)?;
                    }
                    write!(f, "• {item}")?;
                }
                Ok(())
            }
            Self::Text { title, content } => write!(f, "{title}\n\n{content}"),
        }
    }
}

/// Maps an output to its display shape.
#[must_use]
pub fn render(output: &ToolOutput) -> RenderedView {
    match output {
        ToolOutput::FormattedText { content } => RenderedView::Markdown {
            content: content.clone(),
        },
        ToolOutput::List { items } => RenderedView::List {
            items: items.clone(),
        },
        ToolOutput::Structured { record } => RenderedView::Text {
            title: record.title(),
            content: record.display_text(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{CodeLanguage, CodeSnippet, StructuredRecord};

    #[test]
    fn test_list_renders_every_item() {
        for k in [0, 1, 7] {
            let output = ToolOutput::list((0..k).map(|i| format!("item {i}")));
            let view = render(&output);
            assert_eq!(view.kind(), OutputKind::List);
            assert_eq!(view.entry_count(), k);
        }
    }

    #[test]
    fn test_formatted_is_single_block() {
        let view = render(&ToolOutput::formatted("## Summary\n\n- a\n- b"));
        assert_eq!(view.entry_count(), 1);
        assert_eq!(view.clipboard_text(), "## Summary\n\n- a\n- b");
    }

    #[test]
    fn test_structured_is_titled_text() {
        let output = ToolOutput::structured(StructuredRecord::Code(CodeSnippet {
            language: CodeLanguage::Python,
            bucket: "hello-world".to_string(),
            code: "print(1)".to_string(),
        }));
        let view = render(&output);

        assert_eq!(
            view,
            RenderedView::Text {
                title: "Python code".to_string(),
                content: "print(1)".to_string(),
            }
        );
        assert_eq!(view.to_string(), "Python code\n\nprint(1)");
    }

    #[test]
    fn test_list_display_and_copy() {
        let view = render(&ToolOutput::list(["a", "b"]));
        assert_eq!(view.to_string(), "• a\n• b");
        assert_eq!(view.clipboard_text(), "a\nb");
    }
}
