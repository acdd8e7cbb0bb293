//! The fixed tool table.

use super::{FieldType, ToolDefinition, ToolId};
use crate::core::ReturnType;
use crate::errors::ToolError;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

/// A gallery card for one tool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolCard {
    /// The tool id.
    pub id: ToolId,
    /// Display name.
    pub name: String,
    /// Description.
    pub description: String,
    /// Advertised return type.
    pub return_type: ReturnType,
    /// Link to the tool page.
    pub href: String,
}

/// Registry of tool definitions.
///
/// The table is built once and never mutated; lookups are by the route
/// identifier string.
#[derive(Debug, Clone)]
pub struct ToolRegistry {
    definitions: Vec<ToolDefinition>,
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

impl ToolRegistry {
    /// Creates the registry holding the six built-in tools.
    #[must_use]
    pub fn builtin() -> Self {
        let definitions = vec![
            ToolDefinition::new(ToolId::TextSummarizer, "Text Summarizer")
                .with_description("Summarize long text into concise points")
                .with_return_type(ReturnType::Markdown)
                .with_field("text", FieldType::String)
                .with_field("length", FieldType::Number)
                .with_field("style", FieldType::String),
            ToolDefinition::new(ToolId::ImageAnalyzer, "Image Analyzer")
                .with_description("Extract information and insights from images")
                .with_return_type(ReturnType::List)
                .with_field("imageUrl", FieldType::String)
                .with_field("options", FieldType::Object),
            ToolDefinition::new(ToolId::DataVisualizer, "Data Visualizer")
                .with_description("Create visual representations of your data")
                .with_return_type(ReturnType::Chart)
                .with_field("data", FieldType::String)
                .with_field("chartType", FieldType::String)
                .with_field("dataFormat", FieldType::String),
            ToolDefinition::new(ToolId::CodeGenerator, "Code Generator")
                .with_description("Generate code snippets from natural language")
                .with_return_type(ReturnType::Code)
                .with_field("prompt", FieldType::String)
                .with_field("language", FieldType::String),
            ToolDefinition::new(ToolId::Translation, "Translation Tool")
                .with_description("Translate text between multiple languages")
                .with_return_type(ReturnType::Text)
                .with_field("text", FieldType::String)
                .with_field("sourceLanguage", FieldType::String)
                .with_field("targetLanguage", FieldType::String),
            ToolDefinition::new(ToolId::SentimentAnalysis, "Sentiment Analysis")
                .with_description("Analyze the sentiment of text content")
                .with_return_type(ReturnType::Analysis)
                .with_field("text", FieldType::String),
        ];

        Self { definitions }
    }

    /// Gets a definition by route identifier.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&ToolDefinition> {
        self.definitions.iter().find(|d| d.id.as_str() == id)
    }

    /// Gets a definition by tool id.
    #[must_use]
    pub fn definition(&self, id: ToolId) -> Option<&ToolDefinition> {
        self.definitions.iter().find(|d| d.id == id)
    }

    /// Gets a definition or a not found error.
    pub fn lookup(&self, id: &str) -> Result<&ToolDefinition, ToolError> {
        self.get(id).ok_or_else(|| ToolError::not_found(id))
    }

    /// Checks if an identifier names a known tool.
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// Iterates definitions in gallery order.
    pub fn iter(&self) -> impl Iterator<Item = &ToolDefinition> {
        self.definitions.iter()
    }

    /// Number of tools.
    #[must_use]
    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    /// True if the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }

    /// Builds the gallery cards.
    #[must_use]
    pub fn gallery(&self) -> Vec<ToolCard> {
        self.definitions
            .iter()
            .map(|d| ToolCard {
                id: d.id,
                name: d.name.clone(),
                description: d.description.clone(),
                return_type: d.return_type,
                href: d.href(),
            })
            .collect()
    }
}

static BUILTIN_REGISTRY: LazyLock<ToolRegistry> = LazyLock::new(ToolRegistry::builtin);

/// Gets the process-wide built-in registry.
pub fn builtin_registry() -> &'static ToolRegistry {
    &BUILTIN_REGISTRY
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_has_six_tools() {
        let registry = ToolRegistry::builtin();
        assert_eq!(registry.len(), 6);
        assert!(!registry.is_empty());
    }

    #[test]
    fn test_every_tool_id_has_definition() {
        let registry = ToolRegistry::builtin();
        for id in ToolId::ALL {
            assert_eq!(registry.definition(id).map(|d| d.id), Some(id));
        }
    }

    #[test]
    fn test_lookup_unknown() {
        let registry = ToolRegistry::builtin();
        assert!(!registry.contains("weather-forecast"));
        assert!(matches!(
            registry.lookup("weather-forecast"),
            Err(ToolError::NotFound { .. })
        ));
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        let registry = ToolRegistry::builtin();
        assert!(registry.get("Translation").is_none());
        assert!(registry.get("translation").is_some());
    }

    #[test]
    fn test_gallery_order_and_links() {
        let cards = builtin_registry().gallery();
        let ids: Vec<_> = cards.iter().map(|c| c.id.as_str()).collect();

        assert_eq!(
            ids,
            vec![
                "text-summarizer",
                "image-analyzer",
                "data-visualizer",
                "code-generator",
                "translation",
                "sentiment-analysis",
            ]
        );
        assert_eq!(cards[2].return_type, ReturnType::Chart);
        assert_eq!(cards[5].href, "/tools/sentiment-analysis");
    }

    #[test]
    fn test_schema_matches_form_fields() {
        let registry = ToolRegistry::builtin();
        let image = registry.definition(ToolId::ImageAnalyzer).unwrap();
        assert_eq!(
            image.input_schema.get("imageUrl").map(|f| f.field_type),
            Some(FieldType::String)
        );
    }
}
