//! Tool definitions and input schemas.

use crate::core::ReturnType;
use crate::errors::ToolError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identifier of one of the six fixed tools.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ToolId {
    /// Text summarizer.
    TextSummarizer,
    /// Image analyzer.
    ImageAnalyzer,
    /// Data visualizer.
    DataVisualizer,
    /// Code generator.
    CodeGenerator,
    /// Translation tool.
    Translation,
    /// Sentiment analysis.
    SentimentAnalysis,
}

impl ToolId {
    /// All tools in gallery order.
    pub const ALL: [Self; 6] = [
        Self::TextSummarizer,
        Self::ImageAnalyzer,
        Self::DataVisualizer,
        Self::CodeGenerator,
        Self::Translation,
        Self::SentimentAnalysis,
    ];

    /// The route identifier.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::TextSummarizer => "text-summarizer",
            Self::ImageAnalyzer => "image-analyzer",
            Self::DataVisualizer => "data-visualizer",
            Self::CodeGenerator => "code-generator",
            Self::Translation => "translation",
            Self::SentimentAnalysis => "sentiment-analysis",
        }
    }
}

impl fmt::Display for ToolId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ToolId {
    type Err = ToolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| ToolError::not_found(s))
    }
}

/// Primitive type of an input field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    /// A string.
    String,
    /// A number.
    Number,
    /// A boolean.
    Boolean,
    /// An object of nested fields.
    Object,
}

impl FieldType {
    /// Checks whether a JSON value has this type. `null` matches any type.
    #[must_use]
    pub fn accepts(self, value: &serde_json::Value) -> bool {
        match (self, value) {
            (_, serde_json::Value::Null) => true,
            (Self::String, serde_json::Value::String(_))
            | (Self::Number, serde_json::Value::Number(_))
            | (Self::Boolean, serde_json::Value::Bool(_))
            | (Self::Object, serde_json::Value::Object(_)) => true,
            _ => false,
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::String => write!(f, "string"),
            Self::Number => write!(f, "number"),
            Self::Boolean => write!(f, "boolean"),
            Self::Object => write!(f, "object"),
        }
    }
}

/// One declared input field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldSpec {
    /// The parameter name.
    pub name: String,
    /// Its primitive type.
    #[serde(rename = "type")]
    pub field_type: FieldType,
}

/// The declared input schema of a tool.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputSchema {
    /// Fields in declaration order.
    pub fields: Vec<FieldSpec>,
}

impl InputSchema {
    /// Adds a field.
    #[must_use]
    pub fn field(mut self, name: impl Into<String>, field_type: FieldType) -> Self {
        self.fields.push(FieldSpec {
            name: name.into(),
            field_type,
        });
        self
    }

    /// Looks up a field by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Renders the schema as a JSON Schema object.
    #[must_use]
    pub fn to_json_schema(&self) -> serde_json::Value {
        let properties: serde_json::Map<String, serde_json::Value> = self
            .fields
            .iter()
            .map(|f| (f.name.clone(), serde_json::json!({ "type": f.field_type.to_string() })))
            .collect();

        serde_json::json!({
            "type": "object",
            "properties": properties,
        })
    }

    /// Checks that every declared parameter present in `params` has the
    /// declared type. Undeclared parameters are ignored.
    pub fn check(
        &self,
        tool: ToolId,
        params: &serde_json::Map<String, serde_json::Value>,
    ) -> Result<(), ToolError> {
        for spec in &self.fields {
            if let Some(value) = params.get(&spec.name) {
                if !spec.field_type.accepts(value) {
                    return Err(ToolError::invalid_parameter(
                        tool.as_str(),
                        &spec.name,
                        spec.field_type.to_string(),
                    ));
                }
            }
        }
        Ok(())
    }
}

/// Definition of a tool shown in the gallery.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolDefinition {
    /// The tool id.
    pub id: ToolId,
    /// Display name.
    pub name: String,
    /// Description of what the tool does.
    pub description: String,
    /// Return type advertised on the gallery card.
    pub return_type: ReturnType,
    /// Declared input schema.
    pub input_schema: InputSchema,
}

impl ToolDefinition {
    /// Creates a new tool definition.
    #[must_use]
    pub fn new(id: ToolId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            description: String::new(),
            return_type: ReturnType::default(),
            input_schema: InputSchema::default(),
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, desc: impl Into<String>) -> Self {
        self.description = desc.into();
        self
    }

    /// Sets the return type.
    #[must_use]
    pub fn with_return_type(mut self, return_type: ReturnType) -> Self {
        self.return_type = return_type;
        self
    }

    /// Declares an input field.
    #[must_use]
    pub fn with_field(mut self, name: impl Into<String>, field_type: FieldType) -> Self {
        self.input_schema = self.input_schema.field(name, field_type);
        self
    }

    /// The route path of the tool page.
    #[must_use]
    pub fn href(&self) -> String {
        format!("/tools/{}", self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tool_id_round_trip() {
        for id in ToolId::ALL {
            assert_eq!(id.as_str().parse::<ToolId>().unwrap(), id);
        }
    }

    #[test]
    fn test_tool_id_unknown() {
        let err = "weather".parse::<ToolId>().unwrap_err();
        assert!(matches!(err, ToolError::NotFound { ref id } if id == "weather"));
    }

    #[test]
    fn test_tool_id_serde_kebab() {
        let json = serde_json::to_string(&ToolId::SentimentAnalysis).unwrap();
        assert_eq!(json, r#""sentiment-analysis""#);
    }

    #[test]
    fn test_definition_builder() {
        let def = ToolDefinition::new(ToolId::Translation, "Translation Tool")
            .with_description("Translate text between multiple languages")
            .with_return_type(ReturnType::Text)
            .with_field("text", FieldType::String);

        assert_eq!(def.href(), "/tools/translation");
        assert_eq!(def.input_schema.fields.len(), 1);
        assert!(def.input_schema.get("text").is_some());
    }

    #[test]
    fn test_json_schema() {
        let schema = InputSchema::default()
            .field("text", FieldType::String)
            .field("length", FieldType::Number);

        let json = schema.to_json_schema();
        assert_eq!(json["type"], "object");
        assert_eq!(json["properties"]["length"]["type"], "number");
    }

    #[test]
    fn test_check_rejects_wrong_type() {
        let schema = InputSchema::default().field("length", FieldType::Number);
        let mut params = serde_json::Map::new();
        params.insert("length".to_string(), serde_json::json!("thirty"));

        let err = schema.check(ToolId::TextSummarizer, &params).unwrap_err();
        assert!(matches!(err, ToolError::InvalidParameter { ref field, .. } if field == "length"));
    }

    #[test]
    fn test_check_ignores_undeclared_and_null() {
        let schema = InputSchema::default().field("text", FieldType::String);
        let mut params = serde_json::Map::new();
        params.insert("text".to_string(), serde_json::Value::Null);
        params.insert("extra".to_string(), serde_json::json!(42));

        assert!(schema.check(ToolId::SentimentAnalysis, &params).is_ok());
    }
}
