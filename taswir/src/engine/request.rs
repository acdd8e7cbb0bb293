//! Typed per-tool requests captured from an invocation.

use super::codegen::CodeRequest;
use super::image::{ImageParams, ImageRequest};
use super::sentiment::SentimentRequest;
use super::summarizer::SummarizeRequest;
use super::translation::TranslationRequest;
use super::visualizer::VisualizeRequest;
use crate::errors::{Result, ToolError};
use crate::tools::{builtin_registry, ImageSource, ToolId, ToolInvocation};
use tracing::debug;

/// A normalized tool request, ready for the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToolRequest {
    /// Text summarizer.
    Summarize(SummarizeRequest),
    /// Image analyzer.
    Image(ImageRequest),
    /// Data visualizer.
    Visualize(VisualizeRequest),
    /// Code generator.
    Code(CodeRequest),
    /// Translation.
    Translate(TranslationRequest),
    /// Sentiment analysis.
    Sentiment(SentimentRequest),
}

impl ToolRequest {
    /// The tool this request targets.
    #[must_use]
    pub fn tool(&self) -> ToolId {
        match self {
            Self::Summarize(_) => ToolId::TextSummarizer,
            Self::Image(_) => ToolId::ImageAnalyzer,
            Self::Visualize(_) => ToolId::DataVisualizer,
            Self::Code(_) => ToolId::CodeGenerator,
            Self::Translate(_) => ToolId::Translation,
            Self::Sentiment(_) => ToolId::SentimentAnalysis,
        }
    }

    /// Normalizes an invocation into a typed request.
    ///
    /// Checks parameter types against the tool's declared schema, applies
    /// field defaults, and runs the synchronous preconditions: an image
    /// source must be present, uploads must fit in `max_upload_bytes`, and
    /// summarizer input must have text and a length in range.
    pub fn capture(invocation: &ToolInvocation, max_upload_bytes: usize) -> Result<Self> {
        let tool = invocation.tool;
        let definition = builtin_registry()
            .definition(tool)
            .ok_or_else(|| ToolError::not_found(tool.as_str()))?;
        definition.input_schema.check(tool, &invocation.params)?;

        if let Some(ref file) = invocation.file {
            file.check_size(max_upload_bytes)?;
        }

        let request = match tool {
            ToolId::TextSummarizer => {
                let request: SummarizeRequest = invocation.parse_params()?;
                request.validate()?;
                Self::Summarize(request)
            }
            ToolId::ImageAnalyzer => {
                let params: ImageParams = invocation.parse_params()?;
                let source =
                    ImageSource::from_parts(Some(&params.image_url), invocation.file.as_ref())?;
                Self::Image(ImageRequest::new(source, params.options))
            }
            ToolId::DataVisualizer => Self::Visualize(invocation.parse_params()?),
            ToolId::CodeGenerator => Self::Code(invocation.parse_params()?),
            ToolId::Translation => Self::Translate(invocation.parse_params()?),
            ToolId::SentimentAnalysis => Self::Sentiment(invocation.parse_params()?),
        };

        debug!(
            tool_id = %tool,
            invocation_id = %invocation.id,
            "Invocation captured"
        );
        Ok(request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{ChartType, CodeLanguage, Language};
    use crate::errors::TaswirError;
    use crate::tools::UploadedFile;
    use serde_json::json;

    const MAX: usize = 5 * 1024 * 1024;

    #[test]
    fn test_capture_defaults() {
        let inv = ToolInvocation::new(ToolId::Translation).with_text("Hello");
        let ToolRequest::Translate(request) = ToolRequest::capture(&inv, MAX).unwrap() else {
            panic!("expected translation request");
        };
        assert_eq!(request.source_language, Language::En);
        assert_eq!(request.target_language, Language::Es);
    }

    #[test]
    fn test_capture_code_language() {
        let inv = ToolInvocation::new(ToolId::CodeGenerator)
            .with_param("prompt", json!("hello"))
            .with_param("language", json!("c++"));
        let request = ToolRequest::capture(&inv, MAX).unwrap();
        assert_eq!(
            request,
            ToolRequest::Code(CodeRequest::new("hello", CodeLanguage::Cpp))
        );
        assert_eq!(request.tool(), ToolId::CodeGenerator);
    }

    #[test]
    fn test_capture_rejects_schema_type() {
        let inv = ToolInvocation::new(ToolId::DataVisualizer).with_param("chartType", json!(3));
        let err = ToolRequest::capture(&inv, MAX).unwrap_err();
        assert!(matches!(err, TaswirError::Tool(ToolError::InvalidParameter { .. })));
    }

    #[test]
    fn test_capture_rejects_unknown_option() {
        let inv = ToolInvocation::new(ToolId::DataVisualizer)
            .with_param("chartType", json!("scatter"));
        let err = ToolRequest::capture(&inv, MAX).unwrap_err();
        assert!(err.as_validation().is_some());
    }

    #[test]
    fn test_capture_visualizer() {
        let inv = ToolInvocation::new(ToolId::DataVisualizer).with_param("chartType", json!("pie"));
        let ToolRequest::Visualize(request) = ToolRequest::capture(&inv, MAX).unwrap() else {
            panic!("expected visualizer request");
        };
        assert_eq!(request.chart_type, ChartType::Pie);
    }

    #[test]
    fn test_capture_image_requires_source() {
        let inv = ToolInvocation::new(ToolId::ImageAnalyzer);
        let err = ToolRequest::capture(&inv, MAX).unwrap_err();
        let validation = err.as_validation().unwrap();
        assert_eq!(validation.message, "Please provide an image URL or upload a file");
    }

    #[test]
    fn test_capture_image_upload() {
        let inv = ToolInvocation::new(ToolId::ImageAnalyzer)
            .with_param("options", json!({ "detectLandmarks": true }))
            .with_file(UploadedFile::new("a.png", "image/png", vec![0; 4]));
        let ToolRequest::Image(request) = ToolRequest::capture(&inv, MAX).unwrap() else {
            panic!("expected image request");
        };
        assert_eq!(request.source.reference(), "file-upload");
        assert!(request.options.detect_landmarks);
        assert!(request.options.detect_objects);
    }

    #[test]
    fn test_capture_rejects_non_image_upload() {
        let inv = ToolInvocation::new(ToolId::ImageAnalyzer)
            .with_file(UploadedFile::new("notes.txt", "text/plain", b"hello".to_vec()));
        let err = ToolRequest::capture(&inv, MAX).unwrap_err();
        let validation = err.as_validation().unwrap();
        assert_eq!(validation.field.as_deref(), Some("file"));
    }

    #[test]
    fn test_capture_rejects_large_upload() {
        let inv = ToolInvocation::new(ToolId::ImageAnalyzer)
            .with_file(UploadedFile::new("a.png", "image/png", vec![0; 9]));
        let err = ToolRequest::capture(&inv, 8).unwrap_err();
        assert_eq!(err.as_validation().unwrap().field.as_deref(), Some("file"));
    }

    #[test]
    fn test_capture_summarizer_validation() {
        let inv = ToolInvocation::new(ToolId::TextSummarizer)
            .with_text("Some text.")
            .with_param("length", json!(80));
        let err = ToolRequest::capture(&inv, MAX).unwrap_err();
        assert_eq!(err.as_validation().unwrap().field.as_deref(), Some("length"));
    }

    #[test]
    fn test_capture_empty_sentiment_is_allowed() {
        let inv = ToolInvocation::new(ToolId::SentimentAnalysis);
        assert_eq!(
            ToolRequest::capture(&inv, MAX).unwrap(),
            ToolRequest::Sentiment(SentimentRequest::default())
        );
    }
}
