//! Tool invocations and uploaded file references.

use super::ToolId;
use crate::errors::{Result, TaswirError, ValidationError};
use crate::utils::{generate_uuid, now_utc, Timestamp};
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use uuid::Uuid;

/// A file picked or dropped into a form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadedFile {
    /// Original file name.
    pub name: String,
    /// MIME type.
    pub mime_type: String,
    /// File contents.
    #[serde(skip)]
    pub bytes: Vec<u8>,
}

impl UploadedFile {
    /// Creates an uploaded file.
    #[must_use]
    pub fn new(name: impl Into<String>, mime_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            mime_type: mime_type.into(),
            bytes,
        }
    }

    /// Reads a file from disk, guessing its MIME type from the extension.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let bytes = std::fs::read(path)?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let mime_type = guess_mime(path);
        Ok(Self::new(name, mime_type, bytes))
    }

    /// Size in bytes.
    #[must_use]
    pub fn size(&self) -> usize {
        self.bytes.len()
    }

    /// Rejects files larger than `max_bytes`.
    pub fn check_size(&self, max_bytes: usize) -> Result<(), ValidationError> {
        if self.size() > max_bytes {
            return Err(ValidationError::for_field(
                "file",
                format!(
                    "File size exceeds {} limit",
                    human_size(max_bytes)
                ),
            ));
        }
        Ok(())
    }

    /// True if the MIME type is an image type.
    #[must_use]
    pub fn is_image(&self) -> bool {
        self.mime_type.starts_with("image/")
    }

    /// A `data:` URL suitable for an image preview.
    #[must_use]
    pub fn data_url(&self) -> String {
        format!("data:{};base64,{}", self.mime_type, STANDARD.encode(&self.bytes))
    }
}

fn guess_mime(path: &Path) -> &'static str {
    match path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase)
        .as_deref()
    {
        Some("png") => "image/png",
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        Some("svg") => "image/svg+xml",
        Some("json") => "application/json",
        Some("csv") => "text/csv",
        Some("txt") => "text/plain",
        _ => "application/octet-stream",
    }
}

fn human_size(bytes: usize) -> String {
    const MB: usize = 1024 * 1024;
    if bytes >= MB && bytes % MB == 0 {
        format!("{}MB", bytes / MB)
    } else {
        format!("{bytes} bytes")
    }
}

/// Where the image to analyze comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageSource {
    /// A remote image URL.
    Url(String),
    /// An uploaded file.
    File(UploadedFile),
}

impl ImageSource {
    /// Picks the image source from the form state. A non-blank URL wins
    /// over an uploaded file.
    pub fn from_parts(
        url: Option<&str>,
        file: Option<&UploadedFile>,
    ) -> Result<Self, ValidationError> {
        match (url.map(str::trim).filter(|u| !u.is_empty()), file) {
            (Some(url), _) => Ok(Self::Url(url.to_string())),
            (None, Some(file)) if file.is_image() => Ok(Self::File(file.clone())),
            (None, Some(_)) => Err(ValidationError::for_field(
                "file",
                "Please upload an image file",
            )),
            (None, None) => Err(ValidationError::for_field(
                "imageUrl",
                "Please provide an image URL or upload a file",
            )),
        }
    }

    /// The reference recorded with the submission.
    #[must_use]
    pub fn reference(&self) -> &str {
        match self {
            Self::Url(url) => url,
            Self::File(_) => "file-upload",
        }
    }

    /// The URL an image preview would load.
    #[must_use]
    pub fn preview_url(&self) -> String {
        match self {
            Self::Url(url) => url.clone(),
            Self::File(file) => file.data_url(),
        }
    }
}

/// One submission of a tool form.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolInvocation {
    /// Unique id of this submission.
    pub id: Uuid,
    /// The tool being invoked.
    pub tool: ToolId,
    /// Form parameters by field name.
    #[serde(default)]
    pub params: serde_json::Map<String, serde_json::Value>,
    /// Uploaded file, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<UploadedFile>,
    /// When the form was submitted.
    pub submitted_at: Timestamp,
}

impl ToolInvocation {
    /// Creates an invocation with no parameters.
    #[must_use]
    pub fn new(tool: ToolId) -> Self {
        Self {
            id: generate_uuid(),
            tool,
            params: serde_json::Map::new(),
            file: None,
            submitted_at: now_utc(),
        }
    }

    /// Sets a parameter.
    #[must_use]
    pub fn with_param(mut self, name: impl Into<String>, value: serde_json::Value) -> Self {
        self.params.insert(name.into(), value);
        self
    }

    /// Sets the `text` parameter.
    #[must_use]
    pub fn with_text(self, text: impl Into<String>) -> Self {
        self.with_param("text", serde_json::Value::String(text.into()))
    }

    /// Attaches an uploaded file.
    #[must_use]
    pub fn with_file(mut self, file: UploadedFile) -> Self {
        self.file = Some(file);
        self
    }

    /// Gets a string parameter.
    #[must_use]
    pub fn param_str(&self, name: &str) -> Option<&str> {
        self.params.get(name).and_then(serde_json::Value::as_str)
    }

    /// Deserializes the parameters into a typed request. Missing fields take
    /// the request's defaults; values outside an enumeration are reported
    /// as validation errors.
    pub fn parse_params<T: DeserializeOwned>(&self) -> Result<T> {
        let value = serde_json::Value::Object(self.params.clone());
        serde_json::from_value(value).map_err(|e| {
            TaswirError::Validation(ValidationError::new(format!(
                "Invalid parameters for {}: {e}",
                self.tool
            )))
        })
    }

    /// Converts to a dictionary representation.
    #[must_use]
    pub fn to_dict(&self) -> HashMap<String, serde_json::Value> {
        let mut map = HashMap::new();
        map.insert("id".to_string(), serde_json::json!(self.id.to_string()));
        map.insert("tool".to_string(), serde_json::json!(self.tool.as_str()));
        map.insert("params".to_string(), serde_json::Value::Object(self.params.clone()));
        if let Some(ref file) = self.file {
            map.insert(
                "file".to_string(),
                serde_json::json!({ "name": file.name, "size": file.size() }),
            );
        }
        map
    }
}
