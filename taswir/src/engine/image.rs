//! Static image analysis filtered by the selected options.

use crate::core::percent;
use crate::tools::ImageSource;
use serde::{Deserialize, Serialize};
use tracing::debug;

const fn yes() -> bool {
    true
}

/// Which analysis categories to include.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[allow(clippy::struct_excessive_bools)]
pub struct ImageOptions {
    /// Object detection.
    #[serde(default = "yes")]
    pub detect_objects: bool,
    /// Labels.
    #[serde(default = "yes")]
    pub detect_labels: bool,
    /// Dominant colors.
    #[serde(default = "yes")]
    pub detect_colors: bool,
    /// Text detection.
    #[serde(default = "yes")]
    pub detect_text: bool,
    /// Face detection.
    #[serde(default = "yes")]
    pub detect_faces: bool,
    /// Landmark detection.
    #[serde(default)]
    pub detect_landmarks: bool,
    /// Safe search.
    #[serde(default = "yes")]
    pub safe_search: bool,
}

impl Default for ImageOptions {
    fn default() -> Self {
        Self {
            detect_objects: true,
            detect_labels: true,
            detect_colors: true,
            detect_text: true,
            detect_faces: true,
            detect_landmarks: false,
            safe_search: true,
        }
    }
}

impl ImageOptions {
    /// Every category enabled.
    #[must_use]
    pub const fn all() -> Self {
        Self {
            detect_objects: true,
            detect_labels: true,
            detect_colors: true,
            detect_text: true,
            detect_faces: true,
            detect_landmarks: true,
            safe_search: true,
        }
    }

    /// Every category disabled.
    #[must_use]
    pub const fn none() -> Self {
        Self {
            detect_objects: false,
            detect_labels: false,
            detect_colors: false,
            detect_text: false,
            detect_faces: false,
            detect_landmarks: false,
            safe_search: false,
        }
    }
}

/// Image analyzer form fields, before the image source is resolved.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageParams {
    /// Image URL as typed.
    #[serde(default)]
    pub image_url: String,
    /// Category toggles.
    #[serde(default)]
    pub options: ImageOptions,
}

/// A validated image analysis request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageRequest {
    /// The image.
    pub source: ImageSource,
    /// Category toggles.
    pub options: ImageOptions,
}

impl ImageRequest {
    /// Creates a request.
    #[must_use]
    pub fn new(source: ImageSource, options: ImageOptions) -> Self {
        Self { source, options }
    }
}

/// Normalized bounding box.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    /// Left edge.
    pub x: f64,
    /// Top edge.
    pub y: f64,
    /// Width.
    pub width: f64,
    /// Height.
    pub height: f64,
}

/// A detected object.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DetectedObject {
    /// Object label.
    pub label: &'static str,
    /// Confidence in `[0, 1]`.
    pub confidence: f64,
    /// Where it is.
    pub bounding_box: BoundingBox,
}

/// An image label.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ImageTag {
    /// Label name.
    pub name: &'static str,
    /// Confidence in `[0, 1]`.
    pub confidence: f64,
}

/// A dominant color.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DominantColor {
    /// Hex value.
    pub color: &'static str,
    /// Fraction of pixels.
    pub pixel_fraction: f64,
    /// Color name.
    pub name: &'static str,
}

/// Emotions read from a face.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FaceEmotions {
    /// Joy.
    pub joy: f64,
    /// Sorrow.
    pub sorrow: f64,
    /// Anger.
    pub anger: f64,
    /// Surprise.
    pub surprise: f64,
}

/// A detected face.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Face {
    /// Where it is.
    pub bounding_box: BoundingBox,
    /// Emotion scores.
    pub emotions: FaceEmotions,
}

/// Safe-search likelihood.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Likelihood {
    /// Very unlikely.
    VeryUnlikely,
    /// Unlikely.
    Unlikely,
    /// Possible.
    Possible,
    /// Likely.
    Likely,
    /// Very likely.
    VeryLikely,
}

impl Likelihood {
    /// The wire name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::VeryUnlikely => "VERY_UNLIKELY",
            Self::Unlikely => "UNLIKELY",
            Self::Possible => "POSSIBLE",
            Self::Likely => "LIKELY",
            Self::VeryLikely => "VERY_LIKELY",
        }
    }
}

/// Safe-search verdicts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SafeSearch {
    /// Adult content.
    pub adult: Likelihood,
    /// Spoof.
    pub spoof: Likelihood,
    /// Medical.
    pub medical: Likelihood,
    /// Violence.
    pub violence: Likelihood,
    /// Racy content.
    pub racy: Likelihood,
}

impl SafeSearch {
    fn entries(self) -> [(&'static str, Likelihood); 5] {
        [
            ("adult", self.adult),
            ("spoof", self.spoof),
            ("medical", self.medical),
            ("violence", self.violence),
            ("racy", self.racy),
        ]
    }
}

/// The analysis, with a field per category. Categories not requested are `None`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageAnalysis {
    /// Detected objects.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub objects: Option<Vec<DetectedObject>>,
    /// Labels.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<ImageTag>>,
    /// Dominant colors.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub colors: Option<Vec<DominantColor>>,
    /// Text fragments.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<Vec<&'static str>>,
    /// Faces.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub faces: Option<Vec<Face>>,
    /// Landmarks.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub landmarks: Option<Vec<&'static str>>,
    /// Safe-search verdicts.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub safe_search: Option<SafeSearch>,
}

impl ImageAnalysis {
    /// The canned record, filtered to the enabled categories.
    #[must_use]
    pub fn canned(options: ImageOptions) -> Self {
        Self {
            objects: options.detect_objects.then(|| {
                vec![
                    object("Person", 0.98, (0.2, 0.3, 0.3, 0.5)),
                    object("Car", 0.92, (0.6, 0.7, 0.2, 0.2)),
                    object("Tree", 0.87, (0.8, 0.4, 0.15, 0.3)),
                ]
            }),
            tags: options.detect_labels.then(|| {
                [
                    ("outdoor", 0.95),
                    ("urban", 0.88),
                    ("daytime", 0.97),
                    ("street", 0.85),
                    ("city", 0.82),
                ]
                .into_iter()
                .map(|(name, confidence)| ImageTag { name, confidence })
                .collect()
            }),
            colors: options.detect_colors.then(|| {
                [
                    ("#4285F4", 0.3, "Blue"),
                    ("#34A853", 0.2, "Green"),
                    ("#FBBC05", 0.15, "Yellow"),
                    ("#EA4335", 0.1, "Red"),
                    ("#FFFFFF", 0.25, "White"),
                ]
                .into_iter()
                .map(|(color, pixel_fraction, name)| DominantColor {
                    color,
                    pixel_fraction,
                    name,
                })
                .collect()
            }),
            text: options
                .detect_text
                .then(|| vec!["STOP", "ONE WAY", "Main Street", "Cafe"]),
            faces: options.detect_faces.then(|| {
                vec![Face {
                    bounding_box: BoundingBox {
                        x: 0.2,
                        y: 0.3,
                        width: 0.1,
                        height: 0.1,
                    },
                    emotions: FaceEmotions {
                        joy: 0.8,
                        sorrow: 0.05,
                        anger: 0.02,
                        surprise: 0.13,
                    },
                }]
            }),
            landmarks: options.detect_landmarks.then(Vec::new),
            safe_search: options.safe_search.then_some(SafeSearch {
                adult: Likelihood::VeryUnlikely,
                spoof: Likelihood::Unlikely,
                medical: Likelihood::VeryUnlikely,
                violence: Likelihood::VeryUnlikely,
                racy: Likelihood::VeryUnlikely,
            }),
        }
    }

    /// Flattens the analysis into list items.
    #[must_use]
    pub fn items(&self) -> Vec<String> {
        let mut items = Vec::new();

        for obj in self.objects.iter().flatten() {
            items.push(format!("Object: {} ({})", obj.label, percent(obj.confidence)));
        }
        for tag in self.tags.iter().flatten() {
            items.push(format!("Label: {} ({})", tag.name, percent(tag.confidence)));
        }
        for color in self.colors.iter().flatten() {
            items.push(format!(
                "Color: {} {} ({})",
                color.name,
                color.color,
                percent(color.pixel_fraction)
            ));
        }
        for text in self.text.iter().flatten() {
            items.push(format!("Text: {text}"));
        }
        for (i, face) in self.faces.iter().flatten().enumerate() {
            let e = face.emotions;
            items.push(format!(
                "Face {}: joy {}, sorrow {}, anger {}, surprise {}",
                i + 1,
                percent(e.joy),
                percent(e.sorrow),
                percent(e.anger),
                percent(e.surprise)
            ));
        }
        if let Some(landmarks) = &self.landmarks {
            if landmarks.is_empty() {
                items.push("Landmarks: none detected".to_string());
            }
            for landmark in landmarks {
                items.push(format!("Landmark: {landmark}"));
            }
        }
        if let Some(safe) = self.safe_search {
            let verdicts: Vec<String> = safe
                .entries()
                .iter()
                .map(|(name, likelihood)| format!("{name} {}", likelihood.as_str()))
                .collect();
            items.push(format!("Safe search: {}", verdicts.join(", ")));
        }

        items
    }
}

fn object(label: &'static str, confidence: f64, bbox: (f64, f64, f64, f64)) -> DetectedObject {
    DetectedObject {
        label,
        confidence,
        bounding_box: BoundingBox {
            x: bbox.0,
            y: bbox.1,
            width: bbox.2,
            height: bbox.3,
        },
    }
}

/// Runs the static analysis and returns the list items, led by the image reference.
#[must_use]
pub fn analyze(request: &ImageRequest) -> Vec<String> {
    let analysis = ImageAnalysis::canned(request.options);
    let mut items = vec![format!("Image: {}", request.source.reference())];
    items.extend(analysis.items());
    debug!(
        source = request.source.reference(),
        items = items.len(),
        "Image analysis resolved"
    );
    items
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::UploadedFile;

    fn url_request(options: ImageOptions) -> ImageRequest {
        ImageRequest::new(ImageSource::Url("https://img.test/a.png".to_string()), options)
    }

    #[test]
    fn test_default_options() {
        let options = ImageOptions::default();
        assert!(options.detect_objects);
        assert!(!options.detect_landmarks);

        let parsed: ImageOptions = serde_json::from_value(serde_json::json!({})).unwrap();
        assert_eq!(parsed, options);
    }

    #[test]
    fn test_default_item_count() {
        let items = analyze(&url_request(ImageOptions::default()));
        // image + 3 objects + 5 labels + 5 colors + 4 text + 1 face + safe search
        assert_eq!(items.len(), 20);
        assert_eq!(items[0], "Image: https://img.test/a.png");
        assert_eq!(items[1], "Object: Person (98%)");
    }

    #[test]
    fn test_filtering() {
        let options = ImageOptions {
            detect_text: true,
            ..ImageOptions::none()
        };
        let analysis = ImageAnalysis::canned(options);
        assert!(analysis.objects.is_none());
        assert_eq!(analysis.text.as_ref().map(Vec::len), Some(4));

        let items = analyze(&url_request(options));
        assert_eq!(&items[1..], &["Text: STOP", "Text: ONE WAY", "Text: Main Street", "Text: Cafe"]);
    }

    #[test]
    fn test_nothing_selected() {
        assert_eq!(analyze(&url_request(ImageOptions::none())).len(), 1);
    }

    #[test]
    fn test_landmarks_empty() {
        let options = ImageOptions {
            detect_landmarks: true,
            ..ImageOptions::none()
        };
        let items = analyze(&url_request(options));
        assert_eq!(items[1], "Landmarks: none detected");
    }

    #[test]
    fn test_safe_search_line() {
        let options = ImageOptions {
            safe_search: true,
            ..ImageOptions::none()
        };
        let items = analyze(&url_request(options));
        assert_eq!(
            items[1],
            "Safe search: adult VERY_UNLIKELY, spoof UNLIKELY, medical VERY_UNLIKELY, \
             violence VERY_UNLIKELY, racy VERY_UNLIKELY"
        );
    }

    #[test]
    fn test_uploaded_file_reference() {
        let file = UploadedFile::new("cat.png", "image/png", vec![1]);
        let request = ImageRequest::new(ImageSource::File(file), ImageOptions::none());
        assert_eq!(analyze(&request), vec!["Image: file-upload"]);
    }

    #[test]
    fn test_serialization_skips_disabled() {
        let value = serde_json::to_value(ImageAnalysis::canned(ImageOptions::none())).unwrap();
        assert_eq!(value, serde_json::json!({}));
    }
}
