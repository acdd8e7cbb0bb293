//! Deterministic sentence slicing with templated key points.

use crate::errors::ValidationError;
use rand::seq::SliceRandom;
use rand::Rng;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;
use std::sync::LazyLock;
use tracing::debug;

/// Smallest accepted summary length, in percent.
pub const MIN_LENGTH: u32 = 10;
/// Largest accepted summary length, in percent.
pub const MAX_LENGTH: u32 = 50;

const THEMES: &[&str] = &[
    "innovation and technology",
    "sustainability and environmental impact",
    "economic growth and development",
    "social responsibility and ethics",
    "global collaboration and partnerships",
];

const CONSIDERATIONS: &[&str] = &[
    "long-term sustainability",
    "potential risks and challenges",
    "implementation strategies",
    "resource allocation and optimization",
    "stakeholder engagement and communication",
];

#[allow(clippy::expect_used)]
static SENTENCE_BOUNDARY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[.!?]+").expect("valid regex"));

#[allow(clippy::expect_used)]
static NOTABLE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\d|important|key|significant|critical|essential|fundamental|crucial|vital")
        .expect("valid regex")
});

/// Key-point style.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SummaryStyle {
    /// Three short points.
    #[default]
    Concise,
    /// Five points walking through the text.
    Detailed,
    /// Notable sentences as bullets.
    Bullets,
}

/// Summarizer form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummarizeRequest {
    /// Text to summarize.
    #[serde(default)]
    pub text: String,
    /// Summary length as a percentage of the sentence count.
    #[serde(default = "default_length")]
    pub length: u32,
    /// Key-point style.
    #[serde(default)]
    pub style: SummaryStyle,
}

const fn default_length() -> u32 {
    30
}

impl Default for SummarizeRequest {
    fn default() -> Self {
        Self {
            text: String::new(),
            length: default_length(),
            style: SummaryStyle::default(),
        }
    }
}

impl SummarizeRequest {
    /// Creates a request with the default length and style.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    /// Sets the length percentage.
    #[must_use]
    pub fn with_length(mut self, length: u32) -> Self {
        self.length = length;
        self
    }

    /// Sets the style.
    #[must_use]
    pub fn with_style(mut self, style: SummaryStyle) -> Self {
        self.style = style;
        self
    }

    /// Rejects text without sentences and lengths outside the slider range.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if split_sentences(&self.text).is_empty() {
            return Err(ValidationError::for_field(
                "text",
                "Please enter some text to summarize",
            ));
        }
        if !(MIN_LENGTH..=MAX_LENGTH).contains(&self.length) {
            return Err(ValidationError::for_field(
                "length",
                format!("Summary length must be between {MIN_LENGTH}% and {MAX_LENGTH}%"),
            ));
        }
        Ok(())
    }
}

/// A generated summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    /// The selected sentences joined into a paragraph.
    pub summary: String,
    /// Key points for the chosen style.
    pub key_points: Vec<String>,
}

impl Summary {
    /// Renders the summary as markdown.
    #[must_use]
    pub fn to_markdown(&self) -> String {
        let mut out = format!("## Summary\n\n{}\n\n### Key Points", self.summary);
        for point in &self.key_points {
            let _ = write!(out, "\n- {point}");
        }
        out
    }
}

/// Splits text into trimmed, non-blank sentences.
#[must_use]
pub fn split_sentences(text: &str) -> Vec<&str> {
    SENTENCE_BOUNDARY
        .split(text)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}

/// Number of sentences a summary of `length` percent selects from `total`.
#[must_use]
pub fn selected_count(total: usize, length: u32) -> usize {
    (total * length as usize / 100).max(1)
}

/// Summarizes the text. Theme and consideration phrases are drawn from `rng`.
pub fn summarize<R: Rng + ?Sized>(
    request: &SummarizeRequest,
    rng: &mut R,
) -> Result<Summary, ValidationError> {
    request.validate()?;

    let sentences = split_sentences(&request.text);
    let total = sentences.len();
    let count = selected_count(total, request.length);
    let begin = count.div_ceil(2);
    let end = count - begin;

    let mut selected: Vec<&str> = sentences[..begin].to_vec();
    selected.extend_from_slice(&sentences[total - end..]);
    let summary = format!("{}.", selected.join(". "));

    let last = sentences[total - 1];
    let opening = first_words(&request.text, 5);
    let key_points = match request.style {
        SummaryStyle::Concise => vec![
            format!("The text discusses {opening}..."),
            format!("Key themes include {}", pick(THEMES, rng)),
            format!("The main conclusion is about {last}"),
        ],
        SummaryStyle::Detailed => vec![
            format!("The document begins by introducing {}", sentences[0]),
            format!("It then elaborates on {}", sentences[total / 3]),
            format!("Further analysis reveals {}", sentences[total / 2]),
            format!("Important considerations include {}", pick(CONSIDERATIONS, rng)),
            format!("The text concludes with {last}"),
        ],
        SummaryStyle::Bullets => {
            let notable: Vec<String> = sentences
                .iter()
                .filter(|s| NOTABLE.is_match(&s.to_lowercase()))
                .take(5)
                .map(|s| (*s).to_string())
                .collect();
            if notable.len() < 3 {
                vec![
                    format!("The text covers {opening}..."),
                    format!("Key point identified: {}", pick(THEMES, rng)),
                    format!("Conclusion: {last}"),
                ]
            } else {
                notable
            }
        }
    };

    debug!(
        sentences = total,
        selected = count,
        style = ?request.style,
        "Summary generated"
    );

    Ok(Summary {
        summary,
        key_points,
    })
}

fn first_words(text: &str, n: usize) -> String {
    text.split(' ').take(n).collect::<Vec<_>>().join(" ")
}

fn pick<R: Rng + ?Sized>(phrases: &'static [&'static str], rng: &mut R) -> &'static str {
    phrases.choose(rng).copied().unwrap_or(phrases[0])
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const TEXT: &str = "One. Two! Three? Four. Five. Six. Seven. Eight. Nine. Ten.";

    fn rng() -> StdRng {
        StdRng::seed_from_u64(7)
    }

    #[test]
    fn test_split_drops_blank_pieces() {
        assert_eq!(split_sentences("A.  ... B?!  "), vec!["A", "B"]);
    }

    #[test]
    fn test_selected_count() {
        assert_eq!(selected_count(10, 30), 3);
        assert_eq!(selected_count(10, 10), 1);
        assert_eq!(selected_count(3, 10), 1);
        assert_eq!(selected_count(20, 50), 10);
        assert_eq!(selected_count(7, 45), 3);
    }

    #[test]
    fn test_begin_and_end_slices() {
        let summary = summarize(&SummarizeRequest::new(TEXT), &mut rng()).unwrap();
        assert_eq!(summary.summary, "One. Two. Ten.");
    }

    #[test]
    fn test_even_count_splits_evenly() {
        let request = SummarizeRequest::new(TEXT).with_length(40);
        let summary = summarize(&request, &mut rng()).unwrap();
        assert_eq!(summary.summary, "One. Two. Nine. Ten.");
    }

    #[test]
    fn test_single_sentence() {
        let summary = summarize(&SummarizeRequest::new("Only one sentence"), &mut rng()).unwrap();
        assert_eq!(summary.summary, "Only one sentence.");
        assert_eq!(summary.key_points[2], "The main conclusion is about Only one sentence");
    }

    #[test]
    fn test_concise_points() {
        let summary = summarize(&SummarizeRequest::new(TEXT), &mut rng()).unwrap();
        assert_eq!(summary.key_points.len(), 3);
        assert_eq!(summary.key_points[0], "The text discusses One. Two! Three? Four. Five....");
        let theme = summary.key_points[1].trim_start_matches("Key themes include ");
        assert!(THEMES.contains(&theme));
    }

    #[test]
    fn test_detailed_points_positions() {
        let request = SummarizeRequest::new(TEXT).with_style(SummaryStyle::Detailed);
        let points = summarize(&request, &mut rng()).unwrap().key_points;

        assert_eq!(points.len(), 5);
        assert_eq!(points[0], "The document begins by introducing One");
        assert_eq!(points[1], "It then elaborates on Four");
        assert_eq!(points[2], "Further analysis reveals Six");
        assert_eq!(points[4], "The text concludes with Ten");
    }

    #[test]
    fn test_bullets_use_notable_sentences() {
        let text = "Revenue grew 12 percent. This is important. A key hire joined. \
                    Weather was fine. Costs fell 3 percent.";
        let request = SummarizeRequest::new(text).with_style(SummaryStyle::Bullets);
        let points = summarize(&request, &mut rng()).unwrap().key_points;

        assert_eq!(
            points,
            vec![
                "Revenue grew 12 percent",
                "This is important",
                "A key hire joined",
                "Costs fell 3 percent",
            ]
        );
    }

    #[test]
    fn test_bullets_fallback() {
        let request = SummarizeRequest::new(TEXT).with_style(SummaryStyle::Bullets);
        let points = summarize(&request, &mut rng()).unwrap().key_points;
        assert_eq!(points.len(), 3);
        assert!(points[0].starts_with("The text covers "));
        assert_eq!(points[2], "Conclusion: Ten");
    }

    #[test]
    fn test_same_seed_same_output() {
        let request = SummarizeRequest::new(TEXT).with_style(SummaryStyle::Detailed);
        let a = summarize(&request, &mut StdRng::seed_from_u64(42)).unwrap();
        let b = summarize(&request, &mut StdRng::seed_from_u64(42)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_rejects_empty_text() {
        let err = summarize(&SummarizeRequest::new("  "), &mut rng()).unwrap_err();
        assert_eq!(err.field.as_deref(), Some("text"));
    }

    #[test]
    fn test_rejects_length_out_of_range() {
        for length in [5, 55] {
            let err = SummarizeRequest::new(TEXT).with_length(length).validate().unwrap_err();
            assert_eq!(err.field.as_deref(), Some("length"));
        }
    }

    #[test]
    fn test_markdown() {
        let summary = Summary {
            summary: "A.".to_string(),
            key_points: vec!["x".to_string(), "y".to_string()],
        };
        assert_eq!(summary.to_markdown(), "## Summary\n\nA.\n\n### Key Points\n- x\n- y");
    }
}
