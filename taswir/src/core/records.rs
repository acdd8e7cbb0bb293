//! Structured records carried by [`ToolOutput::Structured`](super::ToolOutput).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::fmt::Write as _;

/// Languages offered by the translation tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// English.
    En,
    /// Spanish.
    Es,
    /// French.
    Fr,
    /// German.
    De,
}

impl Language {
    /// All languages in selector order.
    pub const ALL: [Self; 4] = [Self::En, Self::Es, Self::Fr, Self::De];

    /// The ISO code.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Es => "es",
            Self::Fr => "fr",
            Self::De => "de",
        }
    }

    /// The English display name.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::En => "English",
            Self::Es => "Spanish",
            Self::Fr => "French",
            Self::De => "German",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Languages offered by the code generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CodeLanguage {
    /// JavaScript.
    #[serde(rename = "javascript")]
    JavaScript,
    /// Python.
    #[serde(rename = "python")]
    Python,
    /// Java.
    #[serde(rename = "java")]
    Java,
    /// C++.
    #[serde(rename = "c++")]
    Cpp,
    /// Rust.
    #[serde(rename = "rust")]
    Rust,
}

impl CodeLanguage {
    /// The selector value.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::JavaScript => "javascript",
            Self::Python => "python",
            Self::Java => "java",
            Self::Cpp => "c++",
            Self::Rust => "rust",
        }
    }

    /// The display name.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::JavaScript => "JavaScript",
            Self::Python => "Python",
            Self::Java => "Java",
            Self::Cpp => "C++",
            Self::Rust => "Rust",
        }
    }
}

impl Default for CodeLanguage {
    fn default() -> Self {
        Self::JavaScript
    }
}

impl fmt::Display for CodeLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Chart types offered by the data visualizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartType {
    /// Bar chart.
    Bar,
    /// Line chart.
    Line,
    /// Pie chart.
    Pie,
}

impl Default for ChartType {
    fn default() -> Self {
        Self::Bar
    }
}

impl fmt::Display for ChartType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bar => write!(f, "bar"),
            Self::Line => write!(f, "line"),
            Self::Pie => write!(f, "pie"),
        }
    }
}

/// Input data formats accepted by the data visualizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataFormat {
    /// Comma separated values.
    Csv,
    /// JSON array of `{name, value}` objects.
    Json,
}

impl Default for DataFormat {
    fn default() -> Self {
        Self::Csv
    }
}

impl fmt::Display for DataFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Csv => write!(f, "csv"),
            Self::Json => write!(f, "json"),
        }
    }
}

/// One named value in a chart dataset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartPoint {
    /// Category or x-axis label.
    pub name: String,
    /// The value.
    pub value: u32,
}

/// A canned chart dataset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartData {
    /// The selected chart type.
    pub chart_type: ChartType,
    /// The declared input format.
    pub data_format: DataFormat,
    /// The dataset.
    pub points: Vec<ChartPoint>,
    /// Slice colors, only populated for pie charts.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub palette: Vec<String>,
}

impl ChartData {
    /// Sum of all point values.
    #[must_use]
    pub fn total(&self) -> u64 {
        self.points.iter().map(|p| u64::from(p.value)).sum()
    }
}

/// A canned code snippet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeSnippet {
    /// The requested language.
    pub language: CodeLanguage,
    /// The keyword bucket that matched the prompt.
    pub bucket: String,
    /// The snippet source.
    pub code: String,
}

/// A mock translation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Translation {
    /// Source language.
    pub source_language: Language,
    /// Target language.
    pub target_language: Language,
    /// Text as entered.
    pub source_text: String,
    /// Translated (or placeholder) text.
    pub translated_text: String,
    /// False when the default placeholder bucket was used.
    pub from_table: bool,
}

impl Translation {
    /// Header line, e.g. "Translated from English to Spanish".
    #[must_use]
    pub fn heading(&self) -> String {
        format!(
            "Translated from {} to {}",
            self.source_language.display_name(),
            self.target_language.display_name()
        )
    }
}

/// Overall sentiment bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SentimentLabel {
    /// Positive.
    Positive,
    /// Negative.
    Negative,
    /// Neutral.
    Neutral,
    /// Mixed.
    Mixed,
}

impl fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Positive => write!(f, "Positive"),
            Self::Negative => write!(f, "Negative"),
            Self::Neutral => write!(f, "Neutral"),
            Self::Mixed => write!(f, "Mixed"),
        }
    }
}

/// Polarity of a highlighted word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Polarity {
    /// Positive word.
    Positive,
    /// Negative word.
    Negative,
    /// Neutral word.
    Neutral,
}

impl Polarity {
    /// Marker used when highlights are rendered as plain text.
    #[must_use]
    pub const fn marker(self) -> char {
        match self {
            Self::Positive => '+',
            Self::Negative => '-',
            Self::Neutral => '~',
        }
    }
}

/// Emotion scores in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Emotions {
    /// Joy.
    pub joy: f64,
    /// Surprise.
    pub surprise: f64,
    /// Trust.
    pub trust: f64,
    /// Anticipation.
    pub anticipation: f64,
    /// Anger.
    pub anger: f64,
    /// Disgust.
    pub disgust: f64,
    /// Fear.
    pub fear: f64,
    /// Sadness.
    pub sadness: f64,
}

impl Emotions {
    /// Named scores in display order.
    #[must_use]
    pub fn entries(&self) -> [(&'static str, f64); 8] {
        [
            ("joy", self.joy),
            ("surprise", self.surprise),
            ("trust", self.trust),
            ("anticipation", self.anticipation),
            ("anger", self.anger),
            ("disgust", self.disgust),
            ("fear", self.fear),
            ("sadness", self.sadness),
        ]
    }
}

/// A word the sentiment bucket calls out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Highlight {
    /// The word.
    pub text: String,
    /// Its polarity.
    pub sentiment: Polarity,
}

/// Where a highlight word occurs in the analyzed text (byte offsets).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighlightSpan {
    /// Start offset.
    pub start: usize,
    /// End offset (exclusive).
    pub end: usize,
    /// Polarity of the matched word.
    pub sentiment: Polarity,
}

/// A canned sentiment analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentReport {
    /// The analyzed text.
    pub text: String,
    /// The bucket label.
    pub label: SentimentLabel,
    /// The bucket score.
    pub score: f64,
    /// Emotion breakdown.
    pub emotions: Emotions,
    /// Words the bucket highlights.
    pub highlights: Vec<Highlight>,
    /// Occurrences of those words in `text`, ordered by position.
    #[serde(default)]
    pub spans: Vec<HighlightSpan>,
}

impl SentimentReport {
    /// The score as a whole percentage.
    #[must_use]
    pub fn score_percent(&self) -> String {
        percent(self.score)
    }

    /// The text with highlighted words wrapped as `[+word]`, `[-word]` or `[~word]`.
    #[must_use]
    pub fn marked_text(&self) -> String {
        let mut out = String::with_capacity(self.text.len() + self.spans.len() * 3);
        let mut cursor = 0;
        for span in &self.spans {
            if span.start < cursor {
                continue;
            }
            out.push_str(&self.text[cursor..span.start]);
            out.push('[');
            out.push(span.sentiment.marker());
            out.push_str(&self.text[span.start..span.end]);
            out.push(']');
            cursor = span.end;
        }
        out.push_str(&self.text[cursor..]);
        out
    }
}

/// Formats a `[0, 1]` score as a whole percentage.
#[must_use]
pub fn percent(score: f64) -> String {
    format!("{:.0}%", score * 100.0)
}

/// A structured record produced by the resolution engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum StructuredRecord {
    /// Chart dataset.
    Chart(ChartData),
    /// Code snippet.
    Code(CodeSnippet),
    /// Translation.
    Translation(Translation),
    /// Sentiment analysis.
    Sentiment(SentimentReport),
}

impl StructuredRecord {
    /// Short title shown above the text block.
    #[must_use]
    pub fn title(&self) -> String {
        match self {
            Self::Chart(chart) => format!("{} chart", capitalize(&chart.chart_type.to_string())),
            Self::Code(snippet) => format!("{} code", snippet.language.display_name()),
            Self::Translation(t) => t.heading(),
            Self::Sentiment(_) => "Overall Sentiment".to_string(),
        }
    }

    /// The record flattened into display text.
    #[must_use]
    pub fn display_text(&self) -> String {
        match self {
            Self::Chart(chart) => {
                let mut out = String::new();
                for point in &chart.points {
                    let _ = writeln!(out, "{}: {}", point.name, point.value);
                }
                let _ = write!(out, "Total: {}", chart.total());
                out
            }
            Self::Code(snippet) => snippet.code.clone(),
            Self::Translation(t) => t.translated_text.clone(),
            Self::Sentiment(report) => {
                let mut out = String::new();
                let _ = writeln!(out, "{} ({})", report.label, report.score_percent());
                let _ = writeln!(out, "Emotion Breakdown:");
                for (name, score) in report.emotions.entries() {
                    let _ = writeln!(out, "  {name}: {}", percent(score));
                }
                let _ = write!(out, "Text: {}", report.marked_text());
                out
            }
        }
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    chars
        .next()
        .map(|first| first.to_uppercase().chain(chars).collect())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(text: &str, spans: Vec<HighlightSpan>) -> SentimentReport {
        SentimentReport {
            text: text.to_string(),
            label: SentimentLabel::Positive,
            score: 0.85,
            emotions: Emotions {
                joy: 0.7,
                surprise: 0.2,
                trust: 0.6,
                anticipation: 0.3,
                anger: 0.05,
                disgust: 0.02,
                fear: 0.03,
                sadness: 0.1,
            },
            highlights: Vec::new(),
            spans,
        }
    }

    #[test]
    fn test_language_serde_codes() {
        let json = serde_json::to_string(&Language::De).unwrap();
        assert_eq!(json, r#""de""#);
        assert_eq!(Language::Fr.display_name(), "French");
    }

    #[test]
    fn test_code_language_cpp_rename() {
        let lang: CodeLanguage = serde_json::from_str(r#""c++""#).unwrap();
        assert_eq!(lang, CodeLanguage::Cpp);
        assert_eq!(lang.display_name(), "C++");
    }

    #[test]
    fn test_percent_rounding() {
        assert_eq!(percent(0.85), "85%");
        assert_eq!(percent(0.05), "5%");
        assert_eq!(percent(0.6), "60%");
    }

    #[test]
    fn test_marked_text() {
        let r = report(
            "I love it",
            vec![HighlightSpan { start: 2, end: 6, sentiment: Polarity::Positive }],
        );
        assert_eq!(r.marked_text(), "I [+love] it");
    }

    #[test]
    fn test_chart_display_text() {
        let record = StructuredRecord::Chart(ChartData {
            chart_type: ChartType::Pie,
            data_format: DataFormat::Json,
            points: vec![
                ChartPoint { name: "Group A".to_string(), value: 400 },
                ChartPoint { name: "Group B".to_string(), value: 300 },
            ],
            palette: vec!["#0088FE".to_string()],
        });

        assert_eq!(record.title(), "Pie chart");
        assert_eq!(record.display_text(), "Group A: 400\nGroup B: 300\nTotal: 700");
    }

    #[test]
    fn test_record_serialization_tag() {
        let record = StructuredRecord::Code(CodeSnippet {
            language: CodeLanguage::Rust,
            bucket: "hello-world".to_string(),
            code: "fn main() {}".to_string(),
        });
        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["kind"], "code");
        assert_eq!(value["language"], "rust");
    }
}
