//! Keyword-bucketed sentiment analysis.

use super::rules::{Predicate, ResolutionRule, RuleTable};
use crate::core::{
    Emotions, Highlight, HighlightSpan, Polarity, SentimentLabel, SentimentReport,
};
use regex::RegexBuilder;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Keywords of the positive bucket.
pub const POSITIVE_KEYWORDS: &[&str] = &["love", "happy", "great", "excellent", "amazing"];

/// Keywords of the negative bucket.
pub const NEGATIVE_KEYWORDS: &[&str] = &["hate", "terrible", "awful", "bad", "disappointed"];

/// Sentiment analysis form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentimentRequest {
    /// Text to analyze.
    #[serde(default)]
    pub text: String,
}

impl SentimentRequest {
    /// Creates a request.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

/// Canned payload of one sentiment bucket.
#[derive(Debug)]
pub struct SentimentBucket {
    /// Label.
    pub label: SentimentLabel,
    /// Score in `[0, 1]`.
    pub score: f64,
    /// Emotion breakdown.
    pub emotions: Emotions,
    /// Highlight words.
    pub highlights: &'static [(&'static str, Polarity)],
}

static POSITIVE: SentimentBucket = SentimentBucket {
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
    highlights: &[
        ("love", Polarity::Positive),
        ("amazing", Polarity::Positive),
        ("great", Polarity::Positive),
        ("excellent", Polarity::Positive),
    ],
};

static NEGATIVE: SentimentBucket = SentimentBucket {
    label: SentimentLabel::Negative,
    score: 0.15,
    emotions: Emotions {
        joy: 0.1,
        surprise: 0.2,
        trust: 0.1,
        anticipation: 0.2,
        anger: 0.6,
        disgust: 0.5,
        fear: 0.4,
        sadness: 0.7,
    },
    highlights: &[
        ("hate", Polarity::Negative),
        ("terrible", Polarity::Negative),
        ("awful", Polarity::Negative),
        ("disappointed", Polarity::Negative),
    ],
};

static NEUTRAL: SentimentBucket = SentimentBucket {
    label: SentimentLabel::Neutral,
    score: 0.5,
    emotions: Emotions {
        joy: 0.3,
        surprise: 0.3,
        trust: 0.4,
        anticipation: 0.3,
        anger: 0.3,
        disgust: 0.2,
        fear: 0.2,
        sadness: 0.3,
    },
    highlights: &[
        ("think", Polarity::Neutral),
        ("consider", Polarity::Neutral),
        ("maybe", Polarity::Neutral),
        ("possibly", Polarity::Neutral),
    ],
};

static MIXED: SentimentBucket = SentimentBucket {
    label: SentimentLabel::Mixed,
    score: 0.6,
    emotions: Emotions {
        joy: 0.5,
        surprise: 0.4,
        trust: 0.3,
        anticipation: 0.4,
        anger: 0.3,
        disgust: 0.2,
        fear: 0.2,
        sadness: 0.4,
    },
    highlights: &[
        ("good", Polarity::Positive),
        ("bad", Polarity::Negative),
        ("like", Polarity::Positive),
        ("dislike", Polarity::Negative),
    ],
};

// Mixed is tested first so opposing keywords never fall into a single-polarity bucket.
static RULES: [ResolutionRule<&SentimentBucket>; 3] = [
    ResolutionRule {
        name: "mixed",
        predicate: Predicate::Any(&[
            Predicate::All(&[
                Predicate::AnyOf(POSITIVE_KEYWORDS),
                Predicate::AnyOf(NEGATIVE_KEYWORDS),
            ]),
            Predicate::AllOf(&["good", "bad"]),
            Predicate::AllOf(&["like", "dislike"]),
            Predicate::AllOf(&["happy", "sad"]),
        ]),
        payload: &MIXED,
    },
    ResolutionRule {
        name: "positive",
        predicate: Predicate::AnyOf(POSITIVE_KEYWORDS),
        payload: &POSITIVE,
    },
    ResolutionRule {
        name: "negative",
        predicate: Predicate::AnyOf(NEGATIVE_KEYWORDS),
        payload: &NEGATIVE,
    },
];

static FALLBACK: ResolutionRule<&SentimentBucket> = ResolutionRule {
    name: "neutral",
    predicate: Predicate::AnyOf(&[]),
    payload: &NEUTRAL,
};

/// The sentiment rule table.
pub static SENTIMENT_RULES: RuleTable<&SentimentBucket> = RuleTable::new(&RULES, &FALLBACK);

/// Resolves the sentiment bucket for `text` and builds the report.
#[must_use]
pub fn analyze(request: &SentimentRequest) -> SentimentReport {
    let rule = SENTIMENT_RULES.resolve(&request.text);
    let bucket = rule.payload;
    debug!(bucket = rule.name, score = bucket.score, "Sentiment bucket resolved");

    SentimentReport {
        text: request.text.clone(),
        label: bucket.label,
        score: bucket.score,
        emotions: bucket.emotions,
        highlights: bucket
            .highlights
            .iter()
            .map(|(text, sentiment)| Highlight {
                text: (*text).to_string(),
                sentiment: *sentiment,
            })
            .collect(),
        spans: highlight_spans(&request.text, bucket.highlights),
    }
}

/// Finds whole-word, case-insensitive occurrences of each highlight word,
/// ordered by position. Overlapping matches keep the earliest.
#[must_use]
pub fn highlight_spans(text: &str, highlights: &[(&str, Polarity)]) -> Vec<HighlightSpan> {
    let mut spans = Vec::new();

    for (word, sentiment) in highlights {
        let pattern = format!(r"\b{}\b", regex::escape(word));
        let Ok(re) = RegexBuilder::new(&pattern).case_insensitive(true).build() else {
            continue;
        };
        spans.extend(re.find_iter(text).map(|m| HighlightSpan {
            start: m.start(),
            end: m.end(),
            sentiment: *sentiment,
        }));
    }

    spans.sort_by_key(|s| (s.start, s.end));
    let mut merged: Vec<HighlightSpan> = Vec::with_capacity(spans.len());
    for span in spans {
        if merged.last().map_or(true, |last| span.start >= last.end) {
            merged.push(span);
        }
    }
    merged
}
