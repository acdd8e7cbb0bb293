//! Core domain model types for taswir.
//!
//! This module contains the types shared by the engine, renderer and view:
//! - Output shape and gallery return type enums
//! - The `ToolOutput` tagged union
//! - Structured records and the option enums they carry

mod kind;
mod output;
#[cfg(test)]
mod output_tests;
mod records;

pub use kind::{OutputKind, ReturnType};
pub use output::ToolOutput;
pub use records::{
    percent, ChartData, ChartPoint, ChartType, CodeLanguage, CodeSnippet, DataFormat, Emotions,
    Highlight, HighlightSpan, Language, Polarity, SentimentLabel, SentimentReport,
    StructuredRecord, Translation,
};
