//! Benchmarks for canned-response resolution.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use taswir::engine::sentiment::{analyze, SentimentRequest};
use taswir::engine::translation::{translate, TranslationRequest};
use taswir::prelude::*;

const REVIEW: &str = "The food was good but the service was bad, and I hate waiting.";

fn sentiment_benchmark(c: &mut Criterion) {
    let request = SentimentRequest::new(REVIEW);
    c.bench_function("sentiment_analyze", |b| {
        b.iter(|| analyze(black_box(&request)))
    });
}

fn translation_benchmark(c: &mut Criterion) {
    let request = TranslationRequest::new(
        "Hello my friend thank you",
        taswir::core::Language::En,
        taswir::core::Language::Fr,
    );
    c.bench_function("translation_word_by_word", |b| {
        b.iter(|| translate(black_box(&request)))
    });
}

fn engine_benchmark(c: &mut Criterion) {
    let engine = ResolutionEngine::seeded(7);
    let invocation = ToolInvocation::new(ToolId::TextSummarizer)
        .with_text(REVIEW.repeat(20))
        .with_param("length", serde_json::json!(25));

    c.bench_function("engine_summarize", |b| {
        b.iter(|| engine.resolve_invocation(black_box(&invocation)))
    });
}

criterion_group!(
    benches,
    sentiment_benchmark,
    translation_benchmark,
    engine_benchmark
);
criterion_main!(benches);
