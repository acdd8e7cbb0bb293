//! The mock tool-response resolution engine.
//!
//! Every tool resolves its input against static data:
//! - keyword-bucketed tools (code, sentiment, translation) walk an ordered
//!   rule table and fall back to a default bucket
//! - the visualizer indexes a dataset by chart type
//! - the summarizer slices sentences from the start and end of the text
//! - the image analyzer filters a fixed record by the selected options

pub mod codegen;
pub mod image;
mod request;
pub mod rules;
pub mod sentiment;
pub mod summarizer;
pub mod translation;
pub mod visualizer;


pub use request::ToolRequest;
pub use rules::{Predicate, ResolutionRule, RuleTable};

use crate::config::TaswirConfig;
use crate::core::{StructuredRecord, ToolOutput};
use crate::errors::Result;
use crate::tools::ToolInvocation;
use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info_span};

/// Maps a normalized request to a tool output.
pub trait Resolver: Send + Sync {
    /// Resolves one request.
    fn resolve(&self, request: &ToolRequest) -> Result<ToolOutput>;
}

/// The built-in resolver over the static tables.
#[derive(Debug)]
pub struct ResolutionEngine {
    rng: Mutex<StdRng>,
    max_upload_bytes: usize,
}

impl Default for ResolutionEngine {
    fn default() -> Self {
        Self::new(&TaswirConfig::default())
    }
}

impl ResolutionEngine {
    /// Creates an engine. Uses `config.rng_seed` when set, entropy otherwise.
    #[must_use]
    pub fn new(config: &TaswirConfig) -> Self {
        let rng = config
            .rng_seed
            .map_or_else(StdRng::from_entropy, StdRng::seed_from_u64);
        Self {
            rng: Mutex::new(rng),
            max_upload_bytes: config.max_upload_bytes,
        }
    }

    /// Creates an engine with a fixed seed.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::new(&TaswirConfig::default().with_rng_seed(seed))
    }

    /// Largest accepted upload.
    #[must_use]
    pub fn max_upload_bytes(&self) -> usize {
        self.max_upload_bytes
    }

    /// Captures and resolves an invocation in one step.
    pub fn resolve_invocation(&self, invocation: &ToolInvocation) -> Result<ToolOutput> {
        let request = ToolRequest::capture(invocation, self.max_upload_bytes)?;
        self.resolve(&request)
    }
}

impl Resolver for ResolutionEngine {
    fn resolve(&self, request: &ToolRequest) -> Result<ToolOutput> {
        let span = info_span!("resolve", tool_id = %request.tool());
        let _guard = span.enter();

        let output = match request {
            ToolRequest::Summarize(req) => {
                let summary = summarizer::summarize(req, &mut *self.rng.lock())?;
                ToolOutput::formatted(summary.to_markdown())
            }
            ToolRequest::Image(req) => ToolOutput::list(image::analyze(req)),
            ToolRequest::Visualize(req) => {
                ToolOutput::structured(StructuredRecord::Chart(visualizer::visualize(req)))
            }
            ToolRequest::Code(req) => {
                ToolOutput::structured(StructuredRecord::Code(codegen::generate(req)))
            }
            ToolRequest::Translate(req) => {
                ToolOutput::structured(StructuredRecord::Translation(translation::translate(req)))
            }
            ToolRequest::Sentiment(req) => {
                ToolOutput::structured(StructuredRecord::Sentiment(sentiment::analyze(req)))
            }
        };

        debug!(kind = %output.kind(), "Output resolved");
        Ok(output)
    }
}
