//! # Taswir
//!
//! A gallery of six mock AI tools whose answers come from static tables.
//!
//! Taswir provides:
//!
//! - **Resolution engine**: maps free-form input to canned outputs through
//!   ordered keyword rule tables, chart datasets, sentence slicing, and a
//!   filtered image analysis record
//! - **Input capture**: typed per-tool requests with defaults and
//!   synchronous precondition checks
//! - **Rendering**: markdown, list, and titled-text display shapes
//! - **Session view**: an append-only session log, simulated processing
//!   delays, routing, and the connect flow
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use taswir::prelude::*;
//!
//! let app = App::new(TaswirConfig::default());
//! let Page::Tool { session, .. } = app.navigate("/tools/sentiment-analysis") else {
//!     unreachable!();
//! };
//!
//! let output = session
//!     .submit(ToolInvocation::new(ToolId::SentimentAnalysis).with_text("I love this"))
//!     .await?;
//! println!("{}", render(&output));
//! ```

#![forbid(unsafe_code)]
#![warn(
    clippy::all,
    clippy::pedantic,
    missing_docs,
    rust_2018_idioms
)]
#![allow(
    clippy::module_name_repetitions,
    clippy::must_use_candidate,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc
)]

pub mod config;
pub mod core;
pub mod engine;
pub mod errors;
pub mod events;
pub mod observability;
pub mod render;
pub mod session;
pub mod tools;
pub mod utils;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::config::TaswirConfig;
    pub use crate::core::{OutputKind, ReturnType, StructuredRecord, ToolOutput};
    pub use crate::engine::{ResolutionEngine, Resolver, ToolRequest};
    pub use crate::errors::{Result, TaswirError, ToolError, ValidationError};
    pub use crate::events::{
        CollectingEventSink, EventSink, EventType, LoggingEventSink, NoOpEventSink, SessionEvent,
    };
    pub use crate::render::{render, Clipboard, MemoryClipboard, RenderedView};
    pub use crate::session::{
        App, ConnectFlow, ConnectForm, Notification, Page, Route, SessionLog, ToolSession,
    };
    pub use crate::tools::{
        builtin_registry, ToolDefinition, ToolId, ToolInvocation, ToolRegistry, UploadedFile,
    };
    pub use crate::utils::{generate_uuid, iso_timestamp, Timestamp};
}
