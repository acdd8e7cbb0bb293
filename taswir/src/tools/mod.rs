//! Tool table, input schemas and invocations.
//!
//! This module provides:
//! - The six tool definitions and their declared input schemas
//! - The immutable tool registry and gallery cards
//! - Invocation records and uploaded file references

mod definitions;
mod invocation;
mod registry;

pub use definitions::{FieldSpec, FieldType, InputSchema, ToolDefinition, ToolId};
pub use invocation::{ImageSource, ToolInvocation, UploadedFile};
pub use registry::{builtin_registry, ToolCard, ToolRegistry};
