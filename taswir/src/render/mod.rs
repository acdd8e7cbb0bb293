//! Output rendering.
//!
//! A [`ToolOutput`](crate::core::ToolOutput) maps to exactly one of three
//! display shapes, keyed on its tag. The renderer carries no tool logic.

mod clipboard;
mod view;

pub use clipboard::{copy_to_clipboard, Clipboard, MemoryClipboard};
#[cfg(test)]
pub use clipboard::MockClipboard;
pub use view::{render, RenderedView};
