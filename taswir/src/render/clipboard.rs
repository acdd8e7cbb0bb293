//! Clipboard access for copy actions.

use super::RenderedView;
use crate::errors::Result;
use parking_lot::Mutex;
use tracing::debug;

/// A text clipboard.
#[cfg_attr(test, mockall::automock)]
pub trait Clipboard: Send + Sync {
    /// Replaces the clipboard contents.
    fn write_text(&self, text: &str) -> Result<()>;

    /// Reads the current contents.
    fn read_text(&self) -> Option<String>;
}

/// In-process clipboard.
#[derive(Debug, Default)]
pub struct MemoryClipboard {
    contents: Mutex<Option<String>>,
}

impl MemoryClipboard {
    /// Creates an empty clipboard.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Clipboard for MemoryClipboard {
    fn write_text(&self, text: &str) -> Result<()> {
        *self.contents.lock() = Some(text.to_string());
        Ok(())
    }

    fn read_text(&self) -> Option<String> {
        self.contents.lock().clone()
    }
}

/// Copies a rendered view to the clipboard.
pub fn copy_to_clipboard(view: &RenderedView, clipboard: &dyn Clipboard) -> Result<()> {
    let text = view.clipboard_text();
    debug!(bytes = text.len(), "Copying output to clipboard");
    clipboard.write_text(&text)
}
