//! Transient toast notifications.

use crate::errors::TaswirError;
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Toast style.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationVariant {
    /// Informational or success.
    #[default]
    Default,
    /// An error.
    Destructive,
}

/// A toast message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    /// Style.
    pub variant: NotificationVariant,
    /// Title line.
    pub title: String,
    /// Body line.
    pub description: String,
}

impl Notification {
    /// A default-variant notification.
    #[must_use]
    pub fn info(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            variant: NotificationVariant::Default,
            title: title.into(),
            description: description.into(),
        }
    }

    /// A destructive notification titled "Error".
    #[must_use]
    pub fn error(description: impl Into<String>) -> Self {
        Self {
            variant: NotificationVariant::Destructive,
            title: "Error".to_string(),
            description: description.into(),
        }
    }

    /// True for the destructive variant.
    #[must_use]
    pub fn is_destructive(&self) -> bool {
        self.variant == NotificationVariant::Destructive
    }
}

impl From<&TaswirError> for Notification {
    fn from(err: &TaswirError) -> Self {
        Self::error(err.to_string())
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.title, self.description)
    }
}

/// Shared queue of shown notifications. Clones share the queue.
#[derive(Debug, Clone, Default)]
pub struct Toaster {
    shown: Arc<Mutex<Vec<Notification>>>,
}

impl Toaster {
    /// Creates an empty toaster.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Shows a notification.
    pub fn show(&self, notification: Notification) {
        self.shown.lock().push(notification);
    }

    /// Everything shown so far.
    #[must_use]
    pub fn shown(&self) -> Vec<Notification> {
        self.shown.lock().clone()
    }

    /// The most recent notification.
    #[must_use]
    pub fn latest(&self) -> Option<Notification> {
        self.shown.lock().last().cloned()
    }

    /// Removes and returns everything shown so far.
    pub fn drain(&self) -> Vec<Notification> {
        std::mem::take(&mut *self.shown.lock())
    }
}
