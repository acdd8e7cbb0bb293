//! The per-view session log.

use crate::utils::{format_iso, now_utc, Timestamp};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Entries every fresh log starts with.
pub const SEED_MESSAGES: [&str; 2] = ["Session started", "Tool initialized"];

/// One log line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    /// When it was appended.
    pub timestamp: Timestamp,
    /// The message.
    pub message: String,
}

impl fmt::Display for LogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", format_iso(&self.timestamp), self.message)
    }
}

/// Append-only log of pseudo-pipeline milestones.
///
/// The entry list only grows until [`reset`](Self::reset), which happens
/// when the active tool changes. Appending auto-expands the log panel and
/// starts a flash that lasts `flash_window`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionLog {
    entries: Vec<LogEntry>,
    expanded: bool,
    last_appended: Option<Timestamp>,
    flash_window: chrono::Duration,
}

impl Default for SessionLog {
    fn default() -> Self {
        Self::new(chrono::Duration::seconds(1))
    }
}

impl SessionLog {
    /// Creates a seeded, collapsed log.
    #[must_use]
    pub fn new(flash_window: chrono::Duration) -> Self {
        let mut log = Self {
            entries: Vec::new(),
            expanded: false,
            last_appended: None,
            flash_window,
        };
        log.reset();
        log
    }

    /// Appends a message stamped now.
    pub fn append(&mut self, message: impl Into<String>) -> &LogEntry {
        self.append_at(message, now_utc())
    }

    /// Appends a message with an explicit timestamp.
    pub fn append_at(&mut self, message: impl Into<String>, timestamp: Timestamp) -> &LogEntry {
        self.entries.push(LogEntry {
            timestamp,
            message: message.into(),
        });
        self.expanded = true;
        self.last_appended = Some(timestamp);
        &self.entries[self.entries.len() - 1]
    }

    /// Replaces the entries with the two seeds and collapses the panel.
    pub fn reset(&mut self) {
        let now = now_utc();
        self.entries = SEED_MESSAGES
            .iter()
            .map(|m| LogEntry {
                timestamp: now,
                message: (*m).to_string(),
            })
            .collect();
        self.expanded = false;
        self.last_appended = None;
    }

    /// Entries in insertion order.
    #[must_use]
    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    /// Messages in insertion order.
    #[must_use]
    pub fn messages(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.message.as_str()).collect()
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if there are no entries. A reset log always has the seeds.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether the log panel is open.
    #[must_use]
    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    /// Opens or closes the panel.
    pub fn set_expanded(&mut self, expanded: bool) {
        self.expanded = expanded;
    }

    /// Whether the "new entry" flash is showing at `now`.
    #[must_use]
    pub fn is_flashing_at(&self, now: Timestamp) -> bool {
        self.last_appended
            .is_some_and(|t| now >= t && now - t < self.flash_window)
    }

    /// Whether the flash is showing right now.
    #[must_use]
    pub fn is_flashing(&self) -> bool {
        self.is_flashing_at(now_utc())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_new_log_is_seeded_and_collapsed() {
        let log = SessionLog::default();
        assert_eq!(log.messages(), SEED_MESSAGES.to_vec());
        assert!(!log.is_expanded());
        assert!(!log.is_flashing());
    }

    #[test]
    fn test_append_preserves_order() {
        let mut log = SessionLog::default();
        log.append("Parameters validated");
        log.append("Processing request...");
        log.append("Output generated");

        assert_eq!(
            log.messages(),
            vec![
                "Session started",
                "Tool initialized",
                "Parameters validated",
                "Processing request...",
                "Output generated",
            ]
        );
        assert!(log.is_expanded());
    }

    #[test]
    fn test_flash_window() {
        let mut log = SessionLog::new(Duration::milliseconds(1000));
        let t0 = now_utc();
        log.append_at("x", t0);

        assert!(log.is_flashing_at(t0));
        assert!(log.is_flashing_at(t0 + Duration::milliseconds(999)));
        assert!(!log.is_flashing_at(t0 + Duration::milliseconds(1000)));
    }

    #[test]
    fn test_reset_returns_to_seeds() {
        let mut log = SessionLog::default();
        log.append("a");
        log.append("b");
        log.reset();

        assert_eq!(log.len(), 2);
        assert!(!log.is_expanded());
        assert!(!log.is_empty());
    }

    #[test]
    fn test_entry_display() {
        let mut log = SessionLog::default();
        let entry = log.append("Output generated").to_string();
        assert!(entry.starts_with('['));
        assert!(entry.ends_with("Z] Output generated"));
    }
}
