//! In-process activity log
//!
//! Entries are kept for the lifetime of the process only and are never
//! written to disk.

use chrono::{DateTime, Utc};

/// Separator between an entry's operation key and its subject
pub const KEY_SEPARATOR: char = ':';

/// One completed operation
#[derive(Debug, Clone, PartialEq)]
pub struct ActivityEntry {
    /// 1-based position in the log
    pub sequence: usize,
    /// When the operation completed (UTC)
    pub recorded_at: DateTime<Utc>,
    /// Human-readable description, e.g. `User created: a@b.co`
    pub description: String,
}

impl ActivityEntry {
    /// The text before the first `:`, or the whole description if it has none
    pub fn operation_key(&self) -> &str {
        operation_key(&self.description)
    }
}

/// Extract the operation key from a description
pub fn operation_key(description: &str) -> &str {
    match description.split_once(KEY_SEPARATOR) {
        Some((key, _)) => key,
        None => description,
    }
}

/// Append-only ordered log of completed operations
#[derive(Debug, Clone, Default)]
pub struct ActivityLog {
    entries: Vec<ActivityEntry>,
}

impl ActivityLog {
    /// Create an empty log
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry
    pub fn record(&mut self, description: impl Into<String>) -> &ActivityEntry {
        let entry = ActivityEntry {
            sequence: self.entries.len() + 1,
            recorded_at: Utc::now(),
            description: description.into(),
        };
        tracing::debug!("Activity #{}: {}", entry.sequence, entry.description);
        self.entries.push(entry);
        &self.entries[self.entries.len() - 1]
    }

    /// All entries, oldest first
    pub fn entries(&self) -> &[ActivityEntry] {
        &self.entries
    }

    /// Entry descriptions, oldest first
    pub fn descriptions(&self) -> Vec<String> {
        self.entries.iter().map(|e| e.description.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
