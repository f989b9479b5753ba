//! Session history tape
//!
//! A bounded, newest-first list of completed calculations. The tape is owned
//! by the engine's caller and fed only by successful `Equals` outcomes.

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use uuid::Uuid;

/// A single completed calculation on the tape
///
/// Immutable once created; entries leave the tape only through capacity
/// eviction or a full clear.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Unique entry id
    pub id: String,
    /// The evaluated expression, e.g. `"5 ÷ 2 ="`
    pub expression: String,
    /// The result in canonical textual form
    pub result: String,
    /// Unix epoch millis at evaluation time
    pub timestamp: u64,
}

impl HistoryEntry {
    /// Creates an entry stamped with the current time
    #[must_use]
    pub fn new(expression: String, result: String) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            expression,
            result,
            timestamp: current_timestamp(),
        }
    }

    /// Creates an entry with a fixed timestamp (for testing)
    #[must_use]
    pub fn with_timestamp(expression: String, result: String, timestamp: u64) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            expression,
            result,
            timestamp,
        }
    }

    /// Returns the tape line for this entry
    #[must_use]
    pub fn display(&self) -> String {
        format!("{} {}", self.expression, self.result)
    }
}

/// Returns the current timestamp in milliseconds
fn current_timestamp() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

/// Bounded history tape, newest entry first
///
/// Inserting past capacity evicts the oldest entries from the tail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryTape {
    entries: VecDeque<HistoryEntry>,
    max_entries: usize,
}

impl Default for HistoryTape {
    fn default() -> Self {
        Self::new()
    }
}

impl HistoryTape {
    /// Default maximum tape length
    pub const DEFAULT_MAX_ENTRIES: usize = 50;

    /// Creates an empty tape with the default capacity
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: VecDeque::new(),
            max_entries: Self::DEFAULT_MAX_ENTRIES,
        }
    }

    /// Creates an empty tape with a custom capacity
    #[must_use]
    pub fn with_capacity(max_entries: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(max_entries),
            max_entries,
        }
    }

    /// Inserts an entry at the front, evicting past capacity
    pub fn push(&mut self, entry: HistoryEntry) {
        self.entries.push_front(entry);
        self.entries.truncate(self.max_entries);
    }

    /// Returns the number of entries
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the tape is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the maximum number of entries
    #[must_use]
    pub fn max_entries(&self) -> usize {
        self.max_entries
    }

    /// Clears all entries
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Returns an iterator over the entries (newest first)
    pub fn iter(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter()
    }

    /// Returns an iterator over the entries (oldest first)
    pub fn iter_chronological(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter().rev()
    }

    /// Returns the entry at the given index (0 = newest)
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&HistoryEntry> {
        self.entries.get(index)
    }

    /// Returns the most recent entry
    #[must_use]
    pub fn latest(&self) -> Option<&HistoryEntry> {
        self.entries.front()
    }

    /// Returns the oldest entry still on the tape
    #[must_use]
    pub fn oldest(&self) -> Option<&HistoryEntry> {
        self.entries.back()
    }

    /// Finds an entry by id, for recall into the engine
    #[must_use]
    pub fn select(&self, id: &str) -> Option<&HistoryEntry> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    /// Serializes the tape to JSON (newest first)
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.entries.iter().collect::<Vec<_>>())
    }

    /// Deserializes a tape from JSON produced by [`Self::to_json`]
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let entries: Vec<HistoryEntry> = serde_json::from_str(json)?;
        let mut tape = Self::new();
        for entry in entries.into_iter().rev() {
            tape.push(entry);
        }
        Ok(tape)
    }

    /// Exports the tape as one line per entry, oldest first
    #[must_use]
    pub fn export_formatted(&self) -> String {
        self.iter_chronological()
            .map(HistoryEntry::display)
            .collect::<Vec<_>>()
            .join("\n")
    }
}
