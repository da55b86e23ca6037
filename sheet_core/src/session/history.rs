//! Session history: newest-first log of roll outcomes

use crate::payload::Payload;
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Entries shown by `History::recent`
pub const RECENT_LIMIT: usize = 10;

/// One recorded outcome
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub label: String,
    pub payload: Payload,
    pub timestamp: DateTime<Local>,
}

impl HistoryEntry {
    /// Timestamp as `HH:MM:SS`
    pub fn time_label(&self) -> String {
        self.timestamp.format("%H:%M:%S").to_string()
    }
}

/// Append-only outcome log
///
/// Storage is unbounded; only the display window is capped.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct History {
    entries: VecDeque<HistoryEntry>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an outcome stamped with the current local time
    pub fn record(&mut self, label: impl Into<String>, payload: Payload) -> &HistoryEntry {
        self.record_at(label, payload, Local::now())
    }

    /// Record an outcome with an explicit timestamp
    pub fn record_at(
        &mut self,
        label: impl Into<String>,
        payload: Payload,
        timestamp: DateTime<Local>,
    ) -> &HistoryEntry {
        self.entries.push_front(HistoryEntry {
            label: label.into(),
            payload,
            timestamp,
        });
        &self.entries[0]
    }

    /// Up to `RECENT_LIMIT` entries, newest first
    pub fn recent(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter().take(RECENT_LIMIT)
    }

    /// Every entry, newest first
    pub fn iter(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter()
    }

    pub fn latest(&self) -> Option<&HistoryEntry> {
        self.entries.front()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
