use crate::domain::HistoryEntry;
use crate::persistence::{atomic_write, read_file};
use anyhow::Result;
use std::path::PathBuf;

/// Durable, append-only record of completed sessions, newest-first.
///
/// The whole collection is rewritten on every append. That is a deliberate
/// full-overwrite strategy: the history is a single user's manual entries
/// and stays small. An incremental log would only pay off at a scale this
/// tool never reaches.
pub struct HistoryStore {
    path: PathBuf,
    entries: Vec<HistoryEntry>,
}

impl HistoryStore {
    /// Load the history from disk. A missing or unparseable file yields an
    /// empty history; corruption never propagates to the caller.
    pub fn load(path: PathBuf) -> Self {
        let entries = match read_file(&path) {
            Ok(content) if !content.trim().is_empty() => {
                serde_json::from_str(&content).unwrap_or_default()
            }
            _ => Vec::new(),
        };
        Self { path, entries }
    }

    /// Create an empty store (for testing and programmatic use)
    pub fn empty(path: PathBuf) -> Self {
        Self {
            path,
            entries: Vec::new(),
        }
    }

    /// Prepend an entry and synchronously rewrite the persisted collection.
    /// The entry is kept in memory even when the write fails, so a disk
    /// error costs durability, not the completed session on screen.
    pub fn append(&mut self, entry: HistoryEntry) -> Result<()> {
        self.entries.insert(0, entry);
        self.persist()
    }

    /// Completed sessions, newest-first
    pub fn list(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn persist(&self) -> Result<()> {
        let json = serde_json::to_string_pretty(&self.entries)?;
        atomic_write(&self.path, &json)
    }
}
