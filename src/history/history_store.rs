use super::matcher::HistoryMatcher;
use super::storage::{self, KeyValueStore};
use crate::error::OmniboxError;

/// Maximum number of remembered searches
pub const MAX_HISTORY_ENTRIES: usize = 10;

/// Storage key for the history blob
pub const HISTORY_KEY: &str = "search_history";

/// Recent searches, most recent first
///
/// The in-memory list is the source of truth; every mutation is written
/// through to the backing store. Storage failures are logged and otherwise
/// ignored, so a broken store degrades to session-only history.
#[derive(Debug)]
pub struct HistoryStore<S> {
    entries: Vec<String>,
    storage: S,
    matcher: HistoryMatcher,
}

impl<S: KeyValueStore> HistoryStore<S> {
    /// Load persisted history from `storage`
    ///
    /// Missing, unreadable or malformed data yields an empty history. Loaded
    /// data is cleaned up (blank and repeated entries dropped, truncated to
    /// [`MAX_HISTORY_ENTRIES`]) so the invariants hold from the start.
    pub fn load(storage: S) -> Self {
        let entries = match storage.get(HISTORY_KEY) {
            Ok(Some(contents)) => {
                let mut entries = storage::parse_history(&contents);
                entries.retain(|e| !e.trim().is_empty());
                let mut entries = storage::deduplicate(&entries);
                entries.truncate(MAX_HISTORY_ENTRIES);
                entries
            }
            Ok(None) => Vec::new(),
            Err(e) => {
                log::warn!("Could not read search history: {}", e);
                Vec::new()
            }
        };

        Self {
            entries,
            storage,
            matcher: HistoryMatcher::new(),
        }
    }

    /// Fill an empty history with `defaults` (first launch)
    pub fn seed_if_empty(&mut self, defaults: &[&str]) {
        if !self.entries.is_empty() || defaults.is_empty() {
            return;
        }
        let seeded: Vec<String> = defaults.iter().map(|s| s.to_string()).collect();
        self.entries = storage::deduplicate(&seeded);
        self.entries.truncate(MAX_HISTORY_ENTRIES);
        self.persist();
    }

    /// Remember `query` as the most recent search
    ///
    /// Matching is exact (case-sensitive, as typed): an equal entry moves to
    /// the front rather than being duplicated. Blank queries are ignored and
    /// reported as `false`.
    pub fn record(&mut self, query: &str) -> bool {
        if query.trim().is_empty() {
            return false;
        }
        self.entries.retain(|e| e != query);
        self.entries.insert(0, query.to_string());
        self.entries.truncate(MAX_HISTORY_ENTRIES);
        self.persist();
        true
    }

    /// Remove the entry at `index`, returning it
    pub fn remove(&mut self, index: usize) -> Result<String, OmniboxError> {
        if index >= self.entries.len() {
            return Err(OmniboxError::IndexOutOfRange {
                index,
                len: self.entries.len(),
            });
        }
        let removed = self.entries.remove(index);
        self.persist();
        Ok(removed)
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.entries.get(index).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Indices of entries matching `query`, best match first
    pub fn filter(&self, query: &str) -> Vec<usize> {
        self.matcher.filter(query, &self.entries)
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    fn persist(&mut self) {
        let result = storage::encode_history(&self.entries)
            .and_then(|encoded| self.storage.set(HISTORY_KEY, &encoded));
        if let Err(e) = result {
            log::warn!("Could not save search history: {}", e);
        }
    }
}

#[cfg(test)]
#[path = "history_store_tests.rs"]
mod history_store_tests;
