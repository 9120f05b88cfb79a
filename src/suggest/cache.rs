//! Per-query suggestion cache
//!
//! Keys are normalized queries (trimmed, lower-cased). The cache is a small
//! LRU: once `capacity` entries are held, inserting a new key evicts the
//! least recently used one. A capacity of zero disables eviction.

use std::collections::{HashMap, VecDeque};

use super::suggestion::SuggestionList;

pub const DEFAULT_CACHE_CAPACITY: usize = 200;

/// Cache key form of a query
pub fn normalize_query(query: &str) -> String {
    query.trim().to_lowercase()
}

#[derive(Debug, Clone)]
pub struct SuggestionCache {
    entries: HashMap<String, SuggestionList>,
    /// Keys from least to most recently used
    recency: VecDeque<String>,
    capacity: usize,
}

impl Default for SuggestionCache {
    fn default() -> Self {
        Self::new(DEFAULT_CACHE_CAPACITY)
    }
}

impl SuggestionCache {
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: HashMap::new(),
            recency: VecDeque::new(),
            capacity,
        }
    }

    pub fn unbounded() -> Self {
        Self::new(0)
    }

    /// Look up a query, marking it as recently used on a hit
    pub fn get(&mut self, query: &str) -> Option<&SuggestionList> {
        let key = normalize_query(query);
        if !self.entries.contains_key(&key) {
            return None;
        }
        self.touch(&key);
        self.entries.get(&key)
    }

    pub fn contains(&self, query: &str) -> bool {
        self.entries.contains_key(&normalize_query(query))
    }

    pub fn insert(&mut self, query: &str, suggestions: SuggestionList) {
        let key = normalize_query(query);
        if self.entries.insert(key.clone(), suggestions).is_some() {
            self.touch(&key);
            return;
        }

        self.recency.push_back(key);
        if self.capacity > 0 {
            while self.entries.len() > self.capacity {
                let Some(oldest) = self.recency.pop_front() else {
                    break;
                };
                self.entries.remove(&oldest);
                log::debug!("Evicted cached suggestions for {:?}", oldest);
            }
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.recency.clear();
    }

    fn touch(&mut self, key: &str) {
        if let Some(pos) = self.recency.iter().position(|k| k == key) {
            if let Some(k) = self.recency.remove(pos) {
                self.recency.push_back(k);
            }
        }
    }
}

#[cfg(test)]
#[path = "cache_tests.rs"]
mod cache_tests;
