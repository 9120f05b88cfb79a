//! Suggestion orchestration
//!
//! Produces the list shown for a query: local ranking first, a few remote
//! augmentation items folded in after the strongest local hits, and two
//! engine expansions at the tail. Results are cached per normalized query,
//! and remote failures only ever shrink the list.

use std::time::Duration;

use super::cache::{DEFAULT_CACHE_CAPACITY, SuggestionCache, normalize_query};
use super::ranker::MatchRanker;
use super::suggestion::{RankTier, Suggestion, SuggestionList};
use crate::remote::{self, RemoteSuggestionSource};

/// Local suggestions placed ahead of remote augmentation items
const LOCAL_HEAD: usize = 5;
/// Remote augmentation items folded into the list
const REMOTE_AUGMENT_LIMIT: usize = 3;
/// Merged suggestions kept ahead of engine expansions
const EXPANSION_OFFSET: usize = 6;
/// Engine expansions appended at the tail
const EXPANSION_LIMIT: usize = 2;

pub const DEFAULT_REMOTE_TIMEOUT: Duration = Duration::from_millis(500);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrchestratorSettings {
    /// LRU bound for the suggestion cache, `0` for unbounded
    pub cache_capacity: usize,
    /// Upper bound on each remote call
    pub remote_timeout: Duration,
}

impl Default for OrchestratorSettings {
    fn default() -> Self {
        Self {
            cache_capacity: DEFAULT_CACHE_CAPACITY,
            remote_timeout: DEFAULT_REMOTE_TIMEOUT,
        }
    }
}

pub struct SuggestionOrchestrator<S> {
    ranker: MatchRanker,
    cache: SuggestionCache,
    source: S,
    remote_timeout: Duration,
}

impl<S: RemoteSuggestionSource> SuggestionOrchestrator<S> {
    pub fn new(ranker: MatchRanker, source: S, settings: OrchestratorSettings) -> Self {
        Self {
            ranker,
            cache: SuggestionCache::new(settings.cache_capacity),
            source,
            remote_timeout: settings.remote_timeout,
        }
    }

    pub fn cache(&self) -> &SuggestionCache {
        &self.cache
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn ranker(&self) -> &MatchRanker {
        &self.ranker
    }

    pub fn remote_timeout(&self) -> Duration {
        self.remote_timeout
    }

    /// Suggestions for `query`
    ///
    /// Blank queries yield an empty list and are never cached. A cache hit
    /// returns the stored list without touching the remote source.
    pub async fn get_suggestions(&mut self, query: &str) -> SuggestionList {
        let key = normalize_query(query);
        if key.is_empty() {
            return SuggestionList::new();
        }

        if let Some(cached) = self.cache.get(&key) {
            log::debug!("Suggestion cache hit for {:?}", key);
            return cached.clone();
        }

        let needle = query.trim();
        let local = self.ranker.rank(needle);

        let augmented = match remote::bounded(
            self.remote_timeout,
            self.source.fetch_augmented(needle),
        )
        .await
        {
            Ok(items) => items,
            Err(e) => {
                log::warn!("Augmented suggestions unavailable for {:?}: {}", needle, e);
                Vec::new()
            }
        };

        let merged = merge_local_and_remote(local, &augmented, &key);

        let suggestions = match remote::bounded(
            self.remote_timeout,
            self.source.fetch_mock_expansions(needle),
        )
        .await
        {
            Ok(expansions) => blend_expansions(&merged, &expansions),
            Err(e) => {
                log::warn!("Engine suggestions unavailable for {:?}: {}", needle, e);
                merged
            }
        };

        self.cache.insert(&key, suggestions.clone());
        suggestions
    }
}

/// First [`LOCAL_HEAD`] local hits, then up to [`REMOTE_AUGMENT_LIMIT`]
/// remote items containing `lowered_query`, then the remaining local hits
fn merge_local_and_remote(
    local: Vec<Suggestion>,
    remote: &[String],
    lowered_query: &str,
) -> SuggestionList {
    let remote_matches = remote
        .iter()
        .enumerate()
        .filter(|(_, text)| text.to_lowercase().contains(lowered_query))
        .take(REMOTE_AUGMENT_LIMIT)
        .map(|(index, text)| Suggestion::new(text.clone(), RankTier::Remote, index));

    let mut local = local.into_iter();
    let head: Vec<Suggestion> = local.by_ref().take(LOCAL_HEAD).collect();

    head.into_iter().chain(remote_matches).chain(local).collect()
}

/// First [`EXPANSION_OFFSET`] merged suggestions followed by up to
/// [`EXPANSION_LIMIT`] expansions not already present
fn blend_expansions(merged: &SuggestionList, expansions: &[String]) -> SuggestionList {
    let mut blended: SuggestionList = merged.iter().take(EXPANSION_OFFSET).cloned().collect();

    let mut added = 0;
    for (index, text) in expansions.iter().enumerate() {
        if added == EXPANSION_LIMIT {
            break;
        }
        if blended.push(Suggestion::new(text.clone(), RankTier::Remote, index)) {
            added += 1;
        }
    }

    blended
}

#[cfg(test)]
#[path = "orchestrator_tests.rs"]
mod orchestrator_tests;
