//! Local suggestion ranking
//!
//! Matches a query against a fixed corpus in three tiers (exact prefix,
//! substring, shared token). Within a tier entries keep corpus order, so the
//! output is fully determined by the query and the corpus.

use super::corpus;
use super::suggestion::{RankTier, Suggestion};

#[derive(Debug, Clone)]
pub struct MatchRanker {
    entries: Vec<String>,
    /// Lower-cased copy of `entries`, index-aligned
    lowered: Vec<String>,
}

impl Default for MatchRanker {
    fn default() -> Self {
        Self::new(corpus::default_corpus())
    }
}

impl MatchRanker {
    /// Build a ranker over `entries`
    ///
    /// Blank entries are dropped and case-insensitive duplicates collapse to
    /// their first occurrence, so ranked output never repeats itself.
    pub fn new(entries: Vec<String>) -> Self {
        let mut kept = Vec::with_capacity(entries.len());
        let mut lowered: Vec<String> = Vec::with_capacity(entries.len());

        for entry in entries {
            if entry.trim().is_empty() {
                continue;
            }
            let lower = entry.to_lowercase();
            if lowered.contains(&lower) {
                continue;
            }
            kept.push(entry);
            lowered.push(lower);
        }

        Self {
            entries: kept,
            lowered,
        }
    }

    pub fn corpus(&self) -> &[String] {
        &self.entries
    }

    /// Rank corpus entries against `query`
    ///
    /// Returns every matching entry, exact-prefix tier first, then partial,
    /// then word-overlap. A blank query matches nothing.
    pub fn rank(&self, query: &str) -> Vec<Suggestion> {
        let needle = query.to_lowercase();
        if needle.trim().is_empty() {
            return Vec::new();
        }
        let tokens: Vec<&str> = needle.split_whitespace().collect();

        let mut exact = Vec::new();
        let mut partial = Vec::new();
        let mut word = Vec::new();

        for (index, lower) in self.lowered.iter().enumerate() {
            let bucket = if lower.starts_with(&needle) {
                &mut exact
            } else if lower.contains(&needle) {
                &mut partial
            } else if tokens.iter().any(|token| lower.contains(token)) {
                &mut word
            } else {
                continue;
            };
            bucket.push(index);
        }

        let tiered = [
            (RankTier::Exact, exact),
            (RankTier::Partial, partial),
            (RankTier::WordMatch, word),
        ];

        tiered
            .into_iter()
            .flat_map(|(tier, indices)| {
                indices
                    .into_iter()
                    .map(move |index| Suggestion::new(self.entries[index].clone(), tier, index))
            })
            .collect()
    }
}

#[cfg(test)]
#[path = "ranker_tests.rs"]
mod ranker_tests;
