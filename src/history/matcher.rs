use std::fmt;

use fuzzy_matcher::FuzzyMatcher;
use fuzzy_matcher::skim::SkimMatcherV2;

/// Fuzzy filter for the recent-searches panel
pub struct HistoryMatcher {
    matcher: SkimMatcherV2,
}

impl fmt::Debug for HistoryMatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HistoryMatcher").finish_non_exhaustive()
    }
}

impl Default for HistoryMatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl HistoryMatcher {
    pub fn new() -> Self {
        Self {
            matcher: SkimMatcherV2::default().ignore_case(),
        }
    }

    /// Indices of `entries` matching every whitespace-separated term of
    /// `query`, best total score first; ties keep recency order
    ///
    /// A blank query keeps every entry in its original order.
    pub fn filter(&self, query: &str, entries: &[String]) -> Vec<usize> {
        let terms: Vec<&str> = query.split_whitespace().collect();
        if terms.is_empty() {
            return (0..entries.len()).collect();
        }

        let mut scored: Vec<(usize, i64)> = entries
            .iter()
            .enumerate()
            .filter_map(|(index, entry)| self.score(entry, &terms).map(|s| (index, s)))
            .collect();

        // Stable sort, so equal scores stay most-recent-first
        scored.sort_by(|a, b| b.1.cmp(&a.1));
        scored.into_iter().map(|(index, _)| index).collect()
    }

    fn score(&self, entry: &str, terms: &[&str]) -> Option<i64> {
        terms
            .iter()
            .map(|term| self.matcher.fuzzy_match(entry, term))
            .sum()
    }
}

#[cfg(test)]
#[path = "matcher_tests.rs"]
mod matcher_tests;
