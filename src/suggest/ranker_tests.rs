//! Tests for MatchRanker

use super::*;
use proptest::prelude::*;

fn ranker(entries: &[&str]) -> MatchRanker {
    MatchRanker::new(entries.iter().map(|s| s.to_string()).collect())
}

fn texts(suggestions: &[Suggestion]) -> Vec<&str> {
    suggestions.iter().map(Suggestion::text).collect()
}

// =========================================================================
// Unit Tests
// =========================================================================

#[test]
fn test_prefix_match_lands_in_exact_tier() {
    let ranker = MatchRanker::default();
    let ranked = ranker.rank("java");

    let first = &ranked[0];
    assert_eq!(first.text(), "javascript tutorial");
    assert_eq!(first.tier(), RankTier::Exact);
}

#[test]
fn test_java_query_tiers() {
    let ranker = MatchRanker::default();
    let ranked = ranker.rank("java");

    let exact: Vec<&str> = ranked
        .iter()
        .filter(|s| s.tier() == RankTier::Exact)
        .map(Suggestion::text)
        .collect();
    assert_eq!(exact.len(), 7);
    assert!(exact.iter().all(|t| t.starts_with("javascript")));

    let partial: Vec<&str> = ranked
        .iter()
        .filter(|s| s.tier() == RankTier::Partial)
        .map(Suggestion::text)
        .collect();
    assert_eq!(partial, vec!["html css javascript"]);
}

#[test]
fn test_css_query_snapshot() {
    let ranker = MatchRanker::default();
    let ranked = ranker.rank("css");
    insta::assert_snapshot!(
        texts(&ranked).join(" | "),
        @"css grid | css flexbox | css animations | html css javascript | tailwind css"
    );
}

#[test]
fn test_query_is_case_insensitive() {
    let ranker = ranker(&["React Hooks", "react router"]);
    let ranked = ranker.rank("REACT");
    assert_eq!(texts(&ranked), vec!["React Hooks", "react router"]);
    assert!(ranked.iter().all(|s| s.tier() == RankTier::Exact));
}

#[test]
fn test_word_overlap_tier() {
    let ranker = ranker(&["vue js tutorial", "react hooks", "css grid"]);
    let ranked = ranker.rank("learn react");

    assert_eq!(texts(&ranked), vec!["react hooks"]);
    assert_eq!(ranked[0].tier(), RankTier::WordMatch);
}

#[test]
fn test_word_overlap_matches_any_token() {
    let ranker = ranker(&["git tutorial", "css grid", "sql tutorial"]);
    let ranked = ranker.rank("css tutorial");

    assert_eq!(texts(&ranked), vec!["git tutorial", "css grid", "sql tutorial"]);
    assert!(ranked.iter().all(|s| s.tier() == RankTier::WordMatch));
}

#[test]
fn test_tiers_keep_corpus_order() {
    let ranker = ranker(&["my api", "api b", "rest api", "api a"]);
    let ranked = ranker.rank("api");

    assert_eq!(texts(&ranked), vec!["api b", "api a", "my api", "rest api"]);
    assert_eq!(ranked[0].source_index(), 1);
    assert_eq!(ranked[2].source_index(), 0);
}

#[test]
fn test_blank_query_matches_nothing() {
    let ranker = MatchRanker::default();
    assert!(ranker.rank("").is_empty());
    assert!(ranker.rank("   ").is_empty());
}

#[test]
fn test_no_match_returns_empty() {
    let ranker = MatchRanker::default();
    assert!(ranker.rank("zzzqqq").is_empty());
}

#[test]
fn test_new_collapses_case_insensitive_duplicates() {
    let ranker = ranker(&["CSS Grid", "css grid", "", "  ", "css flexbox"]);
    assert_eq!(ranker.corpus(), &["CSS Grid".to_string(), "css flexbox".to_string()]);

    let ranked = ranker.rank("css");
    assert_eq!(texts(&ranked), vec!["CSS Grid", "css flexbox"]);
}

#[test]
fn test_unicode_entries() {
    let ranker = ranker(&["Ünïcödé search", "plain search"]);
    let ranked = ranker.rank("ünï");
    assert_eq!(texts(&ranked), vec!["Ünïcödé search"]);
}

// =========================================================================
// Property-Based Tests
// =========================================================================

fn corpus_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[a-cA-C ]{1,12}", 0..30)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn prop_output_is_unique_and_from_corpus(
        corpus in corpus_strategy(),
        query in "[a-cA-C ]{1,6}",
    ) {
        let ranker = MatchRanker::new(corpus.clone());
        let ranked = ranker.rank(&query);

        let mut seen = std::collections::HashSet::new();
        for suggestion in &ranked {
            prop_assert!(seen.insert(suggestion.text().to_lowercase()));
            prop_assert!(corpus.iter().any(|c| c == suggestion.text()));
        }
    }

    #[test]
    fn prop_tiers_are_in_precedence_order(
        corpus in corpus_strategy(),
        query in "[a-cA-C ]{1,6}",
    ) {
        let ranker = MatchRanker::new(corpus);
        let ranked = ranker.rank(&query);

        for pair in ranked.windows(2) {
            prop_assert!(pair[0].tier() <= pair[1].tier());
        }
    }

    #[test]
    fn prop_rank_is_deterministic(
        corpus in corpus_strategy(),
        query in "[a-cA-C ]{1,6}",
    ) {
        let ranker = MatchRanker::new(corpus);
        prop_assert_eq!(ranker.rank(&query), ranker.rank(&query));
    }
}
