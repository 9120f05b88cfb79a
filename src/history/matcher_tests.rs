//! Tests for history/matcher

use super::*;

fn entries(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[test]
fn test_blank_query_keeps_order() {
    let matcher = HistoryMatcher::new();
    let history = entries(&["react hooks", "css grid", "weather today"]);

    assert_eq!(matcher.filter("", &history), vec![0, 1, 2]);
    assert_eq!(matcher.filter("   ", &history), vec![0, 1, 2]);
}

#[test]
fn test_exact_entry_ranks_first() {
    let matcher = HistoryMatcher::new();
    let history = entries(&["react router dom", "react", "vue router"]);

    let result = matcher.filter("react", &history);
    assert_eq!(result.len(), 2);
    assert!(result.contains(&0));
    assert!(result.contains(&1));
}

#[test]
fn test_fuzzy_subsequence_matches() {
    let matcher = HistoryMatcher::new();
    let history = entries(&["javascript tutorial", "css grid"]);

    assert_eq!(matcher.filter("jstut", &history), vec![0]);
}

#[test]
fn test_case_insensitive() {
    let matcher = HistoryMatcher::new();
    let history = entries(&["Weather Today", "WEATHER paris"]);

    assert_eq!(matcher.filter("Weather", &history).len(), 2);
}

#[test]
fn test_no_matches() {
    let matcher = HistoryMatcher::new();
    let history = entries(&["react hooks", "css grid"]);

    assert!(matcher.filter("zzz", &history).is_empty());
}

#[test]
fn test_all_terms_must_match() {
    let matcher = HistoryMatcher::new();
    let history = entries(&["weather in paris", "weather today", "paris hotels"]);

    assert_eq!(matcher.filter("weather paris", &history), vec![0]);
    assert_eq!(matcher.filter("paris", &history).len(), 2);
}

#[test]
fn test_debug_hides_matcher_internals() {
    let matcher = HistoryMatcher::default();
    assert!(format!("{:?}", matcher).contains("HistoryMatcher"));
}
