//! Tests for query classification

use super::*;
use proptest::prelude::*;

#[test]
fn test_classify_examples() {
    assert_eq!(classify("weather in paris"), ResultKind::Weather);
    assert_eq!(classify("2+2"), ResultKind::Calculator);
    assert_eq!(classify("what time is it"), ResultKind::Time);
    assert_eq!(classify("translate hello"), ResultKind::Translate);
    assert_eq!(classify("xyz"), ResultKind::General);
}

#[test]
fn test_classify_is_case_insensitive() {
    assert_eq!(classify("WEATHER Today"), ResultKind::Weather);
    assert_eq!(classify("Calculator online"), ResultKind::Calculator);
    assert_eq!(classify("Time Zones"), ResultKind::Time);
}

#[test]
fn test_weather_wins_over_later_rules() {
    assert_eq!(classify("weather time"), ResultKind::Weather);
    assert_eq!(classify("translate weather"), ResultKind::Weather);
}

#[test]
fn test_calculator_wins_over_time() {
    assert_eq!(classify("calculator time"), ResultKind::Calculator);
    assert_eq!(classify("12*3 times"), ResultKind::Calculator);
}

#[test]
fn test_arithmetic_must_lead_the_query() {
    assert_eq!(classify("12/4"), ResultKind::Calculator);
    assert_eq!(classify("100-1 apples"), ResultKind::Calculator);
    assert_eq!(classify("what is 2+2"), ResultKind::General);
    assert_eq!(classify(" 2+2"), ResultKind::General);
}

#[test]
fn test_arithmetic_needs_digits_on_both_sides() {
    assert_eq!(classify("2+"), ResultKind::General);
    assert_eq!(classify("+2"), ResultKind::General);
    assert_eq!(classify("2 + 2"), ResultKind::General);
    assert_eq!(classify("2++2"), ResultKind::General);
}

#[test]
fn test_keyword_inside_a_word_still_matches() {
    // Matching is by substring, not by whole word
    assert_eq!(classify("rust lifetimes"), ResultKind::Time);
    assert_eq!(classify("overweather"), ResultKind::Weather);
}

#[test]
fn test_empty_query_is_general() {
    assert_eq!(classify(""), ResultKind::General);
}

#[test]
fn test_rich_general_threshold() {
    assert!(!is_rich_general("abc"));
    assert!(is_rich_general("abcd"));
    assert!(!is_rich_general("été"));
}

#[test]
fn test_result_kind_display() {
    assert_eq!(ResultKind::Calculator.to_string(), "calculator");
    assert_eq!(ResultKind::General.to_string(), "general");
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Anything mentioning weather is a weather query
    #[test]
    fn prop_weather_keyword_always_wins(prefix in "[a-z0-9 +*/-]{0,10}", suffix in "[a-z ]{0,10}") {
        let query = format!("{}weather{}", prefix, suffix);
        prop_assert_eq!(classify(&query), ResultKind::Weather);
    }

    #[test]
    fn prop_leading_binary_arithmetic_is_calculator(a in 0u32..10_000, b in 0u32..10_000, op in "[-+*/]", tail in "[a-z ]{0,8}") {
        let query = format!("{}{}{}{}", a, op, b, tail);
        prop_assume!(!query.contains("weather"));
        prop_assert_eq!(classify(&query), ResultKind::Calculator);
    }

    /// Classification is total
    #[test]
    fn prop_classify_never_panics(query in "\\PC{0,40}") {
        let _ = classify(&query);
    }
}
