//! Presentation helpers for suggestion rows: match highlighting, type
//! labels and icon categories. All pure functions over the row text.

use std::ops::Range;

/// Byte ranges of every case-insensitive occurrence of `query` in `text`
///
/// Occurrences do not overlap; the search resumes after each match.
/// Ranges always fall on `text` char boundaries.
pub fn match_ranges(text: &str, query: &str) -> Vec<Range<usize>> {
    let needle: Vec<char> = query.trim().chars().flat_map(char::to_lowercase).collect();
    if needle.is_empty() {
        return Vec::new();
    }

    // Lower-case char by char so every folded char maps back to its source span
    let mut folded: Vec<(char, usize, usize)> = Vec::with_capacity(text.len());
    for (start, ch) in text.char_indices() {
        let end = start + ch.len_utf8();
        for lower in ch.to_lowercase() {
            folded.push((lower, start, end));
        }
    }

    let mut ranges = Vec::new();
    let mut i = 0;
    while i + needle.len() <= folded.len() {
        let window = &folded[i..i + needle.len()];
        let is_match = window.iter().zip(&needle).all(|((c, _, _), n)| c == n);
        if is_match {
            let start = window[0].1;
            let end = window[needle.len() - 1].2;
            // Skip matches that start in the middle of a multi-char fold
            let clean_start = i == 0 || folded[i - 1].1 != start;
            if clean_start {
                ranges.push(start..end);
                i += needle.len();
                continue;
            }
        }
        i += 1;
    }

    ranges
}

/// Short type label shown next to a suggestion, if any applies
pub fn suggestion_label(text: &str) -> Option<&'static str> {
    let lower = text.to_lowercase();
    let label = if lower.contains("tutorial") {
        "Tutorial"
    } else if lower.contains("weather") {
        "Weather"
    } else if lower.contains("news") {
        "News"
    } else if lower.contains("translate") {
        "Translate"
    } else if lower.contains("calculator") {
        "Calculator"
    } else if ["programming", "javascript", "python"]
        .iter()
        .any(|k| lower.contains(k))
    {
        "Programming"
    } else {
        return None;
    };
    Some(label)
}

/// Icon category for a suggestion row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuggestionIcon {
    Weather,
    News,
    Translate,
    Calculator,
    Clock,
    Currency,
    Film,
    Music,
    Code,
    Graduation,
    Search,
}

impl SuggestionIcon {
    /// Single-cell glyph used by the terminal renderer
    pub fn glyph(self) -> &'static str {
        match self {
            SuggestionIcon::Weather => "☀",
            SuggestionIcon::News => "▤",
            SuggestionIcon::Translate => "⇄",
            SuggestionIcon::Calculator => "±",
            SuggestionIcon::Clock => "◷",
            SuggestionIcon::Currency => "$",
            SuggestionIcon::Film => "▶",
            SuggestionIcon::Music => "♪",
            SuggestionIcon::Code => "λ",
            SuggestionIcon::Graduation => "✎",
            SuggestionIcon::Search => "⌕",
        }
    }
}

pub fn suggestion_icon(text: &str) -> SuggestionIcon {
    let lower = text.to_lowercase();
    let has = |keywords: &[&str]| keywords.iter().any(|k| lower.contains(k));

    if has(&["weather"]) {
        SuggestionIcon::Weather
    } else if has(&["news"]) {
        SuggestionIcon::News
    } else if has(&["translate"]) {
        SuggestionIcon::Translate
    } else if has(&["calculator"]) {
        SuggestionIcon::Calculator
    } else if has(&["time", "clock"]) {
        SuggestionIcon::Clock
    } else if has(&["currency"]) {
        SuggestionIcon::Currency
    } else if has(&["movie", "film"]) {
        SuggestionIcon::Film
    } else if has(&["music"]) {
        SuggestionIcon::Music
    } else if has(&["programming", "code"]) {
        SuggestionIcon::Code
    } else if has(&["tutorial"]) {
        SuggestionIcon::Graduation
    } else {
        SuggestionIcon::Search
    }
}

#[cfg(test)]
#[path = "highlight_tests.rs"]
mod highlight_tests;
