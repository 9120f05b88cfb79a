use std::fmt;

/// Upper bound on the number of suggestions shown at once
pub const MAX_SUGGESTIONS: usize = 8;

/// Priority bucket a suggestion was ranked into
///
/// Variants are declared in precedence order, so `Ord` sorts exact-prefix
/// matches first and remote items last.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RankTier {
    /// Corpus entry starts with the query
    Exact,
    /// Corpus entry contains the query somewhere after the start
    Partial,
    /// Corpus entry shares a query token
    WordMatch,
    /// Came from a remote source (augmentation or engine expansion)
    Remote,
}

impl fmt::Display for RankTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RankTier::Exact => write!(f, "exact"),
            RankTier::Partial => write!(f, "partial"),
            RankTier::WordMatch => write!(f, "word"),
            RankTier::Remote => write!(f, "remote"),
        }
    }
}

/// A single suggestion row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suggestion {
    text: String,
    tier: RankTier,
    source_index: usize,
}

impl Suggestion {
    /// `source_index` is the position in whichever list produced the text:
    /// the corpus for local tiers, the remote response for `Remote`.
    pub fn new(text: impl Into<String>, tier: RankTier, source_index: usize) -> Self {
        Self {
            text: text.into(),
            tier,
            source_index,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn tier(&self) -> RankTier {
        self.tier
    }

    pub fn source_index(&self) -> usize {
        self.source_index
    }
}

/// Ordered, capped, case-insensitively unique list of suggestions
///
/// The only way to add to a list is [`SuggestionList::push`], which keeps
/// the invariants: at most [`MAX_SUGGESTIONS`] items, no blank text, and no
/// two items whose text differs only by case.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SuggestionList {
    items: Vec<Suggestion>,
}

impl SuggestionList {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Append a suggestion, returning whether it was accepted
    pub fn push(&mut self, suggestion: Suggestion) -> bool {
        if self.is_full() || suggestion.text.trim().is_empty() || self.contains_text(&suggestion.text)
        {
            return false;
        }
        self.items.push(suggestion);
        true
    }

    /// Case-insensitive membership test
    pub fn contains_text(&self, text: &str) -> bool {
        let lowered = text.to_lowercase();
        self.items.iter().any(|s| s.text.to_lowercase() == lowered)
    }

    pub fn is_full(&self) -> bool {
        self.items.len() >= MAX_SUGGESTIONS
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Suggestion> {
        self.items.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Suggestion> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[Suggestion] {
        &self.items
    }

    pub fn texts(&self) -> Vec<&str> {
        self.items.iter().map(|s| s.text.as_str()).collect()
    }
}

impl FromIterator<Suggestion> for SuggestionList {
    /// Collects in order, silently dropping duplicates and anything past the cap
    fn from_iter<I: IntoIterator<Item = Suggestion>>(iter: I) -> Self {
        let mut list = SuggestionList::new();
        for suggestion in iter {
            if list.is_full() {
                break;
            }
            list.push(suggestion);
        }
        list
    }
}

impl<'a> IntoIterator for &'a SuggestionList {
    type Item = &'a Suggestion;
    type IntoIter = std::slice::Iter<'a, Suggestion>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[cfg(test)]
#[path = "suggestion_tests.rs"]
mod suggestion_tests;
