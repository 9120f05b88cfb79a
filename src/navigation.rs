//! Suggestion list navigation
//!
//! Tracks which suggestion (if any) is highlighted while the list is shown.
//! The selected index is either `None` (nothing highlighted, the `-1` of the
//! classic search-box model) or a valid index into the current list.

use crate::error::OmniboxError;
use crate::suggest::{Suggestion, SuggestionList};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum NavigationState {
    /// No list shown
    #[default]
    Idle,
    /// A list is shown; `selected` always indexes into `list`
    Listing {
        list: SuggestionList,
        selected: Option<usize>,
    },
}

impl NavigationState {
    pub fn new() -> Self {
        Self::Idle
    }

    /// Show a fresh list with nothing selected
    ///
    /// An empty list hides instead, since there is nothing to navigate.
    pub fn show(&mut self, list: SuggestionList) {
        if list.is_empty() {
            *self = Self::Idle;
        } else {
            *self = Self::Listing {
                list,
                selected: None,
            };
        }
    }

    pub fn hide(&mut self) {
        *self = Self::Idle;
    }

    /// Move the highlight down, stopping at the last item
    pub fn move_next(&mut self) {
        if let Self::Listing { list, selected } = self {
            let Some(last) = list.len().checked_sub(1) else {
                return;
            };
            *selected = Some(match *selected {
                Some(index) => (index + 1).min(last),
                None => 0,
            });
        }
    }

    /// Move the highlight up, stepping off the top back to no selection
    pub fn move_prev(&mut self) {
        if let Self::Listing { selected, .. } = self {
            *selected = match *selected {
                Some(0) | None => None,
                Some(index) => Some(index - 1),
            };
        }
    }

    /// Highlight `index` directly (pointer hover)
    pub fn pick(&mut self, index: usize) -> Result<(), OmniboxError> {
        match self {
            Self::Listing { list, selected } if index < list.len() => {
                *selected = Some(index);
                Ok(())
            }
            Self::Listing { list, .. } => Err(OmniboxError::IndexOutOfRange {
                index,
                len: list.len(),
            }),
            Self::Idle => Err(OmniboxError::IndexOutOfRange { index, len: 0 }),
        }
    }

    /// Text to submit: the highlighted suggestion, else `raw_input` as typed
    ///
    /// Returns `None` when nothing is highlighted and the input is blank.
    pub fn commit(&self, raw_input: &str) -> Option<String> {
        if let Some(suggestion) = self.selected() {
            return Some(suggestion.text().to_string());
        }
        if raw_input.trim().is_empty() {
            None
        } else {
            Some(raw_input.to_string())
        }
    }

    pub fn is_listing(&self) -> bool {
        matches!(self, Self::Listing { .. })
    }

    pub fn list(&self) -> Option<&SuggestionList> {
        match self {
            Self::Listing { list, .. } => Some(list),
            Self::Idle => None,
        }
    }

    pub fn selected_index(&self) -> Option<usize> {
        match self {
            Self::Listing { selected, .. } => *selected,
            Self::Idle => None,
        }
    }

    pub fn selected(&self) -> Option<&Suggestion> {
        match self {
            Self::Listing {
                list,
                selected: Some(index),
            } => list.get(*index),
            _ => None,
        }
    }
}

#[cfg(test)]
#[path = "navigation_tests.rs"]
mod navigation_tests;
