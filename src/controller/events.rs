/// Navigation keys the search box reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavKey {
    Up,
    Down,
    Enter,
    Escape,
}

/// Everything a front end can tell the search box
///
/// Indices in `*HistoryItem` events refer to positions in the full history
/// list, not to the filtered view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    TextChanged(String),
    Focus,
    Blur,
    Key(NavKey),
    Submit,
    Clear,
    RemoveHistoryItem(usize),
    PickSuggestion(usize),
    HoverSuggestion(usize),
    PickHistoryItem(usize),
    VoiceSearch,
    ImageSearch,
    /// Skip the results: record the query, or a random pick if blank
    FeelingLucky,
}
