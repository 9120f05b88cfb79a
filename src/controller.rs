//! Search box controller
//!
//! [`SearchBox`] composes the debouncer, suggestion worker, navigation
//! state, history and classifier behind a single event entry point. It owns
//! no presentation state: front ends feed it [`InputEvent`]s, call
//! [`SearchBox::tick`] from their loop and draw whatever
//! [`SearchBox::snapshot`] returns.

mod events;

use std::time::{Duration, Instant};

use chrono::Local;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

pub use events::{InputEvent, NavKey};

use crate::capabilities::{ImageInputProvider, NoImageInput, NoVoiceInput, VoiceInputProvider};
use crate::classify::{SearchOutcome, dispatch};
use crate::debouncer::Debouncer;
use crate::error::OmniboxError;
use crate::history::{HistoryStore, KeyValueStore};
use crate::navigation::NavigationState;
use crate::suggest::corpus::default_corpus;
use crate::suggest::{Suggestion, SuggestionClient};

/// Everything a renderer needs for one frame
#[derive(Debug, Clone, PartialEq)]
pub struct ViewSnapshot {
    pub input: String,
    pub focused: bool,
    pub suggestions: Vec<Suggestion>,
    /// Query the visible suggestions were computed for
    pub matched_query: String,
    pub selected_index: Option<usize>,
    /// `(index into full history, entry)` filtered by the current input
    pub history: Vec<(usize, String)>,
    pub show_recent: bool,
    pub loading: bool,
    pub outcome: Option<SearchOutcome>,
    pub notification: Option<String>,
}

pub struct SearchBox<S> {
    input: String,
    focused: bool,
    debouncer: Debouncer<String>,
    client: SuggestionClient,
    navigation: NavigationState,
    matched_query: String,
    history: HistoryStore<S>,
    show_recent: bool,
    outcome: Option<SearchOutcome>,
    notification: Option<String>,
    voice: Box<dyn VoiceInputProvider>,
    image: Box<dyn ImageInputProvider>,
    /// Candidates for a blank "feeling lucky" search
    lucky_picks: Vec<String>,
    rng: StdRng,
}

impl<S: KeyValueStore> SearchBox<S> {
    pub fn new(client: SuggestionClient, history: HistoryStore<S>, debounce: Duration) -> Self {
        Self {
            input: String::new(),
            focused: false,
            debouncer: Debouncer::new(debounce),
            client,
            navigation: NavigationState::new(),
            matched_query: String::new(),
            history,
            show_recent: false,
            outcome: None,
            notification: None,
            voice: Box::new(NoVoiceInput),
            image: Box::new(NoImageInput),
            lucky_picks: default_corpus(),
            rng: StdRng::from_entropy(),
        }
    }

    pub fn with_voice_input(mut self, provider: Box<dyn VoiceInputProvider>) -> Self {
        self.voice = provider;
        self
    }

    pub fn with_image_input(mut self, provider: Box<dyn ImageInputProvider>) -> Self {
        self.image = provider;
        self
    }

    pub fn with_lucky_picks(mut self, picks: Vec<String>) -> Self {
        self.lucky_picks = picks;
        self
    }

    /// Make blank "feeling lucky" picks reproducible
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    /// Apply one input event
    ///
    /// Returns the dispatched outcome when the event performed a search.
    /// Blank submissions are a silent no-op; bad indices are reported.
    pub fn handle(
        &mut self,
        event: InputEvent,
        now: Instant,
    ) -> Result<Option<SearchOutcome>, OmniboxError> {
        match event {
            InputEvent::TextChanged(text) => {
                self.set_input(text, now);
                Ok(None)
            }
            InputEvent::Focus => {
                self.focus();
                Ok(None)
            }
            InputEvent::Blur => {
                self.focused = false;
                self.hide_suggestions();
                self.show_recent = false;
                Ok(None)
            }
            InputEvent::Key(NavKey::Down) => {
                self.navigation.move_next();
                Ok(None)
            }
            InputEvent::Key(NavKey::Up) => {
                self.navigation.move_prev();
                Ok(None)
            }
            InputEvent::Key(NavKey::Escape) => {
                self.hide_suggestions();
                self.show_recent = false;
                Ok(None)
            }
            InputEvent::Key(NavKey::Enter) | InputEvent::Submit => {
                let Some(query) = self.navigation.commit(&self.input) else {
                    return Ok(None);
                };
                ignore_blank(self.search(&query))
            }
            InputEvent::Clear => {
                self.clear();
                Ok(None)
            }
            InputEvent::RemoveHistoryItem(index) => {
                let removed = self.history.remove(index)?;
                log::debug!("Removed history entry {:?}", removed);
                Ok(None)
            }
            InputEvent::PickSuggestion(index) => {
                let text = self
                    .navigation
                    .list()
                    .and_then(|list| list.get(index))
                    .map(|s| s.text().to_string())
                    .ok_or(OmniboxError::IndexOutOfRange {
                        index,
                        len: self.navigation.list().map_or(0, |l| l.len()),
                    })?;
                ignore_blank(self.search(&text))
            }
            InputEvent::HoverSuggestion(index) => {
                self.navigation.pick(index)?;
                Ok(None)
            }
            InputEvent::PickHistoryItem(index) => {
                let text = self
                    .history
                    .get(index)
                    .map(str::to_string)
                    .ok_or(OmniboxError::IndexOutOfRange {
                        index,
                        len: self.history.len(),
                    })?;
                ignore_blank(self.search(&text))
            }
            InputEvent::VoiceSearch => self.voice_search(),
            InputEvent::ImageSearch => {
                self.image_search();
                Ok(None)
            }
            InputEvent::FeelingLucky => {
                self.feeling_lucky();
                Ok(None)
            }
        }
    }

    /// Perform a search for `query`
    ///
    /// Records it in history, hides suggestions, classifies and dispatches
    /// it, then clears the input. A blank query is rejected with
    /// [`OmniboxError::InvalidInput`] and changes nothing.
    pub fn search(&mut self, query: &str) -> Result<SearchOutcome, OmniboxError> {
        let query = query.trim();
        if query.is_empty() {
            return Err(OmniboxError::InvalidInput);
        }

        self.history.record(query);
        self.hide_suggestions();
        self.debouncer.cancel();

        let outcome = dispatch(query, Local::now());
        log::debug!("Search {:?} dispatched as {}", query, outcome.kind);

        self.input.clear();
        self.show_recent = self.focused;
        self.notification = None;
        self.outcome = Some(outcome.clone());
        Ok(outcome)
    }

    /// Advance time: fire a due debounced lookup and apply fresh suggestions
    ///
    /// Returns true when the visible state changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        let mut changed = false;

        if let Some(query) = self.debouncer.poll(now) {
            self.client.request(&query);
            changed = true;
        }

        if let Some(response) = self.client.poll() {
            if self.focused && !self.input.trim().is_empty() {
                self.navigation.show(response.suggestions);
                self.matched_query = response.query;
                self.show_recent = false;
            }
            changed = true;
        }

        changed
    }

    /// How long the caller may wait before the next [`tick`](Self::tick) matters
    pub fn time_until_tick(&self, now: Instant) -> Option<Duration> {
        self.debouncer.time_until_ready(now)
    }

    pub fn snapshot(&self) -> ViewSnapshot {
        let suggestions = self
            .navigation
            .list()
            .map(|list| list.as_slice().to_vec())
            .unwrap_or_default();

        let history = self
            .history
            .filter(&self.input)
            .into_iter()
            .filter_map(|i| self.history.get(i).map(|text| (i, text.to_string())))
            .collect();

        ViewSnapshot {
            input: self.input.clone(),
            focused: self.focused,
            suggestions,
            matched_query: self.matched_query.clone(),
            selected_index: self.navigation.selected_index(),
            history,
            show_recent: self.show_recent,
            loading: self.client.is_loading() || self.debouncer.is_pending(),
            outcome: self.outcome.clone(),
            notification: self.notification.clone(),
        }
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn navigation(&self) -> &NavigationState {
        &self.navigation
    }

    pub fn history(&self) -> &HistoryStore<S> {
        &self.history
    }

    pub fn outcome(&self) -> Option<&SearchOutcome> {
        self.outcome.as_ref()
    }

    pub fn dismiss_notification(&mut self) {
        self.notification = None;
    }

    fn set_input(&mut self, text: String, now: Instant) {
        let blank = text.trim().is_empty();
        self.input = text;

        if blank {
            self.debouncer.cancel();
            self.hide_suggestions();
            self.show_recent = self.focused;
        } else {
            self.debouncer.call(self.input.clone(), now);
            self.show_recent = false;
        }
    }

    fn focus(&mut self) {
        self.focused = true;
        if self.input.trim().is_empty() {
            self.show_recent = true;
        } else {
            self.debouncer.cancel();
            self.client.request(&self.input);
        }
    }

    fn clear(&mut self) {
        self.input.clear();
        self.debouncer.cancel();
        self.hide_suggestions();
        self.show_recent = self.focused;
    }

    /// Hide the list and make any in-flight lookup stale
    fn hide_suggestions(&mut self) {
        self.navigation.hide();
        self.client.invalidate();
        self.matched_query.clear();
    }

    fn voice_search(&mut self) -> Result<Option<SearchOutcome>, OmniboxError> {
        if !self.voice.is_available() {
            self.notification = Some(
                "Voice search is not supported on this system".to_string(),
            );
            return Ok(None);
        }

        match self.voice.listen() {
            Ok(transcript) => {
                self.input = transcript.clone();
                ignore_blank(self.search(&transcript))
            }
            Err(e) => {
                log::warn!("Voice search failed: {}", e);
                self.notification = Some(e.to_string());
                Ok(None)
            }
        }
    }

    fn image_search(&mut self) {
        if !self.image.is_available() {
            self.notification = Some(
                "Image search is not supported on this system".to_string(),
            );
            return;
        }

        self.notification = match self.image.pick_image() {
            Ok(Some(path)) => {
                let name = path
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_else(|| path.display().to_string());
                Some(format!("Image search selected: {}", name))
            }
            Ok(None) => None,
            Err(e) => {
                log::warn!("Image search failed: {}", e);
                Some(e.to_string())
            }
        };
    }

    /// Record the typed query, or a random pick when the box is blank
    fn feeling_lucky(&mut self) {
        let typed = self.input.trim();
        let term = if !typed.is_empty() {
            typed.to_string()
        } else if let Some(pick) = self.lucky_picks.choose(&mut self.rng) {
            pick.clone()
        } else {
            return;
        };

        self.history.record(&term);
        log::debug!("Feeling lucky with {:?}", term);
        self.clear();
        self.focus();
        self.outcome = None;
        self.notification = Some(format!("I'm Feeling Lucky: \"{}\"", term));
    }
}

/// Blank searches are a no-op at the event level
fn ignore_blank(
    result: Result<SearchOutcome, OmniboxError>,
) -> Result<Option<SearchOutcome>, OmniboxError> {
    match result {
        Ok(outcome) => Ok(Some(outcome)),
        Err(OmniboxError::InvalidInput) => Ok(None),
        Err(e) => Err(e),
    }
}

#[cfg(test)]
#[path = "controller_tests.rs"]
mod controller_tests;
