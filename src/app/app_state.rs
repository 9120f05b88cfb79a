use std::time::Instant;

use super::input_state::InputState;
use crate::controller::{InputEvent, SearchBox, ViewSnapshot};
use crate::history::KeyValueStore;

/// History backend chosen at startup (file or memory)
pub type AppStore = Box<dyn KeyValueStore>;

/// Application state
pub struct App {
    pub search_box: SearchBox<AppStore>,
    pub input: InputState,
    /// Highlighted row in the recent-searches panel
    pub history_cursor: Option<usize>,
    /// Transient message not owned by the search box (config warnings, errors)
    pub notice: Option<String>,
    pub should_quit: bool,
}

impl App {
    pub fn new(search_box: SearchBox<AppStore>, now: Instant) -> Self {
        let mut app = Self {
            search_box,
            input: InputState::new(),
            history_cursor: None,
            notice: None,
            should_quit: false,
        };
        // The input starts focused
        app.send(InputEvent::Focus, now);
        app
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn query(&self) -> &str {
        self.input.query()
    }

    pub fn snapshot(&self) -> ViewSnapshot {
        self.search_box.snapshot()
    }

    /// Advance debouncing and pick up worker results
    pub fn tick(&mut self, now: Instant) -> bool {
        let changed = self.search_box.tick(now);
        if changed {
            self.clamp_history_cursor();
        }
        changed
    }

    /// Forward an event to the search box and reconcile the input field
    pub fn send(&mut self, event: InputEvent, now: Instant) {
        match self.search_box.handle(event, now) {
            Ok(Some(outcome)) => {
                log::debug!("Showing {} result for {:?}", outcome.kind, outcome.query);
                self.history_cursor = None;
                self.notice = None;
            }
            Ok(None) => {}
            Err(e) => {
                log::warn!("Search box rejected event: {}", e);
                self.notice = Some(e.to_string());
            }
        }

        if self.input.query() != self.search_box.input() {
            let text = self.search_box.input().to_string();
            self.input.set_text(&text);
        }
        self.clamp_history_cursor();
    }

    /// Keep the recent-searches cursor on a visible row
    fn clamp_history_cursor(&mut self) {
        let snapshot = self.search_box.snapshot();
        if !snapshot.show_recent || snapshot.history.is_empty() {
            self.history_cursor = None;
        } else if let Some(cursor) = self.history_cursor {
            self.history_cursor = Some(cursor.min(snapshot.history.len() - 1));
        }
    }
}

#[cfg(test)]
#[path = "app_state_tests.rs"]
mod app_state_tests;
