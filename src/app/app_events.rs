use std::io;
use std::time::{Duration, Instant};

use ratatui::crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::app_state::App;
use crate::controller::{InputEvent, NavKey};

impl App {
    /// Wait up to `timeout` for terminal input and handle it
    pub fn handle_events(&mut self, timeout: Duration) -> io::Result<()> {
        if !event::poll(timeout)? {
            return Ok(());
        }
        match event::read()? {
            // Only key presses, to avoid duplicates on terminals that report releases
            Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                self.handle_key_event(key_event, Instant::now());
            }
            _ => {}
        }
        Ok(())
    }

    pub fn handle_key_event(&mut self, key: KeyEvent, now: Instant) {
        if self.handle_global_keys(key, now) {
            return;
        }

        let listing = self.search_box.navigation().is_listing();
        let show_recent = self.snapshot().show_recent;

        match key.code {
            KeyCode::Esc => {
                if listing {
                    self.send(InputEvent::Key(NavKey::Escape), now);
                } else {
                    self.should_quit = true;
                }
            }
            KeyCode::Down if listing => self.send(InputEvent::Key(NavKey::Down), now),
            KeyCode::Up if listing => self.send(InputEvent::Key(NavKey::Up), now),
            KeyCode::Down if show_recent => self.move_history_cursor(1),
            KeyCode::Up if show_recent => self.move_history_cursor(-1),
            KeyCode::Enter => match self.selected_history_entry() {
                Some(index) if show_recent => self.send(InputEvent::PickHistoryItem(index), now),
                _ => self.send(InputEvent::Key(NavKey::Enter), now),
            },
            KeyCode::Up | KeyCode::Down | KeyCode::Tab | KeyCode::BackTab => {}
            _ => {
                self.notice = None;
                if self.input.textarea.input(key) {
                    let text = self.query().to_string();
                    self.history_cursor = None;
                    self.send(InputEvent::TextChanged(text), now);
                }
            }
        }
    }

    /// Keys that work regardless of what is showing
    /// Returns true if the key was handled
    fn handle_global_keys(&mut self, key: KeyEvent, now: Instant) -> bool {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Char('c') if ctrl => {
                self.should_quit = true;
                true
            }
            KeyCode::Char('l') if ctrl => {
                self.history_cursor = None;
                self.send(InputEvent::Clear, now);
                true
            }
            KeyCode::Char('d') if ctrl => {
                if let Some(index) = self.selected_history_entry() {
                    self.send(InputEvent::RemoveHistoryItem(index), now);
                }
                true
            }
            KeyCode::F(2) => {
                self.send(InputEvent::VoiceSearch, now);
                true
            }
            KeyCode::F(3) => {
                self.send(InputEvent::ImageSearch, now);
                true
            }
            KeyCode::F(4) => {
                self.history_cursor = None;
                self.send(InputEvent::FeelingLucky, now);
                true
            }
            _ => false,
        }
    }

    /// Full-history index of the highlighted recent search
    fn selected_history_entry(&self) -> Option<usize> {
        let cursor = self.history_cursor?;
        self.snapshot().history.get(cursor).map(|(index, _)| *index)
    }

    fn move_history_cursor(&mut self, delta: isize) {
        let len = self.snapshot().history.len();
        if len == 0 {
            self.history_cursor = None;
            return;
        }

        self.history_cursor = match (self.history_cursor, delta) {
            (None, d) if d > 0 => Some(0),
            (None, _) => None,
            (Some(0), d) if d < 0 => None,
            (Some(i), d) if d < 0 => Some(i - 1),
            (Some(i), _) => Some((i + 1).min(len - 1)),
        };
    }
}

#[cfg(test)]
#[path = "app_events_tests.rs"]
mod app_events_tests;
