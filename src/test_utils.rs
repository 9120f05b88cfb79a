#[cfg(test)]
pub mod test_helpers {
    use std::time::{Duration, Instant};

    use crate::app::{App, AppStore};
    use crate::controller::SearchBox;
    use crate::history::{HistoryStore, MemoryStore};
    use crate::remote::MockRemoteSource;
    use crate::suggest::corpus::DEMO_HISTORY;
    use crate::suggest::{MatchRanker, OrchestratorSettings, SuggestionClient, SuggestionOrchestrator};
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    /// Search box backed by an offline worker, seeded demo history and no debounce
    pub fn test_search_box() -> SearchBox<AppStore> {
        let orchestrator = SuggestionOrchestrator::new(
            MatchRanker::default(),
            MockRemoteSource::offline(),
            OrchestratorSettings::default(),
        );
        let client = SuggestionClient::spawn(orchestrator);

        let store: AppStore = Box::new(MemoryStore::new());
        let mut history = HistoryStore::load(store);
        history.seed_if_empty(DEMO_HISTORY);

        SearchBox::new(client, history, Duration::ZERO)
    }

    pub fn test_app() -> App {
        App::new(test_search_box(), Instant::now())
    }

    pub fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    pub fn key_with_mods(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    /// Type `text` one character at a time
    pub fn type_str(app: &mut App, text: &str) {
        for c in text.chars() {
            app.handle_key_event(key(KeyCode::Char(c)), Instant::now());
        }
    }

    /// Tick the app until suggestions are showing
    ///
    /// Returns true if they arrived, false on timeout.
    pub fn wait_for_suggestions(app: &mut App, timeout_ms: u64) -> bool {
        let start = Instant::now();
        let timeout = Duration::from_millis(timeout_ms);

        while start.elapsed() < timeout {
            app.tick(Instant::now());
            if !app.snapshot().suggestions.is_empty() {
                return true;
            }
            std::thread::sleep(Duration::from_millis(5));
        }

        false
    }
}
